use crate::{selection::SelectionOverlay, state::reducer::AppState};

/// Where the page should scroll after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    /// The loading spinner.
    Loader,
    /// The result list.
    Results,
}

/// One line of the result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultLine {
    /// `"{n} - {url}"`, 1-based.
    pub label: String,
    /// Opened in a new browsing context when activated.
    pub link: String,
}

/// Everything needed to draw the page; derived from [`AppState`] alone.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    /// Selection outline over the image.
    pub selection: SelectionOverlay,
    /// Image, Mask button and preview canvas are shown.
    pub show_image_panel: bool,
    /// Last mask payload as a data URI.
    pub masked_preview: Option<String>,
    /// Spinner is shown.
    pub loading: bool,
    /// Result list, in endpoint order.
    pub results: Vec<ResultLine>,
    /// Clear button is shown.
    pub show_clear: bool,
    /// Scroll request, if any.
    pub scroll_target: Option<ScrollTarget>,
}

/// Derive the page presentation from state.
pub fn view(state: &AppState) -> View {
    let results: Vec<ResultLine> = state
        .results
        .iter()
        .enumerate()
        .map(|(i, r)| ResultLine {
            label: format!("{} - {}", i + 1, r.url),
            link: r.url.clone(),
        })
        .collect();

    let scroll_target = if state.loading {
        Some(ScrollTarget::Loader)
    } else if !results.is_empty() {
        Some(ScrollTarget::Results)
    } else {
        None
    };

    let mut selection = state.selection.overlay();
    selection.visible &= !state.outline_hidden;

    View {
        selection,
        show_image_panel: state.original_image.is_some(),
        masked_preview: state.masked.as_ref().map(|m| m.to_data_uri()),
        loading: state.loading,
        show_clear: !results.is_empty(),
        results,
        scroll_target,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/view.rs"]
mod tests;
