use crate::{
    assets::SourceImage,
    foundation::core::{DisplayOffset, Point},
    form::{FormFields, Style},
    mask::{compositor::mask_image, encode::MaskedImage},
    selection::RectTracker,
    submit::request::{GenerationResult, SubmissionRequest},
};

/// All state behind the form. Owned by one caller and only changed through [`update`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Image chosen by the user, if any.
    pub original_image: Option<SourceImage>,
    /// Drag gesture over the image.
    pub selection: RectTracker,
    /// Selection outline is suppressed since the last mask, until the next drag starts.
    pub outline_hidden: bool,
    /// Result of the most recent mask invocation.
    ///
    /// Not refreshed when the selection changes afterwards.
    pub masked: Option<MaskedImage>,
    /// Style and color inputs.
    pub form: FormFields,
    /// A submission is in flight.
    pub loading: bool,
    /// Results of the last successful submission.
    pub results: Vec<GenerationResult>,
}

/// A discrete user or network event.
#[derive(Clone, Debug)]
pub enum Event {
    /// A file was picked and decoded.
    FileChosen(SourceImage),
    /// Pointer pressed over the image.
    PointerDown(Point),
    /// Pointer moved over the image.
    PointerMove(Point),
    /// Pointer released.
    PointerUp,
    /// The Mask button was pressed while the image was displayed at `DisplayOffset`.
    MaskRequested(DisplayOffset),
    /// Style select changed.
    StyleChanged(Style),
    /// Primary color input changed.
    PrimaryColorChanged(String),
    /// Secondary color input changed.
    SecondaryColorChanged(String),
    /// The form was submitted.
    SubmitRequested,
    /// The endpoint answered.
    SubmissionSucceeded(Vec<GenerationResult>),
    /// The request failed; the reason is only logged.
    SubmissionFailed(String),
    /// The Clear button was pressed.
    Cleared,
}

/// Work the caller must perform after an [`update`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Send this request and report back with a submission event.
    Submit(SubmissionRequest),
}

/// Apply one event to the state.
pub fn update(state: &mut AppState, event: Event) -> Effect {
    match event {
        Event::FileChosen(image) => {
            state.original_image = Some(image);
        }
        Event::PointerDown(p) => {
            if state.original_image.is_some() {
                state.outline_hidden = false;
                state.selection.begin_drag(p);
            }
        }
        Event::PointerMove(p) => {
            if state.original_image.is_some() {
                state.selection.update_drag(p);
            }
        }
        Event::PointerUp => state.selection.end_drag(),
        Event::MaskRequested(offset) => apply_mask(state, offset),
        Event::StyleChanged(style) => state.form.style = style,
        Event::PrimaryColorChanged(c) => state.form.primary_color = c,
        Event::SecondaryColorChanged(c) => state.form.secondary_color = c,
        Event::SubmitRequested => {
            state.loading = true;
            let payload = state.masked.as_ref().map(MaskedImage::to_data_uri);
            return Effect::Submit(SubmissionRequest::new(payload, &state.form));
        }
        Event::SubmissionSucceeded(results) => {
            tracing::debug!(count = results.len(), "generation results received");
            state.results = results;
            state.loading = false;
        }
        Event::SubmissionFailed(reason) => {
            tracing::warn!(%reason, "generation request failed");
            state.loading = false;
        }
        Event::Cleared => {
            *state = AppState::default();
        }
    }
    Effect::None
}

fn apply_mask(state: &mut AppState, offset: DisplayOffset) {
    let Some(image) = &state.original_image else {
        return;
    };
    state.outline_hidden = true;
    match mask_image(image, state.selection.rect(), offset) {
        Ok(Some(masked)) => state.masked = Some(masked),
        Ok(None) => {}
        Err(err) => tracing::warn!(error = %err, "masking failed, keeping previous mask"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/reducer.rs"]
mod tests;
