use std::{fmt, str::FromStr};

use crate::foundation::error::MaskformError;

/// Base style offered by the form.
///
/// `Placeholder` is the unset choice. It is still submitted, as its literal label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Style {
    /// "Select a base style".
    #[default]
    #[serde(rename = "Select a base style")]
    Placeholder,
    /// "Contemporary".
    Contemporary,
    /// "Minimalistic".
    Minimalistic,
    /// "Classic".
    Classic,
    /// "Eco-Friendly".
    #[serde(rename = "Eco-Friendly")]
    EcoFriendly,
}

impl Style {
    /// Every option, in display order.
    pub const ALL: [Style; 5] = [
        Style::Placeholder,
        Style::Contemporary,
        Style::Minimalistic,
        Style::Classic,
        Style::EcoFriendly,
    ];

    /// Wire value, identical to the option label.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Placeholder => "Select a base style",
            Style::Contemporary => "Contemporary",
            Style::Minimalistic => "Minimalistic",
            Style::Classic => "Classic",
            Style::EcoFriendly => "Eco-Friendly",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = MaskformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| MaskformError::validation(format!("unknown style '{s}'")))
    }
}

/// Free-text inputs of the form. Nothing here is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormFields {
    /// Selected base style.
    pub style: Style,
    /// Primary color, as typed.
    pub primary_color: String,
    /// Secondary color, as typed.
    pub secondary_color: String,
}

#[cfg(test)]
#[path = "../tests/unit/form/fields.rs"]
mod tests;
