use crate::form::{FormFields, Style};

/// Multipart field carrying the masked image data URI (or nothing).
pub const FIELD_IMAGE_FILE: &str = "imageFile";
/// Multipart field carrying the style label.
pub const FIELD_STYLE: &str = "style";
/// Multipart field carrying the primary color.
pub const FIELD_PRIMARY_COLOR: &str = "pColor";
/// Multipart field carrying the secondary color.
pub const FIELD_SECONDARY_COLOR: &str = "sColor";

/// Everything sent to the generation endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Mask payload as a data URI, or empty when no mask was produced.
    pub image_file: String,
    /// Selected style, sent as its label.
    pub style: Style,
    /// Primary color text.
    pub p_color: String,
    /// Secondary color text.
    pub s_color: String,
}

impl SubmissionRequest {
    /// Assemble a request from the mask payload (if any) and the form fields.
    pub fn new(image_file: Option<String>, form: &FormFields) -> Self {
        Self {
            image_file: image_file.unwrap_or_default(),
            style: form.style,
            p_color: form.primary_color.clone(),
            s_color: form.secondary_color.clone(),
        }
    }

    /// Text fields in submission order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            (FIELD_IMAGE_FILE, self.image_file.as_str()),
            (FIELD_STYLE, self.style.as_str()),
            (FIELD_PRIMARY_COLOR, self.p_color.as_str()),
            (FIELD_SECONDARY_COLOR, self.s_color.as_str()),
        ]
    }
}

/// One generated variant returned by the endpoint.
///
/// Only `url` is shown; the other fields are carried along untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerationResult {
    /// Inline base64 preview, often empty.
    #[serde(default)]
    pub b64_json: String,
    /// Prompt as rewritten by the generator.
    #[serde(default)]
    pub revised_prompt: String,
    /// Location of the generated image.
    pub url: String,
}

#[cfg(test)]
#[path = "../../tests/unit/submit/request.rs"]
mod tests;
