//! `maskform` holds the logic behind an image-customization form.
//!
//! A user loads an image, drags a rectangle over it, masks that region out, picks a style and two
//! colors, and submits everything to a generation endpoint that answers with result URLs.
//!
//! - [`mask_image`] is the core: it redraws the displayed image and punches a transparent hole
//!   where the drag rectangle lies, producing a PNG [`MaskedImage`].
//! - [`AppState`] + [`update`] are the single-writer form state; [`view`] derives presentation.
//! - [`Session`] runs the reducer against a [`Transport`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod foundation;
mod form;
mod mask;
mod selection;
mod session;
mod state;
mod submit;

pub use assets::SourceImage;
pub use assets::decode::{decode_image, open_image};
pub use config::{Config, SERVER_URL_ENV};
pub use form::{FormFields, Style};
pub use foundation::core::{
    DisplayOffset, MAX_SURFACE_PIXELS, Point, ViewportRect, validate_surface,
};
pub use foundation::error::{MaskformError, MaskformResult};
pub use mask::compositor::{ClearRegion, clear_region, mask_image};
pub use mask::encode::{MaskedImage, PNG_DATA_URI_PREFIX};
pub use selection::{RectTracker, SelectionOverlay};
pub use session::Session;
pub use state::reducer::{AppState, Effect, Event, update};
pub use state::view::{ResultLine, ScrollTarget, View, view};
pub use submit::request::{
    FIELD_IMAGE_FILE, FIELD_PRIMARY_COLOR, FIELD_SECONDARY_COLOR, FIELD_STYLE, GenerationResult,
    SubmissionRequest,
};
pub use submit::transport::{HttpTransport, InMemoryTransport, Transport};
