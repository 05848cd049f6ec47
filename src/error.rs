//! Error types
//!
//! Layout never fails. The errors here describe asynchronous resource
//! failures, which are reported through [`report`] instead of being returned
//! up the widget tree.

use thiserror::Error;

/// Non-fatal failures surfaced by widgets.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// Text shaping for a label did not complete.
    #[error("failed to shape text {text:?}: {reason}")]
    TextShaping { text: String, reason: String },

    /// A texture requested by a widget could not be loaded.
    #[error("failed to load texture from {source_path}: {reason}")]
    TextureLoad { source_path: String, reason: String },
}

/// Report a non-fatal failure to the host application.
///
/// The failure is logged as a warning; the widget keeps its previous state.
pub fn report(error: &UiError) {
    tracing::warn!("{}", error);
}
