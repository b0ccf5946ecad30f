//! Failures reported by host capabilities.
//!
//! None of these stop the controller: each one skips the step that hit it
//! and is logged.

/// Error from a [`PreferenceStore`](crate::host::PreferenceStore) or
/// [`ThemeDocument`](crate::host::ThemeDocument) call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The environment exposes no persistent storage (disabled, private mode).
    #[error("preference storage unavailable")]
    StorageUnavailable,
    /// Storage rejected a read or write.
    #[error("preference storage error: {0}")]
    Storage(String),
    /// A DOM mutation threw.
    #[error("document error: {0}")]
    Dom(String),
}
