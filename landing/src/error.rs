//! Error type for the landing page.
//!
//! Nothing here is ever shown to a visitor. Handlers at the UI boundary log
//! and drop these; the only user-facing failure (an empty required field)
//! never reaches Rust because the browser blocks the submit.

/// Everything that can go wrong between a click and the DOM.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    /// `window` is unavailable (not running in a browser).
    #[error("no browser window available")]
    NoWindow,

    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,

    /// A scroll target is not present in the rendered page.
    #[error("no element with id `{0}` on this page")]
    AnchorNotFound(&'static str),

    /// A string did not name one of the service tabs.
    #[error("unknown service `{0}`")]
    UnknownService(String),

    /// The browser refused to schedule a timer.
    #[error("failed to schedule timer: {0}")]
    Timer(String),

    /// The console log subscriber could not be installed.
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}
