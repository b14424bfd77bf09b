//! Browser-side capabilities: smooth scrolling and `setTimeout`.

use std::time::Duration;

use leptos::prelude::*;
use tracing::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::Anchor;
use crate::error::SiteError;
use crate::state::{Cancel, Scheduler};

/// Shared "scroll to this section" capability. Created once by the root
/// component and handed to every section that links elsewhere on the page.
pub type ScrollToSection = Callback<Anchor>;

/// Smooth-scroll the section with `anchor`'s id into view.
pub fn scroll_to_anchor(anchor: Anchor) -> Result<(), SiteError> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;
    let element = document
        .get_element_by_id(anchor.id())
        .ok_or(SiteError::AnchorNotFound(anchor.id()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Build the page's [`ScrollToSection`]. A missing target is not an error
/// the visitor should see, so it is only logged.
pub fn section_scroller() -> ScrollToSection {
    Callback::new(|anchor: Anchor| {
        debug!(%anchor, "scroll requested");
        if let Err(err) = scroll_to_anchor(anchor) {
            debug!(%anchor, error = %err, "scroll skipped");
        }
    })
}

/// `setTimeout` through Leptos' timer helpers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce() + 'static>,
    ) -> Result<TimeoutHandle, SiteError> {
        set_timeout_with_handle(task, delay).map_err(|err| SiteError::Timer(format!("{err:?}")))
    }
}

impl Cancel for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}
