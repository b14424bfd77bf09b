use leptos::prelude::*;
use tracing::{info, warn};

use crate::config::CONFIRMATION_DELAY;
use crate::dom::BrowserScheduler;
use crate::state::{ConfirmationTimer, Draft, FormState, Scheduler};

/// Reactive handle for one mock form: field values, confirmation flag and
/// the timer that hides the confirmation again.
///
/// Inputs are uncontrolled. `on:input` mirrors them into the draft, and a
/// submit resets the `<form>` element itself.
pub(crate) struct MockForm<D: 'static, S: Scheduler + 'static = BrowserScheduler> {
    state: RwSignal<FormState<D>>,
    timer: StoredValue<ConfirmationTimer<S>, LocalStorage>,
}

impl<D: 'static, S: Scheduler + 'static> Clone for MockForm<D, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: 'static, S: Scheduler + 'static> Copy for MockForm<D, S> {}

impl<D: Draft + Send + Sync + 'static> MockForm<D> {
    pub(crate) fn new() -> Self {
        Self::with_scheduler(BrowserScheduler)
    }
}

impl<D: Draft + Send + Sync + 'static, S: Scheduler + 'static> MockForm<D, S> {
    /// Create the form state in the current owner. The pending timer is
    /// cancelled when the owner is cleaned up.
    pub(crate) fn with_scheduler(scheduler: S) -> Self {
        let state = RwSignal::new(FormState::default());
        let timer = StoredValue::new_local(ConfirmationTimer::new(scheduler, CONFIRMATION_DELAY));
        on_cleanup(move || {
            timer.try_update_value(|t| t.disarm());
        });
        Self { state, timer }
    }

    pub(crate) fn edit(self, f: impl FnOnce(&mut D)) {
        self.state.update(|s| f(&mut s.draft));
    }

    pub(crate) fn confirming(self) -> bool {
        self.state.with(|s| s.is_confirming())
    }

    /// Submit handler. Only runs once the browser's required-field checks
    /// pass; nothing leaves the page.
    pub(crate) fn submit(self, ev: leptos::ev::SubmitEvent) {
        ev.prevent_default();
        event_target::<web_sys::HtmlFormElement>(&ev).reset();
        self.accept();
    }

    /// Drop the draft, show the confirmation and schedule its expiry.
    fn accept(self) {
        let Some(ticket) = self.state.try_update(|s| s.submit().1) else {
            return;
        };

        let state = self.state;
        let armed = self.timer.try_update_value(|t| {
            let delay = t.delay();
            t.arm(move || {
                state.try_update(|s| s.expire(ticket));
            })
            .map(|()| delay)
        });
        match armed {
            Some(Ok(delay)) => {
                info!(
                    form = D::FORM,
                    delay_ms = delay.as_millis() as u64,
                    "submission acknowledged"
                );
            }
            Some(Err(err)) => {
                warn!(form = D::FORM, error = %err, "submission acknowledged, confirmation will not auto-hide");
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ServiceKey;
    use crate::state::confirmation::manual::ManualClock;
    use crate::state::{ContactDraft, QuoteDraft};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn filled_quote(clock: &ManualClock) -> MockForm<QuoteDraft, ManualClock> {
        let form: MockForm<QuoteDraft, ManualClock> = MockForm::with_scheduler(clock.clone());
        form.edit(|d| {
            d.origin = "Dammam".into();
            d.destination = "Dubai".into();
            d.service = ServiceKey::Freight;
            d.volume = "10".into();
        });
        form
    }

    fn draft<D: Draft + Clone + Send + Sync + 'static, S: Scheduler + 'static>(
        form: MockForm<D, S>,
    ) -> D {
        form.state.with_untracked(|s| s.draft.clone())
    }

    #[test]
    fn submit_confirms_then_hides_after_delay() {
        let owner = Owner::new();
        owner.with(|| {
            let clock = ManualClock::default();
            let form = filled_quote(&clock);

            form.accept();
            assert!(form.confirming());
            assert_eq!(draft(form), QuoteDraft::default());
            assert_eq!(clock.pending(), 1);

            clock.advance(CONFIRMATION_DELAY - Duration::from_millis(1));
            assert!(form.confirming());

            clock.advance(Duration::from_millis(1));
            assert!(!form.confirming());
            assert_eq!(clock.pending(), 0);
        });
    }

    #[test]
    fn resubmit_gets_a_full_window() {
        let owner = Owner::new();
        owner.with(|| {
            let clock = ManualClock::default();
            let form = filled_quote(&clock);

            form.accept();
            clock.advance(Duration::from_secs(3));
            form.accept();
            assert_eq!(clock.pending(), 1);

            clock.advance(Duration::from_secs(3));
            assert!(form.confirming());

            clock.advance(Duration::from_secs(2));
            assert!(!form.confirming());
        });
    }

    #[test]
    fn quote_and_contact_confirm_independently() {
        let owner = Owner::new();
        owner.with(|| {
            let clock = ManualClock::default();
            let quote = filled_quote(&clock);
            let contact = MockForm::<ContactDraft, _>::with_scheduler(clock.clone());
            contact.edit(|d| {
                d.name = "Sara".into();
                d.email = "sara@example.com".into();
                d.message = "Cold storage in Jebel Ali?".into();
            });

            contact.accept();
            assert!(contact.confirming());
            assert!(!quote.confirming());
            assert_eq!(draft(quote).origin, "Dammam");

            clock.advance(Duration::from_secs(2));
            quote.accept();

            clock.advance(Duration::from_secs(3));
            assert!(!contact.confirming());
            assert!(quote.confirming());

            clock.advance(Duration::from_secs(2));
            assert!(!quote.confirming());
            assert_eq!(draft(contact), ContactDraft::default());
        });
    }

    #[test]
    fn cleanup_cancels_pending_expiry() {
        let clock = ManualClock::default();
        let owner = Owner::new();
        owner.with(|| filled_quote(&clock).accept());
        assert_eq!(clock.pending(), 1);

        owner.cleanup();
        assert_eq!(clock.pending(), 0);
        clock.advance(CONFIRMATION_DELAY);
    }
}
