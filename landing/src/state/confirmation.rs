//! Transient "thank you" state shown after a mock form submit.
//!
//! Two phases, `Quiescent` and `Confirming`. Submitting enters `Confirming`
//! and hands out a [`Ticket`]; a timer later redeems the ticket to return to
//! `Quiescent`. Each submit issues a fresh ticket, so an expiry scheduled for
//! an earlier submit can never cut a newer confirmation short.
//!
//! Timers go through the [`Scheduler`] trait: the browser build uses
//! `setTimeout`, tests use a manual clock.

use std::time::Duration;

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Quiescent,
    Confirming,
}

/// Proof of which submit an expiry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Confirmation {
    phase: Phase,
    generation: u64,
}

impl Confirmation {
    /// Enter (or re-enter) the confirming phase.
    pub fn confirm(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.phase = Phase::Confirming;
        Ticket(self.generation)
    }

    /// Back to quiescent, but only for the most recent submit.
    /// Returns whether the phase changed.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if self.phase == Phase::Confirming && ticket.0 == self.generation {
            self.phase = Phase::Quiescent;
            true
        } else {
            false
        }
    }

    pub fn is_confirming(&self) -> bool {
        self.phase == Phase::Confirming
    }
}

/// A scheduled task that can be called off.
pub trait Cancel {
    fn cancel(self);
}

/// Runs a task once after a delay.
pub trait Scheduler {
    type Handle: Cancel + 'static;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce() + 'static>,
    ) -> Result<Self::Handle, SiteError>;
}

/// Owns at most one pending expiry for a form.
pub struct ConfirmationTimer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> ConfirmationTimer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `task` after the delay, cancelling whatever was pending.
    pub fn arm(&mut self, task: impl FnOnce() + 'static) -> Result<(), SiteError> {
        self.disarm();
        let handle = self.scheduler.schedule(self.delay, Box::new(task))?;
        self.pending = Some(handle);
        Ok(())
    }

    /// Cancel the pending task, if any. Used on teardown.
    pub fn disarm(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
pub(crate) mod manual {
    //! Deterministic scheduler for tests: time only moves on `advance`.

    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Task {
        id: u64,
        due: Duration,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        tasks: Vec<Task>,
    }

    #[derive(Clone, Default)]
    pub(crate) struct ManualClock {
        inner: Rc<RefCell<Clock>>,
    }

    pub(crate) struct ManualHandle {
        id: u64,
        clock: Rc<RefCell<Clock>>,
    }

    impl Cancel for ManualHandle {
        fn cancel(self) {
            self.clock.borrow_mut().tasks.retain(|t| t.id != self.id);
        }
    }

    impl Scheduler for ManualClock {
        type Handle = ManualHandle;

        fn schedule(
            &self,
            delay: Duration,
            task: Box<dyn FnOnce() + 'static>,
        ) -> Result<ManualHandle, SiteError> {
            let mut clock = self.inner.borrow_mut();
            clock.next_id += 1;
            let id = clock.next_id;
            let due = clock.now + delay;
            clock.tasks.push(Task { id, due, run: task });
            Ok(ManualHandle {
                id,
                clock: Rc::clone(&self.inner),
            })
        }
    }

    impl ManualClock {
        /// Move time forward and run every task that came due, in order.
        pub(crate) fn advance(&self, by: Duration) {
            let now = {
                let mut clock = self.inner.borrow_mut();
                clock.now += by;
                clock.now
            };
            loop {
                let next = {
                    let mut clock = self.inner.borrow_mut();
                    let due = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= now)
                        .min_by_key(|(_, t)| t.due)
                        .map(|(i, _)| i);
                    due.map(|i| clock.tasks.remove(i))
                };
                match next {
                    Some(task) => (task.run)(),
                    None => break,
                }
            }
        }

        pub(crate) fn pending(&self) -> usize {
            self.inner.borrow().tasks.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualClock;
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    const DELAY: Duration = Duration::from_secs(5);

    fn submit(
        state: &Rc<RefCell<Confirmation>>,
        timer: &mut ConfirmationTimer<ManualClock>,
    ) {
        let ticket = state.borrow_mut().confirm();
        let state = Rc::clone(state);
        timer
            .arm(move || {
                state.borrow_mut().expire(ticket);
            })
            .unwrap();
    }

    #[test]
    fn expires_after_delay() {
        let clock = ManualClock::default();
        let mut timer = ConfirmationTimer::new(clock.clone(), DELAY);
        let state = Rc::new(RefCell::new(Confirmation::default()));

        submit(&state, &mut timer);
        assert!(state.borrow().is_confirming());

        clock.advance(Duration::from_millis(4999));
        assert!(state.borrow().is_confirming());

        clock.advance(Duration::from_millis(1));
        assert!(!state.borrow().is_confirming());
    }

    #[test]
    fn resubmit_restarts_the_window() {
        let clock = ManualClock::default();
        let mut timer = ConfirmationTimer::new(clock.clone(), DELAY);
        let state = Rc::new(RefCell::new(Confirmation::default()));

        submit(&state, &mut timer);
        clock.advance(Duration::from_secs(3));
        submit(&state, &mut timer);
        assert_eq!(clock.pending(), 1);

        // first submit's deadline passes, still confirming
        clock.advance(Duration::from_secs(3));
        assert!(state.borrow().is_confirming());

        clock.advance(Duration::from_secs(2));
        assert!(!state.borrow().is_confirming());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut confirmation = Confirmation::default();
        let old = confirmation.confirm();
        let new = confirmation.confirm();
        assert!(!confirmation.expire(old));
        assert!(confirmation.is_confirming());
        assert!(confirmation.expire(new));
        assert!(!confirmation.expire(new));
    }

    #[test]
    fn disarm_cancels_pending_expiry() {
        let clock = ManualClock::default();
        let mut timer = ConfirmationTimer::new(clock.clone(), DELAY);
        let state = Rc::new(RefCell::new(Confirmation::default()));

        submit(&state, &mut timer);
        timer.disarm();
        assert_eq!(clock.pending(), 0);

        clock.advance(Duration::from_secs(10));
        assert!(state.borrow().is_confirming());
    }
}
