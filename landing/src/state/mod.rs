//! UI state for the interactive sections.
//!
//! Plain structs with no DOM or reactive dependencies. Components keep one
//! of these in a signal and call the transition methods from event handlers,
//! which keeps every transition testable on the host.

pub mod accordion;
pub mod confirmation;
pub mod form;
pub mod menu;
pub mod tabs;

pub use accordion::Accordion;
pub use confirmation::{Cancel, Confirmation, ConfirmationTimer, Scheduler, Ticket};
pub use form::{ContactDraft, Draft, FormState, QuoteDraft};
pub use menu::MobileMenu;
pub use tabs::ServiceTabs;
