//! Mock forms: field drafts plus the confirmation window.
//!
//! Submitting hands the draft back to the caller (who drops it, nothing is
//! sent anywhere), resets every field, and starts confirming.

use crate::content::ServiceKey;

use super::confirmation::{Confirmation, Ticket};

/// Field values for one form. `FORM` names the form in log output.
pub trait Draft: Default {
    const FORM: &'static str;
}

/// Quick Service Estimator fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteDraft {
    pub origin: String,
    pub destination: String,
    pub service: ServiceKey,
    pub volume: String,
}

impl Draft for QuoteDraft {
    const FORM: &'static str = "quote";
}

/// "Send Us a Message" fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Draft for ContactDraft {
    const FORM: &'static str = "contact";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState<D> {
    pub draft: D,
    confirmation: Confirmation,
}

impl<D: Draft> FormState<D> {
    /// Accept the draft: clear the fields and show the confirmation.
    pub fn submit(&mut self) -> (D, Ticket) {
        let sent = std::mem::take(&mut self.draft);
        (sent, self.confirmation.confirm())
    }

    /// Hide the confirmation if `ticket` is from the latest submit.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        self.confirmation.expire(ticket)
    }

    pub fn is_confirming(&self) -> bool {
        self.confirmation.is_confirming()
    }
}
