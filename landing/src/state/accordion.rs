use crate::content::StrengthKey;

/// Strengths dashboard selection: at most one card expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<StrengthKey>,
}

impl Accordion {
    /// Click on a card. Collapses it if it was open, otherwise opens it
    /// and closes whichever card was open before.
    pub fn toggle(&mut self, key: StrengthKey) {
        self.expanded = if self.expanded == Some(key) {
            None
        } else {
            Some(key)
        };
    }

    pub fn expanded(&self) -> Option<StrengthKey> {
        self.expanded
    }

    pub fn is_expanded(&self, key: StrengthKey) -> bool {
        self.expanded == Some(key)
    }
}
