use crate::content::{ServiceEntry, ServiceKey};

/// Services panel selection. Always exactly one tab; starts on warehousing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceTabs {
    active: ServiceKey,
}

impl ServiceTabs {
    pub fn select(&mut self, key: ServiceKey) {
        self.active = key;
    }

    pub fn active(&self) -> ServiceKey {
        self.active
    }

    pub fn is_active(&self, key: ServiceKey) -> bool {
        self.active == key
    }

    /// Content for the active tab only.
    pub fn visible(&self) -> &'static ServiceEntry {
        self.active.entry()
    }

    /// Label of the button under the panel.
    pub fn cta(&self) -> &'static str {
        self.visible().cta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_warehousing() {
        let tabs = ServiceTabs::default();
        assert_eq!(tabs.active(), ServiceKey::Warehousing);
        assert_eq!(tabs.cta(), "Learn About Warehousing");
    }

    #[test]
    fn selecting_a_tab_shows_only_its_content() {
        let mut tabs = ServiceTabs::default();
        for key in ServiceKey::ALL {
            tabs.select(key);
            assert_eq!(tabs.visible(), key.entry());
            let active: Vec<ServiceKey> = ServiceKey::ALL
                .into_iter()
                .filter(|k| tabs.is_active(*k))
                .collect();
            assert_eq!(active, vec![key]);
            for other in ServiceKey::ALL.into_iter().filter(|k| *k != key) {
                assert_ne!(tabs.visible().headline, other.entry().headline);
            }
        }
    }

    #[test]
    fn cta_follows_active_tab() {
        let mut tabs = ServiceTabs::default();
        tabs.select(ServiceKey::Freight);
        assert_eq!(tabs.cta(), "View Logistics Solutions");
        tabs.select(ServiceKey::Vas);
        assert_eq!(tabs.cta(), "Discover VAS");
    }

    #[test]
    fn reselecting_active_tab_is_idempotent() {
        let mut tabs = ServiceTabs::default();
        tabs.select(ServiceKey::Freight);
        tabs.select(ServiceKey::Freight);
        assert_eq!(tabs.active(), ServiceKey::Freight);
    }
}
