use crate::content::Anchor;

/// Mobile navigation overlay. Open or closed, nothing in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Hamburger button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Link click: scroll to the target section, then close the overlay.
    pub fn follow(&mut self, target: Anchor, scroll: impl FnOnce(Anchor)) {
        scroll(target);
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;
    use pretty_assertions::assert_eq;

    #[test]
    fn hamburger_alternates() {
        let mut menu = MobileMenu::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            menu.toggle();
            seen.push(menu.is_open());
        }
        assert_eq!(seen, vec![true, false, true, false]);
    }

    #[test]
    fn following_a_link_scrolls_and_closes() {
        for item in NAV_ITEMS {
            let mut menu = MobileMenu::default();
            menu.toggle();
            let mut scrolled = None;
            menu.follow(item.anchor, |anchor| scrolled = Some(anchor));
            assert_eq!(scrolled, Some(item.anchor));
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn following_a_link_with_closed_menu_keeps_it_closed() {
        let mut menu = MobileMenu::default();
        let mut scrolled = Vec::new();
        menu.follow(NAV_ITEMS[1].anchor, |anchor| scrolled.push(anchor));
        assert_eq!(scrolled, vec![Anchor::ServicesView]);
        assert!(!menu.is_open());
    }
}
