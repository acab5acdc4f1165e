use folio_types::{Icon, Section};

/// A single entry hosted by the navigation shell.
///
/// Items are stateless; whether an item is active is decided by comparing
/// its section with the tracker's current section at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub icon: Icon,
    /// Human-friendly name, e.g. "Projects".
    pub label: String,
    /// Region the item scrolls to.
    pub section: Section,
}

impl NavItem {
    pub fn new(icon: Icon, label: impl Into<String>, section: Section) -> Self {
        Self {
            icon,
            label: label.into(),
            section,
        }
    }

    /// One item per section, in page order.
    pub fn defaults_for_sections() -> Vec<Self> {
        Section::ALL
            .into_iter()
            .map(|section| Self::new(section.icon(), section.label(), section))
            .collect()
    }

    /// Accessible name identifying the target section.
    pub fn aria_label(&self) -> String {
        format!("Navigate to {} section", self.label)
    }

    /// Value of `aria-current`; present only on the active item.
    pub fn aria_current(&self, active: Section) -> Option<&'static str> {
        self.is_active(active).then_some("page")
    }

    pub fn is_active(&self, active: Section) -> bool {
        self.section == active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section_in_order() {
        let items = NavItem::defaults_for_sections();
        let sections: Vec<_> = items.iter().map(|item| item.section).collect();
        assert_eq!(sections, Section::ALL.to_vec());
        assert_eq!(items[3].label, "Projects");
        assert_eq!(items[3].icon, Icon::Code);
    }

    #[test]
    fn only_the_active_item_is_marked_current() {
        let items = NavItem::defaults_for_sections();
        let current: Vec<_> = items.iter().filter_map(|item| item.aria_current(Section::Education)).collect();
        assert_eq!(current, vec!["page"]);
        assert_eq!(items[4].aria_label(), "Navigate to Education section");
    }
}
