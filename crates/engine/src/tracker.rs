//! Active-section tracking.
//!
//! Two signal sources feed the tracker: explicit navigation (a click on a
//! navigation item) and passive observation (scroll offsets and intersection
//! reports). Both write to a single [`ActiveSection`]; the most recent write
//! wins.

use folio_types::{Effect, NavigationConfig, Section, ViewportClass};
use tracing::debug;

/// Tolerance applied to intersection ratios reported exactly at a threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Read access to the rendered page, implemented by the browser layer.
pub trait PageGeometry {
    /// Absolute document offset of the top edge of the section's region, or
    /// `None` when the region is not mounted.
    fn region_top(&self, section: Section) -> Option<f64>;
}

/// The section currently highlighted in navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveSection {
    /// The page is at (or being scrolled to) its top. Reads as home.
    #[default]
    Top,
    /// A region was navigated to or observed.
    Reading(Section),
}

impl ActiveSection {
    /// Section to highlight; `Top` reads as home.
    pub const fn section(self) -> Section {
        match self {
            Self::Top => Section::Home,
            Self::Reading(section) => section,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    active: ActiveSection,
}

impl SectionTracker {
    /// A tracker starting at the top of the page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tagged state, distinguishing the page top from reading home.
    pub fn active(&self) -> ActiveSection {
        self.active
    }

    /// Shorthand for `active().section()`.
    pub fn current(&self) -> Section {
        self.active.section()
    }

    /// Handles a click on a navigation item.
    ///
    /// The active section changes before the returned scroll request runs, so
    /// the navigation highlight does not wait for the scroll animation. When
    /// the target region is not mounted nothing changes and no scroll is
    /// requested.
    pub fn navigate_to(
        &mut self,
        section: Section,
        viewport: ViewportClass,
        config: &NavigationConfig,
        geometry: &dyn PageGeometry,
    ) -> Option<Effect> {
        if section == Section::Home {
            self.active = ActiveSection::Top;
            return Some(Effect::ScrollTo { top: 0.0 });
        }

        let Some(region_top) = geometry.region_top(section) else {
            debug!(section = %section, "Navigation target not mounted; ignoring");
            return None;
        };
        let offset = match viewport {
            ViewportClass::Mobile => config.mobile_dock_offset,
            ViewportClass::Tablet | ViewportClass::Desktop => 0.0,
        };
        self.active = ActiveSection::Reading(section);
        Some(Effect::ScrollTo {
            top: (region_top - offset).max(0.0),
        })
    }

    /// Handles an intersection report for one region. Returns whether the
    /// active section changed.
    ///
    /// Reports are ignored while the page sits at offset zero, so the home
    /// state established on load is not overwritten by whatever region
    /// happens to be visible first.
    pub fn region_intersected(
        &mut self,
        section: Section,
        intersecting: bool,
        ratio: f64,
        scroll_offset: f64,
        config: &NavigationConfig,
    ) -> bool {
        if !intersecting || ratio + RATIO_TOLERANCE < config.visibility_threshold || scroll_offset <= 0.0 {
            return false;
        }
        self.replace(ActiveSection::Reading(section))
    }

    /// Handles a scroll event. Offsets below the top threshold force home.
    pub fn scrolled(&mut self, offset: f64, config: &NavigationConfig) -> bool {
        if offset < config.top_threshold {
            return self.replace(ActiveSection::Top);
        }
        false
    }

    fn replace(&mut self, next: ActiveSection) -> bool {
        let changed = self.active != next;
        self.active = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AllMounted;

    impl PageGeometry for AllMounted {
        fn region_top(&self, section: Section) -> Option<f64> {
            Some(section.position() as f64 * 1000.0)
        }
    }

    struct NothingMounted;

    impl PageGeometry for NothingMounted {
        fn region_top(&self, _section: Section) -> Option<f64> {
            None
        }
    }

    #[test]
    fn starts_at_home() {
        let tracker = SectionTracker::new();
        assert_eq!(tracker.active(), ActiveSection::Top);
        assert_eq!(tracker.current(), Section::Home);
    }

    #[test]
    fn navigation_updates_before_scrolling() {
        let config = NavigationConfig::default();
        for section in Section::ALL {
            let mut tracker = SectionTracker::new();
            let effect = tracker.navigate_to(section, ViewportClass::Desktop, &config, &AllMounted);
            assert_eq!(tracker.current(), section);
            assert_eq!(
                effect,
                Some(Effect::ScrollTo {
                    top: section.position() as f64 * 1000.0
                })
            );
        }
    }

    #[test]
    fn mobile_navigation_leaves_room_for_the_dock() {
        let config = NavigationConfig::default();
        let mut tracker = SectionTracker::new();
        let effect = tracker.navigate_to(Section::Projects, ViewportClass::Mobile, &config, &AllMounted);
        assert_eq!(effect, Some(Effect::ScrollTo { top: 3000.0 - 60.0 }));
    }

    #[test]
    fn scroll_target_never_goes_above_the_page() {
        struct NearTop;
        impl PageGeometry for NearTop {
            fn region_top(&self, _section: Section) -> Option<f64> {
                Some(20.0)
            }
        }
        let config = NavigationConfig::default();
        let mut tracker = SectionTracker::new();
        let effect = tracker.navigate_to(Section::About, ViewportClass::Mobile, &config, &NearTop);
        assert_eq!(effect, Some(Effect::ScrollTo { top: 0.0 }));
    }

    #[test]
    fn missing_region_is_a_no_op() {
        let config = NavigationConfig::default();
        let mut tracker = SectionTracker::new();
        tracker.navigate_to(Section::About, ViewportClass::Desktop, &config, &AllMounted);

        let effect = tracker.navigate_to(Section::Education, ViewportClass::Desktop, &config, &NothingMounted);
        assert_eq!(effect, None);
        assert_eq!(tracker.current(), Section::About);
    }

    #[test]
    fn home_needs_no_region() {
        let config = NavigationConfig::default();
        let mut tracker = SectionTracker::new();
        tracker.navigate_to(Section::Projects, ViewportClass::Tablet, &config, &AllMounted);

        let effect = tracker.navigate_to(Section::Home, ViewportClass::Tablet, &config, &NothingMounted);
        assert_eq!(effect, Some(Effect::ScrollTo { top: 0.0 }));
        assert_eq!(tracker.active(), ActiveSection::Top);
    }

    #[test]
    fn intersections_below_threshold_are_ignored() {
        let config = NavigationConfig::default();
        let mut tracker = SectionTracker::new();
        assert!(!tracker.region_intersected(Section::Experience, true, 0.2, 400.0, &config));
        assert!(!tracker.region_intersected(Section::Experience, false, 0.9, 400.0, &config));
        assert_eq!(tracker.current(), Section::Home);

        assert!(tracker.region_intersected(Section::Experience, true, 0.4995, 400.0, &config));
        assert_eq!(tracker.current(), Section::Experience);
    }

    #[test]
    fn intersections_at_the_very_top_are_ignored() {
        let config = NavigationConfig::default();
        let mut tracker = SectionTracker::new();
        assert!(!tracker.region_intersected(Section::About, true, 1.0, 0.0, &config));
        assert_eq!(tracker.active(), ActiveSection::Top);
    }

    #[test]
    fn last_intersection_wins() {
        let config = NavigationConfig::default();
        let mut tracker = SectionTracker::new();
        tracker.region_intersected(Section::Experience, true, 0.6, 900.0, &config);
        tracker.region_intersected(Section::Projects, true, 0.7, 900.0, &config);
        tracker.region_intersected(Section::About, true, 0.5, 900.0, &config);
        assert_eq!(tracker.current(), Section::About);
    }

    #[test]
    fn scrolling_near_the_top_forces_home() {
        let config = NavigationConfig::default();
        let mut tracker = SectionTracker::new();
        tracker.region_intersected(Section::Education, true, 0.8, 2400.0, &config);

        assert!(!tracker.scrolled(2300.0, &config));
        assert_eq!(tracker.current(), Section::Education);

        assert!(tracker.scrolled(50.0, &config));
        assert_eq!(tracker.active(), ActiveSection::Top);
        assert!(!tracker.scrolled(10.0, &config), "already home");
    }
}
