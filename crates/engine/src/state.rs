//! Navigation state and its reducer.

use folio_types::{Effect, LayoutStrategy, Msg, NavigationConfig, Section, ViewportClass};
use tracing::{debug, info};

use crate::shell::ShellState;
use crate::tracker::{ActiveSection, PageGeometry, SectionTracker};

/// The only mutable state on the page: active section, viewport class and
/// tablet menu flag. Never persisted; rebuilt from measurements on load.
#[derive(Debug, Clone)]
pub struct NavigationState {
    config: NavigationConfig,
    tracker: SectionTracker,
    shell: ShellState,
}

impl NavigationState {
    pub fn new(config: NavigationConfig) -> Self {
        let shell = ShellState::new(&config);
        Self {
            config,
            tracker: SectionTracker::new(),
            shell,
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn active(&self) -> ActiveSection {
        self.tracker.active()
    }

    pub fn active_section(&self) -> Section {
        self.tracker.current()
    }

    pub fn viewport(&self) -> ViewportClass {
        self.shell.viewport()
    }

    pub fn menu_open(&self) -> bool {
        self.shell.menu_open()
    }

    pub fn layout(&self) -> LayoutStrategy {
        self.shell.layout()
    }

    /// Applies one message and returns the effects the caller must run.
    pub fn update(&mut self, msg: Msg, geometry: &dyn PageGeometry) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Msg::NavigateTo(section) => {
                let viewport = self.shell.viewport();
                effects.extend(self.tracker.navigate_to(section, viewport, &self.config, geometry));
            }
            Msg::Scrolled(offset) => {
                if self.tracker.scrolled(offset, &self.config) {
                    debug!(offset, "Scrolled to top; home is active");
                }
            }
            Msg::RegionIntersected {
                section,
                intersecting,
                ratio,
                scroll_offset,
            } => {
                if self
                    .tracker
                    .region_intersected(section, intersecting, ratio, scroll_offset, &self.config)
                {
                    debug!(section = %section, ratio, "Region became active");
                }
            }
            Msg::Resized(width) => {
                effects.extend(self.shell.resize(width, &self.config).map(Effect::LayoutChanged));
            }
            Msg::ToggleMenu => {
                effects.extend(self.shell.toggle_menu().map(Effect::LayoutChanged));
            }
            Msg::OverlayClicked => {
                effects.extend(self.shell.close_menu().map(Effect::LayoutChanged));
            }
        }

        for effect in &effects {
            if let Effect::LayoutChanged(layout) = effect {
                info!(layout = layout.name(), viewport = self.shell.viewport().as_str(), "Navigation layout changed");
            }
        }
        effects
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Regions;

    impl PageGeometry for Regions {
        fn region_top(&self, section: Section) -> Option<f64> {
            Some(section.position() as f64 * 800.0)
        }
    }

    #[test]
    fn navigate_routes_through_the_tracker() {
        let mut state = NavigationState::default();
        let effects = state.update(Msg::NavigateTo(Section::Experience), &Regions);
        assert_eq!(effects, vec![Effect::ScrollTo { top: 1600.0 }]);
        assert_eq!(state.active_section(), Section::Experience);
    }

    #[test]
    fn navigation_offset_follows_the_current_viewport() {
        let mut state = NavigationState::default();
        state.update(Msg::Resized(375.0), &Regions);
        let effects = state.update(Msg::NavigateTo(Section::Experience), &Regions);
        assert_eq!(effects, vec![Effect::ScrollTo { top: 1540.0 }]);
    }

    #[test]
    fn resize_emits_layout_changes() {
        let mut state = NavigationState::default();
        assert!(state.update(Msg::Resized(1440.0), &Regions).is_empty());
        assert_eq!(
            state.update(Msg::Resized(800.0), &Regions),
            vec![Effect::LayoutChanged(LayoutStrategy::CollapsibleSidebar { open: true })]
        );
        assert_eq!(
            state.update(Msg::OverlayClicked, &Regions),
            vec![Effect::LayoutChanged(LayoutStrategy::CollapsibleSidebar { open: false })]
        );
        assert_eq!(
            state.update(Msg::ToggleMenu, &Regions),
            vec![Effect::LayoutChanged(LayoutStrategy::CollapsibleSidebar { open: true })]
        );
    }

    #[test]
    fn passive_signals_produce_no_effects() {
        let mut state = NavigationState::default();
        let effects = state.update(
            Msg::RegionIntersected {
                section: Section::Projects,
                intersecting: true,
                ratio: 0.75,
                scroll_offset: 2400.0,
            },
            &Regions,
        );
        assert!(effects.is_empty());
        assert_eq!(state.active_section(), Section::Projects);

        assert!(state.update(Msg::Scrolled(0.0), &Regions).is_empty());
        assert_eq!(state.active(), ActiveSection::Top);
    }
}
