//! Navigation vocabulary shared by the engine and the web front end.

use serde::{Deserialize, Serialize};

use crate::Section;

/// Coarse device class derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    Tablet,
    /// Server-side renders and the first client frame assume a desktop
    /// viewport until a real measurement arrives.
    #[default]
    Desktop,
}

impl ViewportClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

/// Container chrome that hosts the navigation items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutStrategy {
    /// Bottom-anchored horizontal dock; always visible.
    BottomDock,
    /// Left sidebar toggled by a menu button; an overlay closes it.
    CollapsibleSidebar { open: bool },
    /// Permanently visible left sidebar.
    FixedSidebar,
}

impl LayoutStrategy {
    /// Whether navigation items render their caption under the icon rather
    /// than as a hover tooltip.
    pub const fn shows_captions(self) -> bool {
        matches!(self, Self::BottomDock)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::BottomDock => "bottom-dock",
            Self::CollapsibleSidebar { .. } => "collapsible-sidebar",
            Self::FixedSidebar => "fixed-sidebar",
        }
    }
}

/// Thresholds that drive layout classification and section tracking.
///
/// Every field has a default so content documents may omit the block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Widths at or below this many CSS pixels are mobile.
    pub mobile_max_width: f64,
    /// Widths at or below this (and above the mobile bound) are tablet.
    pub tablet_max_width: f64,
    /// Scroll offsets strictly below this pin the active section to home.
    pub top_threshold: f64,
    /// Minimum intersection ratio before a region becomes active.
    pub visibility_threshold: f64,
    /// Height of the mobile dock; subtracted from scroll targets on mobile.
    pub mobile_dock_offset: f64,
    /// Initial state of the tablet sidebar.
    pub menu_open_by_default: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: 640.0,
            tablet_max_width: 1024.0,
            top_threshold: 100.0,
            visibility_threshold: 0.5,
            mobile_dock_offset: 60.0,
            menu_open_by_default: true,
        }
    }
}

/// Inputs to the navigation reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A navigation item was activated.
    NavigateTo(Section),
    /// The window scrolled; carries the new vertical offset.
    Scrolled(f64),
    /// The intersection watcher reported on a region.
    RegionIntersected {
        section: Section,
        intersecting: bool,
        ratio: f64,
        scroll_offset: f64,
    },
    /// The window was measured or resized; carries the inner width.
    Resized(f64),
    /// The tablet menu button was pressed.
    ToggleMenu,
    /// The dimmed overlay behind the open tablet sidebar was clicked.
    OverlayClicked,
}

/// Side effects requested by the navigation reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Smoothly scroll the window so its vertical offset becomes `top`.
    ScrollTo { top: f64 },
    /// The layout strategy changed and the shell must re-render its chrome.
    LayoutChanged(LayoutStrategy),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_config_fills_missing_fields() {
        let yaml = "top_threshold: 80\nmenu_open_by_default: false\n";
        let config: NavigationConfig = serde_yaml::from_str(yaml).expect("deserialize config");
        assert_eq!(config.top_threshold, 80.0);
        assert!(!config.menu_open_by_default);
        assert_eq!(config.mobile_max_width, 640.0);
        assert_eq!(config.tablet_max_width, 1024.0);
        assert_eq!(config.visibility_threshold, 0.5);
    }

    #[test]
    fn only_the_dock_shows_captions() {
        assert!(LayoutStrategy::BottomDock.shows_captions());
        assert!(!LayoutStrategy::CollapsibleSidebar { open: true }.shows_captions());
        assert!(!LayoutStrategy::FixedSidebar.shows_captions());
    }
}
