//! Pure viewport classification.

use folio_types::{LayoutStrategy, NavigationConfig, ViewportClass};

/// Classifies a viewport width (CSS pixels) into a device class.
///
/// Bounds are inclusive: with the default breakpoints 640 is still mobile and
/// 1024 is still tablet.
pub fn classify_viewport(width: f64, config: &NavigationConfig) -> ViewportClass {
    if width <= config.mobile_max_width {
        ViewportClass::Mobile
    } else if width <= config.tablet_max_width {
        ViewportClass::Tablet
    } else {
        ViewportClass::Desktop
    }
}

/// Chooses the navigation chrome for a viewport class.
///
/// The menu flag only matters for tablets; the other layouts ignore it.
pub fn layout_for(viewport: ViewportClass, menu_open: bool) -> LayoutStrategy {
    match viewport {
        ViewportClass::Mobile => LayoutStrategy::BottomDock,
        ViewportClass::Tablet => LayoutStrategy::CollapsibleSidebar { open: menu_open },
        ViewportClass::Desktop => LayoutStrategy::FixedSidebar,
    }
}
