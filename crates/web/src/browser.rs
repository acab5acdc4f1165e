//! Thin wrappers over the browser APIs the page needs.
//!
//! Every helper degrades to a no-op (or a neutral value) when the window,
//! document or target element is unavailable.

use folio_engine::PageGeometry;
use folio_types::Section;
use js_sys::Array;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions};

/// Current vertical scroll offset of the window.
pub fn scroll_offset() -> f64 {
    web_sys::window().and_then(|window| window.scroll_y().ok()).unwrap_or_default()
}

/// Inner width of the window in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Starts a smooth scroll to an absolute vertical offset. Fire-and-forget.
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Reads region positions from the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeometry;

impl PageGeometry for BrowserGeometry {
    fn region_top(&self, section: Section) -> Option<f64> {
        let window = web_sys::window()?;
        let element = window.document()?.get_element_by_id(section.as_str())?;
        Some(element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or_default())
    }
}

/// One intersection report for a section region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionReport {
    pub section: Section,
    pub intersecting: bool,
    pub ratio: f64,
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Intersection observer attached to every mounted section region.
///
/// Dropping the watcher unobserves each region it registered and disconnects
/// the observer, so rebuilding it never leaves stale observers behind.
pub struct SectionWatcher {
    observer: IntersectionObserver,
    targets: Vec<Element>,
    _callback: ObserverCallback,
}

impl SectionWatcher {
    /// Observes the regions whose ids match [`Section`] identifiers.
    ///
    /// `root_margin` uses CSS margin syntax (for example `-60px 0px 0px 0px`).
    pub fn observe(root_margin: &str, threshold: f64, on_report: impl Fn(RegionReport) + 'static) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let callback: ObserverCallback = Closure::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let id = entry.target().id();
                match id.parse::<Section>() {
                    Ok(section) => on_report(RegionReport {
                        section,
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    }),
                    Err(error) => debug!(%error, "Ignoring intersection for unknown region"),
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let targets: Vec<Element> = Section::ALL
            .into_iter()
            .filter_map(|section| document.get_element_by_id(section.as_str()))
            .collect();
        for target in &targets {
            observer.observe(target);
        }
        debug!(regions = targets.len(), root_margin, "Observing section regions");

        Ok(Self {
            observer,
            targets,
            _callback: callback,
        })
    }
}

impl Drop for SectionWatcher {
    fn drop(&mut self) {
        for target in &self.targets {
            self.observer.unobserve(target);
        }
        self.observer.disconnect();
    }
}
