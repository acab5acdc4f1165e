use folio_engine::NavItem;
use folio_types::Section;
use leptos::prelude::*;

use super::icons::IconGlyph;

/// CSS classes for a navigation button.
///
/// Captioned items (mobile dock) are compact with a label under the icon;
/// the sidebars show the label as a hover tooltip instead.
pub fn nav_item_class(active: bool, captioned: bool) -> String {
    let mut class = String::from("nav-item");
    class.push_str(if captioned { " nav-item--captioned" } else { " nav-item--tooltip" });
    if active {
        class.push_str(" nav-item--active");
    }
    class
}

/// A single navigation control.
///
/// Stateless: `active` and `captioned` are read from the caller, and
/// activation is reported through `on_activate` with the item's section.
#[component]
pub fn NavItemButton(
    item: NavItem,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] captioned: Signal<bool>,
    on_activate: Callback<Section>,
) -> impl IntoView {
    let aria_label = item.aria_label();
    let NavItem { icon, label, section } = item;

    view! {
        <button
            type="button"
            class=move || nav_item_class(active.get(), captioned.get())
            aria-label=aria_label
            aria-current=move || active.get().then_some("page")
            on:click=move |_| on_activate.run(section)
        >
            <span class="nav-item__icon" aria-hidden="true">
                <IconGlyph icon=icon />
            </span>
            {move || {
                if captioned.get() {
                    view! { <span class="nav-item__caption">{label.clone()}</span> }.into_any()
                } else {
                    view! { <span class="nav-item__tooltip" role="tooltip">{label.clone()}</span> }.into_any()
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_reflects_layout_and_state() {
        assert_eq!(nav_item_class(false, false), "nav-item nav-item--tooltip");
        assert_eq!(nav_item_class(true, false), "nav-item nav-item--tooltip nav-item--active");
        assert_eq!(nav_item_class(true, true), "nav-item nav-item--captioned nav-item--active");
        assert_eq!(nav_item_class(false, true), "nav-item nav-item--captioned");
    }
}
