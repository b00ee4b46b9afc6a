//! Dropdown navigation menu.
//!
//! Hovering a top-level item opens its dropdown panel; moving the pointer
//! off the nav closes whatever is open. The open/close bookkeeping lives in
//! [`MenuState`] so it stays testable; these components only wire pointer
//! events to it.

use leptos::prelude::*;

use crate::state::menu::MenuState;

/// Top-level nav bar.
///
/// Children are expected to be [`MenuItem`]s sharing the same `state`
/// signal. Leaving the nav resets the state so no dropdown lingers.
#[component]
pub fn Menu(state: RwSignal<MenuState>, children: Children) -> impl IntoView {
    view! {
        <nav class="navbar-menu" on:mouseleave=move |_| state.update(MenuState::clear)>
            {children()}
        </nav>
    }
}

/// One hoverable nav item plus its dropdown panel.
///
/// The panel renders only while this item is the active one.
#[component]
pub fn MenuItem(
    state: RwSignal<MenuState>,
    #[prop(into)] item: String,
    children: ChildrenFn,
) -> impl IntoView {
    let label = item.clone();
    let hovered = item.clone();
    let is_open = move || state.get().is_active(&item);

    view! {
        <div
            class="navbar-menu__item"
            on:mouseenter=move |_| state.update(|s| s.activate(&hovered))
        >
            <p class="navbar-menu__label">{label}</p>
            <Show when=is_open>
                <div class="navbar-menu__dropdown">
                    <div class="navbar-menu__panel">{children()}</div>
                </div>
            </Show>
        </div>
    }
}

/// Image-plus-copy link used inside a dropdown panel.
#[component]
pub fn ProductItem(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] href: String,
    #[prop(into)] src: String,
) -> impl IntoView {
    let alt = title.clone();
    view! {
        <a class="navbar-menu__product" href=href>
            <img class="navbar-menu__product-thumb" src=src alt=alt />
            <div>
                <h4 class="navbar-menu__product-title">{title}</h4>
                <p class="navbar-menu__product-copy">{description}</p>
            </div>
        </a>
    }
}
