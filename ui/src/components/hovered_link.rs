//! Plain navigation link with a hover color treatment.

use leptos::prelude::*;

/// Text link that shifts color on hover. Used inside dropdown panels and
/// anywhere a quiet inline link is wanted.
#[component]
pub fn HoveredLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <a class="hovered-link" href=href>
            {children()}
        </a>
    }
}
