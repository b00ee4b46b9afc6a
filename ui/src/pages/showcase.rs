//! Gallery page composing every component: the navbar menu over a wavy
//! hero section.

use leptos::prelude::*;

use crate::components::hovered_link::HoveredLink;
use crate::components::navbar_menu::{Menu, MenuItem, ProductItem};
use crate::components::wavy_background::WavyBackground;
use crate::state::menu::MenuState;

/// Component showcase.
#[component]
pub fn Showcase() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    view! {
        <div class="showcase">
            <header class="showcase__nav">
                <Menu state=menu>
                    <MenuItem state=menu item="Services">
                        <div class="showcase__link-list">
                            <HoveredLink href="/web-dev">"Web Development"</HoveredLink>
                            <HoveredLink href="/interface-design">"Interface Design"</HoveredLink>
                            <HoveredLink href="/seo">"Search Engine Optimization"</HoveredLink>
                        </div>
                    </MenuItem>
                    <MenuItem state=menu item="Products">
                        <div class="showcase__product-grid">
                            <ProductItem
                                title="Algochurn"
                                description="Prepare for tech interviews like never before."
                                href="https://algochurn.com"
                                src="/img/products/algochurn.webp"
                            />
                            <ProductItem
                                title="Tailwind Master Kit"
                                description="Production ready components for your next project."
                                href="https://tailwindmasterkit.com"
                                src="/img/products/tailwindmasterkit.webp"
                            />
                        </div>
                    </MenuItem>
                    <MenuItem state=menu item="Pricing">
                        <div class="showcase__link-list">
                            <HoveredLink href="/hobby">"Hobby"</HoveredLink>
                            <HoveredLink href="/individual">"Individual"</HoveredLink>
                            <HoveredLink href="/team">"Team"</HoveredLink>
                        </div>
                    </MenuItem>
                </Menu>
            </header>
            <WavyBackground container_class="showcase__hero">
                <h1 class="showcase__title">"Hero waves"</h1>
                <p class="showcase__subtitle">
                    "Leverage the power of canvas to create a stunning backdrop."
                </p>
            </WavyBackground>
        </div>
    }
}
