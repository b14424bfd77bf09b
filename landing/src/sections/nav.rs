use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::config::BRAND_NAME;
use crate::content::{Anchor, NAV_ITEMS, NavItem};
use crate::dom::ScrollToSection;
use crate::state::MobileMenu;

#[component]
pub fn Nav(scroll: ScrollToSection) -> impl IntoView {
    let menu = RwSignal::new(MobileMenu::default());

    // Every link, desktop or mobile, scrolls and then closes the overlay.
    let go = Callback::new(move |target: Anchor| {
        menu.update(|m| m.follow(target, |a| scroll.run(a)));
    });

    view! {
        <nav class="bg-white shadow-md sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <span class="text-2xl font-bold text-gray-900">{BRAND_NAME}</span>
                    </div>

                    <div class="flex items-center space-x-3 md:space-x-4">
                        <div class="hidden md:flex items-center space-x-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| view! { <NavLink item=item mobile=false on_follow=go /> })
                                .collect::<Vec<_>>()}
                        </div>

                        <button
                            class="bg-blue-600 hover:bg-blue-700 text-white font-semibold py-2 px-3 text-sm md:text-base md:px-4 rounded-lg shadow-lg transition duration-300 transform hover:scale-105"
                            on:click=move |_| go.run(Anchor::QuoteEstimator)
                        >
                            "Quote"
                        </button>

                        // Hamburger
                        <button
                            id="menu-toggle"
                            class="md:hidden text-gray-500 hover:text-gray-900 focus:outline-none focus:ring-2 focus:ring-indigo-500 rounded-lg p-2 transition duration-150"
                            on:click=move |_| menu.update(|m| m.toggle())
                        >
                            <span class="text-2xl">"☰"</span>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile overlay
            <div id="mobile-menu" class=move || {
                if menu.with(|m| m.is_open()) {
                    "md:hidden bg-white shadow-inner pb-4"
                } else {
                    "md:hidden bg-white shadow-inner pb-4 hidden"
                }
            }>
                <div class="px-2 pt-2 space-y-1 sm:px-3 flex flex-col items-end">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <NavLink item=item mobile=true on_follow=go /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(
    item: &'static NavItem,
    mobile: bool,
    on_follow: Callback<Anchor>,
) -> impl IntoView {
    let class = match (mobile, item.primary) {
        (false, true) => "hover:text-blue-600 transition text-blue-600 font-medium",
        (false, false) => "hover:text-blue-600 transition text-gray-600",
        (true, true) => {
            "block py-2 px-3 text-base font-medium w-full text-right rounded-md text-blue-600 hover:bg-gray-50"
        }
        (true, false) => {
            "block py-2 px-3 text-base font-medium w-full text-right rounded-md text-gray-600 hover:bg-gray-50"
        }
    };

    view! {
        <a
            href=item.anchor.href()
            class=class
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                on_follow.run(item.anchor);
            }
        >
            {item.label}
        </a>
    }
}
