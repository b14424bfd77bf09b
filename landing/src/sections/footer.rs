use leptos::prelude::*;

use crate::config::{BRAND_NAME, COPYRIGHT_YEAR};

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!(
        "© {COPYRIGHT_YEAR} {BRAND_NAME}. All Rights Reserved. Quality Logistics & Warehousing Solutions."
    );
    view! {
        <footer class="bg-gray-800 text-white py-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center text-sm">
                <p>{copyright}</p>
            </div>
        </footer>
    }
}
