use leptos::prelude::*;

use crate::dom::section_scroller;
use crate::sections::*;

/// Page root. Owns the one scroll capability and nothing else.
#[component]
pub fn App() -> impl IntoView {
    let scroll = section_scroller();

    view! {
        <div class="min-h-screen bg-blue-50 font-sans antialiased text-gray-800">
            <Nav scroll=scroll />
            <main>
                <QuoteEstimator />
                <StrengthsDashboard />
                <ServicesView scroll=scroll />
                <ProcessFlow />
                <FinalCta scroll=scroll />
                <ContactUs />
            </main>
            <Footer />
        </div>
    }
}
