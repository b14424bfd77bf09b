use leptos::prelude::*;

use crate::content::Anchor;
use crate::dom::ScrollToSection;

#[component]
pub fn FinalCta(scroll: ScrollToSection) -> impl IntoView {
    view! {
        <section class="py-16 md:py-24 bg-indigo-600">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-4xl font-extrabold text-white mb-4">"Ready for Logistics That Delivers?"</h2>
                <p class="text-xl text-indigo-200 mb-8">
                    "Speak to one of our GCC specialists to design a logistics or warehousing plan "
                    "optimized for your business needs."
                </p>
                <button
                    class="bg-white text-indigo-600 hover:bg-gray-100 font-bold py-4 px-10 rounded-lg text-lg shadow-2xl transition duration-300 transform hover:scale-[1.03]"
                    on:click=move |_| scroll.run(Anchor::QuoteEstimator)
                >
                    "Get Your Free Consultation Today"
                </button>
            </div>
        </section>
    }
}
