use leptos::prelude::*;

use crate::content::{Anchor, STRENGTHS, StrengthEntry};
use crate::state::Accordion;

#[component]
pub fn StrengthsDashboard() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section id={Anchor::StrengthsDashboard.id()} class="py-16 md:py-20 bg-blue-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center text-gray-900 mb-4">"Our Core Strengths"</h2>
                <p class="text-center text-lg text-gray-600 mb-12 max-w-3xl mx-auto">
                    "This section highlights the three pillars that define Al Bayt Al Atiq's service quality. "
                    "Click on any pillar to uncover the detailed insights that set us apart in the competitive GCC market."
                </p>

                <img
                    src="https://placehold.co/1200x300/10b981/ffffff/png?text=Regional+Expertise"
                    alt="A depiction of a regional map and secure technology interfaces."
                    class="w-full h-auto rounded-xl shadow-lg mb-12 object-cover"
                />

                <div class="grid md:grid-cols-3 gap-8">
                    {STRENGTHS
                        .iter()
                        .map(|entry| view! { <StrengthCard entry=entry accordion=accordion /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StrengthCard(entry: &'static StrengthEntry, accordion: RwSignal<Accordion>) -> impl IntoView {
    let expanded = move || accordion.with(|a| a.is_expanded(entry.key));

    view! {
        <div
            class=move || {
                if expanded() {
                    "p-6 bg-white rounded-xl shadow-lg border border-blue-100 cursor-pointer transition-all duration-300 transform hover:shadow-xl ring-4 ring-indigo-500/50"
                } else {
                    "p-6 bg-white rounded-xl shadow-lg border border-blue-100 cursor-pointer transition-all duration-300 transform hover:shadow-xl"
                }
            }
            data-strength={entry.key.as_str()}
            on:click=move |_| accordion.update(|a| a.toggle(entry.key))
        >
            <div class="flex items-center mb-4">
                <span class="text-3xl">{entry.icon}</span>
                <h3 class="ml-4 text-xl font-bold text-gray-900">{entry.title}</h3>
            </div>
            <p class="text-gray-600">{entry.summary}</p>
            <div
                class="mt-3 overflow-hidden transition-all duration-500 ease-in-out"
                style:max-height=move || if expanded() { "500px" } else { "0" }
            >
                <p class="pt-3 border-t border-gray-100 text-sm text-gray-500">{entry.detail}</p>
            </div>
            <div class="mt-4 text-sm font-semibold text-indigo-600 flex items-center">
                {move || if expanded() { "Hide Details" } else { "View Core Insight" }}
                <span class=move || {
                    if expanded() {
                        "ml-2 transform transition duration-300 rotate-180"
                    } else {
                        "ml-2 transform transition duration-300"
                    }
                }>"▼"</span>
            </div>
        </div>
    }
}
