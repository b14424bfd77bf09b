use leptos::prelude::*;

use crate::content::{Anchor, PROCESS_STEPS};

#[component]
pub fn ProcessFlow() -> impl IntoView {
    view! {
        <section id={Anchor::ProcessFlow.id()} class="py-16 md:py-20 bg-blue-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center text-gray-900 mb-4">"Our Reliable 4-Step Logistics Journey"</h2>
                <p class="text-center text-lg text-gray-600 mb-12 max-w-3xl mx-auto">
                    "Understanding the process is key to a smooth partnership. We guide your shipment through a clear, "
                    "efficient, and monitored four-stage cycle. Hover over a step for detail."
                </p>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {PROCESS_STEPS
                        .iter()
                        .map(|step| {
                            view! {
                                <div class="flow-step text-center group transition duration-300 p-4 rounded-lg hover:bg-gray-50">
                                    <div class="flow-icon mx-auto w-16 h-16 bg-blue-500 rounded-full flex items-center justify-center mb-3 text-white text-2xl font-bold transition duration-300 shadow-md group-hover:scale-110 group-hover:bg-blue-600">
                                        {step.num}
                                    </div>
                                    <h3 class="text-lg font-semibold text-gray-900">{step.title}</h3>
                                    <p class="text-sm text-gray-500 mt-1">{step.detail}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
