use leptos::prelude::*;

use crate::content::{Anchor, ServiceKey};
use crate::dom::ScrollToSection;
use crate::state::ServiceTabs;

#[component]
pub fn ServicesView(scroll: ScrollToSection) -> impl IntoView {
    let tabs = RwSignal::new(ServiceTabs::default());

    view! {
        <section id={Anchor::ServicesView.id()} class="py-16 md:py-20 bg-blue-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center text-gray-900 mb-4">"Integrated Service Portfolio"</h2>
                <p class="text-center text-lg text-gray-600 mb-12 max-w-3xl mx-auto">
                    "Explore our comprehensive solutions. Use the tabs below to compare how our Warehousing, "
                    "Freight, and Value-Added Services integrate to form a seamless supply chain for your business."
                </p>

                <div class="bg-white rounded-xl shadow-xl p-4 md:p-8">
                    <div id="service-tabs" class="flex justify-between sm:justify-start border-b border-gray-200 mb-6 space-x-2 sm:space-x-4">
                        {ServiceKey::ALL
                            .into_iter()
                            .map(|service| view! { <TabButton service=service tabs=tabs /> })
                            .collect::<Vec<_>>()}
                    </div>

                    {move || view! { <ServiceContent service={tabs.with(|t| t.active())} /> }}

                    <div class="text-center mt-8">
                        <button
                            id="service-cta"
                            class="bg-blue-600 hover:bg-blue-700 text-white font-semibold py-3 px-8 rounded-lg shadow-lg transition duration-300 transform hover:scale-[1.01]"
                            on:click=move |_| scroll.run(Anchor::QuoteEstimator)
                        >
                            {move || tabs.with(|t| t.cta())}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TabButton(service: ServiceKey, tabs: RwSignal<ServiceTabs>) -> impl IntoView {
    view! {
        <button
            class=move || {
                if tabs.with(|t| t.is_active(service)) {
                    "py-2 px-3 text-xs sm:text-sm font-medium transition duration-150 text-gray-900 border-b-2 border-indigo-600"
                } else {
                    "py-2 px-3 text-xs sm:text-sm font-medium transition duration-150 text-gray-600 border-b-2 border-transparent hover:text-indigo-600 hover:border-indigo-300"
                }
            }
            data-service={service.as_str()}
            on:click=move |_| tabs.update(|t| t.select(service))
        >
            {service.tab_label()}
        </button>
    }
}

/// Headline, bullets, focus note and image for one service.
#[component]
fn ServiceContent(service: ServiceKey) -> impl IntoView {
    let entry = service.entry();
    let alt = format!("{} Image", entry.headline);

    view! {
        <div class="min-h-[250px] transition-opacity duration-500" data-service-panel={service.as_str()}>
            <div class="grid md:grid-cols-3 gap-8 items-start">
                <div class="md:col-span-2">
                    <h3 class="text-2xl font-bold text-gray-900 mb-3">{entry.headline}</h3>
                    <p class="text-gray-700">{entry.description}</p>
                    <ul class="mt-5 text-gray-800 list-none pl-0">
                        {entry
                            .bullets
                            .iter()
                            .map(|bullet| {
                                view! {
                                    <li class="flex items-start mb-2">
                                        <span class="text-indigo-600 text-lg mr-2">"•"</span>
                                        <span>{*bullet}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="md:col-span-1 bg-blue-50 p-6 rounded-lg border border-blue-100">
                    <h4 class="text-lg font-semibold text-gray-900 mb-3">"Service Focus"</h4>
                    <p class="text-sm text-gray-600">
                        "This specialized solution is designed to optimize your "
                        {service.focus()}
                        "."
                    </p>
                </div>
            </div>
            <img src={entry.image} alt=alt class="w-full h-auto mt-8 rounded-lg shadow-md object-cover" />
        </div>
    }
}
