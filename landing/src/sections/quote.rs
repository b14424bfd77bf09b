use leptos::prelude::*;
use tracing::warn;

use super::mock_form::MockForm;
use crate::content::{Anchor, ServiceKey};
use crate::state::QuoteDraft;

const INPUT_CLASS: &str = "flex-1 block w-full border-gray-300 rounded-md shadow-sm p-3 focus:ring-blue-500 focus:border-blue-500";

/// Hero headline next to the Quick Service Estimator.
#[component]
pub fn QuoteEstimator() -> impl IntoView {
    view! {
        <section id={Anchor::QuoteEstimator.id()} class="py-16 md:py-24 bg-blue-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid md:grid-cols-2 gap-12 items-center">
                <div class="md:pr-12">
                    <img
                        src="https://placehold.co/800x450/4f46e5/FFFFFF/png?text=Modern+Logistics+Hub"
                        alt="A modern warehouse facility and shipping containers representing logistics."
                        class="w-full h-auto rounded-lg shadow-xl mb-6 object-cover"
                    />
                    <h1 class="text-4xl sm:text-5xl md:text-6xl font-extrabold text-gray-900 leading-tight">
                        "Quality Logistics & Warehousing Solutions Across the GCC."
                    </h1>
                    <p class="mt-4 text-lg sm:text-xl text-gray-600">
                        "Seamless supply chain management built on reliability, regional expertise, "
                        "and cutting-edge operational standards."
                    </p>
                </div>
                <QuoteForm />
            </div>
        </section>
    }
}

#[component]
fn QuoteForm() -> impl IntoView {
    let form = MockForm::<QuoteDraft>::new();

    let on_service = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<ServiceKey>() {
            Ok(service) => form.edit(|d| d.service = service),
            Err(err) => warn!(error = %err, "ignoring service selection"),
        }
    };

    view! {
        <div class="bg-white p-6 md:p-8 rounded-xl shadow-2xl border border-blue-200">
            <h2 class="text-2xl font-bold text-gray-900 mb-6">"Quick Service Estimator"</h2>
            <form class="space-y-4" on:submit=move |ev| form.submit(ev)>
                <div>
                    <label for="origin" class="block text-sm font-medium text-gray-700">
                        "Origin / Destination"
                    </label>
                    <div class="mt-1 flex flex-col md:flex-row md:space-x-2 space-y-2 md:space-y-0">
                        <input
                            type="text"
                            id="origin"
                            placeholder="Origin Port/City (e.g., Dammam)"
                            class=INPUT_CLASS
                            required
                            on:input=move |ev| form.edit(|d| d.origin = event_target_value(&ev))
                        />
                        <span class="self-center text-gray-500 text-xl hidden md:block">"→"</span>
                        <input
                            type="text"
                            id="destination"
                            placeholder="Destination (e.g., Dubai)"
                            class=INPUT_CLASS
                            required
                            on:input=move |ev| form.edit(|d| d.destination = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label for="service-type" class="block text-sm font-medium text-gray-700">
                        "Service Type"
                    </label>
                    <select
                        id="service-type"
                        class="mt-1 block w-full pl-3 pr-10 py-3 text-base border-gray-300 focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm rounded-md"
                        required
                        on:change=on_service
                    >
                        {ServiceKey::ALL
                            .iter()
                            .map(|key| view! { <option value={key.as_str()}>{key.quote_option()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div>
                    <label for="volume" class="block text-sm font-medium text-gray-700">
                        "Approx. Volume (CBM/Tons)"
                    </label>
                    <input
                        type="number"
                        id="volume"
                        placeholder="10 CBM"
                        class="mt-1 block w-full border-gray-300 rounded-md shadow-sm p-3 focus:ring-blue-500 focus:border-blue-500"
                        required
                        on:input=move |ev| form.edit(|d| d.volume = event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="w-full bg-indigo-600 hover:bg-indigo-700 text-white font-semibold py-3 px-4 rounded-lg shadow-lg transition duration-300 transform hover:scale-[1.01]"
                >
                    "Request a Custom Quote"
                </button>
            </form>
            <Show when=move || form.confirming()>
                <p id="quote-message" class="mt-4 text-sm text-center text-green-600 font-semibold transition duration-500">
                    "Thank you! A GCC specialist will contact you shortly with an estimated plan."
                </p>
            </Show>
        </div>
    }
}
