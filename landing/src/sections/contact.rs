use leptos::prelude::*;

use super::mock_form::MockForm;
use crate::config::BRAND_NAME;
use crate::content::Anchor;
use crate::state::ContactDraft;

const INPUT_CLASS: &str = "mt-1 block w-full border-gray-300 rounded-md shadow-sm p-3 focus:ring-blue-500 focus:border-blue-500";

#[component]
pub fn ContactUs() -> impl IntoView {
    view! {
        <section id={Anchor::ContactUs.id()} class="py-16 md:py-20 bg-blue-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center text-gray-900 mb-4">"Contact Our Dubai Headquarters"</h2>
                <p class="text-center text-lg text-gray-600 mb-12 max-w-3xl mx-auto">
                    "We are strategically located in the heart of Dubai to serve your logistics needs efficiently "
                    "across the entire GCC region. Reach out using the form below or visit us directly."
                </p>

                <div class="grid md:grid-cols-3 gap-12 bg-white p-8 rounded-xl shadow-xl">
                    <OfficeDetails />
                    <div class="md:col-span-2">
                        <h3 class="text-xl font-bold text-gray-900 mb-4">"Send Us a Message"</h3>
                        <ContactForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn OfficeDetails() -> impl IntoView {
    view! {
        <div class="md:col-span-1 space-y-6">
            <img
                src="https://placehold.co/800x400/2563eb/ffffff/png?text=Dubai+Office"
                alt="A modern office building in Dubai"
                class="w-full h-auto rounded-lg shadow-md mb-6 object-cover"
            />
            <div>
                <h3 class="text-xl font-bold text-gray-900 mb-2">"Primary Office"</h3>
                <p class="text-gray-700 font-semibold">{BRAND_NAME}" Logistics"</p>
                <p class="text-gray-700">
                    "Office No. 51, 4th Floor, "<br />
                    "Rasis Business Center, "<br />
                    "Al Barsha 1, Dubai, U.A.E."
                </p>
            </div>
            <div>
                <h3 class="text-xl font-bold text-gray-900 mb-2">"General Inquiries"</h3>
                <p class="text-gray-700">"Phone: +971 4 XXX XXXX"</p>
                <p class="text-gray-700">"Email: info@albaytalatiq.com"</p>
            </div>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let form = MockForm::<ContactDraft>::new();

    view! {
        <form class="space-y-4" on:submit=move |ev| form.submit(ev)>
            <div>
                <label for="contact-name" class="block text-sm font-medium text-gray-700">"Your Name"</label>
                <input
                    type="text"
                    id="contact-name"
                    class=INPUT_CLASS
                    required
                    on:input=move |ev| form.edit(|d| d.name = event_target_value(&ev))
                />
            </div>
            <div>
                <label for="contact-email" class="block text-sm font-medium text-gray-700">"Business Email"</label>
                <input
                    type="email"
                    id="contact-email"
                    class=INPUT_CLASS
                    required
                    on:input=move |ev| form.edit(|d| d.email = event_target_value(&ev))
                />
            </div>
            <div>
                <label for="contact-message" class="block text-sm font-medium text-gray-700">
                    "Message / Inquiry Details"
                </label>
                <textarea
                    id="contact-message"
                    rows="4"
                    class=INPUT_CLASS
                    required
                    on:input=move |ev| form.edit(|d| d.message = event_target_value(&ev))
                ></textarea>
            </div>
            <button
                type="submit"
                class="w-full bg-indigo-600 hover:bg-indigo-700 text-white font-semibold py-3 px-4 rounded-lg shadow-lg transition duration-300 transform hover:scale-[1.01]"
            >
                "Submit Inquiry"
            </button>
        </form>
        <Show when=move || form.confirming()>
            <p id="contact-message-confirmation" class="mt-4 text-sm text-center text-green-600 font-semibold transition duration-500">
                "Your message has been received! We will respond within one business day."
            </p>
        </Show>
    }
}
