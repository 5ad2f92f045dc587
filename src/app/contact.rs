use leptos::{ev::SubmitEvent, prelude::*};

use crate::{
    config::SiteConfig,
    contact::{open_mail_client, ContactState, Field, SubmissionStatus},
};

use super::section::Section;

const INPUT_CLASS: &str = "w-full rounded-md border border-gray-300 dark:border-gray-700 bg-white dark:bg-gray-900 text-gray-900 dark:text-white px-3 py-2 focus:outline-none focus:ring-2 focus:ring-gray-400 dark:focus:ring-gray-600 transition-colors";

fn status_class(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Sent => "text-green-600 dark:text-green-400 text-sm",
        SubmissionStatus::Error | SubmissionStatus::Idle => "text-red-600 dark:text-red-400 text-sm",
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let state = RwSignal::new(ContactState::default());

    let value_of = move |field: Field| state.with(|s| s.form().field(field).to_string());
    let set_field = move |field: Field, value: String| state.update(|s| s.update_field(field, value));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.update(|s| {
            s.submit(config.contact_address, &mut open_mail_client);
        });
        log::info!(
            "contact form submitted: {:?}",
            state.with_untracked(|s| s.status())
        );
    };

    view! {
        <Section id="contact" title="Contact me" subtitle="Let's collaborate on your next project.">
            <form on:submit=on_submit class="space-y-4 max-w-lg font-sans">
                <input
                    type="text"
                    placeholder=Field::Name.placeholder()
                    prop:value=move || value_of(Field::Name)
                    on:input=move |ev| set_field(Field::Name, event_target_value(&ev))
                    class=INPUT_CLASS
                />
                <input
                    type="email"
                    placeholder=Field::Email.placeholder()
                    prop:value=move || value_of(Field::Email)
                    on:input=move |ev| set_field(Field::Email, event_target_value(&ev))
                    class=INPUT_CLASS
                />
                <textarea
                    placeholder=Field::Message.placeholder()
                    prop:value=move || value_of(Field::Message)
                    on:input=move |ev| set_field(Field::Message, event_target_value(&ev))
                    class=INPUT_CLASS
                ></textarea>
                <button
                    type="submit"
                    class="bg-black dark:bg-white text-white dark:text-black px-4 py-2 rounded-md hover:opacity-90 transition-all"
                >
                    "Send message"
                </button>
                {move || {
                    let status = state.with(|s| s.status());
                    status.message().map(|msg| view! { <p class=status_class(status)>{msg}</p> })
                }}
            </form>
        </Section>
    }
}
