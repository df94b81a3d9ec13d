use yew::prelude::*;
use web_sys::SubmitEvent;
use log::warn;

use crate::components::animation::{stagger_delay, FadeInWhenVisible, Offset, ROW_DURATION_MS, ROW_STAGGER_MS};
use crate::content::{ContactField, CONTACT_FIELDS};

const FIELD_CLASS: &str = "w-full px-4 py-2 bg-gray-900 border border-gray-700 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent text-white";

fn field_input(field: &ContactField) -> Html {
    match field.kind.input_type() {
        Some(input_type) => html! {
            <input type={input_type} id={field.id} name={field.id} class={FIELD_CLASS} />
        },
        None => html! {
            <textarea id={field.id} name={field.id} rows="4" class={FIELD_CLASS} />
        },
    }
}

/// Presentational only. Submitting stays on the page and sends nothing.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        warn!("Contact form submission is not implemented");
        gloo_console::warn!("Messages can't be sent from this form yet.");
    });

    html! {
        <form class="space-y-6" {onsubmit}>
            { for CONTACT_FIELDS.iter().enumerate().map(|(index, field)| html! {
                <FadeInWhenVisible
                    key={field.id}
                    delay_ms={stagger_delay(index, ROW_STAGGER_MS)}
                    offset={Offset::Y(20)}
                    duration_ms={ROW_DURATION_MS}
                >
                    <label for={field.id} class="block text-sm font-medium text-gray-300 mb-1">
                        { field.label }
                    </label>
                    { field_input(field) }
                </FadeInWhenVisible>
            }) }
            <button type="submit" class="press-button-subtle w-full bg-blue-600 text-white px-6 py-3 rounded-lg font-medium hover:bg-blue-700">
                {"Send Message"}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_with_id<'a>(html: &'a str, tag: &str, id: &str) -> Option<&'a str> {
        let needle = format!("id=\"{}\"", id);
        html.match_indices(&format!("<{}", tag))
            .map(|(start, _)| {
                let end = html[start..].find('>').map_or(html.len(), |i| start + i);
                &html[start..end]
            })
            .find(|tag| tag.contains(&needle))
    }

    #[tokio::test]
    async fn renders_name_email_and_multiline_message() {
        let html = yew::ServerRenderer::<ContactForm>::new()
            .hydratable(false)
            .render()
            .await;

        assert_eq!(html.matches("<input").count(), 2, "{}", html);
        assert_eq!(html.matches("<textarea").count(), 1, "{}", html);

        let name = tag_with_id(&html, "input", "name").expect("name input");
        assert!(name.contains("type=\"text\""), "{}", name);
        let email = tag_with_id(&html, "input", "email").expect("email input");
        assert!(email.contains("type=\"email\""), "{}", email);
        assert!(tag_with_id(&html, "textarea", "message").is_some(), "{}", html);
        assert!(tag_with_id(&html, "input", "message").is_none(), "{}", html);

        let name_at = html.find("id=\"name\"").unwrap_or(usize::MAX);
        let message_at = html.find("id=\"message\"").unwrap_or(0);
        assert!(name_at < message_at);
    }

    #[tokio::test]
    async fn submit_button_is_inside_the_form() {
        let html = yew::ServerRenderer::<ContactForm>::new()
            .hydratable(false)
            .render()
            .await;

        let button = html.find("type=\"submit\"").expect("submit button");
        assert!(button < html.find("</form>").unwrap_or(0));
        assert!(html.contains("Send Message"));
    }
}
