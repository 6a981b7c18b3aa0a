use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icon::SvgIcon;
use crate::config;
use crate::contact::ContactDraft;
use crate::content::Icon;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let error = use_state(|| None::<String>);
    let sent = use_state(|| false);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                email: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                message: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.mailto(config::contact_email()) {
                Ok(url) => {
                    info!("Opening mail client for contact enquiry");
                    error.set(None);
                    if let Some(window) = web_sys::window() {
                        if let Err(err) = window.location().set_href(&url) {
                            warn!("Could not open mailto link: {:?}", err);
                            error.set(Some(format!(
                                "Couldn't open your mail app. Write to us at {}.",
                                config::contact_email()
                            )));
                            return;
                        }
                    }
                    sent.set(true);
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    sent.set(false);
                }
            }
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit} novalidate={true}>
            <style>
                {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-form label {
                        display: block;
                        color: #9ca3af;
                        font-size: 0.875rem;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        background: rgba(0, 0, 0, 0.5);
                        border: 1px solid #374151;
                        border-radius: 0.5rem;
                        padding: 0.75rem;
                        color: #fff;
                        font: inherit;
                        outline: none;
                        transition: all 0.15s;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        border-color: #006B3F;
                        box-shadow: 0 0 0 1px #006B3F;
                    }
                    .contact-form .form-error {
                        color: #f87171;
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .contact-form .form-sent {
                        color: #FDC500;
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .contact-form .send-button {
                        width: 100%;
                        background: #006B3F;
                        color: #fff;
                        font-weight: 700;
                        padding: 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        cursor: pointer;
                        transition: background 0.15s;
                    }
                    .contact-form .send-button:hover {
                        background: #15803d;
                    }
                    .contact-form .send-button svg {
                        transition: transform 0.15s;
                    }
                    .contact-form .send-button:hover svg {
                        transform: translateX(4px);
                    }
                "#}
            </style>
            <div>
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Your Name"
                    value={draft.name.clone()}
                    oninput={on_name}
                />
            </div>
            <div>
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    placeholder="your@email.com"
                    value={draft.email.clone()}
                    oninput={on_email}
                />
            </div>
            <div>
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    rows="4"
                    placeholder="Tell us about your project..."
                    value={draft.message.clone()}
                    oninput={on_message}
                />
            </div>
            {
                if let Some(message) = (*error).clone() {
                    html! { <p class="form-error">{ message }</p> }
                } else if *sent {
                    html! { <p class="form-sent">{"Your mail app should open with the message ready to send."}</p> }
                } else {
                    html! {}
                }
            }
            <button type="submit" class="send-button">
                {"Send Message"}
                <SvgIcon icon={Icon::ArrowRight} size={20} />
            </button>
        </form>
    }
}
