use leptos::{either::Either, ev::SubmitEvent, html, prelude::*};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SectionRefs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("please fill in your {0}")]
    EmptyField(&'static str),
    #[error("that email address doesn't look right")]
    InvalidEmail,
}

/// Checked on the client for instant feedback and again inside the server
/// function, which cannot trust the browser.
pub fn validate(message: &ContactMessage) -> Result<(), ContactError> {
    if message.name.trim().is_empty() {
        return Err(ContactError::EmptyField("name"));
    }
    if message.email.trim().is_empty() {
        return Err(ContactError::EmptyField("email"));
    }
    if message.message.trim().is_empty() {
        return Err(ContactError::EmptyField("message"));
    }
    let Some((local, domain)) = message.email.trim().split_once('@') else {
        return Err(ContactError::InvalidEmail);
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}

/// Accepts a contact-form message and hands it to the delivery layer.
#[server]
pub async fn send_message(message: ContactMessage) -> Result<(), ServerFnError> {
    validate(&message).map_err(|e| ServerFnError::new(e.to_string()))?;
    // Delivery is a deployment concern; the inbox tails the server log.
    log::info!(
        "contact message from {} <{}>: {}",
        message.name.trim(),
        message.email.trim(),
        message.message.trim(),
    );
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormStatus {
    Idle,
    Sending,
    Success,
}

#[component]
pub fn Contact() -> impl IntoView {
    let refs = expect_context::<SectionRefs>();
    let (status, set_status) = signal(FormStatus::Idle);
    let (error, set_error) = signal(None::<String>);

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(name_el), Some(email_el), Some(message_el)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let message = ContactMessage {
            name: name_el.value(),
            email: email_el.value(),
            message: message_el.value(),
        };
        if let Err(e) = validate(&message) {
            set_error(Some(e.to_string()));
            return;
        }
        set_error(None);
        set_status(FormStatus::Sending);
        leptos::task::spawn_local(async move {
            match send_message(message).await {
                Ok(()) => {
                    set_status(FormStatus::Success);
                    if let Some(el) = name_ref.get_untracked() {
                        el.set_value("");
                    }
                    if let Some(el) = email_ref.get_untracked() {
                        el.set_value("");
                    }
                    if let Some(el) = message_ref.get_untracked() {
                        el.set_value("");
                    }
                }
                Err(e) => {
                    log::error!("failed to send contact message: {e}");
                    set_error(Some("Failed to send message. Please try again.".to_string()));
                    set_status(FormStatus::Idle);
                }
            }
        });
    };

    view! {
        <section
            id="contact"
            node_ref=refs.contact
            class="py-24 md:py-32 relative overflow-hidden bg-transparent"
        >
            <div class="absolute top-0 right-0 w-[500px] h-[500px] bg-primary/5 rounded-full blur-[120px] pointer-events-none"></div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-5xl mx-auto">
                    <div class="text-center mb-16 lg:mb-24">
                        <div class="flex flex-col items-center">
                            <div class="flex items-center gap-4 mb-6">
                                <span class="w-12 h-px bg-secondary"></span>
                                <span class="text-secondary font-mono text-lg font-bold tracking-[0.3em] uppercase">
                                    "Inquiry"
                                </span>
                                <span class="w-12 h-px bg-secondary"></span>
                            </div>
                            <h2 class="text-5xl md:text-7xl font-display font-black text-white leading-tight mb-8">
                                "LET'S" <br />
                                <span class="text-transparent bg-clip-text bg-gradient-to-r from-primary via-secondary to-primary animate-gradient">
                                    "CONNECT."
                                </span>
                            </h2>
                            <p class="text-gray-400 max-w-2xl mx-auto text-lg font-light leading-relaxed">
                                "I enjoy meeting new people and ideas. If you're interested in collaborating or have any questions, don't hesitate to contact me."
                            </p>
                        </div>
                    </div>

                    <div class="grid lg:grid-cols-5 gap-12">
                        <div class="lg:col-span-2 space-y-8">
                            <ContactInfo />
                        </div>

                        <div class="lg:col-span-3">
                            <div class="bg-white/5 backdrop-blur-xl border border-white/10 rounded-2xl p-8">
                                {move || {
                                    if status() == FormStatus::Success {
                                        Either::Left(
                                            view! {
                                                <div class="h-full flex flex-col items-center justify-center text-center py-12">
                                                    <div class="w-20 h-20 rounded-full bg-green-500/20 flex items-center justify-center mb-6 text-4xl text-green-500">
                                                        "✓"
                                                    </div>
                                                    <h3 class="text-2xl font-bold text-white mb-2">
                                                        "Message Sent!"
                                                    </h3>
                                                    <p class="text-gray-400">
                                                        "Thank you for reaching out. I'll get back to you soon."
                                                    </p>
                                                    <button
                                                        class="mt-8 text-primary hover:text-accent font-medium"
                                                        on:click=move |_| set_status(FormStatus::Idle)
                                                    >
                                                        "Send another message"
                                                    </button>
                                                </div>
                                            },
                                        )
                                    } else {
                                        Either::Right(
                                            view! {
                                                <form class="space-y-6" on:submit=on_submit>
                                                    <div class="grid md:grid-cols-2 gap-6">
                                                        <input
                                                            node_ref=name_ref
                                                            name="user_name"
                                                            required=true
                                                            type="text"
                                                            placeholder="Full Name"
                                                            class="w-full bg-white/5 border border-white/10 rounded-xl px-4 py-3 text-white"
                                                        />
                                                        <input
                                                            node_ref=email_ref
                                                            name="user_email"
                                                            required=true
                                                            type="email"
                                                            placeholder="Email Address"
                                                            class="w-full bg-white/5 border border-white/10 rounded-xl px-4 py-3 text-white"
                                                        />
                                                    </div>

                                                    <textarea
                                                        node_ref=message_ref
                                                        name="message"
                                                        required=true
                                                        rows="5"
                                                        placeholder="Your Message"
                                                        class="w-full bg-white/5 border border-white/10 rounded-xl px-4 py-3 text-white resize-none"
                                                    ></textarea>

                                                    {move || {
                                                        error()
                                                            .map(|e| {
                                                                view! {
                                                                    <p class="text-sm text-red-400">{e}</p>
                                                                }
                                                            })
                                                    }}

                                                    <button
                                                        type="submit"
                                                        disabled=move || status() == FormStatus::Sending
                                                        class="w-full bg-gradient-to-r from-primary to-accent py-4 rounded-xl font-bold flex items-center justify-center gap-3"
                                                    >
                                                        {move || {
                                                            if status() == FormStatus::Sending {
                                                                "Sending..."
                                                            } else {
                                                                "Send Message"
                                                            }
                                                        }}
                                                    </button>
                                                </form>
                                            },
                                        )
                                    }
                                }}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="bg-white/5 backdrop-blur-xl border border-white/10 rounded-2xl p-8">
            <h3 class="text-xl font-bold text-white mb-6">"Contact Information"</h3>

            <div class="space-y-6">
                <ContactInfoItem
                    label="Email"
                    value="yuliantimunjanan@gmail.com"
                    link="mailto:yuliantimunjanan@gmail.com"
                    icon="✉"
                />
                <ContactInfoItem
                    label="LinkedIn"
                    value="Nazwa Yulianti M"
                    link="https://linkedin.com/in/nazwa-yulianti-munjana-89775b2b4"
                    icon_class="devicon-linkedin-plain"
                />
                <ContactInfoItem
                    label="GitHub"
                    value="nazwaym"
                    link="https://github.com/nazwaym"
                    icon_class="devicon-github-original"
                />
                <ContactInfoItem label="Location" value="Indonesia" link="#" icon="📍" />
            </div>
        </div>
    }
}

#[component]
fn ContactInfoItem(
    label: &'static str,
    value: &'static str,
    link: &'static str,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] icon_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <a href=link class="flex items-center gap-4 group transition-all">
            <div class="w-12 h-12 rounded-xl bg-white/5 flex items-center justify-center border border-white/10 group-hover:border-primary/50 group-hover:bg-primary/5 transition-all text-primary text-xl">
                {icon}
                {icon_class.map(|c| view! { <i class=c></i> })}
            </div>
            <div>
                <p class="text-xs text-gray-500 uppercase tracking-wider">{label}</p>
                <p class="text-gray-200 group-hover:text-primary transition-colors">{value}</p>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_message() {
        let msg = message("Nazwa", "nazwa@example.com", "Hello there!");
        assert_eq!(validate(&msg), Ok(()));
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(
            validate(&message("", "a@b.co", "hi")),
            Err(ContactError::EmptyField("name"))
        );
        assert_eq!(
            validate(&message("N", "   ", "hi")),
            Err(ContactError::EmptyField("email"))
        );
        assert_eq!(
            validate(&message("N", "a@b.co", " \n ")),
            Err(ContactError::EmptyField("message"))
        );
    }

    #[test]
    fn rejects_malformed_email_addresses() {
        for email in ["not-an-email", "@missing.local", "user@", "user@nodot"] {
            assert_eq!(
                validate(&message("N", email, "hi")),
                Err(ContactError::InvalidEmail),
                "{email} should be rejected",
            );
        }
    }

    #[test]
    fn trims_whitespace_before_checking_email() {
        let msg = message("N", "  nazwa@example.com  ", "hi");
        assert_eq!(validate(&msg), Ok(()));
    }
}
