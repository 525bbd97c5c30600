use std::sync::Arc;

use leptos::{ev::SubmitEvent, prelude::*};

use crate::contact::{ContactError, ContactMessage, Outbox, SubmitState};
use crate::content::{Contact, ContactItem, SocialLink};
use crate::motion::{Entrance, FloatPath, FloatSpec, MotionConfig, RevealOptions};

use super::{
    hooks::RevealGroup,
    motion::{FloatingShapes, Reveal, SmoothLoader},
};

const SHAPES: &[FloatSpec] = &[
    FloatSpec {
        class: "w-12 h-12 border bg-cyan-500/10 border-cyan-400/20",
        position: "top:15%;right:10%;",
        duration: 6.0,
        delay: 0.0,
        path: FloatPath::Bob,
    },
    FloatSpec {
        class: "w-16 h-16 border bg-purple-500/10 border-purple-400/20",
        position: "bottom:20%;left:8%;",
        duration: 8.0,
        delay: 1.0,
        path: FloatPath::Bob,
    },
    FloatSpec {
        class: "w-10 h-10 border bg-emerald-500/10 border-emerald-400/20",
        position: "top:60%;right:5%;",
        duration: 7.0,
        delay: 2.0,
        path: FloatPath::Bob,
    },
];

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-gray-800 border border-gray-700 rounded-lg text-white placeholder-gray-400 focus:border-cyan-400 focus:outline-none transition-colors duration-200";

#[component]
fn ContactForm() -> impl IntoView {
    let outbox = expect_context::<Arc<dyn Outbox>>();
    let form = RwSignal::new(ContactMessage::default());
    let submit = RwSignal::new(SubmitState::default());
    let (error, set_error) = signal(None::<String>);
    let timer = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(h) = timer.try_get_value().flatten() {
            h.clear();
        }
    });

    let finish = move || {
        submit.update(|s| s.finish());
        form.set(ContactMessage::default());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let message = form.get_untracked();
        let started = submit
            .try_update(|s| s.begin(outbox.as_ref(), message))
            .unwrap_or(Err(ContactError::Busy));
        match started {
            Ok(delay) => {
                set_error(None);
                match set_timeout_with_handle(finish, delay) {
                    Ok(h) => timer.set_value(Some(h)),
                    Err(e) => {
                        log::warn!("couldn't schedule send completion: {e:?}");
                        finish();
                    }
                }
            }
            Err(ContactError::Busy) => {}
            Err(e) => set_error(Some(e.to_string())),
        }
    };

    let sending = move || submit.get().is_sending();

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-gray-300 text-sm font-medium mb-2">"Name"</label>
                    <input
                        type="text"
                        name="name"
                        required
                        class=INPUT_CLASS
                        placeholder="Your name"
                        prop:value=move || form.with(|m| m.name.clone())
                        on:input=move |ev| form.update(|m| m.name = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-gray-300 text-sm font-medium mb-2">"Email"</label>
                    <input
                        type="email"
                        name="email"
                        required
                        class=INPUT_CLASS
                        placeholder="your@email.com"
                        prop:value=move || form.with(|m| m.email.clone())
                        on:input=move |ev| form.update(|m| m.email = event_target_value(&ev))
                    />
                </div>
            </div>

            <div>
                <label class="block text-gray-300 text-sm font-medium mb-2">"Subject"</label>
                <input
                    type="text"
                    name="subject"
                    required
                    class=INPUT_CLASS
                    placeholder="Project discussion"
                    prop:value=move || form.with(|m| m.subject.clone())
                    on:input=move |ev| form.update(|m| m.subject = event_target_value(&ev))
                />
            </div>

            <div>
                <label class="block text-gray-300 text-sm font-medium mb-2">"Message"</label>
                <textarea
                    name="message"
                    required
                    rows=5
                    class=format!("{INPUT_CLASS} resize-none")
                    placeholder="Tell me about your project..."
                    prop:value=move || form.with(|m| m.message.clone())
                    on:input=move |ev| form.update(|m| m.message = event_target_value(&ev))
                />
            </div>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! { <p class="text-rose-400 text-sm" role="alert">{e}</p> }
                    })
            }}

            <button
                type="submit"
                disabled=sending
                class="w-full px-6 py-3 bg-gradient-to-r from-cyan-500 to-blue-500 hover:from-cyan-600 hover:to-blue-600 rounded-lg text-white font-semibold transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center space-x-2"
            >
                <Show
                    when=sending
                    fallback=|| {
                        view! {
                            <span>"➤"</span>
                            <span>"Send Message"</span>
                        }
                    }
                >
                    <div class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin" />
                    <span>"Sending..."</span>
                </Show>
            </button>
        </form>
    }
}

#[component]
fn ContactCard(item: &'static ContactItem) -> impl IntoView {
    let inner = view! {
        <div class=format!("p-2 rounded-lg {}", item.accent.badge_class())>
            <span class="text-base">{item.icon.as_str()}</span>
        </div>
        <div>
            <p class="text-gray-400 text-sm">{item.label.as_str()}</p>
            <p class="text-white font-medium">{item.value.as_str()}</p>
        </div>
    };
    let class = "flex items-center space-x-4 p-4 bg-gray-800 border border-gray-700 rounded-lg hover:border-gray-600 hover:translate-x-1 transition-all duration-200";
    match &item.href {
        Some(href) => {
            let target = item.new_tab.then_some("_blank");
            view! {
                <a href=href.as_str() target=target class=format!("{class} cursor-pointer")>
                    {inner}
                </a>
            }
            .into_any()
        }
        None => view! { <div class=class>{inner}</div> }.into_any(),
    }
}

#[component]
fn ContactInfo(
    items: &'static [ContactItem],
    socials: &'static [SocialLink],
    config: &'static MotionConfig,
) -> impl IntoView {
    // Contact rows keep their observer after revealing; the latch still holds.
    let item_options = RevealOptions {
        once: false,
        ..RevealOptions::default()
    };
    let rows = RevealGroup::new(items.len(), config.card_group(), item_options);
    let links = RevealGroup::new(socials.len(), config.card_group(), RevealOptions::default());

    view! {
        <div class="space-y-8">
            <div>
                <h3 class="text-xl font-bold text-white mb-4 flex items-center">
                    <span class="mr-2 text-cyan-400">"💬"</span>
                    "Get In Touch"
                </h3>
                <p class="text-gray-400 leading-relaxed">
                    "I'm always open to discussing new opportunities and collaborations."
                </p>
            </div>

            <div class="space-y-4">
                {items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! {
                            <Reveal group=rows index=i entrance=Entrance::rise(20.0) duration=0.5>
                                <ContactCard item=item />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="pt-6 border-t border-gray-700">
                <h4 class="text-lg font-semibold text-white mb-4">"Connect With Me"</h4>
                <div class="flex space-x-3">
                    {socials
                        .iter()
                        .enumerate()
                        .map(|(i, social)| {
                            view! {
                                <Reveal group=links index=i entrance=Entrance::grow(0.8) duration=0.3>
                                    <a
                                        href=social.href.as_str()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        title=social.label.as_str()
                                        aria-label=social.label.as_str()
                                        class="block p-3 bg-gradient-to-r from-gray-600 to-gray-800 rounded-lg text-white hover:shadow-lg hover:-translate-y-0.5 transition-all duration-200"
                                    >
                                        <i class=format!("{} text-xl", social.icon) />
                                    </a>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection(contact: &'static Contact, config: &'static MotionConfig) -> impl IntoView {
    let [header_delay, grid_delay, status_delay] = config.loader_delays_ms;

    view! {
        <section
            id="contact"
            class="relative bg-gradient-to-b from-gray-950 to-gray-900 px-4 sm:px-6 lg:px-8 overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-b from-gray-900/30 to-transparent" />
            <FloatingShapes shapes=SHAPES />

            <div class="relative max-w-6xl mx-auto">
                <SmoothLoader delay_ms=header_delay>
                    <div class="min-h-screen flex flex-col justify-center py-20">
                        <div class="text-center mb-16">
                            <div class="inline-block bg-gray-900 border border-gray-800 rounded-2xl px-6 py-3 mb-6 transition-transform duration-300 hover:scale-105">
                                <div class="flex items-center space-x-2">
                                    <span class="text-cyan-400">"✦"</span>
                                    <span class="text-gray-300 font-semibold">"Let's Connect"</span>
                                </div>
                            </div>
                            <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold text-white mb-6">
                                "Contact "
                                <span class="text-transparent bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text">
                                    "Me"
                                </span>
                            </h2>
                            <p class="text-gray-400 text-lg max-w-3xl mx-auto">
                                "Ready to bring your ideas to life? Let's start a conversation and build something amazing together."
                            </p>
                        </div>

                        <SmoothLoader delay_ms=grid_delay>
                            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-start">
                                <div class="bg-gray-900 border border-gray-800 rounded-2xl p-8">
                                    <div class="flex items-center space-x-3 mb-6">
                                        <div class="p-2 bg-cyan-500/10 rounded-lg">
                                            <span class="text-cyan-400">"✉️"</span>
                                        </div>
                                        <h3 class="text-xl font-bold text-white">"Send a Message"</h3>
                                    </div>
                                    <ContactForm />
                                </div>

                                <div>
                                    <ContactInfo
                                        items=contact.items.as_slice()
                                        socials=contact.socials.as_slice()
                                        config=config
                                    />
                                    <SmoothLoader delay_ms=status_delay>
                                        <div class="mt-8 p-4 bg-emerald-500/10 border border-emerald-500/30 rounded-lg">
                                            <div class="flex items-center space-x-2 mb-2">
                                                <div class="w-2 h-2 bg-emerald-400 rounded-full animate-pulse" />
                                                <span class="text-emerald-400 font-semibold text-sm">
                                                    "Available for Work"
                                                </span>
                                            </div>
                                            <p class="text-gray-400 text-sm">
                                                "Currently open to new opportunities and exciting projects!"
                                            </p>
                                        </div>
                                    </SmoothLoader>
                                </div>
                            </div>
                        </SmoothLoader>
                    </div>
                </SmoothLoader>
            </div>
        </section>
    }
}
