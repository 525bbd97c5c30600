use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::motion::{scroll::back_to_top_visible, Entrance, RevealOptions};

use super::{
    hooks::{scroll_to_top, use_scroll_signals, RevealGroup},
    motion::Reveal,
};

/// Year shown in the copyright line, taken from the build timestamp.
fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer(owner: &'static str, back_to_top_threshold: u32) -> impl IntoView {
    let scroll = use_scroll_signals();
    let show_button = Memo::new(move |_| back_to_top_visible(scroll.offset.get(), back_to_top_threshold));
    let line = RevealGroup::single(RevealOptions::default());

    let button_style = move || {
        if show_button.get() {
            "opacity:1;transform:none;"
        } else {
            "opacity:0;transform:translateY(20px) scale(0.8);pointer-events:none;"
        }
    };

    view! {
        <footer class="relative bg-gradient-to-b from-gray-950 to-black overflow-hidden">
            <div class="relative w-full h-px">
                <div class="absolute inset-0 footer-line" />
                <div class="absolute inset-0 bg-gradient-to-r from-transparent via-cyan-400/10 to-transparent blur-sm" />
            </div>

            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="py-8 lg:py-12">
                    <Reveal group=line entrance=Entrance::rise(20.0) class="text-center">
                        <p class="text-gray-400 text-sm lg:text-base font-medium transition-colors duration-300 hover:text-gray-300">
                            "© " {copyright_year()} " " {owner} ". All rights reserved."
                        </p>
                    </Reveal>
                </div>

                <button
                    class="group fixed bottom-8 right-8 p-4 bg-gradient-to-r from-gray-800/80 to-gray-900/80 backdrop-blur-xl border-2 border-gray-600/40 rounded-xl text-white shadow-2xl transition-all duration-300 hover:border-cyan-400/50 hover:shadow-lg hover:shadow-cyan-400/20 z-50"
                    style=button_style
                    title="Back to top"
                    aria-label="Back to top"
                    on:click=move |_| scroll_to_top()
                >
                    <span class="absolute inset-0 bg-gradient-to-r from-cyan-500/10 to-purple-500/10 opacity-0 group-hover:opacity-100 transition-all duration-500 rounded-xl blur-md"></span>
                    <span class="relative z-10 block transition-transform duration-300 group-hover:-translate-y-0.5">
                        "▲"
                    </span>
                </button>
            </div>

            <div class="absolute inset-0 bg-gradient-to-t from-black/50 via-transparent to-transparent pointer-events-none" />
            <div class="absolute bottom-0 left-1/4 w-1/2 h-px bg-gradient-to-r from-transparent via-gray-600/20 to-transparent" />
        </footer>
    }
}
