use leptos::prelude::*;

use crate::content::Hero;
use crate::motion::{FloatPath, FloatSpec, MotionProfile, StaggerGroup, Transition};

use super::{
    hooks::{scroll_to_anchor, use_motion_profile},
    motion::FloatingShapes,
};

const SHAPES: &[FloatSpec] = &[
    FloatSpec {
        class: "w-16 h-16 sm:w-24 sm:h-24 lg:w-32 lg:h-32 border border-cyan-400/40 bg-gradient-to-br from-cyan-400/30 to-transparent shadow-lg shadow-cyan-400/20 blur",
        position: "top:15%;left:10%;",
        duration: 20.0,
        delay: 0.0,
        path: FloatPath::Drift,
    },
    FloatSpec {
        class: "w-12 h-12 sm:w-20 sm:h-20 lg:w-24 lg:h-24 border border-purple-400/40 bg-gradient-to-br from-purple-400/30 to-transparent shadow-lg shadow-purple-400/20 blur",
        position: "top:70%;right:15%;",
        duration: 25.0,
        delay: 1.0,
        path: FloatPath::Drift,
    },
    FloatSpec {
        class: "w-10 h-10 sm:w-16 sm:h-16 lg:w-20 lg:h-20 border border-slate-400/40 bg-gradient-to-br from-slate-400/30 to-transparent shadow-lg shadow-slate-400/20 blur",
        position: "top:40%;right:20%;",
        duration: 30.0,
        delay: 2.0,
        path: FloatPath::Drift,
    },
];

const TAGLINE: Transition = Transition::new(0.8).with_delay(0.3);
const HEADING: Transition = Transition::new(0.8).with_delay(0.6);
const GREETING: Transition = Transition::new(0.6).with_delay(0.6);
const DESCRIPTION: Transition = Transition::new(0.8).with_delay(1.4);
const BUTTON: Transition = Transition::new(0.8).with_delay(1.7);
const LETTER_DURATION: f64 = 0.6;

/// One-shot entrance played on load. Reduced motion swaps the movement for a
/// plain fade.
fn entrance(profile: &MotionProfile, keyframes: &'static str, transition: &Transition) -> String {
    let keyframes = if profile.is_reduced() { "fade" } else { keyframes };
    format!("animation:{};", transition.animation_css(keyframes))
}

#[component]
fn AnimatedName(text: &'static str, start_index: usize, letters: StaggerGroup) -> impl IntoView {
    let profile = use_motion_profile();
    text.chars()
        .enumerate()
        .map(|(i, letter)| {
            if letter == ' ' {
                return view! { <span class="inline-block w-4"></span> }.into_any();
            }
            let transition = Transition::new(LETTER_DURATION).with_delay(letters.delay_for(start_index + i));
            view! {
                <span
                    class="inline-block text-transparent bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text cursor-default transition-all duration-300 hover:scale-110 hover:-translate-y-2 drop-shadow-[0_0_8px_rgba(34,211,238,0.3)]"
                    style=move || profile.with(|p| entrance(p, "rise", &transition))
                >
                    {letter.to_string()}
                </span>
            }
            .into_any()
        })
        .collect_view()
}

#[component]
pub fn HeroSection(hero: &'static Hero, letters: StaggerGroup) -> impl IntoView {
    let profile = use_motion_profile();
    let style = move |keyframes: &'static str, transition: Transition| {
        move || profile.with(|p| entrance(p, keyframes, &transition))
    };

    view! {
        <section class="relative flex flex-col items-center justify-center min-h-screen text-center px-4 sm:px-6 lg:px-8 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-gray-950 via-gray-900 to-black"></div>
            <div class="absolute inset-0 z-0 hero-radial"></div>
            <div class="absolute inset-0 z-0 hero-grid"></div>
            <FloatingShapes shapes=SHAPES />

            <div class="relative z-10 max-w-4xl mx-auto py-12 px-4 md:px-8 flex flex-col items-center justify-center min-h-screen">
                <p
                    class="uppercase text-sm sm:text-base tracking-widest text-gray-400 mb-8 font-medium"
                    style=style("rise", TAGLINE)
                >
                    {hero.tagline.as_str()}
                </p>

                <h1
                    class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-extrabold leading-tight text-white mb-6 md:mb-8"
                    style=style("rise", HEADING)
                >
                    <span class="inline-block" style=style("slide-in", GREETING)>
                        {hero.greeting.as_str()}
                    </span>
                    " "
                    {hero
                        .name_lines
                        .iter()
                        .map(|line| {
                            view! {
                                <br />
                                <div class="inline-block">
                                    <AnimatedName
                                        text=line.text.as_str()
                                        start_index=line.start_index
                                        letters=letters
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </h1>

                <p
                    class="text-lg md:text-xl text-gray-300 mb-8 max-w-2xl mx-auto leading-relaxed"
                    style=style("rise", DESCRIPTION)
                >
                    {hero
                        .description
                        .iter()
                        .map(|fragment| match fragment.accent {
                            Some(accent) => {
                                view! {
                                    <span class=format!("{} font-semibold", accent.text_class())>
                                        {fragment.text.as_str()}
                                    </span>
                                }
                                    .into_any()
                            }
                            None => fragment.text.as_str().into_any(),
                        })
                        .collect_view()}
                </p>

                <button
                    class="relative px-8 py-4 bg-gray-800/50 backdrop-blur-sm border border-gray-700 rounded-xl text-white font-medium text-lg overflow-hidden transition-all duration-300 hover:bg-gray-700/50 hover:border-cyan-400/50 group hover:shadow-lg hover:shadow-cyan-400/20 mb-6"
                    style=style("rise", BUTTON)
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_anchor(&hero.cta_target);
                    }
                >
                    <span class="absolute inset-0 bg-gradient-to-r from-cyan-500 to-purple-500 opacity-0 group-hover:opacity-100 transition-opacity duration-500 blur-md"></span>
                    <span class="relative z-10 flex items-center gap-2">
                        {hero.cta_label.as_str()}
                        <span class="transition-transform group-hover:translate-x-1">"→"</span>
                    </span>
                </button>
            </div>
        </section>
    }
}
