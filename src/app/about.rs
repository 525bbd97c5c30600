use leptos::prelude::*;

use crate::content::{About, Skill};
use crate::motion::{
    Entrance, FloatPath, FloatSpec, MotionConfig, RevealOptions, RevealState, StaggerGroup,
    Transition,
};

use super::{
    hooks::RevealGroup,
    motion::{FloatingShapes, Reveal},
};

const SHAPES: &[FloatSpec] = &[
    FloatSpec {
        class: "w-12 h-12 sm:w-20 sm:h-20 lg:w-28 lg:h-28 border border-cyan-400/40 bg-gradient-to-br from-cyan-400/30 to-transparent blur",
        position: "top:20%;left:8%;",
        duration: 22.0,
        delay: 0.0,
        path: FloatPath::Drift,
    },
    FloatSpec {
        class: "w-10 h-10 sm:w-16 sm:h-16 lg:w-22 lg:h-22 border border-purple-400/40 bg-gradient-to-br from-purple-400/30 to-transparent blur",
        position: "top:60%;right:12%;",
        duration: 28.0,
        delay: 1.5,
        path: FloatPath::Drift,
    },
    FloatSpec {
        class: "w-8 h-8 sm:w-14 sm:h-14 lg:w-18 lg:h-18 border border-slate-400/40 bg-gradient-to-br from-slate-400/30 to-transparent blur",
        position: "top:35%;right:25%;",
        duration: 32.0,
        delay: 3.0,
        path: FloatPath::Drift,
    },
    FloatSpec {
        class: "w-14 h-14 sm:w-18 sm:h-18 lg:w-24 lg:h-24 border border-cyan-400/40 bg-gradient-to-br from-cyan-400/30 to-transparent blur",
        position: "top:75%;left:15%;",
        duration: 26.0,
        delay: 2.0,
        path: FloatPath::Drift,
    },
];

// Blocks of the section, revealed independently.
const HEADER: usize = 0;
const JOURNEY: usize = 1;
const SKILLS: usize = 2;
const PASSIONS: usize = 3;
const INTERESTS: usize = 4;

/// Fill starts this long after its row.
const BAR_LAG: f64 = 0.3;
const BAR_FILL: Transition = Transition::new(0.8);

fn bar_style(skill: &Skill, state: RevealState, transition: &Transition) -> String {
    let width = if state.is_revealed() { skill.level } else { 0 };
    format!("width:{width}%;transition:{};", transition.css(&["width"]))
}

#[component]
fn SkillBars(skills: &'static [Skill], stagger: StaggerGroup) -> impl IntoView {
    let group = RevealGroup::new(skills.len(), stagger, RevealOptions::default());
    skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let fill = BAR_FILL.with_delay(group.delay(i) + BAR_LAG);
            view! {
                <Reveal group=group index=i entrance=Entrance::slide(-50.0) class="mb-4 lg:mb-6 group cursor-pointer">
                    <div class="flex justify-between items-center mb-2 lg:mb-3">
                        <div class="flex items-center space-x-3">
                            <i class=format!("{} text-2xl", skill.icon) />
                            <span class="text-gray-300 font-medium text-base lg:text-lg">
                                {skill.name.as_str()}
                            </span>
                        </div>
                        <span class="text-gray-400 text-sm lg:text-base">{skill.level} "%"</span>
                    </div>
                    <div class="w-full bg-gray-800 rounded-full h-2 lg:h-3 overflow-visible">
                        <div
                            class=format!(
                                "h-full bg-gradient-to-r {} rounded-full relative group-hover:shadow-lg",
                                skill.accent.bar_class(),
                            )
                            style=move || bar_style(skill, group.state(i), &fill)
                        >
                            <div class="absolute inset-0 bg-white/20 rounded-full animate-pulse"></div>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view()
}

#[component]
pub fn AboutSection(about: &'static About, config: &'static MotionConfig) -> impl IntoView {
    let blocks = RevealGroup::new(5, StaggerGroup::new(0.0, 0.0), RevealOptions::default());
    let passions = RevealGroup::new(about.passions.len(), config.card_group(), RevealOptions::default());
    let interests = RevealGroup::new(about.interests.len(), config.card_group(), RevealOptions::default());

    view! {
        <section
            id="about"
            class="relative bg-gradient-to-b from-black via-gray-900 to-gray-950 px-4 sm:px-6 lg:px-8 overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-gray-900/20 to-transparent"></div>
            <FloatingShapes shapes=SHAPES />

            <div class="relative max-w-7xl mx-auto">
                <div class="min-h-screen flex flex-col justify-center py-16 lg:py-20">
                    <Reveal group=blocks index=HEADER entrance=Entrance::rise(30.0) duration=0.8 class="text-center mb-12 lg:mb-16">
                        <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold text-white mb-4 lg:mb-6">
                            "About "
                            <span class="text-transparent bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text">
                                "Me"
                            </span>
                        </h2>
                        <p class="text-gray-400 text-lg lg:text-xl max-w-3xl mx-auto">
                            "Get to know the person behind the code"
                        </p>
                    </Reveal>

                    <div class="grid lg:grid-cols-2 gap-8 lg:gap-12 mb-12 lg:mb-20">
                        <Reveal group=blocks index=JOURNEY entrance=Entrance::slide(-50.0) duration=0.8>
                            <div class="bg-gray-800/30 backdrop-blur-sm border border-gray-700/50 rounded-2xl p-6 lg:p-10 h-full">
                                <h3 class="text-2xl lg:text-3xl font-bold text-white mb-6 lg:mb-8">
                                    "My Journey"
                                </h3>
                                <div class="space-y-4 lg:space-y-6 text-gray-300 leading-relaxed text-base lg:text-lg">
                                    {about.journey.iter().map(|p| view! { <p>{p.as_str()}</p> }).collect_view()}
                                </div>
                            </div>
                        </Reveal>

                        <Reveal group=blocks index=SKILLS entrance=Entrance::slide(50.0) duration=0.8>
                            <div class="bg-gray-800/30 backdrop-blur-sm border border-gray-700/50 rounded-2xl p-6 lg:p-10 h-full">
                                <h3 class="text-2xl lg:text-3xl font-bold text-white mb-6 lg:mb-8">
                                    "Skills & Technologies"
                                </h3>
                                <div class="space-y-4 lg:space-y-6">
                                    <SkillBars skills=about.skills.as_slice() stagger=config.card_group() />
                                </div>
                            </div>
                        </Reveal>
                    </div>

                    <Reveal group=blocks index=PASSIONS entrance=Entrance::rise(30.0) duration=0.8 class="mb-12 lg:mb-20">
                        <h3 class="text-3xl lg:text-4xl font-bold text-white text-center mb-8 lg:mb-12">
                            "What Drives "
                            <span class="text-transparent bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text">
                                "Me"
                            </span>
                        </h3>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6 lg:gap-8 max-w-5xl mx-auto">
                            {about
                                .passions
                                .iter()
                                .enumerate()
                                .map(|(i, passion)| {
                                    view! {
                                        <Reveal group=passions index=i entrance=Entrance::rise(30.0) class="relative bg-gradient-to-br from-gray-800/60 via-gray-900/40 to-black/60 backdrop-blur-md border border-gray-600/30 rounded-2xl p-6 lg:p-10 hover:border-cyan-400/60 transition-colors duration-500 group overflow-hidden">
                                            <div class="absolute inset-0 bg-gradient-to-br from-cyan-400/5 to-purple-400/5 opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                                            <div class="relative z-10">
                                                <div class="w-16 h-16 lg:w-20 lg:h-20 bg-gradient-to-br from-cyan-400/30 to-purple-400/30 rounded-2xl flex items-center justify-center mb-6 lg:mb-8 text-3xl group-hover:rotate-12 group-hover:scale-110 transition-all duration-500">
                                                    {passion.icon.as_str()}
                                                </div>
                                                <h3 class="text-xl lg:text-2xl font-bold text-white mb-3 lg:mb-4 group-hover:text-cyan-100 transition-colors duration-300">
                                                    {passion.title.as_str()}
                                                </h3>
                                                <p class="text-gray-400 leading-relaxed text-base lg:text-lg group-hover:text-gray-300 transition-colors duration-300">
                                                    {passion.desc.as_str()}
                                                </p>
                                            </div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal group=blocks index=INTERESTS entrance=Entrance::rise(30.0) duration=0.8 class="text-center">
                        <h3 class="text-2xl lg:text-3xl font-bold text-white mb-8 lg:mb-12">
                            "Beyond Code"
                        </h3>
                        <div class="flex flex-wrap justify-center gap-4 lg:gap-6 max-w-3xl mx-auto">
                            {about
                                .interests
                                .iter()
                                .enumerate()
                                .map(|(i, interest)| {
                                    view! {
                                        <Reveal group=interests index=i entrance=Entrance::grow(0.8) duration=0.5 class="flex items-center space-x-3 bg-gray-800/30 rounded-lg px-4 lg:px-6 py-3 lg:py-4 hover:bg-gray-700/30 transition-colors duration-300">
                                            <span class="text-cyan-400 text-xl">{interest.icon.as_str()}</span>
                                            <span class="text-gray-300 text-base lg:text-lg">
                                                {interest.text.as_str()}
                                            </span>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
