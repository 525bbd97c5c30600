use leptos::prelude::*;

use crate::content::Project;
use crate::motion::{Entrance, FloatPath, FloatSpec, MotionConfig, RevealOptions};

use super::{
    hooks::RevealGroup,
    motion::{FloatingShapes, Reveal, SmoothLoader},
};

const SHAPES: &[FloatSpec] = &[FloatSpec {
    class: "w-16 h-16 border bg-purple-500/10 border-purple-400/20",
    position: "top:10%;left:5%;",
    duration: 4.0,
    delay: 0.0,
    path: FloatPath::Bob,
}];

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let gradient = project.accent.gradient_class();
    view! {
        <div class="flex items-center justify-between mb-6">
            <div class=format!(
                "inline-flex items-center space-x-2 px-4 py-2 rounded-full text-sm font-semibold bg-gradient-to-r {gradient} text-white",
            )>
                <span>"✦"</span>
                <span>{project.category.as_str()}</span>
            </div>
        </div>

        <h3 class="text-2xl font-bold text-white mb-4 hover:text-cyan-400 transition-colors duration-300">
            {project.title.as_str()}
        </h3>

        <p class="text-gray-400 mb-6 leading-relaxed">{project.description.as_str()}</p>

        <div class="flex flex-wrap gap-2 mb-8">
            {project
                .technologies
                .iter()
                .map(|tech| {
                    view! {
                        <span class="px-3 py-1.5 text-sm bg-gray-800 text-gray-300 rounded-lg border border-gray-700 hover:border-gray-600 hover:text-white transition-colors duration-200">
                            {tech.as_str()}
                        </span>
                    }
                })
                .collect_view()}
        </div>

        <div class="flex space-x-4">
            <a
                href=project.github_url.as_str()
                target="_blank"
                rel="noopener noreferrer"
                class="flex items-center space-x-2 px-6 py-3 bg-gray-800 hover:bg-gray-700 rounded-xl transition-colors duration-200 text-gray-300 hover:text-white border border-gray-700 hover:border-gray-600"
            >
                <i class="devicon-github-plain" />
                <span>"Code"</span>
            </a>
            <a
                href=project.live_url.as_str()
                target="_blank"
                rel="noopener noreferrer"
                class=format!(
                    "flex items-center space-x-2 px-6 py-3 bg-gradient-to-r {gradient} rounded-xl text-white font-semibold hover:opacity-90 transition-opacity duration-200",
                )
            >
                <span>"↗"</span>
                <span>"Demo"</span>
            </a>
        </div>
    }
}

#[component]
pub fn ProjectsSection(
    projects: &'static [Project],
    github_profile: &'static str,
    config: &'static MotionConfig,
) -> impl IntoView {
    let options = config.card_options().unwrap_or_else(|e| {
        log::warn!("bad card margin {:?}: {e}", config.card_margin);
        RevealOptions::default()
    });
    let cards = RevealGroup::new(projects.len(), config.card_group(), options);
    let [header_delay, grid_delay, cta_delay] = config.loader_delays_ms;

    view! {
        <section
            id="projects"
            class="relative bg-gradient-to-b from-gray-950 to-gray-900 px-4 sm:px-6 lg:px-8 overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-b from-gray-900/50 to-transparent" />
            <FloatingShapes shapes=SHAPES />

            <div class="relative max-w-6xl mx-auto">
                <SmoothLoader delay_ms=header_delay>
                    <div class="min-h-screen flex flex-col justify-center py-20">
                        <div class="text-center mb-16">
                            <div class="inline-block bg-gray-900 border border-gray-800 rounded-2xl px-6 py-3 mb-6 transition-transform duration-300 hover:scale-105">
                                <span class="text-cyan-400 font-semibold">"✨ Featured Work"</span>
                            </div>
                            <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold text-white mb-6">
                                "My "
                                <span class="text-transparent bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text">
                                    "Projects"
                                </span>
                            </h2>
                            <p class="text-gray-400 text-lg max-w-3xl mx-auto">
                                "A showcase of my passion projects and professional work, crafted with modern technologies"
                            </p>
                        </div>

                        <SmoothLoader delay_ms=grid_delay>
                            <div class="grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-8 mb-16">
                                {projects
                                    .iter()
                                    .enumerate()
                                    .map(|(i, project)| {
                                        view! {
                                            <Reveal
                                                group=cards
                                                index=i
                                                entrance=Entrance::rise(40.0)
                                                duration=0.5
                                                class="bg-gray-900 border border-gray-800 rounded-2xl p-8 hover:border-gray-700"
                                            >
                                                <ProjectCard project=project />
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </SmoothLoader>

                        <SmoothLoader delay_ms=cta_delay>
                            <div class="text-center">
                                <div class="bg-gray-900 border border-gray-800 rounded-2xl p-12 max-w-4xl mx-auto">
                                    <h3 class="text-2xl lg:text-3xl font-bold text-white mb-4">
                                        "More Projects Coming Soon"
                                    </h3>
                                    <p class="text-gray-400 text-lg mb-8 max-w-2xl mx-auto">
                                        "I'm constantly working on new projects. Follow my journey on GitHub!"
                                    </p>
                                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                                        <a
                                            href=github_profile
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="inline-flex items-center space-x-3 px-8 py-4 bg-gradient-to-r from-cyan-500 to-blue-500 rounded-xl text-white font-semibold hover:opacity-90 transition-opacity duration-200"
                                        >
                                            <i class="devicon-github-plain" />
                                            <span>"Follow on GitHub"</span>
                                        </a>
                                        <a
                                            href="#contact"
                                            class="inline-flex items-center space-x-3 px-8 py-4 bg-gray-800 hover:bg-gray-700 rounded-xl text-gray-300 hover:text-white font-semibold border border-gray-700 hover:border-gray-600 transition-all duration-200"
                                        >
                                            <span>"Let's Work Together"</span>
                                        </a>
                                    </div>
                                </div>
                            </div>
                        </SmoothLoader>
                    </div>
                </SmoothLoader>
            </div>
        </section>
    }
}
