mod about;
mod contact;
mod footer;
mod hero;
pub mod hooks;
mod motion;
mod navbar;
mod projects;
mod theme;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::contact::{Outbox, SimulatedOutbox};
use crate::content::{self, ContentError};
use crate::motion::scroll::NEAR_TOP_THRESHOLD;

use about::AboutSection;
use contact::ContactSection;
use footer::Footer;
use hero::HeroSection;
use hooks::{provide_motion_profile, provide_scroll_signals};
use navbar::Navbar;
use projects::ProjectsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased bg-black">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let outbox: Arc<dyn Outbox> = Arc::new(SimulatedOutbox::default());
    provide_context(outbox);
    provide_motion_profile();
    let near_top = content::portfolio()
        .map(|p| p.motion.near_top_threshold)
        .unwrap_or(NEAR_TOP_THRESHOLD);
    provide_scroll_signals(near_top);

    let owner = content::portfolio()
        .map(|p| p.owner.as_str())
        .unwrap_or("Portfolio");

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />

        <Router>
            <div class="relative min-h-screen bg-gradient-to-b from-[#0f0f1a] to-[#0d0d12] text-white overflow-hidden">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let p = match content::portfolio() {
        Ok(p) => p,
        Err(error) => {
            log::error!("{error}");
            return view! { <ContentUnavailable error=error /> }.into_any();
        }
    };

    view! {
        <Title text="Portfolio" />
        <Navbar items=p.nav.as_slice() config=&p.motion />
        <main>
            <HeroSection hero=&p.hero letters=p.motion.letter_group() />
            <AboutSection about=&p.about config=&p.motion />
            <ProjectsSection
                projects=p.projects.as_slice()
                github_profile=p.contact.github_profile.as_str()
                config=&p.motion
            />
            <ContactSection contact=&p.contact config=&p.motion />
        </main>
        <Footer owner=p.owner.as_str() back_to_top_threshold=p.motion.back_to_top_threshold />
    }
    .into_any()
}

#[component]
fn ContentUnavailable(error: ContentError) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="flex flex-col items-center justify-center min-h-screen text-center px-4">
            <h1 class="text-3xl font-bold mb-4">"Something went wrong"</h1>
            <p class="text-gray-400">{error.to_string()}</p>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <div class="flex flex-col items-center justify-center min-h-screen text-center px-4">
            <h1 class="text-6xl font-extrabold mb-4 text-transparent bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text">
                "404"
            </h1>
            <p class="text-gray-400 mb-8">"This page doesn't exist."</p>
            <a
                href="/"
                class="px-6 py-3 bg-gray-800 hover:bg-gray-700 rounded-xl border border-gray-700 transition-colors duration-200"
            >
                "Back home"
            </a>
        </div>
    }
}
