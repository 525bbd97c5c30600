use leptos::{ev::MouseEvent, prelude::*};

use crate::content::NavItem;
use crate::motion::{timing::MENU_EASING, Entrance, MotionConfig, RevealState, Transition};

use super::hooks::{scroll_to_anchor, use_motion_profile, use_scroll_signals};

const HAMBURGER: Transition = Transition::new(0.15);
const MENU: Transition = Transition::new(0.3).with_easing(MENU_EASING);

const LINK_CLASS_DESKTOP: &str =
    "text-gray-300 hover:text-cyan-400 transition-colors duration-200 text-base px-2 text-center font-medium";
const LINK_CLASS_MOBILE: &str =
    "text-gray-300 hover:text-cyan-400 transition-colors duration-200 text-sm px-2";
const CLOSE_CLASS: &str = "w-7 h-7 rounded-full bg-gray-800/50 flex items-center justify-center text-gray-400 hover:text-cyan-400 transition-colors duration-200 flex-shrink-0";

fn menu_state(open: bool) -> RevealState {
    if open {
        RevealState::Revealed
    } else {
        RevealState::NotRevealed
    }
}

fn hamburger_style(open: bool) -> String {
    let (scale, opacity) = if open { (0, 0) } else { (1, 1) };
    format!(
        "transform:scale({scale});opacity:{opacity};transition:{};",
        HAMBURGER.css(&["opacity", "transform"])
    )
}

/// Panel unfolding from its top edge (desktop) or right edge (mobile).
fn panel_style(open: bool, closed_transform: &str) -> String {
    let timing = MENU.css(&["opacity", "transform"]);
    if open {
        format!("opacity:1;transform:none;transition:{timing};")
    } else {
        format!("opacity:0;transform:{closed_transform};pointer-events:none;transition:{timing};")
    }
}

/// Floating navigation menus. Both hide while the page scrolls down.
#[component]
pub fn Navbar(items: &'static [NavItem], config: &'static MotionConfig) -> impl IntoView {
    let scroll = use_scroll_signals();
    let profile = use_motion_profile();
    let (desktop_open, set_desktop_open) = signal(false);
    let (mobile_open, set_mobile_open) = signal(false);

    let visibility = move || {
        if scroll.chrome_visible.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 -translate-y-full"
        }
    };

    let nav_click = move |ev: MouseEvent, href: &str| {
        ev.prevent_default();
        set_desktop_open(false);
        set_mobile_open(false);
        scroll_to_anchor(href);
    };

    let links = move |open: ReadSignal<bool>,
                      stagger: f64,
                      duration: f64,
                      entrance: Entrance,
                      class: &'static str| {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let transition = Transition::new(duration).staggered(i, stagger);
                let href = item.href.as_str();
                view! {
                    <a
                        href=href
                        class=class
                        style=move || {
                            profile
                                .with(|p| entrance.style(menu_state(open.get()), &transition, p))
                        }
                        on:click=move |ev| nav_click(ev, href)
                    >
                        {item.label.as_str()}
                    </a>
                }
            })
            .collect_view()
    };

    let close_style = move |open: ReadSignal<bool>, delay: f64, duration: f64| {
        let transition = Transition::new(duration).with_delay(delay);
        move || profile.with(|p| Entrance::grow(0.8).style(menu_state(open.get()), &transition, p))
    };

    view! {
        <header class=move || {
            format!(
                "hidden sm:block fixed top-8 right-8 z-50 transition-all duration-300 {}",
                visibility(),
            )
        }>
            <div class="relative">
                <button
                    class="w-12 h-12 rounded-full bg-gray-900/60 backdrop-blur-md border border-gray-700/20 flex items-center justify-center text-gray-300 hover:text-cyan-400 transition-all duration-300 shadow-lg shadow-black/20"
                    style=move || hamburger_style(desktop_open.get())
                    aria-label="Open menu"
                    on:click=move |_| set_desktop_open.update(|o| *o = !*o)
                >
                    <span class="text-2xl leading-none">"☰"</span>
                </button>
                <div
                    class="absolute top-0 right-0 origin-top"
                    style=move || panel_style(desktop_open.get(), "translateY(-10px) scaleY(0)")
                >
                    <nav class="bg-gray-900/60 backdrop-blur-md border border-gray-700/20 rounded-2xl px-6 py-6 flex flex-col space-y-4 whitespace-nowrap min-w-max shadow-lg shadow-black/20">
                        {links(
                            desktop_open,
                            config.desktop_link_stagger,
                            0.2,
                            Entrance::slide(20.0),
                            LINK_CLASS_DESKTOP,
                        )}
                        <button
                            class=CLOSE_CLASS
                            style=close_style(desktop_open, 0.1, 0.2)
                            aria-label="Close menu"
                            on:click=move |_| set_desktop_open(false)
                        >
                            "✕"
                        </button>
                    </nav>
                </div>
            </div>
        </header>

        <header class=move || {
            format!(
                "sm:hidden fixed top-6 right-6 z-50 transition-all duration-300 {}",
                visibility(),
            )
        }>
            <div class="relative">
                <button
                    class="w-12 h-12 rounded-full bg-gray-900/80 backdrop-blur-md border border-gray-700/50 flex items-center justify-center text-gray-300 hover:text-cyan-400 transition-all duration-300 shadow-lg shadow-black/20"
                    style=move || hamburger_style(mobile_open.get())
                    aria-label="Open menu"
                    on:click=move |_| set_mobile_open.update(|o| *o = !*o)
                >
                    <span class="text-2xl leading-none">"☰"</span>
                </button>
                <div
                    class="absolute top-0 right-0 origin-right"
                    style=move || panel_style(mobile_open.get(), "translateX(10px) scaleX(0)")
                >
                    <nav class="bg-gray-900/90 backdrop-blur-md border border-gray-700/50 rounded-full px-4 py-3 flex items-center space-x-3 whitespace-nowrap min-w-max shadow-lg shadow-black/20">
                        {links(
                            mobile_open,
                            config.mobile_link_stagger,
                            0.15,
                            Entrance::rise(5.0),
                            LINK_CLASS_MOBILE,
                        )}
                        <button
                            class=CLOSE_CLASS
                            style=close_style(mobile_open, 0.05, 0.15)
                            aria-label="Close menu"
                            on:click=move |_| set_mobile_open(false)
                        >
                            "✕"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}
