use leptos::{html, prelude::*};

use crate::motion::{Entrance, FloatSpec, Transition};

use super::hooks::{use_motion_profile, use_mount_delay, RevealGroup};

/// Wraps `children` in a block that fades in when element `index` of `group`
/// enters the viewport.
#[component]
pub fn Reveal(
    group: RevealGroup,
    #[prop(default = 0)] index: usize,
    #[prop(default = Entrance::rise(50.0))] entrance: Entrance,
    #[prop(default = 0.6)] duration: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let profile = use_motion_profile();
    let node = NodeRef::<html::Div>::new();
    group.observe(index, node);

    let transition = Transition::new(duration).with_delay(group.delay(index));
    let style = move || profile.with(|p| entrance.style(group.state(index), &transition, p));

    view! {
        <div node_ref=node class=class style=style>
            {children()}
        </div>
    }
}

/// Fades `children` in a fixed time after mount, independent of scroll.
#[component]
pub fn SmoothLoader(
    #[prop(default = 0)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let profile = use_motion_profile();
    let state = use_mount_delay(delay_ms);
    let transition = Transition::new(0.6);
    let style = move || profile.with(|p| Entrance::rise(20.0).style(state.get(), &transition, p));

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

#[component]
pub fn FloatingShapes(shapes: &'static [FloatSpec]) -> impl IntoView {
    let profile = use_motion_profile();
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {move || {
                profile
                    .with(|p| {
                        shapes
                            .iter()
                            .filter_map(|shape| {
                                p.decoration(shape)
                                    .map(|style| {
                                        view! {
                                            <div
                                                class=format!("absolute rounded-full {}", shape.class)
                                                style=style
                                            />
                                        }
                                    })
                            })
                            .collect_view()
                    })
            }}
        </div>
    }
}
