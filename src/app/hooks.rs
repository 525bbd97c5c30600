//! Browser bindings for the motion engine.
//!
//! The engine types live in [`crate::motion`] and never touch the DOM. These
//! hooks own them in local stored values, feed them scroll events,
//! intersection results and timers, and publish the results as signals.

use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_media_query, UseIntersectionObserverOptions,
};

use crate::motion::{
    IntersectionSupport, MotionPreference, MotionProfile, RevealController, RevealOptions,
    RevealState, StaggerGroup,
};

#[cfg(feature = "hydrate")]
use crate::motion::{FrameError, FrameScheduler, ScrollDirectionTracker, ScrollSample};
#[cfg(feature = "hydrate")]
use leptos::ev;
#[cfg(feature = "hydrate")]
use leptos_use::{use_event_listener, use_window};

/// `requestAnimationFrame` on the current window.
#[cfg(feature = "hydrate")]
pub struct BrowserFrames;

#[cfg(feature = "hydrate")]
impl FrameScheduler for BrowserFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), FrameError> {
        request_animation_frame_with_handle(callback)
            .map(|_| ())
            .map_err(|e| {
                log::warn!("requestAnimationFrame failed: {e:?}");
                FrameError::Unavailable
            })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollSignals {
    /// Whether the navigation chrome should be shown.
    pub chrome_visible: Signal<bool>,
    /// Latest vertical offset applied by the tracker, in pixels.
    pub offset: Signal<u32>,
}

/// Starts tracking window scroll and provides [`ScrollSignals`] as context.
///
/// Samples are coalesced to one recomputation per animation frame. If the
/// listener never attaches, `chrome_visible` stays `true`.
pub fn provide_scroll_signals(threshold: u32) -> ScrollSignals {
    let (chrome_visible, set_chrome_visible) = signal(true);
    let (offset, set_offset) = signal(0u32);

    #[cfg(feature = "hydrate")]
    {
        let tracker = StoredValue::new_local(ScrollDirectionTracker::new(threshold));

        let apply_frame = move || {
            let update = tracker
                .try_update_value(|t| t.on_frame().map(|visible| (visible, t.state().offset())))
                .flatten();
            if let Some((visible, y)) = update {
                set_chrome_visible.set(visible);
                set_offset.set(y);
            }
        };

        let _ = use_event_listener(use_window(), ev::scroll, move |ev| {
            let y = window().scroll_y().unwrap_or_default();
            let sample = ScrollSample::from_raw(y, ev.time_stamp());
            let needs_frame = tracker
                .try_update_value(|t| t.on_scroll_sample(sample))
                .unwrap_or(false);
            if needs_frame {
                BrowserFrames.request_or_run(apply_frame);
            }
        });

        on_cleanup(move || {
            tracker.try_update_value(|t| t.teardown());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (threshold, set_chrome_visible, set_offset);

    let signals = ScrollSignals {
        chrome_visible: chrome_visible.into(),
        offset: offset.into(),
    };
    provide_context(signals);
    signals
}

pub fn use_scroll_signals() -> ScrollSignals {
    expect_context::<ScrollSignals>()
}

/// Reads `prefers-reduced-motion` and provides the resulting profile.
pub fn provide_motion_profile() -> Memo<MotionProfile> {
    let reduced = use_media_query("(prefers-reduced-motion: reduce)");
    let profile =
        Memo::new(move |_| MotionProfile::new(MotionPreference::from_reduce_flag(reduced.get())));
    provide_context(profile);
    profile
}

pub fn use_motion_profile() -> Memo<MotionProfile> {
    expect_context::<Memo<MotionProfile>>()
}

/// A set of elements revealed by one [`RevealController`], keyed by their
/// position in declaration order.
#[derive(Clone, Copy)]
pub struct RevealGroup {
    controller: StoredValue<RevealController<usize>, LocalStorage>,
    changed: Trigger,
}

impl RevealGroup {
    pub fn new(len: usize, group: StaggerGroup, options: RevealOptions) -> Self {
        // Server and first client render must agree, so support is only
        // checked once mounted.
        let mut controller = RevealController::new(IntersectionSupport::Available);
        controller.register_group(&group, 0..len, options);
        let this = Self {
            controller: StoredValue::new_local(controller),
            changed: Trigger::new(),
        };

        #[cfg(feature = "hydrate")]
        Effect::new(move |_| {
            if window().get("IntersectionObserver").is_some() {
                return;
            }
            log::warn!("IntersectionObserver unavailable, revealing {len} elements");
            this.controller.try_update_value(|c| {
                c.fail_open();
                c.drain_events();
            });
            this.changed.notify();
        });

        on_cleanup(move || {
            this.controller.try_update_value(|c| c.teardown());
        });
        this
    }

    pub fn single(options: RevealOptions) -> Self {
        Self::new(1, StaggerGroup::new(options.delay, 0.0), options)
    }

    /// Reactive latch state of element `index`.
    pub fn state(&self, index: usize) -> RevealState {
        self.changed.track();
        self.controller
            .try_with_value(|c| c.state(&index))
            .unwrap_or_default()
    }

    pub fn delay(&self, index: usize) -> f64 {
        self.controller
            .try_with_value(|c| c.delay(&index))
            .flatten()
            .unwrap_or_default()
    }

    /// Attaches an intersection observer to `target` for element `index`. The
    /// observer is stopped once the controller no longer wants it.
    pub fn observe(&self, index: usize, target: NodeRef<html::Div>) {
        let Self {
            controller,
            changed,
        } = *self;
        let margin = controller
            .try_with_value(|c| c.options(&index))
            .flatten()
            .unwrap_or_default()
            .root_margin;

        let observer = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                let intersecting = entries.iter().any(|e| e.is_intersecting());
                let revealed = controller
                    .try_update_value(|c| {
                        let event = c.on_intersect(&index, intersecting);
                        c.drain_events();
                        event.is_some()
                    })
                    .unwrap_or(false);
                if revealed {
                    changed.notify();
                }
            },
            UseIntersectionObserverOptions::default().root_margin(margin.to_string()),
        );

        let stop = observer.stop;
        Effect::new(move |_| {
            changed.track();
            let keep = controller
                .try_with_value(|c| c.should_observe(&index))
                .unwrap_or(false);
            if !keep {
                stop();
            }
        });
    }
}

/// Flips to [`RevealState::Revealed`] `delay_ms` after mount. The timer is
/// cleared if the owner is disposed first.
pub fn use_mount_delay(delay_ms: u32) -> Signal<RevealState> {
    let (state, set_state) = signal(RevealState::NotRevealed);
    let handle = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        match set_timeout_with_handle(
            move || set_state.set(RevealState::Revealed),
            Duration::from_millis(delay_ms.into()),
        ) {
            Ok(h) => handle.set_value(Some(h)),
            Err(e) => {
                log::warn!("couldn't start mount timer: {e:?}");
                set_state.set(RevealState::Revealed);
            }
        }
    });

    on_cleanup(move || {
        if let Some(h) = handle.try_get_value().flatten() {
            h.clear();
        }
    });

    state.into()
}

/// Scrolls the element matching `selector` into view. Smoothness comes from
/// the page's `scroll-behavior`.
pub fn scroll_to_anchor(selector: &str) {
    match document().query_selector(selector) {
        Ok(Some(el)) => el.scroll_into_view(),
        Ok(None) => log::debug!("no element matches {selector}"),
        Err(e) => log::warn!("invalid anchor {selector}: {e:?}"),
    }
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}
