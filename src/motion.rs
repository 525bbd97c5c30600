//! Scroll and viewport driven motion for the page.
//!
//! Everything here is plain state with no DOM access. The browser bindings in
//! `app::hooks` feed it scroll offsets, intersection results and frame
//! callbacks, and read back visibility flags and delays.

pub mod config;
pub mod frame;
pub mod preference;
pub mod reveal;
pub mod scroll;
pub mod timing;

pub use config::MotionConfig;
pub use frame::{FrameError, FrameGate, FrameScheduler};
pub use preference::{Entrance, FloatPath, FloatSpec, MotionPreference, MotionProfile};
pub use reveal::{
    IntersectionSupport, RevealController, RevealEvent, RevealOptions, RevealState, RootMargin,
    StaggerGroup,
};
pub use scroll::{ScrollDirection, ScrollDirectionTracker, ScrollSample};
pub use timing::{compute_delay, Easing, Transition};
