use std::{fmt, sync::Arc};

use super::{reveal::RevealState, timing::Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduce_flag(prefers_reduced: bool) -> Self {
        if prefers_reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatPath {
    /// Wide x/y wander at constant speed.
    Drift,
    /// Short vertical bob with a pulsing opacity.
    Bob,
}

impl FloatPath {
    fn keyframes(self) -> &'static str {
        match self {
            FloatPath::Drift => "float-drift",
            FloatPath::Bob => "float-bob",
        }
    }

    fn easing(self) -> &'static str {
        match self {
            FloatPath::Drift => "linear",
            FloatPath::Bob => "ease-in-out",
        }
    }
}

/// A decorative shape looping in the background of a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatSpec {
    pub class: &'static str,
    /// CSS placement declarations, e.g. `top:15%;left:10%;`.
    pub position: &'static str,
    pub duration: f64,
    pub delay: f64,
    pub path: FloatPath,
}

pub trait DecorationStrategy: Send + Sync {
    /// Inline style for a decorative node, or `None` when the node should not
    /// be rendered at all.
    fn float_style(&self, spec: &FloatSpec) -> Option<String>;
}

pub struct FloatingDecorations;

impl DecorationStrategy for FloatingDecorations {
    fn float_style(&self, spec: &FloatSpec) -> Option<String> {
        Some(format!(
            "{}animation:{} {}s {} {}s infinite;",
            spec.position,
            spec.path.keyframes(),
            spec.duration,
            spec.path.easing(),
            spec.delay
        ))
    }
}

pub struct NoDecorations;

impl DecorationStrategy for NoDecorations {
    fn float_style(&self, _spec: &FloatSpec) -> Option<String> {
        None
    }
}

/// Motion settings fixed when the page mounts.
#[derive(Clone)]
pub struct MotionProfile {
    preference: MotionPreference,
    decorations: Arc<dyn DecorationStrategy>,
}

impl fmt::Debug for MotionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionProfile")
            .field("preference", &self.preference)
            .finish_non_exhaustive()
    }
}

impl PartialEq for MotionProfile {
    fn eq(&self, other: &Self) -> bool {
        self.preference == other.preference
    }
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self::new(MotionPreference::Full)
    }
}

impl MotionProfile {
    pub fn new(preference: MotionPreference) -> Self {
        let decorations: Arc<dyn DecorationStrategy> = match preference {
            MotionPreference::Full => Arc::new(FloatingDecorations),
            MotionPreference::Reduced => Arc::new(NoDecorations),
        };
        Self {
            preference,
            decorations,
        }
    }

    pub fn preference(&self) -> MotionPreference {
        self.preference
    }

    pub fn is_reduced(&self) -> bool {
        self.preference == MotionPreference::Reduced
    }

    pub fn decoration(&self, spec: &FloatSpec) -> Option<String> {
        self.decorations.float_style(spec)
    }
}

/// Starting pose of an element before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Entrance {
    pub const fn rise(y: f64) -> Self {
        Self { x: 0.0, y, scale: 1.0 }
    }

    pub const fn slide(x: f64) -> Self {
        Self { x, y: 0.0, scale: 1.0 }
    }

    pub const fn grow(scale: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale,
        }
    }

    /// Inline style for the element in `state`. Reduced motion keeps the fade
    /// but drops displacement and scaling.
    pub fn style(&self, state: RevealState, transition: &Transition, profile: &MotionProfile) -> String {
        let timing = transition.css(&["opacity", "transform"]);
        match state {
            RevealState::Revealed => format!("opacity:1;transform:none;transition:{timing};"),
            RevealState::NotRevealed if profile.is_reduced() => {
                format!("opacity:0;transform:none;transition:{timing};")
            }
            RevealState::NotRevealed => format!(
                "opacity:0;transform:translate({}px, {}px) scale({});transition:{timing};",
                self.x, self.y, self.scale
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPE: FloatSpec = FloatSpec {
        class: "w-12 h-12",
        position: "top:15%;left:10%;",
        duration: 20.0,
        delay: 1.0,
        path: FloatPath::Drift,
    };

    #[test]
    fn test_full_motion_floats() {
        let profile = MotionProfile::new(MotionPreference::Full);
        assert_eq!(
            profile.decoration(&SHAPE).as_deref(),
            Some("top:15%;left:10%;animation:float-drift 20s linear 1s infinite;")
        );
    }

    #[test]
    fn test_reduced_motion_drops_decorations() {
        let profile = MotionProfile::new(MotionPreference::from_reduce_flag(true));
        assert!(profile.is_reduced());
        assert_eq!(profile.decoration(&SHAPE), None);
        let bob = FloatSpec {
            path: FloatPath::Bob,
            ..SHAPE
        };
        assert_eq!(profile.decoration(&bob), None);
    }

    #[test]
    fn test_entrance_styles() {
        let t = Transition::new(0.5).with_delay(0.1);
        let full = MotionProfile::default();
        let hidden = Entrance::rise(40.0).style(RevealState::NotRevealed, &t, &full);
        assert!(hidden.starts_with("opacity:0;transform:translate(0px, 40px) scale(1);"));
        assert!(hidden.contains("opacity 0.5s ease-out 0.1s"));

        let shown = Entrance::rise(40.0).style(RevealState::Revealed, &t, &full);
        assert!(shown.starts_with("opacity:1;transform:none;"));
    }

    #[test]
    fn test_reduced_entrance_still_fades() {
        let t = Transition::new(0.5);
        let reduced = MotionProfile::new(MotionPreference::Reduced);
        let hidden = Entrance::slide(-50.0).style(RevealState::NotRevealed, &t, &reduced);
        assert!(hidden.starts_with("opacity:0;transform:none;"));
        let shown = Entrance::slide(-50.0).style(RevealState::Revealed, &t, &reduced);
        assert!(shown.starts_with("opacity:1;"));
    }
}
