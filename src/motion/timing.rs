use std::fmt;

/// Delay, in seconds, of the item at `index` in a staggered sequence.
pub fn compute_delay(base_delay: f64, index: usize, per_item_increment: f64) -> f64 {
    base_delay + index as f64 * per_item_increment
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
}

/// Curve used by the navigation menus when they unfold.
pub const MENU_EASING: Easing = Easing::CubicBezier(0.25, 0.46, 0.45, 0.94);

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "linear"),
            Easing::EaseOut => write!(f, "ease-out"),
            Easing::EaseInOut => write!(f, "ease-in-out"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// Timing of a single CSS transition, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub delay: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f64) -> Self {
        Self {
            delay: 0.0,
            duration,
            easing: Easing::EaseOut,
        }
    }

    pub const fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub const fn with_easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    /// Shifts the delay by this item's position in a stagger.
    pub fn staggered(self, index: usize, per_item_increment: f64) -> Self {
        self.with_delay(compute_delay(self.delay, index, per_item_increment))
    }

    /// Renders a `transition` value covering each of `properties`.
    pub fn css(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|p| format!("{p} {}s {} {}s", self.duration, self.easing, self.delay))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Renders the shorthand for a one-shot keyframe animation.
    pub fn animation_css(&self, keyframes: &str) -> String {
        format!(
            "{keyframes} {}s {} {}s both",
            self.duration, self.easing, self.delay
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_compute_delay() {
        assert_close(compute_delay(0.0, 0, 0.1), 0.0);
        assert_close(compute_delay(0.6, 4, 0.05), 0.8);
        assert_close(compute_delay(0.3, 2, 0.1), 0.5);
    }

    #[test]
    fn test_stagger_of_five() {
        let delays = (0..5)
            .map(|i| compute_delay(0.1, i, 0.1))
            .collect::<Vec<_>>();
        for (actual, expected) in delays.iter().zip([0.1, 0.2, 0.3, 0.4, 0.5]) {
            assert_close(*actual, expected);
        }
    }

    #[test]
    fn test_easing_css() {
        assert_eq!(Easing::Linear.to_string(), "linear");
        assert_eq!(Easing::EaseOut.to_string(), "ease-out");
        assert_eq!(
            MENU_EASING.to_string(),
            "cubic-bezier(0.25, 0.46, 0.45, 0.94)"
        );
    }

    #[test]
    fn test_transition_css() {
        let t = Transition::new(0.6).with_delay(0.2);
        assert_eq!(
            t.css(&["opacity", "transform"]),
            "opacity 0.6s ease-out 0.2s, transform 0.6s ease-out 0.2s"
        );
        assert_eq!(t.animation_css("rise"), "rise 0.6s ease-out 0.2s both");
    }

    #[test]
    fn test_transition_staggered() {
        let t = Transition::new(0.5).with_delay(0.3).staggered(2, 0.1);
        assert_close(t.delay, 0.5);
        assert_close(t.duration, 0.5);
    }
}
