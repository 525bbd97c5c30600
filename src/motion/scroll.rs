use super::frame::FrameGate;

/// Offset below which page chrome is always shown.
pub const NEAR_TOP_THRESHOLD: u32 = 50;
/// Offset beyond which the back-to-top control appears.
pub const BACK_TO_TOP_THRESHOLD: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSample {
    pub offset: u32,
    pub timestamp_ms: u64,
}

impl ScrollSample {
    pub fn new(offset: u32, timestamp_ms: u64) -> Self {
        Self {
            offset,
            timestamp_ms,
        }
    }

    /// Builds a sample from a raw browser offset, which may be fractional or
    /// negative during overscroll.
    pub fn from_raw(offset: f64, timestamp_ms: f64) -> Self {
        Self {
            offset: offset.max(0.0).round() as u32,
            timestamp_ms: timestamp_ms.max(0.0) as u64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollDirectionState {
    direction: ScrollDirection,
    last: Option<ScrollSample>,
    threshold: u32,
}

impl Default for ScrollDirectionState {
    fn default() -> Self {
        Self::new(NEAR_TOP_THRESHOLD)
    }
}

impl ScrollDirectionState {
    pub fn new(threshold: u32) -> Self {
        Self {
            direction: ScrollDirection::Up,
            last: None,
            threshold,
        }
    }

    /// Folds one sample into the state. The comparison uses the previous
    /// offset; the sample replaces it afterwards.
    pub fn advance(self, sample: ScrollSample) -> Self {
        let direction = match self.last {
            Some(prev) if sample.offset > prev.offset && sample.offset > self.threshold => {
                ScrollDirection::Down
            }
            _ => ScrollDirection::Up,
        };
        Self {
            direction,
            last: Some(sample),
            ..self
        }
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn offset(&self) -> u32 {
        self.last.map(|s| s.offset).unwrap_or(0)
    }

    pub fn last_sample(&self) -> Option<ScrollSample> {
        self.last
    }

    pub fn near_top(&self) -> bool {
        self.offset() < self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.direction == ScrollDirection::Up || self.near_top()
    }
}

/// Turns the raw scroll stream into at most one state update per frame.
///
/// The host calls [`on_scroll_sample`](Self::on_scroll_sample) for every
/// event and requests a frame when it returns true; the frame callback calls
/// [`on_frame`](Self::on_frame).
#[derive(Debug, Clone)]
pub struct ScrollDirectionTracker {
    state: ScrollDirectionState,
    gate: FrameGate<ScrollSample>,
    recomputations: u64,
    active: bool,
}

impl Default for ScrollDirectionTracker {
    fn default() -> Self {
        Self::new(NEAR_TOP_THRESHOLD)
    }
}

impl ScrollDirectionTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            state: ScrollDirectionState::new(threshold),
            gate: FrameGate::new(),
            recomputations: 0,
            active: true,
        }
    }

    pub fn on_scroll_sample(&mut self, sample: ScrollSample) -> bool {
        if !self.active {
            return false;
        }
        self.gate.offer(sample)
    }

    /// Applies the newest sample seen since the last frame and returns the
    /// resulting visibility.
    pub fn on_frame(&mut self) -> Option<bool> {
        if !self.active {
            return None;
        }
        let sample = self.gate.take()?;
        self.state = self.state.advance(sample);
        self.recomputations += 1;
        Some(self.state.is_visible())
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn state(&self) -> &ScrollDirectionState {
        &self.state
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Drops any pending sample and ignores everything after. The last
    /// computed state is kept.
    pub fn teardown(&mut self) {
        self.active = false;
        self.gate.cancel();
    }
}

pub fn back_to_top_visible(offset: u32, threshold: u32) -> bool {
    offset > threshold
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::motion::frame::{testing::ManualFrames, FrameScheduler};

    fn sample(offset: u32) -> ScrollSample {
        ScrollSample::new(offset, 0)
    }

    fn visibility_after(offsets: &[u32]) -> Vec<bool> {
        let mut tracker = ScrollDirectionTracker::default();
        offsets
            .iter()
            .map(|&o| {
                assert!(tracker.on_scroll_sample(sample(o)));
                tracker.on_frame().expect("a sample is pending")
            })
            .collect()
    }

    #[test]
    fn test_end_to_end_sequence() {
        assert_eq!(
            visibility_after(&[0, 10, 60, 120, 80, 40]),
            vec![true, true, false, false, true, true]
        );
    }

    #[test]
    fn test_first_sample_is_up() {
        for offset in [0, 49, 50, 51, 5000] {
            let state = ScrollDirectionState::default().advance(sample(offset));
            assert_eq!(state.direction(), ScrollDirection::Up);
            assert!(state.is_visible());
        }
    }

    #[test]
    fn test_near_top_always_visible() {
        let sequences: [&[u32]; 4] = [
            &[0, 10, 20, 30, 49],
            &[300, 200, 100, 49],
            &[100, 200, 300, 0],
            &[0, 60, 61, 62, 10],
        ];
        for offsets in sequences {
            let state = offsets
                .iter()
                .fold(ScrollDirectionState::default(), |s, &o| s.advance(sample(o)));
            assert!(state.offset() < NEAR_TOP_THRESHOLD);
            assert!(state.is_visible(), "{offsets:?}");
        }
    }

    #[test]
    fn test_scrolling_down_past_threshold_hides() {
        for start in [0u32, 20, 49, 50, 51, 400] {
            let mut state = ScrollDirectionState::default().advance(sample(start));
            for step in 1..=10u32 {
                state = state.advance(sample(start + step * 7));
                if state.offset() > NEAR_TOP_THRESHOLD {
                    assert!(!state.is_visible(), "start {start} step {step}");
                }
            }
        }
    }

    #[test]
    fn test_exactly_at_threshold() {
        // 50 is not "past" the threshold but is no longer near the top either.
        let state = ScrollDirectionState::default()
            .advance(sample(40))
            .advance(sample(50));
        assert_eq!(state.direction(), ScrollDirection::Up);
        assert!(state.is_visible());
    }

    #[test]
    fn test_any_decrease_shows() {
        for (high, low) in [(500, 499), (1000, 60), (90, 51), (75, 0)] {
            let state = ScrollDirectionState::default()
                .advance(sample(0))
                .advance(sample(high))
                .advance(sample(high + 10));
            assert!(!state.is_visible());
            let state = state.advance(sample(low));
            assert_eq!(state.direction(), ScrollDirection::Up);
            assert!(state.is_visible());
        }
    }

    #[test]
    fn test_equal_offset_is_up() {
        let state = ScrollDirectionState::default()
            .advance(sample(0))
            .advance(sample(200))
            .advance(sample(200));
        assert_eq!(state.direction(), ScrollDirection::Up);
    }

    #[test]
    fn test_hundred_samples_one_recompute() {
        let mut tracker = ScrollDirectionTracker::default();
        let requested = (1..=100u32)
            .filter(|&i| tracker.on_scroll_sample(sample(i * 3)))
            .count();
        assert_eq!(requested, 1);
        assert_eq!(tracker.recomputations(), 0);
        assert_eq!(tracker.on_frame(), Some(true));
        assert_eq!(tracker.recomputations(), 1);
        assert_eq!(tracker.state().offset(), 300);
        assert_eq!(tracker.on_frame(), None);
        assert_eq!(tracker.recomputations(), 1);
    }

    #[test]
    fn test_injected_frame_clock() {
        let frames = ManualFrames::default();
        let tracker = Rc::new(RefCell::new(ScrollDirectionTracker::default()));
        let published = Rc::new(RefCell::new(Vec::new()));

        let dispatch = |offset: u32| {
            if tracker.borrow_mut().on_scroll_sample(sample(offset)) {
                let tracker = tracker.clone();
                let published = published.clone();
                frames.request_or_run(move || {
                    if let Some(v) = tracker.borrow_mut().on_frame() {
                        published.borrow_mut().push(v);
                    }
                });
            }
        };

        for offset in [0, 10, 20] {
            dispatch(offset);
        }
        assert_eq!(frames.pending(), 1);
        frames.tick();
        for offset in (30..=130).step_by(10) {
            dispatch(offset);
        }
        frames.tick();
        dispatch(90);
        frames.tick();

        assert_eq!(*published.borrow(), vec![true, false, true]);
        assert_eq!(tracker.borrow().recomputations(), 3);
    }

    #[test]
    fn test_teardown_drops_pending_frame() {
        let mut tracker = ScrollDirectionTracker::default();
        tracker.on_scroll_sample(sample(0));
        tracker.on_frame();
        assert!(tracker.on_scroll_sample(sample(500)));
        tracker.teardown();
        assert_eq!(tracker.on_frame(), None);
        assert!(!tracker.on_scroll_sample(sample(900)));
        assert!(tracker.is_visible());
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_from_raw_clamps() {
        assert_eq!(ScrollSample::from_raw(-12.0, 5.5).offset, 0);
        assert_eq!(ScrollSample::from_raw(120.6, 5.5).offset, 121);
        assert_eq!(ScrollSample::from_raw(120.6, 5.5).timestamp_ms, 5);
    }

    #[test]
    fn test_back_to_top() {
        assert!(!back_to_top_visible(0, BACK_TO_TOP_THRESHOLD));
        assert!(!back_to_top_visible(300, BACK_TO_TOP_THRESHOLD));
        assert!(back_to_top_visible(301, BACK_TO_TOP_THRESHOLD));
    }
}
