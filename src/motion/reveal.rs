use std::{collections::HashMap, fmt, hash::Hash, str::FromStr};

use thiserror::Error;

use super::timing::compute_delay;

/// One-shot latch for an element's entrance. Once revealed it stays revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    NotRevealed,
    Revealed,
}

impl RevealState {
    pub fn transition(self, is_intersecting: bool) -> Self {
        match (self, is_intersecting) {
            (RevealState::NotRevealed, true) => RevealState::Revealed,
            (state, _) => state,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarginParseError {
    #[error("Root margin is empty")]
    Empty,
    #[error("Root margin takes 1 to 4 values, got {0}")]
    Arity(usize),
    #[error("Invalid root margin value: {0}")]
    Value(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl Default for MarginLength {
    fn default() -> Self {
        MarginLength::Px(0.0)
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginLength::Px(v) => write!(f, "{v}px"),
            MarginLength::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl FromStr for MarginLength {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || MarginParseError::Value(s.to_string());
        if let Some(n) = s.strip_suffix("px") {
            n.parse().map(MarginLength::Px).map_err(|_| bad())
        } else if let Some(n) = s.strip_suffix('%') {
            n.parse().map(MarginLength::Percent).map_err(|_| bad())
        } else if s == "0" {
            Ok(MarginLength::Px(0.0))
        } else {
            Err(bad())
        }
    }
}

/// Grows (positive) or shrinks (negative) the viewport box used for
/// intersection, in CSS margin order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl RootMargin {
    pub fn uniform(length: MarginLength) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }
}

impl FromStr for RootMargin {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<MarginLength>, _>>()?;
        match values[..] {
            [] => Err(MarginParseError::Empty),
            [all] => Ok(Self::uniform(all)),
            [vertical, horizontal] => Ok(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(MarginParseError::Arity(values.len())),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub root_margin: RootMargin,
    /// Stop observing after the first reveal.
    pub once: bool,
    /// Delay, in seconds, carried on the reveal event.
    pub delay: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            root_margin: RootMargin::default(),
            once: true,
            delay: 0.0,
        }
    }
}

impl RevealOptions {
    pub fn with_margin(self, root_margin: RootMargin) -> Self {
        Self {
            root_margin,
            ..self
        }
    }

    pub fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }
}

/// Delays for an ordered set of targets, fixed by declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerGroup {
    pub base_delay: f64,
    pub increment: f64,
}

impl StaggerGroup {
    pub fn new(base_delay: f64, increment: f64) -> Self {
        Self {
            base_delay,
            increment,
        }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        compute_delay(self.base_delay, index, self.increment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionSupport {
    Available,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Observing,
    AlreadyRevealed,
    /// No way to observe the viewport, so the target was revealed on the spot.
    RevealedImmediately,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealEvent<K> {
    pub target: K,
    pub delay: f64,
}

#[derive(Debug, Clone)]
struct RevealTarget<K> {
    key: K,
    state: RevealState,
    options: RevealOptions,
    observing: bool,
}

/// Tracks entrance latches for a set of elements keyed by `K`.
#[derive(Debug, Clone)]
pub struct RevealController<K> {
    support: IntersectionSupport,
    targets: Vec<RevealTarget<K>>,
    index: HashMap<K, usize>,
    events: Vec<RevealEvent<K>>,
}

impl<K> RevealController<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new(support: IntersectionSupport) -> Self {
        Self {
            support,
            targets: Vec::new(),
            index: HashMap::new(),
            events: Vec::new(),
        }
    }

    pub fn support(&self) -> IntersectionSupport {
        self.support
    }

    pub fn register(&mut self, key: K, options: RevealOptions) -> Registration {
        if let Some(&i) = self.index.get(&key) {
            let target = &mut self.targets[i];
            if target.state.is_revealed() {
                return Registration::AlreadyRevealed;
            }
            target.observing = true;
            if self.support == IntersectionSupport::Unavailable {
                self.latch(i);
                return Registration::RevealedImmediately;
            }
            return Registration::Observing;
        }

        let i = self.targets.len();
        self.index.insert(key.clone(), i);
        self.targets.push(RevealTarget {
            key,
            state: RevealState::NotRevealed,
            options,
            observing: true,
        });

        match self.support {
            IntersectionSupport::Available => Registration::Observing,
            IntersectionSupport::Unavailable => {
                self.latch(i);
                Registration::RevealedImmediately
            }
        }
    }

    /// Registers `keys` in order; the n-th key gets the group's n-th delay.
    pub fn register_group<I>(
        &mut self,
        group: &StaggerGroup,
        keys: I,
        options: RevealOptions,
    ) -> Vec<Registration>
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter()
            .enumerate()
            .map(|(i, key)| self.register(key, options.with_delay(group.delay_for(i))))
            .collect()
    }

    /// Switches to [`IntersectionSupport::Unavailable`] and reveals every
    /// target still being observed.
    pub fn fail_open(&mut self) {
        self.support = IntersectionSupport::Unavailable;
        for i in 0..self.targets.len() {
            let target = &self.targets[i];
            if target.observing && !target.state.is_revealed() {
                self.latch(i);
            }
        }
    }

    pub fn on_intersect(&mut self, key: &K, is_intersecting: bool) -> Option<RevealEvent<K>> {
        let i = *self.index.get(key)?;
        let target = &self.targets[i];
        if !target.observing || target.state.transition(is_intersecting) == target.state {
            return None;
        }
        Some(self.latch(i))
    }

    fn latch(&mut self, i: usize) -> RevealEvent<K> {
        let target = &mut self.targets[i];
        target.state = RevealState::Revealed;
        if target.options.once {
            target.observing = false;
        }
        let event = RevealEvent {
            target: target.key.clone(),
            delay: target.options.delay,
        };
        self.events.push(event.clone());
        event
    }

    pub fn state(&self, key: &K) -> RevealState {
        self.index
            .get(key)
            .map(|&i| self.targets[i].state)
            .unwrap_or_default()
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.state(key).is_revealed()
    }

    pub fn delay(&self, key: &K) -> Option<f64> {
        self.index.get(key).map(|&i| self.targets[i].options.delay)
    }

    pub fn options(&self, key: &K) -> Option<RevealOptions> {
        self.index.get(key).map(|&i| self.targets[i].options)
    }

    /// Whether the host should keep an observer attached to `key`.
    pub fn should_observe(&self, key: &K) -> bool {
        self.index
            .get(key)
            .map(|&i| self.targets[i].observing)
            .unwrap_or(false)
    }

    pub fn drain_events(&mut self) -> Vec<RevealEvent<K>> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Stops all observation and drops undelivered events. Revealed targets
    /// stay revealed.
    pub fn teardown(&mut self) {
        for target in &mut self.targets {
            target.observing = false;
        }
        self.events.clear();
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
    fn test_latch_transitions() {
        use RevealState::*;
        assert_eq!(NotRevealed.transition(false), NotRevealed);
        assert_eq!(NotRevealed.transition(true), Revealed);
        assert_eq!(Revealed.transition(false), Revealed);
        assert_eq!(Revealed.transition(true), Revealed);
    }

    #[test]
    fn test_double_intersect_single_event() {
        let mut c = RevealController::new(IntersectionSupport::Available);
        c.register("card", RevealOptions::default());
        assert!(c.on_intersect(&"card", false).is_none());
        assert!(c.on_intersect(&"card", true).is_some());
        assert!(c.on_intersect(&"card", true).is_none());
        assert!(c.on_intersect(&"card", false).is_none());
        assert!(c.is_revealed(&"card"));
        assert_eq!(c.drain_events().len(), 1);
        assert!(c.drain_events().is_empty());
    }

    #[test]
    fn test_stagger_follows_declaration_order() {
        let mut c = RevealController::new(IntersectionSupport::Available);
        let group = StaggerGroup::new(0.1, 0.1);
        c.register_group(&group, 0..5usize, RevealOptions::default());

        let mut delays = [0.0; 5];
        for i in [3usize, 0, 4, 1, 2] {
            let ev = c.on_intersect(&i, true).expect("first intersection reveals");
            assert_eq!(ev.target, i);
            delays[i] = ev.delay;
        }
        for (actual, expected) in delays.iter().zip([0.1, 0.2, 0.3, 0.4, 0.5]) {
            assert_close(*actual, expected);
        }
    }

    #[test]
    fn test_events_drain_in_emission_order() {
        let mut c = RevealController::new(IntersectionSupport::Available);
        c.register_group(&StaggerGroup::new(0.0, 0.1), ["a", "b", "c"], RevealOptions::default());
        c.on_intersect(&"c", true);
        c.on_intersect(&"a", true);
        let order = c
            .drain_events()
            .into_iter()
            .map(|e| e.target)
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["c", "a"]);
    }

    #[test]
    fn test_degraded_mode_reveals_everything() {
        for n in [0usize, 1, 10] {
            let mut c = RevealController::new(IntersectionSupport::Unavailable);
            let regs = c.register_group(&StaggerGroup::new(0.0, 0.1), 0..n, RevealOptions::default());
            assert!(regs.iter().all(|r| *r == Registration::RevealedImmediately));
            assert!((0..n).all(|i| c.is_revealed(&i)));
            assert_eq!(c.drain_events().len(), n);
            assert_eq!(c.len(), n);
        }
    }

    #[test]
    fn test_fail_open_after_registration() {
        let mut c = RevealController::new(IntersectionSupport::Available);
        c.register_group(&StaggerGroup::new(0.2, 0.1), 0..3usize, RevealOptions::default());
        c.on_intersect(&1, true);
        c.drain_events();
        c.fail_open();
        assert_eq!(c.support(), IntersectionSupport::Unavailable);
        assert!((0..3).all(|i| c.is_revealed(&i)));
        let events = c.drain_events();
        assert_eq!(events.iter().map(|e| e.target).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(
            c.register(7, RevealOptions::default()),
            Registration::RevealedImmediately
        );
    }

    #[test]
    fn test_reregistration() {
        let mut c = RevealController::new(IntersectionSupport::Available);
        assert_eq!(c.register(1, RevealOptions::default()), Registration::Observing);
        assert_eq!(c.register(1, RevealOptions::default()), Registration::Observing);
        assert_eq!(c.len(), 1);
        c.on_intersect(&1, true);
        assert_eq!(
            c.register(1, RevealOptions::default()),
            Registration::AlreadyRevealed
        );
        assert!(c.on_intersect(&1, true).is_none());
        assert_eq!(c.drain_events().len(), 1);
    }

    #[test]
    fn test_once_stops_observation() {
        let mut c = RevealController::new(IntersectionSupport::Available);
        c.register("once", RevealOptions::default());
        c.register(
            "keep",
            RevealOptions {
                once: false,
                ..Default::default()
            },
        );
        c.on_intersect(&"once", true);
        c.on_intersect(&"keep", true);
        assert!(!c.should_observe(&"once"));
        assert!(c.should_observe(&"keep"));
        c.on_intersect(&"keep", false);
        assert!(c.is_revealed(&"keep"));
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut c: RevealController<&str> = RevealController::new(IntersectionSupport::Available);
        assert!(c.on_intersect(&"ghost", true).is_none());
        assert!(!c.is_revealed(&"ghost"));
        assert!(!c.should_observe(&"ghost"));
        assert!(c.delay(&"ghost").is_none());
    }

    #[test]
    fn test_teardown_keeps_latches() {
        let mut c = RevealController::new(IntersectionSupport::Available);
        c.register_group(&StaggerGroup::new(0.0, 0.1), [1, 2], RevealOptions::default());
        c.on_intersect(&1, true);
        c.teardown();
        assert!(c.is_revealed(&1));
        assert!(c.drain_events().is_empty());
        assert!(c.on_intersect(&2, true).is_none());
        assert!(!c.is_revealed(&2));
    }

    #[test]
    fn test_root_margin_parsing() {
        let m: RootMargin = "-50px".parse().unwrap();
        assert_eq!(m, RootMargin::uniform(MarginLength::Px(-50.0)));
        assert_eq!(m.to_string(), "-50px -50px -50px -50px");

        let m: RootMargin = "0px 0px -50px 0px".parse().unwrap();
        assert_eq!(m.bottom, MarginLength::Px(-50.0));
        assert_eq!(m.top, MarginLength::Px(0.0));

        let m: RootMargin = "10% 0".parse().unwrap();
        assert_eq!(m.top, MarginLength::Percent(10.0));
        assert_eq!(m.left, MarginLength::Px(0.0));

        let m: RootMargin = "1px 2px 3px".parse().unwrap();
        assert_eq!(m.left, MarginLength::Px(2.0));
        assert_eq!(m.bottom, MarginLength::Px(3.0));
    }

    #[test]
    fn test_root_margin_errors() {
        assert_eq!("".parse::<RootMargin>(), Err(MarginParseError::Empty));
        assert_eq!(
            "1px 1px 1px 1px 1px".parse::<RootMargin>(),
            Err(MarginParseError::Arity(5))
        );
        assert_eq!(
            "50em".parse::<RootMargin>(),
            Err(MarginParseError::Value("50em".to_string()))
        );
        assert!("px".parse::<RootMargin>().is_err());
    }

    #[test]
    fn test_default_margin_renders_zero() {
        assert_eq!(RootMargin::default().to_string(), "0px 0px 0px 0px");
    }
}
