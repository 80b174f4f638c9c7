//! Key-timing classifier: turns press/release pairs into marks.
//!
//! Timestamps are offsets on any monotonic clock; only differences matter.

use std::time::Duration;

use tracing::debug;

use crate::symbol::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Longest press that still counts as a short mark (inclusive).
    pub mark_max_duration: Duration,
    /// Key-up gap long enough to suggest a letter break. Only observed;
    /// separators come from the next-letter key, never from timing.
    pub long_gap_threshold: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            mark_max_duration: Duration::from_millis(400),
            long_gap_threshold: Duration::from_millis(800),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    Press(Duration),
    Release(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyState {
    Idle { released_at: Option<Duration> },
    Pressed(Duration),
}

#[derive(Debug, Clone)]
pub struct TimingClassifier {
    config: TimingConfig,
    state: KeyState,
}

impl TimingClassifier {
    pub fn new(config: TimingConfig) -> Self {
        Self {
            config,
            state: KeyState::Idle { released_at: None },
        }
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.state, KeyState::Pressed(_))
    }

    /// Feed one transition; returns the symbol it completes, if any.
    ///
    /// Never returns `Separator`.
    pub fn classify(&mut self, event: KeyTransition) -> Option<Symbol> {
        match (self.state, event) {
            (KeyState::Idle { released_at }, KeyTransition::Press(t)) => {
                if let Some(gap) = released_at.map(|r| t.saturating_sub(r)) {
                    if gap > self.config.long_gap_threshold {
                        debug!(?gap, "long key-up gap; letter break left to next-letter key");
                    }
                }
                self.state = KeyState::Pressed(t);
                None
            }
            (KeyState::Pressed(_), KeyTransition::Press(t)) => {
                // The unmatched earlier press is discarded.
                self.state = KeyState::Pressed(t);
                None
            }
            (KeyState::Pressed(t0), KeyTransition::Release(t)) => {
                // A release stamped before its press counts as zero-length.
                let held = t.saturating_sub(t0);
                self.state = KeyState::Idle {
                    released_at: Some(t),
                };
                Some(if held <= self.config.mark_max_duration {
                    Symbol::Mark
                } else {
                    Symbol::Hold
                })
            }
            (KeyState::Idle { .. }, KeyTransition::Release(t)) => {
                debug!(?t, "release without press ignored");
                None
            }
        }
    }

    /// Drop any pending press.
    pub fn reset(&mut self) {
        self.state = KeyState::Idle { released_at: None };
    }
}

impl Default for TimingClassifier {
    fn default() -> Self {
        Self::new(TimingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use KeyTransition::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn boundary_is_inclusive_mark() {
        let mut c = TimingClassifier::default();
        assert_eq!(c.classify(Press(secs(0.0))), None);
        assert_eq!(c.classify(Release(secs(0.4))), Some(Symbol::Mark));
    }

    #[test]
    fn just_over_boundary_is_hold() {
        let mut c = TimingClassifier::default();
        c.classify(Press(secs(0.0)));
        assert_eq!(c.classify(Release(secs(0.40001))), Some(Symbol::Hold));
    }

    #[test]
    fn release_without_press_is_noop() {
        let mut c = TimingClassifier::default();
        assert_eq!(c.classify(Release(secs(5.0))), None);
        assert!(!c.is_pressed());
    }

    #[test]
    fn second_release_is_noop() {
        let mut c = TimingClassifier::default();
        c.classify(Press(secs(1.0)));
        assert_eq!(c.classify(Release(secs(1.1))), Some(Symbol::Mark));
        assert_eq!(c.classify(Release(secs(3.0))), None);
    }

    #[test]
    fn repeated_press_restarts_timing() {
        let mut c = TimingClassifier::default();
        c.classify(Press(secs(0.0)));
        c.classify(Press(secs(2.0)));
        assert_eq!(c.classify(Release(secs(2.1))), Some(Symbol::Mark));
    }

    #[test]
    fn long_gap_never_emits_separator() {
        let mut c = TimingClassifier::default();
        c.classify(Press(secs(0.0)));
        c.classify(Release(secs(0.1)));
        assert_eq!(c.classify(Press(secs(10.0))), None);
        assert_eq!(c.classify(Release(secs(10.9))), Some(Symbol::Hold));
    }

    #[test]
    fn release_before_press_is_mark() {
        let mut c = TimingClassifier::default();
        c.classify(Press(secs(2.0)));
        assert_eq!(c.classify(Release(secs(1.0))), Some(Symbol::Mark));
    }

    #[test]
    fn custom_threshold() {
        let mut c = TimingClassifier::new(TimingConfig {
            mark_max_duration: Duration::from_millis(100),
            long_gap_threshold: Duration::from_millis(300),
        });
        c.classify(Press(Duration::from_millis(0)));
        assert_eq!(
            c.classify(Release(Duration::from_millis(150))),
            Some(Symbol::Hold)
        );
    }

    #[test]
    fn reset_drops_pending_press() {
        let mut c = TimingClassifier::default();
        c.classify(Press(secs(0.0)));
        c.reset();
        assert_eq!(c.classify(Release(secs(0.1))), None);
    }
}
