//! Animation helpers for the decorative widgets.

use std::f64::consts::TAU;
use std::time::Duration;

/// Vertical offset of a floating shape at time `t` seconds.
pub fn float_offset(t: f64, phase: f64, amplitude: f64) -> f64 {
    (t * 0.8 + phase).sin() * amplitude
}

/// Rotation of a floating shape at time `t` seconds, in degrees.
pub fn float_rotation(t: f64, phase: f64) -> f64 {
    ((t * 0.3 + phase) * TAU).sin() * 8.0
}

/// Smooth 0..1 easing.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Speed eased between `base` (`blend` 0) and `base * slow_factor`
/// (`blend` 1).
pub fn blended_speed(base: f64, slow_factor: f64, blend: f64) -> f64 {
    let e = ease_in_out(blend);
    base * (1.0 - e) + base * slow_factor * e
}

/// Moves `blend` toward `target` by one step of `dt / duration`.
pub fn step_blend(blend: f64, target: f64, dt: Duration, duration: Duration) -> f64 {
    let step = dt.as_secs_f64() / duration.as_secs_f64().max(f64::EPSILON);
    if blend < target {
        (blend + step).min(target)
    } else {
        (blend - step).max(target)
    }
}

/// Advances an angle by `speed_deg_per_sec` over `dt`, wrapping at 360.
pub fn advance_angle(angle: f64, speed_deg_per_sec: f64, dt: Duration) -> f64 {
    (angle + speed_deg_per_sec * dt.as_secs_f64()).rem_euclid(360.0)
}

const TYPE_DELAY: Duration = Duration::from_millis(90);
const DELETE_DELAY: Duration = Duration::from_millis(45);
const HOLD_DELAY: Duration = Duration::from_millis(1600);
const NEXT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypePhase {
    Typing,
    Holding,
    Deleting,
}

/// Types each phrase out, holds, deletes it, then moves to the next.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    phase: TypePhase,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: TypePhase::Typing,
        }
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or("")
    }

    /// The visible prefix of the current phrase.
    pub fn text(&self) -> &'static str {
        let phrase = self.current();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    /// Advances one step and returns how long to wait before the next.
    pub fn tick(&mut self) -> Duration {
        if self.phrases.is_empty() {
            return HOLD_DELAY;
        }
        let len = self.current().chars().count();

        match self.phase {
            TypePhase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = TypePhase::Holding;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            TypePhase::Holding => {
                self.phase = TypePhase::Deleting;
                DELETE_DELAY
            }
            TypePhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = TypePhase::Typing;
                    NEXT_DELAY
                } else {
                    DELETE_DELAY
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PHRASES: [&str; 2] = ["Hi", "Yo!"];

    #[test]
    fn test_typewriter_cycle() {
        let mut tw = Typewriter::new(&PHRASES);
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.text(), "Hi");

        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.text(), "Hi");
        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.tick(), NEXT_DELAY);
        assert_eq!(tw.text(), "");

        tw.tick();
        assert_eq!(tw.text(), "Y");
    }

    #[test]
    fn test_typewriter_handles_multibyte() {
        static WIDE: [&str; 1] = ["héllo"];
        let mut tw = Typewriter::new(&WIDE);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_easing_bounds() {
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_hover_slowdown_eases() {
        assert_eq!(blended_speed(24.0, 0.25, 0.0), 24.0);
        assert_eq!(blended_speed(24.0, 0.25, 1.0), 6.0);
        let mid = blended_speed(24.0, 0.25, 0.5);
        assert!((mid - 15.0).abs() < 1e-9);

        let frame = Duration::from_millis(100);
        let ease = Duration::from_millis(400);
        let mut blend = 0.0;
        for _ in 0..3 {
            blend = step_blend(blend, 1.0, frame, ease);
        }
        assert!((blend - 0.75).abs() < 1e-9);
        blend = step_blend(blend, 1.0, frame, ease);
        blend = step_blend(blend, 1.0, frame, ease);
        assert_eq!(blend, 1.0);
        assert!((step_blend(blend, 0.0, frame, ease) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_angle_wraps() {
        let a = advance_angle(350.0, 20.0, Duration::from_secs(1));
        assert!((a - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_float_offset_bounded() {
        for i in 0..100 {
            assert!(float_offset(i as f64 * 0.1, 1.3, 12.0).abs() <= 12.0);
        }
    }
}
