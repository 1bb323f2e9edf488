use std::time::{Duration, Instant};

pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Value shown `elapsed` into a count from zero to `target`.
pub fn counter_value(target: u64, elapsed: Duration, duration: Duration) -> u64 {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }

    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    (target as f64 * ease_out_cubic(progress)).round() as u64
}

pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[derive(Debug, Clone, Copy)]
pub struct CounterAnimation {
    started: Instant,
    duration: Duration,
}

impl CounterAnimation {
    pub fn start(now: Instant) -> Self {
        Self {
            started: now,
            duration: COUNTER_DURATION,
        }
    }

    pub fn value(&self, target: u64, now: Instant) -> u64 {
        counter_value(target, now.saturating_duration_since(self.started), self.duration)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-9);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_counter_value_over_time() {
        let d = COUNTER_DURATION;
        assert_eq!(counter_value(1000, Duration::ZERO, d), 0);
        assert_eq!(counter_value(1000, Duration::from_millis(1000), d), 875);
        assert_eq!(counter_value(1000, d, d), 1000);
        assert_eq!(counter_value(1000, Duration::from_secs(60), d), 1000);
        assert_eq!(counter_value(7, Duration::ZERO, Duration::ZERO), 7);
    }

    #[test]
    fn test_counter_is_monotonic() {
        let mut last = 0;
        for ms in (0..=2000).step_by(16) {
            let value = counter_value(48_213, Duration::from_millis(ms), COUNTER_DURATION);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(48213), "48,213");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_animation_finishes() {
        let start = Instant::now();
        let anim = CounterAnimation::start(start);
        assert!(!anim.is_finished(start));
        assert_eq!(anim.value(50, start + COUNTER_DURATION), 50);
        assert!(anim.is_finished(start + COUNTER_DURATION));
    }
}
