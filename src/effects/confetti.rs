use std::time::{Duration, Instant};

use rand::Rng;

const PARTICLE_COUNT: usize = 50;
const FLIGHT: Duration = Duration::from_millis(1500);
const LIFETIME: Duration = Duration::from_millis(2000);

/// Crimson, gold, coral, pink, red.
pub const CONFETTI_PALETTE: [(u8, u8, u8); 5] = [
    (0xdc, 0x14, 0x3c),
    (0xff, 0xd7, 0x00),
    (0xff, 0x6b, 0x6b),
    (0xff, 0xb3, 0xba),
    (0xff, 0x17, 0x44),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub color: (u8, u8, u8),
    pub shape: ParticleShape,
    /// Final displacement from the centre as a fraction of the area, in
    /// `-0.5..0.5`.
    pub dx: f64,
    pub dy: f64,
    /// Total spin in degrees.
    pub rotation: f64,
}

/// Where a particle is on a given frame, in fractions of the area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub x: f64,
    pub y: f64,
    pub glyph: char,
    pub color: (u8, u8, u8),
}

#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    starts: Instant,
    particles: Vec<Particle>,
}

impl ConfettiBurst {
    pub fn new<R: Rng + ?Sized>(starts: Instant, rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                color: CONFETTI_PALETTE[rng.random_range(0..CONFETTI_PALETTE.len())],
                shape: if rng.random_bool(0.5) {
                    ParticleShape::Round
                } else {
                    ParticleShape::Square
                },
                dx: rng.random_range(-0.5..0.5),
                dy: rng.random_range(-0.5..0.5),
                rotation: rng.random_range(0.0..720.0),
            })
            .collect();

        Self { starts, particles }
    }

    /// A burst that begins at `starts`, which may be in the future.
    pub fn random(starts: Instant) -> Self {
        Self::new(starts, &mut rand::rng())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.starts + LIFETIME
    }

    /// Empty before the burst starts and after the particles have landed.
    pub fn frames(&self, now: Instant) -> Vec<ParticleFrame> {
        let Some(elapsed) = now.checked_duration_since(self.starts) else {
            return Vec::new();
        };
        if elapsed >= FLIGHT {
            return Vec::new();
        }

        let eased = super::ease_out_cubic(elapsed.as_secs_f64() / FLIGHT.as_secs_f64());
        self.particles
            .iter()
            .map(|particle| ParticleFrame {
                x: 0.5 + particle.dx * eased,
                y: 0.5 + particle.dy * eased,
                glyph: glyph_for(particle, eased),
                color: particle.color,
            })
            .collect()
    }
}

fn glyph_for(particle: &Particle, eased: f64) -> char {
    match particle.shape {
        ParticleShape::Round => '●',
        ParticleShape::Square => {
            // square on the axis, diamond at 45 degrees
            if ((particle.rotation * eased / 45.0) as u64) % 2 == 0 {
                '■'
            } else {
                '◆'
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn burst(now: Instant) -> ConfettiBurst {
        ConfettiBurst::new(now, &mut StdRng::seed_from_u64(2026))
    }

    #[test]
    fn test_burst_has_fifty_palette_particles() {
        let burst = burst(Instant::now());
        assert_eq!(burst.particles().len(), 50);
        for particle in burst.particles() {
            assert!(CONFETTI_PALETTE.contains(&particle.color));
            assert!((-0.5..0.5).contains(&particle.dx));
            assert!((-0.5..0.5).contains(&particle.dy));
            assert!((0.0..720.0).contains(&particle.rotation));
        }
    }

    #[test]
    fn test_particles_start_at_centre_and_spread() {
        let now = Instant::now();
        let burst = burst(now);

        let start = burst.frames(now);
        assert!(start.iter().all(|f| f.x == 0.5 && f.y == 0.5));

        let later = burst.frames(now + Duration::from_millis(1000));
        assert_eq!(later.len(), 50);
        assert!(later.iter().any(|f| f.x != 0.5));
        assert!(later.iter().all(|f| (0.0..=1.0).contains(&f.x) && (0.0..=1.0).contains(&f.y)));
    }

    #[test]
    fn test_delayed_burst_is_invisible_until_start() {
        let now = Instant::now();
        let burst = burst(now + Duration::from_millis(500));
        assert!(burst.frames(now).is_empty());
        assert!(!burst.frames(now + Duration::from_millis(600)).is_empty());
    }

    #[test]
    fn test_burst_lands_then_expires() {
        let now = Instant::now();
        let burst = burst(now);
        assert!(burst.frames(now + FLIGHT).is_empty());
        assert!(!burst.is_expired(now + FLIGHT));
        assert!(burst.is_expired(now + LIFETIME));
    }
}
