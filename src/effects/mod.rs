//! Time-boxed visual effects. All of them are pure functions of elapsed time
//! so the renderer can sample them on any frame.

mod confetti;
mod counter;
mod sparkle;

pub use confetti::{CONFETTI_PALETTE, ConfettiBurst, Particle, ParticleFrame, ParticleShape};
pub use counter::{COUNTER_DURATION, CounterAnimation, counter_value, ease_out_cubic, format_thousands};
pub use sparkle::{SPARKLE_LIFETIME, Sparkle};
