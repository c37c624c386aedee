//! Particle state and spawn rules.

use glam::Vec2;
use rand::Rng;

use crate::constants::{
    DRIFT_SPEED_MAX, INTENSE_TIER_MIN_STREAK, MEDIUM_TIER_MIN_STREAK, RISE_SPEED_MIN,
    RISE_SPEED_SPAN, TIER_INTENSE_RGB, TIER_LOW_RGB, TIER_MEDIUM_RGB,
};
use crate::engine::FireConfig;
use crate::host::Bounds;

/// Discrete color bucket derived from the raw streak value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Low,
    Medium,
    Intense,
}

impl Tier {
    pub fn from_streak(streak: u32) -> Self {
        if streak >= INTENSE_TIER_MIN_STREAK {
            Tier::Intense
        } else if streak >= MEDIUM_TIER_MIN_STREAK {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    /// Fixed palette color for this tier, as normalized RGB.
    pub fn color_rgb(self) -> [f32; 3] {
        match self {
            Tier::Low => TIER_LOW_RGB,
            Tier::Medium => TIER_MEDIUM_RGB,
            Tier::Intense => TIER_INTENSE_RGB,
        }
    }
}

/// One ember of the fire effect.
///
/// Positions are surface-local and y-down; a particle spawns at the bottom
/// edge of the container and rises until its opacity decays to zero, at
/// which point it is recycled in place.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub alpha: f32,
    pub color: [f32; 3],
    pub radius: f32,
}

impl Particle {
    /// Spawn a fresh particle at the bottom center of `bounds`.
    ///
    /// Velocity scales with `intensity` (the saturated streak value):
    /// horizontal drift in `[-intensity, intensity]`, vertical rise in
    /// `(-3 * intensity - 1, -1]` so every particle moves upward.
    pub fn spawn(
        rng: &mut impl Rng,
        bounds: Bounds,
        intensity: u32,
        tier: Tier,
        config: &FireConfig,
    ) -> Self {
        let k = intensity as f32;
        Self {
            pos: spawn_position(rng, bounds, config.spawn_jitter),
            vel: Vec2::new(
                rng.gen_range(-DRIFT_SPEED_MAX..DRIFT_SPEED_MAX) * k,
                -(rng.gen::<f32>() * RISE_SPEED_SPAN * k) - RISE_SPEED_MIN,
            ),
            alpha: config.spawn_alpha,
            color: tier.color_rgb(),
            radius: config.radius,
        }
    }

    /// Advance one frame: apply velocity and decay opacity.
    #[inline]
    pub fn step(&mut self, alpha_decay: f32) {
        self.pos += self.vel;
        self.alpha -= alpha_decay;
    }

    /// A particle whose opacity has fully decayed is due for recycling.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.alpha <= 0.0
    }

    /// Reset position and opacity per the spawn rule, keeping the velocity
    /// and color rolled at spawn time.
    pub fn recycle(&mut self, rng: &mut impl Rng, bounds: Bounds, config: &FireConfig) {
        self.pos = spawn_position(rng, bounds, config.spawn_jitter);
        self.alpha = config.spawn_alpha;
    }
}

/// Bottom edge of the container, horizontally centered with uniform jitter.
fn spawn_position(rng: &mut impl Rng, bounds: Bounds, jitter: f32) -> Vec2 {
    Vec2::new(
        bounds.center_x() + rng.gen_range(-jitter..jitter),
        bounds.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SPAWN_JITTER;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> FireConfig {
        FireConfig::default()
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_streak(1), Tier::Low);
        assert_eq!(Tier::from_streak(4), Tier::Low);
        assert_eq!(Tier::from_streak(5), Tier::Medium);
        assert_eq!(Tier::from_streak(6), Tier::Medium);
        assert_eq!(Tier::from_streak(7), Tier::Intense);
        assert_eq!(Tier::from_streak(100), Tier::Intense);
    }

    #[test]
    fn tiers_map_to_distinct_colors() {
        let low = Tier::Low.color_rgb();
        let medium = Tier::Medium.color_rgb();
        let intense = Tier::Intense.color_rgb();
        assert_ne!(low, medium);
        assert_ne!(medium, intense);
        assert_ne!(low, intense);
    }

    #[test]
    fn spawn_respects_position_and_velocity_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(200.0, 120.0);
        let intensity = 7;
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, bounds, intensity, Tier::Intense, &config());
            assert!(
                (p.pos.x - bounds.center_x()).abs() <= SPAWN_JITTER,
                "spawn x {} outside jitter window",
                p.pos.x
            );
            assert_eq!(p.pos.y, bounds.height, "particles spawn at the bottom edge");
            let k = intensity as f32;
            assert!(p.vel.x.abs() <= k, "drift speed {} exceeds intensity", p.vel.x);
            assert!(
                p.vel.y <= -RISE_SPEED_MIN,
                "vertical velocity {} is not upward",
                p.vel.y
            );
            assert!(p.vel.y >= -(RISE_SPEED_SPAN * k) - RISE_SPEED_MIN);
            assert_eq!(p.alpha, config().spawn_alpha);
        }
    }

    #[test]
    fn step_applies_velocity_and_decay() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Bounds::new(100.0, 100.0);
        let mut p = Particle::spawn(&mut rng, bounds, 3, Tier::Low, &config());
        let start_pos = p.pos;
        let vel = p.vel;
        p.step(config().alpha_decay);
        assert_eq!(p.pos, start_pos + vel);
        assert!((p.alpha - (config().spawn_alpha - config().alpha_decay)).abs() < 1e-6);
    }

    #[test]
    fn recycle_resets_position_and_alpha_only() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = Bounds::new(300.0, 150.0);
        let mut p = Particle::spawn(&mut rng, bounds, 5, Tier::Medium, &config());
        let vel = p.vel;
        let color = p.color;
        p.alpha = 0.0;
        assert!(p.is_expired());
        p.recycle(&mut rng, bounds, &config());
        assert_eq!(p.alpha, config().spawn_alpha);
        assert_eq!(p.pos.y, bounds.height);
        assert!((p.pos.x - bounds.center_x()).abs() <= SPAWN_JITTER);
        assert_eq!(p.vel, vel, "recycle must not reroll velocity");
        assert_eq!(p.color, color, "recycle must not reroll color");
    }
}
