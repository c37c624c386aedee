//! The streak fire engine: a small state machine owning a render surface, a
//! particle pool and a per-frame tick registration.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{
    ALPHA_DECAY_PER_FRAME, MAX_INTENSITY, PARTICLES_PER_LEVEL, PARTICLE_RADIUS, SPAWN_ALPHA,
    SPAWN_JITTER,
};
use crate::error::EngineError;
use crate::host::{Bounds, Host, Surface};
use crate::particle::{Particle, Tier};

/// Tuning parameters for the effect. The defaults are the shipped behavior;
/// tests and embedders can override individual fields.
#[derive(Clone, Debug)]
pub struct FireConfig {
    /// Pool size per intensity level.
    pub particles_per_level: usize,
    /// Streak values saturate at this intensity.
    pub max_intensity: u32,
    /// Opacity at spawn and after recycle.
    pub spawn_alpha: f32,
    /// Opacity lost per frame.
    pub alpha_decay: f32,
    /// Horizontal spread around the container center at spawn.
    pub spawn_jitter: f32,
    /// Draw radius of every particle.
    pub radius: f32,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            particles_per_level: PARTICLES_PER_LEVEL,
            max_intensity: MAX_INTENSITY,
            spawn_alpha: SPAWN_ALPHA,
            alpha_decay: ALPHA_DECAY_PER_FRAME,
            spawn_jitter: SPAWN_JITTER,
            radius: PARTICLE_RADIUS,
        }
    }
}

/// Per-mount engine instance.
///
/// The host reports streak changes through [`activate`](Self::activate) and
/// visibility loss through [`deactivate`](Self::deactivate); in between, its
/// frame scheduler calls [`tick`](Self::tick) once per animation frame.
/// Surface and tick registration are owned `Option`s, so "at most one of
/// each, released exactly once" holds by construction.
pub struct FireEngine<H: Host> {
    config: FireConfig,
    rng: StdRng,
    bounds: Bounds,
    surface: Option<H::Surface>,
    tick: Option<H::Tick>,
    particles: Vec<Particle>,
}

impl<H: Host> FireEngine<H> {
    pub fn new(config: FireConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            bounds: Bounds::default(),
            surface: None,
            tick: None,
            particles: Vec::new(),
        }
    }

    /// Apply a streak value.
    ///
    /// A streak below 1 tears the effect down. Otherwise the particle pool
    /// is discarded and rebuilt at `min(streak, max) * particles_per_level`;
    /// on the first activation the render surface is acquired from the host
    /// and the tick registration is established. Re-activation without an
    /// intervening deactivation is the refresh path, not an error.
    ///
    /// Fails with [`EngineError::InvalidHost`] when the container cannot be
    /// measured and [`EngineError::SurfaceInit`] when the host refuses the
    /// surface; on failure the engine state is unchanged.
    pub fn activate(&mut self, streak: u32, host: &H) -> Result<(), EngineError> {
        if streak < 1 {
            // Streak reset: release everything rather than idle invisibly.
            self.deactivate();
            return Ok(());
        }

        let bounds = host.bounds().ok_or(EngineError::InvalidHost)?;
        if self.surface.is_none() {
            let surface = host.acquire_surface(bounds)?;
            log::debug!(
                "fire surface acquired ({:.0}x{:.0})",
                bounds.width,
                bounds.height
            );
            self.surface = Some(surface);
            self.bounds = bounds;
        }

        let intensity = streak.min(self.config.max_intensity);
        let tier = Tier::from_streak(streak);
        let count = intensity as usize * self.config.particles_per_level;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::spawn(
                &mut self.rng,
                self.bounds,
                intensity,
                tier,
                &self.config,
            ));
        }
        log::debug!("fire pool rebuilt: {count} particles, tier {tier:?}");

        if self.tick.is_none() {
            self.tick = Some(host.schedule_tick());
        }
        Ok(())
    }

    /// Advance one frame: move and fade every particle, recycle the expired
    /// ones in place, and present the pool. No-op while dormant.
    pub fn tick(&mut self) {
        if self.tick.is_none() {
            return;
        }
        for p in &mut self.particles {
            p.step(self.config.alpha_decay);
            if p.is_expired() {
                p.recycle(&mut self.rng, self.bounds, &self.config);
            }
        }
        if let Some(surface) = &mut self.surface {
            surface.present(&self.particles);
        }
    }

    /// Tear the effect down: cancel the tick registration, discard the pool
    /// and release the surface. Idempotent; every exit path (streak reset,
    /// host unmount, wrapper drop) routes through here.
    pub fn deactivate(&mut self) {
        let had_tick = self.tick.take().is_some();
        self.particles.clear();
        if self.surface.take().is_some() || had_tick {
            log::debug!("fire effect torn down");
        }
    }

    /// The live pool, in no particular order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the live pool, for host-side perturbation.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Whether a surface is currently held.
    pub fn is_active(&self) -> bool {
        self.surface.is_some()
    }

    /// Whether a tick registration is currently held.
    pub fn is_ticking(&self) -> bool {
        self.tick.is_some()
    }
}

impl<H: Host> Drop for FireEngine<H> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
