//! Ball trail - recent positions plus fading particles

use std::collections::VecDeque;

use bevy::math::Vec3;

use crate::constants::*;

/// A fading trail marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailParticle {
    pub position: Vec3,
    pub life: f32, // 1.0 when spawned, removed at 0
}

#[derive(Debug, Clone)]
pub struct TrailHistory {
    points: VecDeque<Vec3>,
    particles: Vec<TrailParticle>,
    max_len: usize,
    decay: f32, // Life lost per frame
}

impl Default for TrailHistory {
    fn default() -> Self {
        Self::new(TRAIL_MAX_LEN, TRAIL_PARTICLE_DECAY)
    }
}

impl TrailHistory {
    pub fn new(max_len: usize, decay: f32) -> Self {
        Self {
            points: VecDeque::with_capacity(max_len + 1),
            particles: Vec::new(),
            max_len,
            decay,
        }
    }

    /// Append a position (oldest dropped past the cap) and spawn a particle there
    pub fn record(&mut self, position: Vec3) {
        self.points.push_back(position);
        while self.points.len() > self.max_len {
            self.points.pop_front();
        }
        self.particles.push(TrailParticle { position, life: 1.0 });
    }

    /// Age all particles by one frame and drop the dead ones
    pub fn age(&mut self) {
        let decay = self.decay;
        for particle in &mut self.particles {
            particle.life -= decay;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.particles.clear();
    }

    /// Oldest first
    pub fn points(&self) -> impl Iterator<Item = &Vec3> {
        self.points.iter()
    }

    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_is_bounded() {
        let mut trail = TrailHistory::default();
        for i in 0..100 {
            trail.record(Vec3::new(0.0, 0.0, i as f32));
            assert!(trail.len() <= TRAIL_MAX_LEN);
        }
        assert_eq!(trail.len(), TRAIL_MAX_LEN);
        // Oldest kept is #60
        assert_eq!(trail.points().next(), Some(&Vec3::new(0.0, 0.0, 60.0)));
    }

    #[test]
    fn test_particles_fade_out() {
        let mut trail = TrailHistory::new(40, 0.25);
        trail.record(Vec3::ZERO);
        trail.age();
        trail.age();
        trail.age();
        assert_eq!(trail.particles().len(), 1);
        assert!((trail.particles()[0].life - 0.25).abs() < 1e-6);
        trail.age();
        assert!(trail.particles().is_empty());
        // Positions stay until cleared
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut trail = TrailHistory::default();
        trail.record(Vec3::ONE);
        trail.clear();
        assert!(trail.is_empty());
        assert!(trail.particles().is_empty());
    }
}
