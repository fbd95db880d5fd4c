//! Confetti burst over the rim when a basket is made

use bevy::prelude::*;
use rand::Rng;

use crate::constants::*;
use crate::events::BasketScored;

/// One piece of confetti in flight
#[derive(Component, Debug, Clone)]
pub struct Confetti {
    pub velocity: Vec3,
    pub lifetime: f32,
    pub max_lifetime: f32,
}

/// Launch parameters for a single piece
#[derive(Debug, Clone, Copy)]
pub struct ConfettiPiece {
    pub velocity: Vec3,
    /// Index into the confetti palette
    pub color_index: usize,
}

impl ConfettiPiece {
    pub fn color(&self) -> Color {
        CONFETTI_COLORS[self.color_index % CONFETTI_COLORS.len()]
    }
}

/// Random burst: `count` pieces thrown upward inside a cone of `spread_deg`
pub fn confetti_burst(rng: &mut impl Rng, count: usize, spread_deg: f32) -> Vec<ConfettiPiece> {
    let half_spread = (spread_deg / 2.0).to_radians();
    (0..count)
        .map(|_| {
            let tilt = rng.gen_range(0.0..=half_spread);
            let azimuth = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(CONFETTI_MIN_SPEED..=CONFETTI_MAX_SPEED);
            let direction = Vec3::new(
                tilt.sin() * azimuth.cos(),
                tilt.cos(),
                tilt.sin() * azimuth.sin(),
            );
            ConfettiPiece {
                velocity: direction * speed,
                color_index: rng.gen_range(0..CONFETTI_COLORS.len()),
            }
        })
        .collect()
}

/// Spawn a burst at the rim for every basket message
pub fn spawn_confetti(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut scored: MessageReader<BasketScored>,
) {
    if scored.read().last().is_none() {
        return;
    }

    let mesh = meshes.add(Cuboid::from_length(CONFETTI_SIZE));
    let color_materials: Vec<_> = CONFETTI_COLORS
        .iter()
        .map(|&color| {
            materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..default()
            })
        })
        .collect();

    let mut rng = rand::thread_rng();
    for piece in confetti_burst(&mut rng, CONFETTI_COUNT, CONFETTI_SPREAD_DEG) {
        let lifetime = CONFETTI_LIFETIME * rng.gen_range(0.7..=1.0);
        commands.spawn((
            Confetti {
                velocity: piece.velocity,
                lifetime,
                max_lifetime: lifetime,
            },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(color_materials[piece.color_index].clone()),
            Transform::from_translation(RIM_CENTER + Vec3::Y * 0.2),
        ));
    }
}

/// Fall, tumble, shrink, and despawn when expired
pub fn update_confetti(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Confetti, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (entity, mut piece, mut transform) in &mut query {
        piece.velocity.y -= CONFETTI_GRAVITY * dt;
        piece.velocity *= 1.0 - 1.5 * dt; // Air drag
        transform.translation += piece.velocity * dt;
        transform.rotate_local_x(6.0 * dt);

        piece.lifetime -= dt;
        if piece.lifetime <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }
        let progress = piece.lifetime / piece.max_lifetime;
        transform.scale = Vec3::splat(progress.max(0.01));
    }
}
