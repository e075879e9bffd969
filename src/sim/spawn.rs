//! Procedural obstacle spawning and cloud recycling
//!
//! Obstacles are a rolling set: culled once they scroll off behind the
//! player, appended ahead with randomized spacing and height. Clouds are a
//! fixed pool that wraps around instead of being reallocated.

use rand::Rng;

use super::state::{Cloud, Obstacle};
use crate::consts::*;
use crate::tuning::Tuning;

/// Scroll, cull, and refill the obstacle set for one frame.
///
/// Appends until the set holds at least `MIN_OBSTACLES` entries and the
/// rightmost sits beyond the spawn trigger, so the track ahead is never
/// empty no matter how many entries a frame culled.
pub fn advance_obstacles(
    obstacles: &mut Vec<Obstacle>,
    rng: &mut impl Rng,
    speed: f32,
    dt: f32,
    tuning: &Tuning,
) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed * dt;
    }
    obstacles.retain(|o| o.x > OBSTACLE_CULL_X);

    loop {
        // Spawn-ordered, so the rightmost is the last entry
        let rightmost = obstacles.last().map_or(FALLBACK_SPAWN_X, |o| o.x);
        if obstacles.len() >= MIN_OBSTACLES && rightmost >= tuning.spawn_trigger_x {
            break;
        }
        obstacles.push(Obstacle {
            x: rightmost + tuning.obstacle_gap + jitter(rng, tuning.obstacle_gap_jitter),
            height: rng.random_range(tuning.obstacle_min_height..=tuning.obstacle_max_height),
        });
    }
}

/// Drift the cloud pool at parallax speed, recycling anything that left
/// the screen to a fresh spot off the right edge.
pub fn advance_clouds(
    clouds: &mut [Cloud],
    rng: &mut impl Rng,
    speed: f32,
    dt: f32,
    tuning: &Tuning,
) {
    for cloud in clouds.iter_mut() {
        cloud.pos.x -= speed * tuning.cloud_parallax * dt;
        if cloud.pos.x < CLOUD_CULL_X {
            cloud.pos.x = CLOUD_RESPAWN_X + jitter(rng, CLOUD_RESPAWN_JITTER);
            cloud.pos.y = rng.random_range(CLOUD_MIN_Y..=CLOUD_MAX_Y);
        }
    }
}

/// Uniform draw in [0, max), tolerating a zero-width range (pinned tests)
fn jitter(rng: &mut impl Rng, max: f32) -> f32 {
    if max > 0.0 {
        rng.random_range(0.0..max)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn initial_obstacles() -> Vec<Obstacle> {
        INITIAL_OBSTACLES
            .iter()
            .map(|&(x, height)| Obstacle { x, height })
            .collect()
    }

    #[test]
    fn test_obstacles_scroll_left() {
        let mut obstacles = initial_obstacles();
        let mut rng = Pcg32::seed_from_u64(1);
        advance_obstacles(&mut obstacles, &mut rng, 5.0, 0.1, &Tuning::default());
        assert!((obstacles[0].x - 7.5).abs() < 1e-5);
        assert!((obstacles[1].x - 13.5).abs() < 1e-5);
    }

    #[test]
    fn test_cull_behind_player() {
        let mut obstacles = vec![
            Obstacle { x: -5.2, height: 1.0 },
            Obstacle { x: 10.0, height: 0.8 },
        ];
        let mut rng = Pcg32::seed_from_u64(1);
        advance_obstacles(&mut obstacles, &mut rng, 5.0, 0.01, &Tuning::default());
        assert!(obstacles.iter().all(|o| o.x > OBSTACLE_CULL_X));
    }

    #[test]
    fn test_set_never_drops_below_minimum() {
        let tuning = Tuning::default();
        let mut obstacles = initial_obstacles();
        let mut rng = Pcg32::seed_from_u64(99);
        // A long stretch at high speed with large frames
        for _ in 0..2000 {
            advance_obstacles(&mut obstacles, &mut rng, 15.0, 0.05, &tuning);
            assert!(obstacles.len() >= MIN_OBSTACLES);
        }
    }

    #[test]
    fn test_spawn_spacing_within_bounds() {
        let tuning = Tuning::default();
        let mut obstacles = vec![Obstacle { x: 2.0, height: 1.0 }];
        let mut rng = Pcg32::seed_from_u64(5);
        advance_obstacles(&mut obstacles, &mut rng, 5.0, 0.001, &tuning);

        // Appended entries sit gap..gap+jitter beyond their predecessor
        for pair in obstacles.windows(2) {
            let spacing = pair[1].x - pair[0].x;
            assert!(spacing >= tuning.obstacle_gap);
            assert!(spacing < tuning.obstacle_gap + tuning.obstacle_gap_jitter);
        }
    }

    #[test]
    fn test_spawned_heights_are_jumpable() {
        let tuning = Tuning::default();
        let mut obstacles = initial_obstacles();
        let mut rng = Pcg32::seed_from_u64(13);
        for _ in 0..1000 {
            advance_obstacles(&mut obstacles, &mut rng, 10.0, 0.05, &tuning);
        }
        for obstacle in &obstacles {
            assert!(obstacle.height >= tuning.obstacle_min_height);
            assert!(obstacle.height <= tuning.obstacle_max_height);
            assert!(obstacle.height < tuning.max_clearable_height());
        }
    }

    #[test]
    fn test_zero_jitter_pins_spacing() {
        let mut tuning = Tuning::default();
        tuning.obstacle_gap_jitter = 0.0;
        let mut obstacles = vec![Obstacle { x: 2.0, height: 1.0 }];
        let mut rng = Pcg32::seed_from_u64(5);
        advance_obstacles(&mut obstacles, &mut rng, 5.0, 0.001, &tuning);
        let spacing = obstacles[1].x - obstacles[0].x;
        assert!((spacing - tuning.obstacle_gap).abs() < 1e-5);
    }

    #[test]
    fn test_spawning_is_seed_deterministic() {
        let tuning = Tuning::default();
        let mut a = initial_obstacles();
        let mut b = initial_obstacles();
        let mut rng_a = Pcg32::seed_from_u64(4242);
        let mut rng_b = Pcg32::seed_from_u64(4242);
        for _ in 0..500 {
            advance_obstacles(&mut a, &mut rng_a, 8.0, 0.016, &tuning);
            advance_obstacles(&mut b, &mut rng_b, 8.0, 0.016, &tuning);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_clouds_drift_slower_than_track() {
        let tuning = Tuning::default();
        let mut clouds = [Cloud {
            pos: Vec2::new(10.0, 4.0),
        }];
        let mut rng = Pcg32::seed_from_u64(1);
        advance_clouds(&mut clouds, &mut rng, 5.0, 0.1, &tuning);
        let moved = 10.0 - clouds[0].pos.x;
        assert!((moved - 5.0 * tuning.cloud_parallax * 0.1).abs() < 1e-5);
        assert!(moved < 5.0 * 0.1);
    }

    #[test]
    fn test_cloud_recycles_off_right_edge() {
        let tuning = Tuning::default();
        let mut clouds = [Cloud {
            pos: Vec2::new(CLOUD_CULL_X + 0.001, 4.0),
        }];
        let mut rng = Pcg32::seed_from_u64(21);
        advance_clouds(&mut clouds, &mut rng, 10.0, 0.05, &tuning);
        assert!(clouds[0].pos.x >= CLOUD_RESPAWN_X);
        assert!(clouds[0].pos.x < CLOUD_RESPAWN_X + CLOUD_RESPAWN_JITTER);
        assert!(clouds[0].pos.y >= CLOUD_MIN_Y);
        assert!(clouds[0].pos.y <= CLOUD_MAX_Y);
    }

    #[test]
    fn test_cloud_pool_is_fixed_size() {
        let tuning = Tuning::default();
        let mut clouds: Vec<Cloud> = INITIAL_CLOUDS
            .iter()
            .map(|&(x, y)| Cloud {
                pos: Vec2::new(x, y),
            })
            .collect();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..5000 {
            advance_clouds(&mut clouds, &mut rng, 12.0, 0.05, &tuning);
        }
        assert_eq!(clouds.len(), INITIAL_CLOUDS.len());
    }
}
