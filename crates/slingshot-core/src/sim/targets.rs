//! Stationary collision targets. One sits inside the planetary disc, one
//! well outside it, so the second shot has to thread the whole system.

use glam::Vec3;

/// A probe closer than this to a target's center scores a hit.
pub const HIT_RADIUS: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct Target {
    pub id: u32,
    pub position: Vec3,
    pub hit: bool,
}

impl Target {
    pub fn new(id: u32, position: Vec3) -> Self {
        Target {
            id,
            position,
            hit: false,
        }
    }

    pub fn is_hit_by(&self, probe_position: Vec3) -> bool {
        self.position.distance(probe_position) < HIT_RADIUS
    }
}

/// The two fixed targets of the game.
pub fn target_layout() -> Vec<Target> {
    vec![
        Target::new(1, Vec3::new(25.0, 0.0, 0.0)),
        Target::new(2, Vec3::new(-70.0, 0.0, 0.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_two_unhit_targets() {
        let targets = target_layout();
        assert_eq!(targets.len(), 2);
        assert!(targets.iter().all(|t| !t.hit));
        assert_ne!(targets[0].id, targets[1].id);
    }

    #[test]
    fn hit_test_uses_strict_radius() {
        let target = Target::new(1, Vec3::new(25.0, 0.0, 0.0));
        assert!(target.is_hit_by(Vec3::new(25.0, 1.9, 0.0)));
        assert!(!target.is_hit_by(Vec3::new(25.0, HIT_RADIUS, 0.0)));
        assert!(!target.is_hit_by(Vec3::new(30.0, 0.0, 0.0)));
    }
}
