use glam::Vec2;

use crate::data::Body;
use crate::orbit;

/// Extra pixels around a body disc that still count as a hit.
pub const HIT_TOLERANCE: f32 = 10.0;

/// Clicks this close to the center select the sun.
pub const SUN_HIT_RADIUS: f32 = 25.0;

/// Result of a pointer hit test against the orbital scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Sun,
    Body(u32),
}

/// Test a pointer position against the scene at simulation time `t`.
///
/// The sun wins over anything passing through the center. Among bodies,
/// the first match in list order wins, so overlapping discs resolve
/// deterministically.
pub fn hit_test(bodies: &[Body], point: Vec2, center: Vec2, t: f64) -> Option<Hit> {
    if point.distance(center) < SUN_HIT_RADIUS {
        return Some(Hit::Sun);
    }
    for body in bodies {
        let pos = orbit::position_at(body.id, t, center);
        if point.distance(pos) < orbit::render_radius(body) + HIT_TOLERANCE {
            return Some(Hit::Body(body.id));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: u32, name: &str, category: &str) -> Body {
        Body {
            id,
            name: name.into(),
            category: category.into(),
            ..Body::default()
        }
    }

    const CENTER: Vec2 = Vec2::new(400.0, 300.0);

    #[test]
    fn center_click_hits_sun() {
        let bodies = vec![body(1, "Mercury", "Terrestrial")];
        assert_eq!(hit_test(&bodies, CENTER, CENTER, 0.0), Some(Hit::Sun));
        let near = CENTER + Vec2::new(24.0, 0.0);
        assert_eq!(hit_test(&bodies, near, CENTER, 0.0), Some(Hit::Sun));
    }

    #[test]
    fn sun_boundary_is_exclusive() {
        let edge = CENTER + Vec2::new(25.0, 0.0);
        // 25px from center, outside the sun but within Mercury's ring at t=0.
        assert_eq!(
            hit_test(&[body(1, "Mercury", "Terrestrial")], edge, CENTER, 0.0),
            Some(Hit::Body(1))
        );
        assert_eq!(hit_test(&[], edge, CENTER, 0.0), None);
    }

    #[test]
    fn click_on_body_at_known_position() {
        // At t=0 body 2 sits at center + (70, 0) with a 6px disc.
        let bodies = vec![body(2, "Venus", "Terrestrial")];
        let on = CENTER + Vec2::new(70.0, 0.0);
        assert_eq!(hit_test(&bodies, on, CENTER, 0.0), Some(Hit::Body(2)));

        let fringe = CENTER + Vec2::new(70.0 + 15.5, 0.0);
        assert_eq!(hit_test(&bodies, fringe, CENTER, 0.0), Some(Hit::Body(2)));

        let out = CENTER + Vec2::new(70.0 + 16.5, 0.0);
        assert_eq!(hit_test(&bodies, out, CENTER, 0.0), None);
    }

    #[test]
    fn gas_giant_has_wider_hit_area() {
        let bodies = vec![body(5, "Jupiter", "Gas Giant")];
        let ring = orbit::orbit_radius(5);
        let p = CENTER + Vec2::new(ring + 19.5, 0.0);
        assert_eq!(hit_test(&bodies, p, CENTER, 0.0), Some(Hit::Body(5)));
        let q = CENTER + Vec2::new(ring + 20.5, 0.0);
        assert_eq!(hit_test(&bodies, q, CENTER, 0.0), None);
    }

    #[test]
    fn first_body_in_list_order_wins() {
        // Two bodies sharing an id share a position; list order decides.
        let a = body(3, "Earth", "Terrestrial");
        let b = body(3, "Twin", "Terrestrial");
        let p = CENTER + Vec2::new(orbit::orbit_radius(3), 0.0);
        assert_eq!(hit_test(&[a, b], p, CENTER, 0.0), Some(Hit::Body(3)));
    }

    #[test]
    fn hit_tracks_motion() {
        let bodies = vec![body(2, "Venus", "Terrestrial")];
        let t = orbit::orbit_period(2) / 2.0; // half a lap, opposite side
        let old_spot = CENTER + Vec2::new(70.0, 0.0);
        let new_spot = CENTER - Vec2::new(70.0, 0.0);
        assert_eq!(hit_test(&bodies, old_spot, CENTER, t), None);
        assert_eq!(hit_test(&bodies, new_spot, CENTER, t), Some(Hit::Body(2)));
    }

    #[test]
    fn empty_scene_only_has_the_sun() {
        assert_eq!(hit_test(&[], CENTER, CENTER, 0.0), Some(Hit::Sun));
        let far = CENTER + Vec2::new(200.0, 0.0);
        assert_eq!(hit_test(&[], far, CENTER, 0.0), None);
    }
}
