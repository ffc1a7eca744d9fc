use glam::Vec2;

use crate::data::Body;

/// Orbital radius in pixels for a body id. Id 1 sits at 25px from the
/// center and each subsequent ring is 45px further out.
pub fn orbit_radius(id: u32) -> f32 {
    id as f32 * 45.0 - 20.0
}

/// Orbital period in simulation time units. Outer bodies take
/// proportionally longer: id 1 completes a lap in 2 units, id 8 in 16.
pub fn orbit_period(id: u32) -> f64 {
    id as f64 * 2.0
}

/// Phase angle in radians at simulation time `t`. Grows without bound;
/// callers feed it straight into cos/sin so no wrapping is needed.
pub fn angle_at(id: u32, t: f64) -> f64 {
    t / orbit_period(id) * std::f64::consts::TAU
}

/// Canvas position of a body at simulation time `t`, orbiting `center`.
pub fn position_at(id: u32, t: f64, center: Vec2) -> Vec2 {
    let angle = angle_at(id, t);
    let r = orbit_radius(id);
    Vec2::new(
        center.x + angle.cos() as f32 * r,
        center.y + angle.sin() as f32 * r,
    )
}

/// Disc radius used when drawing and hit-testing a body. Gas giants get
/// a larger disc; everything else shares the small one.
pub fn render_radius(body: &Body) -> f32 {
    if body.category.to_ascii_lowercase().contains("gas") {
        10.0
    } else {
        6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_with_category(category: &str) -> Body {
        Body {
            id: 1,
            name: "Test".into(),
            category: category.into(),
            ..Body::default()
        }
    }

    #[test]
    fn radius_grows_linearly_with_id() {
        assert_eq!(orbit_radius(1), 25.0);
        assert_eq!(orbit_radius(2), 70.0);
        assert_eq!(orbit_radius(8), 340.0);
        for id in 1..8 {
            assert_eq!(orbit_radius(id + 1) - orbit_radius(id), 45.0);
        }
    }

    #[test]
    fn inner_bodies_orbit_faster() {
        for id in 1..8 {
            assert!(orbit_period(id) < orbit_period(id + 1));
        }
    }

    #[test]
    fn time_zero_places_body_on_positive_x_axis() {
        let center = Vec2::new(400.0, 300.0);
        let pos = position_at(1, 0.0, center);
        assert!((pos.x - 425.0).abs() < 1e-4);
        assert!((pos.y - 300.0).abs() < 1e-4);
    }

    #[test]
    fn full_period_returns_to_start() {
        let center = Vec2::new(200.0, 200.0);
        let start = position_at(3, 0.0, center);
        let lap = position_at(3, orbit_period(3), center);
        assert!(start.distance(lap) < 1e-3);
    }

    #[test]
    fn quarter_period_is_a_quarter_turn() {
        let center = Vec2::ZERO;
        let pos = position_at(2, orbit_period(2) / 4.0, center);
        // cos(pi/2) = 0, sin(pi/2) = 1
        assert!(pos.x.abs() < 1e-3);
        assert!((pos.y - orbit_radius(2)).abs() < 1e-3);
    }

    #[test]
    fn body_stays_on_its_ring() {
        let center = Vec2::new(123.0, 456.0);
        for step in 0..16 {
            let t = step as f64 * 0.37;
            let pos = position_at(5, t, center);
            assert!((pos.distance(center) - orbit_radius(5)).abs() < 1e-2);
        }
    }

    #[test]
    fn gas_giants_render_larger() {
        assert_eq!(render_radius(&body_with_category("Gas Giant")), 10.0);
        assert_eq!(render_radius(&body_with_category("Terrestrial")), 6.0);
        assert_eq!(render_radius(&body_with_category("Ice Giant")), 6.0);
    }
}
