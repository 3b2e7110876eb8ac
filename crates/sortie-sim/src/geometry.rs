//! Shared 2D geometry helpers built on glam.

use glam::DVec2;

use sortie_core::types::Position;

/// Circle-vs-circle contact (touching counts).
pub fn circles_overlap(a: &Position, radius_a: f64, b: &Position, radius_b: f64) -> bool {
    let reach = radius_a + radius_b;
    a.to_vec().distance_squared(b.to_vec()) <= reach * reach
}

/// Shortest distance from `point` to the segment `start..end`.
pub fn segment_distance(point: &Position, start: &Position, end: &Position) -> f64 {
    let p = point.to_vec();
    let a = start.to_vec();
    let ab = end.to_vec() - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-12 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Bearing of `point` seen from `center` in degrees: 0 straight up,
/// clockwise positive, range (-180, 180].
pub fn bearing_deg(center: &Position, point: &Position) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx.atan2(-dy).to_degrees()
}

/// Whether a bearing lies inside the arc `start_deg..=end_deg`.
pub fn bearing_in_arc(bearing: f64, start_deg: f64, end_deg: f64) -> bool {
    if end_deg - start_deg >= 360.0 {
        return true;
    }
    (start_deg..=end_deg).contains(&bearing)
}

/// Point at `radius` from `center` along `angle` (radians, screen axes).
pub fn polar_offset(center: &Position, angle: f64, radius: f64) -> Position {
    Position::from_vec(center.to_vec() + DVec2::from_angle(angle) * radius)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}
