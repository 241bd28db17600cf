/// 2D elliptical arc math utilities.
///
/// Arcs are described the way vector formats describe them: two endpoints,
/// the ellipse radii, the x-axis rotation and the `large_arc` / `sweep`
/// flags. `sweep = true` means the angle increases from start to end.
use std::f64::consts::{PI, TAU};

/// Center parameterization of an elliptical arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCenter {
    pub cx: f64,
    pub cy: f64,
    /// Radii after out-of-range correction.
    pub rx: f64,
    pub ry: f64,
    /// X-axis rotation in radians.
    pub phi: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

/// Converts an endpoint-parameterized arc to center form.
///
/// Radii too small to span the chord are scaled up uniformly, as vector
/// renderers do. Returns `None` for coincident endpoints or a zero radius
/// (the arc degenerates to nothing or to a straight line).
#[must_use]
#[allow(clippy::too_many_arguments, clippy::similar_names)]
pub fn arc_center_from_endpoints(
    x0: f64, y0: f64,
    x1: f64, y1: f64,
    rx: f64, ry: f64,
    phi: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<ArcCenter> {
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    if rx < 1e-12 || ry < 1e-12 {
        return None;
    }

    let (sin_phi, cos_phi) = phi.sin_cos();
    let dx2 = (x0 - x1) * 0.5;
    let dy2 = (y0 - y1) * 0.5;
    if dx2.abs() < 1e-12 && dy2.abs() < 1e-12 {
        return None;
    }

    // Endpoint in the ellipse's own frame.
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let num = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
    let den = rx2 * y1p * y1p + ry2 * x1p * x1p;
    let sign = if large_arc == sweep { -1.0 } else { 1.0 };
    let coef = sign * (num / den).max(0.0).sqrt();

    let cxp = coef * rx * y1p / ry;
    let cyp = -coef * ry * x1p / rx;

    let cx = cos_phi * cxp - sin_phi * cyp + (x0 + x1) * 0.5;
    let cy = sin_phi * cxp + cos_phi * cyp + (y0 + y1) * 0.5;

    let ux = (x1p - cxp) / rx;
    let uy = (y1p - cyp) / ry;
    let vx = (-x1p - cxp) / rx;
    let vy = (-y1p - cyp) / ry;

    let start_angle = vector_angle(1.0, 0.0, ux, uy);
    let mut delta = vector_angle(ux, uy, vx, vy) % TAU;
    if sweep && delta < 0.0 {
        delta += TAU;
    } else if !sweep && delta > 0.0 {
        delta -= TAU;
    }

    Some(ArcCenter {
        cx,
        cy,
        rx,
        ry,
        phi,
        start_angle,
        sweep: delta,
    })
}

/// Evaluates a point on a center-form arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn ellipse_point_at(arc: &ArcCenter, t: f64) -> (f64, f64) {
    let angle = arc.start_angle + arc.sweep * t;
    let (sin_phi, cos_phi) = arc.phi.sin_cos();
    let (sin_a, cos_a) = angle.sin_cos();
    (
        arc.cx + arc.rx * cos_phi * cos_a - arc.ry * sin_phi * sin_a,
        arc.cy + arc.rx * sin_phi * cos_a + arc.ry * cos_phi * sin_a,
    )
}

/// Computes the number of chords needed to approximate an arc of the given
/// radius and sweep within `tolerance`.
///
/// For an ellipse, pass the larger radius.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // sagitta = r * (1 - cos(θ/2))  =>  θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}

/// Signed angle from vector `u` to vector `v`.
fn vector_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    (ux * vy - uy * vx).atan2(ux * vx + uy * vy)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn half_ellipse_from_chord_endpoints() {
        // Crown-like bump: chord from (9,0) to (11,0), rx=1, ry=0.5.
        let arc = arc_center_from_endpoints(9.0, 0.0, 11.0, 0.0, 1.0, 0.5, 0.0, false, true)
            .unwrap();
        assert!((arc.cx - 10.0).abs() < TOL, "cx={}", arc.cx);
        assert!(arc.cy.abs() < TOL, "cy={}", arc.cy);
        assert!((arc.sweep - PI).abs() < TOL, "sweep={}", arc.sweep);

        let (sx, sy) = ellipse_point_at(&arc, 0.0);
        assert!((sx - 9.0).abs() < TOL && sy.abs() < TOL);
        let (ex, ey) = ellipse_point_at(&arc, 1.0);
        assert!((ex - 11.0).abs() < TOL && ey.abs() < TOL);

        // Increasing angle from π goes through negative y.
        let (mx, my) = ellipse_point_at(&arc, 0.5);
        assert!((mx - 10.0).abs() < TOL, "mx={mx}");
        assert!((my + 0.5).abs() < TOL, "my={my}");
    }

    #[test]
    fn negative_sweep_goes_the_other_way() {
        let arc = arc_center_from_endpoints(0.0, 0.0, 2.0, 0.0, 1.0, 1.0, 0.0, false, false)
            .unwrap();
        assert!((arc.sweep + PI).abs() < TOL, "sweep={}", arc.sweep);
        let (_, my) = ellipse_point_at(&arc, 0.5);
        assert!((my - 1.0).abs() < TOL, "my={my}");
    }

    #[test]
    fn undersized_radii_are_scaled_up() {
        let arc = arc_center_from_endpoints(0.0, 0.0, 4.0, 0.0, 1.0, 1.0, 0.0, false, true)
            .unwrap();
        assert!((arc.rx - 2.0).abs() < TOL, "rx={}", arc.rx);
        assert!((arc.ry - 2.0).abs() < TOL, "ry={}", arc.ry);
    }

    #[test]
    fn quarter_arc_small_sweep() {
        // From (1,0) to (0,1) on the unit circle, short way, increasing angle.
        let arc = arc_center_from_endpoints(1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, false, true)
            .unwrap();
        assert!(arc.cx.abs() < 1e-9 && arc.cy.abs() < 1e-9);
        assert!((arc.sweep - PI / 2.0).abs() < 1e-9, "sweep={}", arc.sweep);
    }

    #[test]
    fn coincident_endpoints_are_degenerate() {
        assert!(arc_center_from_endpoints(1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, false, true).is_none());
        assert!(arc_center_from_endpoints(0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, false, true).is_none());
    }

    #[test]
    fn subdivision_count_large_tolerance() {
        assert_eq!(arc_subdivision_count(1.0, PI, 10.0), 1);
    }

    #[test]
    fn subdivision_count_small_tolerance() {
        let n = arc_subdivision_count(1.0, PI, 0.001);
        assert!(n > 10, "expected many subdivisions, got {n}");
    }
}
