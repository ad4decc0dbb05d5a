//! Collinearity events between two moving points and a fixed pivot.
//!
//! The signed area of the triangle (q(t), r(t), v) is a polynomial in t of
//! degree at most two. Its non-negative roots are the only instants at
//! which the sight line between the moving points can sweep across the
//! pivot vertex, so they are the complete candidate set for visibility
//! transitions.

use super::Trajectory;
use crate::primitives::Point2;
use crate::tolerance;
use num_traits::Float;

/// Solves `A t^2 + B t + C = 0` for real roots with `t >= 0`.
///
/// When `|A|` falls below the tolerance the equation is treated as linear;
/// when `|B|` also does, nothing is emitted (the configuration is either
/// always or never collinear, and neither yields a discrete event). Roots
/// within the tolerance below zero are clamped to zero. The result is
/// sorted ascending with duplicates within the tolerance collapsed.
pub fn solve_quadratic_nonneg<F: Float>(a: F, b: F, c: F) -> Vec<F> {
    let e = tolerance::eps::<F>();
    let mut roots = Vec::new();

    if a.abs() < e {
        if b.abs() > e {
            let t = -c / b;
            if t > -e {
                roots.push(t.max(F::zero()));
            }
        }
        return roots;
    }

    let discriminant = b * b - F::from(4.0).unwrap() * a * c;
    if discriminant < -e {
        return roots;
    }

    // Tiny negative discriminants are tangency cases; clamp before sqrt.
    let sqrt_d = discriminant.max(F::zero()).sqrt();
    let two_a = F::from(2.0).unwrap() * a;
    let t1 = (-b - sqrt_d) / two_a;
    let t2 = (-b + sqrt_d) / two_a;

    if t1 > -e {
        roots.push(t1.max(F::zero()));
    }
    if t2 > -e {
        roots.push(t2.max(F::zero()));
    }

    roots.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
    roots.dedup_by(|x, y| (*x - *y).abs() < e);

    roots
}

/// Finds the times at which `q(t)`, `r(t)`, and the pivot are collinear.
///
/// Expands the cross product of `q(t) - v` and `r(t) - v` into quadratic
/// coefficients and hands them to [`solve_quadratic_nonneg`]. The quadratic
/// term vanishes exactly when the two velocities are parallel.
pub fn collinear_events<F: Float>(
    q: &Trajectory<F>,
    r: &Trajectory<F>,
    pivot: Point2<F>,
) -> Vec<F> {
    let u = q.velocity;
    let w = r.velocity;
    let dq = q.start - pivot;
    let dr = r.start - pivot;

    let a = u.cross(w);
    let b = (dq.x * w.y + u.x * dr.y) - (dq.y * w.x + u.y * dr.x);
    let c = dq.cross(dr);

    solve_quadratic_nonneg(a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Vec2;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_positive_roots_sorted() {
        // (t - 1)(t - 3) = t^2 - 4t + 3
        let roots = solve_quadratic_nonneg(1.0_f64, -4.0, 3.0);
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_roots_discarded() {
        // (t + 1)(t + 2)
        let roots = solve_quadratic_nonneg(1.0_f64, 3.0, 2.0);
        assert!(roots.is_empty());
    }

    #[test]
    fn test_mixed_roots_keep_nonnegative() {
        // (t + 2)(t - 5)
        let roots = solve_quadratic_nonneg(1.0_f64, -3.0, -10.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_double_root_deduplicated() {
        // (t - 2)^2
        let roots = solve_quadratic_nonneg(1.0_f64, -4.0, 4.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_root_just_below_zero_clamps() {
        // Root at -1e-12, inside tolerance.
        let roots = solve_quadratic_nonneg(0.0_f64, 1.0, 1e-12);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0], 0.0);
    }

    #[test]
    fn test_no_real_roots() {
        // t^2 + 1
        let roots = solve_quadratic_nonneg(1.0_f64, 0.0, 1.0);
        assert!(roots.is_empty());
    }

    #[test]
    fn test_fully_degenerate_emits_nothing() {
        let roots = solve_quadratic_nonneg(0.0_f64, 0.0, 0.0);
        assert!(roots.is_empty());
        let roots = solve_quadratic_nonneg(0.0_f64, 0.0, 7.0);
        assert!(roots.is_empty());
    }

    #[test]
    fn test_roots_satisfy_equation() {
        let cases: [(f64, f64, f64); 4] = [
            (2.0, -7.0, 3.0),
            (1.0, 0.0, -9.0),
            (-1.0, 4.0, 5.0),
            (0.0, 3.0, -12.0),
        ];
        for (a, b, c) in cases {
            let scale = a.abs().max(b.abs()).max(c.abs());
            for t in solve_quadratic_nonneg(a, b, c) {
                assert!(t >= 0.0);
                let residual = (a * t * t + b * t + c).abs();
                assert!(
                    residual <= 1e-6 * scale.max(1.0) * (1.0 + t * t),
                    "residual {residual} too large for ({a}, {b}, {c}) at t = {t}"
                );
            }
        }
    }

    #[test]
    fn test_parallel_velocities_linear_event() {
        // Both points translate right at the same speed; the pivot is
        // crossed by the connecting line at t = 2 exactly.
        let q = Trajectory::new(Point2::new(0.0_f64, 0.0), Vec2::new(1.0, 0.0));
        let r = Trajectory::new(Point2::new(0.0, 5.0), Vec2::new(1.0, 0.0));
        let events = collinear_events(&q, &r, Point2::new(2.0, 2.0));
        assert_eq!(events.len(), 1);
        assert_relative_eq!(events[0], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_descending_pair_hits_wall_corner() {
        // Both descend at unit speed; the pivot sits at the height they
        // reach at t = 4.
        let q = Trajectory::new(Point2::new(2.0_f64, 8.0), Vec2::new(0.0, -1.0));
        let r = Trajectory::new(Point2::new(8.0, 8.0), Vec2::new(0.0, -1.0));
        let events = collinear_events(&q, &r, Point2::new(4.0, 4.0));
        assert_eq!(events.len(), 1);
        assert_relative_eq!(events[0], 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_crossing_velocities_two_events() {
        // q moves right, r moves up; the sight line sweeps the pivot twice.
        let q = Trajectory::new(Point2::new(0.0_f64, 0.0), Vec2::new(1.0, 0.0));
        let r = Trajectory::new(Point2::new(4.0, -4.0), Vec2::new(0.0, 1.0));
        let pivot = Point2::new(2.0, 0.0);
        let events = collinear_events(&q, &r, pivot);
        for t in &events {
            let qp = q.position_at(*t);
            let rp = r.position_at(*t);
            let cross = crate::tolerance::cross_z(qp, rp, pivot);
            assert_relative_eq!(cross, 0.0, epsilon = 1e-6);
        }
        assert!(!events.is_empty());
    }
}
