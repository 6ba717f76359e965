//! Dense 3×3 solve backed by `faer`.
//!
//! The implicit collision response needs one `A v = b` solve per colliding
//! node per substep. The system is assembled from glam types, widened to
//! f64, factorized with partial-pivoting LU and narrowed back to f32.

use faer::Mat;
use faer::linalg::solvers::Solve;
use glam::{Mat3, Vec3};

/// Determinant magnitude below which the system is treated as singular.
const SINGULAR_DETERMINANT: f32 = 1.0e-12;

/// Solve `a * x = b` for a 3×3 system.
///
/// Returns `None` if the matrix is singular or the solution is not finite.
pub fn solve_3x3(a: &Mat3, b: Vec3) -> Option<Vec3> {
    let det = a.determinant();
    if !det.is_finite() || det.abs() < SINGULAR_DETERMINANT {
        return None;
    }

    // glam is column-major: a.col(j)[i] is row i, column j.
    let lhs: Mat<f64> = Mat::from_fn(3, 3, |i, j| a.col(j)[i] as f64);
    let rhs: Mat<f64> = Mat::from_fn(3, 1, |i, _| b[i] as f64);

    let lu = lhs.as_ref().partial_piv_lu();
    let sol = lu.solve(&rhs);

    let x = Vec3::new(sol[(0, 0)] as f32, sol[(1, 0)] as f32, sol[(2, 0)] as f32);
    x.is_finite().then_some(x)
}
