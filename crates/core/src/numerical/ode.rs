//! Fixed-grid Runge-Kutta integration.
//!
//! The Ainslie model needs the centerline velocity integrated along the
//! downstream axis over a fixed, monotonic grid. Classical fourth-order
//! Runge-Kutta with uniform substeps per grid interval is accurate enough
//! for its smooth, slowly varying right-hand side while keeping the output
//! aligned with the requested grid.

/// Integrates `dy/dx = rhs(x, y)` from `y0` at `grid[0]`, returning the
/// solution at every grid point (including the first).
///
/// Each grid interval is advanced with `substeps` classical RK4 steps of
/// uniform size. The grid must be monotonically increasing; `substeps`
/// must be at least 1. Both are enforced by the caller's configuration
/// validation, not here.
pub fn integrate_rk4<F>(rhs: F, y0: f64, grid: &[f64], substeps: usize) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut solution = Vec::with_capacity(grid.len());
    if grid.is_empty() {
        return solution;
    }

    let mut y = y0;
    solution.push(y);

    for window in grid.windows(2) {
        let (start, end) = (window[0], window[1]);
        let h = (end - start) / substeps as f64;
        let mut x = start;
        for _ in 0..substeps {
            let k1 = rhs(x, y);
            let k2 = rhs(x + 0.5 * h, y + 0.5 * h * k1);
            let k3 = rhs(x + 0.5 * h, y + 0.5 * h * k2);
            let k4 = rhs(x + h, y + h * k3);
            y += h * (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0;
            x += h;
        }
        solution.push(y);
    }

    solution
}
