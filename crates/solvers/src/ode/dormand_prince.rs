use lotka_core::{Integrator, TimeGrid, VectorField};

use super::{Error, tableau};

/// Safety factor applied to every step-size update.
const SAFETY: f64 = 0.9;

/// Largest shrink applied after a rejected step.
const MIN_FACTOR: f64 = 0.2;

/// Largest growth applied after an accepted step.
const MAX_FACTOR: f64 = 5.0;

/// Controller exponent, 1 / (q + 1) with q = 4 for the embedded solution.
const EXPONENT: f64 = 0.2;

/// Below this step size the controller cannot make progress.
const H_FLOOR: f64 = 1e-12;

/// Mixed absolute/relative error tolerances for step control.
///
/// A step is accepted when, for every component,
/// `|error| <= abs + rel * |y|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    #[must_use]
    pub const fn new(abs: f64, rel: f64) -> Self {
        Self { abs, rel }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-8,
            rel: 1e-8,
        }
    }
}

/// Adaptive Dormand-Prince 5(4) integrator.
///
/// The stepper chooses its own internal step sizes but clamps the final step
/// of each grid window to land exactly on the window end, so the output is
/// sampled precisely on the grid it was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DormandPrince45 {
    tolerances: Tolerances,
    max_steps: usize,
}

impl DormandPrince45 {
    #[must_use]
    pub fn new(tolerances: Tolerances) -> Self {
        Self {
            tolerances,
            max_steps: 100_000,
        }
    }

    /// Sets the total step-attempt budget for one integration run.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Attempts a single step of size `h` from `(t, y)`.
    ///
    /// Returns the 5th-order solution and the normalized error estimate;
    /// the step should be accepted only when the estimate is at most one.
    #[allow(clippy::needless_range_loop)]
    fn attempt<const N: usize, F: VectorField<N>>(
        &self,
        field: &F,
        t: f64,
        y: [f64; N],
        h: f64,
    ) -> ([f64; N], f64) {
        let mut k = [[0.0; N]; tableau::STAGES];
        k[0] = field.derivative(t, y);

        for stage in 1..tableau::STAGES {
            let mut y_stage = [0.0; N];
            for n in 0..N {
                let mut acc = 0.0;
                for j in 0..stage {
                    acc += tableau::A[stage][j] * k[j][n];
                }
                y_stage[n] = y[n] + h * acc;
            }
            k[stage] = field.derivative(t + tableau::C[stage] * h, y_stage);
        }

        let mut y_next = [0.0; N];
        let mut err: f64 = 0.0;

        for n in 0..N {
            let mut solution = 0.0;
            let mut estimate = 0.0;
            for stage in 0..tableau::STAGES {
                solution += tableau::B[stage] * k[stage][n];
                estimate += tableau::E[stage] * k[stage][n];
            }
            y_next[n] = y[n] + h * solution;

            let scale =
                self.tolerances.abs + self.tolerances.rel * y[n].abs().max(y_next[n].abs());
            err = err.max((h * estimate / scale).abs());
        }

        (y_next, err)
    }
}

impl Default for DormandPrince45 {
    fn default() -> Self {
        Self::new(Tolerances::default())
    }
}

/// Step-size adjustment from a normalized error estimate.
fn step_factor(err: f64) -> f64 {
    if err == 0.0 {
        return MAX_FACTOR;
    }
    (SAFETY * err.powf(-EXPONENT)).clamp(MIN_FACTOR, MAX_FACTOR)
}

impl Integrator for DormandPrince45 {
    type Error = Error;

    fn integrate<const N: usize, F: VectorField<N>>(
        &self,
        field: &F,
        initial: [f64; N],
        grid: &TimeGrid,
    ) -> Result<Vec<[f64; N]>, Self::Error> {
        let mut points = Vec::with_capacity(grid.len());
        points.push(initial);

        let mut y = initial;
        let mut h = grid.step() / 4.0;
        let mut attempts = 0usize;

        for index in 1..grid.len() {
            let target = grid.at(index);
            let mut t = grid.at(index - 1);

            while t < target {
                attempts += 1;
                if attempts > self.max_steps {
                    return Err(Error::MaxStepsExceeded { t });
                }

                let remaining = target - t;
                let reaches_target = h >= remaining;
                let h_try = if reaches_target { remaining } else { h };

                let (y_next, err) = self.attempt(field, t, y, h_try);
                let accepted = err.is_finite() && err <= 1.0;

                if accepted {
                    t = if reaches_target { target } else { t + h_try };
                    if !y_next.iter().all(|v| v.is_finite()) {
                        return Err(Error::Diverged { t });
                    }
                    y = y_next;
                }

                let factor = if err.is_finite() {
                    step_factor(err)
                } else {
                    MIN_FACTOR
                };

                if !accepted {
                    let shrunk = h_try * factor;
                    if shrunk < H_FLOOR {
                        return Err(Error::StepSizeUnderflow { t });
                    }
                    h = shrunk;
                } else if !reaches_target || factor < 1.0 {
                    h = (h_try * factor).clamp(H_FLOOR, grid.span());
                }
                // An accepted step that was only clamped to the window end
                // keeps the cruising step size.
            }

            points.push(y);
        }

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use lotka_core::{LotkaVolterra, Parameters};

    use super::*;

    // --- Test fixtures ---

    /// y' = -rate * y, with the closed form y = y0 * exp(-rate * t).
    struct Decay {
        rate: f64,
    }

    impl VectorField<1> for Decay {
        fn derivative(&self, _t: f64, [y]: [f64; 1]) -> [f64; 1] {
            [-self.rate * y]
        }
    }

    /// Unit harmonic oscillator, period 2π.
    struct Oscillator;

    impl VectorField<2> for Oscillator {
        fn derivative(&self, _t: f64, [x, v]: [f64; 2]) -> [f64; 2] {
            [v, -x]
        }
    }

    /// A constant slope so steep the state overflows inside the span.
    struct Runaway;

    impl VectorField<1> for Runaway {
        fn derivative(&self, _t: f64, _y: [f64; 1]) -> [f64; 1] {
            [1.0e307]
        }
    }

    /// A field with no defined value anywhere.
    struct Undefined;

    impl VectorField<1> for Undefined {
        fn derivative(&self, _t: f64, _y: [f64; 1]) -> [f64; 1] {
            [f64::NAN]
        }
    }

    /// A bounded state whose derivative flips violently on every evaluation,
    /// so the error estimate never drops below tolerance at any step size.
    struct Flicker;

    impl VectorField<1> for Flicker {
        fn derivative(&self, t: f64, _y: [f64; 1]) -> [f64; 1] {
            [1.0e20 * (t * 1.0e20).sin()]
        }
    }

    // --- Tests ---

    #[test]
    fn matches_exponential_decay() {
        let solver = DormandPrince45::default();
        let grid = TimeGrid::new(0.0, 5.0, 11);

        let points = solver.integrate(&Decay { rate: 1.0 }, [1.0], &grid).unwrap();

        for (t, [y]) in grid.times().zip(points) {
            assert_relative_eq!(y, (-t).exp(), max_relative = 1e-4, epsilon = 1e-8);
        }
    }

    #[test]
    fn oscillator_returns_after_one_period() {
        let solver = DormandPrince45::default();
        let grid = TimeGrid::new(0.0, 2.0 * std::f64::consts::PI, 101);

        let points = solver.integrate(&Oscillator, [1.0, 0.0], &grid).unwrap();

        let [x, v] = points.last().copied().unwrap();
        assert_abs_diff_eq!(x, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(v, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn seed_is_reproduced_exactly() {
        let solver = DormandPrince45::default();
        let field = LotkaVolterra::new(Parameters::default());

        let points = solver
            .integrate(&field, [10.0, 5.0], &TimeGrid::default())
            .unwrap();

        assert_eq!(points[0], [10.0, 5.0]);
    }

    #[test]
    fn output_matches_grid_length() {
        let solver = DormandPrince45::default();
        let field = LotkaVolterra::new(Parameters::default());
        let grid = TimeGrid::default();

        let points = solver.integrate(&field, [10.0, 5.0], &grid).unwrap();

        assert_eq!(points.len(), grid.len());
    }

    #[test]
    fn integration_is_deterministic() {
        let solver = DormandPrince45::default();
        let field = LotkaVolterra::new(Parameters::default());
        let grid = TimeGrid::default();

        let first = solver.integrate(&field, [10.0, 5.0], &grid).unwrap();
        let second = solver.integrate(&field, [10.0, 5.0], &grid).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn step_budget_is_enforced() {
        let solver = DormandPrince45::default().with_max_steps(3);
        let field = LotkaVolterra::new(Parameters::default());

        let result = solver.integrate(&field, [10.0, 5.0], &TimeGrid::default());

        assert!(matches!(result, Err(Error::MaxStepsExceeded { .. })));
    }

    #[test]
    fn runaway_field_diverges() {
        let solver = DormandPrince45::default();
        let grid = TimeGrid::new(0.0, 100.0, 101);

        let result = solver.integrate(&Runaway, [0.0], &grid);

        assert!(matches!(result, Err(Error::Diverged { .. })));
    }

    #[test]
    fn undefined_field_diverges() {
        let solver = DormandPrince45::default();
        let grid = TimeGrid::new(0.0, 1.0, 11);

        let result = solver.integrate(&Undefined, [1.0], &grid);

        assert!(matches!(result, Err(Error::Diverged { .. })));
    }

    #[test]
    fn unresolvable_field_underflows_the_step() {
        let solver = DormandPrince45::default();
        let grid = TimeGrid::new(0.0, 1.0, 11);

        let result = solver.integrate(&Flicker, [0.0], &grid);

        assert!(matches!(result, Err(Error::StepSizeUnderflow { .. })));
    }

    #[test]
    fn rejected_first_guess_still_converges() {
        // A fast decay makes the opening step guess too optimistic; the
        // controller has to shrink before it can accept.
        let solver = DormandPrince45::default();
        let grid = TimeGrid::new(0.0, 1.0, 6);

        let points = solver
            .integrate(&Decay { rate: 50.0 }, [1.0], &grid)
            .unwrap();

        let [last] = points.last().copied().unwrap();
        assert_abs_diff_eq!(last, (-50.0_f64).exp(), epsilon = 1e-6);
    }
}
