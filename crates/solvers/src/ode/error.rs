/// Errors that can occur during adaptive integration.
///
/// All variants carry the time at which progress stopped. A failure is local
/// to the run that produced it: the inputs are unchanged, so retrying without
/// changing them reproduces the same failure.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// Error control kept rejecting steps until the step size reached its
    /// floor, so the solver cannot make progress.
    #[error("step size underflow at t = {t}")]
    StepSizeUnderflow { t: f64 },

    /// The step budget ran out before the end of the grid.
    #[error("step budget exhausted at t = {t}")]
    MaxStepsExceeded { t: f64 },

    /// An accepted state stopped being finite.
    #[error("state diverged to a non-finite value at t = {t}")]
    Diverged { t: f64 },
}
