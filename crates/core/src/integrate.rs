use crate::{TimeGrid, VectorField};

/// A numerical integrator for initial-value problems sampled on a
/// [`TimeGrid`].
///
/// Implementations choose their own internal stepping but must report the
/// solution exactly at every grid time, so that:
///
/// - the returned sequence has exactly `grid.len()` entries, and
/// - the first entry reproduces `initial` bit-for-bit.
///
/// Integration is deterministic: identical inputs yield identical output, so
/// a failed call is not worth retrying without changed inputs.
pub trait Integrator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Integrates `field` from `initial` across every window of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the solver cannot produce a finite,
    /// converged state at some grid time. No partial trajectory is returned;
    /// the caller keeps whatever it rendered last.
    fn integrate<const N: usize, F: VectorField<N>>(
        &self,
        field: &F,
        initial: [f64; N],
        grid: &TimeGrid,
    ) -> Result<Vec<[f64; N]>, Self::Error>;
}
