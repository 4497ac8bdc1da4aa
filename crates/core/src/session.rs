use crate::{Integrator, LotkaVolterra, Parameters, State, TimeGrid, Trajectory};

/// The latest value of every interactive input, gathered into one batch.
///
/// Inputs that change together within one interaction frame coalesce into a
/// single batch carrying the newest value of each control plus at most one
/// click, and the batch produces exactly one recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBatch {
    /// The current value of all four parameter controls.
    pub parameters: Parameters,
    /// A phase-space click from this frame, if any.
    pub click: Option<State>,
}

impl InputBatch {
    /// A batch carrying control values only.
    #[must_use]
    pub const fn controls(parameters: Parameters) -> Self {
        Self {
            parameters,
            click: None,
        }
    }

    /// Attaches a phase-space click to the batch.
    #[must_use]
    pub const fn with_click(mut self, click: State) -> Self {
        self.click = Some(click);
        self
    }
}

/// What one successful recomputation hands to the render layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPayload {
    pub trajectory: Trajectory,
    /// The seed the trajectory started from, for the highlighted marker.
    pub initial: State,
}

/// The interactive simulation session.
///
/// A session owns the current parameter values and the current initial
/// condition, plus the fixed sample grid. Each [`trigger`](Session::trigger)
/// resolves the effective seed for this cycle, integrates, and commits the
/// resolved inputs, so the next cycle continues from whatever was last
/// rendered successfully.
///
/// State lives for the life of the session; a fresh session starts over from
/// the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    parameters: Parameters,
    initial: State,
    grid: TimeGrid,
}

impl Session {
    /// The initial condition every session starts from.
    pub const DEFAULT_INITIAL: State = State::new(10.0, 5.0);

    #[must_use]
    pub fn new(grid: TimeGrid) -> Self {
        Self {
            parameters: Parameters::default(),
            initial: Self::DEFAULT_INITIAL,
            grid,
        }
    }

    /// The parameters of the last committed cycle.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        self.parameters
    }

    /// The stored initial condition.
    #[must_use]
    pub fn initial(&self) -> State {
        self.initial
    }

    #[must_use]
    pub fn grid(&self) -> TimeGrid {
        self.grid
    }

    /// Runs one recomputation cycle for an input batch.
    ///
    /// The effective seed is the batch's click when one is present (and
    /// finite), otherwise the stored initial condition: a click always
    /// overrides the store, while the batch's parameter values apply
    /// regardless. Clicks with non-finite coordinates are treated as absent.
    ///
    /// On success the resolved parameters and seed are committed and the new
    /// trajectory is returned. On failure the session is left exactly as it
    /// was, so the error stays local to this cycle.
    ///
    /// # Errors
    ///
    /// Propagates the integrator's error when it cannot produce a trajectory
    /// for the resolved inputs.
    pub fn trigger<I: Integrator>(
        &mut self,
        integrator: &I,
        batch: InputBatch,
    ) -> Result<RenderPayload, I::Error> {
        let parameters = batch.parameters.clamped();
        let initial = batch.click.filter(State::is_finite).unwrap_or(self.initial);

        let field = LotkaVolterra::new(parameters);
        let points = integrator.integrate(&field, initial.into(), &self.grid)?;

        self.parameters = parameters;
        self.initial = initial;

        Ok(RenderPayload {
            trajectory: Trajectory::from(points),
            initial,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TimeGrid::default())
    }
}
