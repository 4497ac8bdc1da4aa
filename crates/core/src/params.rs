use crate::State;

/// The closed range and step size of one parameter control.
///
/// Controls at the presentation boundary carry these values, and
/// [`Parameters::clamped`] applies them once more at the session edge so the
/// simulation never sees an out-of-range rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ControlRange {
    /// Clamps a control value into this range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// The four Lotka-Volterra rate constants.
///
/// A value of this type is immutable for the duration of one integration run
/// and is replaced wholesale whenever any control changes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Prey growth rate.
    pub alpha: f64,
    /// Predation rate.
    pub beta: f64,
    /// Predator death rate.
    pub gamma: f64,
    /// Predator growth rate per unit of predation.
    pub delta: f64,
}

impl Parameters {
    /// Control range for `alpha`.
    pub const ALPHA: ControlRange = ControlRange {
        min: 0.1,
        max: 2.0,
        step: 0.1,
    };

    /// Control range for `beta`.
    pub const BETA: ControlRange = ControlRange {
        min: 0.01,
        max: 0.5,
        step: 0.01,
    };

    /// Control range for `gamma`.
    pub const GAMMA: ControlRange = ControlRange {
        min: 0.1,
        max: 2.0,
        step: 0.1,
    };

    /// Control range for `delta`.
    pub const DELTA: ControlRange = ControlRange {
        min: 0.01,
        max: 0.2,
        step: 0.01,
    };

    /// Returns these parameters with every rate clamped into its declared
    /// control range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            alpha: Self::ALPHA.clamp(self.alpha),
            beta: Self::BETA.clamp(self.beta),
            gamma: Self::GAMMA.clamp(self.gamma),
            delta: Self::DELTA.clamp(self.delta),
        }
    }

    /// Returns the nontrivial fixed point of the system,
    /// (gamma / delta, alpha / beta).
    ///
    /// Both derivatives vanish there, so a trajectory seeded at this point
    /// stays on it.
    #[must_use]
    pub fn equilibrium(&self) -> State {
        State::new(self.gamma / self.delta, self.alpha / self.beta)
    }
}

impl Default for Parameters {
    /// The session defaults: alpha 1.0, beta 0.1, gamma 1.5, delta 0.075.
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 0.1,
            gamma: 1.5,
            delta: 0.075,
        }
    }
}
