use crate::State;

/// The ordered sequence of states produced by one integration run.
///
/// A trajectory always has exactly as many points as the [`TimeGrid`] it was
/// sampled on, and its first point is the seeding initial condition,
/// bit-for-bit. It is recomputed in full on every triggering input; there is
/// no incremental update.
///
/// [`TimeGrid`]: crate::TimeGrid
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<State>,
}

impl Trajectory {
    #[must_use]
    pub fn new(points: Vec<State>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[State] {
        &self.points
    }

    #[must_use]
    pub fn first(&self) -> Option<State> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<State> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.points.iter()
    }
}

impl From<Vec<[f64; 2]>> for Trajectory {
    fn from(points: Vec<[f64; 2]>) -> Self {
        Self::new(points.into_iter().map(State::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_points() {
        let trajectory = Trajectory::from(vec![[10.0, 5.0], [9.5, 5.5]]);
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.first(), Some(State::new(10.0, 5.0)));
        assert_eq!(trajectory.last(), Some(State::new(9.5, 5.5)));
    }

    #[test]
    fn empty_trajectory() {
        let trajectory = Trajectory::new(Vec::new());
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.first(), None);
    }
}
