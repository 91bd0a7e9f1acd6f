use rayon::prelude::*;

use crate::{DynamicsError, Gyron, Result};

/// A homogeneous collection of gyrons evaluated as one collective
/// right-hand side.
///
/// The i-th output depends only on the i-th state and the i-th gyron, so the
/// fan-out runs under rayon's unordered parallel execution without any
/// shared mutable state.
pub struct Ensemble<G: Gyron> {
    gyrons: Vec<G>,
}

impl<G: Gyron> Ensemble<G> {
    pub fn new(gyrons: Vec<G>) -> Self {
        Self { gyrons }
    }

    pub fn size(&self) -> usize {
        self.gyrons.len()
    }

    pub fn gyrons(&self) -> &[G] {
        &self.gyrons
    }

    /// Collective right-hand side: one derivative per member, evaluated in
    /// parallel. The first member error aborts the evaluation.
    pub fn dot_all(&self, states: &[G::State], time: f64) -> Result<Vec<G::State>> {
        if states.len() != self.gyrons.len() {
            return Err(DynamicsError::EnsembleSizeMismatch {
                gyrons: self.gyrons.len(),
                states: states.len(),
            });
        }
        self.gyrons
            .par_iter()
            .zip(states.par_iter())
            .map(|(gyron, state)| gyron.dot(state, time))
            .collect()
    }
}

/// Wraps a gyron with a user predicate: when the predicate rejects a state
/// the right-hand side is replaced by a constant chosen at construction
/// (usually all-zero, freezing the trajectory). This is the mechanism by
/// which lost-particle detection stops advancing escaped orbits.
pub struct PredicatedGyron<G, P>
where
    G: Gyron,
    P: Fn(&G::State) -> bool + Send + Sync,
{
    gyron: G,
    predicate: P,
    rest_value: G::State,
}

impl<G, P> PredicatedGyron<G, P>
where
    G: Gyron,
    P: Fn(&G::State) -> bool + Send + Sync,
{
    pub fn new(gyron: G, predicate: P, rest_value: G::State) -> Self {
        Self { gyron, predicate, rest_value }
    }

    pub fn inner(&self) -> &G {
        &self.gyron
    }
}

impl<G, P> Gyron for PredicatedGyron<G, P>
where
    G: Gyron,
    P: Fn(&G::State) -> bool + Send + Sync,
{
    type State = G::State;

    fn dot(&self, state: &Self::State, time: f64) -> Result<Self::State> {
        if (self.predicate)(state) {
            self.gyron.dot(state, time)
        } else {
            Ok(self.rest_value.clone())
        }
    }
}
