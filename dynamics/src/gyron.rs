use crate::Result;

/// A dynamical system with a well-defined right-hand side,
/// `dstate/dτ = gyron(state, τ)`.
///
/// This is the single seam between the dynamics layer and whichever ODE
/// driver the caller brings: the driver owns stepping, step control and
/// termination; the gyron only answers derivatives. Evaluation never mutates
/// the gyron, so one gyron may serve many concurrent trajectories.
pub trait Gyron: Send + Sync {
    type State: Clone + Send + Sync;

    /// Right-hand side at `state` and normalised time `time`.
    fn dot(&self, state: &Self::State, time: f64) -> Result<Self::State>;
}
