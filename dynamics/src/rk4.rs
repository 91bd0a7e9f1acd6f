use crate::{Gyron, Result};

/// One classic fourth-order Runge–Kutta step of a [`Gyron`] over a
/// fixed-size state.
///
/// Backs the staggered half-back-step of the Boris steppers and serves as a
/// minimal driver in tests; production integration belongs to the caller's
/// ODE library.
pub fn rk4_step<G, const N: usize>(
    gyron: &G,
    state: &[f64; N],
    time: f64,
    dt: f64,
) -> Result<[f64; N]>
where
    G: Gyron<State = [f64; N]>,
{
    let advance = |base: &[f64; N], k: &[f64; N], factor: f64| {
        let mut out = *base;
        for i in 0..N {
            out[i] += factor * k[i];
        }
        out
    };

    let k1 = gyron.dot(state, time)?;
    let k2 = gyron.dot(&advance(state, &k1, 0.5 * dt), time + 0.5 * dt)?;
    let k3 = gyron.dot(&advance(state, &k2, 0.5 * dt), time + 0.5 * dt)?;
    let k4 = gyron.dot(&advance(state, &k3, dt), time + dt)?;

    let mut next = *state;
    for i in 0..N {
        next[i] += dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
    }
    Ok(next)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    /// Harmonic oscillator, the classic convergence check.
    struct Oscillator;

    impl Gyron for Oscillator {
        type State = [f64; 2];

        fn dot(&self, s: &[f64; 2], _time: f64) -> Result<[f64; 2]> {
            Ok([s[1], -s[0]])
        }
    }

    #[test]
    fn test_oscillator_period() {
        let gyron = Oscillator;
        let mut s = [1.0, 0.0];
        let steps = 1000;
        let dt = std::f64::consts::TAU / steps as f64;
        for n in 0..steps {
            s = rk4_step(&gyron, &s, n as f64 * dt, dt).unwrap();
        }
        assert_relative_eq!(s[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(s[1], 0.0, epsilon = 1e-9);
    }
}
