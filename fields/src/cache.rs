use std::cell::Cell;

use geometry::CovariantMetric;
use tensors::{DIR3, IR3};

use crate::{IR3Field, IR3FieldC1, Result};

macro_rules! memo_field {
    ($self:ident, $q:ident, $t:ident, $method:ident, $value_t:ty) => {{
        thread_local! {
            static LAST: Cell<Option<(usize, IR3, f64, $value_t)>> = const { Cell::new(None) };
        }
        let key = $self as *const Self as usize;
        LAST.with(|slot| {
            if let Some((k, q, t, value)) = slot.get()
                && k == key
                && q == $q
                && t == $t
            {
                return Ok(value);
            }
            let value = $self.inner.$method($q, $t)?;
            slot.set(Some((key, $q, $t, value)));
            Ok(value)
        })
    }};
}

/// Transparent depth-1 memoisation of a differentiable field.
///
/// A guiding-centre evaluation asks the field for its components, magnitude
/// and derivatives several times at the same `(q, t)`; this wrapper remembers
/// the last answer per query in thread-local storage and otherwise forwards
/// everything to the wrapped field.
pub struct FieldCacheC1<'a> {
    inner: &'a dyn IR3FieldC1,
}

impl<'a> FieldCacheC1<'a> {
    pub fn new(inner: &'a dyn IR3FieldC1) -> Self {
        Self { inner }
    }
}

impl IR3Field for FieldCacheC1<'_> {
    fn contravariant(&self, position: IR3, time: f64) -> Result<IR3> {
        memo_field!(self, position, time, contravariant, IR3)
    }

    fn covariant(&self, position: IR3, time: f64) -> Result<IR3> {
        memo_field!(self, position, time, covariant, IR3)
    }

    fn magnitude(&self, position: IR3, time: f64) -> Result<f64> {
        memo_field!(self, position, time, magnitude, f64)
    }

    fn covariant_versor(&self, position: IR3, time: f64) -> Result<IR3> {
        memo_field!(self, position, time, covariant_versor, IR3)
    }

    fn contravariant_versor(&self, position: IR3, time: f64) -> Result<IR3> {
        memo_field!(self, position, time, contravariant_versor, IR3)
    }

    fn m_factor(&self) -> f64 {
        self.inner.m_factor()
    }

    fn t_factor(&self) -> f64 {
        self.inner.t_factor()
    }

    fn metric(&self) -> &dyn CovariantMetric {
        self.inner.metric()
    }
}

impl IR3FieldC1 for FieldCacheC1<'_> {
    fn del_contravariant(&self, position: IR3, time: f64) -> Result<DIR3> {
        memo_field!(self, position, time, del_contravariant, DIR3)
    }

    fn partial_t_contravariant(&self, position: IR3, time: f64) -> Result<IR3> {
        memo_field!(self, position, time, partial_t_contravariant, IR3)
    }

    fn del_covariant(&self, position: IR3, time: f64) -> Result<DIR3> {
        memo_field!(self, position, time, del_covariant, DIR3)
    }

    fn curl(&self, position: IR3, time: f64) -> Result<IR3> {
        memo_field!(self, position, time, curl, IR3)
    }

    fn del_magnitude(&self, position: IR3, time: f64) -> Result<IR3> {
        memo_field!(self, position, time, del_magnitude, IR3)
    }

    fn partial_t_magnitude(&self, position: IR3, time: f64) -> Result<f64> {
        memo_field!(self, position, time, partial_t_magnitude, f64)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::EquilibriumCircular;
    use approx::assert_relative_eq;
    use geometry::MetricPolarTorus;

    #[test]
    fn test_cache_transparency() {
        let metric = MetricPolarTorus::new(0.3, 1.0).unwrap();
        let field = EquilibriumCircular::new(
            1.0,
            &metric,
            Box::new(|r| 1.0 + 2.0 * r * r),
            Box::new(|r| 4.0 * r),
        )
        .unwrap();
        let cached = FieldCacheC1::new(&field);

        let q = IR3::new(0.15, 0.4, 0.0);
        for _ in 0..3 {
            assert_relative_eq!(
                cached.magnitude(q, 0.0).unwrap(),
                field.magnitude(q, 0.0).unwrap(),
                max_relative = 1e-15
            );
            let direct = field.curl(q, 0.0).unwrap();
            let through = cached.curl(q, 0.0).unwrap();
            assert_relative_eq!(direct.w, through.w, max_relative = 1e-15);
        }

        let q2 = IR3::new(0.2, 0.4, 0.0);
        assert_relative_eq!(
            cached.magnitude(q2, 0.0).unwrap(),
            field.magnitude(q2, 0.0).unwrap(),
            max_relative = 1e-15
        );
    }
}
