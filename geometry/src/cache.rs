use std::cell::Cell;

use tensors::{DDIR3, DIR3, DSM3, IR3, SM3};

use crate::{CovariantMetric, Morphism, Result};

macro_rules! memo_metric {
    ($self:ident, $q:ident, $method:ident, $value_t:ty) => {{
        thread_local! {
            static LAST: Cell<Option<(usize, IR3, $value_t)>> = const { Cell::new(None) };
        }
        let key = $self as *const Self as usize;
        LAST.with(|slot| {
            if let Some((k, q, value)) = slot.get()
                && k == key
                && q == $q
            {
                return Ok(value);
            }
            let value = $self.inner.$method($q)?;
            slot.set(Some((key, $q, value)));
            Ok(value)
        })
    }};
}

/// Transparent depth-1 memoisation of a covariant metric.
///
/// An ODE right-hand side asks the metric for `g`, its derivatives, the
/// jacobian and the Christoffel symbols several times at the same position
/// within one evaluation; this wrapper remembers the last answer per query in
/// thread-local storage. The wrapped metric stays untouched, so the cache is
/// strictly opt-in.
pub struct MetricCache<'a> {
    inner: &'a dyn CovariantMetric,
}

impl<'a> MetricCache<'a> {
    pub fn new(inner: &'a dyn CovariantMetric) -> Self {
        Self { inner }
    }
}

impl CovariantMetric for MetricCache<'_> {
    fn g(&self, q: IR3) -> Result<SM3> {
        memo_metric!(self, q, g, SM3)
    }

    fn del_g(&self, q: IR3) -> Result<DSM3> {
        memo_metric!(self, q, del_g, DSM3)
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        memo_metric!(self, q, jacobian, f64)
    }

    fn del_jacobian(&self, q: IR3) -> Result<IR3> {
        memo_metric!(self, q, del_jacobian, IR3)
    }

    fn g_inverse(&self, q: IR3) -> Result<SM3> {
        memo_metric!(self, q, g_inverse, SM3)
    }

    fn christoffel_first_kind(&self, q: IR3) -> Result<DDIR3> {
        memo_metric!(self, q, christoffel_first_kind, DDIR3)
    }

    fn christoffel_second_kind(&self, q: IR3) -> Result<DDIR3> {
        memo_metric!(self, q, christoffel_second_kind, DDIR3)
    }
}

macro_rules! memo_morphism {
    ($self:ident, $q:ident, $method:ident, $value_t:ty) => {{
        thread_local! {
            static LAST: Cell<Option<(usize, IR3, $value_t)>> = const { Cell::new(None) };
        }
        let key = $self as *const Self as usize;
        LAST.with(|slot| {
            if let Some((k, q, value)) = slot.get()
                && k == key
                && q == $q
            {
                return Ok(value);
            }
            let value = $self.inner.$method($q)?;
            slot.set(Some((key, $q, value)));
            Ok(value)
        })
    }};
}

/// Transparent depth-1 memoisation of a morphism's reproducible queries.
///
/// The forward map, derivative stacks and jacobian are remembered per
/// position; the inverse map and translations (the numerical root finds) pass
/// straight through, since their answers are never requested twice in a row.
pub struct MorphismCache<'a> {
    inner: &'a dyn Morphism,
}

impl<'a> MorphismCache<'a> {
    pub fn new(inner: &'a dyn Morphism) -> Self {
        Self { inner }
    }
}

impl Morphism for MorphismCache<'_> {
    fn point(&self, q: IR3) -> Result<IR3> {
        memo_morphism!(self, q, point, IR3)
    }

    fn inverse(&self, x: IR3) -> Result<IR3> {
        self.inner.inverse(x)
    }

    fn del(&self, q: IR3) -> Result<DIR3> {
        memo_morphism!(self, q, del, DIR3)
    }

    fn ddel(&self, q: IR3) -> Result<DDIR3> {
        memo_morphism!(self, q, ddel, DDIR3)
    }

    fn jacobian(&self, q: IR3) -> Result<f64> {
        memo_morphism!(self, q, jacobian, f64)
    }

    fn del_inverse(&self, q: IR3) -> Result<DIR3> {
        memo_morphism!(self, q, del_inverse, DIR3)
    }

    fn translation(&self, q: IR3, delta: IR3) -> Result<IR3> {
        self.inner.translation(q, delta)
    }
}
