use geometry::CovariantMetric;
use tensors::{DIR3, IR3};

use crate::field::{check_factors, same_metric};
use crate::{FieldError, IR3Field, IR3FieldC1, Result};

fn ratios(
    factors: impl Iterator<Item = (f64, f64)>,
    metric_checks: impl Iterator<Item = bool>,
    m_factor: f64,
    t_factor: f64,
) -> Result<(Vec<f64>, Vec<f64>)> {
    check_factors(m_factor, t_factor)?;
    let mut m_ratio = Vec::new();
    let mut t_ratio = Vec::new();
    for (index, ((m_i, t_i), shares)) in factors.zip(metric_checks).enumerate() {
        if !shares {
            return Err(FieldError::MismatchedMetrics { index });
        }
        m_ratio.push(m_i / m_factor);
        t_ratio.push(t_factor / t_i);
    }
    if m_ratio.is_empty() {
        return Err(FieldError::EmptyCombo);
    }
    Ok((m_ratio, t_ratio))
}

/// Linear combination of fields sharing one metric object.
///
/// The composite is itself a field with the caller-chosen `m_factor` and
/// `t_factor`; each member is rescaled by `m_factorᵢ/m_factor` and evaluated
/// at its own normalised time `(t_factor/t_factorᵢ)·t`, so the sum stays
/// self-consistent.
pub struct LinearCombo<'a> {
    fields: Vec<&'a dyn IR3Field>,
    m_ratio: Vec<f64>,
    t_ratio: Vec<f64>,
    m_factor: f64,
    t_factor: f64,
    metric: &'a dyn CovariantMetric,
}

impl<'a> LinearCombo<'a> {
    pub fn new(
        fields: Vec<&'a dyn IR3Field>,
        metric: &'a dyn CovariantMetric,
        m_factor: f64,
        t_factor: f64,
    ) -> Result<Self> {
        let (m_ratio, t_ratio) = ratios(
            fields.iter().map(|f| (f.m_factor(), f.t_factor())),
            fields.iter().map(|f| same_metric(f.metric(), metric)),
            m_factor,
            t_factor,
        )?;
        Ok(Self { fields, m_ratio, t_ratio, m_factor, t_factor, metric })
    }
}

impl IR3Field for LinearCombo<'_> {
    fn contravariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let mut acc = IR3::zeros();
        for (i, field) in self.fields.iter().enumerate() {
            acc += self.m_ratio[i] * field.contravariant(position, self.t_ratio[i] * time)?;
        }
        Ok(acc)
    }

    fn m_factor(&self) -> f64 {
        self.m_factor
    }

    fn t_factor(&self) -> f64 {
        self.t_factor
    }

    fn metric(&self) -> &dyn CovariantMetric {
        self.metric
    }
}

/// Linear combination of differentiable fields sharing one metric object.
pub struct LinearComboC1<'a> {
    fields: Vec<&'a dyn IR3FieldC1>,
    m_ratio: Vec<f64>,
    t_ratio: Vec<f64>,
    m_factor: f64,
    t_factor: f64,
    metric: &'a dyn CovariantMetric,
}

impl<'a> LinearComboC1<'a> {
    pub fn new(
        fields: Vec<&'a dyn IR3FieldC1>,
        metric: &'a dyn CovariantMetric,
        m_factor: f64,
        t_factor: f64,
    ) -> Result<Self> {
        let (m_ratio, t_ratio) = ratios(
            fields.iter().map(|f| (f.m_factor(), f.t_factor())),
            fields.iter().map(|f| same_metric(f.metric(), metric)),
            m_factor,
            t_factor,
        )?;
        Ok(Self { fields, m_ratio, t_ratio, m_factor, t_factor, metric })
    }
}

impl IR3Field for LinearComboC1<'_> {
    fn contravariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let mut acc = IR3::zeros();
        for (i, field) in self.fields.iter().enumerate() {
            acc += self.m_ratio[i] * field.contravariant(position, self.t_ratio[i] * time)?;
        }
        Ok(acc)
    }

    fn m_factor(&self) -> f64 {
        self.m_factor
    }

    fn t_factor(&self) -> f64 {
        self.t_factor
    }

    fn metric(&self) -> &dyn CovariantMetric {
        self.metric
    }
}

impl IR3FieldC1 for LinearComboC1<'_> {
    fn del_contravariant(&self, position: IR3, time: f64) -> Result<DIR3> {
        let mut acc = DIR3::zeros();
        for (i, field) in self.fields.iter().enumerate() {
            let del_i = field.del_contravariant(position, self.t_ratio[i] * time)?;
            let weight = self.m_ratio[i];
            acc.uu += weight * del_i.uu;
            acc.uv += weight * del_i.uv;
            acc.uw += weight * del_i.uw;
            acc.vu += weight * del_i.vu;
            acc.vv += weight * del_i.vv;
            acc.vw += weight * del_i.vw;
            acc.wu += weight * del_i.wu;
            acc.wv += weight * del_i.wv;
            acc.ww += weight * del_i.ww;
        }
        Ok(acc)
    }

    fn partial_t_contravariant(&self, position: IR3, time: f64) -> Result<IR3> {
        let mut acc = IR3::zeros();
        for (i, field) in self.fields.iter().enumerate() {
            acc += self.m_ratio[i]
                * self.t_ratio[i]
                * field.partial_t_contravariant(position, self.t_ratio[i] * time)?;
        }
        Ok(acc)
    }
}
