use fields::{IR3Field, IR3FieldC1, Result};
use geometry::{CovariantMetric, MetricCartesian, MetricCylindrical};
use tensors::{DIR3, IR3};

/// Uniform magnetostatic field over a cartesian chart.
pub struct UniformCartesianField<'a> {
    metric: &'a MetricCartesian,
    b: IR3,
    m_factor: f64,
}

impl<'a> UniformCartesianField<'a> {
    pub fn new(metric: &'a MetricCartesian, b: IR3, m_factor: f64) -> Self {
        Self { metric, b, m_factor }
    }
}

impl IR3Field for UniformCartesianField<'_> {
    fn contravariant(&self, _position: IR3, _time: f64) -> Result<IR3> {
        Ok(self.b)
    }

    fn m_factor(&self) -> f64 {
        self.m_factor
    }

    fn t_factor(&self) -> f64 {
        1.0
    }

    fn metric(&self) -> &dyn CovariantMetric {
        self.metric
    }
}

impl IR3FieldC1 for UniformCartesianField<'_> {
    fn del_contravariant(&self, _position: IR3, _time: f64) -> Result<DIR3> {
        Ok(DIR3::zeros())
    }

    fn partial_t_contravariant(&self, _position: IR3, _time: f64) -> Result<IR3> {
        Ok(IR3::zeros())
    }
}

/// Uniform vertical magnetostatic field expressed in cylindrical
/// coordinates: the contravariant components `(0, 0, B_z)` are constant.
pub struct UniformCylindricalField<'a> {
    metric: &'a MetricCylindrical,
    bz: f64,
    m_factor: f64,
}

impl<'a> UniformCylindricalField<'a> {
    pub fn new(metric: &'a MetricCylindrical, bz: f64, m_factor: f64) -> Self {
        Self { metric, bz, m_factor }
    }
}

impl IR3Field for UniformCylindricalField<'_> {
    fn contravariant(&self, _position: IR3, _time: f64) -> Result<IR3> {
        Ok(IR3::new(0.0, 0.0, self.bz))
    }

    fn m_factor(&self) -> f64 {
        self.m_factor
    }

    fn t_factor(&self) -> f64 {
        1.0
    }

    fn metric(&self) -> &dyn CovariantMetric {
        self.metric
    }
}

impl IR3FieldC1 for UniformCylindricalField<'_> {
    fn del_contravariant(&self, _position: IR3, _time: f64) -> Result<DIR3> {
        Ok(DIR3::zeros())
    }

    fn partial_t_contravariant(&self, _position: IR3, _time: f64) -> Result<IR3> {
        Ok(IR3::zeros())
    }
}
