/// First partial derivatives of an ℝ³ vector.
///
/// The field `ij` stores `∂ⱼAⁱ` (contravariant) or `∂ⱼA_i` (covariant): the
/// first letter is the vector component, the second the differentiation
/// index. Unlike [`IR3`](crate::IR3), no vectorised arithmetic is provided,
/// only named-field access.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DIR3 {
    pub uu: f64,
    pub uv: f64,
    pub uw: f64,
    pub vu: f64,
    pub vv: f64,
    pub vw: f64,
    pub wu: f64,
    pub wv: f64,
    pub ww: f64,
}

impl DIR3 {
    pub const fn zeros() -> Self {
        Self {
            uu: 0.0, uv: 0.0, uw: 0.0,
            vu: 0.0, vv: 0.0, vw: 0.0,
            wu: 0.0, wv: 0.0, ww: 0.0,
        }
    }

    /// Determinant of the 3×3 matrix `∂ⱼAⁱ`.
    pub fn determinant(&self) -> f64 {
        self.uu * (self.vv * self.ww - self.vw * self.wv)
            + self.uv * (self.vw * self.wu - self.vu * self.ww)
            + self.uw * (self.vu * self.wv - self.vv * self.wu)
    }

    /// Matrix inverse by the adjugate rule.
    ///
    /// Singular input is not rejected: the division by a vanishing
    /// determinant floods the output with non-finite entries, which the
    /// caller may screen with [`IR3::is_finite`](crate::IR3::is_finite)-style
    /// checks where it matters.
    pub fn inverse(&self) -> DIR3 {
        let idet = 1.0 / self.determinant();
        DIR3 {
            uu: idet * (self.vv * self.ww - self.vw * self.wv),
            uv: idet * (self.uw * self.wv - self.uv * self.ww),
            uw: idet * (self.uv * self.vw - self.uw * self.vv),
            vu: idet * (self.vw * self.wu - self.vu * self.ww),
            vv: idet * (self.uu * self.ww - self.uw * self.wu),
            vw: idet * (self.uw * self.vu - self.uu * self.vw),
            wu: idet * (self.vu * self.wv - self.vv * self.wu),
            wv: idet * (self.uv * self.wu - self.uu * self.wv),
            ww: idet * (self.uu * self.vv - self.uv * self.vu),
        }
    }
}

/// Second partial derivatives of an ℝ³ vector, symmetric in the
/// differentiation indices.
///
/// The field `ijk` stores `∂ₖ∂ⱼAⁱ`; only the canonical `j ≤ k` entries are
/// kept, 6 per component.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DDIR3 {
    pub uuu: f64,
    pub uuv: f64,
    pub uuw: f64,
    pub uvv: f64,
    pub uvw: f64,
    pub uww: f64,
    pub vuu: f64,
    pub vuv: f64,
    pub vuw: f64,
    pub vvv: f64,
    pub vvw: f64,
    pub vww: f64,
    pub wuu: f64,
    pub wuv: f64,
    pub wuw: f64,
    pub wvv: f64,
    pub wvw: f64,
    pub www: f64,
}

impl DDIR3 {
    pub const fn zeros() -> Self {
        Self {
            uuu: 0.0, uuv: 0.0, uuw: 0.0, uvv: 0.0, uvw: 0.0, uww: 0.0,
            vuu: 0.0, vuv: 0.0, vuw: 0.0, vvv: 0.0, vvw: 0.0, vww: 0.0,
            wuu: 0.0, wuv: 0.0, wuw: 0.0, wvv: 0.0, wvw: 0.0, www: 0.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_determinant_identity() {
        let m = DIR3 { uu: 1.0, vv: 1.0, ww: 1.0, ..DIR3::zeros() };
        assert_relative_eq!(m.determinant(), 1.0);
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = DIR3 {
            uu: 2.0, uv: 1.0, uw: 0.0,
            vu: 1.0, vv: 3.0, vw: 1.0,
            wu: 0.5, wv: 0.0, ww: 4.0,
        };
        let im = m.inverse();

        // m · m⁻¹ must recover the identity.
        let id_uu = m.uu * im.uu + m.uv * im.vu + m.uw * im.wu;
        let id_uv = m.uu * im.uv + m.uv * im.vv + m.uw * im.wv;
        let id_vv = m.vu * im.uv + m.vv * im.vv + m.vw * im.wv;
        let id_wu = m.wu * im.uu + m.wv * im.vu + m.ww * im.wu;
        let id_ww = m.wu * im.uw + m.wv * im.vw + m.ww * im.ww;
        assert_relative_eq!(id_uu, 1.0, max_relative = 1e-14);
        assert_relative_eq!(id_uv, 0.0, epsilon = 1e-14);
        assert_relative_eq!(id_vv, 1.0, max_relative = 1e-14);
        assert_relative_eq!(id_wu, 0.0, epsilon = 1e-14);
        assert_relative_eq!(id_ww, 1.0, max_relative = 1e-14);
    }

    #[test]
    fn test_singular_inverse_is_non_finite() {
        let m = DIR3 { uu: 1.0, vv: 1.0, ..DIR3::zeros() }; // rank 2
        let im = m.inverse();
        assert!(!im.ww.is_finite());
    }
}
