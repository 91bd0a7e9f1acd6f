//! Inner/cross products and the index contractions used by the geometry and
//! dynamics layers.
//!
//! Every function documents the index pairing it sums over and the variance
//! it expects; variances are **not** checked at runtime. Pairings are
//! selected by function name, so a combination that is not enumerated here
//! cannot be expressed at all.

use crate::{DDIR3, DIR3, DSM3, IR3, SM3};

/// Inner product `A·B = A_i Bⁱ = Aⁱ B_i`; the two arguments must carry
/// opposite variance.
pub fn inner_product(a: IR3, b: IR3) -> f64 {
    a.u * b.u + a.v * b.v + a.w * b.w
}

/// Cartesian cross product, `(A×B)ᵏ = εᵏⁱʲ A_i B_j`.
///
/// Valid only under a cartesian interpretation of the components; for
/// curvilinear components use [`covariant_cross`] or [`contravariant_cross`].
pub fn cross_product(a: IR3, b: IR3) -> IR3 {
    IR3 {
        u: a.v * b.w - a.w * b.v,
        v: a.w * b.u - a.u * b.w,
        w: a.u * b.v - a.v * b.u,
    }
}

/// Covariant cross product `(A×B)_k = √g ε_kij Aⁱ Bʲ` of two contravariant
/// vectors.
pub fn covariant_cross(a: IR3, b: IR3, jacobian: f64) -> IR3 {
    cross_product(a, b) * jacobian
}

/// Contravariant cross product `(A×B)ᵏ = εᵏⁱʲ A_i B_j / √g` of two covariant
/// vectors.
pub fn contravariant_cross(a: IR3, b: IR3, jacobian: f64) -> IR3 {
    cross_product(a, b) / jacobian
}

/// Metric contraction `C_i = g_ij Bʲ` (or `Cⁱ = gⁱʲ B_j`).
pub fn contract(g: &SM3, b: IR3) -> IR3 {
    IR3 {
        u: g.uu * b.u + g.uv * b.v + g.uw * b.w,
        v: g.uv * b.u + g.vv * b.v + g.vw * b.w,
        w: g.uw * b.u + g.vw * b.v + g.ww * b.w,
    }
}

/// First-index contraction `C_i = Bⱼ ∂ᵢAʲ` of a derivative tensor with a
/// vector (the component index of `a` is summed).
pub fn contract_first(a: &DIR3, b: IR3) -> IR3 {
    IR3 {
        u: a.uu * b.u + a.vu * b.v + a.wu * b.w,
        v: a.uv * b.u + a.vv * b.v + a.wv * b.w,
        w: a.uw * b.u + a.vw * b.v + a.ww * b.w,
    }
}

/// Second-index contraction `Cⁱ = Bʲ ∂ⱼAⁱ` of a derivative tensor with a
/// vector (the differentiation index of `a` is summed).
pub fn contract_second(a: &DIR3, b: IR3) -> IR3 {
    IR3 {
        u: a.uu * b.u + a.uv * b.v + a.uw * b.w,
        v: a.vu * b.u + a.vv * b.v + a.vw * b.w,
        w: a.wu * b.u + a.wv * b.v + a.ww * b.w,
    }
}

// Canonical storage maps shared by the higher-rank contractions: PAIR lists
// the 6 independent (i ≤ j) index pairs, SYM maps an ordered pair back into
// that canonical slot.
const PAIR: [(usize, usize); 6] = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)];
const SYM: [[usize; 3]; 3] = [[0, 1, 2], [1, 3, 4], [2, 4, 5]];

fn dir3_rows(a: &DIR3) -> [[f64; 3]; 3] {
    [[a.uu, a.uv, a.uw], [a.vu, a.vv, a.vw], [a.wu, a.wv, a.ww]]
}

fn dir3_from_rows(r: [[f64; 3]; 3]) -> DIR3 {
    DIR3 {
        uu: r[0][0], uv: r[0][1], uw: r[0][2],
        vu: r[1][0], vv: r[1][1], vw: r[1][2],
        wu: r[2][0], wv: r[2][1], ww: r[2][2],
    }
}

fn sm3_mat(g: &SM3) -> [[f64; 3]; 3] {
    [[g.uu, g.uv, g.uw], [g.uv, g.vv, g.vw], [g.uw, g.vw, g.ww]]
}

fn ddir3_comps(a: &DDIR3) -> [[f64; 6]; 3] {
    [
        [a.uuu, a.uuv, a.uuw, a.uvv, a.uvw, a.uww],
        [a.vuu, a.vuv, a.vuw, a.vvv, a.vvw, a.vww],
        [a.wuu, a.wuv, a.wuw, a.wvv, a.wvw, a.www],
    ]
}

fn ddir3_from_comps(c: [[f64; 6]; 3]) -> DDIR3 {
    DDIR3 {
        uuu: c[0][0], uuv: c[0][1], uuw: c[0][2],
        uvv: c[0][3], uvw: c[0][4], uww: c[0][5],
        vuu: c[1][0], vuv: c[1][1], vuw: c[1][2],
        vvv: c[1][3], vvw: c[1][4], vww: c[1][5],
        wuu: c[2][0], wuv: c[2][1], wuw: c[2][2],
        wvv: c[2][3], wvw: c[2][4], www: c[2][5],
    }
}

// dSM3 viewed as three symmetric slices, one per differentiation index.
fn dsm3_slices(d: &DSM3) -> [[f64; 6]; 3] {
    [
        [d.uuu, d.uvu, d.uwu, d.vvu, d.vwu, d.wwu],
        [d.uuv, d.uvv, d.uwv, d.vvv, d.vwv, d.wwv],
        [d.uuw, d.uvw, d.uww, d.vvw, d.vww, d.www],
    ]
}

fn dsm3_from_slices(s: [[f64; 6]; 3]) -> DSM3 {
    DSM3 {
        uuu: s[0][0], uuv: s[1][0], uuw: s[2][0],
        uvu: s[0][1], uvv: s[1][1], uvw: s[2][1],
        uwu: s[0][2], uwv: s[1][2], uww: s[2][2],
        vvu: s[0][3], vvv: s[1][3], vvw: s[2][3],
        vwu: s[0][4], vwv: s[1][4], vww: s[2][4],
        wwu: s[0][5], wwv: s[1][5], www: s[2][5],
    }
}

/// First-index contraction `C_ij = Bᵏ ∂ⱼA_ki` of a symmetric-tensor
/// derivative with a vector. By the `i ↔ j` symmetry of `DSM3`, the
/// second-index contraction coincides with this one.
pub fn dsm3_contract_first(a: &DSM3, b: IR3) -> DIR3 {
    let s = dsm3_slices(a);
    let bb: [f64; 3] = b.into();
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            *entry = (0..3).map(|k| s[j][SYM[k][i]] * bb[k]).sum();
        }
    }
    dir3_from_rows(out)
}

/// Second-index contraction of a `DSM3` with a vector; delegates to
/// [`dsm3_contract_first`] through the first-pair symmetry.
pub fn dsm3_contract_second(a: &DSM3, b: IR3) -> DIR3 {
    dsm3_contract_first(a, b)
}

/// Third-index contraction `C_ij = Bᵏ ∂ₖA_ij` of a symmetric-tensor
/// derivative with a vector.
pub fn dsm3_contract_third(a: &DSM3, b: IR3) -> DIR3 {
    let s = dsm3_slices(a);
    let bb: [f64; 3] = b.into();
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            *entry = (0..3).map(|k| s[k][SYM[i][j]] * bb[k]).sum();
        }
    }
    dir3_from_rows(out)
}

/// First-index lowering `C_ij = g_ik ∂ⱼAᵏ` of a derivative tensor by a
/// metric.
pub fn lower_first(g: &SM3, a: &DIR3) -> DIR3 {
    let gm = sm3_mat(g);
    let ar = dir3_rows(a);
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            *entry = (0..3).map(|k| gm[i][k] * ar[k][j]).sum();
        }
    }
    dir3_from_rows(out)
}

/// Second-index contraction `Cⁱʲ = gⁱᵏ ∂ₖAʲ` of a derivative tensor by a
/// metric (both indices of `a` ending up free, the differentiation one
/// summed).
pub fn lower_second(g: &SM3, a: &DIR3) -> DIR3 {
    let gm = sm3_mat(g);
    let ar = dir3_rows(a);
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            *entry = (0..3).map(|k| gm[i][k] * ar[j][k]).sum();
        }
    }
    dir3_from_rows(out)
}

/// Component-on-component contraction `C_k,ij = ∂ₖAᵐ ∂ᵢ∂ⱼB_m`, summing the
/// component index of both tensors. This is the tangent-basis projection of a
/// second-derivative stack (e.g. `e_k · ∂²x/∂qⁱ∂qʲ`).
pub fn dd_contract_first(a: &DIR3, b: &DDIR3) -> DDIR3 {
    let ar = dir3_rows(a);
    let bc = ddir3_comps(b);
    let mut out = [[0.0; 6]; 3];
    for (k, comp) in out.iter_mut().enumerate() {
        for (p, entry) in comp.iter_mut().enumerate() {
            *entry = (0..3).map(|m| ar[m][k] * bc[m][p]).sum();
        }
    }
    ddir3_from_comps(out)
}

/// Row-on-component contraction `Cᵏ_ij = ∂ₘAᵏ ∂ᵢ∂ⱼBᵐ`, summing the
/// differentiation index of `a` against the component index of `b` (e.g.
/// `eᵏ · ∂²x/∂qⁱ∂qʲ`).
pub fn dd_contract_second(a: &DIR3, b: &DDIR3) -> DDIR3 {
    let ar = dir3_rows(a);
    let bc = ddir3_comps(b);
    let mut out = [[0.0; 6]; 3];
    for (k, comp) in out.iter_mut().enumerate() {
        for (p, entry) in comp.iter_mut().enumerate() {
            *entry = (0..3).map(|m| ar[k][m] * bc[m][p]).sum();
        }
    }
    ddir3_from_comps(out)
}

/// Index raising `Cᵏ_ij = gᵏᵐ B_m,ij` of the leading index of a
/// second-derivative stack.
pub fn raise_dd(g: &SM3, b: &DDIR3) -> DDIR3 {
    let gm = sm3_mat(g);
    let bc = ddir3_comps(b);
    let mut out = [[0.0; 6]; 3];
    for (k, comp) in out.iter_mut().enumerate() {
        for (p, entry) in comp.iter_mut().enumerate() {
            *entry = (0..3).map(|m| gm[k][m] * bc[m][p]).sum();
        }
    }
    ddir3_from_comps(out)
}

/// Double contraction `Cᵏ = Aᵏ_ij Bⁱ Cʲ` of a second-derivative stack with
/// two vectors (the quadratic form behind the inertial force).
pub fn quadratic(a: &DDIR3, b: IR3, c: IR3) -> IR3 {
    let ac = ddir3_comps(a);
    let bb: [f64; 3] = b.into();
    let cc: [f64; 3] = c.into();
    let mut out = [0.0; 3];
    for (k, entry) in out.iter_mut().enumerate() {
        *entry = PAIR
            .iter()
            .enumerate()
            .map(|(p, &(i, j))| {
                let cross = bb[i] * cc[j] + if i != j { bb[j] * cc[i] } else { 0.0 };
                ac[k][p] * cross
            })
            .sum();
    }
    IR3::new(out[0], out[1], out[2])
}

/// Congruence `C_ij,k = g_im ∂ₖDᵐⁿ h_nj`, one symmetric sandwich per
/// differentiation index. Used with `g = h = g⁻¹` when differentiating an
/// inverse metric; the result is stored symmetric, which requires `g` and `h`
/// to be the same tensor (as in that use) or the product to be symmetric.
pub fn congruence(g: &SM3, d: &DSM3, h: &SM3) -> DSM3 {
    let gm = sm3_mat(g);
    let hm = sm3_mat(h);
    let ds = dsm3_slices(d);
    let mut out = [[0.0; 6]; 3];
    for (k, slice) in out.iter_mut().enumerate() {
        for (p, entry) in slice.iter_mut().enumerate() {
            let (i, j) = PAIR[p];
            *entry = (0..3)
                .map(|m| {
                    (0..3).map(|n| gm[i][m] * ds[k][SYM[m][n]] * hm[n][j]).sum::<f64>()
                })
                .sum();
        }
    }
    dsm3_from_slices(out)
}
