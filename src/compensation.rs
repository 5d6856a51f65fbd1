//! Type III compensation network and output inductor sizing.
//!
//! Each rail is resolved in a fixed order. Every value uses the rail's
//! override when present and otherwise the formula below, fed with the
//! values already resolved upstream:
//!
//! ```text
//! R      = V / I
//! RC     = 2*pi*f_c*C / (g_m * gm_ps)
//! CC     = R * C / RC
//! CROLL  = r_esr * C / RC
//! FPROLL = 1 / (2*pi*RC*CROLL)
//! L      = (v_in - V) * V / (I * k_ind * v_in * f_switch)
//! RIPPLE = (v_in - V) * V / (L * v_in * f_switch)
//! CMIN   = I^2 * L / (V * RIPPLE)
//! ```
//!
//! Nothing here guards against degenerate input. A zero current or a rail
//! at the input voltage yields `inf`/`NaN` in the result, never a panic.

use std::f64::consts::PI;

use crate::params::SystemParameters;
use crate::rail::RailSpec;

/// Resolved component values for one rail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailResult {
    /// Effective load resistance [Ohm]
    pub r: f64,
    /// Compensation resistor [Ohm]
    pub rc: f64,
    /// Compensation capacitor [F]
    pub cc: f64,
    /// Roll-off capacitor [F]
    pub croll: f64,
    /// Roll-off pole frequency [Hz]
    pub fp_roll: f64,
    /// Output inductor [H]
    pub l: f64,
    /// Inductor peak-to-peak ripple current [A]
    pub ripple: f64,
    /// Minimum output capacitance [F]
    pub c_min: f64,
    /// Roll-off pole is at least twice the crossover frequency
    pub stability_ok: bool,
}

/// Effective resistance of the load.
pub fn load_resistance(v: f64, i: f64) -> f64 {
    v / i
}

/// Compensation resistor placing the RC/CC zero at the crossover frequency.
///
/// Depends only on the output capacitance and the two transconductances;
/// the load resistance does not enter.
pub fn compensation_resistor(c: f64, params: &SystemParameters) -> f64 {
    2.0 * PI * params.f_c * c / (params.g_m * params.gm_ps)
}

/// Compensation capacitor cancelling the output capacitor pole.
pub fn compensation_capacitor(r: f64, c: f64, rc: f64) -> f64 {
    r * c / rc
}

/// Roll-off capacitor cancelling the ESR zero.
pub fn rolloff_capacitor(c: f64, rc: f64, params: &SystemParameters) -> f64 {
    params.r_esr * c / rc
}

/// Frequency of the pole formed by RC and CROLL.
pub fn rolloff_pole(rc: f64, croll: f64) -> f64 {
    1.0 / (2.0 * PI * rc * croll)
}

/// Inductor giving a ripple of `k_ind * i` at the switching frequency.
pub fn inductor_for_ripple(v: f64, i: f64, params: &SystemParameters) -> f64 {
    (params.v_in - v) * v / (i * params.k_ind * params.v_in * params.f_switch)
}

/// Peak-to-peak inductor ripple current for a given inductor.
pub fn inductor_ripple(v: f64, l: f64, params: &SystemParameters) -> f64 {
    (params.v_in - v) * v / (l * params.v_in * params.f_switch)
}

/// Minimum output capacitance implied by the ripple.
pub fn minimum_capacitance(v: f64, i: f64, l: f64, ripple: f64) -> f64 {
    i * i * l / (v * ripple)
}

/// Resolve every component of one rail.
pub fn compute_rail(spec: &RailSpec, params: &SystemParameters) -> RailResult {
    let r = spec.r.unwrap_or_else(|| load_resistance(spec.v, spec.i));
    let rc = spec
        .rc
        .unwrap_or_else(|| compensation_resistor(spec.c, params));
    let cc = spec
        .cc
        .unwrap_or_else(|| compensation_capacitor(r, spec.c, rc));
    let croll = spec
        .croll
        .unwrap_or_else(|| rolloff_capacitor(spec.c, rc, params));

    // Always from the resolved values, overridden or not
    let fp_roll = rolloff_pole(rc, croll);

    let l = spec
        .l
        .unwrap_or_else(|| inductor_for_ripple(spec.v, spec.i, params));
    let ripple = inductor_ripple(spec.v, l, params);
    let c_min = minimum_capacitance(spec.v, spec.i, l, ripple);

    let stability_ok = fp_roll >= params.min_rolloff_frequency();

    tracing::debug!(
        v = spec.v,
        r,
        rc,
        cc,
        croll,
        fp_roll,
        l,
        ripple,
        c_min,
        stability_ok,
        "rail resolved"
    );

    RailResult {
        r,
        rc,
        cc,
        croll,
        fp_roll,
        l,
        ripple,
        c_min,
        stability_ok,
    }
}
