//! System parameters of the TPS652510 buck converter.
//!
//! Values follow the datasheet "Loop Compensation" section. They are fixed
//! for a whole run and shared by every rail.

/// Input voltage [V]
pub const DEFAULT_V_IN: f64 = 15.0;

/// Main switching frequency [Hz]
pub const DEFAULT_F_SWITCH: f64 = 900e3;

/// Error amplifier transconductance [1/Ohm]
pub const DEFAULT_G_M: f64 = 130e-6;

/// COMP to inductor current transconductance [A/V]
pub const DEFAULT_GM_PS: f64 = 10.0;

/// Internal voltage reference [V]
pub const DEFAULT_V_REF: f64 = 0.8;

/// Equivalent series resistance of the output capacitors [Ohm]
pub const DEFAULT_R_ESR: f64 = 0.1;

/// Inductor ripple relative to max output current
pub const DEFAULT_K_IND: f64 = 0.2;

/// Ratio between switching and crossover frequency.
pub const CROSSOVER_DIVIDER: f64 = 10.0;

/// Converter-wide constants used by every rail calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParameters {
    /// Input voltage [V]
    pub v_in: f64,
    /// Switching frequency [Hz]
    pub f_switch: f64,
    /// Crossover frequency [Hz], `f_switch / 10`
    pub f_c: f64,
    /// Error amplifier transconductance [1/Ohm]
    pub g_m: f64,
    /// COMP to inductor current transconductance [A/V]
    pub gm_ps: f64,
    /// Internal reference voltage [V]. Not used by any formula.
    pub v_ref: f64,
    /// Output capacitor ESR [Ohm]
    pub r_esr: f64,
    /// Target inductor ripple ratio
    pub k_ind: f64,
}

impl SystemParameters {
    /// Create a parameter set, deriving the crossover frequency from the
    /// switching frequency.
    pub fn new(
        v_in: f64,
        f_switch: f64,
        g_m: f64,
        gm_ps: f64,
        v_ref: f64,
        r_esr: f64,
        k_ind: f64,
    ) -> Self {
        Self {
            v_in,
            f_switch,
            f_c: f_switch / CROSSOVER_DIVIDER,
            g_m,
            gm_ps,
            v_ref,
            r_esr,
            k_ind,
        }
    }

    /// The TPS652510 operating point.
    pub fn tps652510() -> Self {
        Self::new(
            DEFAULT_V_IN,
            DEFAULT_F_SWITCH,
            DEFAULT_G_M,
            DEFAULT_GM_PS,
            DEFAULT_V_REF,
            DEFAULT_R_ESR,
            DEFAULT_K_IND,
        )
    }

    /// Lowest roll-off pole frequency that still passes the stability check.
    pub fn min_rolloff_frequency(&self) -> f64 {
        2.0 * self.f_c
    }
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self::tps652510()
    }
}
