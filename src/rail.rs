//! Output rail descriptions.

use std::fmt;

use crate::error::{CompensationError, Result};
use crate::params::SystemParameters;

/// One output rail: nominal operating point plus optional part overrides.
///
/// Any override left as `None` is derived from the compensation formulas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RailSpec {
    /// Output voltage [V]
    pub v: f64,
    /// Output current [A]
    pub i: f64,
    /// Output capacitive load [F]
    pub c: f64,
    /// Load resistance override [Ohm]
    pub r: Option<f64>,
    /// Compensation resistor override [Ohm]
    pub rc: Option<f64>,
    /// Compensation capacitor override [F]
    pub cc: Option<f64>,
    /// Roll-off capacitor override [F]
    pub croll: Option<f64>,
    /// Inductor override [H]
    pub l: Option<f64>,
}

impl RailSpec {
    /// Create a rail with no overrides.
    pub fn new(v: f64, i: f64, c: f64) -> Self {
        Self {
            v,
            i,
            c,
            ..Default::default()
        }
    }

    pub fn with_r(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }

    pub fn with_rc(mut self, rc: f64) -> Self {
        self.rc = Some(rc);
        self
    }

    pub fn with_cc(mut self, cc: f64) -> Self {
        self.cc = Some(cc);
        self
    }

    pub fn with_croll(mut self, croll: f64) -> Self {
        self.croll = Some(croll);
        self
    }

    pub fn with_l(mut self, l: f64) -> Self {
        self.l = Some(l);
        self
    }

    /// Strict physical checks, used only when explicitly requested.
    ///
    /// Checks:
    /// - V, I, C and every present override are finite and positive
    /// - V is below the converter input voltage
    ///
    /// `index` is the 1-based position of the rail, used in the error.
    pub fn validate(&self, index: usize, params: &SystemParameters) -> Result<()> {
        let fields = [
            ("V", Some(self.v)),
            ("I", Some(self.i)),
            ("C", Some(self.c)),
            ("R", self.r),
            ("RC", self.rc),
            ("CC", self.cc),
            ("CROLL", self.croll),
            ("L", self.l),
        ];

        for (name, value) in fields {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(CompensationError::invalid_rail(
                        index,
                        name,
                        format!("must be finite and positive, got {}", value),
                    ));
                }
            }
        }

        if self.v >= params.v_in {
            return Err(CompensationError::invalid_rail(
                index,
                "V",
                format!("must be below v_in={}", params.v_in),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for RailSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V={} I={} C={}", self.v, self.i, self.c)?;
        let overrides = [
            ("R", self.r),
            ("RC", self.rc),
            ("CC", self.cc),
            ("CROLL", self.croll),
            ("L", self.l),
        ];
        for (name, value) in overrides {
            if let Some(value) = value {
                write!(f, " {}={}", name, value)?;
            }
        }
        Ok(())
    }
}

/// The TPS652510 board rails with picked part values.
pub fn default_rails() -> Vec<RailSpec> {
    vec![
        // 250mA average, 500mA max
        RailSpec::new(12.0, 300e-3, 14e-6)
            .with_rc(7500.0)
            .with_cc(100e-9)
            .with_croll(100e-12)
            .with_l(4.7e-6),
        RailSpec::new(3.3, 220e-3, 7e-6)
            .with_rc(3000.0)
            .with_cc(33e-9)
            .with_croll(220e-12)
            .with_l(4.7e-6),
        RailSpec::new(1.2, 555e-6, 1.1e-6)
            .with_rc(470.0)
            .with_cc(4.7e-6)
            .with_croll(220e-12)
            .with_l(220e-6),
    ]
}
