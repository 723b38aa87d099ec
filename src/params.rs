#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::Serialize;

use crate::constants::{DEFAULT_HOME_FIELD, DEFAULT_LUCK, DEFAULT_STRENGTH_SD};
use crate::error::{Result, SimError};

/// Model knobs shared read-only by every season of a run.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Params {
    /// Standard deviation of the per-season strength draw
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub strength_sd: f64,

    /// Strength bonus for the home team (ignored in the final)
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub home_field: f64,

    /// Logistic scale; larger values flatten win probabilities toward 0.5
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub luck: f64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            strength_sd: DEFAULT_STRENGTH_SD,
            home_field: DEFAULT_HOME_FIELD,
            luck: DEFAULT_LUCK,
        }
    }
}

impl Params {
    pub fn new(strength_sd: f64, home_field: f64, luck: f64) -> Self {
        Params {
            strength_sd,
            home_field,
            luck,
        }
    }

    /// Reject values the probability model cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.strength_sd.is_finite() || self.strength_sd < 0.0 {
            return Err(SimError::InvalidStrengthSd(self.strength_sd));
        }
        if !self.home_field.is_finite() {
            return Err(SimError::InvalidHomeField(self.home_field));
        }
        if !self.luck.is_finite() || self.luck <= 0.0 {
            return Err(SimError::InvalidLuck(self.luck));
        }
        Ok(())
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Params {
    #[new]
    #[pyo3(signature = (
        strength_sd = DEFAULT_STRENGTH_SD,
        home_field = DEFAULT_HOME_FIELD,
        luck = DEFAULT_LUCK
    ))]
    fn py_new(strength_sd: f64, home_field: f64, luck: f64) -> PyResult<Self> {
        let params = Params::new(strength_sd, home_field, luck);
        params.validate()?;
        Ok(params)
    }

    fn __repr__(&self) -> String {
        format!(
            "Params(strength_sd={}, home_field={}, luck={})",
            self.strength_sd, self.home_field, self.luck
        )
    }
}
