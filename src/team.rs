#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::Serialize;

/// A franchise plus its season-scoped state.
///
/// `id`, `name` and `conference` never change. `strength`, `wins` and
/// `losses` are redrawn/zeroed at the start of every season.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Team {
    #[cfg_attr(feature = "python", pyo3(get))]
    pub id: u32,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub name: String,

    /// Conference label, e.g. "NFC"
    #[cfg_attr(feature = "python", pyo3(get))]
    pub conference: String,

    /// Latent strength for the current season (0.0 = league average)
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub strength: f64,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub wins: u32,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub losses: u32,
}

impl Team {
    /// Create a team with a blank season (zero strength, 0-0 record).
    pub fn new(id: u32, name: impl Into<String>, conference: impl Into<String>) -> Self {
        Team {
            id,
            name: name.into(),
            conference: conference.into(),
            strength: 0.0,
            wins: 0,
            losses: 0,
        }
    }

    /// Record formatted as "W-L"
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    /// Copy of this team with season state cleared and the given strength.
    pub fn fresh_season(&self, strength: f64) -> Self {
        Team {
            strength,
            wins: 0,
            losses: 0,
            ..self.clone()
        }
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Team {
    #[new]
    fn py_new(id: u32, name: String, conference: String) -> Self {
        Team::new(id, name, conference)
    }

    #[pyo3(name = "record")]
    fn py_record(&self) -> String {
        self.record()
    }

    /// Create a copy of this team
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        format!("{} ({}) {} | {:.3}", self.name, self.conference, self.record(), self.strength)
    }

    fn __repr__(&self) -> String {
        format!("Team({}, {:?}, {:?})", self.id, self.name, self.conference)
    }
}
