//! Simulation errors

use thiserror::Error;

/// Result type for league simulation
pub type Result<T> = std::result::Result<T, SimError>;

/// Everything that can stop a run before (or while) seasons are simulated.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("roster is empty")]
    EmptyRoster,

    #[error("number of seasons must be at least 1")]
    NoSeasons,

    #[error("luck must be a finite value > 0, got {0}")]
    InvalidLuck(f64),

    #[error("strength standard deviation must be a finite value >= 0, got {0}")]
    InvalidStrengthSd(f64),

    #[error("home field advantage must be finite, got {0}")]
    InvalidHomeField(f64),

    #[error("roster must contain exactly two conferences, found {found}")]
    ConferenceCount { found: usize },

    #[error("conference {conference} has {teams} teams, at least 7 are needed for playoff seeding")]
    ConferenceTooSmall { conference: String, teams: usize },

    #[error("duplicate team id {0} in roster")]
    DuplicateTeamId(u32),

    #[error("failed to build strength distribution: {0}")]
    Distribution(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to serialize results: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SimError {
    /// True for errors caused by bad inputs rather than the environment.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            SimError::Distribution(_) | SimError::ThreadPool(_) | SimError::Serialization(_)
        )
    }
}

#[cfg(feature = "python")]
impl From<SimError> for pyo3::PyErr {
    fn from(err: SimError) -> Self {
        if err.is_configuration() {
            pyo3::exceptions::PyValueError::new_err(err.to_string())
        } else {
            pyo3::exceptions::PyRuntimeError::new_err(err.to_string())
        }
    }
}
