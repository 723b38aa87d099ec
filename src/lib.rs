//! Season Core - Monte Carlo simulation of a professional football league.
//!
//! Each season draws team strengths, builds a schedule, plays it out and runs
//! a reseeding seven-team playoff per conference into a neutral-site final.
//! Python bindings via PyO3 are available behind the `python` feature.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod constants;
pub mod error;
pub mod league;
pub mod params;
pub mod playoffs;
pub mod report;
pub mod roster;
pub mod schedule;
pub mod season;
pub mod team;
pub mod win_prob;

pub use constants::{
    DEFAULT_HOME_FIELD, DEFAULT_LUCK, DEFAULT_STRENGTH_SD, GAMES_PER_TEAM, PLAYOFF_SEEDS,
};
pub use error::{Result, SimError};
pub use league::{run, League, SeasonResult};
pub use params::Params;
pub use playoffs::{run_playoffs, ConferenceBracket, MatchResult, PlayoffBracket};
pub use report::{build_reports, championship_counts, to_json, SeasonReport};
pub use roster::default_roster;
pub use schedule::{generate_schedule, Game};
pub use season::Season;
pub use team::Team;
pub use win_prob::calculate_win_prob;

/// Home team's win probability.
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(signature = (home_strength, away_strength, hfa = DEFAULT_HOME_FIELD, luck = DEFAULT_LUCK))]
fn py_calculate_win_prob(
    home_strength: f64,
    away_strength: f64,
    hfa: f64,
    luck: f64,
) -> PyResult<f64> {
    if !luck.is_finite() || luck <= 0.0 {
        return Err(SimError::InvalidLuck(luck).into());
    }
    Ok(calculate_win_prob(home_strength, away_strength, hfa, luck))
}

/// The reference 32-team roster.
#[cfg(feature = "python")]
#[pyfunction]
fn py_default_roster() -> Vec<Team> {
    default_roster()
}

/// Serialize season results as pretty JSON.
#[cfg(feature = "python")]
#[pyfunction]
fn py_results_to_json(results: Vec<SeasonResult>) -> PyResult<String> {
    Ok(to_json(&results)?)
}

/// Titles per team, most first.
#[cfg(feature = "python")]
#[pyfunction]
fn py_championship_counts(results: Vec<SeasonResult>) -> Vec<(String, usize)> {
    championship_counts(&results)
}

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn season_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<Team>()?;
    m.add_class::<Params>()?;
    m.add_class::<League>()?;
    m.add_class::<SeasonResult>()?;
    m.add_class::<MatchResult>()?;
    m.add_class::<ConferenceBracket>()?;
    m.add_class::<PlayoffBracket>()?;

    // Functions
    m.add_function(wrap_pyfunction!(py_calculate_win_prob, m)?)?;
    m.add_function(wrap_pyfunction!(py_default_roster, m)?)?;
    m.add_function(wrap_pyfunction!(py_results_to_json, m)?)?;
    m.add_function(wrap_pyfunction!(py_championship_counts, m)?)?;

    // Constants
    m.add("GAMES_PER_TEAM", GAMES_PER_TEAM)?;
    m.add("PLAYOFF_SEEDS", PLAYOFF_SEEDS)?;
    m.add("DEFAULT_STRENGTH_SD", DEFAULT_STRENGTH_SD)?;
    m.add("DEFAULT_HOME_FIELD", DEFAULT_HOME_FIELD)?;
    m.add("DEFAULT_LUCK", DEFAULT_LUCK)?;

    Ok(())
}
