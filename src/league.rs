#[cfg(feature = "python")]
use pyo3::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::error::{Result, SimError};
use crate::params::Params;
use crate::playoffs::{run_playoffs, seed_conference, split_conferences, PlayoffBracket};
use crate::roster::default_roster;
use crate::season::Season;
use crate::team::Team;

/// Outcome of one simulated season.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeasonResult {
    #[cfg_attr(feature = "python", pyo3(get))]
    pub champion: Team,

    /// End-of-season snapshot of every team, in roster order
    #[cfg_attr(feature = "python", pyo3(get))]
    pub teams: Vec<Team>,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub bracket: PlayoffBracket,
}

/// Roster, model parameters and worker count for a batch of seasons.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug)]
pub struct League {
    /// Base roster; strengths and records here are ignored
    #[cfg_attr(feature = "python", pyo3(get))]
    pub teams: Vec<Team>,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub params: Params,

    /// Worker threads for `run`. 0 uses the global rayon pool.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub workers: usize,
}

impl Default for League {
    fn default() -> Self {
        League::new(default_roster(), Params::default())
    }
}

impl League {
    pub fn new(teams: Vec<Team>, params: Params) -> Self {
        League {
            teams,
            params,
            workers: 0,
        }
    }

    /// Use exactly `n` worker threads (0 = rayon default).
    pub fn with_workers(mut self, n: usize) -> Self {
        self.workers = n;
        self
    }

    /// Check the roster and parameters before anything is simulated.
    pub fn validate(&self) -> Result<()> {
        if self.teams.is_empty() {
            return Err(SimError::EmptyRoster);
        }
        self.params.validate()?;

        let mut ids = HashSet::with_capacity(self.teams.len());
        for team in &self.teams {
            if !ids.insert(team.id) {
                return Err(SimError::DuplicateTeamId(team.id));
            }
        }

        for (name, members) in split_conferences(&self.teams)? {
            seed_conference(&name, members)?;
        }
        Ok(())
    }

    /// Simulate one season on the given random stream.
    ///
    /// Draw order: strengths, schedule, regular-season games, then playoffs.
    pub fn simulate_season_with<R: Rng>(&self, rng: &mut R) -> Result<SeasonResult> {
        self.validate()?;
        self.play_season(rng)
    }

    /// Season body for an already validated league.
    fn play_season<R: Rng>(&self, rng: &mut R) -> Result<SeasonResult> {
        let mut season = Season::new(&self.teams, &self.params, rng)?;
        season.play(&self.params, rng);
        let (champion, bracket) = run_playoffs(&season.teams, &self.params, rng)?;

        Ok(SeasonResult {
            champion,
            teams: season.teams,
            bracket,
        })
    }

    /// Simulate one season from a seed (or entropy).
    pub fn simulate_season(&self, seed: Option<u64>) -> Result<SeasonResult> {
        let mut rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        self.simulate_season_with(&mut rng)
    }

    /// Simulate `n_seasons` independent seasons.
    ///
    /// A master stream hands each season its own seed up front, so for a
    /// fixed `seed` the results are identical whatever the worker count.
    pub fn run(&self, n_seasons: usize, seed: Option<u64>) -> Result<Vec<SeasonResult>> {
        if n_seasons == 0 {
            return Err(SimError::NoSeasons);
        }
        self.validate()?;

        let mut rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        let season_seeds: Vec<u64> = (0..n_seasons).map(|_| rng.gen::<u64>()).collect();

        info!(
            seasons = n_seasons,
            seed = ?seed,
            teams = self.teams.len(),
            workers = self.workers,
            "starting league run"
        );

        let simulate = || {
            season_seeds
                .par_iter()
                .enumerate()
                .map(|(i, &season_seed)| -> Result<SeasonResult> {
                    let mut season_rng = ChaCha8Rng::seed_from_u64(season_seed);
                    let result = self.play_season(&mut season_rng)?;
                    debug!(season = i + 1, champion = %result.champion.name, "season complete");
                    Ok(result)
                })
                .collect::<Result<Vec<_>>>()
        };

        let results = if self.workers == 0 {
            simulate()?
        } else {
            let pool = ThreadPoolBuilder::new().num_threads(self.workers).build()?;
            pool.install(simulate)?
        };

        info!(seasons = results.len(), "league run complete");
        Ok(results)
    }
}

/// Simulate `n_seasons` seasons for `teams` under `params`.
pub fn run(
    n_seasons: usize,
    teams: &[Team],
    params: &Params,
    seed: Option<u64>,
) -> Result<Vec<SeasonResult>> {
    League::new(teams.to_vec(), *params).run(n_seasons, seed)
}

#[cfg(feature = "python")]
#[pymethods]
impl League {
    #[new]
    #[pyo3(signature = (teams = None, params = None, workers = 0))]
    fn py_new(teams: Option<Vec<Team>>, params: Option<Params>, workers: usize) -> PyResult<Self> {
        let league = League::new(
            teams.unwrap_or_else(default_roster),
            params.unwrap_or_default(),
        )
        .with_workers(workers);
        league.validate()?;
        Ok(league)
    }

    /// Run multiple independent seasons.
    #[pyo3(name = "run", signature = (n_seasons, seed = None))]
    fn py_run(
        &self,
        py: Python<'_>,
        n_seasons: usize,
        seed: Option<u64>,
    ) -> PyResult<Vec<SeasonResult>> {
        Ok(py.allow_threads(|| self.run(n_seasons, seed))?)
    }

    /// Simulate a single season.
    #[pyo3(name = "simulate_season", signature = (seed = None))]
    fn py_simulate_season(&self, seed: Option<u64>) -> PyResult<SeasonResult> {
        Ok(self.simulate_season(seed)?)
    }

    fn __repr__(&self) -> String {
        format!("League({} teams, {:?})", self.teams.len(), self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_n_results() {
        let league = League::default();
        let results = league.run(25, Some(42)).unwrap();
        assert_eq!(results.len(), 25);

        for result in &results {
            assert_eq!(result.teams.len(), 32);
            assert!(result.teams.iter().any(|t| t.id == result.champion.id));
            assert_eq!(result.bracket.super_bowl.winner, result.champion.name);
        }
    }

    #[test]
    fn test_run_deterministic_for_seed() {
        let league = League::default();
        let a = league.run(10, Some(7)).unwrap();
        let b = league.run(10, Some(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_worker_count_does_not_change_results() {
        let parallel = League::default().run(12, Some(99)).unwrap();
        let single = League::default().with_workers(1).run(12, Some(99)).unwrap();
        assert_eq!(parallel, single);
    }

    #[test]
    fn test_seasons_are_independent() {
        let results = League::default().run(5, Some(3)).unwrap();
        assert_ne!(results[0].teams, results[1].teams);
    }

    #[test]
    fn test_zero_seasons_rejected() {
        assert!(matches!(League::default().run(0, Some(1)), Err(SimError::NoSeasons)));
    }

    #[test]
    fn test_empty_roster_rejected() {
        let league = League::new(Vec::new(), Params::default());
        assert!(matches!(league.run(1, Some(1)), Err(SimError::EmptyRoster)));
    }

    #[test]
    fn test_bad_luck_rejected_before_simulating() {
        let league = League::new(default_roster(), Params::new(0.9, 0.18, 0.0));
        assert!(matches!(league.run(3, Some(1)), Err(SimError::InvalidLuck(_))));
    }

    #[test]
    fn test_explicit_stream_still_validates() {
        let league = League::new(default_roster(), Params::new(0.9, 0.18, 0.0));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            league.simulate_season_with(&mut rng),
            Err(SimError::InvalidLuck(_))
        ));

        let league = League::new(default_roster(), Params::new(-0.5, 0.18, 1.0));
        assert!(matches!(
            league.simulate_season_with(&mut rng),
            Err(SimError::InvalidStrengthSd(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut teams = default_roster();
        teams[5].id = teams[4].id;
        let league = League::new(teams, Params::default());
        assert!(matches!(league.validate(), Err(SimError::DuplicateTeamId(5))));
    }

    #[test]
    fn test_small_conference_fails_whole_run() {
        let teams: Vec<Team> = default_roster()
            .into_iter()
            .filter(|t| t.conference == "NFC" || t.id <= 22)
            .collect();
        let result = run(10, &teams, &Params::default(), Some(1));
        assert!(matches!(result, Err(SimError::ConferenceTooSmall { teams: 6, .. })));
    }
}
