//! Playoff bracket: seeding, wildcard round, reseeded divisional round,
//! conference championships and a neutral-site final.

#[cfg(feature = "python")]
use pyo3::prelude::*;
use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::trace;

use crate::constants::{BYE_SEED, PLAYOFF_SEEDS, WILDCARD_PAIRINGS};
use crate::error::{Result, SimError};
use crate::params::Params;
use crate::team::Team;
use crate::win_prob::{calculate_win_prob, resolve_game};

/// A single resolved playoff game.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult {
    #[cfg_attr(feature = "python", pyo3(get))]
    pub home: String,
    #[cfg_attr(feature = "python", pyo3(get))]
    pub home_seed: u8,
    #[cfg_attr(feature = "python", pyo3(get))]
    pub away: String,
    #[cfg_attr(feature = "python", pyo3(get))]
    pub away_seed: u8,
    #[cfg_attr(feature = "python", pyo3(get))]
    pub winner: String,
    #[cfg_attr(feature = "python", pyo3(get))]
    pub winner_seed: u8,
}

/// One conference's side of the bracket.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConferenceBracket {
    /// Conference label
    #[cfg_attr(feature = "python", pyo3(get))]
    pub name: String,

    /// Name of the 1 seed
    #[cfg_attr(feature = "python", pyo3(get))]
    pub bye: String,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub wildcard: Vec<MatchResult>,

    /// Seed 1's game first, then the other pairing
    #[cfg_attr(feature = "python", pyo3(get))]
    pub divisional: Vec<MatchResult>,

    #[cfg_attr(feature = "python", pyo3(get))]
    #[serde(rename = "conference")]
    pub championship: MatchResult,
}

/// The full postseason.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayoffBracket {
    /// Both conferences, in the order they were played
    #[cfg_attr(feature = "python", pyo3(get))]
    pub conferences: Vec<ConferenceBracket>,

    #[cfg_attr(feature = "python", pyo3(get))]
    #[serde(rename = "superbowl")]
    pub super_bowl: MatchResult,
}

/// A team carrying its playoff seed.
#[derive(Clone, Copy, Debug)]
pub struct Seeded<'a> {
    pub seed: u8,
    pub team: &'a Team,
}

/// Seed number -> team for one conference.
pub type SeedMap<'a> = BTreeMap<u8, &'a Team>;

/// Regular-season standings order: wins desc, strength desc, then id asc.
pub fn standings_order(a: &Team, b: &Team) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| b.strength.total_cmp(&a.strength))
        .then_with(|| a.id.cmp(&b.id))
}

/// Split teams by conference label, in order of first appearance.
pub fn split_conferences(teams: &[Team]) -> Result<Vec<(String, Vec<&Team>)>> {
    let mut conferences: Vec<(String, Vec<&Team>)> = Vec::new();
    for team in teams {
        match conferences.iter_mut().find(|(name, _)| *name == team.conference) {
            Some((_, members)) => members.push(team),
            None => conferences.push((team.conference.clone(), vec![team])),
        }
    }

    if conferences.len() != 2 {
        return Err(SimError::ConferenceCount {
            found: conferences.len(),
        });
    }
    Ok(conferences)
}

/// Rank a conference and hand out seeds 1 through 7.
pub fn seed_conference<'a>(name: &str, mut teams: Vec<&'a Team>) -> Result<SeedMap<'a>> {
    if teams.len() < PLAYOFF_SEEDS {
        return Err(SimError::ConferenceTooSmall {
            conference: name.to_string(),
            teams: teams.len(),
        });
    }

    teams.sort_by(|a, b| standings_order(a, b));

    Ok(teams
        .into_iter()
        .take(PLAYOFF_SEEDS)
        .enumerate()
        .map(|(i, team)| (i as u8 + 1, team))
        .collect())
}

/// Play one game, lower seed at home unless the caller says otherwise.
fn play_match<'a, R: Rng>(
    home: Seeded<'a>,
    away: Seeded<'a>,
    hfa: f64,
    luck: f64,
    rng: &mut R,
) -> (Seeded<'a>, MatchResult) {
    let p = calculate_win_prob(home.team.strength, away.team.strength, hfa, luck);
    let winner = if resolve_game(p, rng) { home } else { away };

    trace!(
        home = %home.team.name,
        away = %away.team.name,
        home_win_prob = p,
        winner = %winner.team.name,
        "playoff game"
    );

    let result = MatchResult {
        home: home.team.name.clone(),
        home_seed: home.seed,
        away: away.team.name.clone(),
        away_seed: away.seed,
        winner: winner.team.name.clone(),
        winner_seed: winner.seed,
    };
    (winner, result)
}

/// Play a game with the better (numerically lower) seed hosting.
fn play_seeded<'a, R: Rng>(
    a: Seeded<'a>,
    b: Seeded<'a>,
    params: &Params,
    rng: &mut R,
) -> (Seeded<'a>, MatchResult) {
    let (home, away) = if b.seed < a.seed { (b, a) } else { (a, b) };
    play_match(home, away, params.home_field, params.luck, rng)
}

/// Play the championship at a neutral site: home field is always zero.
pub fn play_final<'a, R: Rng>(
    first: Seeded<'a>,
    second: Seeded<'a>,
    luck: f64,
    rng: &mut R,
) -> (Seeded<'a>, MatchResult) {
    play_match(first, second, 0.0, luck, rng)
}

/// Run one conference from seeding to its champion.
pub fn run_conference<'a, R: Rng>(
    name: &str,
    teams: Vec<&'a Team>,
    params: &Params,
    rng: &mut R,
) -> Result<(Seeded<'a>, ConferenceBracket)> {
    let seeds = seed_conference(name, teams)?;
    let seeded = |seed: u8| Seeded {
        seed,
        team: seeds[&seed],
    };

    let top = seeded(BYE_SEED);

    let mut wildcard = Vec::with_capacity(WILDCARD_PAIRINGS.len());
    let mut survivors = vec![top];
    for &(home_seed, away_seed) in WILDCARD_PAIRINGS.iter() {
        let (winner, result) = play_seeded(seeded(home_seed), seeded(away_seed), params, rng);
        wildcard.push(result);
        survivors.push(winner);
    }

    // Reseed: the 1 seed hosts the worst remaining seed, the other two meet
    survivors.sort_by_key(|s| s.seed);
    let (worst, middle) = (survivors[3], [survivors[1], survivors[2]]);

    let (upper, top_game) = play_seeded(top, worst, params, rng);
    let (lower, other_game) = play_seeded(middle[0], middle[1], params, rng);

    let (champion, championship) = play_seeded(upper, lower, params, rng);

    let bracket = ConferenceBracket {
        name: name.to_string(),
        bye: top.team.name.clone(),
        wildcard,
        divisional: vec![top_game, other_game],
        championship,
    };
    Ok((champion, bracket))
}

/// Run the full postseason for one season's teams.
///
/// The conference listed first in `teams` is played first and takes the
/// nominal home slot in the final.
pub fn run_playoffs<R: Rng>(
    teams: &[Team],
    params: &Params,
    rng: &mut R,
) -> Result<(Team, PlayoffBracket)> {
    let conferences = split_conferences(teams)?;

    let mut champions = Vec::with_capacity(2);
    let mut brackets = Vec::with_capacity(2);
    for (name, members) in conferences {
        let (champion, bracket) = run_conference(&name, members, params, rng)?;
        champions.push(champion);
        brackets.push(bracket);
    }

    let (winner, super_bowl) = play_final(champions[0], champions[1], params.luck, rng);

    Ok((
        winner.team.clone(),
        PlayoffBracket {
            conferences: brackets,
            super_bowl,
        },
    ))
}
