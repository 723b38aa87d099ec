//! Flattened per-season reports and championship tallies.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::Result;
use crate::league::SeasonResult;
use crate::playoffs::PlayoffBracket;

/// One team's line in a season report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamReport {
    pub id: u32,
    pub name: String,
    pub record: String,
    pub strength: f64,
}

/// One season, shaped for export.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeasonReport {
    /// 1-based position in the run
    pub season_id: usize,
    pub teams: Vec<TeamReport>,
    pub champion_id: u32,
    pub champion_name: String,
    pub champion_record: String,
    pub champion_strength: f64,
    pub playoff_bracket: PlayoffBracket,
}

impl SeasonReport {
    pub fn new(season_id: usize, result: &SeasonResult) -> Self {
        let teams = result
            .teams
            .iter()
            .map(|t| TeamReport {
                id: t.id,
                name: t.name.clone(),
                record: t.record(),
                strength: t.strength,
            })
            .collect();

        SeasonReport {
            season_id,
            teams,
            champion_id: result.champion.id,
            champion_name: result.champion.name.clone(),
            champion_record: result.champion.record(),
            champion_strength: result.champion.strength,
            playoff_bracket: result.bracket.clone(),
        }
    }
}

pub fn build_reports(results: &[SeasonResult]) -> Vec<SeasonReport> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| SeasonReport::new(i + 1, r))
        .collect()
}

/// Render a run as pretty-printed JSON. Writing it out is up to the caller.
pub fn to_json(results: &[SeasonResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&build_reports(results))?)
}

/// Titles won per team name, most titles first (ties by name).
pub fn championship_counts(results: &[SeasonResult]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for result in results {
        *counts.entry(result.champion.name.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, n)| (name.to_string(), n))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
