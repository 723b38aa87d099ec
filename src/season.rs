use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Normal;
use tracing::trace;

use crate::constants::GAMES_PER_TEAM;
use crate::error::{Result, SimError};
use crate::params::Params;
use crate::schedule::{generate_schedule, Game};
use crate::team::Team;
use crate::win_prob::{calculate_win_prob, resolve_game};

/// One season's teams and schedule. Owns its team copies exclusively.
#[derive(Clone, Debug)]
pub struct Season {
    pub teams: Vec<Team>,
    pub schedule: Vec<Game>,
}

impl Season {
    /// Set up a season from the base roster.
    ///
    /// Draws one standard normal per team (roster order), scaled by
    /// `strength_sd`, then generates the schedule.
    pub fn new<R: Rng>(base_teams: &[Team], params: &Params, rng: &mut R) -> Result<Self> {
        let normal = Normal::new(0.0, 1.0).map_err(|e| SimError::Distribution(e.to_string()))?;

        let teams: Vec<Team> = base_teams
            .iter()
            .map(|team| team.fresh_season(normal.sample(rng) * params.strength_sd))
            .collect();

        let schedule = generate_schedule(teams.len(), GAMES_PER_TEAM, rng);

        Ok(Season { teams, schedule })
    }

    /// Play every scheduled game in order, one uniform draw per game.
    ///
    /// Returns how many games the home side won.
    pub fn play<R: Rng>(&mut self, params: &Params, rng: &mut R) -> usize {
        let mut home_wins = 0;
        for game in &self.schedule {
            let p = calculate_win_prob(
                self.teams[game.home].strength,
                self.teams[game.away].strength,
                params.home_field,
                params.luck,
            );

            let (winner, loser) = if resolve_game(p, rng) {
                home_wins += 1;
                (game.home, game.away)
            } else {
                (game.away, game.home)
            };
            self.teams[winner].wins += 1;
            self.teams[loser].losses += 1;
        }

        trace!(games = self.schedule.len(), home_wins, "regular season complete");
        home_wins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::default_roster;
    use crate::schedule::games_per_team;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_season_copies_roster() {
        let roster = default_roster();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let season = Season::new(&roster, &Params::default(), &mut rng).unwrap();

        assert_eq!(season.teams.len(), roster.len());
        for (team, base) in season.teams.iter().zip(&roster) {
            assert_eq!(team.id, base.id);
            assert_eq!(team.conference, base.conference);
            assert_eq!(team.record(), "0-0");
        }
        // base roster is untouched
        assert!(roster.iter().all(|t| t.strength == 0.0));
    }

    #[test]
    fn test_zero_sd_gives_zero_strength() {
        let roster = default_roster();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let season = Season::new(&roster, &Params::new(0.0, 0.18, 1.0), &mut rng).unwrap();
        assert!(season.teams.iter().all(|t| t.strength == 0.0));
    }

    #[test]
    fn test_records_match_schedule() {
        let roster = default_roster();
        let params = Params::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);

        for _ in 0..20 {
            let mut season = Season::new(&roster, &params, &mut rng).unwrap();
            season.play(&params, &mut rng);

            let counts = games_per_team(&season.schedule, season.teams.len());
            for (team, &count) in season.teams.iter().zip(&counts) {
                assert_eq!(team.games_played() as usize, count);
            }

            let total_wins: u32 = season.teams.iter().map(|t| t.wins).sum();
            let total_losses: u32 = season.teams.iter().map(|t| t.losses).sum();
            assert_eq!(total_wins as usize, season.schedule.len());
            assert_eq!(total_losses as usize, season.schedule.len());
        }
    }

    #[test]
    fn test_dominant_team_wins_out() {
        let roster = default_roster();
        let params = Params::new(0.0, 0.0, 0.01);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut season = Season::new(&roster, &params, &mut rng).unwrap();
        season.teams[3].strength = 10.0;
        season.play(&params, &mut rng);

        assert_eq!(season.teams[3].losses, 0);
        assert!(season.teams[3].wins > 0);
    }
}
