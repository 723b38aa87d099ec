use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// One regular-season game, as indices into the season's team list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Game {
    pub home: usize,
    pub away: usize,
}

/// Generate a regular-season schedule.
///
/// Every team shuffles the list of all teams into a preference order. Teams
/// are then visited in index order and paired with each preferred opponent
/// while both sides are below `games_per_team`. This is greedy and
/// best-effort: a team late in the order can exhaust its preferences before
/// reaching the target, so some teams may play fewer games. Rematches are
/// allowed.
///
/// Draws one shuffle per team, in index order.
pub fn generate_schedule<R: Rng>(
    num_teams: usize,
    games_per_team: usize,
    rng: &mut R,
) -> Vec<Game> {
    let preferences: Vec<Vec<usize>> = (0..num_teams)
        .map(|_| {
            let mut order: Vec<usize> = (0..num_teams).collect();
            order.shuffle(rng);
            order
        })
        .collect();

    let mut games = Vec::with_capacity(num_teams * games_per_team / 2);
    let mut counts = vec![0usize; num_teams];

    for (team, order) in preferences.iter().enumerate() {
        for &opponent in order {
            if opponent == team {
                continue;
            }
            if counts[team] >= games_per_team || counts[opponent] >= games_per_team {
                continue;
            }

            games.push(Game {
                home: team,
                away: opponent,
            });
            counts[team] += 1;
            counts[opponent] += 1;

            if counts[team] >= games_per_team {
                break;
            }
        }
    }

    games
}

/// Number of games each team appears in.
#[cfg(test)]
pub(crate) fn games_per_team(schedule: &[Game], num_teams: usize) -> Vec<usize> {
    let mut counts = vec![0usize; num_teams];
    for game in schedule {
        counts[game.home] += 1;
        counts[game.away] += 1;
    }
    counts
}
