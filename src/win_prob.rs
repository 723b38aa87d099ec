use rand::Rng;

/// Calculate the probability of the home team winning.
///
/// Logistic model on the strength gap plus home-field offset, scaled by `luck`.
///
/// # Arguments
/// * `home_strength` - Home team's season strength
/// * `away_strength` - Away team's season strength
/// * `hfa` - Home-field offset (0.0 at a neutral site)
/// * `luck` - Logistic scale, must be > 0
///
/// # Returns
/// Probability of the home team winning, in (0, 1)
pub fn calculate_win_prob(home_strength: f64, away_strength: f64, hfa: f64, luck: f64) -> f64 {
    1.0 / (1.0 + (-(home_strength - away_strength + hfa) / luck).exp())
}

/// Resolve one game with a single uniform draw.
///
/// Returns true when the home side wins.
pub fn resolve_game<R: Rng>(home_win_prob: f64, rng: &mut R) -> bool {
    rng.gen::<f64>() < home_win_prob
}
