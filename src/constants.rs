/// Regular-season games each team is scheduled for (18-week, 17-game season)
pub const GAMES_PER_TEAM: usize = 17;

/// Playoff seeds per conference
pub const PLAYOFF_SEEDS: usize = 7;

/// Seed that skips the wildcard round
pub const BYE_SEED: u8 = 1;

/// Wildcard round pairings as (home seed, away seed)
pub const WILDCARD_PAIRINGS: [(u8, u8); 3] = [(2, 7), (3, 6), (4, 5)];

/// Standard deviation of the per-season strength draw
pub const DEFAULT_STRENGTH_SD: f64 = 0.9;

/// Home-field advantage, in strength units
pub const DEFAULT_HOME_FIELD: f64 = 0.18;

/// Logistic scale applied to strength differences
pub const DEFAULT_LUCK: f64 = 1.0;
