use crate::team::Team;

/// The 32-team league used when no roster is supplied, NFC listed first.
const LEAGUE: [(u32, &str, &str); 32] = [
    (1, "Arizona Cardinals", "NFC"),
    (2, "Los Angeles Rams", "NFC"),
    (3, "San Francisco 49ers", "NFC"),
    (4, "Seattle Seahawks", "NFC"),
    (5, "Chicago Bears", "NFC"),
    (6, "Detroit Lions", "NFC"),
    (7, "Green Bay Packers", "NFC"),
    (8, "Minnesota Vikings", "NFC"),
    (9, "Atlanta Falcons", "NFC"),
    (10, "Carolina Panthers", "NFC"),
    (11, "New Orleans Saints", "NFC"),
    (12, "Tampa Bay Buccaneers", "NFC"),
    (13, "Dallas Cowboys", "NFC"),
    (14, "New York Giants", "NFC"),
    (15, "Philadelphia Eagles", "NFC"),
    (16, "Washington Commanders", "NFC"),
    (17, "Denver Broncos", "AFC"),
    (18, "Kansas City Chiefs", "AFC"),
    (19, "Las Vegas Raiders", "AFC"),
    (20, "Los Angeles Chargers", "AFC"),
    (21, "Baltimore Ravens", "AFC"),
    (22, "Cleveland Browns", "AFC"),
    (23, "Pittsburgh Steelers", "AFC"),
    (24, "Cincinnati Bengals", "AFC"),
    (25, "Houston Texans", "AFC"),
    (26, "Indianapolis Colts", "AFC"),
    (27, "Jacksonville Jaguars", "AFC"),
    (28, "Tennessee Titans", "AFC"),
    (29, "Buffalo Bills", "AFC"),
    (30, "Miami Dolphins", "AFC"),
    (31, "New England Patriots", "AFC"),
    (32, "New York Jets", "AFC"),
];

/// Build the reference roster with blank seasons.
pub fn default_roster() -> Vec<Team> {
    LEAGUE
        .iter()
        .map(|&(id, name, conference)| Team::new(id, name, conference))
        .collect()
}
