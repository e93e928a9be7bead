/// solved.ac tier labels, indexed by level.
/// solved.ac documentation: https://solved.ac/api/v3 (`Problem.level`)
const TIER_NAMES: [&str; 32] = [
    "Unknown",
    "Bronze V",
    "Bronze IV",
    "Bronze III",
    "Bronze II",
    "Bronze I",
    "Silver V",
    "Silver IV",
    "Silver III",
    "Silver II",
    "Silver I",
    "Gold V",
    "Gold IV",
    "Gold III",
    "Gold II",
    "Gold I",
    "Platinum V",
    "Platinum IV",
    "Platinum III",
    "Platinum II",
    "Platinum I",
    "Diamond V",
    "Diamond IV",
    "Diamond III",
    "Diamond II",
    "Diamond I",
    "Ruby V",
    "Ruby IV",
    "Ruby III",
    "Ruby II",
    "Ruby I",
    "Master",
];

/// The highest level present in the catalog.
pub const MAX_LEVEL: u8 = (TIER_NAMES.len() - 1) as u8;

/// Returns the human-readable tier for a level, or None if the level is out of range.
pub fn tier_name(level: u8) -> Option<&'static str> {
    TIER_NAMES.get(level as usize).copied()
}
