//! Christmas/holiday content heuristic.
//!
//! Keywords are matched as raw substrings of the lower-cased text, so "tree"
//! also matches inside "treehouse" or "street".

use crate::report::{MAX_SCORE, SeasonalData};

const HOLIDAY_KEYWORDS: [&str; 17] = [
    "christmas",
    "holiday",
    "santa",
    "gift",
    "present",
    "december",
    "winter",
    "snow",
    "reindeer",
    "elf",
    "merry",
    "festive",
    "yuletide",
    "stocking",
    "ornament",
    "tree",
    "mistletoe",
];

const POINTS_PER_KEYWORD: u32 = 10;

/// Scores how much holiday vocabulary the text uses.
pub fn detect(text: &str) -> SeasonalData {
    let lower = text.to_lowercase();

    let keywords: Vec<String> = HOLIDAY_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    let score = (keywords.len() as u32 * POINTS_PER_KEYWORD).min(MAX_SCORE);
    let message = if score > 0 {
        format!("Christmas Spirit: {}/100", score)
    } else {
        "No Christmas content detected.".to_string()
    };

    SeasonalData { score, keywords, message }
}
