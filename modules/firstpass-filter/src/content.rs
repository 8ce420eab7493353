//! Lexical content heuristics. No network or file access.

use firstpass_common::clamp01;

/// Score the content's surface credibility. Starts from a neutral 0.5;
/// shouty all-caps titles and very short bodies are penalized, with a floor
/// of zero after each deduction.
pub fn content_score(title: &str, content: &str) -> f64 {
    let mut score: f64 = 0.5;

    let title_len = title.chars().count();
    if title_len > 0 {
        let caps = title.chars().filter(|c| c.is_uppercase()).count();
        let caps_ratio = caps as f64 / title_len as f64;
        if caps_ratio > 0.5 {
            score = (score - 0.2).max(0.0);
        }
    }

    let word_count = content.split_whitespace().count();
    if word_count < 50 {
        score = (score - 0.3).max(0.0);
    }

    clamp01(score)
}
