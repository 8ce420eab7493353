//! The preprocessing gate: admission rules first, then text normalization,
//! tokenization, stop-word removal, and suffix stemming. The retained-token
//! count becomes the canonical word count downstream.

use std::collections::HashSet;

use regex::Regex;
use tracing::info;

use firstpass_common::{ArticleRecord, Decision, Gate, PreprocessedText, Verdict};

/// Common English function words, listed without apostrophes because the
/// character filter strips them before tokenization.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had",
    "her", "was", "one", "our", "out", "has", "his", "him", "she", "its", "this",
    "that", "these", "those", "with", "from", "they", "them", "their", "have",
    "were", "been", "being", "will", "would", "should", "could", "ought", "just",
    "about", "into", "over", "under", "again", "further", "once", "here", "there",
    "when", "where", "why", "how", "both", "each", "few", "more", "most", "other",
    "some", "such", "only", "own", "same", "what", "which", "who", "whom", "because",
    "until", "while", "during", "before", "after", "between", "through", "above",
    "below", "down", "then", "than", "too", "very", "does", "did", "doing", "nor",
    "against", "dont", "didnt", "doesnt", "isnt", "arent", "wasnt", "werent",
    "havent", "hasnt", "wont", "cant", "couldnt", "shouldnt", "wouldnt", "youre",
    "youve", "youll", "theyre", "weve", "hes", "shes", "whats", "thats",
];

#[derive(Debug, Clone)]
pub struct PreprocessorConfig {
    pub min_words: usize,
    pub max_words: usize,
    pub stop_words: HashSet<String>,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            min_words: 50,
            max_words: 10_000,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

pub struct Preprocessor {
    config: PreprocessorConfig,
    tag_re: Regex,
    url_re: Regex,
    charset_re: Regex,
    whitespace_re: Regex,
    token_re: Regex,
}

impl Preprocessor {
    pub fn new(config: PreprocessorConfig) -> Self {
        Self {
            config,
            tag_re: Regex::new(r"<[^>]+>").expect("valid regex"),
            url_re: Regex::new(r"http\S+").expect("valid regex"),
            charset_re: Regex::new(r"[^\w\s.,!?-]").expect("valid regex"),
            whitespace_re: Regex::new(r"\s+").expect("valid regex"),
            token_re: Regex::new(r"\w+").expect("valid regex"),
        }
    }

    /// Admission rules, first match wins.
    fn admission(&self, record: &ArticleRecord) -> Decision {
        let word_count = record.raw_word_count();
        if word_count < self.config.min_words {
            Decision::block(Gate::Preprocessing, "Content too short")
        } else if word_count > self.config.max_words {
            Decision::block(Gate::Preprocessing, "Content too long")
        } else if record.title.trim().is_empty() {
            Decision::block(Gate::Preprocessing, "Missing title")
        } else {
            Decision::pass(Gate::Preprocessing, "Passed preprocessing")
        }
    }

    /// Strip markup, URLs, and stray characters; collapse whitespace.
    pub fn clean_text(&self, text: &str) -> String {
        let text = self.tag_re.replace_all(text, "");
        let text = self.url_re.replace_all(&text, "");
        let text = self.charset_re.replace_all(&text, "");
        self.whitespace_re.replace_all(&text, " ").trim().to_string()
    }

    /// Clean, lowercase, split on word boundaries, and drop stop-words and
    /// tokens of length <= 2.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = self.clean_text(text).to_lowercase();
        self.token_re
            .find_iter(&cleaned)
            .map(|m| m.as_str().to_string())
            .filter(|token| token.len() > 2 && !self.config.stop_words.contains(token))
            .collect()
    }

    /// Run the gate; on Pass, layer the normalized text onto the record.
    pub fn apply(&self, record: ArticleRecord) -> ArticleRecord {
        let decision = self.admission(&record);
        info!(
            domain = %record.domain,
            verdict = ?decision.verdict,
            reason = %decision.reason,
            "Preprocessing gate"
        );

        if decision.verdict == Verdict::Block {
            return record.with_preprocessing(None, decision);
        }

        let cleaned = self.clean_text(&record.content);
        let tokens = self.tokenize(&record.content);
        let stemmed: Vec<String> = tokens.iter().map(|t| stem_token(t)).collect();
        let word_count = tokens.len();

        record.with_preprocessing(
            Some(PreprocessedText { cleaned, tokens, stemmed, word_count }),
            decision,
        )
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(PreprocessorConfig::default())
    }
}

/// Deterministic suffix stripping, applied once per token in rule order.
/// Plural endings first, then participle and adverb endings; a suffix is
/// only stripped when at least three characters remain.
pub fn stem_token(token: &str) -> String {
    if let Some(stem) = token.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    if let Some(stem) = token.strip_suffix("ies") {
        return format!("{stem}i");
    }
    if token.ends_with("ss") {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix('s') {
        if stem.len() >= 3 {
            return stem.to_string();
        }
        return token.to_string();
    }
    for suffix in ["ing", "ed", "ly"] {
        if let Some(stem) = token.strip_suffix(suffix) {
            if stem.len() >= 3 {
                return stem.to_string();
            }
        }
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use firstpass_common::Stage;

    fn record_with(title: &str, content: &str) -> ArticleRecord {
        ArticleRecord::from_text(title, content)
    }

    fn admissible_body() -> String {
        "reporters gathered outside the courthouse today awaiting the panel verdict ".repeat(10)
    }

    #[test]
    fn short_content_blocks_first() {
        let preprocessor = Preprocessor::default();
        // Short AND untitled: the length rule fires first.
        let record = preprocessor.apply(record_with("", "too short"));
        assert_eq!(record.last_decision().unwrap().reason, "Content too short");
        assert_eq!(record.stage, Stage::Blocked);
        assert!(!record.ready_for_next_stage);
    }

    #[test]
    fn overlong_content_blocks() {
        let preprocessor = Preprocessor::new(PreprocessorConfig {
            max_words: 100,
            ..PreprocessorConfig::default()
        });
        let record = preprocessor.apply(record_with("Title", &"word ".repeat(200)));
        assert_eq!(record.last_decision().unwrap().reason, "Content too long");
    }

    #[test]
    fn whitespace_title_blocks() {
        let preprocessor = Preprocessor::default();
        let record = preprocessor.apply(record_with("   ", &admissible_body()));
        assert_eq!(record.last_decision().unwrap().reason, "Missing title");
    }

    #[test]
    fn admissible_article_is_ready_with_tokens() {
        let preprocessor = Preprocessor::default();
        let record = preprocessor.apply(record_with("Title", &admissible_body()));
        assert_eq!(record.stage, Stage::Ready);
        assert!(record.ready_for_next_stage);

        let text = record.preprocessed.as_ref().expect("preprocessed text");
        assert_eq!(text.word_count, text.tokens.len());
        assert!(text.tokens.contains(&"courthouse".to_string()));
        // "the" is a stop-word, "of" is too short
        assert!(!text.tokens.contains(&"the".to_string()));
    }

    #[test]
    fn cleaning_strips_markup_urls_and_stray_characters() {
        let preprocessor = Preprocessor::default();
        let cleaned = preprocessor.clean_text(
            "<p>Visit https://example.com/x now!</p>  \u{00a9} Caf\u{00e9} reports, 100%",
        );
        assert_eq!(cleaned, "Visit now! Caf\u{00e9} reports, 100");
    }

    #[test]
    fn tokenize_and_stem_are_deterministic() {
        let preprocessor = Preprocessor::default();
        let text = "Stories were reported quickly as classes walked past the buildings";
        let first_tokens = preprocessor.tokenize(text);
        let second_tokens = preprocessor.tokenize(text);
        assert_eq!(first_tokens, second_tokens);

        let first_stems: Vec<String> = first_tokens.iter().map(|t| stem_token(t)).collect();
        let second_stems: Vec<String> = second_tokens.iter().map(|t| stem_token(t)).collect();
        assert_eq!(first_stems, second_stems);
    }

    #[test]
    fn stemming_rules() {
        assert_eq!(stem_token("classes"), "class");
        assert_eq!(stem_token("stories"), "stori");
        assert_eq!(stem_token("press"), "press");
        assert_eq!(stem_token("cats"), "cat");
        assert_eq!(stem_token("walked"), "walk");
        assert_eq!(stem_token("quickly"), "quick");
        assert_eq!(stem_token("reporting"), "report");
        assert_eq!(stem_token("gas"), "gas");
        assert_eq!(stem_token("run"), "run");
    }
}
