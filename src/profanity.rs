use std::collections::BTreeSet;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

const DEFAULT_PLACEHOLDER: char = '*';

const DEFAULT_WORDS: &[&str] = &[
    "arse",
    "bastard",
    "bloody",
    "bollocks",
    "crap",
    "damn",
    "idiot",
    "moron",
    "scum",
    "wanker",
];

lazy_static! {
    static ref DEFAULT_PATTERN: Option<Regex> = build_pattern(DEFAULT_WORDS.iter().copied());
}

/// Capability surface of a profanity checker used by display code.
pub trait ProfanityFilter: Send + Sync {
    /// Returns true when `text` contains a listed word.
    fn check(&self, text: &str) -> bool;

    /// Masks every listed word in `text`.
    fn clean(&self, text: &str) -> String;

    fn add(&mut self, words: &[&str]);

    fn remove(&mut self, words: &[&str]);

    fn clear_list(&mut self);

    fn list(&self) -> Vec<String>;
}

/// Whole-word, case-insensitive filter backed by an editable word list.
#[derive(Debug, Clone)]
pub struct WordListFilter {
    words: BTreeSet<String>,
    pattern: Option<Regex>,
    placeholder: char,
}

impl WordListFilter {
    pub fn new() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            pattern: DEFAULT_PATTERN.clone(),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    pub fn empty() -> Self {
        Self {
            words: BTreeSet::new(),
            pattern: None,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    fn rebuild(&mut self) {
        self.pattern = build_pattern(self.words.iter().map(String::as_str));
        debug!("Rebuilt profanity pattern with {} words", self.words.len());
    }
}

impl Default for WordListFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfanityFilter for WordListFilter {
    fn check(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(text))
    }

    fn clean(&self, text: &str) -> String {
        match &self.pattern {
            Some(re) => re
                .replace_all(text, |caps: &regex::Captures| {
                    self.placeholder.to_string().repeat(caps[0].chars().count())
                })
                .into_owned(),
            None => text.to_string(),
        }
    }

    fn add(&mut self, words: &[&str]) {
        let before = self.words.len();
        self.words.extend(normalize(words));
        if self.words.len() != before {
            self.rebuild();
        }
    }

    fn remove(&mut self, words: &[&str]) {
        let before = self.words.len();
        for word in normalize(words) {
            self.words.remove(&word);
        }
        if self.words.len() != before {
            self.rebuild();
        }
    }

    fn clear_list(&mut self) {
        self.words.clear();
        self.pattern = None;
    }

    fn list(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }
}

fn normalize<'a>(words: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
}

fn build_pattern<'a>(words: impl Iterator<Item = &'a str>) -> Option<Regex> {
    let alternatives: Vec<String> = words.map(bounded).collect();
    if alternatives.is_empty() {
        return None;
    }

    // Escaped literals only, so the pattern always compiles
    Regex::new(&format!("(?i){}", alternatives.join("|"))).ok()
}

/// Escapes `word` and anchors each edge that is a word character to a `\b`.
/// A `\b` beside a symbol would demand a word character on its far side.
fn bounded(word: &str) -> String {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let start = if is_word(word.chars().next()) { r"\b" } else { "" };
    let end = if is_word(word.chars().last()) { r"\b" } else { "" };
    format!("{}{}{}", start, regex::escape(word), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_matches_whole_words_case_insensitively() {
        let filter = WordListFilter::new();
        assert!(filter.check("what a DAMN shame"));
        assert!(filter.check("Crap."));
        assert!(!filter.check("Amsterdam is nice"));
        assert!(!filter.check("scrapbook"));
    }

    #[test]
    fn clean_masks_each_character() {
        let filter = WordListFilter::new();
        assert_eq!(filter.clean("Damn fine work"), "**** fine work");
        assert_eq!(filter.clean("nothing to see"), "nothing to see");

        let hashed = WordListFilter::new().with_placeholder('#');
        assert_eq!(hashed.clean("you moron"), "you #####");
    }

    #[test]
    fn add_and_remove_words() {
        let mut filter = WordListFilter::empty();
        assert!(!filter.check("rugpull"));

        filter.add(&["RugPull", "  ", "scam"]);
        assert_eq!(filter.list(), vec!["rugpull".to_string(), "scam".to_string()]);
        assert!(filter.check("total rugpull"));
        assert_eq!(filter.clean("a scam coin"), "a **** coin");

        filter.remove(&["scam"]);
        assert!(!filter.check("a scam coin"));
        assert_eq!(filter.list(), vec!["rugpull".to_string()]);
    }

    #[test]
    fn words_with_regex_metacharacters_are_literal() {
        let mut filter = WordListFilter::empty();
        filter.add(&["a.b"]);
        assert!(filter.check("say a.b now"));
        assert!(!filter.check("say axb now"));
    }

    #[test]
    fn words_with_symbol_edges_match() {
        let mut filter = WordListFilter::empty();
        filter.add(&["a$$", "#rekt"]);
        assert!(filter.check("you a$$ hole"));
        assert_eq!(filter.clean("you a$$ hole"), "you *** hole");
        assert_eq!(filter.clean("got #REKT today"), "got ***** today");
        assert!(!filter.check("#rekted"));
        assert!(!filter.check("baa$$"));
    }

    #[test]
    fn clear_list_disables_filtering() {
        let mut filter = WordListFilter::new();
        filter.clear_list();
        assert!(filter.list().is_empty());
        assert!(!filter.check("damn"));
        assert_eq!(filter.clean("damn"), "damn");
    }
}
