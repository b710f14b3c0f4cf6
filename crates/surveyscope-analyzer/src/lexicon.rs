use crate::model::{Sentiment, WordFrequency};
use crate::text::normalize;
use std::collections::HashSet;

pub const MIN_WORD_LEN: usize = 3;

// `kalo` is listed twice; the set keeps one.
const STOP_WORDS: [&str; 34] = [
    "yang", "di", "ke", "dari", "ini", "itu", "untuk", "dan", "atau", "dengan", "pada", "adalah",
    "ada", "saya", "aku", "kamu", "dia", "kita", "mereka", "jika", "kalau", "kalo", "tapi",
    "tetapi", "namun", "karena", "karna", "kalo", "gak", "ga", "tidak", "sih", "aja", "aj",
];

const NEGATION: &str = "tidak";
const LIKE: &str = "suka";
const YES: &str = "iya";

/// Maps a sentiment choice to a polarity. First match wins:
/// `tidak` + `suka` is negative, `iya` or a bare `suka` is positive,
/// anything else is neutral.
pub fn classify(choice: &str) -> Sentiment {
    let lower = choice.to_ascii_lowercase();
    let negated = lower.contains(NEGATION);
    let liked = lower.contains(LIKE);

    if negated && liked {
        Sentiment::Negative
    } else if lower.contains(YES) || liked {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<&'static str>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn accumulate(&self, text: &str, freq: &mut WordFrequency) {
        for token in text.split_ascii_whitespace() {
            let word = normalize(token);
            if word.len() >= MIN_WORD_LEN && !self.is_stop_word(&word) {
                *freq.entry(word).or_insert(0) += 1;
            }
        }
    }
}
