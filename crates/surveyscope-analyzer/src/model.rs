use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type WordFrequency = BTreeMap<String, u64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub skipped_rows: u64,
    pub word_frequency: WordFrequency,
}

impl AnalysisResult {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn processed_rows(&self) -> u64 {
        self.positive
            .saturating_add(self.negative)
            .saturating_add(self.neutral)
    }

    pub fn max_count(&self) -> u64 {
        self.positive.max(self.negative).max(self.neutral)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutput {
    pub source: String,
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub processed_rows: u64,
    pub skipped_rows: u64,
    pub word_frequency: WordFrequency,
    pub determinism_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentages {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_bumps_one_counter() {
        let mut result = AnalysisResult::default();
        result.record(Sentiment::Positive);
        result.record(Sentiment::Positive);
        result.record(Sentiment::Neutral);
        assert_eq!(result.count(Sentiment::Positive), 2);
        assert_eq!(result.count(Sentiment::Negative), 0);
        assert_eq!(result.processed_rows(), 3);
        assert_eq!(result.max_count(), 2);
    }

    #[test]
    fn processed_rows_saturates() {
        let result = AnalysisResult {
            positive: u64::MAX,
            negative: 1,
            ..AnalysisResult::default()
        };
        assert_eq!(result.processed_rows(), u64::MAX);
    }
}
