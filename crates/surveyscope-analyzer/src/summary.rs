use crate::model::{AnalysisResult, Percentages, WordCount, WordFrequency};

pub fn ranked_words(freq: &WordFrequency) -> Vec<WordCount> {
    let mut words: Vec<WordCount> = freq
        .iter()
        .map(|(word, &count)| WordCount {
            word: word.clone(),
            count,
        })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words
}

pub fn top_words(freq: &WordFrequency, n: usize) -> Vec<WordCount> {
    let mut words = ranked_words(freq);
    words.truncate(n);
    words
}

pub fn summary_percentages(result: &AnalysisResult) -> Percentages {
    let total = result.processed_rows();
    let pct = |count: u64| {
        if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        }
    };
    Percentages {
        positive: pct(result.positive),
        negative: pct(result.negative),
        neutral: pct(result.neutral),
    }
}
