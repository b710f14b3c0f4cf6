use surveyscope_analyzer::{summary_percentages, top_words, AnalysisResult};

const RULE: &str = "================================================";

pub fn render_console(result: &AnalysisResult, top_n: usize) -> String {
    let pct = summary_percentages(result);
    let mut out = String::new();

    out.push_str("========== SENTIMENT ANALYSIS RESULTS ==========\n");
    out.push_str(&format!("Total Responses: {}\n", result.processed_rows()));
    out.push_str(&format!(
        "Positive (Suka): {} ({:.1}%)\n",
        result.positive, pct.positive
    ));
    out.push_str(&format!(
        "Negative (Tidak Suka): {} ({:.1}%)\n",
        result.negative, pct.negative
    ));
    out.push_str(&format!("Neutral: {} ({:.1}%)\n", result.neutral, pct.neutral));
    out.push_str(RULE);
    out.push_str("\n\n");

    let words = top_words(&result.word_frequency, top_n);
    out.push_str(&format!(
        "========== WORD CLOUD (Top {} Words) ==========\n",
        words.len()
    ));
    for entry in &words {
        let bar_len = usize::try_from(entry.count.saturating_mul(2)).unwrap_or(usize::MAX);
        let bar = "#".repeat(bar_len);
        out.push_str(&format!("{} ({}): {}\n", entry.word, entry.count, bar));
    }
    out.push_str(RULE);
    out.push('\n');

    out
}
