use surveyscope_analyzer::{AnalysisResult, Sentiment};

pub(crate) const HTML_HEAD_OPEN: &str = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset='UTF-8'>\n";

pub(crate) struct Bar {
    pub sentiment: Sentiment,
    pub count: u64,
    pub height_px: u64,
}

pub(crate) fn sentiment_bars(result: &AnalysisResult, max_height_px: u64) -> [Bar; 3] {
    let max = result.max_count();
    let bar = |sentiment: Sentiment| {
        let count = result.count(sentiment);
        let height_px = if max == 0 {
            0
        } else {
            let scaled = u128::from(count) * u128::from(max_height_px) / u128::from(max);
            u64::try_from(scaled).unwrap_or(max_height_px)
        };
        Bar {
            sentiment,
            count,
            height_px,
        }
    };
    [
        bar(Sentiment::Positive),
        bar(Sentiment::Neutral),
        bar(Sentiment::Negative),
    ]
}

pub(crate) fn bar_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "positive-bar",
        Sentiment::Neutral => "neutral-bar",
        Sentiment::Negative => "negative-bar",
    }
}

pub(crate) fn font_size(count: u64, base: u64, step: u64, cap: u64) -> u64 {
    count.saturating_mul(step).saturating_add(base).min(cap)
}

pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_tallest() {
        let result = AnalysisResult {
            positive: 4,
            negative: 1,
            neutral: 2,
            ..AnalysisResult::default()
        };
        let heights: Vec<u64> = sentiment_bars(&result, 250)
            .iter()
            .map(|bar| bar.height_px)
            .collect();
        assert_eq!(heights, [250, 125, 62]);
    }

    #[test]
    fn huge_counts_scale_without_overflow() {
        let result = AnalysisResult {
            positive: u64::MAX,
            negative: u64::MAX / 2,
            neutral: 0,
            ..AnalysisResult::default()
        };
        let heights: Vec<u64> = sentiment_bars(&result, 250)
            .iter()
            .map(|bar| bar.height_px)
            .collect();
        assert_eq!(heights, [250, 0, 124]);
    }

    #[test]
    fn bars_of_empty_result_are_flat() {
        let bars = sentiment_bars(&AnalysisResult::default(), 150);
        assert!(bars.iter().all(|bar| bar.height_px == 0 && bar.count == 0));
    }

    #[test]
    fn font_size_is_capped() {
        assert_eq!(font_size(1, 12, 3, 48), 15);
        assert_eq!(font_size(20, 12, 3, 48), 48);
        assert_eq!(font_size(u64::MAX, 10, 2, 28), 28);
    }

    #[test]
    fn escape_covers_markup() {
        assert_eq!(
            escape("<a href='x'>&\"</a>"),
            "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;"
        );
    }
}
