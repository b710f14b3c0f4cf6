use crate::html::{bar_class, escape, font_size, sentiment_bars, HTML_HEAD_OPEN};
use surveyscope_analyzer::{top_words, AnalysisResult, Sentiment};

const BAR_MAX_HEIGHT_PX: u64 = 250;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; background: #f0f0f0; padding: 20px; }
.container { max-width: 1200px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
h1 { text-align: center; color: #333; }
h2 { text-align: center; color: #555; margin-top: 40px; }
.chart-container { margin: 40px auto; max-width: 600px; }
.bar-chart { display: flex; justify-content: space-around; align-items: flex-end; height: 300px; padding: 20px; background: #fafafa; border-radius: 10px; }
.bar-wrapper { display: flex; flex-direction: column; align-items: center; flex: 1; margin: 0 10px; }
.bar { width: 80px; border-radius: 8px 8px 0 0; display: flex; align-items: flex-end; justify-content: center; color: white; font-weight: bold; font-size: 20px; padding-bottom: 10px; }
.positive-bar { background: linear-gradient(to top, #10b981, #34d399); }
.neutral-bar { background: linear-gradient(to top, #f59e0b, #fbbf24); }
.negative-bar { background: linear-gradient(to top, #ef4444, #f87171); }
.bar-label { margin-top: 10px; font-weight: bold; color: #333; }
.bar-count { margin-top: 5px; font-size: 14px; color: #666; }
.word-cloud { display: flex; flex-wrap: wrap; justify-content: center; gap: 10px; padding: 20px; }
.word { display: inline-block; padding: 5px 15px; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; border-radius: 5px; font-weight: bold; }
";

pub fn render_wordcloud(result: &AnalysisResult, top_n: usize) -> String {
    let mut out = String::new();
    out.push_str(HTML_HEAD_OPEN);
    out.push_str("<title>Word Cloud - Checklock Survey</title>\n");
    out.push_str(&format!("<style>\n{STYLE}</style>\n</head>\n<body>\n"));
    out.push_str("<div class='container'>\n");
    out.push_str("<h1>📊 Analisis Survey Checklock</h1>\n");

    out.push_str("<h2>Hasil Sentimen</h2>\n");
    out.push_str("<div class='chart-container'>\n<div class='bar-chart'>\n");
    for bar in sentiment_bars(result, BAR_MAX_HEIGHT_PX) {
        let (label, answer) = labels(bar.sentiment);
        out.push_str("<div class='bar-wrapper'>\n");
        out.push_str(&format!(
            "<div class='bar {}' style='height: {}px;'>{}</div>\n",
            bar_class(bar.sentiment),
            bar.height_px,
            bar.count
        ));
        out.push_str(&format!("<div class='bar-label'>{label}</div>\n"));
        out.push_str(&format!(
            "<div class='bar-count'>{} menjawab {answer}</div>\n",
            bar.count
        ));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</div>\n");

    out.push_str("<h2>Word Cloud - Kata yang Sering Muncul</h2>\n");
    out.push_str("<div class='word-cloud'>\n");
    for entry in top_words(&result.word_frequency, top_n) {
        out.push_str(&format!(
            "<span class='word' style='font-size: {}px;'>{} ({})</span>\n",
            font_size(entry.count, 12, 3, 48),
            escape(&entry.word),
            entry.count
        ));
    }
    out.push_str("</div>\n</div>\n</body>\n</html>\n");

    out
}

fn labels(sentiment: Sentiment) -> (&'static str, &'static str) {
    match sentiment {
        Sentiment::Positive => ("✅ Suka", "iya suka!"),
        Sentiment::Neutral => ("😐 Netral", "netral!"),
        Sentiment::Negative => ("❌ Tidak Suka", "tidak suka!"),
    }
}
