use crate::html::{bar_class, escape, font_size, sentiment_bars, HTML_HEAD_OPEN};
use surveyscope_analyzer::{top_words, AnalysisResult, Sentiment};
use url::form_urlencoded;

const BAR_MAX_HEIGHT_PX: u64 = 150;
const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=";

#[derive(Debug, Clone)]
pub struct PosterOptions {
    pub repository_url: String,
    pub top_n: usize,
}

const STYLE: &str = "\
@page { size: A4; margin: 0; }
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Segoe UI', Arial, sans-serif; background: white; }
.poster { width: 210mm; height: 297mm; padding: 15mm; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); }
.content { background: white; height: 100%; border-radius: 15px; padding: 20px; box-shadow: 0 10px 40px rgba(0,0,0,0.3); display: flex; flex-direction: column; }
.header { text-align: center; margin-bottom: 15px; }
h1 { color: #667eea; font-size: 32px; margin-bottom: 5px; }
.subtitle { color: #666; font-size: 14px; }
.stats-row { display: flex; justify-content: space-around; margin: 15px 0; gap: 10px; }
.stat-box { flex: 1; text-align: center; padding: 12px; border-radius: 10px; background: #f8f9fa; }
.stat-number { font-size: 28px; font-weight: bold; color: #667eea; }
.stat-label { font-size: 12px; color: #666; margin-top: 3px; }
.chart-section { flex: 1; display: flex; gap: 15px; margin: 10px 0; }
.bar-chart-container { flex: 0.4; display: flex; flex-direction: column; }
.chart-title { font-size: 16px; font-weight: bold; color: #333; margin-bottom: 10px; text-align: center; }
.bar-chart { display: flex; justify-content: space-around; align-items: flex-end; height: 180px; padding: 10px; background: #fafafa; border-radius: 10px; }
.bar-wrapper { display: flex; flex-direction: column; align-items: center; flex: 1; }
.bar { width: 50px; border-radius: 6px 6px 0 0; display: flex; align-items: flex-end; justify-content: center; color: white; font-weight: bold; font-size: 16px; padding-bottom: 8px; }
.positive-bar { background: linear-gradient(to top, #10b981, #34d399); }
.neutral-bar { background: linear-gradient(to top, #f59e0b, #fbbf24); }
.negative-bar { background: linear-gradient(to top, #ef4444, #f87171); }
.bar-label { margin-top: 8px; font-weight: bold; color: #333; font-size: 11px; }
.sentiment-detail { display: flex; flex-direction: column; gap: 8px; margin-top: 10px; }
.sentiment-item { display: flex; align-items: center; gap: 8px; padding: 8px; border-radius: 8px; background: white; }
.sentiment-icon { width: 30px; height: 30px; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 16px; }
.positive-icon { background: #d1fae5; }
.neutral-icon { background: #fef3c7; }
.negative-icon { background: #fee2e2; }
.sentiment-text { flex: 1; font-size: 11px; }
.wordcloud-container { flex: 0.6; display: flex; flex-direction: column; }
.word-cloud { display: flex; flex-wrap: wrap; justify-content: center; align-items: center; gap: 6px; padding: 10px; background: #fafafa; border-radius: 10px; flex: 1; overflow: hidden; }
.word { display: inline-block; padding: 4px 10px; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; border-radius: 5px; font-weight: bold; white-space: nowrap; }
.footer { display: flex; justify-content: space-between; align-items: center; margin-top: 10px; padding-top: 10px; border-top: 2px solid #e5e7eb; }
.qr-section { display: flex; align-items: center; gap: 10px; }
.qr-code { width: 80px; height: 80px; }
.qr-text { font-size: 10px; color: #666; }
.footer-text { font-size: 10px; color: #666; text-align: right; }
@media print { body { margin: 0; } .poster { box-shadow: none; } }
";

pub fn render_poster(result: &AnalysisResult, options: &PosterOptions) -> String {
    let total = result.processed_rows();
    let mut out = String::new();
    out.push_str(HTML_HEAD_OPEN);
    out.push_str("<title>Poster - Analisis Survey Checklock</title>\n");
    out.push_str(&format!("<style>\n{STYLE}</style>\n</head>\n<body>\n"));
    out.push_str("<div class='poster'>\n<div class='content'>\n");

    out.push_str("<div class='header'>\n");
    out.push_str("<h1>Analisis Survey Checklock</h1>\n");
    out.push_str("<p class='subtitle'>Hasil Survey Kepuasan Sistem Absensi Checklock</p>\n");
    out.push_str("</div>\n");

    out.push_str("<div class='stats-row'>\n");
    push_stat_box(&mut out, total, "Total Responden", None);
    for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
        let (label, background, color) = stat_style(sentiment);
        push_stat_box(
            &mut out,
            result.count(sentiment),
            label,
            Some((background, color)),
        );
    }
    out.push_str("</div>\n");

    out.push_str("<div class='chart-section'>\n");
    out.push_str("<div class='bar-chart-container'>\n");
    out.push_str("<div class='chart-title'>Hasil Sentimen</div>\n");
    out.push_str("<div class='bar-chart'>\n");
    for bar in sentiment_bars(result, BAR_MAX_HEIGHT_PX) {
        out.push_str("<div class='bar-wrapper'>\n");
        out.push_str(&format!(
            "<div class='bar {}' style='height: {}px;'>{}</div>\n",
            bar_class(bar.sentiment),
            bar.height_px,
            bar.count
        ));
        out.push_str(&format!(
            "<div class='bar-label'>{}</div>\n",
            bar_label(bar.sentiment)
        ));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");

    out.push_str("<div class='sentiment-detail'>\n");
    for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
        let (icon_class, icon, answer) = detail_style(sentiment);
        out.push_str("<div class='sentiment-item'>\n");
        out.push_str(&format!(
            "<div class='sentiment-icon {icon_class}'>{icon}</div>\n"
        ));
        out.push_str(&format!(
            "<div class='sentiment-text'>{} responden menjawab <b>{answer}</b></div>\n",
            result.count(sentiment)
        ));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</div>\n");

    out.push_str("<div class='wordcloud-container'>\n");
    out.push_str("<div class='chart-title'>Kata yang Sering Muncul</div>\n");
    out.push_str("<div class='word-cloud'>\n");
    for entry in top_words(&result.word_frequency, options.top_n) {
        out.push_str(&format!(
            "<span class='word' style='font-size: {}px;'>{} ({})</span>\n",
            font_size(entry.count, 10, 2, 28),
            escape(&entry.word),
            entry.count
        ));
    }
    out.push_str("</div>\n</div>\n");
    out.push_str("</div>\n");

    out.push_str("<div class='footer'>\n");
    out.push_str("<div class='qr-section'>\n");
    out.push_str(&format!(
        "<img class='qr-code' src='{}' alt='QR Code'>\n",
        escape(&qr_code_url(&options.repository_url))
    ));
    out.push_str("<div class='qr-text'><b>Scan untuk kode sumber</b><br>GitHub Repository</div>\n");
    out.push_str("</div>\n");
    out.push_str("<div class='footer-text'>\n");
    out.push_str("Dibuat dengan Rust Sentiment Analysis<br>\n");
    out.push_str(&format!("Data dianalisis dari {total} responden survey\n"));
    out.push_str("</div>\n</div>\n");

    out.push_str("</div>\n</div>\n</body>\n</html>\n");
    out
}

pub fn qr_code_url(target: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("{QR_ENDPOINT}{encoded}")
}

fn push_stat_box(out: &mut String, value: u64, label: &str, colors: Option<(&str, &str)>) {
    match colors {
        Some((background, color)) => {
            out.push_str(&format!(
                "<div class='stat-box' style='background: {background};'>\n"
            ));
            out.push_str(&format!(
                "<div class='stat-number' style='color: {color};'>{value}</div>\n"
            ));
        }
        None => {
            out.push_str("<div class='stat-box'>\n");
            out.push_str(&format!("<div class='stat-number'>{value}</div>\n"));
        }
    }
    out.push_str(&format!("<div class='stat-label'>{label}</div>\n"));
    out.push_str("</div>\n");
}

fn stat_style(sentiment: Sentiment) -> (&'static str, &'static str, &'static str) {
    match sentiment {
        Sentiment::Positive => ("Suka", "#d1fae5", "#10b981"),
        Sentiment::Neutral => ("Netral", "#fef3c7", "#f59e0b"),
        Sentiment::Negative => ("Tidak Suka", "#fee2e2", "#ef4444"),
    }
}

fn bar_label(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "Suka",
        Sentiment::Neutral => "Netral",
        Sentiment::Negative => "Tidak",
    }
}

fn detail_style(sentiment: Sentiment) -> (&'static str, &'static str, &'static str) {
    match sentiment {
        Sentiment::Positive => ("positive-icon", "+", "iya suka!"),
        Sentiment::Neutral => ("neutral-icon", "-", "netral"),
        Sentiment::Negative => ("negative-icon", "x", "tidak suka!"),
    }
}
