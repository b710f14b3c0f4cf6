pub mod analyze;
pub mod csv_line;
pub mod lexicon;
pub mod model;
pub mod summary;
pub mod text;

pub use analyze::{analyze_to_output, load_analysis, write_analysis, SurveyAnalyzer};
pub use csv_line::parse_line;
pub use lexicon::{classify, Lexicon};
pub use model::{AnalysisOutput, AnalysisResult, Percentages, Sentiment, WordCount, WordFrequency};
pub use summary::{ranked_words, summary_percentages, top_words};
pub use text::normalize;
