pub mod console;
mod html;
pub mod poster;
pub mod wordcloud;

pub use console::render_console;
pub use poster::{qr_code_url, render_poster, PosterOptions};
pub use wordcloud::render_wordcloud;
