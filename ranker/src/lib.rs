pub mod config;
pub mod extract;
pub mod fetch;
pub mod render;

pub use config::FetchConfig;
pub use extract::extract_titles;
pub use fetch::{build_client, fetch_titles, read_titles};
pub use render::{render_json, render_text, Report, TokenCount};
