mod block;
mod config;
mod html;
mod inline;
mod parser;
mod preprocess;

pub use block::{Block, List, Span};
pub use config::Config;

/// Apply the diagnostic-report rewrites to raw analysis text.
pub fn preprocess(raw: &str) -> String {
    preprocess::preprocess(raw)
}

/// Parse markdown-structured text into a vector of blocks.
pub fn parse(text: &str) -> Vec<Block> {
    parser::parse(text)
}

/// Resolve inline formatting in a single fragment into runs.
pub fn resolve_inline(fragment: &str) -> Vec<Span> {
    inline::resolve_inline(fragment)
}

/// Preprocess and parse raw analysis text into renderable blocks.
pub fn format_analysis(raw: &str) -> Vec<Block> {
    parser::parse(&preprocess::preprocess(raw))
}

/// Render raw analysis text to HTML using default config.
pub fn analysis_to_html(raw: &str) -> String {
    analysis_to_html_with_config(raw, &Config::default())
}

/// Render raw analysis text to HTML with custom config.
pub fn analysis_to_html_with_config(raw: &str, config: &Config) -> String {
    let blocks = format_analysis(raw);
    html::blocks_to_html(&blocks, config)
}
