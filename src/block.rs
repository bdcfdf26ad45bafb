use serde::{Deserialize, Serialize};

/// Inline text runs with formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
}

/// A list (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<Vec<Span>>,
}

/// Block-level elements parsed from analysis text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Heading {
        level: u8,
        content: Vec<Span>,
    },
    Paragraph {
        content: Vec<Span>,
    },
    List(List),
    /// A blank source line, rendered as vertical whitespace
    Spacer,
}
