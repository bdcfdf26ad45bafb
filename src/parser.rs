use regex::Regex;
use std::sync::LazyLock;

use crate::block::{Block, List, Span};
use crate::inline::resolve_inline;

static ORDERED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Parse markdown-structured text into a vector of blocks.
pub fn parse(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    let mut state = ParserState::default();
    for line in text.split('\n') {
        scan_line(line, &mut state, &mut blocks);
    }
    state.flush(&mut blocks);
    blocks
}

/// A partially accumulated list. At most one list is open at a time;
/// anything that is not an item of the same orderedness flushes it.
struct PartialList {
    ordered: bool,
    items: Vec<Vec<Span>>,
}

#[derive(Default)]
struct ParserState {
    open_list: Option<PartialList>,
}

impl ParserState {
    fn flush(&mut self, blocks: &mut Vec<Block>) {
        if let Some(list) = self.open_list.take() {
            blocks.push(Block::List(List {
                ordered: list.ordered,
                items: list.items,
            }));
        }
    }

    fn push_item(&mut self, ordered: bool, item: Vec<Span>, blocks: &mut Vec<Block>) {
        // A marker of the other orderedness closes the current list
        if self.open_list.as_ref().is_some_and(|open| open.ordered != ordered) {
            self.flush(blocks);
        }
        self.open_list
            .get_or_insert_with(|| PartialList {
                ordered,
                items: Vec::new(),
            })
            .items
            .push(item);
    }
}

fn scan_line(line: &str, state: &mut ParserState, blocks: &mut Vec<Block>) {
    let line = line.trim_start();

    if line.is_empty() {
        state.flush(blocks);
        blocks.push(Block::Spacer);
    } else if let Some(rest) = line.strip_prefix("## ") {
        state.flush(blocks);
        blocks.push(Block::Heading {
            level: 2,
            content: resolve_inline(rest.trim()),
        });
    } else if let Some(rest) = line.strip_prefix("### ") {
        state.flush(blocks);
        blocks.push(Block::Heading {
            level: 3,
            content: resolve_inline(rest.trim()),
        });
    } else if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        state.push_item(false, resolve_inline(rest.trim()), blocks);
    } else if let Some(marker) = ORDERED_MARKER_RE.find(line) {
        state.push_item(true, resolve_inline(line[marker.end()..].trim()), blocks);
    } else {
        state.flush(blocks);
        blocks.push(Block::Paragraph {
            content: resolve_inline(line.trim_end()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Vec<Span> {
        vec![Span::Text(s.to_string())]
    }

    fn list(ordered: bool, items: &[&str]) -> Block {
        Block::List(List {
            ordered,
            items: items.iter().map(|item| text(item)).collect(),
        })
    }

    #[test]
    fn empty_input_is_empty_document() {
        assert_eq!(parse(""), vec![]);
    }

    #[test]
    fn heading_then_paragraph() {
        assert_eq!(
            parse("## Root Causes\nSome text"),
            vec![
                Block::Heading {
                    level: 2,
                    content: text("Root Causes"),
                },
                Block::Paragraph {
                    content: text("Some text"),
                },
            ]
        );
    }

    #[test]
    fn subheading_level_three() {
        assert_eq!(
            parse("### Fan Motor"),
            vec![Block::Heading {
                level: 3,
                content: text("Fan Motor"),
            }]
        );
    }

    #[test]
    fn list_type_switch_produces_three_lists() {
        assert_eq!(
            parse("- a\n1. b\n- c"),
            vec![
                list(false, &["a"]),
                list(true, &["b"]),
                list(false, &["c"]),
            ]
        );
    }

    #[test]
    fn blank_line_splits_list() {
        assert_eq!(
            parse("- a\n\n- b"),
            vec![list(false, &["a"]), Block::Spacer, list(false, &["b"])]
        );
    }

    #[test]
    fn consecutive_spacers_not_collapsed() {
        assert_eq!(
            parse("a\n\n\nb"),
            vec![
                Block::Paragraph { content: text("a") },
                Block::Spacer,
                Block::Spacer,
                Block::Paragraph { content: text("b") },
            ]
        );
    }

    #[test]
    fn star_and_dash_bullets_share_a_list() {
        assert_eq!(parse("- a\n* b"), vec![list(false, &["a", "b"])]);
    }

    #[test]
    fn ordered_items_accumulate() {
        assert_eq!(parse("1. a\n2. b\n3. c"), vec![list(true, &["a", "b", "c"])]);
    }

    #[test]
    fn open_list_flushed_at_end_of_input() {
        assert_eq!(
            parse("text\n- a\n- b"),
            vec![
                Block::Paragraph {
                    content: text("text"),
                },
                list(false, &["a", "b"]),
            ]
        );
    }

    #[test]
    fn heading_closes_open_list() {
        assert_eq!(
            parse("- a\n## Done"),
            vec![
                list(false, &["a"]),
                Block::Heading {
                    level: 2,
                    content: text("Done"),
                },
            ]
        );
    }

    #[test]
    fn bare_marker_yields_empty_item() {
        assert_eq!(
            parse("- "),
            vec![Block::List(List {
                ordered: false,
                items: vec![vec![]],
            })]
        );
    }

    #[test]
    fn trailing_newline_becomes_spacer() {
        assert_eq!(
            parse("a\n"),
            vec![Block::Paragraph { content: text("a") }, Block::Spacer]
        );
    }

    #[test]
    fn indented_and_padded_lines_are_trimmed() {
        assert_eq!(
            parse("   ## Heading  \n  plain text  "),
            vec![
                Block::Heading {
                    level: 2,
                    content: text("Heading"),
                },
                Block::Paragraph {
                    content: text("plain text"),
                },
            ]
        );
    }

    #[test]
    fn list_items_resolve_inline_formatting() {
        assert_eq!(
            parse("- check the **compressor**"),
            vec![Block::List(List {
                ordered: false,
                items: vec![vec![
                    Span::Text("check the ".to_string()),
                    Span::Bold("compressor".to_string()),
                ]],
            })]
        );
    }

    #[test]
    fn number_without_trailing_space_is_a_paragraph() {
        assert_eq!(
            parse("1.5 tons of cooling"),
            vec![Block::Paragraph {
                content: text("1.5 tons of cooling"),
            }]
        );
    }
}
