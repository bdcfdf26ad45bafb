use crate::block::{Block, List, Span};
use crate::config::Config;

/// Convert blocks to HTML markup
pub fn blocks_to_html(blocks: &[Block], config: &Config) -> String {
    let mut out = String::new();

    for block in blocks {
        emit_block(block, config, &mut out);
    }

    out
}

fn emit_block(block: &Block, config: &Config, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            let tag = if *level == 3 { "h3" } else { "h2" };
            out.push('<');
            out.push_str(tag);
            push_class(config.heading.class_for_level(*level), out);
            spans_to_html(content, config, out);
            out.push_str("</");
            out.push_str(tag);
            out.push_str(">\n");
        }
        Block::Paragraph { content } => {
            out.push_str("<p");
            push_class(&config.text.paragraph_class, out);
            spans_to_html(content, config, out);
            out.push_str("</p>\n");
        }
        Block::List(list) => {
            list_to_html(list, config, out);
        }
        Block::Spacer => {
            out.push_str("<div");
            push_class(&config.spacer.class, out);
            out.push_str("</div>\n");
        }
    }
}

fn list_to_html(list: &List, config: &Config, out: &mut String) {
    let (tag, class) = if list.ordered {
        ("ol", &config.list.ordered_class)
    } else {
        ("ul", &config.list.unordered_class)
    };

    out.push('<');
    out.push_str(tag);
    push_class(class, out);
    out.push('\n');
    for item in &list.items {
        out.push_str("<li");
        push_class(&config.list.item_class, out);
        spans_to_html(item, config, out);
        out.push_str("</li>\n");
    }
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn spans_to_html(spans: &[Span], config: &Config, out: &mut String) {
    for span in spans {
        span_to_html(span, config, out);
    }
}

fn span_to_html(span: &Span, config: &Config, out: &mut String) {
    match span {
        Span::Text(text) => escape_html(text, out),
        Span::Bold(text) => {
            out.push_str("<strong");
            push_class(&config.inline.bold_class, out);
            escape_html(text, out);
            out.push_str("</strong>");
        }
        Span::Italic(text) => {
            out.push_str("<em");
            push_class(&config.inline.italic_class, out);
            escape_html(text, out);
            out.push_str("</em>");
        }
        Span::Code(text) => {
            out.push_str("<code");
            push_class(&config.inline.code_class, out);
            escape_html(text, out);
            out.push_str("</code>");
        }
    }
}

/// Close an opening tag with its class attribute.
fn push_class(class: &str, out: &mut String) {
    out.push_str(" class=\"");
    out.push_str(class);
    out.push_str("\">");
}

fn escape_html(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
