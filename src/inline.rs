use regex::Regex;
use std::sync::LazyLock;

use crate::block::Span;

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

#[derive(Debug, Clone, Copy)]
enum Kind {
    Bold,
    Italic,
    Code,
}

/// A candidate format match, byte offsets into the original fragment.
struct Match {
    start: usize,
    end: usize,
    kind: Kind,
    text: String,
}

impl Match {
    fn overlaps(&self, other: &Match) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Resolve inline formatting in a single line or fragment into a flat
/// sequence of runs. Concatenating the run contents reconstructs the
/// fragment with the consumed delimiters removed. Unterminated
/// delimiters stay literal text.
pub fn resolve_inline(fragment: &str) -> Vec<Span> {
    let mut pool = collect(&BOLD_RE, Kind::Bold, fragment);

    // The italic scan sees each `**` as an empty italic pair, so a bold
    // span would be mis-split into two italic delimiters. Empty italic
    // candidates and candidates inside a bold candidate's range are
    // discarded before pooling.
    let italics = collect(&ITALIC_RE, Kind::Italic, fragment);
    for italic in italics {
        if !italic.text.is_empty() && !pool.iter().any(|bold| bold.overlaps(&italic)) {
            pool.push(italic);
        }
    }

    pool.extend(collect(&CODE_RE, Kind::Code, fragment));
    pool.sort_by_key(|m| m.start);

    let mut runs = Vec::new();
    let mut cursor = 0;
    for m in pool {
        // First-sorted-wins: a candidate overlapping something already
        // consumed is dropped.
        if m.start < cursor {
            continue;
        }
        if m.start > cursor {
            runs.push(Span::Text(fragment[cursor..m.start].to_string()));
        }
        runs.push(match m.kind {
            Kind::Bold => Span::Bold(m.text),
            Kind::Italic => Span::Italic(m.text),
            Kind::Code => Span::Code(m.text),
        });
        cursor = m.end;
    }
    if cursor < fragment.len() {
        runs.push(Span::Text(fragment[cursor..].to_string()));
    }
    runs
}

fn collect(re: &Regex, kind: Kind, fragment: &str) -> Vec<Match> {
    let mut matches = Vec::new();
    for caps in re.captures_iter(fragment) {
        if let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) {
            matches.push(Match {
                start: whole.start(),
                end: whole.end(),
                kind,
                text: inner.as_str().to_string(),
            });
        }
    }
    matches
}
