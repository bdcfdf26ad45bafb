use regex::Regex;
use std::sync::LazyLock;

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d+\.\s*)(PRIMARY DIAGNOSIS|ROOT CAUSES|IMMEDIATE ACTIONS|SAFETY WARNINGS|REPAIR ESTIMATE):",
    )
    .unwrap()
});
static SUBSECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(-\s*)(Compressor Failure|Refrigerant Leak|Electrical Issues|Fan Motor|Control Board)")
        .unwrap()
});
static LIKELIHOOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\((\d+%\s*likelihood)\)").unwrap());
static TOOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(multimeter|manifold gauge|leak detector|ohmmeter)").unwrap());
static SAFETY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(Always|Never|Caution|Warning|Important)").unwrap());
static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+-\d+\s*hours?)").unwrap());
static INLINE_BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s*-\s*").unwrap());
static INLINE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s*(\d+\.)").unwrap());

/// Rewrite raw analysis text into the markdown dialect the parser
/// understands. Stages run in a fixed order; each operates on the
/// output of the previous one.
pub fn preprocess(raw: &str) -> String {
    const STAGES: [fn(&str) -> String; 8] = [
        inject_section_headings,
        inject_subsection_headings,
        bold_likelihood,
        code_tool_names,
        bold_safety_words,
        bold_time_estimates,
        split_inline_bullets,
        split_inline_numbering,
    ];

    let mut text = raw.to_owned();
    for stage in STAGES {
        text = stage(&text);
    }
    text
}

/// `1. PRIMARY DIAGNOSIS:` and friends become level-2 headings on their
/// own line; the numeric prefix is dropped.
fn inject_section_headings(text: &str) -> String {
    SECTION_RE.replace_all(text, "\n## ${2}\n\n").into_owned()
}

/// Known failure-mode names after a bullet become level-3 headings.
fn inject_subsection_headings(text: &str) -> String {
    SUBSECTION_RE.replace_all(text, "\n### ${2}\n\n").into_owned()
}

fn bold_likelihood(text: &str) -> String {
    LIKELIHOOD_RE.replace_all(text, " **(${1})**").into_owned()
}

fn code_tool_names(text: &str) -> String {
    TOOL_RE.replace_all(text, "`${1}`").into_owned()
}

fn bold_safety_words(text: &str) -> String {
    SAFETY_RE.replace_all(text, "**${1}**").into_owned()
}

fn bold_time_estimates(text: &str) -> String {
    HOURS_RE.replace_all(text, "**${1}**").into_owned()
}

/// A bullet glued onto the end of a sentence gets its own line.
fn split_inline_bullets(text: &str) -> String {
    INLINE_BULLET_RE.replace_all(text, ".\n\n- ").into_owned()
}

/// A numbered item glued onto the end of a sentence gets its own line.
/// The digits are kept so the parser still sees an ordered marker.
fn split_inline_numbering(text: &str) -> String {
    INLINE_NUMBER_RE.replace_all(text, ".\n\n${1}").into_owned()
}
