// ✂️ Affix Extraction Pipeline
// Peels honorific, suffix, junk numbers and nickname off a raw name,
// leaving a bare name plus the extracted pieces.
//
// Order matters: later passes assume earlier ones already removed noise.
// Every pass is total - no match means the name comes back unchanged
// together with `None`.

use crate::classifier;
use regex::Regex;
use std::sync::LazyLock;

// ============================================================================
// PATTERNS
// ============================================================================

static PAREN_PADDING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*([^)]*?)\s*\)").unwrap());

/// "LAY, KENNETH L MR & MRS" - second honorific with no paired name
static TRAILING_AND_MRS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*&\s*mrs\.?$").unwrap());

/// "(COP CONT )", "(CONT'D)" - closing paren optional, these get truncated
static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)?").unwrap());

static HONORIFIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[dm][rs]s?\b[.,]?").unwrap());

/// Generational suffixes, roman numerals and degrees in one pass;
/// degrees are filtered out afterwards.
static SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:[js]r|[ivx]{2,}|m\.?d|ph\.?d|j\.?d)\b\.?").unwrap()
});

static JUNK_NUMBERS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{2,}\b").unwrap());

static NICKNAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]*""#).unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static SPACE_BEFORE_COMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+,").unwrap());

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Pieces peeled off the raw name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affixes {
    pub honorific: Option<String>,
    pub suffix: Option<String>,
    pub nickname: Option<String>,
}

/// Bare name plus everything extracted from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub bare: String,
    pub affixes: Affixes,
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Collapse padding inside parentheses, drop a trailing "& Mrs" and strip
/// parenthetical annotations that are neither nickname nor name.
pub fn pre_process(name: &str) -> String {
    let name = PAREN_PADDING_RE.replace_all(name.trim(), "(${1})");
    let name = TRAILING_AND_MRS_RE.replace(&name, "");
    let name = PARENTHETICAL_RE.replace_all(&name, "");
    tidy(&name)
}

/// Run all extraction passes in order on an already pre-processed name.
pub fn separate_affixes(name: &str) -> Extracted {
    let (name, honorific) = extract_honorific(name);
    let (name, suffix) = extract_suffix(&name);
    let (name, _junk) = extract_junk_numbers(&name);
    let (name, nickname) = extract_nickname(&name);
    let bare = trim_trailing_punctuation(&name);

    Extracted {
        bare,
        affixes: Affixes {
            honorific,
            suffix,
            nickname,
        },
    }
}

/// Honorific is normalized to end with a period: "MR" → "MR.", "Dr," → "Dr."
pub fn extract_honorific(name: &str) -> (String, Option<String>) {
    let (name, honorific) = extract_first(&HONORIFIC_RE, name);
    let honorific = honorific.map(|h| {
        let h = h.trim_end_matches(',');
        if h.ends_with('.') {
            h.to_string()
        } else {
            format!("{h}.")
        }
    });
    (name, honorific)
}

/// Generational suffix or roman numeral, periods removed.
///
/// Only attempted while the name has more than two parts, so "SIMPSON, VI"
/// and "RESKOVAC, JR" keep their short given names. Degrees matched along
/// the way are dropped entirely.
pub fn extract_suffix(name: &str) -> (String, Option<String>) {
    let mut name = name.to_string();

    while part_count(&name) > 2 {
        let (rest, found) = extract_first(&SUFFIX_RE, &name);
        let Some(found) = found else {
            break;
        };
        name = rest;

        if classifier::is_degree(&found) {
            continue;
        }
        return (name, Some(found.replace('.', "")));
    }

    (name, None)
}

/// Standalone runs of two or more digits, e.g. internal record ids
pub fn extract_junk_numbers(name: &str) -> (String, Option<String>) {
    extract_first(&JUNK_NUMBERS_RE, name)
}

/// Double-quoted nickname, quotes included
pub fn extract_nickname(name: &str) -> (String, Option<String>) {
    extract_first(&NICKNAME_RE, name)
}

/// Drop a single trailing non-alphanumeric character
pub fn trim_trailing_punctuation(name: &str) -> String {
    let name = name.trim();
    match name.chars().last() {
        Some(c) if !c.is_alphanumeric() => name[..name.len() - c.len_utf8()].trim_end().to_string(),
        _ => name.to_string(),
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Remove the first match of `pattern`, returning the rest and the match.
fn extract_first(pattern: &Regex, name: &str) -> (String, Option<String>) {
    match pattern.find(name) {
        Some(m) => {
            let rest = format!("{} {}", &name[..m.start()], &name[m.end()..]);
            (tidy(&rest), Some(m.as_str().to_string()))
        }
        None => (name.to_string(), None),
    }
}

/// Collapse whitespace runs and remove spaces left dangling before commas
pub fn tidy(name: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(name, " ");
    SPACE_BEFORE_COMMA_RE
        .replace_all(&collapsed, ",")
        .trim()
        .to_string()
}

pub(crate) fn part_count(name: &str) -> usize {
    name.split_whitespace().count()
}

// ============================================================================
// TESTS
// ============================================================================
