// 🏢 OrganizationName - never decomposed, only transformed
//
// Derived views:
// - expand():  abbreviations spelled out ("Co." → "Company")
// - kernel():  stop-words and abbreviations dropped, for fuzzy comparison
// - crp_style_firm_name(): "first, second, et al" truncated firm listing

use super::casing::{fix_case_for_possessives, is_mixed_case, title_case, uppercase_the_scots};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

// ============================================================================
// LOOKUP TABLES
// ============================================================================

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("acad", "Academy"),
    ("assns", "Associations"),
    ("assn", "Association"),
    ("cmte", "Committee"),
    ("cltn", "Coalition"),
    ("inst", "Institute"),
    ("corp", "Corporation"),
    ("co", "Company"),
    ("fedn", "Federation"),
    ("fed", "Federal"),
    ("fzco", "Company"),
    ("usa", "USA"),
    ("us", "United States"),
    ("dept", "Department"),
    ("assoc", "Associates"),
    ("natl", "National"),
    ("nat'l", "National"),
    ("intl", "International"),
    ("inc", "Incorporated"),
    ("llc", "LLC"),
    ("llp", "LLP"),
    ("lp", "LP"),
    ("plc", "PLC"),
    ("ltd", "Limited"),
    ("univ", "University"),
    ("colls", "Colleges"),
    ("coll", "College"),
    ("amer", "American"),
    ("ed", "Educational"),
];

const FILLER_WORDS: [&str; 6] = ["The", "And", "Of", "In", "For", "Group"];

/// Lower-cased expansions plus filler words
static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    ABBREVIATIONS
        .iter()
        .map(|(_, expanded)| *expanded)
        .chain(FILLER_WORDS)
        .map(str::to_lowercase)
        .collect()
});

fn expand_abbreviation(word: &str) -> Option<&'static str> {
    let lower = word.to_lowercase();
    ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == lower)
        .map(|(_, expanded)| *expanded)
}

// ============================================================================
// PATTERNS
// ============================================================================

/// Closing paren optional - long names get truncated mid-annotation
static TRAILING_PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)?\s*$").unwrap());

static FORMERLY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s* formerly.*$").unwrap());

static AFFILIATES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*and its affiliates$").unwrap());

static ET_AL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bet al\b").unwrap());

/// Everything after a hyphen, once at least four word characters precede it
static AFTER_HYPHEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w{4,})-+.*$").unwrap());

static PUNCTUATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,.*:;+]").unwrap());

static UNITED_STATES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*United States").unwrap());

static SINGLE_WORD_PAC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\w*PAC$").unwrap());

static PAC_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bpac\b").unwrap());

// ============================================================================
// ORGANIZATION NAME
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizationName {
    name: String,
}

impl OrganizationName {
    pub fn new(name: &str) -> Self {
        OrganizationName {
            name: name.trim().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_name_parts(&self) -> Vec<String> {
        vec![self.without_extra_phrases()]
    }

    pub fn is_mixed_case(&self) -> bool {
        is_mixed_case(self.primary_name_parts().iter().map(String::as_str))
    }

    pub fn case_name_parts(mut self) -> Self {
        if self.is_mixed_case() {
            return self;
        }

        let mut name = uppercase_the_scots(&title_case(&self.name));
        name = if SINGLE_WORD_PAC_RE.is_match(&name) {
            name.to_uppercase()
        } else {
            PAC_WORD_RE.replace_all(&name, "PAC").into_owned()
        };
        self.name = fix_case_for_possessives(&name);

        self
    }

    /// Drop trailing parentheticals, "formerly ..." clauses,
    /// "and its affiliates", "et al" and anything after a late hyphen.
    pub fn without_extra_phrases(&self) -> String {
        let name = TRAILING_PARENTHETICAL_RE.replace(&self.name, "");
        let name = FORMERLY_RE.replace(&name, "");
        let name = AFFILIATES_RE.replace(&name, "");
        let name = ET_AL_RE.replace_all(&name, "");
        AFTER_HYPHEN_RE.replace(&name, "${1}").trim().to_string()
    }

    pub fn without_punctuation(&self) -> String {
        let name = self.without_extra_phrases().replace('/', " ");
        PUNCTUATION_RE.replace_all(&name, "").into_owned()
    }

    pub fn expand(&self) -> String {
        self.without_punctuation()
            .split_whitespace()
            .map(|word| expand_abbreviation(word).unwrap_or(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Just the pithy words of the name
    pub fn kernel(&self) -> String {
        let kernel = self
            .expand()
            .split_whitespace()
            .filter(|word| !STOP_WORDS.contains(&word.to_lowercase()))
            .collect::<Vec<_>>()
            .join(" ");

        // "United States" is the only two-word stop phrase
        UNITED_STATES_RE.replace_all(&kernel, "").trim().to_string()
    }

    /// Law and lobbying firms are often listed by their first two partners
    pub fn crp_style_firm_name(&self, with_et_al: bool) -> String {
        let kernel = self.kernel();
        let mut parts: Vec<&str> = kernel.split_whitespace().take(2).collect();
        if with_et_al {
            parts.push("et al");
        }
        parts.join(", ")
    }

    pub fn render(&self) -> String {
        self.name.clone()
    }
}

impl fmt::Display for OrganizationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
