// 👤 PersonName - structured individual name
//
// Built by the assembler from a token list, cased once by
// `case_name_parts`, then left alone.

use super::casing::{is_mixed_case, title_case, uppercase_the_scots};
use crate::classifier;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonName {
    #[serde(skip_serializing_if = "Option::is_none")]
    honorific: Option<String>,
    first: Option<String>,
    middle: Option<String>,
    last: String,
    suffix: Option<String>,
    #[serde(rename = "nick", skip_serializing_if = "Option::is_none")]
    nickname: Option<String>,
}

impl PersonName {
    /// Create a name from its two required parts
    pub fn new(first: &str, last: &str) -> Self {
        PersonName {
            first: clean_option(Some(first)),
            last: last.trim().to_string(),
            ..PersonName::default()
        }
    }

    /// A name with nothing but a surname ("LEE")
    pub fn last_only(last: &str) -> Self {
        PersonName {
            last: last.trim().to_string(),
            ..PersonName::default()
        }
    }

    pub fn with_middle(mut self, middle: &str) -> Self {
        self.middle = clean_option(Some(middle));
        self
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = clean_option(Some(suffix));
        self
    }

    pub fn with_honorific(mut self, honorific: &str) -> Self {
        self.honorific = clean_option(Some(honorific));
        self
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.nickname = clean_option(Some(nickname));
        self
    }

    pub fn honorific(&self) -> Option<&str> {
        self.honorific.as_deref()
    }

    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    pub fn middle(&self) -> Option<&str> {
        self.middle.as_deref()
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Both first and last present - the success bar for a full parse
    pub fn has_first_and_last(&self) -> bool {
        self.first.is_some() && !self.last.is_empty()
    }

    /// `[first, last]`, or `[first, middle, last]` with `include_middle`.
    /// Missing parts are left out.
    pub fn primary_name_parts(&self, include_middle: bool) -> Vec<&str> {
        let middle = if include_middle {
            self.middle.as_deref()
        } else {
            None
        };

        [self.first.as_deref(), middle, Some(self.last.as_str())]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect()
    }

    pub fn is_mixed_case(&self) -> bool {
        is_mixed_case(self.primary_name_parts(false))
    }

    /// Normalize case unless the source already looks deliberately cased
    /// ("Antonio dAlesio" stays as is). Single-letter initials get their
    /// period either way.
    pub fn case_name_parts(mut self) -> Self {
        if !self.is_mixed_case() {
            self.honorific = self.honorific.map(|h| title_case(&h));
            self.nickname = self.nickname.map(|n| title_case(&n));
            self.first = self
                .first
                .map(|f| capitalize_and_punctuate_initials(&title_case(&f)));
            self.middle = self.middle.map(|m| title_case(&m));
            self.last = uppercase_the_scots(&title_case(&self.last));
            self.suffix = self.suffix.map(|s| {
                if classifier::is_generational(&s) {
                    title_case(&s)
                } else {
                    s.to_uppercase()
                }
            });
        }

        self.first = self.first.map(|f| punctuate_initials(&f));
        self.middle = self.middle.map(|m| punctuate_initials(&m));

        self
    }

    /// Canonical display form. Only "Mrs." survives as an honorific and the
    /// nickname is never shown.
    pub fn render(&self) -> String {
        let honorific = self
            .honorific
            .as_deref()
            .filter(|h| classifier::is_allowed_honorific(h));

        [
            honorific,
            self.first.as_deref(),
            self.middle.as_deref(),
            Some(self.last.as_str()),
            self.suffix.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn clean_option(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// "Bl" → "B.L."; "C." and "Bob" untouched
fn capitalize_and_punctuate_initials(first: &str) -> String {
    if classifier::is_only_initials(first) && !first.contains('.') {
        return first
            .chars()
            .flat_map(char::to_uppercase)
            .map(|c| format!("{c}."))
            .collect();
    }
    first.to_string()
}

/// Single-letter words get a period: "Swift Eagle" unchanged, "M" → "M."
fn punctuate_initials(part: &str) -> String {
    part.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_alphabetic() => format!("{word}."),
                _ => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
