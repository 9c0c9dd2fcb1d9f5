// 🔠 Case helpers shared by every name kind

use regex::Regex;
use std::sync::LazyLock;

/// Mac/Mc prefix followed by at least two more word characters
static SCOTTISH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(ma?c)(\w)\w+").unwrap());

/// Upper followed by lower anywhere means the source was already cased
static MIXED_CASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Lu}\p{Ll}").unwrap());

static POSSESSIVE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+)'S\b").unwrap());

/// Upper-case the first letter of every run of letters, lower-case the rest.
///
/// Any non-letter starts a new run, so "o'leary" → "O'Leary" and
/// "non-profit" → "Non-Profit".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }

    out
}

/// "Macdonald" → "MacDonald", "Mcdonnell" → "McDonnell".
/// Skips "Machinists" and friends (prefix followed by "hin").
pub fn uppercase_the_scots(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last = 0;

    for caps in SCOTTISH_RE.captures_iter(name) {
        let (Some(prefix), Some(letter)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if name[prefix.end()..].to_lowercase().starts_with("hin") {
            continue;
        }

        out.push_str(&name[last..prefix.start()]);
        out.push_str(&title_case(prefix.as_str()));
        out.extend(letter.as_str().chars().flat_map(char::to_uppercase));
        last = letter.end();
    }

    out.push_str(&name[last..]);
    out
}

/// Undo title-casing artifacts like "Women'S"
pub fn fix_case_for_possessives(name: &str) -> String {
    POSSESSIVE_RE.replace_all(name, "${1}'s").into_owned()
}

pub fn is_mixed_case<'a>(parts: impl IntoIterator<Item = &'a str>) -> bool {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .any(|part| MIXED_CASE_RE.is_match(part))
}
