// 🔤 Token Classifier - what is this isolated token?
// Pure predicates over one whitespace-delimited token, case-insensitive.

use regex::Regex;
use std::sync::LazyLock;

// ============================================================================
// PATTERNS
// ============================================================================

/// Mr, Mrs, Ms, Dr with optional trailing `.` or `,`
static HONORIFIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*[dm][rs]s?[.,]?\s*$").unwrap());

/// Jr / Sr (optional period) or a roman numeral of at least two characters
static SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[js]r\.?|[ivx]{2,})$").unwrap());

/// Jr / Sr anywhere in the token, used to pick title case over upper case
static GENERATIONAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)[js]r").unwrap());

/// Academic / professional credentials: M.D., Ph.D., J.D. and their dotless forms
static DEGREE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:m\.?d|ph\.?d|j\.?d)\.?$").unwrap());

/// Particles that attach to the following token to form a compound surname
pub const FAMILY_NAME_PREFIXES: [&str; 6] = ["de", "di", "du", "la", "van", "von"];

/// Honorifics that survive into the rendered name
pub const ALLOWED_HONORIFICS: [&str; 2] = ["mrs", "mrs."];

// ============================================================================
// PREDICATES
// ============================================================================

pub fn is_honorific(token: &str) -> bool {
    HONORIFIC_RE.is_match(token)
}

/// Generational suffix or roman numeral. Degrees are not suffixes.
pub fn is_suffix(token: &str) -> bool {
    SUFFIX_RE.is_match(token.trim())
}

pub fn is_generational(suffix: &str) -> bool {
    GENERATIONAL_RE.is_match(suffix)
}

pub fn is_degree(token: &str) -> bool {
    DEGREE_RE.is_match(token.trim())
}

/// Nicknames must be double-quoted. Parenthetical tokens are annotations,
/// not nicknames, and never match here.
pub fn is_nickname_marker(token: &str) -> bool {
    let token = token.trim();
    token.chars().count() >= 2 && token.starts_with('"') && token.ends_with('"')
}

pub fn is_family_prefix(token: &str) -> bool {
    FAMILY_NAME_PREFIXES
        .iter()
        .any(|prefix| token.eq_ignore_ascii_case(prefix))
}

pub fn is_allowed_honorific(honorific: &str) -> bool {
    ALLOWED_HONORIFICS
        .iter()
        .any(|allowed| honorific.trim().eq_ignore_ascii_case(allowed))
}

/// "BL", "JR", "C." - two or three characters, no vowels
pub fn is_only_initials(token: &str) -> bool {
    let len = token.chars().count();
    (2..=3).contains(&len)
        && token
            .chars()
            .all(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honorifics() {
        for token in ["Mr", "MR.", "mrs", "Ms,", "Dr.", " dr "] {
            assert!(is_honorific(token), "{token} should be an honorific");
        }
        assert!(!is_honorific("Drew"));
        assert!(!is_honorific("Mister"));
        assert!(!is_honorific("MD"));
    }

    #[test]
    fn test_suffixes() {
        for token in ["Jr", "jr.", "SR", "II", "iv", "IX", "XIV"] {
            assert!(is_suffix(token), "{token} should be a suffix");
        }
        assert!(!is_suffix("I"));
        assert!(!is_suffix("Vickers"));
        assert!(!is_suffix("M.D."));
    }

    #[test]
    fn test_degrees_are_not_suffixes() {
        for token in ["M.D.", "MD", "md", "Ph.D.", "PHD", "J.D.", "JD"] {
            assert!(is_degree(token), "{token} should be a degree");
            assert!(!is_suffix(token));
        }
        assert!(!is_degree("Mad"));
    }

    #[test]
    fn test_nickname_requires_double_quotes() {
        assert!(is_nickname_marker("\"Tripp\""));
        assert!(is_nickname_marker("\"Big Jim\""));
        assert!(!is_nickname_marker("(Bob)"));
        assert!(!is_nickname_marker("\""));
        assert!(!is_nickname_marker("Bob"));
    }

    #[test]
    fn test_family_prefixes() {
        assert!(is_family_prefix("De"));
        assert!(is_family_prefix("VAN"));
        assert!(is_family_prefix("la"));
        assert!(!is_family_prefix("Del"));
    }

    #[test]
    fn test_generational_and_initials() {
        assert!(is_generational("Jr"));
        assert!(is_generational("SR"));
        assert!(!is_generational("III"));

        assert!(is_only_initials("BL"));
        assert!(is_only_initials("C."));
        assert!(!is_only_initials("Vi"));
        assert!(!is_only_initials("T"));
        assert!(!is_only_initials("Bob"));
    }

    #[test]
    fn test_allowed_honorifics() {
        assert!(is_allowed_honorific("Mrs."));
        assert!(is_allowed_honorific("MRS"));
        assert!(!is_allowed_honorific("Mr."));
        assert!(!is_allowed_honorific("Dr."));
    }
}
