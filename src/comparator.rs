// ⚖️ Name Comparator - weighted scores for "are these the same entity?"
// Scores are heuristics, not distances: unbounded, not normalized.

use crate::names::{OrganizationName, PersonName};
use crate::nicknames;

// ============================================================================
// WEIGHTS
// ============================================================================

const LAST_MATCH: f64 = 1.0;
const FIRST_MATCH: f64 = 1.0;
const FIRST_NICKNAME_MATCH: f64 = 0.6;
const FIRST_MIDDLE_SWAPPED: f64 = 0.8;
const FIRST_INITIAL_MATCH: f64 = 0.1;

/// Middle names only count for much once first + last already agree
const STRONG_MATCH_THRESHOLD: f64 = 1.1;
const MIDDLE_MATCH: f64 = 1.0;
const MIDDLE_INITIAL_MATCH: f64 = 0.5;
const MIDDLE_MISMATCH: f64 = -1.5;
const MIDDLE_PRESENT: f64 = 0.2;

pub const ORG_EXPANDED_MATCH: f64 = 4.0;
pub const ORG_KERNEL_MATCH: f64 = 3.0;
pub const ORG_NO_STRONG_MATCH: f64 = 2.0;

// ============================================================================
// PEOPLE
// ============================================================================

/// Score two people. A differing last name is disqualifying (0).
pub fn compare_persons(a: &PersonName, b: &PersonName) -> f64 {
    if a.last() != b.last() {
        return 0.0;
    }

    let mut score = LAST_MATCH + first_name_score(a, b);

    if let (Some(middle_a), Some(middle_b)) = (a.middle(), b.middle()) {
        score += if score > STRONG_MATCH_THRESHOLD {
            middle_name_score(middle_a, middle_b)
        } else {
            MIDDLE_PRESENT
        };
    }

    score
}

fn first_name_score(a: &PersonName, b: &PersonName) -> f64 {
    let (Some(first_a), Some(first_b)) = (a.first(), b.first()) else {
        return 0.0;
    };

    if first_a == first_b {
        FIRST_MATCH
    } else if nicknames::are_nickname_equivalent(first_a, first_b) {
        FIRST_NICKNAME_MATCH
    } else if a.middle() == Some(first_b) && b.middle() == Some(first_a) {
        FIRST_MIDDLE_SWAPPED
    } else if same_initial(first_a, first_b) {
        FIRST_INITIAL_MATCH
    } else {
        0.0
    }
}

fn middle_name_score(a: &str, b: &str) -> f64 {
    if a == b {
        MIDDLE_MATCH
    } else if same_initial(a, b) {
        MIDDLE_INITIAL_MATCH
    } else {
        MIDDLE_MISMATCH
    }
}

fn same_initial(a: &str, b: &str) -> bool {
    match (a.chars().next(), b.chars().next()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

// ============================================================================
// ORGANIZATIONS
// ============================================================================

/// Tiered score: 4 expanded match, 3 kernel or firm-listing match, else 2.
///
/// `subject` may be a CRP-style partner listing ("Akin, Gump, et al"), in
/// which case it is checked against `candidate`'s truncated firm name.
pub fn compare_organizations(candidate: &OrganizationName, subject: &OrganizationName) -> f64 {
    if candidate.expand().to_lowercase() == subject.expand().to_lowercase() {
        return ORG_EXPANDED_MATCH;
    }
    if candidate.kernel().to_lowercase() == subject.kernel().to_lowercase() {
        return ORG_KERNEL_MATCH;
    }
    if subject.name().contains(',')
        && candidate.crp_style_firm_name(true).to_lowercase() == subject.name().to_lowercase()
    {
        return ORG_KERNEL_MATCH;
    }
    ORG_NO_STRONG_MATCH
}
