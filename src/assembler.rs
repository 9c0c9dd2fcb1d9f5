// 🧩 Name Assembler - ordered tokens → structured PersonName
//
// Two jobs:
// 1. reverse_last_first: "Smith, Tom II" → "Tom Smith II"
// 2. new_from_tokens: consume from the tail (honorific, suffix, nickname,
//    last) and hand whatever is left to first/middle

use crate::classifier;
use crate::extraction;
use crate::names::PersonName;

// ============================================================================
// REORDERING
// ============================================================================

/// Turn "last, first middle" into "first middle last".
///
/// Any suffix is pulled out first and re-appended at the end so it never
/// lands in the middle. A trailing part that is itself a suffix does not
/// trigger the swap, unless the name is only two parts long ("SIMPSON, VI"
/// is a given name, not a numeral).
pub fn reverse_last_first(name: &str) -> String {
    let (name, suffix) = extraction::extract_suffix(name);

    let mut parts: Vec<&str> = name
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let ends_with_suffix = extraction::part_count(&name) > 2
        && parts.last().is_some_and(|part| classifier::is_suffix(part));
    if parts.len() >= 2 && !ends_with_suffix {
        parts.reverse();
    }

    if let Some(suffix) = suffix.as_deref() {
        parts.push(suffix);
    }

    parts.join(" ")
}

// ============================================================================
// TOKEN ASSEMBLY
// ============================================================================

/// Merge the first family-name prefix with the token that follows it:
/// ["Albert", "J", "La", "Mere"] → ["Albert", "J", "La Mere"].
///
/// A prefix in the leading position is a given name ("Van Morrison") and
/// a prefix with nothing after it is a surname ("Quoc Van"). Only the first
/// match is joined.
pub fn join_family_prefix(tokens: Vec<String>) -> Vec<String> {
    let join_at = tokens
        .iter()
        .enumerate()
        .skip(1)
        .position(|(i, token)| i + 1 < tokens.len() && classifier::is_family_prefix(token))
        .map(|pos| pos + 1);

    let Some(index) = join_at else {
        return tokens;
    };

    let mut joined = Vec::with_capacity(tokens.len() - 1);
    let mut iter = tokens.into_iter();
    joined.extend(iter.by_ref().take(index));
    if let (Some(prefix), Some(follower)) = (iter.next(), iter.next()) {
        joined.push(format!("{prefix} {follower}"));
    }
    joined.extend(iter);
    joined
}

/// Assign structured fields from an ordered token list.
///
/// Accepted shapes (caller re-appends extracted affixes at the end):
///   first [middle...] last [nick] [suffix] [honorific]
///   last
///
/// One to three leftover tokens become first / first+middle /
/// first+two-word middle. More than that leaves `first` empty so the
/// caller sees an incomplete parse.
pub fn new_from_tokens<I, S>(tokens: I) -> PersonName
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<String> = tokens
        .into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty() && !t.starts_with('('))
        .collect();
    let mut tokens = join_family_prefix(tokens);

    let honorific = pop_if(&mut tokens, classifier::is_honorific);
    let suffix = pop_if(&mut tokens, classifier::is_suffix);
    let nickname = pop_if(&mut tokens, classifier::is_nickname_marker);
    let Some(last) = tokens.pop() else {
        return PersonName::default();
    };

    let mut name = match tokens.as_slice() {
        [] => PersonName::last_only(&last),
        [first] => PersonName::new(first, &last),
        [first, middle] => PersonName::new(first, &last).with_middle(middle),
        [first, middle @ ..] if middle.len() == 2 => {
            PersonName::new(first, &last).with_middle(&middle.join(" "))
        }
        _ => PersonName::last_only(&last),
    };

    if let Some(honorific) = honorific {
        name = name.with_honorific(&honorific);
    }
    if let Some(suffix) = suffix {
        name = name.with_suffix(&suffix);
    }
    if let Some(nickname) = nickname {
        name = name.with_nickname(&nickname);
    }

    name
}

fn pop_if(tokens: &mut Vec<String>, predicate: fn(&str) -> bool) -> Option<String> {
    if tokens.last().is_some_and(|t| predicate(t)) {
        tokens.pop()
    } else {
        None
    }
}
