// 🪓 Cleavers - raw string → parsed, cased name
//
// One cleaver per name kind, all behind the `NameCleaver` trait:
// - IndividualNameCleaver: pre-process → affixes → reorder → assemble → case
// - PoliticianNameCleaver: strips the party annotation, detects tickets
// - OrganizationNameCleaver: trim + case, nothing is decomposed
//
// Failure policy lives in one place (`cannot_parse`): strict callers get
// `UnparseableName`, safe callers get their input back untouched.

use crate::assembler;
use crate::classifier;
use crate::config::{CleaverOptions, NameKind};
use crate::error::{CleaverError, CleaverResult};
use crate::extraction::{self, Extracted};
use crate::names::{
    Cleaved, OrganizationName, ParsedName, ParsedPolitician, PersonName, PoliticianName,
    RunningMatesNames,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// "(D)", "(R-OH)", "(3)" at the very end of a politician name
static PARTY_ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]+\)\s*$").unwrap());

static RUNNING_MATES_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[&/]\s*").unwrap());

// ============================================================================
// PIPELINE STAGES
// ============================================================================

/// Named checkpoints for debug logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PreProcessed,
    AffixesSeparated,
    Reordered,
    Assembled,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::PreProcessed => "pre_processed",
            Stage::AffixesSeparated => "affixes_separated",
            Stage::Reordered => "reordered",
            Stage::Assembled => "assembled",
        }
    }
}

// ============================================================================
// CLEAVER TRAIT
// ============================================================================

pub trait NameCleaver {
    type Output;

    fn raw(&self) -> &str;
    fn options(&self) -> CleaverOptions;

    /// Parse into `Parsed`, or report failure per the options.
    fn parse(&self) -> CleaverResult<Cleaved<Self::Output>>;
}

/// Safe mode hands back the input; strict mode raises.
fn cannot_parse<T>(raw: &str, options: CleaverOptions) -> CleaverResult<Cleaved<T>> {
    if options.safe {
        warn!(raw, "couldn't parse name, passing input through");
        Ok(Cleaved::Passthrough(raw.to_string()))
    } else {
        debug!(raw, "couldn't parse name");
        Err(CleaverError::unparseable(raw))
    }
}

// ============================================================================
// INDIVIDUALS
// ============================================================================

#[derive(Debug, Clone)]
pub struct IndividualNameCleaver<'a> {
    raw: &'a str,
    options: CleaverOptions,
}

impl<'a> IndividualNameCleaver<'a> {
    pub fn new(raw: &'a str) -> Self {
        IndividualNameCleaver {
            raw,
            options: CleaverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CleaverOptions) -> Self {
        self.options = options;
        self
    }
}

impl NameCleaver for IndividualNameCleaver<'_> {
    type Output = PersonName;

    fn raw(&self) -> &str {
        self.raw
    }

    fn options(&self) -> CleaverOptions {
        self.options
    }

    fn parse(&self) -> CleaverResult<Cleaved<PersonName>> {
        if self.raw.trim().is_empty() {
            return Ok(Cleaved::Empty);
        }

        match cleave_person(self.raw) {
            Some(person) => Ok(Cleaved::Parsed(person.case_name_parts())),
            None => cannot_parse(self.raw, self.options),
        }
    }
}

/// Run the individual pipeline up to (not including) casing.
///
/// `None` when the result has no first name or no letters in the last
/// name, or when a single bare token is not a surname.
fn cleave_person(raw: &str) -> Option<PersonName> {
    let trimmed = raw.trim();
    if !trimmed.contains(char::is_whitespace) {
        return bare_last_name(trimmed);
    }

    let name = extraction::pre_process(trimmed);
    debug!(stage = Stage::PreProcessed.as_str(), name = %name);

    let Extracted { bare, affixes } = extraction::separate_affixes(&name);
    debug!(
        stage = Stage::AffixesSeparated.as_str(),
        bare = %bare,
        honorific = ?affixes.honorific,
        suffix = ?affixes.suffix,
        nickname = ?affixes.nickname,
    );

    let reordered = assembler::reverse_last_first(&bare);
    debug!(stage = Stage::Reordered.as_str(), name = %reordered);

    // Affixes go back on the tail in the order the assembler pops them
    let tokens = reordered
        .split_whitespace()
        .map(str::to_string)
        .chain(
            [affixes.nickname, affixes.suffix, affixes.honorific]
                .into_iter()
                .flatten(),
        );
    let person = assembler::new_from_tokens(tokens);
    debug!(stage = Stage::Assembled.as_str(), person = ?person);

    let has_letters = person.last().chars().any(char::is_alphabetic);
    (has_letters && person.has_first_and_last()).then_some(person)
}

/// "LEE" → surname only. Honorifics, suffixes, degrees and tokens without
/// a single letter ("12", "--") are not names.
fn bare_last_name(token: &str) -> Option<PersonName> {
    let last = extraction::trim_trailing_punctuation(token);
    if !last.chars().any(char::is_alphabetic)
        || classifier::is_honorific(token)
        || classifier::is_suffix(&last)
        || classifier::is_degree(token)
    {
        debug!(token, "bare token is not a surname");
        return None;
    }
    Some(PersonName::last_only(&last))
}

// ============================================================================
// POLITICIANS
// ============================================================================

#[derive(Debug, Clone)]
pub struct PoliticianNameCleaver<'a> {
    raw: &'a str,
    options: CleaverOptions,
}

impl<'a> PoliticianNameCleaver<'a> {
    pub fn new(raw: &'a str) -> Self {
        PoliticianNameCleaver {
            raw,
            options: CleaverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CleaverOptions) -> Self {
        self.options = options;
        self
    }
}

impl NameCleaver for PoliticianNameCleaver<'_> {
    type Output = ParsedPolitician;

    fn raw(&self) -> &str {
        self.raw
    }

    fn options(&self) -> CleaverOptions {
        self.options
    }

    fn parse(&self) -> CleaverResult<Cleaved<ParsedPolitician>> {
        if self.raw.trim().is_empty() {
            return Ok(Cleaved::Empty);
        }

        let name = strip_party_annotation(self.raw);
        let name = extraction::pre_process(&name);

        let parsed = if RUNNING_MATES_SEPARATOR_RE.is_match(&name) {
            cleave_running_mates(&name).map(ParsedPolitician::RunningMates)
        } else {
            cleave_person(&name)
                .map(PoliticianName::from_person)
                .map(ParsedPolitician::Single)
        };

        match parsed {
            Some(parsed) => Ok(Cleaved::Parsed(parsed.case_name_parts())),
            None => cannot_parse(self.raw, self.options),
        }
    }
}

/// "Nancy Pelosi (D)" → "Nancy Pelosi"
pub fn strip_party_annotation(raw: &str) -> String {
    PARTY_ANNOTATION_RE.replace(raw.trim(), "").into_owned()
}

/// Exactly two non-empty mates, each parseable on its own
fn cleave_running_mates(name: &str) -> Option<RunningMatesNames> {
    let mates: Vec<&str> = RUNNING_MATES_SEPARATOR_RE
        .split(name)
        .map(str::trim)
        .filter(|mate| !mate.is_empty())
        .collect();

    let [mate1, mate2] = mates.as_slice() else {
        debug!(name, mates = mates.len(), "ticket needs exactly two mates");
        return None;
    };

    let mate1 = cleave_person(mate1)?;
    let mate2 = cleave_person(mate2)?;
    Some(RunningMatesNames::new(mate1.into(), mate2.into()))
}

// ============================================================================
// ORGANIZATIONS
// ============================================================================

#[derive(Debug, Clone)]
pub struct OrganizationNameCleaver<'a> {
    raw: &'a str,
    options: CleaverOptions,
}

impl<'a> OrganizationNameCleaver<'a> {
    pub fn new(raw: &'a str) -> Self {
        OrganizationNameCleaver {
            raw,
            options: CleaverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CleaverOptions) -> Self {
        self.options = options;
        self
    }
}

impl NameCleaver for OrganizationNameCleaver<'_> {
    type Output = OrganizationName;

    fn raw(&self) -> &str {
        self.raw
    }

    fn options(&self) -> CleaverOptions {
        self.options
    }

    fn parse(&self) -> CleaverResult<Cleaved<OrganizationName>> {
        if self.raw.trim().is_empty() {
            return Ok(Cleaved::Empty);
        }

        let name = OrganizationName::new(self.raw);
        if !name.name().chars().any(char::is_alphanumeric) {
            return cannot_parse(self.raw, self.options);
        }

        Ok(Cleaved::Parsed(name.case_name_parts()))
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub fn parse_individual_name(raw: &str, safe: bool) -> CleaverResult<Cleaved<PersonName>> {
    IndividualNameCleaver::new(raw)
        .with_options(CleaverOptions::from_flag(safe))
        .parse()
}

pub fn parse_politician_name(raw: &str, safe: bool) -> CleaverResult<Cleaved<ParsedPolitician>> {
    PoliticianNameCleaver::new(raw)
        .with_options(CleaverOptions::from_flag(safe))
        .parse()
}

pub fn parse_organization_name(raw: &str, safe: bool) -> CleaverResult<Cleaved<OrganizationName>> {
    OrganizationNameCleaver::new(raw)
        .with_options(CleaverOptions::from_flag(safe))
        .parse()
}

/// Dispatch on the kind chosen at runtime (CLI, batch jobs)
pub fn parse_name(
    kind: NameKind,
    raw: &str,
    options: CleaverOptions,
) -> CleaverResult<Cleaved<ParsedName>> {
    let cleaved = match kind {
        NameKind::Individual => IndividualNameCleaver::new(raw)
            .with_options(options)
            .parse()?
            .map(ParsedName::from),
        NameKind::Politician => PoliticianNameCleaver::new(raw)
            .with_options(options)
            .parse()?
            .map(ParsedName::from),
        NameKind::Organization => OrganizationNameCleaver::new(raw)
            .with_options(options)
            .parse()?
            .map(ParsedName::from),
    };
    Ok(cleaved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::HasPoliticalMetadata;

    fn individual(raw: &str) -> String {
        parse_individual_name(raw, false).unwrap().to_string()
    }

    fn politician(raw: &str) -> String {
        parse_politician_name(raw, false).unwrap().to_string()
    }

    fn organization(raw: &str) -> String {
        parse_organization_name(raw, false).unwrap().to_string()
    }

    // ------------------------------------------------------------------------
    // Individuals
    // ------------------------------------------------------------------------

    #[test]
    fn test_all_kinds_of_crazy() {
        assert_eq!(individual("ROTHSCHILD 212, STANFORD Z MR"), "Stanford Z. Rothschild");
        assert_eq!(individual("ROTHSCHILD 212, STANFORD Z MRS"), "Mrs. Stanford Z. Rothschild");
    }

    #[test]
    fn test_nickname_and_honorific_variations() {
        for raw in [
            "Baird, Frederick A \"Tripp\" III",
            "Baird, Frederick A \"Tripp\" III Mr",
            "Baird, Mr Frederick A \"Tripp\" III",
        ] {
            assert_eq!(individual(raw), "Frederick A. Baird III", "{raw}");
        }
    }

    #[test]
    fn test_honorific_placement() {
        assert_eq!(individual("Mr T Boone Pickens"), "T. Boone Pickens");
        assert_eq!(individual("Mr. T Boone Pickens"), "T. Boone Pickens");
        assert_eq!(individual("Pickens, T Boone Mr"), "T. Boone Pickens");
        assert_eq!(individual(" MR JOHN L NAU,"), "John L. Nau");
        assert_eq!(individual("KOZA, DR JOHN"), "John Koza");
    }

    #[test]
    fn test_mrs_is_the_only_rendered_honorific() {
        assert_eq!(individual("Mrs T Boone Pickens"), "Mrs. T. Boone Pickens");
        assert_eq!(individual("WALTON, JIM MRS"), "Mrs. Jim Walton");
        assert_eq!(individual("LAY, KENNETH L MR & MRS"), "Kenneth L. Lay");
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(individual("KEN CUCCINELLI II"), "Ken Cuccinelli II");
        assert_eq!(individual("CUCCINELLI II, KEN T"), "Ken T. Cuccinelli II");
        assert_eq!(individual("CUCCINELLI IX, KEN"), "Ken Cuccinelli IX");
        assert_eq!(individual("Charles W. Boustany Jr."), "Charles W. Boustany Jr");
    }

    #[test]
    fn test_two_part_names_keep_short_given_names() {
        assert_eq!(individual("SIMPSON, VI"), "Vi Simpson");
        assert_eq!(individual("RESKOVAC, JR"), "J.R. Reskovac");
    }

    #[test]
    fn test_degrees_are_dropped() {
        assert_eq!(individual("C. RICHARD BONEBRAKE"), "C. Richard Bonebrake");
        assert_eq!(individual("C. RICHARD BONEBRAKE, M.D."), "C. Richard Bonebrake");
        assert_eq!(individual("NOBLE JR., JOHN W. MD"), "John W. Noble Jr");
        assert_eq!(individual("NOBLE JR., JOHN W. PHD MD"), "John W. Noble Jr");
        assert_eq!(individual("DINOSAUR, BARNEY J.D."), "Barney Dinosaur");
    }

    #[test]
    fn test_casing() {
        assert_eq!(individual("RONALD MCDONALD"), "Ronald McDonald");
        assert_eq!(individual("OLD MACDONALD"), "Old MacDonald");
        assert_eq!(individual("ADAM MACK"), "Adam Mack");
        assert_eq!(individual("SEAN O'LEARY"), "Sean O'Leary");
        assert_eq!(individual("SCHWARTZ, BL"), "B.L. Schwartz");
        assert_eq!(individual("Maloney, Drew"), "Drew Maloney");
        assert_eq!(individual("Antonio dAlesio"), "Antonio dAlesio");
    }

    #[test]
    fn test_parenthetical_junk() {
        assert_eq!(individual("SCHMITZ (COP CONT ), JACQUELINE A"), "Jacqueline A. Schmitz");
        assert_eq!(individual("MELLMAN (CONT'D), HANNAH (CONT'D)"), "Hannah Mellman");
        assert_eq!(individual("PRESTON (C O P CONT'D ), TOD"), "Tod Preston");
        assert_eq!(individual("MCDONNELL, ROBERT M (BOB)"), "Robert M. McDonnell");
    }

    #[test]
    fn test_single_token_is_a_last_name() {
        let parsed = parse_individual_name("LEE", false).unwrap();
        let person = parsed.parsed().unwrap();
        assert_eq!(person.first(), None);
        assert_eq!(person.last(), "Lee");
        assert_eq!(parsed.to_string(), "Lee");
    }

    #[test]
    fn test_unicode() {
        assert_eq!(individual("Fünke, Tobias"), "Tobias Fünke");
        assert_eq!(individual("FÜNKE, TOBIAS"), "Tobias Fünke");
    }

    #[test]
    fn test_parsing_is_idempotent() {
        for raw in ["Nancy Pelosi", "CUCCINELLI II, KEN T", "Mrs T Boone Pickens"] {
            let once = individual(raw);
            assert_eq!(individual(&once), once, "{raw}");
        }
    }

    // ------------------------------------------------------------------------
    // Failure policy
    // ------------------------------------------------------------------------

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_individual_name("", false).unwrap(), Cleaved::Empty);
        assert_eq!(parse_politician_name("   ", false).unwrap(), Cleaved::Empty);
        assert_eq!(parse_organization_name("", true).unwrap(), Cleaved::Empty);
    }

    #[test]
    fn test_strict_mode_raises() {
        let err = parse_individual_name("mr & mrs", false).unwrap_err();
        assert_eq!(err.raw(), "mr & mrs");
        assert_eq!(err.to_string(), "couldn't parse name: mr & mrs");

        assert!(parse_politician_name("mr & mrs", false).is_err());
        assert!(parse_individual_name("Mr.", false).is_err());
        assert!(parse_organization_name("&&&", false).is_err());
    }

    #[test]
    fn test_safe_mode_returns_input() {
        let raw = "mr & mrs";
        assert_eq!(
            parse_individual_name(raw, true).unwrap(),
            Cleaved::Passthrough(raw.to_string())
        );
        assert_eq!(parse_politician_name(raw, true).unwrap().to_string(), raw);
        assert_eq!(parse_organization_name("--", true).unwrap().to_string(), "--");
    }

    #[test]
    fn test_junk_single_tokens_are_not_surnames() {
        for raw in ["12", "--,", "III", "Jr.", "MD", "&&&", "\"", "("] {
            assert!(parse_individual_name(raw, false).is_err(), "{raw}");
            assert_eq!(
                parse_individual_name(raw, true).unwrap(),
                Cleaved::Passthrough(raw.to_string()),
                "{raw}"
            );
        }
        assert!(parse_politician_name(", ,", false).is_err());
        assert!(parse_individual_name("12 34", false).is_err());
        assert_eq!(individual("LEE,"), "Lee");
    }

    #[test]
    fn test_safe_mode_never_fails_on_malformed_input() {
        let inputs = [
            "&&&",
            "\"",
            "(",
            ", ,",
            "12 34",
            "III",
            "2012, Obama/Biden",
            "one two three four five six seven",
            "/",
            "mr & mrs",
            "Mr.",
            "--,",
        ];
        let kinds = [NameKind::Individual, NameKind::Politician, NameKind::Organization];

        for kind in kinds {
            for raw in inputs {
                let cleaved = parse_name(kind, raw, CleaverOptions::safe())
                    .unwrap_or_else(|err| panic!("{kind} {raw:?}: {err}"));
                match cleaved {
                    Cleaved::Parsed(_) => {}
                    Cleaved::Passthrough(ref passed) => assert_eq!(passed, raw, "{kind}"),
                    Cleaved::Empty => panic!("{kind} {raw:?}: non-blank input came back empty"),
                }
            }
        }
    }

    #[test]
    fn test_too_many_tokens_fails() {
        assert!(parse_individual_name("one two three four five six", false).is_err());
    }

    // ------------------------------------------------------------------------
    // Politicians
    // ------------------------------------------------------------------------

    #[test]
    fn test_party_annotation_is_stripped() {
        assert_eq!(politician("Nancy Pelosi (D)"), "Nancy Pelosi");
        assert_eq!(politician("MACDONALD, EMORY (R)"), "Emory MacDonald");
        assert_eq!(politician("MacDonald, Emory (R)"), "Emory MacDonald");
        assert_eq!(politician("SWANN, LYNN (COMMITTEE 1)"), "Lynn Swann");
        assert_eq!(
            politician("Edward Thomas O'Donnell, Jr (D)"),
            "Edward Thomas O'Donnell Jr"
        );
        assert_eq!(
            politician("William Steve Southerland  II (R)"),
            "William Steve Southerland II"
        );
    }

    #[test]
    fn test_politician_nicknames() {
        assert_eq!(politician("McDonnell, Robert M (Bob)"), "Robert M. McDonnell");
        assert_eq!(politician("John J (Jimmy) Duncan Jr (R)"), "John J. Duncan Jr");
        assert_eq!(politician("Christopher \"Kit\" Bond"), "Christopher Bond");
        assert_eq!(
            politician("Milton Elmer \"Mac\" McCullough, Jr (3)"),
            "Milton Elmer McCullough Jr"
        );
    }

    #[test]
    fn test_politician_structure() {
        let parsed = parse_politician_name("Albert J La Mere", false).unwrap();
        let person = parsed.parsed().and_then(ParsedPolitician::as_single).unwrap().person();
        assert_eq!(person.first(), Some("Albert"));
        assert_eq!(person.middle(), Some("J."));
        assert_eq!(person.last(), "La Mere");

        let parsed = parse_politician_name("Quoc Van (D)", false).unwrap();
        let person = parsed.parsed().and_then(ParsedPolitician::as_single).unwrap().person();
        assert_eq!(person.first(), Some("Quoc"));
        assert_eq!(person.last(), "Van");

        let parsed = parse_politician_name("Van Morrison", false).unwrap();
        let person = parsed.parsed().and_then(ParsedPolitician::as_single).unwrap().person();
        assert_eq!(person.primary_name_parts(false), vec!["Van", "Morrison"]);

        let parsed = parse_politician_name("Alexander Swift Eagle Justice", false).unwrap();
        let person = parsed.parsed().and_then(ParsedPolitician::as_single).unwrap().person();
        assert_eq!(person.middle(), Some("Swift Eagle"));
        assert_eq!(person.last(), "Justice");

        let parsed = parse_politician_name("Edgar de L'Isle Ross (R)", false).unwrap();
        let person = parsed.parsed().and_then(ParsedPolitician::as_single).unwrap().person();
        assert_eq!(person.middle(), Some("de L'Isle"));
        assert_eq!(person.last(), "Ross");
    }

    #[test]
    fn test_metadata_attached_after_parsing() {
        let parsed = parse_politician_name("Charles Schumer", false)
            .unwrap()
            .into_parsed()
            .unwrap()
            .plus_metadata(Some("D"), Some("NY"));
        assert_eq!(parsed.to_string(), "Charles Schumer (D-NY)");
    }

    #[test]
    fn test_running_mates() {
        assert_eq!(politician("Kasich, John & Taylor, Mary"), "John Kasich & Mary Taylor");
        assert_eq!(politician("ROMNEY, MITT / RYAN, PAUL D."), "Mitt Romney & Paul D. Ryan");

        let ticket = parse_politician_name("STRICKLAND, TED & FISCHER, LEE", false)
            .unwrap()
            .into_parsed()
            .unwrap()
            .plus_metadata(Some("D"), Some("OH"));
        assert!(ticket.as_running_mates().is_some());
        assert_eq!(ticket.to_string(), "Ted Strickland & Lee Fischer (D-OH)");
    }

    #[test]
    fn test_running_mates_unicode() {
        let ticket = parse_politician_name("STRICKLAND, TED & FISCHER, LEÉ", false)
            .unwrap()
            .into_parsed()
            .unwrap()
            .plus_metadata(Some("D"), Some("OH"));
        assert_eq!(ticket.to_string(), "Ted Strickland & Leé Fischer (D-OH)");
    }

    #[test]
    fn test_running_mates_need_two_parseable_mates() {
        assert!(parse_politician_name("Kasich, John & ", false).is_err());
        assert!(parse_politician_name("A B & C D & E F", false).is_err());
        assert!(parse_politician_name("/", false).is_err());
    }

    #[test]
    fn test_bare_surname_mates_only_when_given_as_one_token() {
        assert_eq!(politician("Obama/Biden"), "Obama & Biden");

        // "2012, Obama" is two tokens; once the number goes there is no first name
        let raw = "2012, Obama/Biden";
        assert!(parse_politician_name(raw, false).is_err());
        assert_eq!(
            parse_politician_name(raw, true).unwrap(),
            Cleaved::Passthrough(raw.to_string())
        );
        assert!(parse_politician_name("Obama/III", false).is_err());
    }

    // ------------------------------------------------------------------------
    // Organizations and dispatch
    // ------------------------------------------------------------------------

    #[test]
    fn test_organizations() {
        assert_eq!(organization("  NANCY PELOSI LEADERSHIP PAC "), "Nancy Pelosi Leadership PAC");
        assert_eq!(organization("MCDONNELL DOUGLAS"), "McDonnell Douglas");
        assert_eq!(organization("Ætna, Inc."), "Ætna, Inc.");
    }

    #[test]
    fn test_parse_name_dispatch() {
        let parsed = parse_name(NameKind::Individual, "GORE, ALBERT", CleaverOptions::strict())
            .unwrap()
            .into_parsed()
            .unwrap();
        assert_eq!(parsed, ParsedName::Person(PersonName::new("Albert", "Gore")));

        let parsed = parse_name(NameKind::Politician, "Obama/Biden", CleaverOptions::strict())
            .unwrap()
            .into_parsed()
            .unwrap();
        assert!(matches!(parsed, ParsedName::RunningMates(_)));
        assert_eq!(parsed.to_string(), "Obama & Biden");

        let parsed = parse_name(NameKind::Organization, "RAYTHEON CORP", CleaverOptions::safe())
            .unwrap();
        assert_eq!(parsed.to_string(), "Raytheon Corp");
    }

    #[test]
    fn test_cleaver_exposes_input_and_options() {
        let cleaver =
            IndividualNameCleaver::new("Nancy Pelosi").with_options(CleaverOptions::safe());
        assert_eq!(cleaver.raw(), "Nancy Pelosi");
        assert!(cleaver.options().safe);
    }
}
