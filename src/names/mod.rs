// Name value objects
//
// Each parse call builds a fresh value; nothing is shared or cached.
// - PersonName: structured individual
// - PoliticianName / RunningMatesNames: individual or ticket plus party/state
// - OrganizationName: a single string with derived views

pub mod casing;
pub mod organization;
pub mod person;
pub mod politician;

pub use organization::OrganizationName;
pub use person::PersonName;
pub use politician::{HasPoliticalMetadata, PoliticalMetadata, PoliticianName, RunningMatesNames};

use serde::Serialize;
use std::fmt;

// ============================================================================
// PARSED NAME
// ============================================================================

/// Every structured result the cleavers can produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedName {
    Person(PersonName),
    Politician(PoliticianName),
    RunningMates(RunningMatesNames),
    Organization(OrganizationName),
}

impl ParsedName {
    pub fn render(&self) -> String {
        match self {
            ParsedName::Person(name) => name.render(),
            ParsedName::Politician(name) => name.render(),
            ParsedName::RunningMates(names) => names.render(),
            ParsedName::Organization(name) => name.render(),
        }
    }

    /// The person behind a single-name result
    pub fn as_person(&self) -> Option<&PersonName> {
        match self {
            ParsedName::Person(name) => Some(name),
            ParsedName::Politician(name) => Some(name.person()),
            ParsedName::RunningMates(_) | ParsedName::Organization(_) => None,
        }
    }

    pub fn as_organization(&self) -> Option<&OrganizationName> {
        match self {
            ParsedName::Organization(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<PersonName> for ParsedName {
    fn from(name: PersonName) -> Self {
        ParsedName::Person(name)
    }
}

impl From<OrganizationName> for ParsedName {
    fn from(name: OrganizationName) -> Self {
        ParsedName::Organization(name)
    }
}

/// A politician parse yields either one name or a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParsedPolitician {
    Single(PoliticianName),
    RunningMates(RunningMatesNames),
}

impl ParsedPolitician {
    pub fn render(&self) -> String {
        match self {
            ParsedPolitician::Single(name) => name.render(),
            ParsedPolitician::RunningMates(names) => names.render(),
        }
    }

    pub fn as_single(&self) -> Option<&PoliticianName> {
        match self {
            ParsedPolitician::Single(name) => Some(name),
            ParsedPolitician::RunningMates(_) => None,
        }
    }

    pub fn as_running_mates(&self) -> Option<&RunningMatesNames> {
        match self {
            ParsedPolitician::RunningMates(names) => Some(names),
            ParsedPolitician::Single(_) => None,
        }
    }

    pub fn case_name_parts(self) -> Self {
        match self {
            ParsedPolitician::Single(name) => ParsedPolitician::Single(name.case_name_parts()),
            ParsedPolitician::RunningMates(names) => {
                ParsedPolitician::RunningMates(names.case_name_parts())
            }
        }
    }
}

impl HasPoliticalMetadata for ParsedPolitician {
    fn metadata(&self) -> &PoliticalMetadata {
        match self {
            ParsedPolitician::Single(name) => name.metadata(),
            ParsedPolitician::RunningMates(names) => names.metadata(),
        }
    }

    fn metadata_mut(&mut self) -> &mut PoliticalMetadata {
        match self {
            ParsedPolitician::Single(name) => name.metadata_mut(),
            ParsedPolitician::RunningMates(names) => names.metadata_mut(),
        }
    }
}

impl fmt::Display for ParsedPolitician {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<ParsedPolitician> for ParsedName {
    fn from(parsed: ParsedPolitician) -> Self {
        match parsed {
            ParsedPolitician::Single(name) => ParsedName::Politician(name),
            ParsedPolitician::RunningMates(names) => ParsedName::RunningMates(names),
        }
    }
}

// ============================================================================
// CLEAVE OUTCOME
// ============================================================================

/// What a parse entry point hands back when it does not raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cleaved<T> {
    /// Empty input; the pipeline never ran
    Empty,
    Parsed(T),
    /// Safe-mode failure: the original input, untouched
    Passthrough(String),
}

impl<T> Cleaved<T> {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Cleaved::Parsed(_))
    }

    pub fn parsed(&self) -> Option<&T> {
        match self {
            Cleaved::Parsed(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_parsed(self) -> Option<T> {
        match self {
            Cleaved::Parsed(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Cleaved<U> {
        match self {
            Cleaved::Empty => Cleaved::Empty,
            Cleaved::Parsed(value) => Cleaved::Parsed(f(value)),
            Cleaved::Passthrough(raw) => Cleaved::Passthrough(raw),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Cleaved<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cleaved::Empty => Ok(()),
            Cleaved::Parsed(value) => write!(f, "{value}"),
            Cleaved::Passthrough(raw) => f.write_str(raw),
        }
    }
}

/// True when a result should not be trusted as a person: a ticket, or a
/// name with no surname.
pub fn person_processing_failed(name: &ParsedName) -> bool {
    match name {
        ParsedName::RunningMates(_) | ParsedName::Organization(_) => true,
        ParsedName::Person(person) => person.last().is_empty(),
        ParsedName::Politician(politician) => politician.person().last().is_empty(),
    }
}

pub fn organization_processing_failed(name: &ParsedName) -> bool {
    !matches!(name, ParsedName::Organization(_))
}
