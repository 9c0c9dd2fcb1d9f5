// 🏛️ Politicians - a PersonName plus party/state, and running-mate tickets
//
// Metadata is never produced by parsing; callers attach it afterwards.

use super::person::PersonName;
use serde::Serialize;
use std::fmt;

// ============================================================================
// POLITICAL METADATA
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PoliticalMetadata {
    pub party: Option<String>,
    pub state: Option<String>,
}

impl PoliticalMetadata {
    pub fn new(party: Option<&str>, state: Option<&str>) -> Self {
        PoliticalMetadata {
            party: non_blank(party),
            state: non_blank(state),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.party.is_none() && self.state.is_none()
    }

    /// "D-NY", "D", "NY" - presidential candidates have no state
    pub fn label(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let parts: Vec<&str> = [self.party.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        Some(parts.join("-"))
    }

    /// Append the "(D-NY)" label to an already rendered name
    pub fn decorate(&self, rendered: &str) -> String {
        match self.label() {
            Some(label) => format!("{rendered} ({label})"),
            None => rendered.to_string(),
        }
    }
}

/// Capability shared by anything that carries party/state metadata
pub trait HasPoliticalMetadata {
    fn metadata(&self) -> &PoliticalMetadata;
    fn metadata_mut(&mut self) -> &mut PoliticalMetadata;

    /// Attach metadata in place; blank values count as absent
    fn attach_metadata(&mut self, party: Option<&str>, state: Option<&str>) -> &mut Self {
        *self.metadata_mut() = PoliticalMetadata::new(party, state);
        self
    }

    /// Consuming form of `attach_metadata`
    fn plus_metadata(mut self, party: Option<&str>, state: Option<&str>) -> Self
    where
        Self: Sized,
    {
        self.attach_metadata(party, state);
        self
    }
}

// ============================================================================
// POLITICIAN NAME
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PoliticianName {
    #[serde(flatten)]
    person: PersonName,
    #[serde(flatten)]
    metadata: PoliticalMetadata,
}

impl PoliticianName {
    pub fn from_person(person: PersonName) -> Self {
        PoliticianName {
            person,
            metadata: PoliticalMetadata::default(),
        }
    }

    pub fn person(&self) -> &PersonName {
        &self.person
    }

    pub fn into_person(self) -> PersonName {
        self.person
    }

    pub fn is_mixed_case(&self) -> bool {
        self.person.is_mixed_case()
    }

    pub fn case_name_parts(self) -> Self {
        PoliticianName {
            person: self.person.case_name_parts(),
            metadata: self.metadata,
        }
    }

    /// Name without the party/state label
    pub fn name_str(&self) -> String {
        self.person.render()
    }

    pub fn render(&self) -> String {
        self.metadata.decorate(&self.name_str())
    }
}

impl HasPoliticalMetadata for PoliticianName {
    fn metadata(&self) -> &PoliticalMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut PoliticalMetadata {
        &mut self.metadata
    }
}

impl From<PersonName> for PoliticianName {
    fn from(person: PersonName) -> Self {
        PoliticianName::from_person(person)
    }
}

impl fmt::Display for PoliticianName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ============================================================================
// RUNNING MATES
// ============================================================================

/// Two politicians on one ticket. The metadata belongs to the ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunningMatesNames {
    mate1: PoliticianName,
    mate2: PoliticianName,
    #[serde(flatten)]
    metadata: PoliticalMetadata,
}

impl RunningMatesNames {
    pub fn new(mate1: PoliticianName, mate2: PoliticianName) -> Self {
        RunningMatesNames {
            mate1,
            mate2,
            metadata: PoliticalMetadata::default(),
        }
    }

    pub fn mates(&self) -> [&PoliticianName; 2] {
        [&self.mate1, &self.mate2]
    }

    pub fn is_mixed_case(&self) -> bool {
        self.mates().iter().any(|mate| mate.is_mixed_case())
    }

    /// Each mate decides for itself whether it needs casing
    pub fn case_name_parts(self) -> Self {
        RunningMatesNames {
            mate1: self.mate1.case_name_parts(),
            mate2: self.mate2.case_name_parts(),
            metadata: self.metadata,
        }
    }

    pub fn name_str(&self) -> String {
        format!("{} & {}", self.mate1.name_str(), self.mate2.name_str())
    }

    pub fn render(&self) -> String {
        self.metadata.decorate(&self.name_str())
    }
}

impl HasPoliticalMetadata for RunningMatesNames {
    fn metadata(&self) -> &PoliticalMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut PoliticalMetadata {
        &mut self.metadata
    }
}

impl fmt::Display for RunningMatesNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
