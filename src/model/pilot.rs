use crate::model::drone::DroneWithCategory;

/// Pilot gender as stored and transmitted.
///
/// The wire format uses the single-letter codes `"M"` and `"F"`, with a
/// read-only human-readable description alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parses the single-letter wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Validated user-settable fields of a pilot.
#[derive(Debug, Clone, PartialEq)]
pub struct PilotWriteParams {
    pub name: String,
    pub gender: Gender,
    pub races_count: i32,
}

/// Filters applied to the pilot list.
#[derive(Debug, Clone, Default)]
pub struct PilotListFilter {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub races_count: Option<i32>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

/// A competition together with the drone (and its category) that flew it.
/// Used for the nested competition list on pilot representations.
#[derive(Debug, Clone)]
pub struct CompetitionWithDrone {
    pub competition: entity::competition::Model,
    pub drone: DroneWithCategory,
}

/// A pilot together with the competitions they flew, ordered by distance
/// descending.
#[derive(Debug, Clone)]
pub struct PilotWithCompetitions {
    pub pilot: entity::pilot::Model,
    pub competitions: Vec<CompetitionWithDrone>,
}
