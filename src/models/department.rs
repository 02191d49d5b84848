use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Academic departments a catalog course can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    ComputerScience,
    English,
    Biology,
    Chemistry,
    Mathematics,
    Physics,
    Psychology,
    Business,
    Engineering,
    History,
    PoliticalScience,
    Sociology,
    ArtAndArtHistory,
    Music,
    Philosophy,
}

impl Department {
    /// Display order used by the navigation menu and the departments tab.
    pub const ALL: [Department; 15] = [
        Department::ComputerScience,
        Department::English,
        Department::Biology,
        Department::Chemistry,
        Department::Mathematics,
        Department::Physics,
        Department::Psychology,
        Department::Business,
        Department::Engineering,
        Department::History,
        Department::PoliticalScience,
        Department::Sociology,
        Department::ArtAndArtHistory,
        Department::Music,
        Department::Philosophy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Department::ComputerScience => "Computer Science",
            Department::English => "English",
            Department::Biology => "Biology",
            Department::Chemistry => "Chemistry",
            Department::Mathematics => "Mathematics",
            Department::Physics => "Physics",
            Department::Psychology => "Psychology",
            Department::Business => "Business",
            Department::Engineering => "Engineering",
            Department::History => "History",
            Department::PoliticalScience => "Political Science",
            Department::Sociology => "Sociology",
            Department::ArtAndArtHistory => "Art & Art History",
            Department::Music => "Music",
            Department::Philosophy => "Philosophy",
        }
    }

    /// Lower-cased name with each whitespace run collapsed to `-`.
    pub fn slug(self) -> String {
        self.name()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase()
    }

    pub fn href(self) -> String {
        format!("/departments/{}", self.slug())
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department: {0}")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}

impl Serialize for Department {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Department {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs() {
        assert_eq!(Department::ComputerScience.slug(), "computer-science");
        assert_eq!(Department::ArtAndArtHistory.slug(), "art-&-art-history");
        assert_eq!(Department::Music.slug(), "music");
        assert_eq!(Department::PoliticalScience.href(), "/departments/political-science");
    }

    #[test]
    fn test_parse_every_name() {
        for dept in Department::ALL {
            assert_eq!(dept.name().parse::<Department>(), Ok(dept));
        }
        assert!("Astrology".parse::<Department>().is_err());
        assert!("chemistry".parse::<Department>().is_err());
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Department::ArtAndArtHistory).unwrap();
        assert_eq!(json, "\"Art & Art History\"");

        let back: Department = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Department::ArtAndArtHistory);
    }
}
