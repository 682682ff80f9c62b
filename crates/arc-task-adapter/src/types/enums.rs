/*
[INPUT]:  Dataset version numbers and subset names
[OUTPUT]: Typed dataset selectors with serde support
[POS]:    Data layer - dataset identifiers
[UPDATE]: When a new dataset version or subset is published
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ARC1_API_BASE: &str = "https://api.github.com/repos/fchollet/ARC/contents/data";
const ARC2_API_BASE: &str = "https://api.github.com/repos/arcprize/ARC-AGI-2/contents/data";

/// ARC dataset version. Serialized as its number (1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DatasetVersion {
    Arc1,
    #[default]
    Arc2,
}

impl DatasetVersion {
    pub fn number(self) -> u8 {
        match self {
            DatasetVersion::Arc1 => 1,
            DatasetVersion::Arc2 => 2,
        }
    }

    /// Human readable name ("ARC 1" / "ARC 2")
    pub fn name(self) -> &'static str {
        match self {
            DatasetVersion::Arc1 => "ARC 1",
            DatasetVersion::Arc2 => "ARC 2",
        }
    }

    /// Contents API directory holding the `training`/`evaluation` folders
    pub fn default_api_base(self) -> &'static str {
        match self {
            DatasetVersion::Arc1 => ARC1_API_BASE,
            DatasetVersion::Arc2 => ARC2_API_BASE,
        }
    }
}

impl TryFrom<u8> for DatasetVersion {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DatasetVersion::Arc1),
            2 => Ok(DatasetVersion::Arc2),
            other => Err(format!("unsupported dataset version {other}, expected 1 or 2")),
        }
    }
}

impl From<DatasetVersion> for u8 {
    fn from(version: DatasetVersion) -> Self {
        version.number()
    }
}

impl fmt::Display for DatasetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Partition of a dataset version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subset {
    #[default]
    Training,
    Evaluation,
}

impl Subset {
    pub const ALL: [Subset; 2] = [Subset::Training, Subset::Evaluation];

    pub fn as_str(self) -> &'static str {
        match self {
            Subset::Training => "training",
            Subset::Evaluation => "evaluation",
        }
    }
}

impl FromStr for Subset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "training" => Ok(Subset::Training),
            "evaluation" => Ok(Subset::Evaluation),
            other => Err(format!("unknown subset '{other}', expected training or evaluation")),
        }
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_version_serde_as_number() {
        let json = serde_json::to_string(&DatasetVersion::Arc1).expect("serialize");
        assert_eq!(json, "1");
        let parsed: DatasetVersion = serde_json::from_str("2").expect("deserialize");
        assert_eq!(parsed, DatasetVersion::Arc2);
        assert!(serde_json::from_str::<DatasetVersion>("3").is_err());
    }

    #[test]
    fn test_dataset_version_defaults_to_arc2() {
        assert_eq!(DatasetVersion::default(), DatasetVersion::Arc2);
        assert_eq!(DatasetVersion::default().name(), "ARC 2");
        assert_ne!(
            DatasetVersion::Arc1.default_api_base(),
            DatasetVersion::Arc2.default_api_base()
        );
    }

    #[test]
    fn test_subset_parse() {
        assert_eq!("training".parse::<Subset>(), Ok(Subset::Training));
        assert_eq!(" Evaluation ".parse::<Subset>(), Ok(Subset::Evaluation));
        assert!("test".parse::<Subset>().is_err());
        assert_eq!(Subset::Evaluation.to_string(), "evaluation");
    }
}
