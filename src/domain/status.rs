use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the synthesized task-description label that marks a row as a
/// plant-status report in the flat tabular store.
pub const STATUS_REPORT_PREFIX: &str = "status report - ";

/// Overall plant health as assessed by the person on the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlantStatus {
    Good,
    Normal,
    MildPest,
    NeedsTreatment,
}

impl PlantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantStatus::Good => "good",
            PlantStatus::Normal => "normal",
            PlantStatus::MildPest => "mild pest",
            PlantStatus::NeedsTreatment => "needs treatment",
        }
    }

    pub fn parse(s: &str) -> Option<PlantStatus> {
        match s {
            "good" => Some(PlantStatus::Good),
            "normal" => Some(PlantStatus::Normal),
            "mild pest" => Some(PlantStatus::MildPest),
            "needs treatment" => Some(PlantStatus::NeedsTreatment),
            _ => None,
        }
    }
}

impl fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
