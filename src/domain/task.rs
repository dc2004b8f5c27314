use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder written to the task-description column when no tasks were
/// logged for the day.
pub const NO_TASKS_MARKER: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskCategory {
    Watering,
    Weeding,
    Fertilizing,
    Spraying,
    Harvesting,
    /// Catch-all for work outside the fixed categories.
    Other,
}

impl TaskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Watering => "watering",
            TaskCategory::Weeding => "weeding",
            TaskCategory::Fertilizing => "fertilizing",
            TaskCategory::Spraying => "spraying",
            TaskCategory::Harvesting => "harvesting",
            TaskCategory::Other => "other",
        }
    }

    /// Unrecognized descriptions fold into `Other` rather than failing, so
    /// imported datasets with free-text task cells still validate.
    pub fn parse(s: &str) -> TaskCategory {
        match s {
            "watering" => TaskCategory::Watering,
            "weeding" => TaskCategory::Weeding,
            "fertilizing" => TaskCategory::Fertilizing,
            "spraying" => TaskCategory::Spraying,
            "harvesting" => TaskCategory::Harvesting,
            _ => TaskCategory::Other,
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
