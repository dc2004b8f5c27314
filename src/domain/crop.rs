use serde::{Deserialize, Serialize};
use std::fmt;

/// Crop types grown on the farm; reminders are bound to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CropType {
    Durian,
    Coffee,
    Mango,
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CropType::Durian => "durian",
            CropType::Coffee => "coffee",
            CropType::Mango => "mango",
        };
        f.write_str(name)
    }
}
