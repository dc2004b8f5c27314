use serde::{Deserialize, Serialize};
use std::fmt;

/// A named garden unit under independent management.
///
/// The known-plot set comes from configuration and is closed at any given
/// time. The schema layer deliberately accepts any plot string; membership
/// is enforced at write time by `RoleScope`, so rows imported from older
/// datasets keep whatever plot name they carried.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plot(String);

impl Plot {
    pub fn new(name: impl Into<String>) -> Self {
        Plot(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
