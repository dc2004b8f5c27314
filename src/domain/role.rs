use super::Plot;

/// Self-selected role attached to each request; nothing authenticates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Sees and writes to every plot.
    Admin,
    /// Bound to exactly one plot for both reads and writes.
    Manager(Plot),
}
