//! Role-scoped plot visibility and write targets.

use crate::domain::{Plot, Role};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScopeError {
    /// An unrecognized role is rejected outright. Falling back to a default
    /// plot would silently mis-scope the write.
    #[error("unknown role `{0}`")]
    UnknownRole(String),

    #[error("unknown plot `{0}`")]
    UnknownPlot(String),

    #[error("an administrator must choose a plot to write to")]
    PlotChoiceRequired,

    #[error("this role may only write to plot `{0}`")]
    PlotNotPermitted(Plot),
}

/// Static role-to-plot mapping, built once from the configured known-plot
/// list. Not mutable at runtime.
#[derive(Debug, Clone)]
pub struct RoleScope {
    plots: Vec<Plot>,
}

impl RoleScope {
    pub fn new(plots: Vec<Plot>) -> Self {
        Self { plots }
    }

    pub fn known_plots(&self) -> &[Plot] {
        &self.plots
    }

    /// Parses a self-selected role string: `admin`, or `manager:<plot>` for
    /// a manager bound to one known plot.
    pub fn resolve_role(&self, raw: &str) -> Result<Role, ScopeError> {
        if raw == "admin" {
            return Ok(Role::Admin);
        }
        if let Some(name) = raw.strip_prefix("manager:") {
            if let Some(plot) = self.plots.iter().find(|p| p.name() == name) {
                return Ok(Role::Manager(plot.clone()));
            }
        }
        Err(ScopeError::UnknownRole(raw.to_owned()))
    }

    pub fn plots_visible_to(&self, role: &Role) -> Vec<Plot> {
        match role {
            Role::Admin => self.plots.clone(),
            Role::Manager(plot) => vec![plot.clone()],
        }
    }

    /// Resolves the plot a write lands on. Admins must choose one of the
    /// known plots; a manager's target is implicit, and naming a different
    /// plot explicitly is refused.
    pub fn write_plot(&self, role: &Role, requested: Option<&Plot>) -> Result<Plot, ScopeError> {
        match role {
            Role::Admin => match requested {
                Some(plot) if self.plots.contains(plot) => Ok(plot.clone()),
                Some(plot) => Err(ScopeError::UnknownPlot(plot.name().to_owned())),
                None => Err(ScopeError::PlotChoiceRequired),
            },
            Role::Manager(bound) => match requested {
                Some(plot) if plot != bound => Err(ScopeError::PlotNotPermitted(bound.clone())),
                _ => Ok(bound.clone()),
            },
        }
    }
}
