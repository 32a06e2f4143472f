mod lint;
mod validate;

use std::time::Duration;

use crate::ast::{NodeLocation, WindowExpression};
use crate::error::WindowError;

/// Severity level for window check diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Window check diagnostic, located at the clause that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckError {
    pub severity: Severity,
    pub location: Option<NodeLocation>,
    /// Set for diagnostics that come from a failed invariant.
    pub error: Option<WindowError>,
    pub message: String,
}

impl CheckError {
    fn from_window_error(node: &WindowExpression, error: WindowError) -> Self {
        Self {
            severity: Severity::Error,
            location: node.location(),
            message: error.to_string(),
            error: Some(error),
        }
    }

    fn warning(node: &WindowExpression, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            location: node.location(),
            error: None,
            message,
        }
    }
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match self.location {
            Some(loc) => write!(f, "{} at {}: {}", prefix, loc, self.message),
            None => write!(f, "{}: {}", prefix, self.message),
        }
    }
}

/// Knobs for [`check_window_with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckOptions {
    /// Upper bound for a window's size (or a session's gap).
    pub max_window_size: Option<Duration>,
    /// Promote every warning to an error.
    pub deny_warnings: bool,
}

/// Check a window clause with default options.
/// Returns an empty Vec when all checks pass.
pub fn check_window(expr: &WindowExpression) -> Vec<CheckError> {
    check_window_with(expr, &CheckOptions::default())
}

/// Validate the clause's invariants, then run lints on a clause that passed.
pub fn check_window_with(expr: &WindowExpression, options: &CheckOptions) -> Vec<CheckError> {
    let mut errors = Vec::new();

    expr.accept(&mut validate::ValidatePass::new(options), &mut errors);
    if !has_errors(&errors) {
        expr.accept(&mut lint::LintPass, &mut errors);
    }

    if options.deny_warnings {
        for e in &mut errors {
            e.severity = Severity::Error;
        }
    }
    errors
}

pub fn has_errors(errors: &[CheckError]) -> bool {
    errors.iter().any(|e| e.severity == Severity::Error)
}

#[cfg(test)]
mod tests;
