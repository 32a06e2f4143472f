use crate::ast::WindowExpression;
use crate::error::WindowError;
use crate::visitor::WindowVisitor;

use super::{CheckError, CheckOptions};

/// Enforces the window invariants and the configured size cap.
pub(super) struct ValidatePass<'o> {
    options: &'o CheckOptions,
}

impl<'o> ValidatePass<'o> {
    pub(super) fn new(options: &'o CheckOptions) -> Self {
        Self { options }
    }

    fn check_limit(&self, node: &WindowExpression) -> Result<(), WindowError> {
        let Some(max) = self.options.max_window_size else {
            return Ok(());
        };
        let max_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
        let (field, extent) = node.spec().extent();
        let millis = extent.to_millis()?;
        if millis > max_ms {
            return Err(WindowError::ExceedsLimit {
                field,
                millis,
                max_ms,
            });
        }
        Ok(())
    }
}

impl<'e> WindowVisitor<(), &'e mut Vec<CheckError>> for ValidatePass<'_> {
    fn visit_window(&mut self, node: &WindowExpression, errors: &'e mut Vec<CheckError>) {
        let result = node.validate().and_then(|()| self.check_limit(node));
        if let Err(e) = result {
            errors.push(CheckError::from_window_error(node, e));
        }
    }
}
