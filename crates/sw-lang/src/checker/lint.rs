use crate::ast::{HoppingWindow, WindowExpression, WindowSpec};
use crate::visitor::WindowVisitor;

use super::CheckError;

/// Style warnings for clauses that already passed validation. Only hopping
/// windows have anything to say; the other variants fall through.
pub(super) struct LintPass;

impl<'e> WindowVisitor<(), &'e mut Vec<CheckError>> for LintPass {
    fn visit_window(&mut self, _node: &WindowExpression, _errors: &'e mut Vec<CheckError>) {}

    fn visit_hopping_window_expression(
        &mut self,
        node: &WindowExpression,
        window: &HoppingWindow,
        errors: &'e mut Vec<CheckError>,
    ) {
        let (Ok(size_ms), Ok(advance_ms)) = (window.size().to_millis(), window.advance().to_millis())
        else {
            return;
        };
        if advance_ms == 0 {
            return;
        }

        if advance_ms == size_ms {
            let tumbling = WindowSpec::tumbling(window.size());
            errors.push(CheckError::warning(
                node,
                format!("advance equals window size; equivalent to `{tumbling}`"),
            ));
        } else if size_ms % advance_ms != 0 {
            errors.push(CheckError::warning(
                node,
                format!(
                    "window size {size_ms}ms is not a multiple of advance {advance_ms}ms; \
                     records fall into {} or {} windows depending on their timestamp",
                    size_ms / advance_ms,
                    size_ms.div_ceil(advance_ms)
                ),
            ));
        }
    }
}
