//! Double dispatch over window expressions.
//!
//! A compiler pass implements [`WindowVisitor`] and calls
//! [`WindowExpression::accept`]. Only `visit_window` is required; each
//! per-variant method falls back to it, so a pass overrides just the
//! variants it cares about.

use crate::ast::{HoppingWindow, SessionWindow, TumblingWindow, WindowExpression};

pub trait WindowVisitor<R, C> {
    /// Fallback for variants the pass does not handle explicitly.
    fn visit_window(&mut self, node: &WindowExpression, context: C) -> R;

    fn visit_tumbling_window_expression(
        &mut self,
        node: &WindowExpression,
        _window: &TumblingWindow,
        context: C,
    ) -> R {
        self.visit_window(node, context)
    }

    fn visit_hopping_window_expression(
        &mut self,
        node: &WindowExpression,
        _window: &HoppingWindow,
        context: C,
    ) -> R {
        self.visit_window(node, context)
    }

    fn visit_session_window_expression(
        &mut self,
        node: &WindowExpression,
        _window: &SessionWindow,
        context: C,
    ) -> R {
        self.visit_window(node, context)
    }
}
