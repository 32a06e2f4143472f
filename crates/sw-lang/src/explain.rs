use std::fmt;

use crate::ast::{
    HoppingWindow, NodeLocation, SessionWindow, TumblingWindow, WindowExpression, WindowKind,
};
use crate::error::WindowError;
use crate::visitor::WindowVisitor;

/// Human-readable description of a window clause in normalized units.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowExplanation {
    pub kind: WindowKind,
    pub clause: String,
    pub location: Option<NodeLocation>,
    pub size_ms: Option<u64>,
    pub advance_ms: Option<u64>,
    pub gap_ms: Option<u64>,
    /// Upper bound on how many windows one record contributes to.
    pub windows_per_record: Option<u64>,
}

/// Build an explanation; fails only when a duration overflows.
pub fn explain_window(expr: &WindowExpression) -> Result<WindowExplanation, WindowError> {
    expr.accept(&mut Explainer, ())
}

struct Explainer;

impl Explainer {
    fn base(node: &WindowExpression) -> WindowExplanation {
        WindowExplanation {
            kind: node.spec().kind(),
            clause: node.to_string(),
            location: node.location(),
            size_ms: None,
            advance_ms: None,
            gap_ms: None,
            windows_per_record: None,
        }
    }
}

impl WindowVisitor<Result<WindowExplanation, WindowError>, ()> for Explainer {
    fn visit_window(
        &mut self,
        node: &WindowExpression,
        _context: (),
    ) -> Result<WindowExplanation, WindowError> {
        Ok(Self::base(node))
    }

    fn visit_tumbling_window_expression(
        &mut self,
        node: &WindowExpression,
        window: &TumblingWindow,
        _context: (),
    ) -> Result<WindowExplanation, WindowError> {
        let size_ms = window.size().to_millis()?;
        Ok(WindowExplanation {
            size_ms: Some(size_ms),
            advance_ms: Some(size_ms),
            windows_per_record: Some(1),
            ..Self::base(node)
        })
    }

    fn visit_hopping_window_expression(
        &mut self,
        node: &WindowExpression,
        window: &HoppingWindow,
        _context: (),
    ) -> Result<WindowExplanation, WindowError> {
        let size_ms = window.size().to_millis()?;
        let advance_ms = window.advance().to_millis()?;
        Ok(WindowExplanation {
            size_ms: Some(size_ms),
            advance_ms: Some(advance_ms),
            windows_per_record: (advance_ms > 0).then(|| size_ms.div_ceil(advance_ms)),
            ..Self::base(node)
        })
    }

    fn visit_session_window_expression(
        &mut self,
        node: &WindowExpression,
        window: &SessionWindow,
        _context: (),
    ) -> Result<WindowExplanation, WindowError> {
        Ok(WindowExplanation {
            gap_ms: Some(window.inactivity_gap().to_millis()?),
            ..Self::base(node)
        })
    }
}

impl fmt::Display for WindowExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(loc) => writeln!(f, "Window: {} (at {})", self.kind, loc)?,
            None => writeln!(f, "Window: {}", self.kind)?,
        }
        writeln!(f, "  Clause: {}", self.clause)?;
        if let Some(size) = self.size_ms {
            writeln!(f, "  Size: {size}ms")?;
        }
        if let Some(advance) = self.advance_ms {
            writeln!(f, "  Advance: {advance}ms")?;
        }
        if let Some(gap) = self.gap_ms {
            writeln!(f, "  Inactivity gap: {gap}ms")?;
        }
        if let Some(n) = self.windows_per_record {
            writeln!(f, "  Windows per record: up to {n}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_window;

    #[test]
    fn explain_hopping() {
        let expr = parse_window("HOPPING ( SIZE 5 SECONDS , ADVANCE BY 2 SECONDS )").unwrap();
        let expl = explain_window(&expr).unwrap();
        assert_eq!(expl.kind, WindowKind::Hopping);
        assert_eq!(expl.size_ms, Some(5_000));
        assert_eq!(expl.advance_ms, Some(2_000));
        assert_eq!(expl.windows_per_record, Some(3));
        assert_eq!(expl.gap_ms, None);
    }

    #[test]
    fn explain_tumbling_has_equal_advance() {
        let expr = parse_window("TUMBLING ( SIZE 10 SECONDS )").unwrap();
        let expl = explain_window(&expr).unwrap();
        assert_eq!(expl.size_ms, Some(10_000));
        assert_eq!(expl.advance_ms, Some(10_000));
        assert_eq!(expl.windows_per_record, Some(1));
    }

    #[test]
    fn explain_session_display() {
        let expr = parse_window("SESSION ( 30 SECONDS )").unwrap();
        let text = explain_window(&expr).unwrap().to_string();
        let expected = "\
Window: SESSION (at 1:1)
  Clause: SESSION ( 30 SECONDS )
  Inactivity gap: 30000ms
";
        assert_eq!(text, expected);
    }

    #[test]
    fn explain_overflow_fails() {
        let expr = parse_window("SESSION ( 18446744073709551615 HOURS )").unwrap();
        assert!(matches!(
            explain_window(&expr),
            Err(WindowError::DurationOverflow { .. })
        ));
    }
}
