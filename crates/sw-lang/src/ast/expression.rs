use std::fmt;
use std::hash::{Hash, Hasher};

use super::location::NodeLocation;
use super::window::WindowSpec;
use crate::error::WindowError;
use crate::visitor::WindowVisitor;

/// Parser-facing node for a `WINDOW ...` clause.
///
/// The location is carried for diagnostics and is ignored by equality,
/// hashing and rendering.
#[derive(Debug, Clone)]
pub struct WindowExpression {
    location: Option<NodeLocation>,
    spec: WindowSpec,
}

impl WindowExpression {
    pub fn new(spec: WindowSpec) -> Self {
        Self {
            location: None,
            spec,
        }
    }

    pub fn with_location(mut self, location: NodeLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    pub fn spec(&self) -> &WindowSpec {
        &self.spec
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        self.spec.validate()
    }

    /// Dispatch to the visitor method matching the wrapped variant.
    pub fn accept<R, C, V>(&self, visitor: &mut V, context: C) -> R
    where
        V: WindowVisitor<R, C> + ?Sized,
    {
        match &self.spec {
            WindowSpec::Tumbling(w) => visitor.visit_tumbling_window_expression(self, w, context),
            WindowSpec::Hopping(w) => visitor.visit_hopping_window_expression(self, w, context),
            WindowSpec::Session(w) => visitor.visit_session_window_expression(self, w, context),
        }
    }
}

impl From<WindowSpec> for WindowExpression {
    fn from(spec: WindowSpec) -> Self {
        Self::new(spec)
    }
}

impl PartialEq for WindowExpression {
    fn eq(&self, other: &Self) -> bool {
        self.spec == other.spec
    }
}

impl Eq for WindowExpression {}

impl Hash for WindowExpression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.spec.hash(state);
    }
}

impl fmt::Display for WindowExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.spec, f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;
    use crate::duration::DurationValue;

    fn hash_of(expr: &WindowExpression) -> u64 {
        let mut h = DefaultHasher::new();
        expr.hash(&mut h);
        h.finish()
    }

    #[test]
    fn location_ignored_by_equality_and_hash() {
        let spec = WindowSpec::tumbling(DurationValue::seconds(10));
        let bare = WindowExpression::new(spec);
        let located = WindowExpression::new(spec).with_location(NodeLocation::new(3, 14));
        assert_eq!(bare, located);
        assert_eq!(hash_of(&bare), hash_of(&located));
        assert_eq!(located.location(), Some(NodeLocation::new(3, 14)));
        assert_eq!(bare.location(), None);
    }

    #[test]
    fn display_delegates_to_spec() {
        let expr = WindowExpression::from(WindowSpec::session(DurationValue::minutes(5)));
        assert_eq!(expr.to_string(), "SESSION ( 5 MINUTES )");
    }

    #[test]
    fn validate_delegates_to_spec() {
        let expr = WindowExpression::new(WindowSpec::session(DurationValue::seconds(0)));
        assert_eq!(
            expr.validate(),
            Err(WindowError::InvalidWindowSize { field: "gap" })
        );
    }
}
