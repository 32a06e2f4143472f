use std::fmt;

use crate::stream::SerdeType;

/// Store layout a materialization target asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    /// Let the lowering pick the layout matching the window kind.
    Any,
    KeyValue,
    Window,
    Session,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Any => "any",
            Self::KeyValue => "key-value",
            Self::Window => "window",
            Self::Session => "session",
        })
    }
}

/// Named, typed destination for windowed aggregation results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    store_name: String,
    key_type: SerdeType,
    value_type: SerdeType,
    store: StoreKind,
}

impl Materialized {
    pub fn as_store(name: impl Into<String>, key_type: SerdeType, value_type: SerdeType) -> Self {
        Self {
            store_name: name.into(),
            key_type,
            value_type,
            store: StoreKind::Any,
        }
    }

    pub fn with_store(self, store: StoreKind) -> Self {
        Self { store, ..self }
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn key_type(&self) -> SerdeType {
        self.key_type
    }

    pub fn value_type(&self) -> SerdeType {
        self.value_type
    }

    pub fn store(&self) -> StoreKind {
        self.store
    }
}
