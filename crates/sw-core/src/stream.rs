use std::fmt;

/// Serialization type of a key or value column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerdeType {
    String,
    Long,
    Bytes,
    /// Structured aggregate row.
    Row,
}

impl fmt::Display for SerdeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "STRING",
            Self::Long => "BIGINT",
            Self::Bytes => "BYTES",
            Self::Row => "ROW",
        })
    }
}

/// Handle to a stream already partitioned by key, awaiting aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedStream {
    name: String,
    key_type: SerdeType,
    value_type: SerdeType,
}

impl GroupedStream {
    pub fn new(name: impl Into<String>, key_type: SerdeType, value_type: SerdeType) -> Self {
        Self {
            name: name.into(),
            key_type,
            value_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key_type(&self) -> SerdeType {
        self.key_type
    }

    pub fn value_type(&self) -> SerdeType {
        self.value_type
    }
}

// ---------------------------------------------------------------------------
// Aggregation callbacks
// ---------------------------------------------------------------------------

/// Produces the empty aggregate for a new window.
pub trait Initializer<A>: Send + Sync {
    fn initialize(&self) -> A;
}

impl<A, F> Initializer<A> for F
where
    F: Fn() -> A + Send + Sync,
{
    fn initialize(&self) -> A {
        self()
    }
}

/// Folds one record into a window's aggregate.
pub trait Aggregator<V, A>: Send + Sync {
    fn aggregate(&self, key: &str, value: &V, aggregate: A) -> A;
}

impl<V, A, F> Aggregator<V, A> for F
where
    F: Fn(&str, &V, A) -> A + Send + Sync,
{
    fn aggregate(&self, key: &str, value: &V, aggregate: A) -> A {
        self(key, value, aggregate)
    }
}
