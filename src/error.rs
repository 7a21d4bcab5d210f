//! Error types for schema compilation.

use aws_sdk_dynamodb::error::BuildError;
use thiserror::Error;

/// Errors detected while compiling a type description into a create-table
/// request. All of these indicate an authoring defect in the type description
/// or the builder calls; none are transient, and all are raised before any
/// network call.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A field whose native type has no DynamoDB scalar representation was
    /// used as a key or index attribute.
    #[error("unsupported key attribute type for field '{field}'")]
    UnsupportedKeyType { field: String },

    /// Two fields share a name after embedded descriptions were flattened.
    #[error("ambiguous field name '{name}' after flattening embedded fields")]
    AmbiguousField { name: String },

    /// A primary-key annotation used a keyword other than `hash` or `range`.
    #[error("field '{field}': unknown key role '{role}' (expected 'hash' or 'range')")]
    UnknownKeyRole { field: String, role: String },

    /// An index annotation did not match the `name,role` grammar.
    #[error("field '{field}': malformed index entry '{entry}' (expected 'name,role')")]
    MalformedIndexEntry { field: String, entry: String },

    /// More than one field claims the table's hash key role.
    #[error("table has multiple hash keys ('{first}' and '{second}')")]
    MultipleHashKeys { first: String, second: String },

    /// More than one field claims the table's range key role.
    #[error("table has multiple range keys ('{first}' and '{second}')")]
    MultipleRangeKeys { first: String, second: String },

    /// No member of the named index carries the hash role.
    #[error("index '{index}' is missing a hash key")]
    IndexMissingHashKey { index: String },

    /// More than one member of the named index carries the hash role.
    #[error("index '{index}' has multiple hash keys")]
    IndexMultipleHashKeys { index: String },

    /// More than one member of the named index carries the range role.
    #[error("index '{index}' has multiple range keys")]
    IndexMultipleRangeKeys { index: String },

    /// The same index name appears in both the global and the local channel.
    #[error("index '{index}' is declared both global and local")]
    IndexKindConflict { index: String },

    /// A builder override referenced an index that was never assembled from
    /// the type description.
    #[error("unknown index '{index}'")]
    UnknownIndex { index: String },

    /// A throughput override targeted a local secondary index, which shares
    /// the table's capacity and carries none of its own.
    #[error("index '{index}' is not a global index")]
    NotGlobalIndex { index: String },

    /// An Include projection was supplied with no non-key attributes.
    #[error("include projection for index '{index}' requires at least one attribute")]
    EmptyProjection { index: String },

    /// Read or write capacity units were zero or negative.
    #[error("throughput units must be positive (got read={read}, write={write})")]
    InvalidThroughput { read: i64, write: i64 },

    /// Finalization was attempted with no field carrying the hash key role.
    #[error("no primary key defined")]
    NoPrimaryKey,

    /// The assembled request failed SDK-side construction.
    #[error("invalid create-table request: {0}")]
    Build(#[from] BuildError),
}

/// Result type for schema compilation.
pub type Result<T> = std::result::Result<T, SchemaError>;
