//! # dynamo-schema
//!
//! Derives DynamoDB create-table requests from declaratively annotated type
//! descriptions.
//!
//! A [`schema::TypeDescription`] registers a data type's fields, native
//! types, and key/index annotations. [`schema::TableBuilder`] compiles the
//! description — flattening embedded descriptions, parsing annotations,
//! resolving attribute types, and assembling secondary indexes — and accepts
//! fluent overrides for projections and provisioned throughput. The
//! finalized `CreateTableInput` maps 1:1 to the DynamoDB wire API and is
//! issued by [`client::DynamoDb`].
//!
//! All schema errors (ambiguous fields, malformed annotations, incomplete
//! index key schemas, bad overrides) are detected before any network call
//! and carry the offending field or index name.
//!
//! ## Example
//!
//! ```no_run
//! use dynamo_schema::client::DynamoDb;
//! use dynamo_schema::schema::{Field, NativeType, ProjectionSpec, TableBuilder, TypeDescription};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let description = TypeDescription::new()
//!     .field(Field::new("ID", NativeType::String).key("hash"))
//!     .field(Field::new("Time", NativeType::Timestamp).key("range"))
//!     .field(Field::new("Seq", NativeType::Integer).index("Seq-ID-index,hash"));
//!
//! let table = TableBuilder::new("UserActions", &description)?
//!     .project("Seq-ID-index", ProjectionSpec::KeysOnly)?
//!     .provision(4, 2)?;
//!
//! let sdk_config = aws_config::load_from_env().await;
//! DynamoDb::new(&sdk_config).create_table_if_not_exists(&table).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod logging;
pub mod schema;

pub use client::DynamoDb;
pub use error::{Result, SchemaError};
