//! # Schema Compiler
//!
//! Derives a DynamoDB table schema from a declaratively-annotated type
//! description: primary key, secondary indexes, projections, and provisioned
//! throughput, assembled into one `CreateTableInput`.
//!
//! ## Components
//!
//! - `TypeDescription` / `Field` / `NativeType`: explicit registration of a
//!   data type's fields, their native types, and their key/index annotations.
//! - `TableBuilder`: compiles a description and accepts fluent overrides
//!   (`project`, `provision`, `provision_index`) before finalization.
//! - `ProjectionSpec`: which non-key attributes an index copies from the
//!   base table.
//!
//! ## Annotations
//!
//! Each field carries up to two annotation channels:
//!
//! - the primary-key channel (`.key("hash")` / `.key("range")`), naming the
//!   field's role in the table's own key;
//! - secondary-index channels (`.index("Name,role")` for global indexes,
//!   `.local_index("Name,role")` for local ones), repeatable per field.
//!
//! ## Example
//!
//! ```
//! use dynamo_schema::schema::{Field, NativeType, TableBuilder, TypeDescription};
//!
//! # fn main() -> Result<(), dynamo_schema::SchemaError> {
//! let description = TypeDescription::new()
//!     .field(Field::new("UserID", NativeType::String).key("hash"))
//!     .field(Field::new("Time", NativeType::Timestamp).key("range"))
//!     .field(Field::new("UUID", NativeType::String).index("UUID-index,hash"));
//!
//! let input = TableBuilder::new("UserActions", &description)?
//!     .provision(4, 2)?
//!     .input()?;
//! # Ok(())
//! # }
//! ```
//!
//! Compilation is synchronous and side-effect free; the resulting
//! `CreateTableInput` is handed to [`DynamoDb`](crate::client::DynamoDb) for
//! the actual service call.

mod assemble;
mod builder;
mod describe;
mod inspect;
mod tags;

pub use assemble::ProjectionSpec;
pub use builder::TableBuilder;
pub use describe::{Field, NativeType, TypeDescription};
pub use tags::{IndexKind, IndexMembership, KeyRole};
