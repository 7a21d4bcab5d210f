use aws_sdk_dynamodb::types::ScalarAttributeType;

/// Describes the native type of a field in a registered type description.
///
/// DynamoDB keys and index attributes must be one of three scalar kinds:
/// string (`S`), number (`N`), or binary (`B`). Fields that only hold item
/// data may use any variant; only fields that participate in the table's
/// primary key or in a secondary index need a scalar representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeType {
    /// UTF-8 text, stored as a DynamoDB string (`S`).
    String,
    /// Signed or unsigned integer, stored as a DynamoDB number (`N`).
    Integer,
    /// Floating-point number, stored as a DynamoDB number (`N`).
    Float,
    /// Raw byte sequence, stored as DynamoDB binary (`B`).
    Bytes,
    /// Point in time, serialized to an RFC 3339 string (`S`).
    Timestamp,
    /// Boolean. Not usable as a key or index attribute.
    Boolean,
    /// Ordered collection. Not usable as a key or index attribute.
    List,
    /// Nested attribute map. Not usable as a key or index attribute.
    Map,
}

impl NativeType {
    /// The scalar attribute type used when this field serves as a key or
    /// index attribute, or `None` if the type cannot be a key.
    pub(crate) fn scalar_type(self) -> Option<ScalarAttributeType> {
        match self {
            NativeType::String | NativeType::Timestamp => Some(ScalarAttributeType::S),
            NativeType::Integer | NativeType::Float => Some(ScalarAttributeType::N),
            NativeType::Bytes => Some(ScalarAttributeType::B),
            NativeType::Boolean | NativeType::List | NativeType::Map => None,
        }
    }
}

/// A single field registration: the attribute name, its native type, and its
/// annotation channels.
///
/// Two independent channels describe key membership:
///
/// - the primary-key channel ([`Field::key`]), whose value is `hash` or
///   `range` and names the field's role in the table's own key;
/// - the secondary-index channels ([`Field::index`] for global indexes,
///   [`Field::local_index`] for local ones), each entry of the form
///   `"IndexName,role"`. A field may appear in any number of index entries,
///   e.g. as the range key of one index and the hash key of another.
///
/// # Example
///
/// ```
/// use dynamo_schema::schema::{Field, NativeType};
///
/// let field = Field::new("Seq", NativeType::Integer)
///     .index("Seq-ID-index,hash")
///     .local_index("ID-Seq-index,range");
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) native: NativeType,
    pub(crate) key_tag: Option<String>,
    pub(crate) index_tags: Vec<String>,
    pub(crate) local_index_tags: Vec<String>,
    pub(crate) ignored: bool,
}

impl Field {
    /// Creates a field registration with no annotations.
    pub fn new(name: impl Into<String>, native: NativeType) -> Self {
        Self {
            name: name.into(),
            native,
            key_tag: None,
            index_tags: Vec::new(),
            local_index_tags: Vec::new(),
            ignored: false,
        }
    }

    /// Marks this field's role in the table's primary key: `"hash"` or
    /// `"range"`.
    pub fn key(mut self, role: impl Into<String>) -> Self {
        self.key_tag = Some(role.into());
        self
    }

    /// Adds a global secondary index membership, `"IndexName,role"`.
    pub fn index(mut self, entry: impl Into<String>) -> Self {
        self.index_tags.push(entry.into());
        self
    }

    /// Adds a local secondary index membership, `"IndexName,role"`.
    pub fn local_index(mut self, entry: impl Into<String>) -> Self {
        self.local_index_tags.push(entry.into());
        self
    }

    /// Excludes this field from compilation entirely.
    pub fn ignore(mut self) -> Self {
        self.ignored = true;
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Entry {
    Field(Field),
    Embedded(TypeDescription),
}

/// A declarative description of a data type's fields, registered explicitly
/// and compiled into a create-table request by
/// [`TableBuilder::new`](crate::schema::TableBuilder::new).
///
/// Embedded descriptions are spliced into the parent's field list at the
/// embedding point, depth-first and in declaration order, as if their fields
/// were declared directly on the enclosing type.
///
/// # Example
///
/// ```
/// use dynamo_schema::schema::{Field, NativeType, TypeDescription};
///
/// let audit = TypeDescription::new()
///     .field(Field::new("CreatedBy", NativeType::String).index("CreatedBy-index,hash"));
///
/// let description = TypeDescription::new()
///     .field(Field::new("ID", NativeType::String).key("hash"))
///     .field(Field::new("Time", NativeType::Timestamp).key("range"))
///     .embed(audit);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeDescription {
    pub(crate) entries: Vec<Entry>,
}

impl TypeDescription {
    /// Creates an empty type description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field and returns the modified description.
    pub fn field(mut self, field: Field) -> Self {
        self.entries.push(Entry::Field(field));
        self
    }

    /// Embeds another description at this position and returns the modified
    /// description.
    pub fn embed(mut self, inner: TypeDescription) -> Self {
        self.entries.push(Entry::Embedded(inner));
        self
    }
}
