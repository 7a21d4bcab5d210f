use aws_sdk_dynamodb::operation::create_table::CreateTableInput;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, GlobalSecondaryIndex, KeySchemaElement, KeyType, LocalSecondaryIndex,
    Projection, ProjectionType, ProvisionedThroughput,
};

use crate::error::{Result, SchemaError};
use crate::schema::assemble::{
    assemble, AssembledSchema, IndexDefinition, KeyAttribute, ProjectionSpec, Throughput,
};
use crate::schema::describe::TypeDescription;
use crate::schema::inspect::inspect;

/// Compiles a [`TypeDescription`] into a create-table request, with fluent
/// overrides for projections and provisioned throughput.
///
/// Construction runs the whole schema derivation: the description's fields
/// are flattened, their annotations parsed, and every secondary index
/// assembled and validated. The overrides then only touch what they name;
/// they are idempotent and order-independent (last write wins per target).
/// [`TableBuilder::input`] is a pure function of builder state and may be
/// called any number of times.
///
/// # Example
///
/// ```
/// use dynamo_schema::schema::{Field, NativeType, ProjectionSpec, TableBuilder, TypeDescription};
///
/// # fn main() -> Result<(), dynamo_schema::SchemaError> {
/// let description = TypeDescription::new()
///     .field(Field::new("ID", NativeType::String).key("hash").index("Seq-ID-index,range"))
///     .field(Field::new("Seq", NativeType::Integer).index("Seq-ID-index,hash"));
///
/// let input = TableBuilder::new("UserActions", &description)?
///     .project("Seq-ID-index", ProjectionSpec::Include(vec!["ID".into()]))?
///     .provision(4, 2)?
///     .provision_index("Seq-ID-index", 1, 2)?
///     .input()?;
///
/// assert_eq!(input.table_name(), Some("UserActions"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
    table_name: String,
    schema: AssembledSchema,
    throughput: Option<Throughput>,
    index_default: Throughput,
}

impl TableBuilder {
    /// Compiles `description` into a builder for a table named `table_name`.
    ///
    /// Fails on any authoring defect in the description: ambiguous field
    /// names after flattening, malformed annotations, incomplete index key
    /// schemas, or key attributes without a scalar representation.
    pub fn new(table_name: impl Into<String>, description: &TypeDescription) -> Result<Self> {
        let fields = inspect(description)?;
        let schema = assemble(&fields)?;
        Ok(Self {
            table_name: table_name.into(),
            schema,
            throughput: None,
            index_default: Throughput { read: 1, write: 1 },
        })
    }

    /// Returns the table name this builder compiles for.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Sets the projection of the named global or local secondary index.
    ///
    /// Fails if no such index was assembled from the type description, or if
    /// an [`ProjectionSpec::Include`] list is empty.
    pub fn project(mut self, index_name: &str, projection: ProjectionSpec) -> Result<Self> {
        if let ProjectionSpec::Include(attributes) = &projection {
            if attributes.is_empty() {
                return Err(SchemaError::EmptyProjection {
                    index: index_name.to_string(),
                });
            }
        }
        self.index_mut(index_name)?.projection = projection;
        Ok(self)
    }

    /// Sets the table's provisioned throughput. Units must be positive.
    ///
    /// Defaults to (1, 1) when never called; any table expected to serve
    /// real traffic should be provisioned explicitly.
    pub fn provision(mut self, read_units: i64, write_units: i64) -> Result<Self> {
        self.throughput = Some(Throughput::new(read_units, write_units)?);
        Ok(self)
    }

    /// Sets the provisioned throughput of the named global secondary index.
    ///
    /// Fails for unknown index names and for local secondary indexes, which
    /// share the table's capacity and carry none of their own.
    pub fn provision_index(
        mut self,
        index_name: &str,
        read_units: i64,
        write_units: i64,
    ) -> Result<Self> {
        let throughput = Throughput::new(read_units, write_units)?;
        if self.schema.local.iter().any(|i| i.name == index_name) {
            return Err(SchemaError::NotGlobalIndex {
                index: index_name.to_string(),
            });
        }
        let index = self
            .schema
            .global
            .iter_mut()
            .find(|i| i.name == index_name)
            .ok_or_else(|| SchemaError::UnknownIndex {
                index: index_name.to_string(),
            })?;
        index.throughput = Some(throughput);
        Ok(self)
    }

    /// Replaces the (1, 1) throughput applied to global secondary indexes
    /// that were never provisioned explicitly. Units must be positive.
    pub fn default_index_throughput(mut self, read_units: i64, write_units: i64) -> Result<Self> {
        self.index_default = Throughput::new(read_units, write_units)?;
        Ok(self)
    }

    /// Finalizes the builder state into a [`CreateTableInput`].
    ///
    /// Pure with respect to builder state: calling it twice without
    /// intervening overrides yields equal values. Attribute definitions are
    /// deduplicated by name across the primary key and every index key
    /// schema, in first-encounter order.
    pub fn input(&self) -> Result<CreateTableInput> {
        let hash = self.schema.hash.as_ref().ok_or(SchemaError::NoPrimaryKey)?;

        let mut key_schema = vec![key_schema_element(hash, KeyType::Hash)?];
        if let Some(range) = &self.schema.range {
            key_schema.push(key_schema_element(range, KeyType::Range)?);
        }

        let mut global_indexes = Vec::with_capacity(self.schema.global.len());
        for index in &self.schema.global {
            let throughput = index.throughput.unwrap_or(self.index_default);
            global_indexes.push(
                GlobalSecondaryIndex::builder()
                    .index_name(&index.name)
                    .set_key_schema(Some(index_key_schema(index)?))
                    .projection(sdk_projection(&index.projection))
                    .provisioned_throughput(sdk_throughput(throughput)?)
                    .build()?,
            );
        }

        let mut local_indexes = Vec::with_capacity(self.schema.local.len());
        for index in &self.schema.local {
            local_indexes.push(
                LocalSecondaryIndex::builder()
                    .index_name(&index.name)
                    .set_key_schema(Some(index_key_schema(index)?))
                    .projection(sdk_projection(&index.projection))
                    .build()?,
            );
        }

        let throughput = self.throughput.unwrap_or(Throughput { read: 1, write: 1 });

        CreateTableInput::builder()
            .table_name(&self.table_name)
            .set_attribute_definitions(Some(self.attribute_definitions()?))
            .set_key_schema(Some(key_schema))
            .set_global_secondary_indexes((!global_indexes.is_empty()).then_some(global_indexes))
            .set_local_secondary_indexes((!local_indexes.is_empty()).then_some(local_indexes))
            .provisioned_throughput(sdk_throughput(throughput)?)
            .build()
            .map_err(Into::into)
    }

    /// Key attributes across the primary key and every index, deduplicated
    /// by name in first-encounter order.
    fn attribute_definitions(&self) -> Result<Vec<AttributeDefinition>> {
        let mut encountered: Vec<&KeyAttribute> = Vec::new();
        let primary = [&self.schema.hash, &self.schema.range];
        let index_keys = self
            .schema
            .global
            .iter()
            .chain(&self.schema.local)
            .flat_map(|index| [Some(&index.hash), index.range.as_ref()]);

        for attribute in primary
            .into_iter()
            .map(Option::as_ref)
            .chain(index_keys)
            .flatten()
        {
            if !encountered.iter().any(|seen| seen.name == attribute.name) {
                encountered.push(attribute);
            }
        }

        encountered
            .into_iter()
            .map(|attribute| {
                AttributeDefinition::builder()
                    .attribute_name(&attribute.name)
                    .attribute_type(attribute.scalar.clone())
                    .build()
                    .map_err(Into::into)
            })
            .collect()
    }

    fn index_mut(&mut self, index_name: &str) -> Result<&mut IndexDefinition> {
        self.schema
            .global
            .iter_mut()
            .chain(self.schema.local.iter_mut())
            .find(|i| i.name == index_name)
            .ok_or_else(|| SchemaError::UnknownIndex {
                index: index_name.to_string(),
            })
    }
}

fn key_schema_element(attribute: &KeyAttribute, key_type: KeyType) -> Result<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(&attribute.name)
        .key_type(key_type)
        .build()
        .map_err(Into::into)
}

fn index_key_schema(index: &IndexDefinition) -> Result<Vec<KeySchemaElement>> {
    let mut key_schema = vec![key_schema_element(&index.hash, KeyType::Hash)?];
    if let Some(range) = &index.range {
        key_schema.push(key_schema_element(range, KeyType::Range)?);
    }
    Ok(key_schema)
}

fn sdk_projection(projection: &ProjectionSpec) -> Projection {
    match projection {
        ProjectionSpec::All => Projection::builder()
            .projection_type(ProjectionType::All)
            .build(),
        ProjectionSpec::KeysOnly => Projection::builder()
            .projection_type(ProjectionType::KeysOnly)
            .build(),
        ProjectionSpec::Include(attributes) => Projection::builder()
            .projection_type(ProjectionType::Include)
            .set_non_key_attributes(Some(attributes.clone()))
            .build(),
    }
}

fn sdk_throughput(throughput: Throughput) -> Result<ProvisionedThroughput> {
    ProvisionedThroughput::builder()
        .read_capacity_units(throughput.read)
        .write_capacity_units(throughput.write)
        .build()
        .map_err(Into::into)
}
