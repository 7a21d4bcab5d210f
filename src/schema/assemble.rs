use aws_sdk_dynamodb::types::ScalarAttributeType;

use crate::error::{Result, SchemaError};
use crate::schema::inspect::FieldDescriptor;
use crate::schema::tags::{IndexKind, KeyRole};

/// A key attribute with its resolved scalar type.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KeyAttribute {
    pub name: String,
    pub scalar: ScalarAttributeType,
}

/// Which non-key attributes an index copies from the base table.
///
/// `Include` carries the attribute list itself, so supplying attributes with
/// any other projection type is unrepresentable. The list must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionSpec {
    /// Project every attribute.
    All,
    /// Project only the table and index key attributes.
    KeysOnly,
    /// Project the key attributes plus the listed non-key attributes.
    Include(Vec<String>),
}

/// Read/write capacity units for a table or a global secondary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Throughput {
    pub read: i64,
    pub write: i64,
}

impl Throughput {
    pub(crate) fn new(read: i64, write: i64) -> Result<Self> {
        if read <= 0 || write <= 0 {
            return Err(SchemaError::InvalidThroughput { read, write });
        }
        Ok(Self { read, write })
    }
}

/// A fully-validated secondary index: key schema, projection, and (for global
/// indexes) optional explicit throughput.
#[derive(Debug, Clone)]
pub(crate) struct IndexDefinition {
    pub name: String,
    pub kind: IndexKind,
    pub hash: KeyAttribute,
    pub range: Option<KeyAttribute>,
    pub projection: ProjectionSpec,
    pub throughput: Option<Throughput>,
}

/// The assembled schema: primary key plus global and local index definitions,
/// each sequence in first-seen order across the flattened field list.
#[derive(Debug, Clone)]
pub(crate) struct AssembledSchema {
    pub hash: Option<KeyAttribute>,
    pub range: Option<KeyAttribute>,
    pub global: Vec<IndexDefinition>,
    pub local: Vec<IndexDefinition>,
}

struct IndexGroup {
    name: String,
    kind: IndexKind,
    hash: Option<KeyAttribute>,
    range: Option<KeyAttribute>,
}

/// Groups index memberships by index name, validates each group forms a
/// complete key schema, and assembles the table's own primary key.
pub(crate) fn assemble(fields: &[FieldDescriptor]) -> Result<AssembledSchema> {
    let mut hash: Option<KeyAttribute> = None;
    let mut range: Option<KeyAttribute> = None;
    let mut groups: Vec<IndexGroup> = Vec::new();

    for field in fields {
        if let Some(role) = field.key_role {
            let attribute = key_attribute(field)?;
            match role {
                KeyRole::Hash => match &hash {
                    Some(existing) => {
                        return Err(SchemaError::MultipleHashKeys {
                            first: existing.name.clone(),
                            second: attribute.name,
                        })
                    }
                    None => hash = Some(attribute),
                },
                KeyRole::Range => match &range {
                    Some(existing) => {
                        return Err(SchemaError::MultipleRangeKeys {
                            first: existing.name.clone(),
                            second: attribute.name,
                        })
                    }
                    None => range = Some(attribute),
                },
            }
        }

        for membership in &field.indexes {
            let attribute = key_attribute(field)?;
            let position = match groups.iter().position(|g| g.name == membership.index_name) {
                Some(position) => {
                    if groups[position].kind != membership.kind {
                        return Err(SchemaError::IndexKindConflict {
                            index: membership.index_name.clone(),
                        });
                    }
                    position
                }
                None => {
                    groups.push(IndexGroup {
                        name: membership.index_name.clone(),
                        kind: membership.kind,
                        hash: None,
                        range: None,
                    });
                    groups.len() - 1
                }
            };
            let group = &mut groups[position];

            match membership.role {
                KeyRole::Hash => {
                    if group.hash.is_some() {
                        return Err(SchemaError::IndexMultipleHashKeys {
                            index: group.name.clone(),
                        });
                    }
                    group.hash = Some(attribute);
                }
                KeyRole::Range => {
                    if group.range.is_some() {
                        return Err(SchemaError::IndexMultipleRangeKeys {
                            index: group.name.clone(),
                        });
                    }
                    group.range = Some(attribute);
                }
            }
        }
    }

    let mut global = Vec::new();
    let mut local = Vec::new();
    for group in groups {
        let definition = IndexDefinition {
            hash: group.hash.ok_or_else(|| SchemaError::IndexMissingHashKey {
                index: group.name.clone(),
            })?,
            range: group.range,
            name: group.name,
            kind: group.kind,
            projection: ProjectionSpec::All,
            throughput: None,
        };
        match definition.kind {
            IndexKind::Global => global.push(definition),
            IndexKind::Local => local.push(definition),
        }
    }

    Ok(AssembledSchema {
        hash,
        range,
        global,
        local,
    })
}

fn key_attribute(field: &FieldDescriptor) -> Result<KeyAttribute> {
    let scalar = field
        .native
        .scalar_type()
        .ok_or_else(|| SchemaError::UnsupportedKeyType {
            field: field.name.clone(),
        })?;
    Ok(KeyAttribute {
        name: field.name.clone(),
        scalar,
    })
}
