use std::collections::HashSet;

use crate::error::{Result, SchemaError};
use crate::schema::describe::{Entry, Field, NativeType, TypeDescription};
use crate::schema::tags::{parse_index_entry, parse_role, IndexKind, IndexMembership, KeyRole};

/// One field of the flattened type description with its annotations parsed.
/// Produced once per compile; the assembler consumes the sequence in order.
#[derive(Debug, Clone)]
pub(crate) struct FieldDescriptor {
    pub name: String,
    pub native: NativeType,
    pub key_role: Option<KeyRole>,
    pub indexes: Vec<IndexMembership>,
}

/// Walks a type description and yields one descriptor per field, with
/// embedded descriptions spliced in at the embedding point (depth-first,
/// preserving declaration order) and ignored fields dropped.
pub(crate) fn inspect(description: &TypeDescription) -> Result<Vec<FieldDescriptor>> {
    let mut fields = Vec::new();
    flatten(description, &mut fields);

    let mut seen = HashSet::new();
    for field in &fields {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::AmbiguousField {
                name: field.name.clone(),
            });
        }
    }

    fields.iter().map(|field| describe_field(field)).collect()
}

fn flatten<'a>(description: &'a TypeDescription, out: &mut Vec<&'a Field>) {
    for entry in &description.entries {
        match entry {
            Entry::Field(field) if field.ignored => {}
            Entry::Field(field) => out.push(field),
            Entry::Embedded(inner) => flatten(inner, out),
        }
    }
}

fn describe_field(field: &Field) -> Result<FieldDescriptor> {
    let key_role = field
        .key_tag
        .as_deref()
        .map(|role| parse_role(&field.name, role))
        .transpose()?;

    let mut indexes = Vec::new();
    for entry in &field.index_tags {
        indexes.push(parse_index_entry(&field.name, IndexKind::Global, entry)?);
    }
    for entry in &field.local_index_tags {
        indexes.push(parse_index_entry(&field.name, IndexKind::Local, entry)?);
    }

    Ok(FieldDescriptor {
        name: field.name.clone(),
        native: field.native,
        key_role,
        indexes,
    })
}
