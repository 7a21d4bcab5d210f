use crate::error::{Result, SchemaError};

/// Role an attribute plays in a key schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// Partition key. Every table and every index has exactly one.
    Hash,
    /// Sort key. Optional; at most one per table or index.
    Range,
}

/// Kind of secondary index an attribute belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Global secondary index, with its own key schema and throughput.
    Global,
    /// Local secondary index, sharing the table's hash key and throughput.
    Local,
}

/// One field's membership in one secondary index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMembership {
    pub index_name: String,
    pub kind: IndexKind,
    pub role: KeyRole,
}

pub(crate) fn parse_role(field: &str, role: &str) -> Result<KeyRole> {
    match role {
        "hash" => Ok(KeyRole::Hash),
        "range" => Ok(KeyRole::Range),
        _ => Err(SchemaError::UnknownKeyRole {
            field: field.to_string(),
            role: role.to_string(),
        }),
    }
}

/// Parses one `"IndexName,role"` entry from an index annotation channel.
pub(crate) fn parse_index_entry(
    field: &str,
    kind: IndexKind,
    entry: &str,
) -> Result<IndexMembership> {
    let malformed = || SchemaError::MalformedIndexEntry {
        field: field.to_string(),
        entry: entry.to_string(),
    };

    let (name, role) = entry.split_once(',').ok_or_else(malformed)?;
    let (name, role) = (name.trim(), role.trim());
    if name.is_empty() || role.contains(',') {
        return Err(malformed());
    }

    Ok(IndexMembership {
        index_name: name.to_string(),
        kind,
        role: parse_role(field, role)?,
    })
}
