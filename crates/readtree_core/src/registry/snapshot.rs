//! Snapshot file codec.
//!
//! # Responsibility
//! - Encode a registry as a pretty-printed UTF-8 JSON array.
//! - Decode a snapshot into validated works, separating syntax errors from
//!   schema errors.
//!
//! # Invariants
//! - Non-ASCII text is written verbatim, never as `\u` escapes.
//! - Decoding is all-or-nothing: any bad entry fails the whole snapshot.
//! - Missing or blank ids are regenerated; missing titles are errors.

use super::{RegistryError, RegistryResult};
use crate::model::work::{Work, WorkId};
use log::warn;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Raw snapshot entry before invariants are checked.
///
/// Every field is optional here so that a missing `title` surfaces as a
/// schema error with the entry index instead of a generic serde message.
#[derive(Debug, Deserialize)]
struct SnapshotEntry {
    id: Option<String>,
    title: Option<String>,
    author: Option<String>,
    image_url: Option<String>,
    antes: Option<Vec<String>>,
}

/// Serializes works in the given order.
pub fn encode<'a>(works: impl IntoIterator<Item = &'a Work>) -> RegistryResult<String> {
    let works: Vec<&Work> = works.into_iter().collect();
    let mut text = serde_json::to_string_pretty(&works).map_err(RegistryError::Encode)?;
    text.push('\n');
    Ok(text)
}

/// Parses snapshot bytes into works.
///
/// # Errors
/// - `RegistryError::Parse` when `bytes` is not UTF-8 JSON.
/// - `RegistryError::Schema` when the document is not an array of work
///   objects, an entry has a missing/blank title or wrong field types, or
///   titles/ids repeat.
pub fn decode(bytes: &[u8]) -> RegistryResult<Vec<Work>> {
    let document: Value = serde_json::from_slice(bytes).map_err(RegistryError::Parse)?;
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(RegistryError::schema(
                None,
                format!("expected an array of works, found {}", value_kind(&other)),
            ));
        }
    };

    let mut works = Vec::with_capacity(items.len());
    let mut seen_titles = HashSet::new();
    let mut seen_ids = HashSet::new();

    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(RegistryError::schema(
                Some(index),
                format!("expected an object, found {}", value_kind(&item)),
            ));
        }

        let entry: SnapshotEntry = serde_json::from_value(item)
            .map_err(|err| RegistryError::schema(Some(index), err.to_string()))?;
        let work = entry_into_work(index, entry)?;

        if !seen_titles.insert(work.title.clone()) {
            return Err(RegistryError::schema(
                Some(index),
                format!("duplicate title `{}`", work.title),
            ));
        }
        if !seen_ids.insert(work.id.clone()) {
            return Err(RegistryError::schema(
                Some(index),
                format!("duplicate id `{}`", work.id),
            ));
        }
        works.push(work);
    }

    Ok(works)
}

fn entry_into_work(index: usize, entry: SnapshotEntry) -> RegistryResult<Work> {
    let title = entry
        .title
        .ok_or_else(|| RegistryError::schema(Some(index), "missing required field `title`"))?;

    let id = match entry.id.and_then(WorkId::parse) {
        Some(id) => id,
        None => {
            let id = WorkId::generate();
            warn!(
                "event=snapshot_decode module=registry status=repaired entry={} reason=missing_id new_id={}",
                index, id
            );
            id
        }
    };

    let work = Work {
        id,
        title,
        author: entry.author,
        image_url: entry.image_url,
        prerequisites: entry.antes.unwrap_or_default(),
    };
    work.validate()
        .map_err(|err| RegistryError::schema(Some(index), err.to_string()))?;
    Ok(work)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
