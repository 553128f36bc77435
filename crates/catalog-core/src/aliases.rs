//! Alias table: alternate lookup keys for skills.
//!
//! Aliases come from display names and from compressing long hyphenated ids
//! into `first-second-last`. Collisions resolve in favor of the entry that
//! sorts first by id; later candidates are dropped.

use crate::catalog::CatalogEntry;
use crate::text::{unique, OrderedSet};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;
use tracing::debug;

/// Ids at least this long are candidates for compression.
const LONG_ID_LEN: usize = 28;
/// Ids with at least this many segments are candidates for compression.
const LONG_ID_SEGMENTS: usize = 4;

/// Insertion-ordered mapping of alias to canonical skill id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
}

impl AliasTable {
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == alias)
            .map(|(_, id)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, id)| (a.as_str(), id.as_str()))
    }
}

impl Serialize for AliasTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (alias, id) in &self.entries {
            map.serialize_entry(alias, id)?;
        }
        map.end()
    }
}

/// Accumulates aliases while enforcing the no-collision rules.
struct AliasBuilder<'a> {
    ids: HashSet<&'a str>,
    claimed: OrderedSet,
    table: AliasTable,
}

impl<'a> AliasBuilder<'a> {
    fn new(entries: &'a [CatalogEntry]) -> Self {
        Self {
            ids: entries.iter().map(|e| e.id.as_str()).collect(),
            claimed: OrderedSet::new(),
            table: AliasTable::default(),
        }
    }

    fn claim(&mut self, alias: String, id: &str) {
        if self.ids.contains(alias.as_str()) {
            debug!(alias = %alias, skill = %id, "alias shadows a skill id, dropping");
            return;
        }
        if !self.claimed.insert(alias.clone()) {
            debug!(alias = %alias, skill = %id, "alias already claimed, dropping");
            return;
        }
        self.table.entries.push((alias, id.to_string()));
    }
}

/// Compresses a long id into `first-second-last`.
///
/// Returns `None` when the id is short, has few segments, or compression
/// would not change it.
pub fn compress_id(id: &str) -> Option<String> {
    let segments: Vec<&str> = id.split('-').filter(|s| !s.is_empty()).collect();
    if id.len() < LONG_ID_LEN && segments.len() < LONG_ID_SEGMENTS {
        return None;
    }

    let deduped = unique(segments);
    let picked: Vec<String> = if deduped.len() > 3 {
        vec![
            deduped[0].clone(),
            deduped[1].clone(),
            deduped[deduped.len() - 1].clone(),
        ]
    } else {
        deduped
    };

    let alias = unique(picked).join("-");
    (!alias.is_empty() && alias != id).then_some(alias)
}

/// Builds the alias table over entries already sorted by id.
pub fn build_aliases(entries: &[CatalogEntry]) -> AliasTable {
    let mut builder = AliasBuilder::new(entries);

    for entry in entries {
        if !entry.name.is_empty() && entry.name != entry.id {
            builder.claim(entry.name.to_lowercase(), &entry.id);
        }
        if let Some(alias) = compress_id(&entry.id) {
            builder.claim(alias, &entry.id);
        }
    }

    debug!(count = builder.table.len(), "built alias table");
    builder.table
}
