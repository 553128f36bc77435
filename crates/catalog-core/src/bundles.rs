//! Keyword bundles and the curated common list.

use crate::catalog::CatalogEntry;
use crate::derive::keyword_set;
use crate::rules::{BundleRule, BUNDLE_RULES, CURATED_COMMON};
use crate::text::OrderedSet;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashSet;

/// Members of one bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bundle {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    /// Member ids, sorted.
    pub skills: Vec<String>,
}

/// Bundles in rule order, serialized as a name-keyed map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundles(pub Vec<Bundle>);

impl Bundles {
    pub fn get(&self, name: &str) -> Option<&Bundle> {
        self.0.iter().find(|bundle| bundle.name == name)
    }
}

impl Serialize for Bundles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for bundle in &self.0 {
            map.serialize_entry(&bundle.name, bundle)?;
        }
        map.end()
    }
}

/// Bundle output: keyword bundles plus the curated common list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BundleSet {
    pub bundles: Bundles,
    pub common: Vec<String>,
}

fn bundle_members(rule: &BundleRule, tokens: &[(&str, OrderedSet)]) -> Vec<String> {
    let keywords: Vec<String> = rule.keywords.iter().map(|kw| kw.to_lowercase()).collect();
    let mut members: Vec<String> = tokens
        .iter()
        .filter(|(_, set)| keywords.iter().any(|kw| set.contains(kw)))
        .map(|(id, _)| (*id).to_string())
        .collect();
    members.sort();
    members
}

/// Groups entries into the fixed keyword bundles.
pub fn build_bundles(entries: &[CatalogEntry]) -> BundleSet {
    let tokens: Vec<(&str, OrderedSet)> = entries
        .iter()
        .map(|e| (e.id.as_str(), keyword_set(&e.tags, &e.name, &e.description)))
        .collect();

    let bundles = BUNDLE_RULES
        .iter()
        .map(|rule| Bundle {
            name: rule.name.to_string(),
            description: rule.description.to_string(),
            skills: bundle_members(rule, &tokens),
        })
        .collect();

    let present: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    let common = CURATED_COMMON
        .iter()
        .filter(|id| present.contains(**id))
        .map(|id| (*id).to_string())
        .collect();

    BundleSet {
        bundles: Bundles(bundles),
        common,
    }
}
