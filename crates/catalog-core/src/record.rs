//! Skill records: corpus scanning and declared metadata.
//!
//! A skill is a subdirectory of the skills directory containing a SKILL.md.
//! The directory name is the skill id; everything else is read from the
//! frontmatter and may be missing or malformed.

use crate::catalog::{CatalogError, Result};
use crate::frontmatter::parse_frontmatter;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the skill document inside each skill directory.
pub const SKILL_FILE: &str = "SKILL.md";

/// Tags as declared in frontmatter, before normalization.
///
/// Authors write tags either as a YAML list or as a single string; both
/// shapes may also appear nested under `metadata.tags`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredTags {
    /// `tags: [a, b]` or a block sequence.
    List(Vec<String>),
    /// `tags: "a, b"` or `tags: a b`.
    Delimited(String),
}

impl DeclaredTags {
    /// Locates declared tags in a frontmatter mapping.
    ///
    /// A top-level `tags` field wins over `metadata.tags`.
    pub fn from_metadata(metadata: &Mapping) -> Option<Self> {
        Self::from_value(metadata.get("tags")).or_else(|| {
            metadata
                .get("metadata")
                .and_then(Value::as_mapping)
                .and_then(|nested| Self::from_value(nested.get("tags")))
        })
    }

    fn from_value(value: Option<&Value>) -> Option<Self> {
        match value? {
            Value::Sequence(items) => Some(Self::List(items.iter().map(scalar_text).collect())),
            Value::String(text) if !text.trim().is_empty() => Some(Self::Delimited(text.clone())),
            _ => None,
        }
    }

    /// Trimmed, non-empty tag strings in declaration order.
    pub fn normalize(&self) -> Vec<String> {
        let parts: Vec<&str> = match self {
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::Delimited(text) if text.contains(',') => text.split(',').collect(),
            Self::Delimited(text) => text.split_whitespace().collect(),
        };
        parts
            .into_iter()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Renders a YAML scalar as text; non-scalars render empty and are dropped.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// One skill as read from the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRecord {
    /// Directory name; the only stable identity.
    pub id: String,
    /// Declared display name, or the id.
    pub name: String,
    /// Declared description, or empty.
    pub description: String,
    /// Declared tags after shape normalization (not yet lowercased).
    pub tags: Vec<String>,
    /// Absolute path of the SKILL.md file.
    pub path: PathBuf,
    /// Raw document text.
    pub content: String,
    /// Soft frontmatter errors.
    pub errors: Vec<String>,
}

impl SkillRecord {
    /// Builds a record from an already-read document.
    pub fn from_document(id: &str, path: PathBuf, content: String) -> Self {
        let parsed = parse_frontmatter(&content);

        let name = parsed
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(id)
            .to_string();

        let description = parsed
            .get("description")
            .and_then(Value::as_str)
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        let tags = DeclaredTags::from_metadata(&parsed.metadata)
            .map(|declared| declared.normalize())
            .unwrap_or_default();

        Self {
            id: id.to_string(),
            name,
            description,
            tags,
            path,
            content,
            errors: parsed.errors,
        }
    }
}

/// Lists skill ids: visible subdirectories of `skills_dir`, sorted.
pub fn list_skill_ids(skills_dir: &Path) -> Result<Vec<String>> {
    let list_err = |source| CatalogError::ListDir {
        path: skills_dir.to_path_buf(),
        source,
    };

    let mut ids = Vec::new();
    for entry in fs::read_dir(skills_dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        if !entry.path().is_dir() {
            continue;
        }
        ids.push(name);
    }
    ids.sort();

    debug!(path = %skills_dir.display(), count = ids.len(), "listed skill directories");
    Ok(ids)
}

/// Reads and parses `<skills_dir>/<id>/SKILL.md`.
///
/// A read failure is fatal for the whole run; frontmatter problems are only
/// logged.
pub fn read_skill(skills_dir: &Path, id: &str) -> Result<SkillRecord> {
    let path = skills_dir.join(id).join(SKILL_FILE);
    let content = fs::read_to_string(&path).map_err(|source| CatalogError::Read {
        path: path.clone(),
        source,
    })?;

    let record = SkillRecord::from_document(id, path, content);
    for error in &record.errors {
        warn!(skill = %id, error = %error, "invalid SKILL.md frontmatter");
    }
    Ok(record)
}

/// Reads every skill in the corpus, stopping at the first failure.
pub fn read_all(skills_dir: &Path) -> Result<Vec<SkillRecord>> {
    list_skill_ids(skills_dir)?
        .iter()
        .map(|id| read_skill(skills_dir, id))
        .collect()
}
