//! Catalog assembly and artifact output.
//!
//! A run reads every skill, derives one [`CatalogEntry`] per skill, sorts
//! entries by id, builds aliases and bundles over the sorted entries, then
//! writes the catalog, markdown, bundle and alias files. Any read failure
//! aborts before the first write.

use crate::aliases::{build_aliases, AliasTable};
use crate::bundles::{build_bundles, BundleSet};
use crate::config::Config;
use crate::derive::{build_triggers, derive_tags, detect_category};
use crate::record::{read_all, SkillRecord};
use crate::render::render_markdown;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to list skills directory {}: {source}", .path.display())]
    ListDir { path: PathBuf, source: io::Error },
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize {name}: {source}")]
    Serialize {
        name: &'static str,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// One cataloged skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub triggers: Vec<String>,
    /// SKILL.md location relative to the catalog root, `/`-separated.
    pub path: String,
}

/// Snapshot of the whole corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub generated_at: String,
    pub total: usize,
    pub skills: Vec<CatalogEntry>,
}

impl Catalog {
    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.skills.iter().map(|s| s.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.skills
            .binary_search_by(|entry| entry.id.as_str().cmp(id))
            .ok()
            .map(|idx| &self.skills[idx])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleFile {
    pub generated_at: String,
    #[serde(flatten)]
    pub set: BundleSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasFile {
    pub generated_at: String,
    pub aliases: AliasTable,
}

/// Everything a run produces, sharing one timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogBuild {
    pub catalog: Catalog,
    pub bundles: BundleFile,
    pub aliases: AliasFile,
}

impl CatalogBuild {
    /// Resolves a skill id or alias (case-insensitive) to a canonical id.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        let query = query.trim().to_lowercase();
        if let Some(entry) = self.catalog.get(&query) {
            return Some(entry.id.as_str());
        }
        self.aliases.aliases.get(&query)
    }
}

/// Formats a timestamp the way catalog files record it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders `path` relative to `root` with `/` separators, stepping out of
/// `root` with `..` when needed. Paths sharing no prefix with `root` (another
/// drive, or one side relative) are kept whole.
fn relative_path(path: &Path, root: &Path) -> String {
    let path_parts: Vec<Component> = path.components().filter(|c| *c != Component::CurDir).collect();
    let root_parts: Vec<Component> = root.components().filter(|c| *c != Component::CurDir).collect();
    let common = path_parts
        .iter()
        .zip(&root_parts)
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 && (path.has_root() || root.has_root()) {
        return path.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/");
    }

    std::iter::repeat("..".to_string())
        .take(root_parts.len() - common)
        .chain(
            path_parts[common..]
                .iter()
                .map(|c| c.as_os_str().to_string_lossy().into_owned()),
        )
        .collect::<Vec<_>>()
        .join("/")
}

/// Derives the catalog entry for one skill.
pub fn build_entry(skill: &SkillRecord, root: &Path) -> CatalogEntry {
    let tags = derive_tags(skill);
    let category = detect_category(skill, &tags);
    let triggers = build_triggers(skill, &tags);

    debug!(
        skill = %skill.id,
        category,
        tags = tags.len(),
        triggers = triggers.len(),
        "derived catalog entry"
    );

    CatalogEntry {
        id: skill.id.clone(),
        name: skill.name.clone(),
        description: skill.description.clone(),
        category: category.to_string(),
        tags,
        triggers,
        path: relative_path(&skill.path, root),
    }
}

/// Builds the sorted catalog and the alias/bundle tables from records.
pub fn assemble(records: &[SkillRecord], root: &Path, generated_at: DateTime<Utc>) -> CatalogBuild {
    let mut skills: Vec<CatalogEntry> = records.iter().map(|r| build_entry(r, root)).collect();
    skills.sort_by(|a, b| a.id.cmp(&b.id));

    let generated_at = format_timestamp(generated_at);
    let aliases = build_aliases(&skills);
    let bundles = build_bundles(&skills);

    CatalogBuild {
        catalog: Catalog {
            generated_at: generated_at.clone(),
            total: skills.len(),
            skills,
        },
        bundles: BundleFile {
            generated_at: generated_at.clone(),
            set: bundles,
        },
        aliases: AliasFile {
            generated_at,
            aliases,
        },
    }
}

/// Reads the corpus named by `config` and assembles it in memory.
pub fn build(config: &Config, generated_at: DateTime<Utc>) -> Result<CatalogBuild> {
    let records = read_all(&config.skills_dir)?;
    Ok(assemble(&records, &config.root, generated_at))
}

fn to_json<T: Serialize>(name: &'static str, value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| CatalogError::Serialize { name, source })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)?;
    info!(path = %path.display(), bytes = contents.len(), "wrote catalog artifact");
    Ok(())
}

/// Writes the catalog artifacts in sequence.
pub fn write_outputs(build: &CatalogBuild, config: &Config) -> Result<()> {
    write_file(&config.catalog_path, &to_json("catalog", &build.catalog)?)?;
    if config.write_markdown {
        write_file(&config.markdown_path, &render_markdown(&build.catalog))?;
    }
    write_file(&config.bundles_path, &to_json("bundles", &build.bundles)?)?;
    write_file(&config.aliases_path, &to_json("aliases", &build.aliases)?)?;
    Ok(())
}

/// Full run: read, assemble, write. Returns the build for reporting.
pub fn generate(config: &Config, generated_at: DateTime<Utc>) -> Result<CatalogBuild> {
    let build = build(config, generated_at)?;
    write_outputs(&build, config)?;
    info!(total = build.catalog.total, "generated skill catalog");
    Ok(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str, name: &str, description: &str, tags: &[&str]) -> SkillRecord {
        SkillRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            path: PathBuf::from(format!("/repo/skills/{id}/SKILL.md")),
            content: String::new(),
            errors: Vec::new(),
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn entry_path_is_relative_to_root() {
        let entry = build_entry(&record("rust-pro", "rust-pro", "", &[]), Path::new("/repo"));
        assert_eq!(entry.path, "skills/rust-pro/SKILL.md");
    }

    #[test]
    fn entry_path_outside_root_steps_up() {
        assert_eq!(
            relative_path(Path::new("/elsewhere/skills/x/SKILL.md"), Path::new("/repo")),
            "../elsewhere/skills/x/SKILL.md"
        );
        assert_eq!(
            relative_path(Path::new("/repo/skills/x/SKILL.md"), Path::new("/repo/docs")),
            "../skills/x/SKILL.md"
        );
    }

    #[test]
    fn assemble_sorts_by_id() {
        let records = vec![
            record("zeta-tool", "zeta-tool", "", &[]),
            record("alpha", "alpha", "", &[]),
            record("mid-skill", "mid-skill", "", &[]),
        ];
        let build = assemble(&records, Path::new("/repo"), fixed_time());
        let ids: Vec<_> = build.catalog.skills.iter().map(|s| s.id.as_str()).collect();

        assert_eq!(ids, vec!["alpha", "mid-skill", "zeta-tool"]);
        assert_eq!(build.catalog.total, 3);
    }

    #[test]
    fn artifacts_share_timestamp() {
        let build = assemble(&[], Path::new("/repo"), fixed_time());
        assert_eq!(build.catalog.generated_at, "2024-05-01T12:30:00.000Z");
        assert_eq!(build.bundles.generated_at, build.catalog.generated_at);
        assert_eq!(build.aliases.generated_at, build.catalog.generated_at);
    }

    #[test]
    fn catalog_serializes_camel_case() {
        let build = assemble(
            &[record("rust-pro", "Rust Pro", "Write Rust.", &["rust"])],
            Path::new("/repo"),
            fixed_time(),
        );
        let json = serde_json::to_value(&build.catalog).unwrap();

        assert_eq!(json["generatedAt"], "2024-05-01T12:30:00.000Z");
        assert_eq!(json["total"], 1);
        assert_eq!(json["skills"][0]["category"], "development");
        assert_eq!(json["skills"][0]["path"], "skills/rust-pro/SKILL.md");
    }

    #[test]
    fn bundle_file_flattens_bundle_set() {
        let build = assemble(&[record("rust-pro", "rust-pro", "", &[])], Path::new("/repo"), fixed_time());
        let json = serde_json::to_value(&build.bundles).unwrap();

        assert!(json["generatedAt"].is_string());
        assert!(json["bundles"]["core-dev"].is_object());
        assert_eq!(json["common"][0], "rust-pro");
    }

    #[test]
    fn resolve_accepts_ids_and_aliases() {
        let build = assemble(
            &[record("rust-pro", "Rust Pro", "", &[])],
            Path::new("/repo"),
            fixed_time(),
        );
        assert_eq!(build.resolve("rust-pro"), Some("rust-pro"));
        assert_eq!(build.resolve("Rust Pro"), Some("rust-pro"));
        assert_eq!(build.resolve("python-pro"), None);
    }

    #[test]
    fn categories_are_sorted_and_distinct() {
        let build = assemble(
            &[
                record("rust-pro", "rust-pro", "", &[]),
                record("owasp-audit", "owasp-audit", "", &[]),
                record("golang-pro", "golang-pro", "", &[]),
            ],
            Path::new("/repo"),
            fixed_time(),
        );
        assert_eq!(build.catalog.categories(), vec!["development", "security"]);
    }
}
