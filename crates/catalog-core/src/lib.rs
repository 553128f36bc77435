pub mod aliases;
pub mod bundles;
pub mod catalog;
pub mod config;
pub mod derive;
pub mod frontmatter;
pub mod record;
pub mod render;
pub mod rules;
pub mod text;

pub use catalog::{Catalog, CatalogBuild, CatalogEntry, CatalogError};
pub use config::Config;
pub use record::SkillRecord;
