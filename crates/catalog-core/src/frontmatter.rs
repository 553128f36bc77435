//! SKILL.md frontmatter extraction.
//!
//! Splits a document into its `---` delimited YAML header and markdown body.
//! Malformed headers never abort: problems are reported as soft error
//! strings and the metadata falls back to an empty mapping.

use serde_yaml::{Mapping, Value};

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// Result of splitting a document into metadata and body.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontmatterParse {
    /// Parsed header mapping (empty when absent or invalid).
    pub metadata: Mapping,
    /// Markdown after the closing delimiter, or the whole document.
    pub body: String,
    /// Soft errors encountered while parsing the header.
    pub errors: Vec<String>,
    /// Whether the document opens with a delimiter line.
    pub has_metadata_block: bool,
}

impl FrontmatterParse {
    fn without_block(content: &str) -> Self {
        Self {
            metadata: Mapping::new(),
            body: content.to_string(),
            errors: Vec::new(),
            has_metadata_block: false,
        }
    }

    /// Returns the header value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }
}

/// Parses a SKILL.md document.
pub fn parse_frontmatter(content: &str) -> FrontmatterParse {
    let sanitized = content.strip_prefix(BOM).unwrap_or(content);
    let lines: Vec<&str> = sanitized
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.first().map(|line| line.trim()) != Some(DELIMITER) {
        return FrontmatterParse::without_block(content);
    }

    let Some(end) = lines
        .iter()
        .skip(1)
        .position(|line| line.trim() == DELIMITER)
        .map(|pos| pos + 1)
    else {
        return FrontmatterParse {
            metadata: Mapping::new(),
            body: content.to_string(),
            errors: vec!["Missing closing frontmatter delimiter (---).".to_string()],
            has_metadata_block: true,
        };
    };

    let mut errors = Vec::new();
    let header = lines[1..end].join("\n");
    let metadata = match serde_yaml::from_str::<Value>(&header) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(_) => {
            errors.push("Frontmatter must be a YAML mapping/object.".to_string());
            Mapping::new()
        }
        Err(e) => {
            errors.push(e.to_string());
            Mapping::new()
        }
    };

    FrontmatterParse {
        metadata,
        body: lines[end + 1..].join("\n"),
        errors,
        has_metadata_block: true,
    }
}
