//! Markdown rendering of the catalog, grouped by category.

use crate::catalog::Catalog;

/// Description cell width, ellipsis included.
const DESCRIPTION_LIMIT: usize = 160;

/// Truncate to `limit` characters, marking the cut with `...`.
fn truncate(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let kept: String = value.chars().take(limit.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Escape characters that would break a table cell.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Renders the human-readable catalog document.
pub fn render_markdown(catalog: &Catalog) -> String {
    let mut lines: Vec<String> = vec![
        "# Skill Catalog".to_string(),
        String::new(),
        format!("Generated at: {}", catalog.generated_at),
        String::new(),
        format!("Total skills: {}", catalog.total),
        String::new(),
    ];

    for category in catalog.categories() {
        let grouped: Vec<_> = catalog
            .skills
            .iter()
            .filter(|skill| skill.category == category)
            .collect();

        lines.push(format!("## {category} ({})", grouped.len()));
        lines.push(String::new());
        lines.push("| Skill | Description | Tags | Triggers |".to_string());
        lines.push("| --- | --- | --- | --- |".to_string());

        for skill in grouped {
            lines.push(format!(
                "| `{}` | {} | {} | {} |",
                skill.id,
                escape_cell(&truncate(&skill.description, DESCRIPTION_LIMIT)),
                skill.tags.join(", "),
                skill.triggers.join(", "),
            ));
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;

    fn entry(id: &str, category: &str, description: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: id.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            triggers: vec!["a".to_string()],
            path: format!("skills/{id}/SKILL.md"),
        }
    }

    fn catalog(skills: Vec<CatalogEntry>) -> Catalog {
        Catalog {
            generated_at: "2024-05-01T12:30:00.000Z".to_string(),
            total: skills.len(),
            skills,
        }
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijk", 10), "abcdefg...");
        assert_eq!(truncate(&"x".repeat(160), 160).len(), 160);
    }

    #[test]
    fn empty_catalog_has_header_only() {
        let doc = render_markdown(&catalog(Vec::new()));
        assert_eq!(
            doc,
            "# Skill Catalog\n\nGenerated at: 2024-05-01T12:30:00.000Z\n\nTotal skills: 0\n"
        );
    }

    #[test]
    fn groups_by_sorted_category() {
        let doc = render_markdown(&catalog(vec![
            entry("alpha", "testing", "Tests things."),
            entry("beta", "development", "Builds things."),
            entry("gamma", "testing", "More tests."),
        ]));

        let dev = doc.find("## development (1)").unwrap();
        let testing = doc.find("## testing (2)").unwrap();
        assert!(dev < testing);
        assert!(doc.contains("| `alpha` | Tests things. | a, b | a |"));
        assert!(doc.ends_with("| `gamma` | More tests. | a, b | a |\n"));
    }

    #[test]
    fn escapes_pipes_after_truncating() {
        let long = format!("a|b {}", "x".repeat(200));
        let doc = render_markdown(&catalog(vec![entry("pipe", "general", &long)]));

        let row = doc.lines().find(|l| l.starts_with("| `pipe`")).unwrap();
        assert!(row.contains("a\\|b "));
        assert!(row.contains("..."));
    }
}
