//! Terminal output for catalogctl.

use catalog_core::CatalogEntry;

/// Print skills in tabular format.
pub fn print_skill_list(skills: &[&CatalogEntry]) {
    if skills.is_empty() {
        println!("No skills found.");
        return;
    }

    println!("{:<40}  {:<16}  {:<30}", "ID", "CATEGORY", "TAGS");
    println!("{}", "-".repeat(90));

    for skill in skills {
        println!(
            "{:<40}  {:<16}  {:<30}",
            truncate(&skill.id, 40),
            skill.category,
            truncate(&skill.tags.join(","), 30),
        );
    }

    println!();
    println!("{} skill(s)", skills.len());
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}
