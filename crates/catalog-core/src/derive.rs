//! Per-skill derivation: tags, category and trigger keywords.
//!
//! All functions here are pure; the same record always yields the same
//! output.

use crate::record::SkillRecord;
use crate::rules::{is_stopword, is_tag_stopword, CATEGORY_RULES, DEFAULT_CATEGORY};
use crate::text::{tokenize, unique, OrderedSet};

/// Maximum number of trigger keywords kept per skill.
pub const MAX_TRIGGERS: usize = 12;

/// Shortest token accepted as a trigger.
const MIN_TRIGGER_LEN: usize = 2;

/// Canonical tag list: declared tags, or the id's segments minus noise words.
pub fn derive_tags(skill: &SkillRecord) -> Vec<String> {
    let declared: Vec<String> = skill
        .tags
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    if !declared.is_empty() {
        return unique(declared);
    }

    unique(
        skill
            .id
            .split('-')
            .map(str::to_lowercase)
            .filter(|segment| !segment.is_empty() && !is_tag_stopword(segment)),
    )
}

/// Tags plus name and description tokens, deduplicated.
pub fn keyword_set(tags: &[String], name: &str, description: &str) -> OrderedSet {
    let mut set: OrderedSet = tags.iter().map(|tag| tag.to_lowercase()).collect();
    set.extend(tokenize(name));
    set.extend(tokenize(description));
    set
}

/// Picks the first category rule with any keyword in the skill's keyword set.
pub fn detect_category(skill: &SkillRecord, tags: &[String]) -> &'static str {
    let haystack = keyword_set(tags, &skill.name, &skill.description);

    CATEGORY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| haystack.contains(kw)))
        .map_or(DEFAULT_CATEGORY, |rule| rule.name)
}

/// Search keywords: tags first, then significant name/description tokens.
pub fn build_triggers(skill: &SkillRecord, tags: &[String]) -> Vec<String> {
    let tokens = tokenize(&format!("{} {}", skill.name, skill.description))
        .into_iter()
        .filter(|token| token.len() >= MIN_TRIGGER_LEN && !is_stopword(token));

    let mut triggers = unique(tags.iter().cloned().chain(tokens));
    triggers.truncate(MAX_TRIGGERS);
    triggers
}
