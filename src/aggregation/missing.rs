//! Frameworks without an implementation of a component kind, and the
//! call-out sentence naming them.

use crate::core::{Descriptor, EnhancedComponent, Framework};
use crate::io::writers::markdown::{join_list, link, quote, Block};
use std::collections::HashSet;

/// Frameworks with no component joined to `descriptor_id`, in the order of
/// `all_frameworks`.
pub fn compute_missing_frameworks<'a>(
    descriptor_id: &str,
    all_frameworks: &'a [Framework],
    components: &[EnhancedComponent<'_>],
) -> Vec<&'a Framework> {
    let present: HashSet<&str> = components
        .iter()
        .filter(|entry| entry.descriptor.id == descriptor_id)
        .map(|entry| entry.framework.id.as_str())
        .collect();

    all_frameworks
        .iter()
        .filter(|framework| !present.contains(framework.id.as_str()))
        .collect()
}

/// `"<list> appear(s) to be missing a|an <name> component. [File an issue](..) if one now exists."`
///
/// `None` when nothing is missing.
pub fn missing_frameworks_sentence(
    descriptor: &Descriptor,
    missing: &[&Framework],
    issue_url: &str,
) -> Option<String> {
    if missing.is_empty() {
        return None;
    }

    let names: Vec<String> = missing
        .iter()
        .map(|framework| link(&framework.name, framework.repository_url()))
        .collect();
    let verb = if missing.len() == 1 { "appears" } else { "appear" };

    Some(format!(
        "{} {} to be missing {} {} component. {} if one now exists.",
        join_list(&names),
        verb,
        descriptor.article,
        descriptor.name,
        link("File an issue", issue_url)
    ))
}

/// The sentence as a block quote, or nothing.
pub fn missing_frameworks_block(
    descriptor: &Descriptor,
    missing: &[&Framework],
    issue_url: &str,
) -> Option<Block> {
    missing_frameworks_sentence(descriptor, missing, issue_url)
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| quote(&sentence))
}
