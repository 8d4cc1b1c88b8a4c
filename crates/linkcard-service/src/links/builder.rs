use std::collections::BTreeMap;

use super::rule::{LinkContext, OutputLink};
use super::table::FIELD_RULES;

/// ## Summary
/// Builds the deep links for a submitted form.
///
/// Fields are visited in table order, not in the order of `fields`. Unknown
/// keys are ignored. The result depends only on the arguments.
#[must_use]
pub fn build_links(fields: &BTreeMap<String, String>, ctx: &LinkContext) -> Vec<OutputLink> {
    FIELD_RULES
        .iter()
        .filter_map(|rule| {
            let raw = fields.get(rule.key)?;
            let link = rule.apply(raw, ctx);
            if link.is_none() && !raw.trim().is_empty() {
                tracing::debug!(field = rule.key, "Field value produced no link");
            }
            link
        })
        .collect()
}
