//! Plan Content Generator — lays topics out one per day.
//!
//! Pure and deterministic: the same template and day count always produce the
//! same lines.

use crate::planning::templates::{TemplateCatalog, TopicTemplate};

/// Plans up to this many days draw only from the core topics.
pub const STANDARD_PLAN_DAYS: u32 = 7;

/// Returns one `"Day {n}: {text}"` line per day.
///
/// - `total_days <= 7`: `core[i]`, or `pool[i % pool.len()]` if `core` is
///   shorter than the plan.
/// - `total_days > 7`: `pool[i]` while the pool lasts, then
///   `"Practice and review - {topic} (Cycle {c})"` with
///   `topic = pool[i % pool.len()]` and `c = i / pool.len() + 1`.
pub fn generate_plan(template: &TopicTemplate, total_days: u32) -> Vec<String> {
    let pool = template.pool();
    if pool.is_empty() {
        return Vec::new();
    }

    (0..total_days as usize)
        .map(|i| {
            let topic = pool[i % pool.len()];
            let text = if total_days <= STANDARD_PLAN_DAYS {
                template
                    .core
                    .get(i)
                    .map(String::as_str)
                    .unwrap_or(topic)
                    .to_string()
            } else if i < pool.len() {
                topic.to_string()
            } else {
                let cycle = i / pool.len() + 1;
                format!("Practice and review - {topic} (Cycle {cycle})")
            };
            format!("Day {}: {}", i + 1, text)
        })
        .collect()
}

/// Looks up the (subject, level) template and generates the plan from it.
pub fn generate_plan_for(
    catalog: &TemplateCatalog,
    subject: &str,
    level: &str,
    total_days: u32,
) -> Vec<String> {
    let template = catalog.lookup(subject, level);
    generate_plan(&template, total_days)
}
