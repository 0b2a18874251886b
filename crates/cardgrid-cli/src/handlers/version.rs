use crate::output;
use cardgrid_core::{compare_versions, AppConfig, Version};
use std::cmp::Ordering;

pub fn handle_compare(a: &str, b: &str) -> anyhow::Result<()> {
    let ordering = match compare_versions(a, b)? {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    output::output_success(serde_json::json!({ "a": a, "b": b, "ordering": ordering }));
    Ok(())
}

pub fn handle_stacking(config: &AppConfig, host_version: &str) -> anyhow::Result<()> {
    let policy = config.stacking_policy()?;
    let version: Version = host_version.parse()?;
    output::output_success(serde_json::json!({
        "host_version": version.to_string(),
        "baseline": policy.baseline.to_string(),
        "stacking_order": policy.stacking_for(&version),
    }));
    Ok(())
}
