//! Filter groups: distinct values of the filterable record fields, used for
//! the checkbox UI and matched client-side against row data attributes.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::store::ProjectRecord;

#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    /// Element-id-safe form of the value.
    pub id: String,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterGroup {
    pub key: String,
    pub label: String,
    /// Row data attribute this group matches against.
    pub attr: String,
    /// Multi-valued attributes are `|`-joined and match on any element.
    pub multi: bool,
    pub options: Vec<FilterOption>,
}

/// Collect all filter groups from the record set. Groups with no values are
/// dropped so the UI never renders an empty checkbox section.
pub fn collect_filter_groups(records: &[ProjectRecord]) -> Vec<FilterGroup> {
    let mut category = BTreeSet::new();
    let mut ecosystem = BTreeSet::new();
    let mut layer = BTreeSet::new();
    let mut audience = BTreeSet::new();
    let mut technology = BTreeSet::new();
    let mut business = BTreeSet::new();
    let mut treasury = BTreeSet::new();
    let mut audit = BTreeSet::new();

    for rec in records {
        category.extend(rec.category.iter().cloned());
        ecosystem.extend(rec.ecosystem.iter().cloned());
        layer.extend(rec.layer.iter().cloned());
        audience.extend(rec.target_audience.iter().cloned());
        if let Some(readiness) = &rec.readiness {
            technology.extend(readiness.technology.iter().cloned());
            business.extend(readiness.business.iter().cloned());
        }
        if let Some(v) = rec.treasury_funded {
            treasury.insert(v.to_string());
        }
        if let Some(v) = rec.audit {
            audit.insert(v.to_string());
        }
    }

    let mut groups = vec![
        group("category", "Category", "data-category", true, &category),
        group("ecosystem", "Ecosystem", "data-ecosystem", true, &ecosystem),
        group("layer", "Layer", "data-layer", true, &layer),
        group("audience", "Target Audience", "data-audience", true, &audience),
        group(
            "tech",
            "Technology Readiness",
            "data-tech-readiness",
            false,
            &technology,
        ),
        group(
            "business",
            "Business Readiness",
            "data-business-readiness",
            false,
            &business,
        ),
        group("treasury", "Treasury Funded", "data-treasury", false, &treasury),
        group("audit", "Audited", "data-audit", false, &audit),
    ];
    groups.retain(|g| !g.options.is_empty());
    groups
}

fn group(
    key: &str,
    label: &str,
    attr: &str,
    multi: bool,
    values: &BTreeSet<String>,
) -> FilterGroup {
    FilterGroup {
        key: key.to_string(),
        label: label.to_string(),
        attr: attr.to_string(),
        multi,
        options: values
            .iter()
            .map(|v| FilterOption {
                id: id_safe(v),
                value: v.clone(),
                label: display_label(v),
            })
            .collect(),
    }
}

/// Booleans read better as Yes/No in the UI.
fn display_label(value: &str) -> String {
    match value {
        "true" => "Yes".to_string(),
        "false" => "No".to_string(),
        other => other.to_string(),
    }
}

fn id_safe(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Readiness;

    fn record(category: &[&str], tech: Option<&str>, treasury: Option<bool>) -> ProjectRecord {
        ProjectRecord {
            category: category.iter().map(|s| s.to_string()).collect(),
            readiness: tech.map(|t| Readiness {
                technology: Some(t.to_string()),
                business: None,
            }),
            treasury_funded: treasury,
            ..Default::default()
        }
    }

    #[test]
    fn collects_sorted_unique_values() {
        let records = vec![
            record(&["defi", "tooling"], Some("production"), Some(true)),
            record(&["defi"], Some("beta"), Some(false)),
        ];
        let groups = collect_filter_groups(&records);

        let category = groups.iter().find(|g| g.key == "category").unwrap();
        let values: Vec<_> = category.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["defi", "tooling"]);

        let tech = groups.iter().find(|g| g.key == "tech").unwrap();
        assert!(!tech.multi);
        let values: Vec<_> = tech.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["beta", "production"]);

        let treasury = groups.iter().find(|g| g.key == "treasury").unwrap();
        let labels: Vec<_> = treasury.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["No", "Yes"]);
    }

    #[test]
    fn empty_groups_dropped() {
        let records = vec![record(&[], None, None)];
        let groups = collect_filter_groups(&records);
        assert!(groups.is_empty());
    }

    #[test]
    fn ids_are_element_safe() {
        let records = vec![record(&["DeFi / Lending"], None, None)];
        let groups = collect_filter_groups(&records);
        let option = &groups[0].options[0];
        assert_eq!(option.id, "defi---lending");
        assert!(option.id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }
}
