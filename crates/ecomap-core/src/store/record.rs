//! Typed view of one catalog record (one project YAML file).
//!
//! Every field is optional-with-default so partially filled records parse;
//! the table generator and logo fetcher each read only the fields they need.

use serde::{Deserialize, Serialize};

/// One project entry in the ecosystem directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub ecosystem: Vec<String>,
    #[serde(default)]
    pub layer: Vec<String>,
    #[serde(default)]
    pub target_audience: Vec<String>,
    #[serde(default)]
    pub web: WebLinks,
    #[serde(default)]
    pub readiness: Option<Readiness>,
    #[serde(default)]
    pub metrics: Option<Metrics>,
    #[serde(default)]
    pub treasury_funded: Option<bool>,
    #[serde(default)]
    pub audit: Option<bool>,
}

/// Web presence links; `logo` is a filename relative to the image directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebLinks {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub playstore: Option<String>,
    #[serde(default)]
    pub appstore: Option<String>,
    #[serde(default)]
    pub webstore: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Readiness {
    #[serde(default)]
    pub technology: Option<String>,
    #[serde(default)]
    pub business: Option<String>,
}

/// Time series of community/code metrics, one list per source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub github: Vec<MetricPoint>,
    #[serde(default)]
    pub twitter: Vec<MetricPoint>,
    #[serde(default)]
    pub discord: Vec<MetricPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricPoint {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl Metrics {
    /// Latest value of one series, by max date (ISO dates sort lexically).
    pub fn latest(points: &[MetricPoint]) -> Option<&MetricPoint> {
        points.iter().max_by(|a, b| a.date.cmp(&b.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_record() {
        let yaml = "name: Acme\n";
        let rec: ProjectRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rec.name.as_deref(), Some("Acme"));
        assert!(rec.web.logo.is_none());
        assert!(rec.category.is_empty());
    }

    #[test]
    fn parses_full_record() {
        let yaml = r#"
name: Acme
description: A project
category: [defi, tooling]
web:
  site: https://acme.example
  github: https://github.com/acme/acme
  discord: https://discord.gg/acme
  logo: acme.png
readiness:
  technology: production
metrics:
  github:
    - date: "2024-01-01"
      value: 10
    - date: "2024-06-01"
      value: 42
treasury_funded: true
"#;
        let rec: ProjectRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rec.web.logo.as_deref(), Some("acme.png"));
        assert_eq!(rec.category.len(), 2);
        assert_eq!(rec.treasury_funded, Some(true));
        let metrics = rec.metrics.unwrap();
        let latest = Metrics::latest(&metrics.github).unwrap();
        assert_eq!(latest.date, "2024-06-01");
        assert_eq!(latest.value, serde_json::json!(42));
    }

    #[test]
    fn latest_metric_empty_series() {
        assert!(Metrics::latest(&[]).is_none());
    }
}
