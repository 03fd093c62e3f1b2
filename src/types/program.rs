use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single returner programme as published by the API or the bundled
/// dataset file.
///
/// Upstream data is loosely typed, so deserialisation is deliberately
/// lenient: a missing or non-boolean `paid` becomes `false`, a missing or
/// non-numeric `durationWeeks` becomes `0`, and missing lists become empty.
/// Records are never mutated after loading; the catalog only derives views
/// over them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Program {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub paid: bool,
    #[serde(deserialize_with = "lenient_weeks")]
    pub duration_weeks: u32,
    #[serde(deserialize_with = "lenient_strings")]
    pub region: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub tags: Vec<String>,
    pub application_url: Option<String>,
}

impl Program {
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn company_text(&self) -> &str {
        self.company.as_deref().unwrap_or("")
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Only a literal JSON `true` counts as paid; anything else, including
/// numbers and strings, defaults to `false`.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}

/// Accept a JSON number or a numeric string; everything else is zero weeks.
fn lenient_weeks<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let weeks = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(weeks.unwrap_or(0).max(0) as u32)
}

/// Accept an array, keeping only its string entries; anything else is an
/// empty list.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_degrade_to_defaults() {
        let program: Program = serde_json::from_str("{}").expect("parses");
        assert_eq!(program.title_text(), "");
        assert!(!program.paid);
        assert_eq!(program.duration_weeks, 0);
        assert!(program.region.is_empty());
        assert!(program.tags.is_empty());
    }

    #[test]
    fn paid_requires_a_literal_true() {
        let paid: Program = serde_json::from_str(r#"{"paid": true}"#).expect("parses");
        assert!(paid.paid);

        for raw in [r#"{"paid": 1}"#, r#"{"paid": "yes"}"#, r#"{"paid": null}"#] {
            let program: Program = serde_json::from_str(raw).expect("parses");
            assert!(!program.paid, "{raw} should not count as paid");
        }
    }

    #[test]
    fn duration_accepts_numbers_and_numeric_strings() {
        let numeric: Program =
            serde_json::from_str(r#"{"durationWeeks": 24}"#).expect("parses");
        assert_eq!(numeric.duration_weeks, 24);

        let stringly: Program =
            serde_json::from_str(r#"{"durationWeeks": "12"}"#).expect("parses");
        assert_eq!(stringly.duration_weeks, 12);

        let junk: Program =
            serde_json::from_str(r#"{"durationWeeks": "soon"}"#).expect("parses");
        assert_eq!(junk.duration_weeks, 0);
    }

    #[test]
    fn non_array_region_is_empty() {
        let program: Program =
            serde_json::from_str(r#"{"region": "Ireland"}"#).expect("parses");
        assert!(program.region.is_empty());
    }
}
