//! Scheme rows as returned by the dataset, and their translated copies.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};


/// Primary key of a scheme row. Hosted tables use either serial integers or
/// text/uuid keys, so both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum SchemeId {
    Int(i64),
    String(String),
}

impl Display for SchemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemeId::Int(i) => write!(f, "{i}"),
            SchemeId::String(s) => write!(f, "{s}"),
        }
    }
}

/// Income column as stored. Integer, numeric and text columns are all kept
/// and shown the way the dataset sends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncomeValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Display for IncomeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncomeValue::Int(i) => write!(f, "{i}"),
            IncomeValue::Float(x) => write!(f, "{x}"),
            IncomeValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for IncomeValue {
    fn from(value: i64) -> Self {
        IncomeValue::Int(value)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeRecord {
    pub id: SchemeId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scheme: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub income: Option<IncomeValue>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub organization: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// A scheme whose name and description were translated into `language`.
/// Every other column is carried over untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedSchemeRecord {
    pub id: SchemeId,
    pub scheme: String,
    pub description: String,
    pub income: Option<IncomeValue>,
    pub region: String,
    pub education: String,
    pub organization: String,
    pub link: Option<String>,
    pub language: String,
}

impl SchemeRecord {
    pub fn into_translated(self, scheme: String, description: String, language: impl Into<String>) -> TranslatedSchemeRecord {
        TranslatedSchemeRecord {
            id: self.id,
            scheme,
            description,
            income: self.income,
            region: self.region,
            education: self.education,
            organization: self.organization,
            link: self.link,
            language: language.into(),
        }
    }
}

impl TranslatedSchemeRecord {
    /// Outbound link, if the row has a non-blank one.
    pub fn website(&self) -> Option<&str> {
        self.link.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_row() {
        let row: SchemeRecord = serde_json::from_str(r#"{
            "id": 7,
            "scheme": "Ayushman Bharat",
            "description": "Health cover",
            "income": 250000,
            "region": "All India",
            "education": "None",
            "organization": "NHA",
            "link": "https://pmjay.gov.in"
        }"#).unwrap();
        assert_eq!(row.id, SchemeId::Int(7));
        assert_eq!(row.income, Some(IncomeValue::Int(250000)));
        assert_eq!(row.link.as_deref(), Some("https://pmjay.gov.in"));
    }

    #[test]
    fn test_nulls_become_empty() {
        let row: SchemeRecord = serde_json::from_str(r#"{
            "id": "a1b2",
            "scheme": "Scholarship",
            "description": null,
            "income": null,
            "region": null,
            "link": null
        }"#).unwrap();
        assert_eq!(row.id, SchemeId::String("a1b2".to_string()));
        assert_eq!(row.description, "");
        assert_eq!(row.region, "");
        assert_eq!(row.education, "");
        assert_eq!(row.income, None);
        assert_eq!(row.link, None);
    }

    #[test]
    fn test_income_accepts_numeric_and_text_columns() {
        let rows: Vec<SchemeRecord> = serde_json::from_str(r#"[
            {"id": 1, "scheme": "A", "income": 250000.50},
            {"id": 2, "scheme": "B", "income": 250000.0},
            {"id": 3, "scheme": "C", "income": "Below 2.5 lakh"},
            {"id": 4, "scheme": "D", "income": 300000}
        ]"#).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].income, Some(IncomeValue::Float(250000.5)));
        assert_eq!(rows[0].income.as_ref().unwrap().to_string(), "250000.5");
        assert_eq!(rows[1].income.as_ref().unwrap().to_string(), "250000");
        assert_eq!(rows[2].income, Some(IncomeValue::Text("Below 2.5 lakh".to_string())));
        assert_eq!(rows[2].income.as_ref().unwrap().to_string(), "Below 2.5 lakh");
        assert_eq!(rows[3].income, Some(IncomeValue::Int(300000)));
    }

    #[test]
    fn test_income_survives_wire_round_trip() {
        let row = SchemeRecord {
            id: SchemeId::Int(9),
            scheme: "Pension".to_string(),
            description: String::new(),
            income: Some(IncomeValue::Float(1500.75)),
            region: String::new(),
            education: String::new(),
            organization: String::new(),
            link: None,
        };
        let translated = row.into_translated("Pensión".to_string(), String::new(), "es");
        let json = serde_json::to_string(&translated).unwrap();
        let back: TranslatedSchemeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.income, Some(IncomeValue::Float(1500.75)));
    }

    #[test]
    fn test_translation_keeps_other_columns() {
        let row = SchemeRecord {
            id: SchemeId::Int(3),
            scheme: "Crop Insurance".to_string(),
            description: "Insurance for farmers".to_string(),
            income: Some(IncomeValue::Int(100000)),
            region: "Punjab".to_string(),
            education: "Any".to_string(),
            organization: "Ministry of Agriculture".to_string(),
            link: Some("  ".to_string()),
        };
        let translated = row.clone().into_translated("फसल बीमा".to_string(), "किसानों के लिए बीमा".to_string(), "hi");
        assert_eq!(translated.id, row.id);
        assert_eq!(translated.scheme, "फसल बीमा");
        assert_eq!(translated.income, row.income);
        assert_eq!(translated.region, row.region);
        assert_eq!(translated.organization, row.organization);
        assert_eq!(translated.language, "hi");
        assert_eq!(translated.website(), None);
    }
}
