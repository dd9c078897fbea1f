//! Filter state collected from the search form.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::search_const::DEFAULT_LANGUAGE;


/// Current values of the search form. Every field is raw user input; an empty
/// field means "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub scheme: String,
    pub income: String,
    pub education: String,
    pub region: String,
    pub organization: String,
    pub language: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            scheme: String::new(),
            income: String::new(),
            education: String::new(),
            region: String::new(),
            organization: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterField {
    Scheme,
    Income,
    Education,
    Region,
    Organization,
    Language,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::Scheme,
        FilterField::Income,
        FilterField::Education,
        FilterField::Region,
        FilterField::Organization,
        FilterField::Language,
    ];

    /// Name of the form input bound to this field.
    pub fn input_name(&self) -> &'static str {
        match self {
            FilterField::Scheme => "scheme",
            FilterField::Income => "income",
            FilterField::Education => "education",
            FilterField::Region => "region",
            FilterField::Organization => "organization",
            FilterField::Language => "language",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FilterField::Scheme => "Scheme Name",
            FilterField::Income => "Income Level",
            FilterField::Education => "Education Level",
            FilterField::Region => "Region",
            FilterField::Organization => "Organization",
            FilterField::Language => "Language",
        }
    }
}

impl Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilterField(pub String);

impl Display for UnknownFilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown filter field: {}", self.0)
    }
}

impl std::error::Error for UnknownFilterField {}

impl FromStr for FilterField {
    type Err = UnknownFilterField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|field| field.input_name() == s)
            .ok_or_else(|| UnknownFilterField(s.to_string()))
    }
}

impl FilterCriteria {
    /// Replace exactly one field. No validation happens here; the income
    /// value is only interpreted when predicates are built.
    pub fn update(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Scheme => self.scheme = value,
            FilterField::Income => self.income = value,
            FilterField::Education => self.education = value,
            FilterField::Region => self.region = value,
            FilterField::Organization => self.organization = value,
            FilterField::Language => self.language = value,
        }
    }

    pub fn update_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownFilterField> {
        let field = name.parse::<FilterField>()?;
        self.update(field, value);
        Ok(())
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Scheme => &self.scheme,
            FilterField::Income => &self.income,
            FilterField::Education => &self.education,
            FilterField::Region => &self.region,
            FilterField::Organization => &self.organization,
            FilterField::Language => &self.language,
        }
    }
}
