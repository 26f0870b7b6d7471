// src/config/options.rs
//
// Search form vocabulary: the fields the remote service recognizes and the
// modes that restrict which of them a query includes.

use SearchField::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchField {
    City,
    Country,
    Designation,
    Organization,
    Email,
    Mobile,
    Seniority,
}

pub const ALL_FIELDS: &[SearchField] =
    &[City, Country, Designation, Organization, Email, Mobile, Seniority];

impl SearchField {
    /// Query-string key, exactly as the service expects it.
    pub fn key(&self) -> &'static str {
        match self {
            City => "city",
            Country => "country",
            Designation => "designation",
            Organization => "organization",
            Email => "email",
            Mobile => "mobile",
            Seniority => "seniority",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            City => "City",
            Country => "Country",
            Designation => "Designation",
            Organization => "Organization",
            Email => "Email",
            Mobile => "Mobile",
            Seniority => "Seniority",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    All,
    Email,
    Mobile,
    EmailMobile,
}

impl SearchMode {
    pub const ALL: &'static [SearchMode] =
        &[SearchMode::All, SearchMode::Email, SearchMode::Mobile, SearchMode::EmailMobile];

    /// Which form fields a query in this mode may include.
    pub fn fields(&self) -> &'static [SearchField] {
        match self {
            SearchMode::All => ALL_FIELDS,
            SearchMode::Email => &[Email],
            SearchMode::Mobile => &[Mobile],
            SearchMode::EmailMobile => &[Email, Mobile],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::All => "All Fields",
            SearchMode::Email => "Email Only",
            SearchMode::Mobile => "Mobile Only",
            SearchMode::EmailMobile => "Email + Mobile",
        }
    }
}

/// Current values of the seven search inputs, keyed by field order in
/// `ALL_FIELDS`.
#[derive(Clone, Debug, Default)]
pub struct SearchForm {
    values: [String; ALL_FIELDS.len()],
}

impl SearchForm {
    fn index(field: SearchField) -> usize {
        ALL_FIELDS.iter().position(|f| *f == field).unwrap_or(0)
    }

    pub fn get(&self, field: SearchField) -> &str {
        &self.values[Self::index(field)]
    }

    pub fn get_mut(&mut self, field: SearchField) -> &mut String {
        &mut self.values[Self::index(field)]
    }

    pub fn set(&mut self, field: SearchField, value: impl Into<String>) {
        self.values[Self::index(field)] = value.into();
    }

    pub fn clear(&mut self) {
        for v in &mut self.values {
            v.clear();
        }
    }

    /// Non-blank (key, value) pairs for the given mode, in field order.
    /// Blank inputs are omitted, mirroring the service's query contract.
    pub fn query_pairs(&self, mode: SearchMode) -> Vec<(&'static str, String)> {
        mode.fields()
            .iter()
            .filter_map(|f| {
                let v = self.get(*f).trim();
                if v.is_empty() { None } else { Some((f.key(), s!(v))) }
            })
            .collect()
    }
}
