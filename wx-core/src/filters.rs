//! Search form values and the filter state derived from them.

use crate::query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use std::collections::BTreeMap;

/// Inputs of the search form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Location,
    StartDate,
    EndDate,
    MinTempMin,
    MinTempMax,
    MaxTempMin,
    MaxTempMax,
    RainToday,
    Limit,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Location,
        FormField::StartDate,
        FormField::EndDate,
        FormField::MinTempMin,
        FormField::MinTempMax,
        FormField::MaxTempMin,
        FormField::MaxTempMax,
        FormField::RainToday,
        FormField::Limit,
    ];

    /// Query parameter name sent to the backend.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Location => "location",
            FormField::StartDate => "start_date",
            FormField::EndDate => "end_date",
            FormField::MinTempMin => "min_temp_min",
            FormField::MinTempMax => "min_temp_max",
            FormField::MaxTempMin => "max_temp_min",
            FormField::MaxTempMax => "max_temp_max",
            FormField::RainToday => "rain_today",
            FormField::Limit => "limit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Location => "Location",
            FormField::StartDate => "From",
            FormField::EndDate => "To",
            FormField::MinTempMin => "Min Temp ≥ (°C)",
            FormField::MinTempMax => "Min Temp ≤ (°C)",
            FormField::MaxTempMin => "Max Temp ≥ (°C)",
            FormField::MaxTempMax => "Max Temp ≤ (°C)",
            FormField::RainToday => "Rain Today",
            FormField::Limit => "Results per page",
        }
    }
}

/// Current values of the search form inputs.
///
/// Unset fields read as the empty string, matching what a browser form
/// submits for an untouched input. The limit input starts at
/// [`DEFAULT_PAGE_SIZE`] so every standard search tells the backend its
/// page size.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    values: BTreeMap<FormField, String>,
}

impl Default for SearchForm {
    fn default() -> Self {
        let mut values = BTreeMap::new();
        values.insert(FormField::Limit, DEFAULT_PAGE_SIZE.to_string());
        Self { values }
    }
}

impl SearchForm {
    pub fn get(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Restore every input to its initial value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Filter state for a standard search: every non-empty field.
    pub fn to_filters(&self) -> FilterState {
        FilterState::from_pairs(
            FormField::ALL
                .into_iter()
                .map(|field| (field.name(), self.get(field))),
        )
    }
}

/// Filter-field names and values in form order, never holding empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    fields: Vec<(String, String)>,
}

impl FilterState {
    /// Build filter state from name/value pairs, skipping empty values.
    /// A repeated name keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: Vec<(String, String)> = Vec::new();
        for (k, v) in pairs {
            let (k, v) = (k.into(), v.into());
            if v.is_empty() {
                continue;
            }
            match fields.iter_mut().find(|(name, _)| *name == k) {
                Some(slot) => slot.1 = v,
                None => fields.push((k, v)),
            }
        }
        Self { fields }
    }

    /// Copy of this state with `name` removed.
    pub fn without(&self, name: &str) -> Self {
        let fields = self
            .fields
            .iter()
            .filter(|(k, _)| k != name)
            .cloned()
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Page size requested through the `limit` field.
    pub fn page_size(&self) -> usize {
        parse_page_size(self.get(FormField::Limit.name()))
    }
}

/// Parse a page size the way a browser `parseInt` reads a form value:
/// leading whitespace is skipped and leading digits are taken. Anything that
/// yields no positive number falls back to [`DEFAULT_PAGE_SIZE`]; values above
/// the backend cap are clamped to [`MAX_PAGE_SIZE`].
pub fn parse_page_size(raw: Option<&str>) -> usize {
    let digits: String = raw
        .unwrap_or("")
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    match digits.parse::<usize>() {
        Ok(0) | Err(_) => DEFAULT_PAGE_SIZE,
        Ok(n) => n.min(MAX_PAGE_SIZE),
    }
}
