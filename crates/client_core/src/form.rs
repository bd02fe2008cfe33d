//! Form values as the page holds them, and the normalized set that is posted.

use std::collections::BTreeSet;

use serde::Serialize;
use shared::domain::{ChartFieldNames, PageKind, DEFAULT_HOUR, DEFAULT_MINUTE, MINOR_ASPECTS};

/// Ordered field name → value pairs carried by one `/generate` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormInputSet {
    fields: Vec<(String, String)>,
}

impl FormInputSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replaces the value in place when `name` is present, appends otherwise.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| field == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInputSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = FormInputSet::new();
        for (name, value) in iter {
            let name = name.into();
            set.set(&name, value);
        }
        set
    }
}

/// What the form element holds when it is submitted: the text inputs in
/// layout order and the names of the checked checkboxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: Vec<(String, String)>,
    checked: BTreeSet<String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_value(name, value);
        self
    }

    pub fn with_checked(mut self, name: &str) -> Self {
        self.set_checked(name, true);
        self
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.values.iter_mut().find(|(field, _)| field == name) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((name.to_string(), value)),
        }
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) {
        if checked {
            self.checked.insert(name.to_string());
        } else {
            self.checked.remove(name);
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.checked.contains(name)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Per-page parameters of the submission controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormProfile {
    pub page: PageKind,
    pub charts: Vec<ChartFieldNames>,
    pub aspects: Vec<String>,
    pub download_filename: String,
}

impl FormProfile {
    pub fn for_page(page: PageKind) -> Self {
        Self {
            page,
            charts: page
                .chart_suffixes()
                .iter()
                .map(|suffix| ChartFieldNames::with_suffix(suffix))
                .collect(),
            aspects: MINOR_ASPECTS.iter().map(|name| name.to_string()).collect(),
            download_filename: page.download_filename().to_string(),
        }
    }

    pub fn horoscope() -> Self {
        Self::for_page(PageKind::Horoscope)
    }

    pub fn synastry() -> Self {
        Self::for_page(PageKind::Synastry)
    }

    /// Normalizes a snapshot into the request fields.
    ///
    /// Blank hour/minute become `12`/`0`, other time values are trimmed. A
    /// checked time-unknown box replaces that chart's time with the defaults
    /// (its inputs are disabled and not submitted) and adds the flag as
    /// `"true"`. Checked aspect boxes are sent as `"true"`.
    pub fn build_input_set(&self, snapshot: &FormSnapshot) -> FormInputSet {
        let mut input: FormInputSet = snapshot.values().collect();

        for chart in &self.charts {
            if snapshot.is_checked(&chart.time_unknown) {
                input.set(&chart.hour, DEFAULT_HOUR);
                input.set(&chart.minute, DEFAULT_MINUTE);
                input.set(&chart.time_unknown, "true");
            } else {
                fill_time_field(&mut input, &chart.hour, DEFAULT_HOUR);
                fill_time_field(&mut input, &chart.minute, DEFAULT_MINUTE);
            }
        }

        for aspect in &self.aspects {
            if snapshot.is_checked(aspect) {
                input.set(aspect, "true");
            }
        }

        input
    }
}

fn fill_time_field(input: &mut FormInputSet, name: &str, default: &str) {
    let trimmed = input.get(name).unwrap_or_default().trim().to_string();
    if trimmed.is_empty() {
        input.set(name, default);
    } else {
        input.set(name, trimmed);
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
