use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownPageKind;

pub const DEFAULT_HOUR: &str = "12";
pub const DEFAULT_MINUTE: &str = "0";

/// Minor aspects the `/generate` endpoint can be asked to include.
pub const MINOR_ASPECTS: [&str; 6] = [
    "Quincunx",
    "Semisextile",
    "Semisquare",
    "Sesquiquadrate",
    "Quintile",
    "Biquintile",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    #[default]
    Horoscope,
    Synastry,
}

impl PageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Horoscope => "horoscope",
            PageKind::Synastry => "synastry",
        }
    }

    pub fn download_filename(self) -> &'static str {
        match self {
            PageKind::Horoscope => "horoscope.md",
            PageKind::Synastry => "synastry.md",
        }
    }

    /// Field-name suffix of every chart the page collects.
    pub fn chart_suffixes(self) -> &'static [&'static str] {
        match self {
            PageKind::Horoscope => &[""],
            PageKind::Synastry => &["", "2"],
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = UnknownPageKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horoscope" => Ok(PageKind::Horoscope),
            "synastry" => Ok(PageKind::Synastry),
            other => Err(UnknownPageKind(other.to_string())),
        }
    }
}

/// Birth-data field names of one chart; the second chart of a synastry
/// form carries the `2` suffix on every name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartFieldNames {
    pub name: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub location_name: String,
    pub time_unknown: String,
}

impl ChartFieldNames {
    pub fn with_suffix(suffix: &str) -> Self {
        Self {
            name: format!("name{suffix}"),
            year: format!("year{suffix}"),
            month: format!("month{suffix}"),
            day: format!("day{suffix}"),
            hour: format!("hour{suffix}"),
            minute: format!("minute{suffix}"),
            location_name: format!("location_name{suffix}"),
            time_unknown: format!("time_unknown{suffix}"),
        }
    }

    /// Text inputs in the order the form lays them out.
    pub fn text_fields(&self) -> [&str; 7] {
        [
            self.name.as_str(),
            self.year.as_str(),
            self.month.as_str(),
            self.day.as_str(),
            self.hour.as_str(),
            self.minute.as_str(),
            self.location_name.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_chart_fields_carry_suffix_in_form_order() {
        let names = ChartFieldNames::with_suffix("2");
        assert_eq!(
            names.text_fields(),
            ["name2", "year2", "month2", "day2", "hour2", "minute2", "location_name2"]
        );
        assert_eq!(names.time_unknown, "time_unknown2");
    }
}
