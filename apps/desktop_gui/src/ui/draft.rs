//! Widget-bound values of the reading form.

use client_core::{FormProfile, FormSnapshot};

#[derive(Debug, Clone, Default)]
pub struct ChartDraft {
    pub name: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub location_name: String,
    pub time_unknown: bool,
}

impl ChartDraft {
    /// Same order as `ChartFieldNames::text_fields`.
    fn text_values(&self) -> [&str; 7] {
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

#[derive(Debug, Clone)]
pub struct FormDraft {
    pub charts: Vec<ChartDraft>,
    pub aspects: Vec<(String, bool)>,
}

impl FormDraft {
    pub fn for_profile(profile: &FormProfile) -> Self {
        Self {
            charts: vec![ChartDraft::default(); profile.charts.len()],
            aspects: profile
                .aspects
                .iter()
                .map(|aspect| (aspect.clone(), false))
                .collect(),
        }
    }

    pub fn snapshot(&self, profile: &FormProfile) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new();
        for (draft, names) in self.charts.iter().zip(&profile.charts) {
            for (name, value) in names.text_fields().into_iter().zip(draft.text_values()) {
                snapshot.set_value(name, value);
            }
            snapshot.set_checked(&names.time_unknown, draft.time_unknown);
        }
        for (aspect, checked) in &self.aspects {
            snapshot.set_checked(aspect, *checked);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_uses_suffixed_names_for_second_chart() {
        let profile = FormProfile::synastry();
        let mut draft = FormDraft::for_profile(&profile);
        draft.charts[0].hour = "9".to_string();
        draft.charts[1].hour = "21".to_string();
        draft.charts[1].time_unknown = true;
        draft.aspects[0].1 = true;

        let snapshot = draft.snapshot(&profile);
        assert_eq!(snapshot.value("hour"), Some("9"));
        assert_eq!(snapshot.value("hour2"), Some("21"));
        assert!(!snapshot.is_checked("time_unknown"));
        assert!(snapshot.is_checked("time_unknown2"));
        assert!(snapshot.is_checked("Quincunx"));
    }

    #[test]
    fn empty_draft_submits_default_time() {
        let profile = FormProfile::horoscope();
        let draft = FormDraft::for_profile(&profile);
        let input = profile.build_input_set(&draft.snapshot(&profile));
        assert_eq!(input.get("hour"), Some("12"));
        assert_eq!(input.get("minute"), Some("0"));
    }
}
