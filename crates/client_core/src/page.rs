//! State models of the page elements the controller drives. Front ends render
//! these; an element the page does not have stays `None` in [`PageElements`].

use crate::{form::FormProfile, text::UiText};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultContent {
    #[default]
    Empty,
    /// Transient paragraph shown while a request is in flight.
    Placeholder(String),
    /// Reading shown verbatim as preformatted text.
    Preformatted(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultArea {
    content: ResultContent,
}

impl ResultArea {
    pub fn content(&self) -> &ResultContent {
        &self.content
    }

    pub fn preformatted_text(&self) -> Option<&str> {
        match &self.content {
            ResultContent::Preformatted(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.content = ResultContent::Empty;
    }

    pub fn show_placeholder(&mut self, text: impl Into<String>) {
        self.content = ResultContent::Placeholder(text.into());
    }

    pub fn show_preformatted(&mut self, text: impl Into<String>) {
        self.content = ResultContent::Preformatted(text.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBox {
    text: String,
}

impl ErrorBox {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Copy or download button: hidden until a reading is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    label: String,
    hidden: bool,
    content: Option<String>,
}

impl ActionButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hidden: true,
            content: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Attached content, empty when nothing was attached yet.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn reveal_with(&mut self, content: impl Into<String>) {
        self.hidden = false;
        self.content = Some(content.into());
    }

    /// Hides the button; the previously attached content stays attached.
    pub fn hide(&mut self) {
        self.hidden = true;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerButton {
    disabled: bool,
    aria_busy: bool,
}

impl TriggerButton {
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_busy(&self) -> bool {
        self.aria_busy
    }

    pub(crate) fn set_busy(&mut self, busy: bool) {
        self.disabled = busy;
        self.aria_busy = busy;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingIndicator {
    visible: bool,
}

impl LoadingIndicator {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Hour and minute inputs of one chart, keyed by its time-unknown checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInputs {
    pub unknown_flag: String,
    pub hour_field: String,
    pub minute_field: String,
    disabled: bool,
}

impl TimeInputs {
    pub fn new(
        unknown_flag: impl Into<String>,
        hour_field: impl Into<String>,
        minute_field: impl Into<String>,
    ) -> Self {
        Self {
            unknown_flag: unknown_flag.into(),
            hour_field: hour_field.into(),
            minute_field: minute_field.into(),
            disabled: false,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageElements {
    pub result: Option<ResultArea>,
    pub error_box: Option<ErrorBox>,
    pub copy_button: Option<ActionButton>,
    pub download_button: Option<ActionButton>,
    pub trigger: Option<TriggerButton>,
    pub loading: Option<LoadingIndicator>,
    pub time_inputs: Vec<TimeInputs>,
}

impl PageElements {
    /// Every element a reading page has, for the charts of `profile`.
    pub fn full(profile: &FormProfile, text: &UiText) -> Self {
        Self {
            result: Some(ResultArea::default()),
            error_box: Some(ErrorBox::default()),
            copy_button: Some(ActionButton::new(text.copy_idle.clone())),
            download_button: Some(ActionButton::new(text.download_label.clone())),
            trigger: Some(TriggerButton::default()),
            loading: Some(LoadingIndicator::default()),
            time_inputs: profile
                .charts
                .iter()
                .map(|chart| TimeInputs::new(&chart.time_unknown, &chart.hour, &chart.minute))
                .collect(),
        }
    }

    /// True when `field` is an hour/minute input that is currently disabled.
    pub fn is_field_disabled(&self, field: &str) -> bool {
        self.time_inputs.iter().any(|inputs| {
            inputs.is_disabled() && (inputs.hour_field == field || inputs.minute_field == field)
        })
    }

    pub(crate) fn time_inputs_for_mut(&mut self, unknown_flag: &str) -> Option<&mut TimeInputs> {
        self.time_inputs
            .iter_mut()
            .find(|inputs| inputs.unknown_flag == unknown_flag)
    }
}
