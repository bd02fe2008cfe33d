use std::time::{Duration, Instant};

use client_core::{
    ClipboardBackend, CopyAction, DownloadAction, ExamplesContent, ExamplesPanel, FormController,
    FormProfile, PageElements, ResultContent, SubmitError, SubmitPhase, UiText,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{ChartFieldNames, PageKind};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};
use crate::ui::clipboard::{ContextClipboard, SystemClipboard};
use crate::ui::draft::{ChartDraft, FormDraft};
use crate::ui::save_dialog::SaveDialogSink;

const IDLE_REPAINT: Duration = Duration::from_millis(100);

pub struct ReadingApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: FormController,
    draft: FormDraft,
    copy: CopyAction,
    download: DownloadAction,
    examples: ExamplesPanel,
    system_clipboard: Option<SystemClipboard>,
    status: String,
}

/// Button presses collected while drawing, applied once the frame's widgets are laid out.
#[derive(Default)]
struct FrameActions {
    submit: bool,
    copy: bool,
    download: bool,
    time_unknown_changes: Vec<(String, bool)>,
}

impl ReadingApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, page: PageKind) -> Self {
        let profile = FormProfile::for_page(page);
        let text = UiText::default();
        let draft = FormDraft::for_profile(&profile);
        let copy = CopyAction::new(&text);
        let download = DownloadAction::new(profile.download_filename.clone());
        let examples = ExamplesPanel::new(&text);
        let controller = FormController::bind_page(profile, text);

        let mut app = Self {
            cmd_tx,
            ui_rx,
            controller,
            draft,
            copy,
            download,
            examples,
            system_clipboard: SystemClipboard::open(),
            status: String::new(),
        };
        if let Err(message) = dispatch_backend_command(&app.cmd_tx, BackendCommand::LoadExamples) {
            app.examples.fail(app.controller.text());
            app.status = message;
        }
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::GenerateFinished(outcome) => {
                    self.status = match &outcome {
                        Ok(_) => format!("Reading ready ({})", self.download.filename()),
                        Err(_) => String::new(),
                    };
                    self.controller.finish_submit(&outcome);
                }
                UiEvent::ExamplesLoaded(fetched) => {
                    self.examples.apply(fetched, self.controller.text());
                }
                UiEvent::BackendFailed(message) => {
                    if self.controller.phase() == SubmitPhase::Submitting {
                        self.controller
                            .finish_submit(&Err(SubmitError::Transport(message.clone())));
                    }
                    if matches!(self.examples.content(), ExamplesContent::Loading) {
                        self.examples.fail(self.controller.text());
                    }
                    self.status = message;
                }
            }
        }
    }

    fn submit(&mut self) {
        let snapshot = self.draft.snapshot(self.controller.profile());
        let input = self.controller.begin_submit(&snapshot);
        if let Err(message) =
            dispatch_backend_command(&self.cmd_tx, BackendCommand::Generate { input })
        {
            self.controller
                .finish_submit(&Err(SubmitError::Transport(message)));
        }
    }

    fn copy_result(&mut self, ctx: &egui::Context) {
        let Some(button) = self.controller.elements_mut().copy_button.as_mut() else {
            return;
        };
        let preferred = self
            .system_clipboard
            .as_mut()
            .map(|clipboard| clipboard as &mut dyn ClipboardBackend);
        let mut fallback = ContextClipboard::new(ctx);
        if let Err(err) = self
            .copy
            .click(button, preferred, &mut fallback, Instant::now())
        {
            self.status = format!("Copy failed: {err}");
        }
    }

    fn download_result(&mut self) {
        let Some(button) = self.controller.elements().download_button.as_ref() else {
            return;
        };
        match self.download.click(button, &mut SaveDialogSink) {
            Ok(Some(path)) => self.status = format!("Saved {}", path.display()),
            Ok(None) => {}
            Err(err) => self.status = format!("Save failed: {err}"),
        }
    }

    fn apply(&mut self, ctx: &egui::Context, actions: FrameActions) {
        for (flag, checked) in &actions.time_unknown_changes {
            self.controller.set_time_unknown(flag, *checked);
        }
        if actions.submit {
            self.submit();
        }
        if actions.copy {
            self.copy_result(ctx);
        }
        if actions.download {
            self.download_result();
        }
    }

    fn show_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("reading_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let title = match self.controller.profile().page {
                    PageKind::Horoscope => "Horoscope",
                    PageKind::Synastry => "Synastry",
                };
                ui.heading(title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(self.examples.badge()).weak());
                });
            });
        });
    }

    fn show_status(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.status).small());
        });
    }

    fn show_examples(&self, ctx: &egui::Context) {
        let text = self.controller.text();
        egui::SidePanel::right("examples_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.heading("実例");
                ui.separator();
                match self.examples.content() {
                    ExamplesContent::Loading => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(text.examples_loading.as_str());
                        });
                    }
                    ExamplesContent::Message(message) => {
                        ui.label(message.as_str());
                    }
                    ExamplesContent::Cards(cards) => {
                        egui::ScrollArea::vertical()
                            .id_salt("examples_scroll")
                            .show(ui, |ui| {
                                for (index, card) in cards.iter().enumerate() {
                                    ui.group(|ui| {
                                        ui.label(egui::RichText::new(&card.user_message).strong());
                                        egui::CollapsingHeader::new(card.summary.as_str())
                                            .id_salt(("example_card", index))
                                            .show(ui, |ui| {
                                                ui.label(card.body.as_str());
                                            });
                                    });
                                    ui.add_space(6.0);
                                }
                            });
                    }
                }
            });
    }

    fn show_form(&mut self, ctx: &egui::Context) -> FrameActions {
        let mut actions = FrameActions::default();
        let multi_chart = self.draft.charts.len() > 1;
        let Self {
            controller, draft, ..
        } = self;
        let elements = controller.elements();
        let charts = &controller.profile().charts;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("form_scroll")
                .show(ui, |ui| {
                    for (index, (chart, names)) in draft.charts.iter_mut().zip(charts).enumerate() {
                        if multi_chart {
                            ui.label(egui::RichText::new(format!("人物 {}", index + 1)).strong());
                        }
                        if let Some(checked) = chart_form(ui, index, names, chart, elements) {
                            actions
                                .time_unknown_changes
                                .push((names.time_unknown.clone(), checked));
                        }
                        ui.add_space(8.0);
                    }

                    ui.label(egui::RichText::new("マイナーアスペクト").strong());
                    ui.horizontal_wrapped(|ui| {
                        for (aspect, checked) in draft.aspects.iter_mut() {
                            ui.checkbox(checked, aspect.as_str());
                        }
                    });
                    ui.add_space(8.0);

                    let trigger_enabled = elements
                        .trigger
                        .as_ref()
                        .is_none_or(|trigger| !trigger.is_disabled());
                    ui.horizontal(|ui| {
                        if ui
                            .add_enabled(trigger_enabled, egui::Button::new("鑑定する"))
                            .clicked()
                        {
                            actions.submit = true;
                        }
                        if elements
                            .loading
                            .as_ref()
                            .is_some_and(|loading| loading.is_visible())
                        {
                            ui.spinner();
                        }
                    });

                    if let Some(error_box) = elements.error_box.as_ref() {
                        if !error_box.text().is_empty() {
                            ui.colored_label(ui.visuals().error_fg_color, error_box.text());
                        }
                    }

                    ui.horizontal(|ui| {
                        if let Some(button) = elements.copy_button.as_ref() {
                            if !button.is_hidden() && ui.button(button.label()).clicked() {
                                actions.copy = true;
                            }
                        }
                        if let Some(button) = elements.download_button.as_ref() {
                            if !button.is_hidden() && ui.button(button.label()).clicked() {
                                actions.download = true;
                            }
                        }
                    });

                    ui.separator();
                    show_result(ui, elements);
                });
        });
        actions
    }
}

/// One chart's inputs. Returns the new time-unknown state when it was toggled.
fn chart_form(
    ui: &mut egui::Ui,
    index: usize,
    names: &ChartFieldNames,
    chart: &mut ChartDraft,
    elements: &PageElements,
) -> Option<bool> {
    let hour_enabled = !elements.is_field_disabled(&names.hour);
    let minute_enabled = !elements.is_field_disabled(&names.minute);
    let mut toggled = None;

    egui::Grid::new(("chart_grid", index))
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("名前");
            ui.text_edit_singleline(&mut chart.name);
            ui.end_row();

            ui.label("生年月日");
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut chart.year).desired_width(56.0).hint_text("年"));
                ui.add(egui::TextEdit::singleline(&mut chart.month).desired_width(36.0).hint_text("月"));
                ui.add(egui::TextEdit::singleline(&mut chart.day).desired_width(36.0).hint_text("日"));
            });
            ui.end_row();

            ui.label("出生時刻");
            ui.horizontal(|ui| {
                ui.add_enabled(
                    hour_enabled,
                    egui::TextEdit::singleline(&mut chart.hour)
                        .desired_width(36.0)
                        .hint_text("時"),
                );
                ui.add_enabled(
                    minute_enabled,
                    egui::TextEdit::singleline(&mut chart.minute)
                        .desired_width(36.0)
                        .hint_text("分"),
                );
                if ui.checkbox(&mut chart.time_unknown, "時刻不明").changed() {
                    toggled = Some(chart.time_unknown);
                }
            });
            ui.end_row();

            ui.label("出生地");
            ui.text_edit_singleline(&mut chart.location_name);
            ui.end_row();
        });
    toggled
}

fn show_result(ui: &mut egui::Ui, elements: &PageElements) {
    let Some(result) = elements.result.as_ref() else {
        return;
    };
    match result.content() {
        ResultContent::Empty => {}
        ResultContent::Placeholder(placeholder) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new(placeholder).weak());
            });
        }
        ResultContent::Preformatted(markdown) => {
            ui.add(
                egui::Label::new(egui::RichText::new(markdown).monospace()).selectable(true),
            );
        }
    }
}

impl eframe::App for ReadingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        if let Some(button) = self.controller.elements_mut().copy_button.as_mut() {
            self.copy.tick(button, Instant::now());
        }

        self.show_header(ctx);
        self.show_status(ctx);
        self.show_examples(ctx);
        let actions = self.show_form(ctx);
        self.apply(ctx, actions);

        let repaint_in = self
            .copy
            .pending_revert()
            .map(|at| at.saturating_duration_since(Instant::now()).min(IDLE_REPAINT))
            .unwrap_or(IDLE_REPAINT);
        ctx.request_repaint_after(repaint_in);
    }
}
