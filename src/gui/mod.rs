mod add_shortcut_dialog;
mod confirmation_modal;
pub mod theme;

pub use add_shortcut_dialog::{AddShortcutAction, AddShortcutDialog};
pub use confirmation_modal::{delete_prompt, ConfirmationModal, ConfirmationResult};

use crate::app::{Intent, Outcome, StartPage};
use crate::catalog::ENGINES;
use crate::icons::{color_bucket, resolve_icon};
use crate::preferences::Theme;
use crate::settings::Settings;
use crate::storage::KeyValueStore;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

const TILE_SIZE: egui::Vec2 = egui::vec2(96.0, 72.0);

/// eframe front end. Translates egui interactions into [`Intent`]s and
/// redraws everything from the [`StartPage`] state each frame.
pub struct StartPageApp<S> {
    page: StartPage<S>,
    query: String,
    add_dialog: AddShortcutDialog,
    confirm: ConfirmationModal,
    toasts: Toasts,
    enable_toasts: bool,
    toast_duration: f32,
    columns: usize,
    applied_theme: Option<Theme>,
    was_focused: bool,
}

impl<S: KeyValueStore> StartPageApp<S> {
    pub fn new(page: StartPage<S>, settings: &Settings) -> Self {
        Self {
            page,
            query: String::new(),
            add_dialog: AddShortcutDialog::default(),
            confirm: ConfirmationModal::default(),
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_duration,
            columns: settings.tile_columns(),
            applied_theme: None,
            was_focused: true,
        }
    }

    fn report_error(&mut self, context: &str, err: anyhow::Error) {
        tracing::error!("{context}: {err:#}");
        if self.enable_toasts {
            self.toasts.add(Toast {
                text: format!("{context}: {err}").into(),
                kind: ToastKind::Error,
                options: ToastOptions::default().duration_in_seconds(self.toast_duration as f64),
            });
        }
    }

    fn run(&mut self, context: &str, intent: Intent) -> Option<Outcome> {
        match self.page.dispatch(intent) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                self.report_error(context, e);
                None
            }
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.page.preferences().theme();
        if self.applied_theme != Some(theme) {
            ctx.set_visuals(theme::visuals_for(theme));
            self.applied_theme = Some(theme);
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut selected = None;
            for engine in ENGINES {
                let active = self.page.preferences().is_active(engine.key);
                if ui.selectable_label(active, engine.name).clicked() && !active {
                    selected = Some(engine.key);
                }
            }
            if let Some(key) = selected {
                self.run("Failed to save search engine", Intent::SetEngine(key.into()));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let glyph = self.page.preferences().toggle_glyph();
                if ui.button(glyph).on_hover_text("Toggle theme").clicked() {
                    self.run("Failed to save theme", Intent::ToggleTheme);
                }
            });
        });
    }

    fn search_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("Search the web")
                    .desired_width(ui.available_width() - 80.0),
            );
            let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Search").clicked() || enter {
                let query = self.query.clone();
                if let Some(Outcome::Opened(url)) =
                    self.run("Failed to open search", Intent::Submit(query))
                {
                    tracing::debug!(%url, "search submitted");
                }
            }
        });
    }

    fn shortcut_grid(&mut self, ui: &mut egui::Ui) {
        let theme = self.page.preferences().theme();
        let count = self.page.shortcuts().len();
        let mut open = None;
        let mut delete = None;
        let mut dropped = None;

        for row_start in (0..count).step_by(self.columns) {
            ui.horizontal(|ui| {
                for idx in row_start..(row_start + self.columns).min(count) {
                    let shortcut = self.page.shortcuts()[idx].clone();
                    let (name, url) = (shortcut.name.clone(), shortcut.url.clone());
                    let id = egui::Id::new(("shortcut_tile", idx));
                    let mut fill = theme::tile_color(theme, color_bucket(&name));
                    if self.page.drag().is_dragging(idx) {
                        fill = fill.gamma_multiply(0.5);
                    }
                    let stroke = if self.page.drag().is_drag_over(idx) {
                        ui.visuals().selection.stroke
                    } else {
                        egui::Stroke::NONE
                    };

                    let tile = ui.dnd_drag_source(id, idx, |ui| {
                        egui::Frame::none()
                            .fill(fill)
                            .stroke(stroke)
                            .rounding(8.0)
                            .inner_margin(6.0)
                            .show(ui, |ui| {
                                ui.set_min_size(TILE_SIZE);
                                ui.vertical_centered(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.label(resolve_icon(&url));
                                        ui.with_layout(
                                            egui::Layout::right_to_left(egui::Align::Min),
                                            |ui| {
                                                if ui
                                                    .small_button("×")
                                                    .on_hover_text("Delete")
                                                    .clicked()
                                                {
                                                    delete = Some((idx, shortcut.clone()));
                                                }
                                            },
                                        );
                                    });
                                    if ui.link(&name).on_hover_text(&url).clicked() {
                                        open = Some(idx);
                                    }
                                });
                            });
                    });

                    if ui.ctx().is_being_dragged(id) && self.page.drag().is_idle() {
                        self.page.drag_start(idx);
                    }
                    let response = tile.response;
                    if response.dnd_hover_payload::<usize>().is_some() {
                        self.page.drag_over(idx);
                    } else if self.page.drag().is_drag_over(idx) {
                        self.page.drag_leave(idx);
                    }
                    if response.dnd_release_payload::<usize>().is_some() {
                        dropped = Some(idx);
                    }
                }
            });
        }

        if let Some(target) = dropped {
            if let Err(e) = self.page.drop_on(target) {
                self.report_error("Failed to reorder shortcuts", e);
            }
        } else if !self.page.drag().is_idle() && !egui::DragAndDrop::has_any_payload(ui.ctx()) {
            self.page.drag_end();
        }
        if let Some(idx) = open {
            self.run("Failed to open shortcut", Intent::OpenShortcut(idx));
        }
        if let Some((idx, shortcut)) = delete {
            self.confirm.open_for(idx, shortcut);
        }

        if ui.button("+").on_hover_text("Add shortcut").clicked() {
            self.add_dialog.open();
        }
    }

    fn dialogs(&mut self, ctx: &egui::Context) {
        if let AddShortcutAction::Submit { name, url } = self.add_dialog.ui(ctx) {
            if let Some(Outcome::Changed) =
                self.run("Failed to save shortcut", Intent::AddShortcut { name, url })
            {
                self.add_dialog.close();
            }
        }
        if let ConfirmationResult::Confirmed { index, shortcut } = self.confirm.ui(ctx) {
            if let Some(Outcome::Unchanged) = self.run(
                "Failed to delete shortcut",
                Intent::RemoveShortcut { index, shortcut },
            ) {
                tracing::warn!(index, "shortcut changed before delete; list reloaded");
            }
        }
    }
}

impl<S: KeyValueStore> eframe::App for StartPageApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let focused = ctx.input(|i| i.focused);
        if focused && !self.was_focused {
            tracing::debug!("window focused; reloading shortcuts");
            self.run("Failed to reload shortcuts", Intent::Reload);
        }
        self.was_focused = focused;

        self.apply_theme(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.top_bar(ui);
            ui.add_space(12.0);
            self.search_bar(ui);
            ui.add_space(16.0);
            self.shortcut_grid(ui);
        });
        self.dialogs(ctx);
        // Theme changes take effect on the next frame.
        self.apply_theme(ctx);
        if self.enable_toasts {
            self.toasts.show(ctx);
        }
    }
}
