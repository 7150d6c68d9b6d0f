use eframe::egui;

/// What the user did with the dialog this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddShortcutAction {
    None,
    Submit { name: String, url: String },
}

#[derive(Default)]
pub struct AddShortcutDialog {
    pub open: bool,
    name: String,
    url: String,
    focus_name: bool,
}

impl AddShortcutDialog {
    pub fn open(&mut self) {
        self.open = true;
        self.name.clear();
        self.url.clear();
        self.focus_name = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> AddShortcutAction {
        if !self.open {
            return AddShortcutAction::None;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close();
            return AddShortcutAction::None;
        }
        let mut action = AddShortcutAction::None;
        let mut close = false;
        let mut open = self.open;
        let window = egui::Window::new("Add shortcut")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("add_shortcut_grid")
                    .num_columns(2)
                    .spacing([6.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Name");
                        let name_resp = ui.text_edit_singleline(&mut self.name);
                        if self.focus_name {
                            name_resp.request_focus();
                            self.focus_name = false;
                        }
                        ui.end_row();
                        ui.label("URL");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.url).hint_text("example.com"),
                        );
                        ui.end_row();
                    });
                ui.horizontal(|ui| {
                    let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Add").clicked() || enter {
                        action = AddShortcutAction::Submit {
                            name: self.name.clone(),
                            url: self.url.clone(),
                        };
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });
        // Clicking the backdrop dismisses the dialog.
        if let Some(inner) = window {
            let clicked_outside = ctx.input(|i| {
                i.pointer.any_pressed()
                    && i
                        .pointer
                        .interact_pos()
                        .is_some_and(|pos| !inner.response.rect.contains(pos))
            });
            if clicked_outside {
                close = true;
            }
        }
        if close || !open {
            self.close();
        }
        action
    }
}
