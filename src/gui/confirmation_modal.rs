use crate::shortcuts::Shortcut;
use eframe::egui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationResult {
    None,
    /// The user confirmed deleting `shortcut`, shown at `index`.
    Confirmed { index: usize, shortcut: Shortcut },
    Cancelled,
}

/// Asks the user to confirm deleting a shortcut before it is removed.
#[derive(Debug, Clone)]
pub struct ConfirmationModal {
    open: bool,
    index: usize,
    shortcut: Option<Shortcut>,
    description: String,
    warning: String,
    confirm_label: String,
    cancel_label: String,
}

impl Default for ConfirmationModal {
    fn default() -> Self {
        Self {
            open: false,
            index: 0,
            shortcut: None,
            description: String::new(),
            warning: "This cannot be undone.".into(),
            confirm_label: "Delete".into(),
            cancel_label: "Cancel".into(),
        }
    }
}

pub fn delete_prompt(name: &str) -> String {
    format!("Delete \"{name}\"?")
}

impl ConfirmationModal {
    pub fn open_for(&mut self, index: usize, shortcut: Shortcut) {
        self.index = index;
        self.description = delete_prompt(&shortcut.name);
        self.shortcut = Some(shortcut);
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> ConfirmationResult {
        if !self.open {
            return ConfirmationResult::None;
        }
        let mut result = ConfirmationResult::None;
        let mut open = true;
        egui::Window::new("Delete shortcut")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(&self.description);
                ui.colored_label(ui.visuals().warn_fg_color, &self.warning);
                ui.horizontal(|ui| {
                    if ui.button(&self.confirm_label).clicked() {
                        if let Some(shortcut) = self.shortcut.clone() {
                            result = ConfirmationResult::Confirmed {
                                index: self.index,
                                shortcut,
                            };
                        }
                    }
                    if ui.button(&self.cancel_label).clicked() {
                        result = ConfirmationResult::Cancelled;
                    }
                });
            });
        if result == ConfirmationResult::None && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmationResult::Cancelled;
        }
        if result != ConfirmationResult::None {
            self.open = false;
            self.shortcut = None;
        }
        if !open {
            self.open = false;
            self.shortcut = None;
            if result == ConfirmationResult::None {
                result = ConfirmationResult::Cancelled;
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_shortcut() {
        assert_eq!(delete_prompt("Mail"), "Delete \"Mail\"?");
    }

    #[test]
    fn open_for_remembers_index() {
        let mut modal = ConfirmationModal::default();
        assert!(!modal.is_open());
        let code = Shortcut {
            name: "Code".into(),
            url: "https://github.com".into(),
        };
        modal.open_for(3, code.clone());
        assert!(modal.is_open());
        assert_eq!(modal.index, 3);
        assert_eq!(modal.shortcut, Some(code));
        assert_eq!(modal.description, "Delete \"Code\"?");
    }
}
