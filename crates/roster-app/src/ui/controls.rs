use crossbeam_channel::Sender;
use egui::{self, Key};

use crate::commands::Command;
use crate::input::PendingInput;

pub struct ControlsProps<'a> {
    pub input: &'a mut PendingInput,
    pub command_tx: Sender<Command>,
}

/// Name field plus the add, clear and save buttons.
pub fn controls_ui(ui: &mut egui::Ui, props: ControlsProps<'_>) {
    let ControlsProps { input, command_tx } = props;

    ui.vertical_centered(|ui| {
        ui.spacing_mut().item_spacing.y = 16.0;
        ui.add_space(80.0);

        // Edit a scratch copy so an over-long keystroke can be refused whole.
        let mut scratch = input.text().to_owned();
        let field = ui.add(
            egui::TextEdit::singleline(&mut scratch)
                .hint_text("New student name")
                .desired_width(220.0),
        );
        if field.changed() {
            input.set(&scratch);
        }
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        if ui.button("Add new student").clicked() || submitted {
            let _ = command_tx.send(Command::Add);
        }
        if ui.button("Clear all").clicked() {
            let _ = command_tx.send(Command::Clear);
        }
        if ui.button("Save changes").clicked() {
            let _ = command_tx.send(Command::Save);
        }
    });
}
