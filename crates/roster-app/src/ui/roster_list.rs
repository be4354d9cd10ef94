use crossbeam_channel::Sender;
use egui::{self, Align, Color32, Layout, RichText};
use roster_store::Roster;

use crate::commands::Command;

const ROW_HEIGHT: f32 = 70.0;

pub struct RosterListProps<'a> {
    pub roster: &'a Roster,
    pub command_tx: Sender<Command>,
}

/// Header with the live count followed by a bordered, scrollable list of names.
pub fn roster_list_ui(ui: &mut egui::Ui, props: RosterListProps<'_>) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.heading(format!("Students: {}", props.roster.len()));
        ui.add_space(12.0);
    });

    egui::Frame::none()
        .stroke(egui::Stroke::new(2.0, Color32::BLACK))
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for (index, name) in props.roster.iter().enumerate() {
                        ui.push_id(index, |ui| {
                            student_row(ui, name, &props.command_tx);
                        });
                    }
                });
        });
}

fn student_row(ui: &mut egui::Ui, name: &str, command_tx: &Sender<Command>) {
    ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), ROW_HEIGHT),
        Layout::left_to_right(Align::Center),
        |ui| {
            ui.add_space(16.0);
            ui.label(RichText::new(name).size(20.0));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.add_space(16.0);
                let delete = ui
                    .add(egui::Button::new(RichText::new("🗑").color(Color32::RED)).frame(false))
                    .on_hover_text("Delete student");
                if delete.clicked() {
                    let _ = command_tx.send(Command::Remove(name.to_owned()));
                }
            });
        },
    );
}
