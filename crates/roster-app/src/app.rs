use std::path::PathBuf;
use std::time::Instant;

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use roster_store::Roster;
use tracing::{debug, error};

use crate::commands::Command;
use crate::config::AppConfig;
use crate::input::PendingInput;
use crate::ui::{
    controls::{controls_ui, ControlsProps},
    notifications::Notifications,
    roster_list::{roster_list_ui, RosterListProps},
};

pub const ADDED: &str = "Student added!";
pub const REMOVED: &str = "Student removed!";
pub const CLEARED: &str = "All students cleared!";
pub const SAVED: &str = "All changes saved!";
pub const SAVE_FAILED: &str = "Could not save changes!";

pub struct RosterApp {
    roster: Roster,
    roster_path: PathBuf,
    input: PendingInput,
    notifications: Notifications,
    command_tx: Sender<Command>,
    command_rx: Receiver<Command>,
}

impl RosterApp {
    pub fn new(config: &AppConfig, roster: Roster) -> Self {
        let (command_tx, command_rx) = unbounded();
        Self {
            roster,
            roster_path: config.roster_path.clone(),
            input: PendingInput::new(config.input_cap),
            notifications: Notifications::new(config.notification_lifetime),
            command_tx,
            command_rx,
        }
    }

    fn process_commands(&mut self, now: Instant) {
        while let Ok(command) = self.command_rx.try_recv() {
            self.handle_command(command, now);
        }
    }

    fn handle_command(&mut self, command: Command, now: Instant) {
        debug!(%command, "handling command");
        match command {
            Command::Add => {
                let Some(name) = self.input.take_name() else {
                    return;
                };
                self.roster = std::mem::take(&mut self.roster).add(name);
                self.notifications.success(ADDED, now);
            }
            Command::Remove(name) => {
                self.roster = std::mem::take(&mut self.roster).remove(&name);
                self.notifications.success(REMOVED, now);
            }
            Command::Clear => {
                self.roster = std::mem::take(&mut self.roster).clear();
                self.notifications.success(CLEARED, now);
            }
            Command::Save => match roster_store::save(&self.roster_path, &self.roster) {
                Ok(()) => {
                    self.notifications.success(SAVED, now);
                }
                Err(err) => {
                    error!(error = %err, "failed to save roster");
                    self.notifications.error(SAVE_FAILED, now);
                }
            },
            Command::DismissNotification => self.notifications.dismiss(),
        }
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_commands(now);
        if let Some(remaining) = self.notifications.tick(now) {
            ctx.request_repaint_after(remaining);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                roster_list_ui(
                    &mut columns[0],
                    RosterListProps {
                        roster: &self.roster,
                        command_tx: self.command_tx.clone(),
                    },
                );
                controls_ui(
                    &mut columns[1],
                    ControlsProps {
                        input: &mut self.input,
                        command_tx: self.command_tx.clone(),
                    },
                );
            });
        });

        if self.notifications.paint(ctx) {
            let _ = self.command_tx.send(Command::DismissNotification);
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Duration;

    use tempfile::tempdir;

    use super::*;
    use crate::ui::notifications::NoticeKind;

    fn app_with(path: PathBuf, names: &[&str]) -> RosterApp {
        let config = AppConfig {
            roster_path: path,
            ..AppConfig::default()
        };
        RosterApp::new(&config, names.iter().copied().collect())
    }

    fn message(app: &RosterApp) -> Option<(&str, NoticeKind)> {
        app.notifications
            .current()
            .map(|toast| (toast.message.as_str(), toast.kind))
    }

    #[test]
    fn add_appends_pending_name_and_clears_input() {
        let mut app = app_with(PathBuf::from("unused.txt"), &["Alice"]);
        assert!(app.input.set("Dan"));
        app.handle_command(Command::Add, Instant::now());

        assert_eq!(app.roster.names(), ["Alice", "Dan"]);
        assert!(app.input.text().is_empty());
        assert_eq!(message(&app), Some((ADDED, NoticeKind::Success)));
    }

    #[test]
    fn blank_add_is_silently_ignored() {
        let mut app = app_with(PathBuf::from("unused.txt"), &["Alice"]);
        app.input.set("   ");
        app.handle_command(Command::Add, Instant::now());

        assert_eq!(app.roster.names(), ["Alice"]);
        assert_eq!(app.input.text(), "   ");
        assert!(!app.notifications.is_visible());
    }

    #[test]
    fn remove_drops_duplicates_and_notifies() {
        let mut app = app_with(PathBuf::from("unused.txt"), &["Alice", "Alice", "Bob"]);
        app.handle_command(Command::Remove("Alice".into()), Instant::now());

        assert_eq!(app.roster.names(), ["Bob"]);
        assert_eq!(message(&app), Some((REMOVED, NoticeKind::Success)));
    }

    #[test]
    fn clear_empties_roster_without_touching_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.txt");
        fs::write(&path, "Alice\nBob").unwrap();

        let mut app = app_with(path.clone(), &["Alice", "Bob"]);
        app.handle_command(Command::Clear, Instant::now());

        assert!(app.roster.is_empty());
        assert_eq!(message(&app), Some((CLEARED, NoticeKind::Success)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Alice\nBob");
    }

    #[test]
    fn save_writes_current_roster() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.txt");
        let mut app = app_with(path.clone(), &["Alice", "Carol"]);
        app.input.set("Dan");
        app.handle_command(Command::Add, Instant::now());
        app.handle_command(Command::Save, Instant::now());

        assert_eq!(fs::read_to_string(&path).unwrap(), "Alice\nCarol\nDan");
        assert_eq!(message(&app), Some((SAVED, NoticeKind::Success)));
    }

    #[test]
    fn failed_save_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("students.txt");
        let mut app = app_with(path, &["Alice"]);
        app.handle_command(Command::Save, Instant::now());

        assert_eq!(message(&app), Some((SAVE_FAILED, NoticeKind::Error)));
    }

    #[test]
    fn commands_from_widgets_are_drained_in_order() {
        let mut app = app_with(PathBuf::from("unused.txt"), &["Alice", "Bob"]);
        app.command_tx.send(Command::Remove("Bob".into())).unwrap();
        app.command_tx.send(Command::DismissNotification).unwrap();
        app.process_commands(Instant::now());

        assert_eq!(app.roster.names(), ["Alice"]);
        assert!(!app.notifications.is_visible());
    }

    #[test]
    fn notification_after_add_hides_on_its_own() {
        let mut app = app_with(PathBuf::from("unused.txt"), &[]);
        let start = Instant::now();
        app.input.set("Eve");
        app.handle_command(Command::Add, start);
        assert!(app.notifications.is_visible());

        app.notifications.tick(start + Duration::from_secs(2));
        assert!(!app.notifications.is_visible());
    }
}
