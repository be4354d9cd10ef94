use std::time::{Duration, Instant};

use egui::{self, Align2, Color32, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: NoticeKind,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub enum Notification {
    #[default]
    Hidden,
    Visible(Toast),
}

/// Single-slot toast with a lifetime timer keyed to the toast that started it.
#[derive(Debug)]
pub struct Notifications {
    state: Notification,
    lifetime: Duration,
    next_id: u64,
}

impl Notifications {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            state: Notification::Hidden,
            lifetime,
            next_id: 1,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        match &self.state {
            Notification::Visible(toast) => Some(toast),
            Notification::Hidden => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, Notification::Visible(_))
    }

    /// Replaces whatever is showing with a new toast.
    pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.state = Notification::Visible(Toast {
            id,
            message: message.into(),
            kind,
            shown_at: now,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.show(message, NoticeKind::Success, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> ToastId {
        self.show(message, NoticeKind::Error, now)
    }

    pub fn dismiss(&mut self) {
        self.state = Notification::Hidden;
    }

    /// Timer callback. Only hides the toast the timer was started for.
    pub fn expire(&mut self, id: ToastId) {
        if self.current().is_some_and(|toast| toast.id == id) {
            self.state = Notification::Hidden;
        }
    }

    /// Fires the timer of the current toast if its lifetime has passed.
    /// Returns how long until the next check is needed while a toast is up.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let toast = self.current()?;
        let elapsed = now.saturating_duration_since(toast.shown_at);
        if elapsed >= self.lifetime {
            let id = toast.id;
            self.expire(id);
            None
        } else {
            Some(self.lifetime - elapsed)
        }
    }

    /// Draws the current toast. Returns true when the user dismissed it.
    pub fn paint(&self, ctx: &egui::Context) -> bool {
        let Some(toast) = self.current() else {
            return false;
        };
        let (fill, accent) = colors_for(toast.kind);
        let mut dismissed = false;

        egui::Window::new("notification")
            .id(egui::Id::new(("notification", toast.id)))
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .frame(
                egui::Frame::popup(&ctx.style())
                    .fill(fill)
                    .stroke(egui::Stroke::new(1.0, accent))
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&toast.message)
                            .size(18.0)
                            .color(Color32::WHITE),
                    );
                    let close = ui.add(
                        egui::Button::new(RichText::new("✕").strong().color(accent)).frame(false),
                    );
                    if close.clicked() {
                        dismissed = true;
                    }
                });
            });

        dismissed
    }
}

fn colors_for(kind: NoticeKind) -> (Color32, Color32) {
    match kind {
        NoticeKind::Success => (
            Color32::from_rgb(24, 64, 32),
            Color32::from_rgb(64, 200, 96),
        ),
        NoticeKind::Error => (
            Color32::from_rgb(72, 24, 24),
            Color32::from_rgb(240, 96, 96),
        ),
    }
}
