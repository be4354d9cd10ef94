use std::path::PathBuf;
use std::time::Duration;

pub const ROSTER_FILE: &str = "students.txt";
pub const WINDOW_TITLE: &str = "My students";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub roster_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    /// Maximum number of characters accepted in the name field.
    pub input_cap: usize,
    pub notification_lifetime: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(ROSTER_FILE),
            window_title: WINDOW_TITLE.to_string(),
            window_size: [800.0, 600.0],
            input_cap: 10,
            notification_lifetime: Duration::from_secs(2),
        }
    }
}
