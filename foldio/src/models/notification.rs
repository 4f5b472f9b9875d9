use egui_notify::Toasts;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Notification {
    Success(String),
    Info(String),
}

impl Notification {
    pub fn create_toast(&self, toasts: &mut Toasts) {
        match self {
            Notification::Success(msg) => {
                toasts.success(msg).duration(Some(Duration::from_secs(3)));
            }
            Notification::Info(msg) => {
                toasts.info(msg).duration(Some(Duration::from_secs(3)));
            }
        };
    }
}
