use std::time::Duration;

pub struct ToastConfig {
    /// How long a toast stays on screen
    pub lifetime: Duration,
    /// Oldest toasts are dropped past this count
    pub max_visible: usize,
    pub width: f32,
}

pub const TOASTS: ToastConfig = ToastConfig {
    lifetime: Duration::from_secs(5),
    max_visible: 3,
    width: 320.0,
};
