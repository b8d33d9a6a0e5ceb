use {
    crate::{
        app::{AppState, IdleState, Notification, ReadyState, UploadingState},
        config::DF,
        data::PredictError,
        domain::{PredictionPoint, ResultSet, TimeWindow, UploadedFile},
        ui::UI_TEXT,
    },
    std::mem,
};

/// Owns every piece of page state and the only code allowed to change it.
///
/// ```text
/// Idle --submit--> Uploading --success--> Ready --upload_new--> Idle
///                  Uploading --failure--> Idle
///                                         Ready --select_window--> Ready
/// ```
#[derive(Debug, Default)]
pub struct PageController {
    state: AppState,
    notifications: Vec<Notification>,
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, AppState::Uploading(_))
    }

    pub fn has_uploaded(&self) -> bool {
        matches!(self.state, AppState::Ready(_))
    }

    /// Only the idle page shows an intake surface.
    pub fn accepts_uploads(&self) -> bool {
        matches!(self.state, AppState::Idle(_))
    }

    pub fn results(&self) -> &[PredictionPoint] {
        match &self.state {
            AppState::Ready(s) => &s.results,
            _ => &[],
        }
    }

    pub fn window(&self) -> TimeWindow {
        match &self.state {
            AppState::Ready(s) => s.window,
            _ => TimeWindow::default(),
        }
    }

    /// Idle -> Uploading. Hands the file back for the request, or `None` when busy.
    pub fn submit(&mut self, file: UploadedFile) -> Option<UploadedFile> {
        if !self.accepts_uploads() {
            log::warn!("Ignoring {}: an upload is not possible right now", file.name);
            return None;
        }

        #[cfg(debug_assertions)]
        if DF.log_upload {
            log::info!("Uploading file: {} ({} bytes)", file.name, file.size());
        }
        self.state = AppState::Uploading(UploadingState {
            file_name: file.name.clone(),
        });
        Some(file)
    }

    pub fn complete(&mut self, outcome: Result<ResultSet, PredictError>) {
        match outcome {
            Ok(points) => self.complete_success(points),
            Err(e) => self.complete_failure(e.to_string()),
        }
    }

    /// Uploading -> Ready. The points are stored exactly as received.
    pub fn complete_success(&mut self, points: ResultSet) {
        let AppState::Uploading(uploading) = &self.state else {
            log::warn!("Dropping {} predictions: no upload in flight", points.len());
            return;
        };
        let body = format!(
            "Generated {} predictions from {}",
            points.len(),
            uploading.file_name
        );

        #[cfg(debug_assertions)]
        if DF.log_upload {
            log::info!("{}", body);
        }
        self.state = AppState::Ready(ReadyState {
            results: points,
            window: TimeWindow::default(),
        });
        self.notify(Notification::success(&UI_TEXT.toast_success_title, body));
    }

    /// Uploading -> Idle, nothing retained.
    pub fn complete_failure(&mut self, message: impl Into<String>) {
        if !self.is_loading() {
            log::warn!("Ignoring upload failure: no upload in flight");
            return;
        }
        let mut message = message.into();
        if message.trim().is_empty() {
            message = UI_TEXT.error_unexpected.clone();
        }

        log::error!("Upload error: {}", message);
        self.state = AppState::Idle(IdleState);
        self.notify(Notification::destructive(&UI_TEXT.toast_failure_title, message));
    }

    /// Ready -> Idle. Results and window are discarded.
    pub fn upload_new(&mut self) {
        let AppState::Ready(_ready) = &self.state else {
            log::warn!("Upload new requested outside of the results view");
            return;
        };

        #[cfg(debug_assertions)]
        if DF.log_upload {
            log::info!(
                "Discarding {} predictions for a new upload",
                _ready.results.len()
            );
        }
        self.state = AppState::Idle(IdleState);
    }

    /// Ready -> Ready. View only; no request is made.
    pub fn select_window(&mut self, window: TimeWindow) {
        if let AppState::Ready(ready) = &mut self.state {
            ready.window = window;
        }
    }

    /// Refuse a file without leaving the current state.
    pub fn reject(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("Upload rejected: {}", message);
        self.notify(Notification::destructive(&UI_TEXT.toast_failure_title, message));
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        mem::take(&mut self.notifications)
    }

    fn notify(&mut self, notification: Notification) {
        if DF.log_notifications {
            log::info!("{}: {}", notification.title, notification.body);
        }
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NotificationKind;

    fn csv(name: &str) -> UploadedFile {
        UploadedFile::new(name, None, b"Hour,PEDOCS Score\n".to_vec())
    }

    fn points(n: usize) -> ResultSet {
        (0..n)
            .map(|i| PredictionPoint::new(format!("2024-11-06T{:02}:00:00Z", i % 24), 50.0 + i as f64))
            .collect()
    }

    fn uploading(name: &str) -> PageController {
        let mut c = PageController::new();
        assert!(c.submit(csv(name)).is_some());
        c
    }

    #[test]
    fn starts_idle_with_nothing_to_show() {
        let c = PageController::new();
        assert_eq!(c.state(), &AppState::Idle(IdleState));
        assert!(c.accepts_uploads());
        assert!(!c.is_loading());
        assert!(!c.has_uploaded());
        assert!(c.results().is_empty());
        assert_eq!(c.window(), TimeWindow::Hours24);
    }

    #[test]
    fn submit_moves_to_uploading_and_returns_the_file() {
        let mut c = PageController::new();
        let file = c.submit(csv("scores.csv")).unwrap();
        assert_eq!(file.name, "scores.csv");
        assert!(c.is_loading());
        assert!(!c.accepts_uploads());
        assert_eq!(
            c.state(),
            &AppState::Uploading(UploadingState {
                file_name: "scores.csv".into()
            })
        );
    }

    #[test]
    fn second_submit_while_uploading_is_refused() {
        let mut c = uploading("first.csv");
        assert!(c.submit(csv("second.csv")).is_none());
        assert_eq!(
            c.state(),
            &AppState::Uploading(UploadingState {
                file_name: "first.csv".into()
            })
        );
    }

    #[test]
    fn success_stores_the_exact_sequence() {
        let mut c = uploading("scores.csv");
        let mut returned = points(24);
        returned.swap(0, 5); // backend order is kept even when not chronological
        c.complete(Ok(returned.clone()));

        assert!(c.has_uploaded());
        assert!(!c.is_loading());
        assert_eq!(c.results(), returned.as_slice());
        assert_eq!(c.window(), TimeWindow::Hours24);

        let notes = c.drain_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Success);
        assert_eq!(notes[0].title, "Success!");
        assert_eq!(notes[0].body, "Generated 24 predictions from scores.csv");
        assert!(c.drain_notifications().is_empty());
    }

    #[test]
    fn http_failure_returns_to_idle_with_backend_message() {
        let mut c = uploading("scores.csv");
        c.complete(Err(PredictError::Http {
            status: 422,
            message: Some("Missing column: Hour".into()),
        }));

        assert!(c.accepts_uploads());
        assert!(c.results().is_empty());
        let notes = c.drain_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Destructive);
        assert_eq!(notes[0].title, "Upload Failed");
        assert_eq!(notes[0].body, "Missing column: Hour");
    }

    #[test]
    fn network_failure_returns_to_idle_with_wrapped_message() {
        let mut c = uploading("scores.csv");
        c.complete(Err(PredictError::Transport("connection reset".into())));

        assert_eq!(c.state(), &AppState::Idle(IdleState));
        assert!(c.results().is_empty());
        let notes = c.drain_notifications();
        assert_eq!(notes[0].body, "Failed to process CSV file: connection reset");
    }

    #[test]
    fn empty_failure_message_gets_a_fallback() {
        let mut c = uploading("scores.csv");
        c.complete_failure("   ");
        let notes = c.drain_notifications();
        assert!(!notes[0].body.trim().is_empty());
    }

    #[test]
    fn select_window_only_changes_the_view() {
        let mut c = uploading("scores.csv");
        let returned = points(24);
        c.complete_success(returned.clone());
        c.drain_notifications();

        c.select_window(TimeWindow::Hours6);
        assert_eq!(c.window(), TimeWindow::Hours6);
        assert_eq!(c.results(), returned.as_slice());
        assert!(c.has_uploaded());
        assert!(c.drain_notifications().is_empty());
    }

    #[test]
    fn upload_new_clears_results_and_resets_window() {
        let mut c = uploading("scores.csv");
        c.complete_success(points(12));
        c.select_window(TimeWindow::Hours3);

        c.upload_new();
        assert!(c.accepts_uploads());
        assert!(!c.has_uploaded());
        assert!(c.results().is_empty());
        assert_eq!(c.window(), TimeWindow::Hours24);
    }

    #[test]
    fn stray_completions_are_ignored() {
        let mut c = PageController::new();
        c.complete_success(points(3));
        c.complete_failure("late");
        assert_eq!(c.state(), &AppState::Idle(IdleState));
        assert!(c.drain_notifications().is_empty());
    }

    #[test]
    fn reject_notifies_without_changing_state() {
        let mut c = PageController::new();
        c.reject("Invalid file type. Please upload a CSV file.");
        assert!(c.accepts_uploads());
        let notes = c.drain_notifications();
        assert_eq!(notes[0].kind, NotificationKind::Destructive);
        assert_eq!(notes[0].body, "Invalid file type. Please upload a CSV file.");
    }

    #[test]
    fn upload_new_while_uploading_keeps_the_request() {
        let mut c = uploading("scores.csv");
        c.upload_new();
        assert!(c.is_loading());
    }

    #[test]
    fn select_window_outside_ready_is_a_no_op() {
        let mut c = PageController::new();
        c.select_window(TimeWindow::Hours3);
        assert_eq!(c.window(), TimeWindow::Hours24);
    }
}
