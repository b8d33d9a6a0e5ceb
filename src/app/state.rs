// src/app/state.rs

use crate::domain::{ResultSet, TimeWindow};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdleState;

/// A request is in flight for this file. The intake is disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadingState {
    pub(crate) file_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadyState {
    pub(crate) results: ResultSet,
    pub(crate) window: TimeWindow,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Idle(IdleState),
    Uploading(UploadingState),
    Ready(ReadyState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Idle(IdleState)
    }
}

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    PickFile,
    UploadNew,
    SelectWindow(TimeWindow),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub(crate) kind: NotificationKind,
    pub(crate) title: String,
    pub(crate) body: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: title.into(),
            body: body.into(),
        }
    }
}
