mod controller;
mod dispatch;
mod intake;
mod phases;
mod root;
mod state;

pub(crate) use intake::{DropOutcome, FileIntake};

pub use {
    controller::PageController,
    root::App,
    state::{
        AppState, IdleState, Notification, NotificationKind, PageEvent, ReadyState,
        UploadingState,
    },
};
