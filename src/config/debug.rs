//! Debugging feature flags.

pub struct LogFlags {
    /// Upload lifecycle: submit, response, state transitions.
    pub log_upload: bool,

    /// Drag hover / drop / picker events on the intake surface.
    pub log_intake: bool,

    /// Every raised notification, with its body.
    pub log_notifications: bool,
}

pub const DF: LogFlags = LogFlags {
    log_upload: true,
    log_intake: false,
    log_notifications: true,
};
