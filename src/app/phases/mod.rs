pub(super) mod phase_view;
pub(super) mod idle;
pub(super) mod uploading;
pub(super) mod ready;

pub(crate) use phase_view::PhaseView;
