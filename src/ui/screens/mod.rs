mod intake;
mod landing;
mod results;

pub(crate) use {
    intake::render_intake,
    landing::{render_header, render_info_cards},
    results::render_results,
};
