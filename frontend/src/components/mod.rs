// Reusable components live here.

pub mod dropzone;
pub mod icons;
pub mod modal;
pub mod stats_card;
