pub mod add;
pub mod board;
pub mod calendar;
pub mod export;
pub mod filter_bar;
pub mod notes;
pub mod plan;
pub mod table;
pub mod universal_notes;
pub mod week_banner;
