pub mod card;
pub mod layout;
mod menu;
mod quiz;
mod summary;

pub use card::{card_heights, draw_card};
pub use layout::{calculate_card_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;
