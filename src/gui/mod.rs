pub mod app;
pub mod card_form;
pub mod status_line;
pub mod theme;

pub use app::CardApp;
