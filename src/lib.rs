pub mod anki;
pub mod core;
pub mod gui;
