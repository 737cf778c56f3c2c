mod session;
mod presentation;
mod dialogs;
mod views;

pub use session::run_tui;
