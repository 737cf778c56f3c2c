pub mod event_form;
pub mod help;
