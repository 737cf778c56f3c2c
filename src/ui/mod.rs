pub mod event_card;
pub mod event_list;
pub mod theme;
