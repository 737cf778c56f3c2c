use crate::calendar::Event;
use crate::ui::event_card::CardView;

pub const LOADING_TEXT: &str = "Loading events...";
pub const EMPTY_TITLE: &str = "No events scheduled";
pub const EMPTY_HINT: &str = "Get started by adding your first event using the \"Add Event\" button above.";

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Empty,
    Cards(Vec<CardView>),
}

/// Cards come out in the order given; the list never sorts or filters.
pub fn build(loading: bool, events: &[&Event], selected: usize) -> ListView {
    if loading {
        return ListView::Loading;
    }

    if events.is_empty() {
        return ListView::Empty;
    }

    let cards = events
        .iter()
        .enumerate()
        .map(|(idx, event)| CardView::from_event(event, idx == selected))
        .collect();

    ListView::Cards(cards)
}
