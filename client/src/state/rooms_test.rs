use super::*;

fn room(id: i64, name: &str) -> Room {
    Room {
        id,
        name: name.to_owned(),
        image_url: String::new(),
        participants: Vec::new(),
        last_message: None,
        last_message_time: None,
    }
}

fn message(text: &str, at: &str) -> Message {
    Message {
        id: 1,
        kind: "text".to_owned(),
        message: text.to_owned(),
        sender: "u1".to_owned(),
        sender_name: None,
        created_at: at.to_owned(),
        media_url: None,
        media_type: None,
        file_name: None,
        file_size: None,
    }
}

#[test]
fn set_rooms_auto_selects_first() {
    let mut state = RoomsState { loading: true, ..RoomsState::default() };
    state.set_rooms(vec![room(5, "Orders"), room(9, "Billing")]);
    assert_eq!(state.selected, Some(5));
    assert!(!state.loading);
    assert_eq!(state.selected_room().map(|r| r.name.as_str()), Some("Orders"));
}

#[test]
fn set_rooms_keeps_existing_selection() {
    let mut state = RoomsState { selected: Some(9), ..RoomsState::default() };
    state.set_rooms(vec![room(5, "Orders"), room(9, "Billing")]);
    assert_eq!(state.selected, Some(9));
}

#[test]
fn set_rooms_drops_stale_selection() {
    let mut state = RoomsState { selected: Some(42), ..RoomsState::default() };
    state.set_rooms(vec![room(5, "Orders")]);
    assert_eq!(state.selected, Some(5));
}

#[test]
fn set_rooms_empty_clears_selection() {
    let mut state = RoomsState { selected: Some(5), ..RoomsState::default() };
    state.set_rooms(Vec::new());
    assert!(state.selected.is_none());
    assert!(state.selected_room().is_none());
}

#[test]
fn record_sent_updates_preview_and_moves_room_to_top() {
    let mut state = RoomsState::default();
    state.set_rooms(vec![room(5, "Orders"), room(9, "Billing")]);
    state.record_sent(9, &message("new", "2024-06-02T00:00:00Z"));
    assert_eq!(state.items[0].id, 9);
    assert_eq!(state.items[0].last_message.as_deref(), Some("new"));
    assert_eq!(state.items[0].last_message_time.as_deref(), Some("2024-06-02T00:00:00Z"));
    assert_eq!(state.selected, Some(5));
}

#[test]
fn record_sent_ignores_unknown_room() {
    let mut state = RoomsState::default();
    state.set_rooms(vec![room(5, "Orders")]);
    state.record_sent(77, &message("x", "t"));
    assert_eq!(state.items.len(), 1);
    assert!(state.items[0].last_message.is_none());
}
