use folio_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new(vec!["https://a.example.com".to_string()], 0);
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
