use std::sync::Once;

use folio_core::{update, AppState, Effect, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(folio_logging::initialize_for_tests);
}

fn links(urls: &[&str]) -> Vec<String> {
    urls.iter().map(|url| (*url).to_string()).collect()
}

fn started(urls: &[&str], restored: usize) -> AppState {
    let (state, _) = update(AppState::new(links(urls), restored), Msg::Started);
    state
}

#[test]
fn started_requests_initial_load_without_persisting() {
    init_logging();
    let state = AppState::new(links(&["https://a.example.com"]), 0);

    let (next, effects) = update(state, Msg::Started);

    assert!(next.view().loading);
    assert_eq!(
        effects,
        vec![Effect::ShowUrl {
            generation: 1,
            url: "https://a.example.com".to_string(),
        }]
    );
}

#[test]
fn step_forward_and_back_move_one_entry() {
    init_logging();
    let state = started(&["https://a.example.com", "https://b.example.com"], 0);

    let (next, effects) = update(state, Msg::ForwardClicked);
    assert_eq!(next.view().current_index, Some(1));
    assert_eq!(
        next.view().current_url.as_deref(),
        Some("https://b.example.com")
    );
    assert!(next.view().loading);
    assert_eq!(
        effects,
        vec![
            Effect::ShowUrl {
                generation: 2,
                url: "https://b.example.com".to_string(),
            },
            Effect::PersistIndex { index: 1 },
        ]
    );

    let (next, effects) = update(next, Msg::BackClicked);
    assert_eq!(next.view().current_index, Some(0));
    assert_eq!(
        effects,
        vec![
            Effect::ShowUrl {
                generation: 3,
                url: "https://a.example.com".to_string(),
            },
            Effect::PersistIndex { index: 0 },
        ]
    );
}

#[test]
fn steps_clamp_at_both_ends() {
    init_logging();
    // list = [A, B, C], start at 0.
    let state = started(&["A", "B", "C"], 0);

    let (state, _) = update(state, Msg::ForwardClicked);
    assert_eq!(state.view().current_index, Some(1));
    let (state, _) = update(state, Msg::ForwardClicked);
    assert_eq!(state.view().current_index, Some(2));

    // Forward at the last entry is a no-op.
    let (state, effects) = update(state, Msg::ForwardClicked);
    assert_eq!(state.view().current_index, Some(2));
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::BackClicked);
    let (mut state, _) = update(state, Msg::BackClicked);
    assert_eq!(state.view().current_index, Some(0));
    assert!(state.consume_dirty());

    // Back at the first entry is a no-op.
    let (mut state, effects) = update(state, Msg::BackClicked);
    assert_eq!(state.view().current_index, Some(0));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn random_click_defers_the_draw_to_the_platform() {
    init_logging();
    let state = started(&["A", "B", "C"], 0);

    let (state, effects) = update(state, Msg::RandomClicked);
    assert_eq!(effects, vec![Effect::PickRandomIndex { len: 3 }]);

    let (state, effects) = update(state, Msg::RandomIndexPicked(2));
    assert_eq!(state.view().current_index, Some(2));
    assert!(state.view().loading);
    assert_eq!(
        effects,
        vec![
            Effect::ShowUrl {
                generation: 2,
                url: "C".to_string(),
            },
            Effect::PersistIndex { index: 2 },
        ]
    );
}

#[test]
fn random_pick_may_reselect_the_current_index() {
    init_logging();
    let state = started(&["A", "B"], 1);

    let (state, effects) = update(state, Msg::RandomIndexPicked(1));
    assert_eq!(state.view().current_index, Some(1));
    assert!(state.view().loading);
    assert_eq!(effects.len(), 2);
}

#[test]
fn out_of_range_random_pick_is_dropped() {
    init_logging();
    let state = started(&["A", "B"], 0);

    let (state, effects) = update(state, Msg::RandomIndexPicked(2));
    assert_eq!(state.view().current_index, Some(0));
    assert!(effects.is_empty());
}

#[test]
fn restored_index_is_clamped_to_the_list() {
    init_logging();
    // The list shrank since the index was persisted.
    let state = AppState::new(links(&["A", "B"]), 7);
    assert_eq!(state.view().current_index, Some(1));
    assert_eq!(state.view().input_text, "2");
}

#[test]
fn empty_list_makes_navigation_inert() {
    init_logging();
    let state = AppState::new(Vec::new(), 0);
    let view = state.view();
    assert_eq!(view.current_index, None);
    assert_eq!(view.current_url, None);
    assert!(!view.controls_enabled);

    for msg in [
        Msg::Started,
        Msg::BackClicked,
        Msg::ForwardClicked,
        Msg::RandomClicked,
        Msg::RandomIndexPicked(0),
    ] {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(next.view(), view);
        assert!(effects.is_empty());
    }
}

#[test]
fn loading_clears_only_for_the_current_generation() {
    init_logging();
    let state = started(&["A", "B"], 0);
    assert!(state.view().loading);

    // Navigate away before the first load signal arrives.
    let (state, _) = update(state, Msg::ForwardClicked);

    // Stale signal for generation 1 must not clear the new load.
    let (state, _) = update(
        state,
        Msg::ViewportLoaded {
            generation: 1,
            title: Some("Old".to_string()),
        },
    );
    assert!(state.view().loading);
    assert_eq!(state.view().page_title, None);

    let (state, _) = update(
        state,
        Msg::ViewportLoaded {
            generation: 2,
            title: Some("New".to_string()),
        },
    );
    assert!(!state.view().loading);
    assert_eq!(state.view().page_title.as_deref(), Some("New"));
}

#[test]
fn view_reports_step_availability() {
    init_logging();
    let state = started(&["A", "B", "C"], 0);
    assert!(!state.view().can_step_back);
    assert!(state.view().can_step_forward);

    let (state, _) = update(state, Msg::ForwardClicked);
    assert!(state.view().can_step_back);
    assert!(state.view().can_step_forward);

    let (state, _) = update(state, Msg::ForwardClicked);
    assert!(state.view().can_step_back);
    assert!(!state.view().can_step_forward);
}
