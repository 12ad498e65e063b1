use crate::pagination::state::*;

#[test]
fn test_step_back_emits_previous_page() {
    for current in 1..=50 {
        let state = PaginationState::new(current, 100, true, true);
        assert_eq!(state.target(PageAction::Previous), Some(current - 1));
    }
}

#[test]
fn test_step_forward_emits_next_page() {
    for current in 1..=50 {
        let state = PaginationState::new(current, 100, true, true);
        assert_eq!(state.target(PageAction::Next), Some(current + 1));
    }
}

#[test]
fn test_jump_to_first_ignores_current_page() {
    for current in [1, 2, 7, 999] {
        let state = PaginationState::new(current, 1000, true, false);
        assert_eq!(state.target(PageAction::First), Some(1));
    }
}

#[test]
fn test_jump_to_last_ignores_current_page() {
    for current in [1, 2, 7, 999] {
        let state = PaginationState::new(current, 1000, false, true);
        assert_eq!(state.target(PageAction::Last), Some(1000));
    }
}

#[test]
fn test_previous_flag_disables_first_and_previous() {
    let state = PaginationState::new(4, 9, false, true);
    assert_eq!(state.target(PageAction::First), None);
    assert_eq!(state.target(PageAction::Previous), None);
    assert_eq!(state.target(PageAction::Next), Some(5));
    assert_eq!(state.target(PageAction::Last), Some(9));
}

#[test]
fn test_next_flag_disables_next_and_last() {
    let state = PaginationState::new(4, 9, true, false);
    assert_eq!(state.target(PageAction::Next), None);
    assert_eq!(state.target(PageAction::Last), None);
    assert_eq!(state.target(PageAction::First), Some(1));
    assert_eq!(state.target(PageAction::Previous), Some(3));
}

#[test]
fn test_middle_page_scenario() {
    let state = PaginationState::new(5, 10, true, true);
    assert_eq!(state.target(PageAction::Previous), Some(4));
    assert_eq!(state.target(PageAction::Next), Some(6));
    assert_eq!(state.target(PageAction::First), Some(1));
    assert_eq!(state.target(PageAction::Last), Some(10));
}

#[test]
fn test_single_page_scenario_is_inert() {
    let state = PaginationState::new(1, 1, false, false);
    for action in PageAction::ALL {
        assert_eq!(state.target(action), None, "{:?} should be disabled", action);
    }
}

#[test]
fn test_flags_are_not_derived_from_pages() {
    // Owner locked navigation although page 3 of 8 has neighbours
    let state = PaginationState::new(3, 8, false, false);
    assert!(PageAction::ALL.iter().all(|a| !a.is_enabled(&state)));

    // Inconsistent flags are passed through unguarded
    let state = PaginationState::new(1, 1, true, true);
    assert_eq!(state.target(PageAction::Previous), Some(0));
    assert_eq!(state.target(PageAction::Next), Some(2));
}

#[test]
fn test_arithmetic_saturates() {
    let state = PaginationState::new(0, 0, true, true);
    assert_eq!(state.target(PageAction::Previous), Some(0));

    let state = PaginationState::new(usize::MAX, usize::MAX, true, true);
    assert_eq!(state.target(PageAction::Next), Some(usize::MAX));
}

#[test]
fn test_page_label_is_current_page_verbatim() {
    for current in [1, 9, 10, 42, 12345] {
        let state = PaginationState::from_bounds(current, 99999);
        assert_eq!(state.page_label(), current.to_string());
    }
}

#[test]
fn test_from_bounds_derives_flags() {
    assert_eq!(
        PaginationState::from_bounds(1, 1),
        PaginationState::new(1, 1, false, false)
    );
    assert_eq!(
        PaginationState::from_bounds(1, 3),
        PaginationState::new(1, 3, false, true)
    );
    assert_eq!(
        PaginationState::from_bounds(2, 3),
        PaginationState::new(2, 3, true, true)
    );
    assert_eq!(
        PaginationState::from_bounds(3, 3),
        PaginationState::new(3, 3, true, false)
    );
}

#[test]
fn test_with_navigation_locked_keeps_pages() {
    let locked = PaginationState::from_bounds(5, 10).with_navigation_locked();
    assert_eq!(locked.current_page, 5);
    assert_eq!(locked.last_page, 10);
    for action in PageAction::ALL {
        assert_eq!(locked.target(action), None);
    }
}

#[test]
fn test_default_is_single_page() {
    let state = PaginationState::default();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.last_page, 1);
    assert!(!state.has_previous_page);
    assert!(!state.has_next_page);
}

#[test]
fn test_action_labels_are_distinct() {
    let labels: Vec<_> = PageAction::ALL.iter().map(|a| a.label()).collect();
    assert_eq!(
        labels,
        vec!["First page", "Previous page", "Next page", "Last page"]
    );
}
