use acadex_core::cascade::{CascadeState, FetchOutcome, FetchTicket};
use acadex_core::error::Error;
use acadex_types::{CatalogLevel, CatalogOption};

use CatalogLevel::{College, Course, Department, Subject};

fn opt(id: &str, token: &str) -> CatalogOption {
    CatalogOption {
        id: id.to_string(),
        label: format!("{} ({})", id, token),
        token: token.to_string(),
    }
}

fn ids(state: &CascadeState, level: CatalogLevel) -> Vec<&str> {
    state.options(level).iter().map(|o| o.id.as_str()).collect()
}

/// An empty selection at any level implies empty selections below it.
fn assert_ordering_invariant(state: &CascadeState) {
    let mut parent_empty = false;
    for level in CatalogLevel::ALL {
        if parent_empty {
            assert!(
                state.selection(level).is_none(),
                "selection at {} survives an empty ancestor",
                level
            );
        }
        if state.selection(level).is_none() {
            parent_empty = true;
        }
    }
}

/// Loads roots and selects Engineering -> CSE -> CSC101.
fn engineering_course_state() -> CascadeState {
    let mut state = CascadeState::new();
    let ticket = state.begin_load_roots();
    state.apply_fetch(&ticket, Ok(vec![opt("eng", "ENG"), opt("sci", "SCI")]));

    let ticket = state.select(College, "eng").unwrap().unwrap();
    state.apply_fetch(&ticket, Ok(vec![opt("cse", "CSE"), opt("mee", "MEE")]));

    let ticket = state.select(Department, "cse").unwrap().unwrap();
    state.apply_fetch(&ticket, Ok(vec![opt("csc101", "CSC101")]));

    let ticket = state.select(Course, "csc101").unwrap().unwrap();
    state.apply_fetch(&ticket, Ok(vec![opt("alg", "ALG"), opt("dsa", "DSA")]));

    state
}

#[test]
fn test_select_cascades_and_requests_children() {
    let mut state = CascadeState::new();
    let ticket = state.begin_load_roots();
    assert!(state.is_loading(College));
    state.apply_fetch(&ticket, Ok(vec![opt("eng", "ENG")]));
    assert!(!state.is_loading(College));

    let ticket = state.select(College, "eng").unwrap().unwrap();
    assert_eq!(ticket.level, Department);
    assert_eq!(ticket.parent.as_deref(), Some("eng"));
    assert!(state.is_loading(Department));
    assert_ordering_invariant(&state);
}

#[test]
fn test_changing_a_selection_clears_everything_below_in_one_step() {
    let mut state = engineering_course_state();
    let ticket = state.select(Subject, "alg").unwrap();
    assert!(ticket.is_none(), "leaf level has no children to fetch");
    assert_eq!(state.resolved(), Some((Subject, "alg")));

    // New college: departments and everything deeper must be gone at once.
    let ticket = state.select(College, "sci").unwrap().unwrap();
    assert_eq!(ticket.level, Department);
    for level in [Department, Course, Subject] {
        assert_eq!(state.selection(level), None);
        assert!(state.options(level).is_empty());
    }
    assert_eq!(state.resolved(), Some((College, "sci")));
    assert_ordering_invariant(&state);
}

#[test]
fn test_reselecting_the_current_value_is_a_no_op() {
    let mut state = engineering_course_state();
    state.select(Subject, "dsa").unwrap();

    let ticket = state.select(College, "eng").unwrap();
    assert!(ticket.is_none(), "idempotent reselect must not refetch");
    assert_eq!(state.selection(Department), Some("cse"));
    assert_eq!(state.selection(Course), Some("csc101"));
    assert_eq!(state.selection(Subject), Some("dsa"));
    assert_eq!(ids(&state, Subject), ["alg", "dsa"]);
}

#[test]
fn test_stale_completion_is_discarded_even_when_it_arrives_last() {
    let mut state = CascadeState::new();
    let ticket = state.begin_load_roots();
    state.apply_fetch(&ticket, Ok(vec![opt("eng", "ENG"), opt("sci", "SCI")]));

    let old = state.select(College, "eng").unwrap().unwrap();
    let new = state.select(College, "sci").unwrap().unwrap();
    assert!(new.generation > old.generation);

    // The newer fetch lands first; the older one straggles in afterwards.
    assert_eq!(
        state.apply_fetch(&new, Ok(vec![opt("phy", "PHY")])),
        FetchOutcome::Updated
    );
    assert_eq!(
        state.apply_fetch(&old, Ok(vec![opt("cse", "CSE")])),
        FetchOutcome::Stale
    );
    assert_eq!(ids(&state, Department), ["phy"]);
}

#[test]
fn test_stale_rejection_also_covers_cleared_levels() {
    let mut state = CascadeState::new();
    let ticket = state.begin_load_roots();
    state.apply_fetch(&ticket, Ok(vec![opt("eng", "ENG")]));
    let in_flight = state.select(College, "eng").unwrap().unwrap();

    state.clear(College);
    assert_eq!(
        state.apply_fetch(&in_flight, Ok(vec![opt("cse", "CSE")])),
        FetchOutcome::Stale
    );
    assert!(state.options(Department).is_empty());
}

#[test]
fn test_levels_stay_disabled_until_parent_selected() {
    let mut state = CascadeState::new();
    assert!(state.enabled(College));
    for level in [Department, Course, Subject] {
        assert!(!state.enabled(level));
    }
    match state.select(Department, "cse") {
        Err(Error::LevelDisabled(level)) => assert_eq!(level, Department),
        other => panic!("expected LevelDisabled, got {:?}", other),
    }

    let ticket = state.begin_load_roots();
    state.apply_fetch(&ticket, Ok(vec![opt("eng", "ENG")]));
    state.select(College, "eng").unwrap();
    assert!(state.enabled(Department));
    assert!(!state.enabled(Course));
}

#[test]
fn test_selecting_an_unknown_option_is_rejected() {
    let mut state = CascadeState::new();
    let ticket = state.begin_load_roots();
    state.apply_fetch(&ticket, Ok(vec![opt("eng", "ENG")]));
    match state.select(College, "nope") {
        Err(Error::UnknownOption { level, id }) => {
            assert_eq!(level, College);
            assert_eq!(id, "nope");
        }
        other => panic!("expected UnknownOption, got {:?}", other),
    }
}

#[test]
fn test_fetch_failure_is_non_fatal_and_retryable() {
    let mut state = CascadeState::new();
    let ticket = state.begin_load_roots();
    state.apply_fetch(&ticket, Ok(vec![opt("eng", "ENG")]));

    let ticket = state.select(College, "eng").unwrap().unwrap();
    assert_eq!(
        state.apply_fetch(&ticket, Err("connection refused".to_string())),
        FetchOutcome::Failed
    );
    assert!(state.options(Department).is_empty());
    assert_eq!(state.last_error(Department), Some("connection refused"));
    assert_eq!(state.selection(College), Some("eng"), "selector stays usable");

    // Retry without touching the college selection.
    let retry = state.reload(Department).unwrap();
    assert!(retry.generation > ticket.generation);
    assert_eq!(retry.parent.as_deref(), Some("eng"));
    state.apply_fetch(&retry, Ok(vec![opt("cse", "CSE")]));
    assert_eq!(ids(&state, Department), ["cse"]);
    assert_eq!(state.last_error(Department), None);
    assert_eq!(state.selection(College), Some("eng"));
}

#[test]
fn test_reload_refreshes_options_and_invalidates_the_previous_fetch() {
    let mut state = engineering_course_state();

    let stale = state.reload(Subject).unwrap();
    let fresh = state.reload(Subject).unwrap();
    assert_eq!(
        state.apply_fetch(&stale, Ok(vec![opt("old", "OLD")])),
        FetchOutcome::Stale
    );
    assert_eq!(
        state.apply_fetch(&fresh, Ok(vec![opt("alg", "ALG")])),
        FetchOutcome::Updated
    );
    assert_eq!(ids(&state, Subject), ["alg"]);

    // Selections above the reloaded level are untouched.
    assert_eq!(state.selection(Course), Some("csc101"));
    assert_ordering_invariant(&state);

    let mut bare = CascadeState::new();
    match bare.reload(Department) {
        Err(Error::LevelDisabled(level)) => assert_eq!(level, Department),
        other => panic!("expected LevelDisabled, got {:?}", other),
    }
}

#[test]
fn test_clear_keeps_own_options_and_empties_descendants() {
    let mut state = engineering_course_state();
    state.clear(Department);
    assert_eq!(state.selection(College), Some("eng"));
    assert_eq!(state.selection(Department), None);
    assert_eq!(ids(&state, Department), ["cse", "mee"]);
    assert!(state.options(Course).is_empty());
    assert!(state.options(Subject).is_empty());
    assert_ordering_invariant(&state);
}

#[test]
fn test_end_to_end_selection_then_college_change() {
    let mut state = engineering_course_state();
    state.select(Subject, "alg").unwrap();
    assert_eq!(state.subject_id(), Some("alg"));
    assert_eq!(state.course_id(), Some("csc101"));

    let ticket = state.select(College, "sci").unwrap().unwrap();
    assert_eq!(state.subject_id(), None);
    assert_eq!(state.course_id(), None);
    assert_eq!(state.resolved(), Some((College, "sci")));

    // Only the department reload for the new college may land.
    state.apply_fetch(&ticket, Ok(vec![opt("phy", "PHY")]));
    assert_eq!(ids(&state, Department), ["phy"]);
    assert!(state.options(Course).is_empty());
    assert_ordering_invariant(&state);
}

#[test]
fn test_ordering_invariant_holds_across_an_operation_storm() {
    let mut state = CascadeState::new();
    let ticket = state.begin_load_roots();
    state.apply_fetch(&ticket, Ok(vec![opt("eng", "ENG"), opt("sci", "SCI")]));

    let mut pending: Vec<FetchTicket> = Vec::new();
    let script: &[(&str, CatalogLevel, &str)] = &[
        ("select", College, "eng"),
        ("select", College, "sci"),
        ("clear", College, ""),
        ("select", College, "eng"),
        ("select", College, "eng"),
    ];
    for (action, level, id) in script {
        match *action {
            "select" => {
                if let Ok(Some(ticket)) = state.select(*level, id) {
                    pending.push(ticket);
                }
            }
            _ => state.clear(*level),
        }
        assert_ordering_invariant(&state);
    }

    // Flush stragglers in reverse order; at most the newest may apply.
    let mut applied = 0;
    for ticket in pending.iter().rev() {
        if state.apply_fetch(ticket, Ok(vec![opt("cse", "CSE")])) == FetchOutcome::Updated {
            applied += 1;
        }
        assert_ordering_invariant(&state);
    }
    assert!(applied <= 1);
}
