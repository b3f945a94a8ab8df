use std::collections::HashSet;
use taskboard_core::{Board, FixedClock, Intent, TaskId};
use uuid::Uuid;

fn add(board: &mut Board<FixedClock>, title: &str) -> TaskId {
    board
        .dispatch(Intent::AddTask(title.to_string()))
        .created()
        .expect("non-blank title should create a task")
}

fn titles(board: &Board<FixedClock>) -> Vec<String> {
    board.tasks().iter().map(|task| task.title.clone()).collect()
}

#[test]
fn add_prepends_pending_task() {
    let mut board = Board::with_clock(FixedClock(10));
    add(&mut board, "older");
    let before = board.tasks().len();

    let id = add(&mut board, "newer");

    assert_eq!(board.tasks().len(), before + 1);
    let head = &board.tasks()[0];
    assert_eq!(head.id, id);
    assert_eq!(head.title, "newer");
    assert!(!head.done);
    assert_eq!(head.created_at, 10);
}

#[test]
fn blank_titles_leave_board_untouched() {
    let mut board = Board::with_clock(FixedClock(0));
    add(&mut board, "keep");
    let before = board.snapshot();

    for raw in ["", "   ", "\t\n"] {
        let report = board.dispatch(Intent::AddTask(raw.to_string()));
        assert!(report.is_noop());
        assert_eq!(report.created(), None);
    }

    assert_eq!(board.snapshot(), before);
}

#[test]
fn ids_stay_unique_across_add_remove_cycles() {
    // Frozen clock: every task shares one timestamp.
    let mut board = Board::with_clock(FixedClock(0));
    let mut issued = HashSet::new();

    for round in 0..50 {
        let id = add(&mut board, "same title");
        assert!(issued.insert(id), "id reused in round {round}");
        if round % 3 == 0 {
            board.dispatch(Intent::RemoveTask(id));
        }
    }

    board.task_store().check_invariants().unwrap();
    let live: HashSet<_> = board.tasks().iter().map(|task| task.id).collect();
    assert_eq!(live.len(), board.tasks().len());
}

#[test]
fn duplicate_titles_are_allowed() {
    let mut board = Board::with_clock(FixedClock(0));
    let a = add(&mut board, "milk");
    let b = add(&mut board, "milk");
    assert_ne!(a, b);
    assert_eq!(titles(&board), vec!["milk", "milk"]);
}

#[test]
fn toggle_twice_restores_done_flag() {
    let mut board = Board::with_clock(FixedClock(0));
    let id = add(&mut board, "a");

    board.dispatch(Intent::ToggleTask(id));
    board.dispatch(Intent::ToggleTask(id));

    assert!(!board.tasks()[0].done);
}

#[test]
fn completion_sets_notification_but_uncompletion_does_not() {
    let mut board = Board::with_clock(FixedClock(0));
    let id = add(&mut board, "a");

    board.dispatch(Intent::ToggleTask(id));
    assert!(board.flags().done_notification_visible);

    board.dispatch(Intent::ToggleTask(id));
    assert!(board.flags().done_notification_visible);

    board.dispatch(Intent::DismissDoneNotification);
    board.dispatch(Intent::ToggleTask(id));
    assert!(board.flags().done_notification_visible);
    board.dispatch(Intent::DismissDoneNotification);
    board.dispatch(Intent::ToggleTask(id));
    assert!(!board.flags().done_notification_visible);
}

#[test]
fn clear_completed_keeps_pending_order_and_is_idempotent() {
    let mut board = Board::with_clock(FixedClock(0));
    let a = add(&mut board, "a");
    add(&mut board, "b");
    let c = add(&mut board, "c");
    add(&mut board, "d");
    board.dispatch(Intent::ToggleTask(a));
    board.dispatch(Intent::ToggleTask(c));

    let first = board.dispatch(Intent::ClearCompleted);
    assert!(first.tasks_changed());
    assert_eq!(titles(&board), vec!["d", "b"]);
    assert!(board.completed_tasks().is_empty());

    let after_first = board.snapshot();
    let second = board.dispatch(Intent::ClearCompleted);
    assert!(second.is_noop());
    assert_eq!(board.snapshot(), after_first);
}

#[test]
fn completed_view_tracks_collection_order() {
    let mut board = Board::with_clock(FixedClock(0));
    let a = add(&mut board, "a");
    add(&mut board, "b");
    let c = add(&mut board, "c");
    board.dispatch(Intent::ToggleTask(a));
    board.dispatch(Intent::ToggleTask(c));

    let completed: Vec<_> = board.completed_tasks().iter().map(|t| t.id).collect();
    assert_eq!(completed, vec![c, a]);
    assert_eq!(board.pending_tasks().len(), 1);

    let summary = board.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.pending, 1);
}

#[test]
fn buy_milk_scenario() {
    let mut board = Board::with_clock(FixedClock(0));
    assert!(board.tasks().is_empty());

    let id = add(&mut board, "Buy milk");
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.tasks()[0].title, "Buy milk");
    assert!(!board.tasks()[0].done);

    board.dispatch(Intent::ToggleTask(id));
    assert!(board.tasks()[0].done);
    assert!(board.flags().done_notification_visible);

    board.dispatch(Intent::DismissDoneNotification);
    assert!(!board.flags().done_notification_visible);

    board.dispatch(Intent::ClearCompleted);
    assert!(board.tasks().is_empty());
}

#[test]
fn remove_unknown_id_leaves_board_untouched() {
    let mut board = Board::with_clock(FixedClock(0));
    add(&mut board, "a");
    add(&mut board, "b");
    let before = board.snapshot();

    let report = board.dispatch(Intent::RemoveTask(Uuid::new_v4()));

    assert!(report.is_noop());
    assert_eq!(board.snapshot(), before);
}

#[test]
fn remove_keeps_order_of_remaining_tasks() {
    let mut board = Board::with_clock(FixedClock(0));
    add(&mut board, "a");
    let b = add(&mut board, "b");
    add(&mut board, "c");

    board.dispatch(Intent::RemoveTask(b));
    assert_eq!(titles(&board), vec!["c", "a"]);
}

#[test]
fn fresh_board_shows_info_banner_and_dismissal_sticks() {
    let mut board = Board::with_clock(FixedClock(0));
    assert!(board.flags().show_info_banner);
    assert!(!board.flags().dark_mode);

    assert!(board.dispatch(Intent::DismissInfoBanner).flags_changed);
    assert!(board.dispatch(Intent::DismissInfoBanner).is_noop());
    assert!(!board.flags().show_info_banner);

    board.dispatch(Intent::ToggleDarkMode);
    assert!(board.flags().dark_mode);
}
