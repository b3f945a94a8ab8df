//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskboard_core` linkage without the Flutter runtime.
//! - Replay the canonical add/complete/dismiss/clear flow and print each
//!   post-dispatch snapshot as one JSON line.

use std::process::ExitCode;
use taskboard_core::{Board, BoardSnapshot, Intent};

fn main() -> ExitCode {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    match replay_scenario() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scenario failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn replay_scenario() -> Result<(), serde_json::Error> {
    let mut board = Board::new();

    let report = board.dispatch(Intent::AddTask("Buy milk".to_string()));
    print_step("add_task", &board.snapshot())?;
    let Some(id) = report.created() else {
        return Ok(());
    };

    for intent in [
        Intent::ToggleTask(id),
        Intent::DismissDoneNotification,
        Intent::ClearCompleted,
    ] {
        let label = intent.name();
        board.dispatch(intent);
        print_step(label, &board.snapshot())?;
    }
    Ok(())
}

fn print_step(label: &str, snapshot: &BoardSnapshot) -> Result<(), serde_json::Error> {
    println!("{label} {}", serde_json::to_string(snapshot)?);
    Ok(())
}
