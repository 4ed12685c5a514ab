//! Randomized checks of the session invariants.
//!
//! Random command sequences are applied to a session and the clamp, non-empty and viewport
//! invariants are checked after every step.

use linedit_core::{
    ClipboardCommand, Command, CursorCommand, EditCommand, EditorSession, Motion, Position,
    Selection, SelectionCommand, ViewCommand,
};
use rand::Rng;
use rand::rngs::ThreadRng;

const MOTIONS: [Motion; 8] = [
    Motion::Left,
    Motion::Right,
    Motion::Up,
    Motion::Down,
    Motion::LineStart,
    Motion::LineEnd,
    Motion::PageUp,
    Motion::PageDown,
];

const SAMPLES: [&str; 6] = ["x", "ab", "ø", "ß", "one\ntwo", "\n"];

fn random_command(rng: &mut ThreadRng) -> Command {
    // Out-of-range coordinates on purpose: the session must clamp them.
    let row = rng.gen_range(0..30);
    let col = rng.gen_range(0..30);
    match rng.gen_range(0..15) {
        0 => Command::Edit(EditCommand::InsertText {
            text: SAMPLES[rng.gen_range(0..SAMPLES.len())].to_string(),
        }),
        1 => Command::Edit(EditCommand::Backspace),
        2 => Command::Edit(EditCommand::DeleteForward),
        3 => Command::Edit(EditCommand::Newline),
        4 => Command::Edit(EditCommand::InsertTab),
        5 | 6 => Command::Cursor(CursorCommand::Move {
            motion: MOTIONS[rng.gen_range(0..MOTIONS.len())],
            extend: rng.gen_bool(0.5),
        }),
        7 => Command::Cursor(CursorCommand::MoveTo { row, col }),
        8 => Command::Selection(SelectionCommand::Begin { row, col }),
        9 => Command::Selection(SelectionCommand::Extend { row, col }),
        10 => Command::Selection(SelectionCommand::Finalize),
        11 => Command::Clipboard(ClipboardCommand::Copy),
        12 => Command::Clipboard(if rng.gen_bool(0.5) {
            ClipboardCommand::Cut
        } else {
            ClipboardCommand::Paste
        }),
        13 => Command::View(ViewCommand::SetVisibleArea {
            rows: rng.gen_range(0..8),
            cols: 40,
        }),
        _ => Command::View(ViewCommand::ScrollTo { row }),
    }
}

fn assert_invariants(session: &EditorSession, command: &Command) {
    let doc = session.document();
    let cursor = session.cursor();
    let viewport = session.viewport();

    assert!(doc.line_count() >= 1, "empty document after {command:?}");
    assert!(
        cursor.row < doc.line_count(),
        "cursor row {} out of range after {command:?}",
        cursor.row
    );
    assert!(
        cursor.col <= doc.line_len(cursor.row),
        "cursor col {} past line end after {command:?}",
        cursor.col
    );
    assert!(
        doc.lines().iter().all(|line| !line.contains('\n')),
        "embedded separator after {command:?}"
    );
    assert!(viewport.scroll_row <= cursor.row);
    assert!(cursor.row < viewport.scroll_row + viewport.visible_rows.max(1));

    if let Some((start, end)) = session.selection().range() {
        assert!(start <= end);
    }
}

#[test]
fn test_random_command_sequences_keep_invariants() {
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let mut session = EditorSession::from_lines(["hello world", "", "second line"]);
        for _ in 0..200 {
            let command = random_command(&mut rng);
            session.execute(command.clone());
            assert_invariants(&session, &command);
        }
    }
}

#[test]
fn test_normalization_is_order_independent() {
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let a = Position::new(rng.gen_range(0..10), rng.gen_range(0..10));
        let b = Position::new(rng.gen_range(0..10), rng.gen_range(0..10));

        let mut forward = Selection::new();
        forward.begin(a);
        forward.extend(b);
        let mut backward = Selection::new();
        backward.begin(b);
        backward.extend(a);

        let (start, end) = forward.normalized();
        assert!(start <= end);
        assert_eq!(forward.normalized(), backward.normalized());
    }
}

#[test]
fn test_random_delete_then_insert_restores_document() {
    let mut rng = rand::thread_rng();
    let original = ["alpha beta", "gamma", "", "delta epsilon", "zeta"];

    for _ in 0..200 {
        let mut session = EditorSession::from_lines(original);
        let anchor = session
            .document()
            .clamp(Position::new(rng.gen_range(0..5), rng.gen_range(0..14)));
        let extent = session
            .document()
            .clamp(Position::new(rng.gen_range(0..5), rng.gen_range(0..14)));
        session.execute(Command::Selection(SelectionCommand::Begin {
            row: anchor.row,
            col: anchor.col,
        }));
        session.execute(Command::Selection(SelectionCommand::Extend {
            row: extent.row,
            col: extent.col,
        }));
        let captured = session.selected_text();

        session.execute(Command::Edit(EditCommand::Backspace));
        session.execute(Command::Edit(EditCommand::InsertText { text: captured }));

        assert_eq!(session.document().lines(), original);
        assert_eq!(session.cursor(), anchor.max(extent));
    }
}
