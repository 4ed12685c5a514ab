use linedit_core::{
    ClipboardCommand, Command, CursorCommand, EditCommand, EditorSession, Position,
    SelectionCommand,
};
use pretty_assertions::assert_eq;

fn move_to(session: &mut EditorSession, row: usize, col: usize) {
    session.execute(Command::Cursor(CursorCommand::MoveTo { row, col }));
}

fn select(session: &mut EditorSession, anchor: (usize, usize), extent: (usize, usize)) {
    session.execute(Command::Selection(SelectionCommand::Begin {
        row: anchor.0,
        col: anchor.1,
    }));
    session.execute(Command::Selection(SelectionCommand::Extend {
        row: extent.0,
        col: extent.1,
    }));
    session.execute(Command::Selection(SelectionCommand::Finalize));
}

fn edit(session: &mut EditorSession, command: EditCommand) {
    session.execute(Command::Edit(command));
}

fn insert(session: &mut EditorSession, text: &str) {
    edit(
        session,
        EditCommand::InsertText {
            text: text.to_string(),
        },
    );
}

#[test]
fn test_backspace_joins_lines() {
    let mut session = EditorSession::from_lines(["abc", "def"]);
    move_to(&mut session, 1, 0);

    edit(&mut session, EditCommand::Backspace);

    assert_eq!(session.document().lines(), ["abcdef"]);
    assert_eq!(session.cursor(), Position::new(0, 3));
    assert!(session.is_modified());
}

#[test]
fn test_backspace_at_document_start_is_noop() {
    let mut session = EditorSession::from_lines(["abc"]);

    let result = session.execute(Command::Edit(EditCommand::Backspace));

    assert!(!result.is_success());
    assert_eq!(session.document().lines(), ["abc"]);
    assert!(!session.is_modified());
}

#[test]
fn test_backspace_with_selection_deletes_only_selection() {
    let mut session = EditorSession::from_lines(["abcdef"]);
    select(&mut session, (0, 2), (0, 4));

    edit(&mut session, EditCommand::Backspace);

    assert_eq!(session.document().lines(), ["abef"]);
    assert_eq!(session.cursor(), Position::new(0, 2));
    assert!(!session.selection().is_active());
}

#[test]
fn test_newline_splits_line() {
    let mut session = EditorSession::from_lines(["abcdef"]);
    move_to(&mut session, 0, 3);

    edit(&mut session, EditCommand::Newline);

    assert_eq!(session.document().lines(), ["abc", "def"]);
    assert_eq!(session.cursor(), Position::new(1, 0));
}

#[test]
fn test_delete_forward_joins_next_line_without_moving() {
    let mut session = EditorSession::from_lines(["abc", "def"]);
    move_to(&mut session, 0, 3);

    edit(&mut session, EditCommand::DeleteForward);

    assert_eq!(session.document().lines(), ["abcdef"]);
    assert_eq!(session.cursor(), Position::new(0, 3));
}

#[test]
fn test_delete_forward_removes_char_at_cursor() {
    let mut session = EditorSession::from_lines(["abc"]);
    move_to(&mut session, 0, 1);

    edit(&mut session, EditCommand::DeleteForward);

    assert_eq!(session.document().lines(), ["ac"]);
    assert_eq!(session.cursor(), Position::new(0, 1));
}

#[test]
fn test_delete_forward_with_selection_deactivates() {
    let mut session = EditorSession::from_lines(["abc", "def"]);
    select(&mut session, (1, 1), (0, 1));

    edit(&mut session, EditCommand::DeleteForward);

    assert_eq!(session.document().lines(), ["aef"]);
    assert_eq!(session.cursor(), Position::new(0, 1));
    assert!(!session.selection().is_active());
}

#[test]
fn test_insert_replaces_selection() {
    let mut session = EditorSession::from_lines(["hello world"]);
    select(&mut session, (0, 6), (0, 11));

    insert(&mut session, "rust");

    assert_eq!(session.document().lines(), ["hello rust"]);
    assert_eq!(session.cursor(), Position::new(0, 10));
    assert!(!session.selection().is_active());
}

#[test]
fn test_three_line_selection_deleted() {
    let mut session = EditorSession::from_lines(["aaa", "bbb", "ccc"]);
    select(&mut session, (0, 1), (2, 2));

    edit(&mut session, EditCommand::Backspace);

    assert_eq!(session.document().lines(), ["ac"]);
    assert_eq!(session.cursor(), Position::new(0, 1));
}

#[test]
fn test_delete_then_insert_restores_content() {
    let original = ["first line", "second line", "third line"];
    let mut session = EditorSession::from_lines(original);
    select(&mut session, (2, 5), (0, 6));
    let captured = session.selected_text();
    assert_eq!(captured, "line\nsecond line\nthird");

    edit(&mut session, EditCommand::Backspace);
    assert_eq!(session.document().lines(), ["first  line"]);

    insert(&mut session, &captured);

    assert_eq!(session.document().lines(), original);
    assert_eq!(session.cursor(), Position::new(2, 5));
}

#[test]
fn test_click_without_movement_produces_no_selection() {
    let mut session = EditorSession::from_lines(["abc"]);
    select(&mut session, (0, 2), (0, 2));

    assert!(!session.selection().is_active());
    assert_eq!(session.selected_text(), "");
    assert_eq!(session.cursor(), Position::new(0, 2));
}

#[test]
fn test_drag_returning_to_anchor_finalizes_empty() {
    let mut session = EditorSession::from_lines(["abcdef", "ghi"]);
    session.execute(Command::Selection(SelectionCommand::Begin { row: 0, col: 2 }));
    session.execute(Command::Selection(SelectionCommand::Extend { row: 1, col: 1 }));
    assert_eq!(session.selected_text(), "cdef\ng");
    session.execute(Command::Selection(SelectionCommand::Extend { row: 0, col: 2 }));
    assert!(session.selection().is_active());

    session.execute(Command::Selection(SelectionCommand::Finalize));

    assert!(!session.selection().is_active());
    // Typing afterwards must not delete anything.
    insert(&mut session, "X");
    assert_eq!(session.document().lines(), ["abXcdef", "ghi"]);
}

#[test]
fn test_select_all_then_cut_leaves_single_empty_line() {
    let mut session = EditorSession::from_lines(["one", "two", "three"]);
    session.execute(Command::Cursor(CursorCommand::SelectAll));

    session.execute(Command::Clipboard(ClipboardCommand::Cut));

    assert_eq!(session.document().lines(), [""]);
    assert_eq!(session.clipboard().text(), "one\ntwo\nthree");
    assert_eq!(session.cursor(), Position::new(0, 0));
}

#[test]
fn test_non_ascii_columns_are_characters() {
    let mut session = EditorSession::from_lines(["søß"]);
    move_to(&mut session, 0, 2);

    edit(&mut session, EditCommand::Backspace);
    insert(&mut session, "ø");

    assert_eq!(session.document().lines(), ["søß"]);
    assert_eq!(session.cursor(), Position::new(0, 2));
}

#[test]
fn test_load_splits_on_lone_carriage_return() {
    let mut session = EditorSession::new();

    session.load("a\rb\r", "mac.txt");
    assert_eq!(session.document().lines(), ["a", "b", ""]);

    session.load("a\nb\r", "mixed.txt");
    assert_eq!(session.document().lines(), ["a", "b", ""]);
    assert_eq!(session.contents(), "a\nb\n");
    assert!(
        session
            .document()
            .lines()
            .iter()
            .all(|line| !line.contains(['\r', '\n']))
    );
}
