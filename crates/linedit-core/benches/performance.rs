use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use linedit_core::{
    ClipboardCommand, Command, CursorCommand, EditCommand, EditorSession, Motion, ViewCommand,
};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the quick brown fox jumps over the lazy dog (linedit benchmark line)\n"
        ));
    }
    out
}

fn loaded_session(line_count: usize) -> EditorSession {
    let mut session = EditorSession::new();
    session.load(&large_text(line_count), "bench.txt");
    session.execute(Command::View(ViewCommand::SetVisibleArea {
        rows: 40,
        cols: 120,
    }));
    session
}

fn bench_large_file_open(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("large_file_open/50k_lines", |b| {
        b.iter(|| {
            let mut session = EditorSession::new();
            session.load(black_box(&text), "bench.txt");
            black_box(session.document().line_count());
        })
    });
}

fn bench_typing_in_middle(c: &mut Criterion) {
    c.bench_function("typing_middle/100_inserts", |b| {
        b.iter_batched(
            || {
                let mut session = loaded_session(50_000);
                session.execute(Command::Cursor(CursorCommand::MoveTo {
                    row: 25_000,
                    col: 10,
                }));
                session
            },
            |mut session| {
                for _ in 0..100 {
                    session.execute(Command::Edit(EditCommand::InsertText {
                        text: "x".to_string(),
                    }));
                }
                black_box(session.cursor());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_multi_line_paste(c: &mut Criterion) {
    let payload = large_text(1_000);
    c.bench_function("paste/1k_lines_into_50k", |b| {
        b.iter_batched(
            || {
                let mut session = loaded_session(50_000);
                session.clipboard_mut().set_text(payload.as_str());
                session.execute(Command::Cursor(CursorCommand::MoveTo {
                    row: 25_000,
                    col: 10,
                }));
                session
            },
            |mut session| {
                session.execute(Command::Clipboard(ClipboardCommand::Paste));
                black_box(session.document().line_count());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_page_through_document(c: &mut Criterion) {
    let mut session = loaded_session(50_000);
    c.bench_function("navigation/page_down_100", |b| {
        b.iter(|| {
            session.execute(Command::Cursor(CursorCommand::MoveTo { row: 0, col: 0 }));
            for _ in 0..100 {
                session.execute(Command::Cursor(CursorCommand::Move {
                    motion: Motion::PageDown,
                    extend: false,
                }));
            }
            black_box(session.viewport().scroll_row);
        })
    });
}

criterion_group!(
    benches,
    bench_large_file_open,
    bench_typing_in_middle,
    bench_multi_line_paste,
    bench_page_through_document
);
criterion_main!(benches);
