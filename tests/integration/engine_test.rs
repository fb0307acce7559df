//! Library-level tests: parse, view, select, diff and render working together

use agent_dash::diff::{render_hunks, DiffPalette};
use agent_dash::render::render_line;
use agent_dash::view::PanelLayout;
use agent_dash::{diff_text, extract_hunks, parse, parse_lines, Color, ContentView, DiffOp};

use crate::helpers::load_fixture;

/// 80x12 terminal with a 20-column sidebar: content origin (21, 1), 9 rows.
fn session_view() -> ContentView {
    let mut view = ContentView::new(PanelLayout::new(80, 12, 20));
    view.replace_content(parse_lines(&load_fixture("session.ansi")));
    view
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn session_fixture_parses_into_styled_lines() {
    let lines = parse_lines(&load_fixture("session.ansi"));

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0].plain_text(), "● Read src/lib.rs");
    assert_eq!(lines[4].plain_text(), "    indented    with tabs");

    let bullet = lines[0].cells()[0].style;
    assert!(bullet.bold);
    assert_eq!(bullet.fg, Color::Basic(6));
    assert!(lines[0].cells()[7].style.is_default());

    assert_eq!(lines[5].cells()[0].style.fg, Color::Indexed(208));
    assert_eq!(lines[5].cells()[7].style.fg, Color::Default);
    assert_eq!(lines[5].cells()[9].style.fg, Color::Rgb(255, 0, 0));
}

#[test]
fn rendered_lines_parse_back_to_the_same_cells() {
    for line in parse_lines(&load_fixture("session.ansi")) {
        let rendered = render_line(&line);
        assert_eq!(parse(&rendered), line, "round trip of {:?}", rendered);
    }
}

#[test]
fn no_control_characters_survive_parsing() {
    let lines = parse_lines(&load_fixture("session.ansi"));
    for line in &lines {
        assert!(line.iter().all(|cell| !cell.char.is_control()));
    }
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn drag_selects_a_word() {
    let mut view = session_view();
    view.press(23, 1);
    view.drag(27, 1);
    view.release();

    assert_eq!(view.selected_text(), "Read");
}

#[test]
fn selection_across_rows_joins_with_newline() {
    let mut view = session_view();
    view.press(23, 1);
    view.drag(24, 2);
    view.release();

    assert_eq!(view.selected_text(), "Read src/lib.rs\n  └");
}

#[test]
fn take_selection_returns_text_once() {
    let mut view = session_view();
    view.press(21, 3);
    view.drag(27, 3);
    view.release();

    assert_eq!(view.take_selection().as_deref(), Some("● Bash"));
    assert_eq!(view.take_selection(), None);
}

#[test]
fn highlighted_rows_keep_foreground() {
    let mut view = session_view();
    view.press(21, 1);
    view.drag(23, 1);
    view.release();

    let rows = view.visible_rows(Color::Indexed(238));
    let first = rows[0].cells();
    assert_eq!(first[0].style.bg, Color::Indexed(238));
    assert_eq!(first[0].style.fg, Color::Basic(6));
    assert_eq!(first[2].style.bg, Color::Default);
}

// ============================================================================
// Diff
// ============================================================================

#[test]
fn fixture_diff_is_deterministic() {
    let old = load_fixture("old.rs");
    let new = load_fixture("new.rs");

    let first = diff_text(&old, &new);
    let second = diff_text(&old, &new);
    assert_eq!(first, second);

    let changes: Vec<_> = first.iter().filter(|l| l.op != DiffOp::Equal).collect();
    assert_eq!(changes.len(), 8);
    assert_eq!(changes[0].op, DiffOp::Delete);
    assert_eq!(changes[0].old_line, Some(4));
    assert_eq!(changes[2].op, DiffOp::Insert);
    assert_eq!(changes[2].new_line, Some(4));
}

#[test]
fn rendered_hunks_load_into_view() {
    let old = load_fixture("old.rs");
    let new = load_fixture("new.rs");
    let hunks = extract_hunks(&diff_text(&old, &new), 3, 3);
    let lines = render_hunks(&hunks, &DiffPalette::default());

    let mut view = ContentView::new(PanelLayout::new(80, 12, 20));
    view.replace_content(lines);

    assert_eq!(view.lines()[0].plain_text(), "@@ -1,12 +1,12 @@");
    // follow mode keeps the last line in view
    assert!(view.viewport().is_at_bottom());
    assert_eq!(view.viewport().visible_range().end, view.lines().len());
}
