//! Parser tests.
//!
//! Organized by category:
//! - plain text and control characters
//! - SGR attributes and colors
//! - malformed and non-SGR sequences
//! - multi-line and chunked input
//! - round-trips through the renderer

use super::*;
use crate::render::render_line;

fn style_at(line: &StyledLine, col: usize) -> CellStyle {
    line.cells()[col].style
}

// ============================================================================
// Plain text
// ============================================================================

#[test]
fn plain_text_has_default_style() {
    let line = parse("hello");
    assert_eq!(line.plain_text(), "hello");
    assert!(line.iter().all(|c| c.style.is_default()));
}

#[test]
fn empty_input_is_empty_line() {
    assert!(parse("").is_empty());
}

#[test]
fn control_characters_never_become_cells() {
    let line = parse("a\rb\x07c\x08d\n");
    assert_eq!(line.plain_text(), "abcd");
}

#[test]
fn tab_expands_to_next_stop() {
    let line = parse("ab\tc");
    assert_eq!(line.plain_text(), "ab  c");

    let line = parse_lines_with_tab_width("\tx", 8);
    assert_eq!(line[0].plain_text(), "        x");
}

// ============================================================================
// SGR attributes and colors
// ============================================================================

#[test]
fn bold_and_italic_toggle() {
    let line = parse("\x1b[1ma\x1b[3mb\x1b[22mc\x1b[23md");
    assert!(style_at(&line, 0).bold);
    assert!(!style_at(&line, 0).italic);
    assert!(style_at(&line, 1).bold && style_at(&line, 1).italic);
    assert!(!style_at(&line, 2).bold && style_at(&line, 2).italic);
    assert!(style_at(&line, 3).is_default());
}

#[test]
fn reset_clears_everything() {
    let line = parse("\x1b[1;31;42ma\x1b[0mb");
    assert!(!style_at(&line, 0).is_default());
    assert!(style_at(&line, 1).is_default());
}

#[test]
fn empty_params_mean_reset() {
    let line = parse("\x1b[31ma\x1b[mb\x1b[32;;1mc");
    assert_eq!(style_at(&line, 0).fg, Color::Basic(1));
    assert!(style_at(&line, 1).is_default());
    // The empty middle parameter is a 0 and resets the green before bold applies
    assert_eq!(style_at(&line, 2).fg, Color::Default);
    assert!(style_at(&line, 2).bold);
}

#[test]
fn basic_and_bright_colors() {
    let test_cases = [
        ("\x1b[30m", Color::Basic(0), Color::Default),
        ("\x1b[37m", Color::Basic(7), Color::Default),
        ("\x1b[90m", Color::Basic(8), Color::Default),
        ("\x1b[97m", Color::Basic(15), Color::Default),
        ("\x1b[40m", Color::Default, Color::Basic(0)),
        ("\x1b[47m", Color::Default, Color::Basic(7)),
        ("\x1b[100m", Color::Default, Color::Basic(8)),
        ("\x1b[107m", Color::Default, Color::Basic(15)),
    ];

    for (seq, fg, bg) in test_cases {
        let line = parse(&format!("{}x", seq));
        assert_eq!(style_at(&line, 0).fg, fg, "fg failed for {:?}", seq);
        assert_eq!(style_at(&line, 0).bg, bg, "bg failed for {:?}", seq);
    }
}

#[test]
fn default_fg_and_bg_codes() {
    let line = parse("\x1b[31;41ma\x1b[39mb\x1b[49mc");
    assert_eq!(style_at(&line, 1).fg, Color::Default);
    assert_eq!(style_at(&line, 1).bg, Color::Basic(1));
    assert!(style_at(&line, 2).is_default());
}

#[test]
fn palette_256_colors() {
    let line = parse("\x1b[38;5;196ma\x1b[48;5;236mb");
    assert_eq!(style_at(&line, 0).fg, Color::Indexed(196));
    assert_eq!(style_at(&line, 1).fg, Color::Indexed(196));
    assert_eq!(style_at(&line, 1).bg, Color::Indexed(236));
}

#[test]
fn truecolor() {
    let line = parse("\x1b[38;2;255;128;64;48;2;0;0;255mx");
    assert_eq!(style_at(&line, 0).fg, Color::Rgb(255, 128, 64));
    assert_eq!(style_at(&line, 0).bg, Color::Rgb(0, 0, 255));
}

#[test]
fn extended_color_followed_by_more_codes() {
    let line = parse("\x1b[38;5;10;1mx");
    assert_eq!(style_at(&line, 0).fg, Color::Indexed(10));
    assert!(style_at(&line, 0).bold);
}

#[test]
fn colon_form_extended_colors() {
    let line = parse("\x1b[38:5:33ma\x1b[48:2::1:2:3mb\x1b[38:2:4:5:6mc");
    assert_eq!(style_at(&line, 0).fg, Color::Indexed(33));
    assert_eq!(style_at(&line, 1).bg, Color::Rgb(1, 2, 3));
    assert_eq!(style_at(&line, 2).fg, Color::Rgb(4, 5, 6));
}

#[test]
fn unknown_codes_are_ignored() {
    let line = parse("\x1b[1;4;5;31mx");
    let style = style_at(&line, 0);
    assert!(style.bold);
    assert_eq!(style.fg, Color::Basic(1));
}

// ============================================================================
// Malformed and non-SGR sequences
// ============================================================================

#[test]
fn non_sgr_csi_is_consumed() {
    let line = parse("a\x1b[2Kb\x1b[10;5Hc\x1b[?25ld");
    assert_eq!(line.plain_text(), "abcd");
    assert!(line.iter().all(|c| c.style.is_default()));
}

#[test]
fn private_sgr_is_not_applied() {
    let line = parse("\x1b[>4;1mx");
    assert_eq!(line.plain_text(), "x");
    assert!(style_at(&line, 0).is_default());
}

#[test]
fn unterminated_sequence_emits_nothing() {
    let line = parse("ok\x1b[31;1");
    assert_eq!(line.plain_text(), "ok");

    let line = parse("\x1b[");
    assert!(line.is_empty());
}

#[test]
fn osc_title_is_consumed() {
    let line = parse("\x1b]0;window title\x07visible");
    assert_eq!(line.plain_text(), "visible");
}

#[test]
fn truncated_extended_color_is_ignored() {
    let line = parse("\x1b[38;5mx\x1b[38;2;1;2my");
    assert_eq!(line.plain_text(), "xy");
    assert_eq!(style_at(&line, 0).fg, Color::Default);
    assert_eq!(style_at(&line, 1).fg, Color::Default);
}

#[test]
fn long_sgr_list_applies_all_codes() {
    // 32 parameters, the most vte keeps
    let line = parse(&format!("\x1b[{}1;31mx", "22;".repeat(30)));
    let style = style_at(&line, 0);
    assert!(style.bold);
    assert_eq!(style.fg, Color::Basic(1));
}

#[test]
fn overlong_sgr_list_keeps_leading_codes() {
    let line = parse(&format!("\x1b[{}31mx", "1;".repeat(33)));
    assert_eq!(line.plain_text(), "x");
    assert!(style_at(&line, 0).bold);

    // codes past the 32nd parameter are dropped
    let line = parse(&format!("\x1b[{}1;3;31mx", "0;".repeat(30)));
    let style = style_at(&line, 0);
    assert!(style.bold);
    assert!(style.italic);
    assert_eq!(style.fg, Color::Default);
}

#[test]
fn any_final_byte_ends_a_csi_sequence() {
    assert_eq!(parse("\x1b[3~abc").plain_text(), "abc");
    assert_eq!(parse("\x1b[2@x\x1b[1{y").plain_text(), "xy");
}

// ============================================================================
// Multi-line and chunked input
// ============================================================================

#[test]
fn style_carries_across_lines() {
    let lines = parse_lines("\x1b[32mfirst\nsecond\x1b[0m\nthird");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].cells()[0].style.fg, Color::Basic(2));
    assert!(lines[2].cells()[0].style.is_default());
}

#[test]
fn trailing_newline_adds_no_line() {
    assert_eq!(parse_lines("a\nb\n").len(), 2);
    assert_eq!(parse_lines("").len(), 1);
    assert_eq!(parse_lines("a\n\nb").len(), 3);
}

#[test]
fn sequence_split_across_chunks() {
    let mut parser = AnsiParser::new();
    parser.feed("x\x1b[3");
    parser.feed("1my");
    assert_eq!(parser.current_style().fg, Color::Basic(1));
    let lines = parser.finish();
    assert_eq!(lines[0].plain_text(), "xy");
    assert_eq!(lines[0].cells()[1].style.fg, Color::Basic(1));
}

#[test]
fn wide_characters_are_single_cells() {
    let line = parse("\x1b[1m你好\x1b[0m!");
    assert_eq!(line.len(), 3);
    assert_eq!(line.display_width(), 5);
}

// ============================================================================
// Round-trips
// ============================================================================

#[test]
fn parse_render_parse_is_stable() {
    let inputs = [
        "plain",
        "\x1b[31mred\x1b[0m plain",
        "\x1b[1;3;38;5;200;48;2;10;20;30mall\x1b[22m not bold\x1b[39;49m defaults",
        "\x1b[91mbright\x1b[104mbg\x1b[0m",
        "\x1b[1ma\x1b[32mb\x1b[0m\x1b[3mc",
        "\x1b[38:2::9:8:7mcolon\x1b[m",
    ];

    for input in inputs {
        let first = parse(input);
        let rendered = render_line(&first);
        let second = parse(&rendered);
        assert_eq!(first, second, "round-trip failed for {:?}", input);
    }
}

#[test]
fn render_is_minimal_for_redundant_input() {
    let line = parse("\x1b[31m\x1b[31ma\x1b[31mb");
    assert_eq!(render_line(&line), "\x1b[31mab\x1b[0m");
}
