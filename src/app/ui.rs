//! Dashboard drawing.
//!
//! Paints the sidebar, the bordered content panel and the footer from an
//! [`AppState`]. Regions come from the state's [`PanelLayout`] so that what
//! is drawn lines up with the mouse mapping.
//!
//! [`PanelLayout`]: crate::view::PanelLayout

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::state::{AppState, StatusKind};
use crate::render::{build_scroll_arrows, calc_scroll_directions, to_tui_line};
use crate::theme::{current_theme, Theme};
use crate::view::SelectionPhase;

/// Key hints shown in the footer.
const FOOTER_KEYS: &[(&str, &str)] = &[
    ("q", "quit"),
    ("j/k", "scroll"),
    ("drag", "select"),
    ("y", "copy"),
    ("esc", "clear"),
    ("r", "reload"),
];

/// Draw the whole dashboard.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let theme = current_theme();
    let area = frame.area();
    let layout = state.view.layout();

    render_sidebar(frame, layout.sidebar().intersection(area), state, &theme);
    render_panel(frame, layout.panel().intersection(area), state, &theme);
    render_footer(frame, layout.footer().intersection(area), &theme);
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    let lines = sidebar_lines(state, theme);
    frame.render_widget(Paragraph::new(lines), area);
}

/// Label/value rows of the sidebar.
fn sidebar_lines(state: &AppState, theme: &Theme) -> Vec<Line<'static>> {
    let viewport = state.view.viewport();
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<7}", label), theme.text_secondary_style()),
            Span::styled(value, theme.text_style()),
        ])
    };

    let source = if state.title.is_empty() {
        "-".to_string()
    } else {
        state.title.clone()
    };
    let (up, down) = calc_scroll_directions(
        viewport.offset(),
        viewport.visible_lines(),
        viewport.total_lines(),
    );
    let scroll = match (viewport.percent(), build_scroll_arrows(up, down)) {
        (Some(pct), Some(arrows)) => format!("{}% {}", pct, arrows),
        (Some(pct), None) => format!("{}%", pct),
        _ => "all".to_string(),
    };

    let mut lines = vec![
        Line::from(Span::styled("agent-dash", theme.accent_bold_style())),
        Line::default(),
        field("source", source),
        field("lines", state.view.lines().len().to_string()),
        field("scroll", scroll),
        field("select", selection_summary(state)),
    ];

    if state.loading {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("loading…", theme.accent_style())));
    }
    if let Some(status) = &state.status {
        let style = match status.kind {
            StatusKind::Info => theme.success_style(),
            StatusKind::Error => theme.error_style(),
        };
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(status.text.clone(), style)));
    }
    lines
}

fn selection_summary(state: &AppState) -> String {
    let selection = state.view.selection();
    match selection.phase() {
        SelectionPhase::Inactive => "none".to_string(),
        SelectionPhase::Dragging => "dragging".to_string(),
        SelectionPhase::Idle => {
            let text = state.view.selected_text();
            if text.is_empty() {
                return "none".to_string();
            }
            let count = text.lines().count().max(1);
            format!("{}L {}c", count, text.chars().count())
        }
    }
}

fn render_panel(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(
            format!(" {} ", state.title),
            theme.accent_style(),
        ));

    let rows: Vec<Line<'static>> = state
        .view
        .visible_rows(state.selection_bg)
        .iter()
        .map(to_tui_line)
        .collect();
    frame.render_widget(Paragraph::new(rows).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    let footer = Paragraph::new(Line::from(build_footer_spans(FOOTER_KEYS, theme)))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}
