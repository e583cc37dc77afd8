//! Terminal UI rendering for the duly TUI.
//!
//! Design philosophy follows the "Pilot's Seat" idiom:
//! - Minimal chrome: no box drawing, no ASCII borders, no decorative labels
//! - Whitespace as structure: position and spacing create hierarchy
//! - Grayscale palette, selection via the REVERSED modifier
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates application state.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::manager::Filter;
use crate::render::{RenderState, TaskView};
use crate::task::{Priority, TaskStatus};
use crate::tea::{InputKind, Mode, Notification, NotificationLevel};

// Color tokens (selection uses REVERSED modifier to adapt to terminal theme)
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_SEPARATOR: Color = Color::White;

// Status color coding for faster visual parsing (uses terminal palette)
const COLOR_STATUS_PENDING: Color = Color::Yellow;
const COLOR_STATUS_IN_PROGRESS: Color = Color::Cyan;
const COLOR_STATUS_COMPLETED: Color = Color::Green;
const COLOR_OVERDUE: Color = Color::Red;

// Priority colors
const COLOR_PRIORITY_HIGH: Color = Color::Red;
const COLOR_PRIORITY_MEDIUM: Color = Color::Yellow;
const COLOR_PRIORITY_LOW: Color = Color::DarkGray;

// Column widths for the task list
const STATUS_WIDTH: usize = 11; // "in-progress"
const PRIORITY_WIDTH: usize = 6;
const DUE_WIDTH: usize = 12; // "2025-01-10 !"
const CREATED_WIDTH: usize = 10;
const SPACING: usize = 2;

// Layout constants
const FORM_HEIGHT: u16 = 6;

/// Main render function - entry point for all UI drawing.
/// Takes an immutable RenderState snapshot.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    render_main_layout(frame, state);

    // Render notification if present
    if let Some(ref notification) = state.notification {
        render_notification(frame, notification, frame.area());
    }
}

/// Render the main layout: stats bar + (form) + task list + status bar.
fn render_main_layout(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();

    if area.height < 3 {
        render_task_list(frame, state, area);
        return;
    }

    let form_open = matches!(state.mode, Mode::Input(kind) if kind != InputKind::Confirm);
    let form_height = if form_open {
        FORM_HEIGHT.min(area.height.saturating_sub(3))
    } else {
        0
    };
    let separator_height = if area.height > form_height + 4 { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(form_height),
        Constraint::Length(separator_height),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_stats_bar(frame, state, chunks[0]);
    if form_height > 0 {
        render_form(frame, state, chunks[1]);
    }
    if separator_height > 0 {
        render_separator(frame, chunks[2]);
    }
    render_task_list(frame, state, chunks[3]);
    render_statusbar(frame, state, chunks[4]);
}

/// Render the summary bar: total and per-status counts plus the active filter.
fn render_stats_bar(frame: &mut Frame, state: &RenderState, area: Rect) {
    let label_style = Style::default().fg(COLOR_TEXT_MUTED);
    let value_style = Style::default();
    let sep_style = Style::default().fg(COLOR_TEXT_MUTED);

    let counts = state.counts;
    let mut spans = vec![
        Span::styled("Total ", label_style),
        Span::styled(counts.total.to_string(), value_style),
        Span::styled(" │ ", sep_style),
        Span::styled("Pending ", label_style),
        Span::styled(
            counts.pending.to_string(),
            Style::default().fg(COLOR_STATUS_PENDING),
        ),
        Span::styled(" │ ", sep_style),
        Span::styled("In Progress ", label_style),
        Span::styled(
            counts.in_progress.to_string(),
            Style::default().fg(COLOR_STATUS_IN_PROGRESS),
        ),
        Span::styled(" │ ", sep_style),
        Span::styled("Completed ", label_style),
        Span::styled(
            counts.completed.to_string(),
            Style::default().fg(COLOR_STATUS_COMPLETED),
        ),
    ];

    // Right-align the filter indicator
    let filter_text = format!(" Filter: {} ", state.filter.label());
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let spacer_width = (area.width as usize)
        .saturating_sub(content_width)
        .saturating_sub(filter_text.chars().count());
    if spacer_width > 0 {
        spans.push(Span::raw(" ".repeat(spacer_width)));
    }
    let filter_style = if state.filter == Filter::All {
        Style::default().fg(COLOR_TEXT_MUTED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    spans.push(Span::styled(filter_text, filter_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the creation form: four fields, the active one editable.
fn render_form(frame: &mut Frame, state: &RenderState, area: Rect) {
    let heading_style = Style::default().add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let hint_style = Style::default().fg(COLOR_TEXT_MUTED);
    let cursor_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::SLOW_BLINK);

    let active = match state.mode {
        Mode::Input(kind) => kind,
        Mode::List => return,
    };

    let mut lines: Vec<Line> = vec![Line::from(Span::styled("New Task", heading_style))];

    let fields = [
        (InputKind::Title, state.form.title.as_str(), ""),
        (InputKind::Description, state.form.description.as_str(), ""),
        (
            InputKind::Priority,
            state.form.priority.as_str(),
            "low / medium / high (default medium)",
        ),
        (InputKind::DueDate, state.form.due_date.as_str(), "YYYY-MM-DD"),
    ];

    for (kind, stored, hint) in fields {
        let is_active = kind == active;
        let label = format!("{:<12}", format!("{}:", kind.label()));
        let mut spans = vec![Span::styled(label, label_style)];

        let value = if is_active {
            state.input_buffer.as_str()
        } else {
            stored
        };
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::White),
        ));

        if is_active {
            spans.push(Span::styled("_", cursor_style));
        }
        if value.is_empty() && !hint.is_empty() {
            spans.push(Span::styled(format!(" {}", hint), hint_style));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the separator - solid divider line between form and list.
fn render_separator(frame: &mut Frame, area: Rect) {
    let solid = "─".repeat(area.width as usize);
    let line = Line::from(Span::styled(solid, Style::default().fg(COLOR_SEPARATOR)));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the task list with scrolloff navigation.
fn render_task_list(frame: &mut Frame, state: &RenderState, area: Rect) {
    if state.tasks.is_empty() {
        let msg = empty_state_message(state.filter);
        let line = Line::from(Span::styled(msg, Style::default().fg(COLOR_TEXT_DIMMED)));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    // Reserve 1 line for header
    let header_height = 1;
    let content_height = area.height.saturating_sub(header_height as u16) as usize;

    // Scrolloff implementation: keep selection centered
    let center = content_height / 2;
    let start = state.selected.saturating_sub(center);
    let end = (start + content_height).min(state.tasks.len());
    let start = end.saturating_sub(content_height);

    let mut lines: Vec<Line> = Vec::with_capacity(content_height + header_height);
    lines.push(render_header_row(area.width));

    lines.extend(
        state
            .tasks
            .iter()
            .enumerate()
            .skip(start)
            .take(content_height)
            .map(|(idx, task)| render_task_row(task, idx == state.selected, area.width)),
    );

    frame.render_widget(Paragraph::new(lines), area);
}

fn empty_state_message(filter: Filter) -> String {
    match filter {
        Filter::All => "No tasks yet. Press 'n' to create your first task.".to_string(),
        other => format!("No {} tasks.", other.label()),
    }
}

/// Render the column header row (bold to distinguish from data rows).
fn render_header_row(width: u16) -> Line<'static> {
    let header_style = Style::default()
        .fg(COLOR_TEXT_DIMMED)
        .add_modifier(Modifier::BOLD);
    let spacing = "  ";

    // Minimum usable width check
    if width < 20 {
        return Line::from(Span::styled("TASK", header_style));
    }

    let total_fixed = STATUS_WIDTH + PRIORITY_WIDTH + DUE_WIDTH + CREATED_WIDTH + SPACING * 4;
    let title_width = (width as usize).saturating_sub(total_fixed);

    let status = format!("{:<width$}", "STATUS", width = STATUS_WIDTH);
    let priority = format!("{:<width$}", "PRI", width = PRIORITY_WIDTH);
    let title = format!("{:<width$}", "TITLE", width = title_width);
    let due = format!("{:<width$}", "DUE", width = DUE_WIDTH);
    let created = format!("{:<width$}", "CREATED", width = CREATED_WIDTH);

    Line::from(vec![
        Span::styled(status, header_style),
        Span::styled(spacing, header_style),
        Span::styled(priority, header_style),
        Span::styled(spacing, header_style),
        Span::styled(title, header_style),
        Span::styled(spacing, header_style),
        Span::styled(due, header_style),
        Span::styled(spacing, header_style),
        Span::styled(created, header_style),
    ])
}

/// Render a single task row with column layout.
/// Columns: STATUS (~11ch) | PRI (~6ch) | TITLE (flex) | DUE (~12ch) | CREATED (~10ch)
fn render_task_row(task: &TaskView, is_selected: bool, width: u16) -> Line<'static> {
    if width < 20 {
        let style = if is_selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        return Line::from(Span::styled(truncate(&task.title, width as usize), style));
    }

    let total_fixed = STATUS_WIDTH + PRIORITY_WIDTH + DUE_WIDTH + CREATED_WIDTH + SPACING * 4;
    let title_width = (width as usize).saturating_sub(total_fixed);

    let status_padded = format!("{:<width$}", task.status.to_string(), width = STATUS_WIDTH);
    let priority_padded = format!(
        "{:<width$}",
        task.priority.to_string(),
        width = PRIORITY_WIDTH
    );

    let title = truncate(&task.title, title_width);
    let title_padded = format!("{:<width$}", title, width = title_width);

    let due_display = match task.due_date {
        Some(due) if task.overdue => format!("{} !", due.format("%Y-%m-%d")),
        Some(due) => due.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    };
    let due_padded = format!("{:<width$}", truncate(&due_display, DUE_WIDTH), width = DUE_WIDTH);

    let created = task.created_at.format("%Y-%m-%d").to_string();
    let created_padded = format!("{:<width$}", created, width = CREATED_WIDTH);

    let status_color = match task.status {
        TaskStatus::Pending => COLOR_STATUS_PENDING,
        TaskStatus::InProgress => COLOR_STATUS_IN_PROGRESS,
        TaskStatus::Completed => COLOR_STATUS_COMPLETED,
    };
    let priority_color = match task.priority {
        Priority::High => COLOR_PRIORITY_HIGH,
        Priority::Medium => COLOR_PRIORITY_MEDIUM,
        Priority::Low => COLOR_PRIORITY_LOW,
    };
    let due_color = if task.overdue {
        COLOR_OVERDUE
    } else {
        COLOR_TEXT_DIMMED
    };

    let spacing = "  ";
    let (status_style, priority_style, primary_style, due_style, secondary_style) = if is_selected {
        let selected = Style::default().add_modifier(Modifier::REVERSED);
        (selected, selected, selected, selected, selected)
    } else {
        (
            Style::default().fg(status_color),
            Style::default().fg(priority_color),
            Style::default(),
            Style::default().fg(due_color),
            Style::default().fg(COLOR_TEXT_DIMMED),
        )
    };

    Line::from(vec![
        Span::styled(status_padded, status_style),
        Span::styled(spacing, primary_style),
        Span::styled(priority_padded, priority_style),
        Span::styled(spacing, primary_style),
        Span::styled(title_padded, primary_style),
        Span::styled(spacing, primary_style),
        Span::styled(due_padded, due_style),
        Span::styled(spacing, primary_style),
        Span::styled(created_padded, secondary_style),
    ])
}

// -----------------------------------------------------------------------------
// Context-sensitive keymap system
// -----------------------------------------------------------------------------

/// Context for determining which keybindings to display.
/// Derived from RenderState - this is the "view model" for the statusbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapContext {
    /// Normal list browsing - shows navigation and task actions
    List { has_selection: bool },
    /// Text input mode (form fields)
    TextInput,
    /// Delete confirmation mode
    DeleteConfirm,
}

impl KeymapContext {
    /// Derive keymap context from render state.
    pub fn from_render_state(state: &RenderState) -> Self {
        match state.mode {
            Mode::Input(InputKind::Confirm) => KeymapContext::DeleteConfirm,
            Mode::Input(_) => KeymapContext::TextInput,
            Mode::List => KeymapContext::List {
                has_selection: !state.tasks.is_empty(),
            },
        }
    }
}

/// A single keybinding entry for display.
struct Keybinding(&'static str, &'static str);

/// A group of related keybindings (separated by │).
struct KeybindingGroup(Vec<Keybinding>);

/// Get keybindings for a given context.
fn keybindings_for_context(ctx: KeymapContext) -> Vec<KeybindingGroup> {
    match ctx {
        KeymapContext::List { has_selection } => {
            let task_actions = if has_selection {
                vec![
                    Keybinding("n", "new"),
                    Keybinding("s", "status"),
                    Keybinding("1/2/3", "set status"),
                    Keybinding("d", "delete"),
                ]
            } else {
                vec![Keybinding("n", "new")]
            };

            vec![
                KeybindingGroup(task_actions),
                KeybindingGroup(vec![Keybinding("f", "filter")]),
                KeybindingGroup(vec![Keybinding("q", "quit")]),
            ]
        }
        KeymapContext::TextInput => vec![KeybindingGroup(vec![
            Keybinding("Enter", "submit"),
            Keybinding("Tab", "next field"),
            Keybinding("Esc", "cancel"),
        ])],
        KeymapContext::DeleteConfirm => vec![KeybindingGroup(vec![
            Keybinding("Enter", "delete"),
            Keybinding("Esc", "cancel"),
        ])],
    }
}

/// Render the status bar - single bottom line with conditional display.
/// Shows either the confirm prompt (when confirming a delete) or the
/// keymap legend.
fn render_statusbar(frame: &mut Frame, state: &RenderState, area: Rect) {
    let line = match state.mode {
        Mode::Input(InputKind::Confirm) => render_confirm_line(state),
        _ => render_keymap_line(state),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Render keybindings legend for the bottom line.
/// When show_keymap is false: shows just "?" (grayed out)
/// When show_keymap is true: shows "? │ <full keymap legend>" with bright "?"
fn render_keymap_line(state: &RenderState) -> Line<'static> {
    let ctx = KeymapContext::from_render_state(state);
    let groups = keybindings_for_context(ctx);

    let key_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let desc_style = Style::default().fg(COLOR_TEXT_MUTED);
    let sep_style = Style::default().fg(COLOR_TEXT_MUTED);

    let mut spans: Vec<Span> = Vec::new();

    // Always show '?' toggle indicator first
    let help_style = if state.show_keymap {
        Style::default() // Bright (default foreground)
    } else {
        Style::default().fg(COLOR_TEXT_MUTED) // Grayed out
    };
    spans.push(Span::styled("?", help_style));

    // Only show the full keymap legend when expanded
    if state.show_keymap {
        for group in groups.iter() {
            if group.0.is_empty() {
                continue;
            }

            spans.push(Span::styled(" │ ", sep_style));

            for (key_idx, keybinding) in group.0.iter().enumerate() {
                if key_idx > 0 {
                    spans.push(Span::styled(" • ", sep_style));
                }
                spans.push(Span::styled(keybinding.0, key_style));
                spans.push(Span::styled(format!(" {}", keybinding.1), desc_style));
            }
        }
    }

    Line::from(spans)
}

/// Render the delete confirmation prompt for the bottom line.
fn render_confirm_line(state: &RenderState) -> Line<'static> {
    let hint_key_style = Style::default().fg(COLOR_TEXT_MUTED);
    let hint_sep_style = Style::default().fg(COLOR_TEXT_MUTED);
    let label_style = Style::default().fg(Color::Reset);

    let title = state
        .tasks
        .get(state.selected)
        .map(|t| truncate(&t.title, 32))
        .unwrap_or_default();

    Line::from(vec![
        Span::styled("Enter ", hint_key_style),
        Span::styled("• ", hint_sep_style),
        Span::styled("Esc ", hint_key_style),
        Span::styled(" ", hint_sep_style),
        Span::styled(format!("Delete '{}'?", title), label_style),
    ])
}

/// Render notification message on the bottom line of the screen.
///
/// - Error: red text with "Error:" prefix and bold styling
/// - Info: green text
fn render_notification(frame: &mut Frame, notification: &Notification, area: Rect) {
    if area.height == 0 {
        return;
    }

    let bottom = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    let (style, text) = match notification.level {
        NotificationLevel::Error => (
            Style::default()
                .fg(COLOR_OVERDUE)
                .add_modifier(Modifier::BOLD),
            format!("Error: {}", notification.message),
        ),
        NotificationLevel::Info => (
            Style::default().fg(COLOR_STATUS_COMPLETED),
            notification.message.clone(),
        ),
    };

    frame.render_widget(Clear, bottom);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))),
        bottom,
    );
}

/// Truncate a string to the given display width, appending an ellipsis
/// when content is cut.
fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max {
        return s.to_string();
    }
    if max == 1 {
        return "…".to_string();
    }
    let mut out: String = chars[..max - 1].iter().collect();
    out.push('…');
    out
}
