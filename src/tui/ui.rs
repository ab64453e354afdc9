use crate::tui::app::App;
use crate::tui::router::FILTER_LINKS;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Entry form
            Constraint::Min(0),    // Todo list
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    draw_entry_form(frame, chunks[1], app);
    draw_todo_list(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let header_text = format!("Todos - {}", app.router.route());
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("Todos"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn draw_entry_form(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let (text, style) = if let Some(error) = &app.error_message {
        (
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Style::default().fg(Color::Red),
        )
    } else if app.entry.active {
        // Entry text with a block cursor at the insertion point
        let (before, after) = app.entry.text.split_at(app.entry.cursor);
        (
            Line::from(format!("{before}█{after}")),
            Style::default().fg(Color::White),
        )
    } else {
        (
            Line::from(Span::styled(
                "press 'a' to add a todo",
                Style::default().fg(Color::DarkGray),
            )),
            Style::default().fg(Color::DarkGray),
        )
    };

    let title = if app.entry.active { "New todo (Enter: add, Esc: cancel)" } else { "New todo" };
    let form = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(style);

    frame.render_widget(form, area);
}

fn draw_todo_list(frame: &mut Frame, area: ratatui::layout::Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .visible_todos()
        .iter()
        .map(|todo| {
            let checkbox = if todo.is_complete { "☑" } else { "☐" };
            let display = format!("{} {}", checkbox, todo.name);

            let style = if todo.is_complete {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(Span::styled(display, style)))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Items"))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, (label, route)) in FILTER_LINKS.iter().enumerate() {
        let style = if app.router.route() == *route {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}] {}", i + 1, label), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        format!(
            "| Items: {} | Completed: {} | ?: help | q: quit",
            app.total_items(),
            app.completed_items()
        ),
        Style::default().fg(Color::Yellow),
    ));

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = vec![
        "Todos - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Navigate up/down",
        "  Enter / Space     Toggle todo completion",
        "",
        "EDITING:",
        "  a                 Add a new todo (Enter: add, Esc: cancel)",
        "  d                 Delete current todo",
        "  u                 Undo last change",
        "",
        "FILTER LINKS:",
        "  1                 All      (/)",
        "  2                 Active   (/active)",
        "  3                 Complete (/complete)",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: true });

    let area = centered_rect(70, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: ratatui::layout::Rect) -> ratatui::layout::Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
