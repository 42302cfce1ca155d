//! Ticket list view: search bar, filter summary, list, and the inline
//! create form.

use crate::state::{AppState, FormField, TicketsFocus};
use desk_proto::{Sentiment, Ticket};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let columns = if state.focus == TicketsFocus::Form {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(44)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0)])
            .split(area)
    };

    render_list_pane(f, state, columns[0]);
    if state.focus == TicketsFocus::Form {
        render_form(f, state, columns[1]);
    }
}

fn render_list_pane(f: &mut Frame, state: &AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search
            Constraint::Length(1), // filter summary / count
            Constraint::Min(0),    // list
        ])
        .split(area);

    let search_style = if state.focus == TicketsFocus::Search {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut search_spans = vec![Span::raw(state.criteria.search.clone())];
    if state.focus == TicketsFocus::Search {
        search_spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
    }
    f.render_widget(
        Paragraph::new(Line::from(search_spans)).block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .style(search_style),
        ),
        rows[0],
    );

    let visible = state.visible_tickets();
    let summary = if let Some(error) = &state.list_error {
        Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ))
    } else if state.tickets_loading {
        Line::from(Span::styled(
            "Loading tickets...",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!("Showing {} of {} tickets", visible.len(), state.tickets.len()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  "),
            Span::styled(
                format!("status: {}", state.criteria.status.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("  "),
            Span::styled(
                format!("sort: {}", state.criteria.sort.label()),
                Style::default().fg(Color::Cyan),
            ),
        ])
    };
    f.render_widget(Paragraph::new(summary), rows[1]);

    if !state.tickets_loading && visible.is_empty() && state.list_error.is_none() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No tickets match your filters.",
                Style::default().fg(Color::DarkGray),
            ))
            .block(Block::default().borders(Borders::ALL)),
            rows[2],
        );
        return;
    }

    let items: Vec<ListItem> = visible.iter().map(ticket_row).collect();
    let mut list_state = ListState::default();
    if !visible.is_empty() {
        list_state.select(Some(state.selected.min(visible.len() - 1)));
    }
    let list = List::new(items)
        .block(Block::default().title(" Tickets ").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, rows[2], &mut list_state);
}

fn ticket_row(ticket: &Ticket) -> ListItem<'static> {
    let mut spans = vec![
        Span::styled(
            format!("#{:<4}", ticket.id),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("[{}] ", ticket.status),
            Style::default().fg(status_color(ticket)),
        ),
        Span::raw(ticket.title.clone()),
        Span::raw("  "),
        Span::styled(
            format!("{} · {}", ticket.category, ticket.priority),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if ticket.sentiment != Sentiment::Unknown {
        spans.push(Span::styled(
            format!(" · {} ({:.2})", ticket.sentiment, ticket.ai_confidence),
            Style::default().fg(Color::Magenta),
        ));
    }
    ListItem::new(Line::from(spans))
}

fn status_color(ticket: &Ticket) -> Color {
    match ticket.status {
        desk_proto::TicketStatus::Open => Color::Green,
        desk_proto::TicketStatus::InProgress => Color::Yellow,
        desk_proto::TicketStatus::Resolved => Color::Blue,
    }
}

fn render_form(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default().title(" New ticket ").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // error
            Constraint::Length(3), // title
            Constraint::Min(5),    // description
            Constraint::Length(1), // hint
        ])
        .split(inner);

    if let Some(error) = &state.new_ticket.error {
        f.render_widget(
            Paragraph::new(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            )),
            rows[0],
        );
    }

    form_field(
        f,
        rows[1],
        "Title",
        &state.new_ticket.title,
        state.new_ticket.field == FormField::Title,
    );
    form_field(
        f,
        rows[2],
        "Description",
        &state.new_ticket.description,
        state.new_ticket.field == FormField::Description,
    );

    let hint = if state.new_ticket.in_flight {
        Span::styled("Creating...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            "Enter: create · Tab: next field · Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )
    };
    f.render_widget(Paragraph::new(hint), rows[3]);
}

fn form_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![Span::raw(value.to_string())];
    if focused {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(label.to_string())
                .borders(Borders::ALL)
                .style(style),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ERR_FILL_FIELDS;
    use chrono::{TimeZone, Utc};
    use desk_core::{Session, StatusFilter};
    use desk_proto::{Me, Priority, TicketStatus};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn sample_state() -> AppState {
        let me = Me {
            id: 1,
            username: "sam".to_string(),
            is_staff: false,
        };
        let (mut state, _) = AppState::new(Session::authenticated(me));
        state.tickets_loading = false;
        state.tickets = vec![
            Ticket {
                id: 1,
                title: "Payment failed".to_string(),
                description: "Card declined".to_string(),
                status: TicketStatus::Open,
                category: "BILLING".to_string(),
                priority: Priority::High,
                sentiment: Sentiment::Angry,
                ai_summary: String::new(),
                ai_suggested_reply: String::new(),
                ai_confidence: 0.92,
                created_by: None,
                assigned_to: None,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                updated_at: None,
                resolved_at: None,
            },
            Ticket {
                id: 2,
                title: "Login broken".to_string(),
                description: "Cannot sign in".to_string(),
                status: TicketStatus::Resolved,
                category: "LOGIN".to_string(),
                priority: Priority::Medium,
                sentiment: Sentiment::Unknown,
                ai_summary: String::new(),
                ai_suggested_reply: String::new(),
                ai_confidence: 0.0,
                created_by: None,
                assigned_to: None,
                created_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
                updated_at: None,
                resolved_at: None,
            },
        ];
        state
    }

    #[test]
    fn shows_visible_over_total_count() {
        let mut state = sample_state();
        state.criteria.status = StatusFilter::Only(TicketStatus::Open);
        let text = render_to_string(&state);
        assert!(text.contains("Showing 1 of 2 tickets"), "got: {text}");
        assert!(text.contains("Payment failed"));
        assert!(!text.contains("Login broken"));
    }

    #[test]
    fn sentiment_badge_includes_confidence() {
        let state = sample_state();
        let text = render_to_string(&state);
        assert!(text.contains("ANGRY (0.92)"), "got: {text}");
    }

    #[test]
    fn empty_projection_shows_placeholder() {
        let mut state = sample_state();
        state.criteria.search = "no such ticket".to_string();
        let text = render_to_string(&state);
        assert!(text.contains("No tickets match your filters."), "got: {text}");
    }

    #[test]
    fn form_pane_shows_validation_error() {
        let mut state = sample_state();
        state.focus = TicketsFocus::Form;
        state.new_ticket.error = Some(ERR_FILL_FIELDS.to_string());
        let text = render_to_string(&state);
        assert!(text.contains("New ticket"));
        assert!(text.contains(ERR_FILL_FIELDS), "got: {text}");
    }
}
