//! Ticket detail view: header card, AI analysis cards, comment thread,
//! and the comment input.

use crate::state::AppState;
use desk_proto::Ticket;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub const AI_SUMMARY_PENDING: &str = "AI is still analyzing... refresh in a few seconds.";
pub const AI_REPLY_PENDING: &str = "AI is still generating a reply...";

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if state.detail.loading {
        f.render_widget(
            Paragraph::new(Span::styled(
                "Loading ticket...",
                Style::default().fg(Color::Yellow),
            ))
            .block(Block::default().borders(Borders::ALL)),
            area,
        );
        return;
    }

    let Some(ticket) = &state.detail.ticket else {
        let message = state
            .detail
            .error
            .as_deref()
            .unwrap_or("Ticket not found.");
        f.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)))
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // ticket card
            Constraint::Length(4), // ai summary
            Constraint::Length(4), // ai reply
            Constraint::Min(4),    // comments
            Constraint::Length(3), // comment input
        ])
        .split(area);

    render_ticket_card(f, state, ticket, rows[0]);
    render_ai_card(
        f,
        rows[1],
        " AI summary ",
        ticket.has_ai_summary(),
        &ticket.ai_summary,
        AI_SUMMARY_PENDING,
    );
    render_ai_card(
        f,
        rows[2],
        " AI suggested reply ",
        ticket.has_ai_reply(),
        &ticket.ai_suggested_reply,
        AI_REPLY_PENDING,
    );
    render_comments(f, state, rows[3]);
    render_comment_input(f, state, rows[4]);
}

fn render_ticket_card(f: &mut Frame, state: &AppState, ticket: &Ticket, area: Rect) {
    let block = Block::default()
        .title(format!(" Ticket #{} ", ticket.id))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            ticket.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{}", ticket.status),
                Style::default().fg(Color::Green),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} · {} · {}", ticket.category, ticket.priority, ticket.sentiment),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("  "),
            Span::styled(
                format!("opened {}", ticket.created_at.format("%Y-%m-%d %H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::raw(ticket.description.clone())),
    ];
    if let Some(error) = &state.detail.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else if state.detail.action_in_flight {
        lines.push(Line::from(Span::styled(
            "Updating...",
            Style::default().fg(Color::Yellow),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_ai_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    ready: bool,
    body: &str,
    placeholder: &str,
) {
    let content = if ready {
        Span::raw(body.to_string())
    } else {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    };
    f.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(title.to_string()).borders(Borders::ALL)),
        area,
    );
}

fn render_comments(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .title(format!(" Comments ({}) ", state.detail.comments.len()))
        .borders(Borders::ALL);

    if state.detail.comments.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled(
                "No comments yet.",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = state
        .detail
        .comments
        .iter()
        .map(|comment| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("@{}", comment.author.username),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", comment.created_at.format("%Y-%m-%d %H:%M")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::raw(comment.message.clone())),
            ])
        })
        .collect();
    f.render_widget(List::new(items).block(block), area);
}

fn render_comment_input(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.detail.comment_focused;
    let style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if state.detail.comment_in_flight {
        " Add comment (sending...) "
    } else {
        " Add comment "
    };
    let mut spans = vec![Span::raw(state.detail.comment_input.clone())];
    if focused {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(style),
        ),
        area,
    );
}
