//! View layer: UI rendering
//!
//! Reads the model, draws the frame. Never mutates state.

mod theme;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::model::{App, Mode};
use theme::Styles;

/// Render one frame.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(5),    // body
            Constraint::Length(1), // status
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled("User Console", Styles::title())),
        chunks[0],
    );

    match app.mode {
        Mode::Listing => render_list(app, frame, chunks[1]),
        Mode::Adding => render_add_form(app, frame, chunks[1]),
        Mode::ConfirmingDelete => render_confirm(app, frame, chunks[1]),
    }

    render_status(app, frame, chunks[2]);
    frame.render_widget(
        Paragraph::new(Span::styled(help_text(app.mode), Styles::muted())),
        chunks[3],
    );
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .users
        .users
        .iter()
        .map(|user| {
            let name = if user.name.trim().is_empty() {
                "Unnamed user"
            } else {
                user.name.as_str()
            };
            let email = if user.email.trim().is_empty() {
                "No email"
            } else {
                user.email.as_str()
            };
            let role = if user.role.trim().is_empty() {
                "User"
            } else {
                user.role.as_str()
            };

            ListItem::new(Line::from(vec![
                Span::raw(name.to_string()),
                Span::styled(format!("  {email} • {role}"), Styles::muted()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border())
                .title("Users"),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.users.selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_add_form(app: &App, frame: &mut Frame, area: Rect) {
    let labels = ["Name", "Email", "Role"];
    let mut lines = vec![
        Line::from(Span::styled("Create a new user", Styles::section_title())),
        Line::default(),
    ];

    for (i, label) in labels.iter().enumerate() {
        let focused = app.form.focus == i;
        let label_style = if focused {
            Styles::label_focused()
        } else {
            Styles::label()
        };
        let marker = if focused { "▌" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!("{label:>6} > "), label_style),
            Span::raw(app.form.field(i).to_string()),
            Span::styled(marker, Styles::label_focused()),
        ]));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "Enter to submit, Esc to cancel",
        Styles::muted(),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        ),
        area,
    );
}

fn render_confirm(app: &App, frame: &mut Frame, area: Rect) {
    let name = app
        .pending_delete
        .as_ref()
        .map_or("user", |u| u.display_name());

    let lines = vec![
        Line::from(Span::styled("Confirm deletion", Styles::section_title())),
        Line::default(),
        Line::from(format!("Delete {name}? This action cannot be undone.")),
        Line::default(),
        Line::from(Span::styled(
            "Press y to delete or n to cancel",
            Styles::muted(),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        ),
        area,
    );
}

fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let line = if app.busy {
        Span::styled("⋯ Working…", Styles::muted())
    } else if let Some(ref err) = app.error {
        Span::styled(err.to_string(), Styles::error())
    } else if let Some(ref status) = app.status {
        Span::styled(status.clone(), Styles::status())
    } else {
        Span::styled("Press q to quit", Styles::muted())
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn help_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Listing => "↑/↓ navigate • a add • d delete • r refresh • q quit",
        Mode::Adding => "tab to move • enter submit • esc cancel",
        Mode::ConfirmingDelete => "y confirm • n cancel",
    }
}
