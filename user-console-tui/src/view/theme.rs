//! Styles for the console

use ratatui::style::{Color, Modifier, Style};

pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(Color::Rgb(0, 122, 204))
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_title() -> Style {
        Style::default()
            .fg(Color::Rgb(0, 122, 204))
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default()
            .fg(Color::Rgb(128, 128, 128))
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_focused() -> Style {
        Style::default()
            .fg(Color::Rgb(0, 122, 204))
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::Rgb(38, 79, 120))
            .fg(Color::White)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::Rgb(128, 128, 128))
    }

    pub fn status() -> Style {
        Style::default().fg(Color::Rgb(78, 201, 176))
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Color::Rgb(244, 135, 113))
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::Rgb(62, 62, 62))
    }
}
