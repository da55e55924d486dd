use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::gallows;
use crate::letters::CellMap;
use crate::session::Outcome;
use crate::{App, AppState, Round};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state {
            AppState::ModeSelect => render_menu(self, area, buf),
            AppState::Playing => {
                if let Some(round) = &self.round {
                    render_game(self, round, area, buf);
                }
            }
            AppState::Outcome => {
                if let Some(round) = &self.round {
                    render_outcome(round, area, buf);
                }
            }
        }
    }
}

/// Project a canvas-space rectangle onto terminal cells.
fn project(map: &CellMap, x: f64, y: f64, w: f64, h: f64) -> Rect {
    let (left, top) = map.canvas_to_cell(x, y);
    let (right, bottom) = map.canvas_to_cell(x + w, y + h);
    Rect::new(
        left,
        top,
        right.saturating_sub(left).max(1),
        bottom.saturating_sub(top).max(1),
    )
}

fn centered_line(area: Rect, row: u16) -> Rect {
    Rect::new(area.x, row.min(area.bottom().saturating_sub(1)), area.width, 1)
}

fn render_menu(app: &App, area: Rect, buf: &mut Buffer) {
    let map = CellMap::new(app.canvas, area);
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let (_, header_row) = map.canvas_to_cell(0.0, 75.0);
    Paragraph::new("CHOOSE GAME MODE")
        .style(bold_style)
        .alignment(Alignment::Center)
        .render(centered_line(area, header_row), buf);

    let buttons = [
        (app.menu.basic, "BASIC", Color::Blue),
        (app.menu.advanced, "ADVANCED", Color::Red),
    ];
    for (button, label, color) in buttons {
        let rect = project(&map, button.x, button.y, button.width, button.height)
            .intersection(area);
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(color));
        Paragraph::new(format!("\n{}", label))
            .block(block)
            .style(bold_style.fg(color))
            .alignment(Alignment::Center)
            .render(rect, buf);
    }

    if let Some(msg) = &app.menu_error {
        Paragraph::new(msg.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .render(centered_line(area, area.bottom().saturating_sub(3)), buf);
    }

    let hint = "click a mode · (b)asic · (a)dvanced · (esc) quit";
    Paragraph::new(hint)
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center)
        .render(centered_line(area, area.bottom().saturating_sub(1)), buf);
}

fn render_game(app: &App, round: &Round, area: Rect, buf: &mut Buffer) {
    let map = CellMap::new(app.canvas, area);
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);

    let (_, title_row) = map.canvas_to_cell(0.0, 20.0);
    Paragraph::new("HANGMAN GAME")
        .style(bold_style)
        .alignment(Alignment::Center)
        .render(centered_line(area, title_row), buf);

    // masked word, centered
    let (_, word_row) = map.canvas_to_cell(0.0, 200.0);
    Paragraph::new(round.session.masked_word())
        .style(bold_style)
        .alignment(Alignment::Center)
        .render(centered_line(area, word_row), buf);

    // gallows frame for the current miss count
    let art = gallows::stage(round.mode, round.session.misses());
    let art_width = art.lines().map(|l| l.width()).max().unwrap_or(0) as u16;
    let art_height = art.lines().count() as u16;
    let (art_col, art_row) = map.canvas_to_cell(40.0, 100.0);
    let art_rect = Rect::new(art_col, art_row, art_width, art_height).intersection(area);
    Paragraph::new(art).render(art_rect, buf);

    // letter keys still in play
    for key in round.board.visible_keys() {
        let (col, row) = map.canvas_to_cell(key.x, key.y);
        if col < area.right() && row < area.bottom() {
            buf.set_string(col, row, key.letter.to_string(), bold_style);
        }
    }

    // countdown in the corner
    let (timer_col, timer_row) = map.canvas_to_cell(app.canvas.0 - 80.0, app.canvas.1 - 50.0);
    if timer_col < area.right() && timer_row < area.bottom() {
        buf.set_string(
            timer_col,
            timer_row,
            format!("{}s", round.session.remaining_display()),
            dim_bold_style,
        );
    }
}

fn render_outcome(round: &Round, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let (message, color) = match round.session.outcome() {
        Outcome::Won => ("You WON!", Color::Green),
        Outcome::Lost => ("You LOST!", Color::Red),
        Outcome::TimedOut => ("Time's up! You LOST!", Color::Red),
        Outcome::InProgress => ("", Color::Reset),
    };

    let middle = area.y + area.height / 2;
    Paragraph::new(message)
        .style(bold_style.fg(color))
        .alignment(Alignment::Center)
        .render(centered_line(area, middle.saturating_sub(1)), buf);

    if round.session.outcome() != Outcome::Won {
        Paragraph::new(format!("The word was: {}", round.session.word()))
            .style(bold_style)
            .alignment(Alignment::Center)
            .render(centered_line(area, middle + 1), buf);
    }

    let hint = "(r)eplay · (n)ew mode · (esc) quit";
    Paragraph::new(hint)
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center)
        .render(centered_line(area, middle + 3), buf);
}
