use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use gibbet::letters::{CellMap, LetterBoard};
use gibbet::runtime::{FixedTicker, GameEvent, Runner, TestEventSource};
use gibbet::session::{Outcome, Session};

fn key_event(c: char) -> GameEvent {
    GameEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn click_event(col: u16, row: u16) -> GameEvent {
    GameEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: col,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// Headless round using the internal runtime without a TTY: keyboard
// guesses funnel through the board exactly like clicks do.
#[test]
fn headless_round_completes_via_keys() {
    let mut session = Session::new("hi");
    let mut board = LetterBoard::new(1000.0);

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    tx.send(key_event('h')).unwrap();
    tx.send(key_event('i')).unwrap();

    for _ in 0..100u32 {
        match runner.step() {
            GameEvent::Tick => session.on_tick(),
            GameEvent::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    if let Some(letter) = board.press(c) {
                        session.guess(letter);
                    }
                }
            }
            _ => {}
        }
        if session.has_finished() {
            break;
        }
    }

    assert_eq!(session.outcome(), Outcome::Won);
    assert_eq!(session.misses(), 0);
    assert!(board.is_spent('H'));
    assert!(board.is_spent('I'));
}

// Same flow, but driven by pointer-down events resolved through the
// cell-to-canvas projection against the circular hit-targets.
#[test]
fn headless_round_completes_via_clicks() {
    let mut session = Session::new("hi");
    let mut board = LetterBoard::new(1000.0);
    let area = Rect::new(0, 0, 100, 24);
    let map = CellMap::new((1000.0, 600.0), area);

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    for letter in ['H', 'I'] {
        let key = *board.keys().find(|k| k.letter == letter).unwrap();
        let (col, row) = map.canvas_to_cell(key.x, key.y);
        tx.send(click_event(col, row)).unwrap();
    }
    // a stray click in the dead zone between keys
    tx.send(click_event(0, 0)).unwrap();

    for _ in 0..100u32 {
        match runner.step() {
            GameEvent::Tick => session.on_tick(),
            GameEvent::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let (x, y) = map.cell_to_canvas(mouse.column, mouse.row);
                    if let Some(letter) = board.resolve_click(x, y) {
                        session.guess(letter);
                    }
                }
            }
            _ => {}
        }
        if session.has_finished() {
            break;
        }
    }

    assert_eq!(session.outcome(), Outcome::Won);
    assert_eq!(board.visible_keys().count(), 24);
}

#[test]
fn headless_timed_round_finishes_by_timeout() {
    // Timed round: tick until the budget drains
    let mut session = Session::with_time_limit("hello", 0.2);

    let (_tx, rx) = std::sync::mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(10));
    let runner = Runner::new(es, ticker);

    for _ in 0..50u32 {
        if let GameEvent::Tick = runner.step() {
            session.on_tick();
        }
        if session.has_finished() {
            break;
        }
    }

    assert_eq!(
        session.outcome(),
        Outcome::TimedOut,
        "timed round should finish by timeout"
    );
    assert_eq!(session.guess('h'), gibbet::session::Guess::Rejected);
}
