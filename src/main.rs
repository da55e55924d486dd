pub mod config;
pub mod gallows;
pub mod letters;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod words;

use crate::{
    config::{Config, ConfigStore, FileConfigStore},
    letters::{CellMap, LetterBoard, MenuLayout},
    runtime::{CrosstermEventSource, FixedTicker, GameEvent, Runner},
    session::Session,
    words::{EmptyWordList, Mode},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

/// Cadence of the game loop's tick events, in milliseconds.
pub const TICK_RATE_MS: u64 = 100;

/// classic hangman tui with mouse-driven letter picking and a countdown timer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Classic hangman in the terminal. Pick letters on the 26-key board with the mouse or keyboard while the countdown runs; every miss draws one more stage of the gallows. Basic and advanced modes select different word lists and gallows art."
)]
pub struct Cli {
    /// game mode to play, skipping the selection screen
    #[clap(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// seconds allowed per round
    #[clap(short = 's', long)]
    pub seconds: Option<u64>,

    /// virtual canvas width used for pointer hit-testing
    #[clap(long)]
    pub width: Option<u32>,

    /// virtual canvas height used for pointer hit-testing
    #[clap(long)]
    pub height: Option<u32>,

    /// directory with custom word lists (basic.txt / advanced.txt)
    #[clap(short = 'd', long)]
    pub words_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    ModeSelect,
    Playing,
    Outcome,
}

/// One round in flight: the session plus its letter board.
#[derive(Debug)]
pub struct Round {
    pub mode: Mode,
    pub session: Session,
    pub board: LetterBoard,
}

#[derive(Debug)]
pub struct App {
    pub cli: Cli,
    pub state: AppState,
    pub menu: MenuLayout,
    pub canvas: (f64, f64),
    pub round_secs: f64,
    pub round: Option<Round>,
    pub last_mode: Option<Mode>,
    pub menu_error: Option<String>,
    store: Option<FileConfigStore>,
}

impl App {
    /// Build the app from CLI flags layered over the stored config. A mode
    /// given on the command line starts its round immediately; an empty
    /// word list for that mode is fatal here, before the terminal is
    /// touched.
    pub fn new(cli: Cli, cfg: Config) -> Result<Self, EmptyWordList> {
        let canvas = (
            cli.width.unwrap_or(cfg.canvas_width) as f64,
            cli.height.unwrap_or(cfg.canvas_height) as f64,
        );
        let round_secs = cli.seconds.unwrap_or(cfg.round_secs) as f64;
        let mut app = Self {
            state: AppState::ModeSelect,
            menu: MenuLayout::new(),
            canvas,
            round_secs,
            round: None,
            last_mode: cfg.last_mode,
            menu_error: None,
            store: None,
            cli,
        };
        if let Some(mode) = app.cli.mode {
            app.start_round(mode)?;
        }
        Ok(app)
    }

    pub fn with_store(mut self, store: FileConfigStore) -> Self {
        self.store = Some(store);
        if self.round.is_some() {
            self.persist_config();
        }
        self
    }

    /// Start a fresh round in `mode`. Fails when the mode's word list
    /// comes up empty.
    pub fn start_round(&mut self, mode: Mode) -> Result<(), EmptyWordList> {
        let list = words::load(mode, self.cli.words_dir.as_deref());
        let word = list
            .pick(&mut rand::thread_rng())
            .ok_or(EmptyWordList { mode })?
            .to_string();
        self.round = Some(Round {
            mode,
            session: Session::with_time_limit(&word, self.round_secs),
            board: LetterBoard::new(self.canvas.0),
        });
        self.state = AppState::Playing;
        self.menu_error = None;
        self.last_mode = Some(mode);
        self.persist_config();
        Ok(())
    }

    pub fn back_to_menu(&mut self) {
        self.round = None;
        self.state = AppState::ModeSelect;
    }

    fn apply_letter(&mut self, letter: char) {
        if let Some(round) = self.round.as_mut() {
            round.session.guess(letter);
        }
        self.check_finished();
    }

    /// Flip to the outcome screen (and log the result) the first time the
    /// round reports a terminal outcome.
    fn check_finished(&mut self) {
        let finished = self
            .round
            .as_ref()
            .map(|r| r.session.has_finished())
            .unwrap_or(false);
        if finished && self.state == AppState::Playing {
            if let Some(round) = &self.round {
                let _ = round.session.save_result(round.mode);
            }
            self.state = AppState::Outcome;
        }
    }

    fn persist_config(&self) {
        if let Some(store) = &self.store {
            let _ = store.save(&Config {
                last_mode: self.last_mode,
                canvas_width: self.canvas.0 as u32,
                canvas_height: self.canvas.1 as u32,
                round_secs: self.round_secs as u64,
            });
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let mut app = App::new(cli, store.load())?.with_store(store);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

#[derive(Debug)]
enum ExitType {
    Replay,
    Menu,
    Quit,
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let events = CrosstermEventSource::new();
    let ticker = FixedTicker::new(Duration::from_millis(TICK_RATE_MS));
    let runner = Runner::new(events, ticker);

    loop {
        let mut exit_type = ExitType::Quit;
        terminal.draw(|f| ui(app, f))?;

        loop {
            match runner.step() {
                GameEvent::Tick => {
                    if app.state == AppState::Playing {
                        if let Some(round) = app.round.as_mut() {
                            round.session.on_tick();
                        }
                        app.check_finished();
                        terminal.draw(|f| ui(app, f))?;
                    }
                }
                GameEvent::Resize => {
                    terminal.draw(|f| ui(app, f))?;
                }
                GameEvent::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        let size = terminal.size()?;
                        let area = Rect::new(0, 0, size.width, size.height);
                        handle_click(app, mouse.column, mouse.row, area);
                        terminal.draw(|f| ui(app, f))?;
                    }
                }
                GameEvent::Key(key) => {
                    match key.code {
                        KeyCode::Esc => {
                            break;
                        }
                        KeyCode::Char(c) => {
                            if key.modifiers.contains(KeyModifiers::CONTROL) && c == 'c'
                            // ctrl+c to quit
                            {
                                break;
                            }

                            match app.state {
                                AppState::ModeSelect => match c.to_ascii_lowercase() {
                                    'b' => {
                                        let _ = try_start(app, Mode::Basic);
                                    }
                                    'a' => {
                                        let _ = try_start(app, Mode::Advanced);
                                    }
                                    _ => {}
                                },
                                AppState::Playing => {
                                    if c.is_ascii_alphabetic() {
                                        let pressed = app
                                            .round
                                            .as_mut()
                                            .and_then(|round| round.board.press(c));
                                        if let Some(letter) = pressed {
                                            app.apply_letter(letter);
                                        }
                                    }
                                }
                                AppState::Outcome => match c.to_ascii_lowercase() {
                                    'r' => {
                                        exit_type = ExitType::Replay;
                                        break;
                                    }
                                    'n' => {
                                        exit_type = ExitType::Menu;
                                        break;
                                    }
                                    _ => {}
                                },
                            }
                        }
                        _ => {}
                    }
                    terminal.draw(|f| ui(app, f))?;
                }
            }
        }

        match exit_type {
            ExitType::Replay => {
                let mode = app.round.as_ref().map(|r| r.mode);
                match mode {
                    Some(mode) if try_start(app, mode).is_ok() => {}
                    _ => app.back_to_menu(),
                }
            }
            ExitType::Menu => {
                app.back_to_menu();
            }
            ExitType::Quit => {
                break;
            }
        }
    }

    Ok(())
}

/// Start a round, surfacing a failed start on the selection screen.
fn try_start(app: &mut App, mode: Mode) -> Result<(), EmptyWordList> {
    app.start_round(mode).map_err(|err| {
        app.menu_error = Some(err.to_string());
        app.state = AppState::ModeSelect;
        err
    })
}

/// Resolve a left-button pointer-down against whatever the current screen
/// shows: a mode button or a letter key.
fn handle_click(app: &mut App, col: u16, row: u16, area: Rect) {
    let map = CellMap::new(app.canvas, area);
    let (x, y) = map.cell_to_canvas(col, row);

    match app.state {
        AppState::ModeSelect => {
            if let Some(mode) = app.menu.mode_at(x, y) {
                let _ = try_start(app, mode);
            }
        }
        AppState::Playing => {
            let clicked = app
                .round
                .as_mut()
                .and_then(|round| round.board.resolve_click(x, y));
            if let Some(letter) = clicked {
                app.apply_letter(letter);
            }
        }
        AppState::Outcome => {}
    }
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
