use crate::words::Mode;
use ratatui::layout::Rect;

/// Radius of a letter key's circular hit-target, in canvas pixels.
pub const KEY_RADIUS: f64 = 20.0;
/// Gap between neighbouring keys, in canvas pixels.
pub const KEY_GAP: f64 = 15.0;
/// Keys laid out per row; 26 letters make two rows.
pub const KEYS_PER_ROW: usize = 13;

const KEY_ROW_Y: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterKey {
    pub x: f64,
    pub y: f64,
    pub letter: char,
    pub visible: bool,
}

/// The clickable A–Z grid, laid out in canvas coordinates: two centered
/// rows of circular hit-targets. A key is spent on first use and stays
/// inert for the rest of the round.
#[derive(Debug, Clone)]
pub struct LetterBoard {
    keys: Vec<LetterKey>,
}

impl LetterBoard {
    pub fn new(canvas_width: f64) -> Self {
        let pitch = KEY_RADIUS * 2.0 + KEY_GAP;
        let start_x = ((canvas_width - pitch * KEYS_PER_ROW as f64) / 2.0).round();
        let keys = ('A'..='Z')
            .enumerate()
            .map(|(i, letter)| LetterKey {
                x: start_x + KEY_GAP * 2.0 + pitch * (i % KEYS_PER_ROW) as f64,
                y: KEY_ROW_Y + (i / KEYS_PER_ROW) as f64 * (KEY_GAP + KEY_RADIUS * 2.0),
                letter,
                visible: true,
            })
            .collect();
        Self { keys }
    }

    pub fn keys(&self) -> impl Iterator<Item = &LetterKey> {
        self.keys.iter()
    }

    pub fn visible_keys(&self) -> impl Iterator<Item = &LetterKey> {
        self.keys.iter().filter(|k| k.visible)
    }

    pub fn is_spent(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.keys
            .iter()
            .any(|k| k.letter == letter && !k.visible)
    }

    /// Resolve a pointer-down at canvas coordinates against the visible
    /// keys. A hit spends the key: it stops rendering and stops matching
    /// further clicks at the same spot.
    pub fn resolve_click(&mut self, x: f64, y: f64) -> Option<char> {
        for key in self.keys.iter_mut().filter(|k| k.visible) {
            let dist = ((key.x - x).powi(2) + (key.y - y).powi(2)).sqrt();
            if dist < KEY_RADIUS {
                key.visible = false;
                return Some(key.letter);
            }
        }
        None
    }

    /// Keyboard route to the same spend-once behavior as a click.
    pub fn press(&mut self, letter: char) -> Option<char> {
        let letter = letter.to_ascii_uppercase();
        let key = self
            .keys
            .iter_mut()
            .find(|k| k.letter == letter && k.visible)?;
        key.visible = false;
        Some(key.letter)
    }
}

/// Axis-aligned button in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Button {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// The two mode-selection buttons.
#[derive(Debug, Clone, Copy)]
pub struct MenuLayout {
    pub basic: Button,
    pub advanced: Button,
}

impl MenuLayout {
    pub fn new() -> Self {
        Self {
            basic: Button {
                x: 75.0,
                y: 250.0,
                width: 400.0,
                height: 100.0,
            },
            advanced: Button {
                x: 500.0,
                y: 250.0,
                width: 400.0,
                height: 100.0,
            },
        }
    }

    pub fn mode_at(&self, x: f64, y: f64) -> Option<Mode> {
        if self.basic.contains(x, y) {
            Some(Mode::Basic)
        } else if self.advanced.contains(x, y) {
            Some(Mode::Advanced)
        } else {
            None
        }
    }
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Projection between terminal cells and the virtual canvas the hit
/// geometry lives in. A cell maps to the center of its pixel rectangle,
/// so a click lands on the coordinates the player sees the glyph at.
#[derive(Debug, Clone, Copy)]
pub struct CellMap {
    canvas_w: f64,
    canvas_h: f64,
    area: Rect,
}

impl CellMap {
    pub fn new(canvas: (f64, f64), area: Rect) -> Self {
        Self {
            canvas_w: canvas.0,
            canvas_h: canvas.1,
            area,
        }
    }

    pub fn cell_to_canvas(&self, col: u16, row: u16) -> (f64, f64) {
        let cols = self.area.width.max(1) as f64;
        let rows = self.area.height.max(1) as f64;
        let x = (col.saturating_sub(self.area.x) as f64 + 0.5) / cols * self.canvas_w;
        let y = (row.saturating_sub(self.area.y) as f64 + 0.5) / rows * self.canvas_h;
        (x, y)
    }

    pub fn canvas_to_cell(&self, x: f64, y: f64) -> (u16, u16) {
        let cols = self.area.width.max(1) as f64;
        let rows = self.area.height.max(1) as f64;
        let col = (x / self.canvas_w * cols) as u16;
        let row = (y / self.canvas_h * rows) as u16;
        (
            self.area.x + col.min(self.area.width.saturating_sub(1)),
            self.area.y + row.min(self.area.height.saturating_sub(1)),
        )
    }
}
