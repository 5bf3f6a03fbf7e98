/// Crossterm-backed [`InputSource`].
///
/// Terminals report key presses, not key state.  We keep the frame number
/// of the last press/repeat event for every key and treat a key as held
/// while that event is recent enough.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events, so keys are dropped on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `hold_window` frames of silence,
///   which is shorter than the OS repeat interval.

use std::collections::HashMap;
use std::io::{self, Write};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, KeyboardEnhancementFlags, ModifierKeyCode, MouseButton as TermButton,
    MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{cursor, terminal, ExecutableCommand};
use glam::Vec2;
use log::{error, warn};

use crate::input::{InputSource, Key, MouseButton};

/// Frames a key stays held after its last press/repeat event.
/// 8 frames @ 60 FPS ≈ 133 ms, inside every OS key-repeat interval.
pub const HOLD_WINDOW: u64 = 8;

/// Map a terminal key code to a game key.  Uppercase letters count too,
/// since shift turns `w` into `W`.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::W),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::A),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::S),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::D),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::P),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::C),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(Key::V),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
            Some(Key::Shift)
        }
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct TerminalInput {
    /// Maps each held key to the frame it was last seen (press or repeat).
    key_frame: HashMap<Key, u64>,
    buttons: [bool; 2],
    /// Last mouse cell reported by the terminal.
    mouse_cell: (u16, u16),
    /// Terminal size in cells.
    size: (u16, u16),
    /// Rows at the bottom of the terminal that are not part of the picture.
    reserved_rows: u16,
    frame: u64,
    hold_window: u64,
}

impl TerminalInput {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_hold_window(width, height, HOLD_WINDOW)
    }

    pub fn with_hold_window(width: u16, height: u16, hold_window: u64) -> Self {
        Self {
            key_frame: HashMap::new(),
            buttons: [false; 2],
            mouse_cell: (width / 2, height / 2),
            size: (width.max(1), height.max(1)),
            reserved_rows: 0,
            frame: 0,
            hold_window,
        }
    }

    /// Keep the bottom `rows` rows out of the mouse mapping, so the cursor
    /// lines up with a picture drawn above a text area.
    pub fn with_reserved_rows(mut self, rows: u16) -> Self {
        self.reserved_rows = rows;
        self
    }

    /// Start a new frame; call before draining this frame's events.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width.max(1), height.max(1));
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(w, h) => self.resize(*w, *h),
            _ => {}
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        // Ctrl-C never reaches us as a signal in raw mode.
        let key = if event.code == KeyCode::Char('c')
            && event.modifiers.contains(KeyModifiers::CONTROL)
        {
            Some(Key::Escape)
        } else {
            map_key(event.code)
        };

        let shifted = event.modifiers.contains(KeyModifiers::SHIFT)
            || matches!(event.code, KeyCode::Char(ch) if ch.is_ascii_uppercase());

        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if let Some(key) = key {
                    self.key_frame.insert(key, self.frame);
                }
                if shifted {
                    self.key_frame.insert(Key::Shift, self.frame);
                }
            }
            KeyEventKind::Release => {
                if let Some(key) = key {
                    self.key_frame.remove(&key);
                }
            }
        }
    }

    fn handle_mouse(&mut self, event: &MouseEvent) {
        self.mouse_cell = (event.column, event.row);
        let slot = |b: TermButton| match b {
            TermButton::Left => Some(0),
            TermButton::Right => Some(1),
            TermButton::Middle => None,
        };
        match event.kind {
            MouseEventKind::Down(b) | MouseEventKind::Drag(b) => {
                if let Some(i) = slot(b) {
                    self.buttons[i] = true;
                }
            }
            MouseEventKind::Up(b) => {
                if let Some(i) = slot(b) {
                    self.buttons[i] = false;
                }
            }
            _ => {}
        }
    }
}

impl InputSource for TerminalInput {
    fn key_down(&self, key: Key) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    fn mouse_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.buttons[0],
            MouseButton::Right => self.buttons[1],
        }
    }

    fn mouse_relative(&self) -> Vec2 {
        let rows = self.size.1.saturating_sub(self.reserved_rows).max(1);
        let (w, h) = (self.size.0 as f32, rows as f32);
        let (col, row) = (self.mouse_cell.0 as f32, self.mouse_cell.1 as f32);
        Vec2::new((col + 0.5) / w * 2.0 - 1.0, 1.0 - (row + 0.5) / h * 2.0)
    }
}

// ── Screen lifecycle ──────────────────────────────────────────────────────────

/// Enter the alternate screen, hide the cursor and capture the mouse.
/// Returns whether the terminal accepted keyboard enhancement.
fn setup<W: Write>(out: &mut W) -> io::Result<bool> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("keyboard enhancement unavailable, using key-repeat hold window");
    }
    Ok(keyboard_enhanced)
}

/// Undo `setup` and raw mode.  Every step runs even if an earlier one fails.
fn restore<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Run `body` on the game screen.  The terminal is restored afterwards on
/// every path, including a setup step that fails halfway.
pub fn with_terminal<W, T, F>(out: &mut W, body: F) -> io::Result<T>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<T>,
{
    let keyboard_enhanced = match setup(out) {
        Ok(enhanced) => enhanced,
        Err(e) => {
            error!("terminal setup failed: {e}");
            restore(out, false);
            return Err(e);
        }
    };
    let result = body(out);
    restore(out, keyboard_enhanced);
    result
}
