//! Keyboard state tracking
//!
//! The game reads keys as "is it held right now". Terminals that support the
//! kitty keyboard protocol report releases, so held state is exact. Others only
//! send presses (plus auto-repeat), so a press counts as held for a short window
//! that each repeat refreshes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::TickInput;

/// The fixed set of game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalKey {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl LogicalKey {
    /// Q / Z for the left paddle, P / period for the right. Case-insensitive.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'q' => Some(LogicalKey::LeftUp),
                'z' => Some(LogicalKey::LeftDown),
                'p' => Some(LogicalKey::RightUp),
                '.' => Some(LogicalKey::RightDown),
                _ => None,
            },
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// How long a key stays down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldMode {
    /// Down from press until release
    UntilRelease,
    /// Down for this many ticks after the latest press or repeat
    Ticks(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyState {
    Up,
    Held,
    Expiring(u32),
}

/// Folds key events into per-tick `TickInput`
#[derive(Debug, Clone)]
pub struct KeyTracker {
    mode: HoldMode,
    keys: [KeyState; 4],
    quit: bool,
}

impl KeyTracker {
    pub fn new(mode: HoldMode) -> Self {
        Self {
            mode,
            keys: [KeyState::Up; 4],
            quit: false,
        }
    }

    /// Apply one key event. Esc, Ctrl-C and Ctrl-D request quit.
    pub fn handle(&mut self, event: &KeyEvent) {
        let pressed = matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat);

        if pressed && is_quit(event) {
            self.quit = true;
            return;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        let Some(key) = LogicalKey::from_key_code(event.code) else {
            return;
        };
        if pressed {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    pub fn press(&mut self, key: LogicalKey) {
        self.keys[key.index()] = match self.mode {
            HoldMode::UntilRelease => KeyState::Held,
            HoldMode::Ticks(ticks) => KeyState::Expiring(ticks.max(1)),
        };
    }

    pub fn release(&mut self, key: LogicalKey) {
        self.keys[key.index()] = KeyState::Up;
    }

    /// Forget all held keys (focus lost, releases may never arrive)
    pub fn release_all(&mut self) {
        self.keys = [KeyState::Up; 4];
    }

    pub fn is_down(&self, key: LogicalKey) -> bool {
        self.keys[key.index()] != KeyState::Up
    }

    /// Input for the tick about to run; timed holds count down afterwards
    pub fn snapshot(&mut self) -> TickInput {
        let input = TickInput {
            left_up: self.is_down(LogicalKey::LeftUp),
            left_down: self.is_down(LogicalKey::LeftDown),
            right_up: self.is_down(LogicalKey::RightUp),
            right_down: self.is_down(LogicalKey::RightDown),
            quit: self.quit,
        };

        for state in &mut self.keys {
            *state = match *state {
                KeyState::Expiring(1) => KeyState::Up,
                KeyState::Expiring(n) => KeyState::Expiring(n - 1),
                other => other,
            };
        }

        input
    }
}

fn is_quit(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Esc => true,
        KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
            matches!(c.to_ascii_lowercase(), 'c' | 'd')
        }
        _ => false,
    }
}
