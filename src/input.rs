//! Keyboard shortcuts and pointer painting
//!
//! A mouse click toggles the cell under the cursor. Dragging with the button
//! held, and any touch, paints cells alive and never kills them, so a finger
//! can draw without erasing what it crosses.

/// Board-level commands shared by buttons and keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleRunning,
    Step,
    Clear,
    Randomize,
}

/// Map a `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        " " | "Spacebar" => Some(Command::ToggleRunning),
        "s" | "S" => Some(Command::Step),
        "c" | "C" => Some(Command::Clear),
        "r" | "R" => Some(Command::Randomize),
        _ => None,
    }
}

/// What a pointer does to the cell it lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Flip the cell (mouse click)
    Toggle,
    /// Make the cell alive (mouse drag, touch)
    Paint,
}

/// Tracks one press-drag-release gesture
///
/// Emits at most one action per cell entered, so hovering inside a cell does
/// not repeat it, and the cell toggled on press is not painted over when the
/// drag begins.
#[derive(Debug, Default)]
pub struct StrokeTracker {
    active: bool,
    last_cell: Option<(usize, usize)>,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mouse button pressed on `cell`
    pub fn press(&mut self, cell: Option<(usize, usize)>) -> Option<((usize, usize), PointerAction)> {
        self.active = true;
        self.last_cell = cell;
        cell.map(|c| (c, PointerAction::Toggle))
    }

    /// Touch started on `cell`
    pub fn touch(&mut self, cell: Option<(usize, usize)>) -> Option<((usize, usize), PointerAction)> {
        self.active = true;
        self.last_cell = cell;
        cell.map(|c| (c, PointerAction::Paint))
    }

    /// Pointer moved onto `cell`
    pub fn drag(&mut self, cell: Option<(usize, usize)>) -> Option<((usize, usize), PointerAction)> {
        if !self.active {
            return None;
        }
        let cell = cell?;
        if self.last_cell == Some(cell) {
            return None;
        }
        self.last_cell = Some(cell);
        Some((cell, PointerAction::Paint))
    }

    /// Button released, touch ended, or pointer left the canvas
    pub fn release(&mut self) {
        self.active = false;
        self.last_cell = None;
    }
}
