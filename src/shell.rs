/// Screen coordinates of the last pointer-move event over the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`, used to center effects on the pointer.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Transient render state owned by the main page shell.
///
/// Every transition is unconditional and independent of the others, so the
/// order in which events arrive never matters for the fields they don't touch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShellState {
    pub sidebar_open: bool,
    pub pointer: PointerPosition,
    pub hovering: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = PointerPosition::new(x, y);
    }

    pub fn pointer_entered(&mut self) {
        self.hovering = true;
    }

    pub fn pointer_left(&mut self) {
        self.hovering = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
