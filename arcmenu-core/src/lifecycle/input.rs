//! Input vocabulary for the controller.

/// Keys the menu reacts to. Everything else maps to [`MenuKey::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Previous,
    Next,
    Activate,
    Cancel,
    Other,
}

impl MenuKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "ArrowUp" => MenuKey::Previous,
            "ArrowRight" | "ArrowDown" => MenuKey::Next,
            "Enter" | " " | "Space" | "Spacebar" => MenuKey::Activate,
            "Escape" | "Esc" => MenuKey::Cancel,
            _ => MenuKey::Other,
        }
    }
}

/// Raw wheel deltas as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    pub dx: f32,
    pub dy: f32,
}

impl WheelDelta {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Delta along whichever axis moved more. Vertical wins ties, so a
    /// plain mouse wheel scrolls the horizontal strip.
    pub fn primary(&self) -> f32 {
        if self.dx.abs() > self.dy.abs() {
            self.dx
        } else {
            self.dy
        }
    }
}
