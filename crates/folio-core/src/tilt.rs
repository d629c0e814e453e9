//! Pointer-driven 3D tilt for the hero device card.

/// Constant rotation the card always carries, in degrees.
pub const BASE_ROTATION_DEG: f64 = -6.0;

/// Rotation at the card edge along either axis, in degrees.
///
/// An offset of half the card's size maps to half this value.
pub const TILT_SCALE_DEG: f64 = 12.0;

/// Transform applied while the pointer is outside the card.
pub const REST_TRANSFORM: &str = "rotate(-6deg)";

/// Element bounding box in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Rotation added on top of the base rotation, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Rotation around the X axis (vertical pointer offset)
    pub rx: f64,
    /// Rotation around the Y axis (horizontal pointer offset)
    pub ry: f64,
}

impl Tilt {
    /// Compute the tilt for a pointer at client position `(x, y)`.
    ///
    /// A degenerate rect (zero or negative size) yields no tilt.
    pub fn at(rect: Rect, x: f64, y: f64) -> Self {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Self::default();
        }

        let (cx, cy) = rect.center();
        let dx = x - cx;
        let dy = y - cy;

        Self {
            rx: (dy / rect.height) * -TILT_SCALE_DEG,
            ry: (dx / rect.width) * TILT_SCALE_DEG,
        }
    }

    /// CSS transform combining the tilt with the base rotation.
    pub fn transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) rotate({}deg)",
            unsigned_zero(self.rx),
            unsigned_zero(self.ry),
            BASE_ROTATION_DEG
        )
    }
}

/// Hover state of the tilting card.
///
/// The card's bounding box is measured asynchronously, so a measurement can
/// land after the pointer has already left. Each enter/leave starts a new
/// generation; measurements from an older generation are discarded, and
/// pointer moves compute the transform synchronously from the cached box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltTracker {
    hovering: bool,
    generation: u64,
    rect: Option<Rect>,
}

impl TiltTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Current generation, to tag a bounding box measurement with.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pointer entered the card. Returns the generation to measure under.
    pub fn enter(&mut self) -> u64 {
        self.hovering = true;
        self.generation += 1;
        self.rect = None;
        self.generation
    }

    /// Record a measurement taken under `generation`.
    ///
    /// Returns `false` when the pointer has left (or re-entered) since.
    pub fn measured(&mut self, generation: u64, rect: Rect) -> bool {
        if !self.hovering || generation != self.generation {
            return false;
        }
        self.rect = Some(rect);
        true
    }

    /// Transform for a pointer at `(x, y)`, `None` while not hovering or
    /// before the card has been measured.
    pub fn pointer_move(&self, x: f64, y: f64) -> Option<String> {
        if !self.hovering {
            return None;
        }
        self.rect.map(|rect| Tilt::at(rect, x, y).transform())
    }

    /// Pointer left the card. Returns the rest transform.
    pub fn leave(&mut self) -> &'static str {
        self.hovering = false;
        self.generation += 1;
        self.rect = None;
        REST_TRANSFORM
    }
}

/// `-0` renders as "-0"; collapse it so the center reads "0deg".
fn unsigned_zero(deg: f64) -> f64 {
    if deg == 0.0 {
        0.0
    } else {
        deg
    }
}
