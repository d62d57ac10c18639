use std::fmt;

/// Eases a tracked point towards the pointer's offset from the viewport centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Parallax {
    smoothing: f64,
    divisor: f64,
    target: (f64, f64),
    tracked: (f64, f64),
}

impl Parallax {
    pub fn new(smoothing: f64, divisor: f64) -> Self {
        Self {
            smoothing,
            divisor,
            target: (0.0, 0.0),
            tracked: (0.0, 0.0),
        }
    }

    /// Record a pointer position in a `width` x `height` viewport.
    pub fn point_at(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.target = (x - width / 2.0, y - height / 2.0);
    }

    pub fn step(&mut self) -> Translation {
        self.tracked.0 += (self.target.0 - self.tracked.0) * self.smoothing;
        self.tracked.1 += (self.target.1 - self.tracked.1) * self.smoothing;
        self.translation()
    }

    pub fn translation(&self) -> Translation {
        Translation {
            x: self.tracked.0 / self.divisor,
            y: self.tracked.1 / self.divisor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

/// Formats as a CSS `transform` value.
impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}px, {}px)", self.x, self.y)
    }
}
