/// Layout axis. Scrollbars, sliders and viewports work along one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    pub fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Copy of `self` with the component along `axis` replaced.
    pub fn with_along(self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::Horizontal => Self { x: value, y: self.y },
            Axis::Vertical => Self { x: self.x, y: value },
        }
    }

    pub fn offset(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn negated(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn along(self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn with_along(self, axis: Axis, value: u32) -> Self {
        match axis {
            Axis::Horizontal => Self { width: value, height: self.height },
            Axis::Vertical => Self { width: self.width, height: value },
        }
    }

    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Axis-aligned box in integer pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> i32 {
        self.origin.x
    }

    pub fn y(&self) -> i32 {
        self.origin.y
    }

    pub fn right(&self) -> i64 {
        self.origin.x as i64 + self.size.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.origin.y as i64 + self.size.height as i64
    }

    pub fn translate(self, by: Point) -> Self {
        Self {
            origin: self.origin.offset(by),
            size: self.size,
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        self.contains_padded(p, 0.0)
    }

    /// Inclusive containment test against the rectangle grown by `pad` on
    /// every side.
    pub fn contains_padded(&self, p: Point, pad: f32) -> bool {
        let (px, py) = (p.x as f32, p.y as f32);
        let x0 = self.origin.x as f32 - pad;
        let y0 = self.origin.y as f32 - pad;
        let x1 = self.right() as f32 + pad;
        let y1 = self.bottom() as f32 + pad;
        x0 <= px && px <= x1 && y0 <= py && py <= y1
    }

    /// Hit test honoring the outline convention: a negative outline
    /// thickness widens the hit region outward by its magnitude, a positive
    /// one leaves it unchanged.
    pub fn hit_test(&self, p: Point, outline_thickness: f32) -> bool {
        let pad = if outline_thickness < 0.0 { -outline_thickness } else { 0.0 };
        self.contains_padded(p, pad)
    }
}
