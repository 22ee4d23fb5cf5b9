//! Signed integer geometry shared by the chrome logic.
//!
//! Coordinates are `i32` because window and cursor positions go negative on
//! multi-monitor setups. Rectangles follow the Win32 `RECT` convention: the
//! right and bottom edges are exclusive.

/// A point in either screen or window-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An edge-based rectangle, `[left, right) x [top, bottom)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at the origin with the given size.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True when the rectangle covers no pixel.
    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Same test as `PtInRect`: left/top inclusive, right/bottom exclusive.
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Same as `OffsetRect`.
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Smallest rectangle covering both, like `UnionRect`. An empty side is ignored.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// True when the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Places a `width` x `height` box in the middle of `self`.
    ///
    /// Used to position button glyphs. Odd leftover space goes to the
    /// right/bottom side.
    pub const fn center(&self, width: i32, height: i32) -> Rect {
        let padding_x = (self.width() - width) / 2;
        let padding_y = (self.height() - height) / 2;

        let left = self.left + padding_x;
        let top = self.top + padding_y;
        Rect::new(left, top, left + width, top + height)
    }
}
