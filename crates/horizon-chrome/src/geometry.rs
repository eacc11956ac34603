//! Basic geometry types for window chrome.
//!
//! All values are logical (DPI-independent) units stored as `f64`, so
//! incremental resize math under a live pointer stream never accumulates
//! rounding error.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Default width of the invisible resize margin along each window edge.
pub const DEFAULT_RESIZE_MARGIN: f64 = 6.0;

/// Default minimum window width used while resizing.
pub const DEFAULT_MIN_WIDTH: f64 = 200.0;

/// Default minimum window height used while resizing.
pub const DEFAULT_MIN_HEIGHT: f64 = 150.0;

/// Default corner radius of the rounded clip.
pub const DEFAULT_CORNER_RADIUS: f64 = 10.0;

/// Default height of the draggable title bar strip.
pub const DEFAULT_TITLE_BAR_HEIGHT: f64 = 38.0;

/// Tolerance used when comparing geometry produced by arithmetic.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

/// A window or monitor rectangle in screen coordinates.
///
/// Also used for window-local regions (title bar, drag regions), in which
/// case the origin is the window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// X position of the top-left corner.
    pub x: f64,
    /// Y position of the top-left corner.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Bounds {
    /// Create new bounds.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create bounds from an origin and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Empty bounds at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether both dimensions are strictly positive.
    ///
    /// A zero-sized snapshot is treated as "never captured".
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Check if a point is inside (half-open on the right and bottom edges).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// The same size placed at the origin, i.e. the window-local rectangle.
    #[inline]
    pub fn to_local(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height)
    }

    /// Compare with another bounds value within [`GEOMETRY_EPSILON`].
    pub fn approx_eq(&self, other: &Bounds) -> bool {
        (self.x - other.x).abs() <= GEOMETRY_EPSILON
            && (self.y - other.y).abs() <= GEOMETRY_EPSILON
            && (self.width - other.width).abs() <= GEOMETRY_EPSILON
            && (self.height - other.height).abs() <= GEOMETRY_EPSILON
    }
}

/// A rectangle with uniformly rounded corners.
///
/// The radius applies on both axes, so each corner is a circular arc.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundedRect {
    /// The base rectangle.
    pub rect: Bounds,
    /// Corner radius.
    pub radius: f64,
}

impl RoundedRect {
    /// Create a rounded rectangle.
    #[inline]
    pub const fn new(rect: Bounds, radius: f64) -> Self {
        Self { rect, radius }
    }

    /// Diameter of the corner arcs (the "arc width/height" some toolkits expect).
    #[inline]
    pub fn arc_size(&self) -> f64 {
        self.radius * 2.0
    }

    /// Check if the corners are square.
    #[inline]
    pub fn is_rect(&self) -> bool {
        self.radius == 0.0
    }
}
