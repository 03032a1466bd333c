//! Labelled 2-D points.

use core::fmt;

/// A single labelled point in the plane.
///
/// Objects are plain values: clusters own them by value and merging copies
/// them. Ids are unique within a loaded data set, but nothing in the engine
/// depends on that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object {
    /// Label of the point.
    pub id: i32,
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Object {
    /// Create a new object.
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// Renders as `ID[X,Y]`.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{},{}]", self.id, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_display() {
        assert_eq!(Object::new(40, 86.0, 663.0).to_string(), "40[86,663]");
        assert_eq!(Object::new(-3, 0.5, 1.25).to_string(), "-3[0.5,1.25]");
    }
}
