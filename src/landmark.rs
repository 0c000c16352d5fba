//! Common code for landmark storage.

use nalgebra::Point2;

type Position = Point2<i32>;

/// A fixed-length, ordered collection of 2D landmark positions.
///
/// Positions are integer pixel coordinates in the frame the landmarks were estimated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landmarks {
    positions: Box<[Position]>,
}

impl Landmarks {
    /// Creates a new [`Landmarks`] collection containing `len` preallocated landmarks.
    ///
    /// All landmarks will start at the origin.
    pub fn new(len: usize) -> Self {
        Self {
            positions: vec![Position::origin(); len].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + Clone + '_ {
        self.positions.iter().copied()
    }

    pub fn get(&self, index: usize) -> Position {
        self.positions[index]
    }

    pub fn set(&mut self, index: usize, position: Position) {
        self.positions[index] = position;
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [Position] {
        &mut self.positions
    }
}

/// Trait for estimation results that contain a confidence value.
///
/// The confidence value can be used to detect when the estimated object becomes obscured or
/// leaves the camera's field of view. [`GestureRecognizer`][crate::source::GestureRecognizer]
/// uses it to discard hands whose presence is too uncertain to classify.
pub trait Confidence {
    /// Confidence value indicating whether the estimated object is in view.
    ///
    /// By convention, this is in range 0.0 to 1.0, with anything above 0.5 indicating that the
    /// object is probably still in view.
    fn confidence(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    #[test]
    fn starts_at_origin() {
        let landmarks = Landmarks::new(4);
        assert_eq!(landmarks.len(), 4);
        assert!(landmarks.iter().all(|pos| pos == Point2::origin()));
    }

    #[test]
    fn set_and_get() {
        let mut landmarks = Landmarks::new(2);
        landmarks.set(1, point![7, -3]);
        assert_eq!(landmarks.get(1), point![7, -3]);
        assert_eq!(landmarks.get(0), Point2::origin());
    }
}
