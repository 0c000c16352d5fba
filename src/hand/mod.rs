//! Hand landmark model and gesture classification.

pub mod gesture;

use std::fmt;

use nalgebra::Point2;

use crate::landmark::Landmarks;
use crate::resolution::Resolution;

/// The number of landmarks describing one hand.
pub const NUM_LANDMARKS: usize = 21;

/// Names for the hand pose landmarks.
///
/// The numbering follows the standard 21-point hand landmark layout used by common hand pose
/// estimators, so their output can be passed through without reindexing.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **IP**: Interphalangeal joint, the thumb's upper joint.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// The fingers of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// The four non-thumb fingers, from index to pinky.
    pub const NON_THUMB: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// Returns the landmark placed on this finger's tip.
    pub fn tip(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbTip,
            Finger::Index => LandmarkIdx::IndexFingerTip,
            Finger::Middle => LandmarkIdx::MiddleFingerTip,
            Finger::Ring => LandmarkIdx::RingFingerTip,
            Finger::Pinky => LandmarkIdx::PinkyTip,
        }
    }

    /// Returns the landmark the finger's tip is compared against to derive its state.
    ///
    /// For the four fingers this is the PIP joint; the thumb has no PIP, so its IP joint is used
    /// instead.
    pub fn lower_joint(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbIp,
            Finger::Index => LandmarkIdx::IndexFingerPip,
            Finger::Middle => LandmarkIdx::MiddleFingerPip,
            Finger::Ring => LandmarkIdx::RingFingerPip,
            Finger::Pinky => LandmarkIdx::PinkyPip,
        }
    }
}

/// The landmark positions of one detected hand in one frame.
///
/// Always contains exactly [`NUM_LANDMARKS`] positions, indexed by [`LandmarkIdx`]. Positions
/// are integer pixel coordinates with Y pointing down (image convention).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandLandmarks {
    landmarks: Landmarks,
}

impl HandLandmarks {
    /// Creates a [`HandLandmarks`] collection from pixel-coordinate positions.
    ///
    /// Returns an error unless exactly [`NUM_LANDMARKS`] positions are passed.
    pub fn from_points(points: &[Point2<i32>]) -> Result<Self, MalformedLandmarks> {
        if points.len() != NUM_LANDMARKS {
            return Err(MalformedLandmarks { count: points.len() });
        }

        let mut landmarks = Landmarks::new(NUM_LANDMARKS);
        landmarks.positions_mut().copy_from_slice(points);
        Ok(Self { landmarks })
    }

    /// Creates a [`HandLandmarks`] collection from normalized positions.
    ///
    /// Many pose estimators output landmark coordinates normalized to the 0.0 to 1.0 range of
    /// the input frame. This maps them to pixel coordinates in a frame of resolution `res`,
    /// truncating towards zero.
    pub fn from_normalized(points: &[[f32; 2]], res: Resolution) -> Result<Self, MalformedLandmarks> {
        if points.len() != NUM_LANDMARKS {
            return Err(MalformedLandmarks { count: points.len() });
        }

        let mut landmarks = Landmarks::new(NUM_LANDMARKS);
        for (out, &[x, y]) in landmarks.positions_mut().iter_mut().zip(points) {
            *out = Point2::new(
                (x * res.width() as f32) as i32,
                (y * res.height() as f32) as i32,
            );
        }
        Ok(Self { landmarks })
    }

    /// Returns a landmark's position in the frame's coordinate system.
    #[inline]
    pub fn position(&self, idx: LandmarkIdx) -> Point2<i32> {
        self.landmarks.get(idx as usize)
    }

    /// Returns an iterator over all landmark positions, in [`LandmarkIdx`] order.
    pub fn positions(&self) -> impl Iterator<Item = Point2<i32>> + Clone + '_ {
        self.landmarks.iter()
    }

    /// Returns whether `finger` is extended (pointing up).
    ///
    /// A finger counts as extended when its tip lies strictly above its lower joint.
    pub fn is_extended(&self, finger: Finger) -> bool {
        self.position(finger.tip()).y < self.position(finger.lower_joint()).y
    }

    /// Returns whether `finger` is folded (curled down).
    ///
    /// A finger counts as folded when its tip lies strictly below its lower joint. A finger with
    /// its tip exactly level with its lower joint is neither extended nor folded.
    pub fn is_folded(&self, finger: Finger) -> bool {
        self.position(finger.tip()).y > self.position(finger.lower_joint()).y
    }

    /// Returns whether `finger` is closed, i.e. its tip rests near the palm.
    ///
    /// A finger counts as closed when the vertical distance between its tip and its lower joint
    /// is strictly less than `tolerance` pixels.
    pub fn is_closed(&self, finger: Finger, tolerance: i32) -> bool {
        let tip = self.position(finger.tip());
        let joint = self.position(finger.lower_joint());
        (tip.y - joint.y).abs() < tolerance
    }
}

/// Error returned when constructing [`HandLandmarks`] from the wrong number of points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLandmarks {
    count: usize,
}

impl fmt::Display for MalformedLandmarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} hand landmarks, got {}",
            NUM_LANDMARKS, self.count
        )
    }
}

impl std::error::Error for MalformedLandmarks {}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    #[test]
    fn rejects_wrong_landmark_count() {
        let points = vec![Point2::origin(); NUM_LANDMARKS - 1];
        let err = HandLandmarks::from_points(&points).unwrap_err();
        assert_eq!(err.to_string(), "expected 21 hand landmarks, got 20");

        assert!(HandLandmarks::from_normalized(&[[0.5, 0.5]; 25], Resolution::new(640, 480)).is_err());
    }

    #[test]
    fn normalized_coordinates_map_to_pixels() {
        let mut points = [[0.0; 2]; NUM_LANDMARKS];
        points[LandmarkIdx::IndexFingerTip as usize] = [0.5, 0.5];
        points[LandmarkIdx::PinkyTip as usize] = [0.999, 0.999];

        let hand = HandLandmarks::from_normalized(&points, Resolution::new(640, 480)).unwrap();
        assert_eq!(hand.position(LandmarkIdx::IndexFingerTip), point![320, 240]);
        // Truncation towards zero, not rounding.
        assert_eq!(hand.position(LandmarkIdx::PinkyTip), point![639, 479]);
        assert_eq!(hand.position(LandmarkIdx::Wrist), point![0, 0]);
    }

    #[test]
    fn finger_states() {
        let mut points = [Point2::origin(); NUM_LANDMARKS];
        // Y points down: smaller Y = higher in the image.
        points[LandmarkIdx::IndexFingerTip as usize] = point![80, 100];
        points[LandmarkIdx::IndexFingerPip as usize] = point![80, 150];
        points[LandmarkIdx::MiddleFingerTip as usize] = point![120, 150];
        points[LandmarkIdx::MiddleFingerPip as usize] = point![120, 100];
        let hand = HandLandmarks::from_points(&points).unwrap();

        assert!(hand.is_extended(Finger::Index));
        assert!(!hand.is_folded(Finger::Index));
        assert!(hand.is_folded(Finger::Middle));
        assert!(!hand.is_extended(Finger::Middle));

        // Ring tip is exactly level with its joint: neither extended nor folded, but closed.
        assert!(!hand.is_extended(Finger::Ring));
        assert!(!hand.is_folded(Finger::Ring));
        assert!(hand.is_closed(Finger::Ring, 30));

        // The closed tolerance is a strict bound.
        assert!(!hand.is_closed(Finger::Index, 50));
        assert!(hand.is_closed(Finger::Index, 51));
    }
}
