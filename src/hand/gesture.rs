//! Static gesture classification from hand landmark positions.

use std::fmt;

use crate::hand::{Finger, HandLandmarks, LandmarkIdx};

/// A recognized hand gesture.
///
/// This is a closed vocabulary; every classification yields exactly one of these variants, with
/// [`Gesture::Unknown`] covering both "no hand detected" and "no rule matched".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Hello,
    ILoveYou,
    Please,
    Sorry,
    ThankYou,
    No,
    Yes,
    Unknown,
}

impl Gesture {
    /// Every gesture the classifier can produce.
    pub const ALL: [Gesture; 8] = [
        Gesture::Hello,
        Gesture::ILoveYou,
        Gesture::Please,
        Gesture::Sorry,
        Gesture::ThankYou,
        Gesture::No,
        Gesture::Yes,
        Gesture::Unknown,
    ];

    /// Returns the display label of this gesture.
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::Hello => "Hello 👋",
            Gesture::ILoveYou => "I Love You ❤️",
            Gesture::Please => "Please 🙏",
            Gesture::Sorry => "Sorry 🙇",
            Gesture::ThankYou => "Thank You 🙏",
            Gesture::No => "No ❌",
            Gesture::Yes => "Yes ✅",
            Gesture::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a hand's landmark positions as a static [`Gesture`].
///
/// The classifier is a pure function of one [`HandLandmarks`] value: it holds no state across
/// calls and can be invoked concurrently from multiple frame pipelines without coordination.
///
/// Classification evaluates a fixed sequence of geometric rules top to bottom and stops at the
/// first rule that matches. The rules are *not* mutually exclusive; evaluation order is part of
/// the observable contract (an open palm with an extended thumb matches both the "Hello" and
/// "Thank You" rules and is labeled "Hello" because that rule comes first). Reordering the rules
/// changes which label overlapping poses receive.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    closed_tolerance: i32,
    thumb_align_tolerance: i32,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureClassifier {
    /// Default vertical distance below which a finger counts as closed, in pixels.
    pub const DEFAULT_CLOSED_TOLERANCE: i32 = 30;

    /// Default horizontal distance below which the thumb counts as resting against the index
    /// finger, in pixels.
    pub const DEFAULT_THUMB_ALIGN_TOLERANCE: i32 = 40;

    /// Creates a new [`GestureClassifier`] with the default pixel tolerances.
    pub fn new() -> Self {
        Self {
            closed_tolerance: Self::DEFAULT_CLOSED_TOLERANCE,
            thumb_align_tolerance: Self::DEFAULT_THUMB_ALIGN_TOLERANCE,
        }
    }

    /// Sets the vertical tip-to-joint distance below which a finger counts as closed.
    ///
    /// The tolerances are in pixels of the frame the landmarks were estimated from, so they may
    /// need adjusting when classifying frames that are much smaller or larger than the 480p-ish
    /// resolutions the defaults were tuned on.
    ///
    /// By default, [`GestureClassifier::DEFAULT_CLOSED_TOLERANCE`] is used.
    pub fn set_closed_tolerance(&mut self, tolerance: i32) {
        self.closed_tolerance = tolerance;
    }

    /// Sets the horizontal thumb-to-index distance below which the thumb counts as resting
    /// against the index finger.
    ///
    /// By default, [`GestureClassifier::DEFAULT_THUMB_ALIGN_TOLERANCE`] is used.
    pub fn set_thumb_align_tolerance(&mut self, tolerance: i32) {
        self.thumb_align_tolerance = tolerance;
    }

    /// Classifies a hand's landmark positions as a [`Gesture`].
    ///
    /// An absent hand (`None`, i.e. nothing was detected in the frame) yields
    /// [`Gesture::Unknown`]. This method never fails.
    pub fn classify(&self, hand: Option<&HandLandmarks>) -> Gesture {
        match hand {
            Some(hand) => self.classify_hand(hand),
            None => Gesture::Unknown,
        }
    }

    fn classify_hand(&self, hand: &HandLandmarks) -> Gesture {
        let thumb_x = hand.position(LandmarkIdx::ThumbTip).x;
        let index_x = hand.position(LandmarkIdx::IndexFingerTip).x;

        let all_extended = Finger::NON_THUMB.iter().all(|&f| hand.is_extended(f));
        let all_folded = Finger::NON_THUMB.iter().all(|&f| hand.is_folded(f));

        // Open palm.
        if all_extended {
            return Gesture::Hello;
        }

        // Thumb, index and pinky extended.
        if hand.is_extended(Finger::Thumb)
            && hand.is_extended(Finger::Index)
            && hand.is_extended(Finger::Pinky)
            && hand.is_folded(Finger::Middle)
            && hand.is_folded(Finger::Ring)
        {
            return Gesture::ILoveYou;
        }

        // Fingers folded, thumb to the left of the index finger. Strictly more specific than
        // the plain fist below, so it has to be checked first.
        if all_folded && thumb_x < index_x {
            return Gesture::Please;
        }

        // Fist.
        if all_folded {
            return Gesture::Sorry;
        }

        // Thumb and index extended; the other fingers are not constrained.
        if hand.is_extended(Finger::Thumb) && hand.is_extended(Finger::Index) {
            return Gesture::ThankYou;
        }

        // Index and middle extended, ring and pinky folded.
        if hand.is_extended(Finger::Index)
            && hand.is_extended(Finger::Middle)
            && hand.is_folded(Finger::Ring)
            && hand.is_folded(Finger::Pinky)
        {
            return Gesture::No;
        }

        // Closed fist with the thumb resting against the index finger.
        let all_closed = Finger::NON_THUMB
            .iter()
            .all(|&f| hand.is_closed(f, self.closed_tolerance));
        if all_closed && (thumb_x - index_x).abs() < self.thumb_align_tolerance {
            return Gesture::Yes;
        }

        Gesture::Unknown
    }
}
