//! Landmark source seam and per-frame gesture recognition.
//!
//! Hand landmark estimation is performed by an external collaborator (typically a neural
//! network based pose estimator). This module defines the [`HandSource`] trait that such
//! estimators plug into, and [`GestureRecognizer`], which drives a source and classifies every
//! hand it reports.

use itertools::Itertools;

use crate::hand::gesture::{Gesture, GestureClassifier};
use crate::hand::HandLandmarks;
use crate::landmark::Confidence;
use crate::timer::Timer;

/// One hand reported by a [`HandSource`] for one frame.
#[derive(Debug, Clone)]
pub struct DetectedHand {
    landmarks: HandLandmarks,
    presence: f32,
}

impl DetectedHand {
    /// Creates a new [`DetectedHand`] from its landmark positions and a presence value.
    ///
    /// `presence` should be in range 0.0 to 1.0 and indicates how confident the source is that
    /// the landmarks describe a hand that is actually in view.
    pub fn new(landmarks: HandLandmarks, presence: f32) -> Self {
        Self {
            landmarks,
            presence,
        }
    }

    #[inline]
    pub fn landmarks(&self) -> &HandLandmarks {
        &self.landmarks
    }
}

impl Confidence for DetectedHand {
    #[inline]
    fn confidence(&self) -> f32 {
        self.presence
    }
}

/// Trait implemented by external hand landmark estimators.
///
/// A source is handed one frame at a time and reports zero or more hands for it. The frame type
/// is opaque to this crate; it is whatever the estimator consumes (an image, a buffer handle, a
/// file path in tests).
pub trait HandSource {
    /// The frame type this source consumes.
    type Frame;

    /// Estimates hand landmarks in `frame`.
    ///
    /// Returns one [`DetectedHand`] per hand found, in no particular order. Landmark positions
    /// must be pixel coordinates within `frame`. An empty `Vec` means no hand was detected;
    /// that is not an error.
    fn detect(&mut self, frame: &Self::Frame) -> anyhow::Result<Vec<DetectedHand>>;
}

/// A hand together with the gesture it was classified as.
#[derive(Debug, Clone)]
pub struct RecognizedHand {
    hand: DetectedHand,
    gesture: Gesture,
}

impl RecognizedHand {
    #[inline]
    pub fn hand(&self) -> &DetectedHand {
        &self.hand
    }

    #[inline]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }
}

/// Drives a [`HandSource`] and classifies every hand it reports.
///
/// Hands whose presence value falls below the presence threshold are discarded before
/// classification; a borderline detection is more likely to be noise than a readable gesture.
pub struct GestureRecognizer<S: HandSource> {
    source: S,
    classifier: GestureClassifier,
    presence_thresh: f32,
    t_detect: Timer,
    t_classify: Timer,
}

impl<S: HandSource> GestureRecognizer<S> {
    /// The default minimum presence value at which a detected hand is classified.
    pub const DEFAULT_PRESENCE_THRESHOLD: f32 = 0.7;

    /// Creates a new [`GestureRecognizer`] reading hands from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            classifier: GestureClassifier::new(),
            presence_thresh: Self::DEFAULT_PRESENCE_THRESHOLD,
            t_detect: Timer::new("detect"),
            t_classify: Timer::new("classify"),
        }
    }

    /// Returns a mutable reference to the [`GestureClassifier`], to adjust its tolerances.
    pub fn classifier_mut(&mut self) -> &mut GestureClassifier {
        &mut self.classifier
    }

    /// Sets the minimum presence value at which a detected hand is classified.
    ///
    /// By default, [`GestureRecognizer::DEFAULT_PRESENCE_THRESHOLD`] is used.
    pub fn set_presence_threshold(&mut self, threshold: f32) {
        self.presence_thresh = threshold;
    }

    /// Returns profiling timers for the detection and classification stages.
    pub fn timers(&self) -> impl Iterator<Item = &Timer> + '_ {
        [&self.t_detect, &self.t_classify].into_iter()
    }

    /// Detects and classifies all hands in `frame`.
    ///
    /// Returns one [`RecognizedHand`] per hand whose presence reached the threshold. An empty
    /// result means no (confident) hand was in the frame; for display purposes that corresponds
    /// to the [`Gesture::Unknown`] label, matching `classifier.classify(None)`.
    pub fn process(&mut self, frame: &S::Frame) -> anyhow::Result<Vec<RecognizedHand>> {
        let hands = self.t_detect.time(|| self.source.detect(frame))?;

        let recognized = self.t_classify.time(|| {
            hands
                .into_iter()
                .filter(|hand| {
                    if hand.confidence() < self.presence_thresh {
                        log::trace!(
                            "discarding hand: presence {} below threshold {}",
                            hand.confidence(),
                            self.presence_thresh,
                        );
                        false
                    } else {
                        true
                    }
                })
                .map(|hand| {
                    let gesture = self.classifier.classify(Some(&hand.landmarks));
                    RecognizedHand { hand, gesture }
                })
                .collect::<Vec<_>>()
        });

        log::trace!(
            "frame: {}",
            if recognized.is_empty() {
                "no hands".to_string()
            } else {
                recognized.iter().map(|r| r.gesture().label()).join(", ")
            },
        );

        Ok(recognized)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use nalgebra::{point, Point2};

    use super::*;
    use crate::hand::NUM_LANDMARKS;

    /// A scripted source that replays a fixed set of hands for every frame.
    struct FixedSource {
        hands: Vec<DetectedHand>,
        fail: bool,
    }

    impl HandSource for FixedSource {
        type Frame = ();

        fn detect(&mut self, _frame: &()) -> anyhow::Result<Vec<DetectedHand>> {
            if self.fail {
                return Err(anyhow!("estimator crashed"));
            }
            Ok(self.hands.clone())
        }
    }

    fn open_palm() -> HandLandmarks {
        let mut points = [Point2::origin(); NUM_LANDMARKS];
        for finger in crate::hand::Finger::NON_THUMB {
            points[finger.tip() as usize] = point![100, 100];
            points[finger.lower_joint() as usize] = point![100, 150];
        }
        HandLandmarks::from_points(&points).unwrap()
    }

    #[test]
    fn classifies_confident_hands() {
        let source = FixedSource {
            hands: vec![DetectedHand::new(open_palm(), 0.9)],
            fail: false,
        };
        let mut recognizer = GestureRecognizer::new(source);

        let recognized = recognizer.process(&()).unwrap();
        assert_eq!(recognized.len(), 1);
        assert_eq!(recognized[0].gesture(), Gesture::Hello);
    }

    #[test]
    fn discards_hands_below_presence_threshold() {
        let source = FixedSource {
            hands: vec![
                DetectedHand::new(open_palm(), 0.5),
                DetectedHand::new(open_palm(), 0.8),
            ],
            fail: false,
        };
        let mut recognizer = GestureRecognizer::new(source);

        let recognized = recognizer.process(&()).unwrap();
        assert_eq!(recognized.len(), 1);
        assert_eq!(recognized[0].hand().confidence(), 0.8);

        recognizer.set_presence_threshold(0.3);
        let recognized = recognizer.process(&()).unwrap();
        assert_eq!(recognized.len(), 2);
    }

    #[test]
    fn empty_frame_yields_no_hands() {
        let source = FixedSource {
            hands: Vec::new(),
            fail: false,
        };
        let mut recognizer = GestureRecognizer::new(source);
        assert!(recognizer.process(&()).unwrap().is_empty());
    }

    #[test]
    fn source_errors_propagate() {
        let source = FixedSource {
            hands: Vec::new(),
            fail: true,
        };
        let mut recognizer = GestureRecognizer::new(source);
        assert!(recognizer.process(&()).is_err());
    }
}
