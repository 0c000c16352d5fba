//! Mudra hand gesture recognition library.
//!
//! Mudra classifies a small fixed vocabulary of static hand gestures from hand landmark
//! positions. Landmark estimation itself is not part of this crate; any estimator that can
//! produce the standard 21-point hand landmark layout (see [`hand::LandmarkIdx`]) can feed it
//! through the [`source::HandSource`] trait.
//!
//! # 2D Coordinates
//!
//! Landmark positions use image coordinates: X points to the right, Y points *down*, and units
//! are pixels within the frame the landmarks were estimated from. All gesture predicates are
//! written against this convention, so landmarks in a Y-up coordinate system must be flipped
//! before classification.

use log::LevelFilter;

pub mod hand;
pub mod landmark;
pub mod resolution;
pub mod source;
pub mod timer;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and Mudra will log at *debug* level. The `RUST_LOG` environment variable
/// can override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
