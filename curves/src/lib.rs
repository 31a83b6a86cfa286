#![warn(bare_trait_objects)]

//!
//! Routines for manipulating quadratic bezier curves, centered around the problem of making a
//! curve pass through a chosen point rather than just being pulled towards it.
//!

extern crate roots;
extern crate itertools;

pub mod bezier;

pub mod consts;
pub use self::consts::*;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub use self::bezier::{QuadraticCurve, QuadraticCurveFactory};
