//!
//! An abstract representation of a vector canvas object
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

extern crate quad_curves as curves;

mod gc;
mod draw;
mod color;
mod canvas;

pub use self::gc::*;
pub use self::draw::*;
pub use self::color::*;
pub use self::canvas::*;
