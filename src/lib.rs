#![warn(bare_trait_objects)]

extern crate quad_curves;
extern crate quad_canvas;

extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

pub mod events;
pub mod state;
pub mod style;
pub mod config;
pub mod interact;
pub mod render;

pub use self::events::*;
pub use self::state::*;
pub use self::style::*;
pub use self::config::*;
pub use self::interact::*;
pub use self::render::*;
