//! Geometry and state of a 3×3×3 Rubik's Cube, and the camera and draw-call pipeline
//! which displays it on a character grid.
//!
//! ## Overview
//!
//! * [`CubeAssembly`](assembly::CubeAssembly) owns the 27 [`Cubelet`](cubelet::Cubelet)s
//!   and performs [twists](assembly::CubeAssembly::twist) of [`Layer`](assembly::Layer)s.
//! * [`Camera`](camera::Camera) orbits the cube and
//!   [projects](camera::Camera::project) scene points onto the screen.
//! * [`render`] sorts and projects cubelets and issues draw calls to a
//!   [`Canvas`](render::Canvas), which is implemented elsewhere (for example by a
//!   terminal front end).
//! * [`Session`](session::Session) ties these together and interprets
//!   [`InputEvent`](input::InputEvent)s.
//!
//! All state is owned by a single [`Session`](session::Session) and mutated
//! synchronously; nothing here spawns threads or blocks.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

pub mod assembly;
pub mod camera;
mod color;
pub use color::StickerColor;
pub mod cubelet;
pub mod input;
pub mod render;
pub mod session;

/// Mathematical utilities and decisions.
pub mod math {
    pub use ascii_rubik_base::math::*;
}

// reexport for convenience of dependents
#[doc(hidden)]
pub use ascii_rubik_base::euclid;
