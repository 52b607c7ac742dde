//! Draws **Maurer roses**: straight chords joining points of the rose curve
//! `r = sin(n·θ)` taken every `d` degrees, optionally with the smooth rose
//! itself traced on top, and writes the result as SVG.
//!
//! ```no_run
//! use maurer_rose::{RoseConfig, render};
//!
//! let config = RoseConfig::new("rose.svg", 4, 67).with_curve(true);
//! render(&config)?;
//! # Ok::<(), maurer_rose::errors::RenderError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod io;
pub mod render;
pub mod rose;
pub mod scene;
pub mod style;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::RoseConfig;
pub use geometry::{Line, Point};
pub use render::{build_scene, render};
pub use scene::Scene;
