//! File export of [`Scene`](crate::scene::Scene)s in [SVG]
//!
//! [SVG]: https://en.wikipedia.org/wiki/SVG

pub mod svg;
