//! Editable natural cubic spline for keyframe-like value curves.
//!
//! The spline owns an ordered set of knots which may be inserted and removed
//! between evaluations. Piecewise cubic coefficients with natural boundary
//! conditions are rebuilt lazily on the first evaluation after a change.
//!
//! # Example
//! ```
//! use keyframe_spline::{Knot, Spline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut spline = Spline::new();
//! spline.add(Knot::new(0.0, 0.0));
//! spline.add(Knot::new(1.0, 1.0));
//! spline.add(Knot::new(2.0, 0.0));
//!
//! assert_approx_eq!(1.0, spline.interpolate(1.0).unwrap(), 1e-6);
//! assert_approx_eq!(0.6875, spline.interpolate(0.5).unwrap(), 1e-6);
//!
//! spline.remove_at_x(1.0);
//! assert_approx_eq!(0.0, spline.interpolate(0.5).unwrap(), 1e-6);
//! ```

mod error;
mod knot;
mod spline;

pub use error::{SplineError, SplineResult};
pub use knot::Knot;
pub use spline::Spline;
