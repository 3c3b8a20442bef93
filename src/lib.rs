//! Regions of a 16-bit plane stored as y-x banded rectangles.
//!
//! A [`Region`] collects damage rectangles as they arrive with
//! [`Region::union_rect`], then gets clipped to a surface with
//! [`Region::intersect_rect`] before its rectangles are redrawn or encoded.
//!
//! ```
//! use region16::{Rect, Region};
//!
//! let mut damage = Region::new();
//! damage.union_rect(&Rect::new(0, 101, 200, 201))?;
//! damage.union_rect(&Rect::new(150, 151, 250, 251))?;
//! assert_eq!(damage.len(), 3);
//!
//! damage.intersect_rect(&Rect::new(170, 151, 600, 301))?;
//! assert_eq!(damage.rects(), &[Rect::new(170, 151, 250, 251)]);
//! # Ok::<(), region16::RegionError>(())
//! ```
#[macro_use]
extern crate log;

mod band;
mod error;
mod intersect;
mod rect;
mod region;
mod union;

pub use band::Bands;
pub use error::{RegionError, Result};
pub use intersect::intersect_rect;
pub use rect::Rect;
pub use region::Region;
pub use union::union_rect;
