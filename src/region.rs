use smallvec::SmallVec;

use crate::band::{self, Bands};
use crate::error::{RegionError, Result};
use crate::intersect;
use crate::rect::Rect;
use crate::union;

/// Rectangles kept inline before the storage spills to the heap.
pub(crate) const INLINE_RECTS: usize = 4;

pub(crate) type RectVec = SmallVec<[Rect; INLINE_RECTS]>;

/// Grows `rects` so that `additional` more items fit without reallocating.
pub(crate) fn reserve(rects: &mut RectVec, additional: usize) -> Result<()> {
    rects.try_reserve_exact(additional).map_err(|err| {
        trace!("reserving {} rectangles failed: {:?}", additional, err);
        RegionError::from_reserve(err, additional)
    })
}

/// A set of points stored as y-x banded, non-overlapping rectangles.
///
/// Rectangles are sorted by `top`, then by `left`. Rectangles sharing
/// the same `top` and `bottom` form a band; inside a band no two rectangles
/// touch, and two bands that touch vertically never have the same columns.
/// This makes the decomposition unique for a given set of points, so two
/// regions covering the same points compare equal.
///
/// `extents` is the tight bounding box of the rectangles, or
/// [`Rect::EMPTY`] when the region is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    extents: Rect,
    rects: RectVec,
}

impl Region {
    /// Creates an empty region. Nothing is allocated.
    pub fn new() -> Self {
        Region {
            extents: Rect::EMPTY,
            rects: RectVec::new(),
        }
    }

    /// Creates a region covering exactly `rect`.
    pub fn from_rect(rect: &Rect) -> Result<Self> {
        let mut region = Region::new();
        region.union_rect(rect)?;
        Ok(region)
    }

    /// Empties the region and releases its storage.
    pub fn clear(&mut self) {
        self.rects = RectVec::new();
        self.extents = Rect::EMPTY;
    }

    /// Replaces the content of `self` with a deep copy of `src`.
    ///
    /// On failure `self` is left unchanged.
    pub fn copy_from(&mut self, src: &Region) -> Result<()> {
        let mut rects = RectVec::new();
        reserve(&mut rects, src.rects.len())?;
        rects.extend_from_slice(&src.rects);
        self.install(rects, src.extents);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn extents(&self) -> Rect {
        self.extents
    }

    pub fn bands(&self) -> Bands<'_> {
        Bands::new(&self.rects)
    }

    /// Number of points covered by the region.
    pub fn area(&self) -> u64 {
        self.rects.iter().map(Rect::area).sum()
    }

    pub fn contains_point(&self, x: u16, y: u16) -> bool {
        if !self.extents.contains_point(x, y) {
            return false;
        }
        self.rects
            .iter()
            .take_while(|r| r.top <= y)
            .any(|r| r.contains_point(x, y))
    }

    /// Adds the points of `rect` to the region.
    ///
    /// An empty `rect` leaves the region as it is. On failure the region is
    /// left unchanged.
    pub fn union_rect(&mut self, rect: &Rect) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        let (rects, extents) = union::build_union(self, rect)?;
        self.install(rects, extents);
        Ok(())
    }

    /// Adds every rectangle yielded by `rects`, stopping at the first failure.
    ///
    /// Rectangles applied before a failure stay in the region.
    pub fn union_rects<'a, I>(&mut self, rects: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Rect>,
    {
        for rect in rects {
            self.union_rect(rect)?;
        }
        Ok(())
    }

    /// Keeps only the points of the region that also lie in `rect`.
    ///
    /// On failure the region is left unchanged.
    pub fn intersect_rect(&mut self, rect: &Rect) -> Result<()> {
        let (rects, extents) = intersect::build_intersection(self, rect)?;
        self.install(rects, extents);
        Ok(())
    }

    /// Returns `true` if at least one point of the region lies in `rect`.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        match self.rects.len() {
            0 => false,
            1 => self.extents.intersects(rect),
            _ => {
                self.extents.intersects(rect)
                    && self
                        .rects
                        .iter()
                        .take_while(|r| r.top < rect.bottom)
                        .any(|r| r.intersects(rect))
            }
        }
    }

    /// Merges vertically touching bands that have the same columns.
    ///
    /// Every operation already leaves the region simplified, so this never
    /// changes a region built through this API.
    pub fn simplify(&mut self) {
        band::simplify_bands(&mut self.rects);
    }

    /// Dumps the rectangles band by band at debug level.
    pub fn log_bands(&self) {
        if !log_enabled!(log::Level::Debug) {
            return;
        }
        debug!("nrects={}", self.rects.len());
        for band in self.bands() {
            let items: Vec<String> = band.iter().map(Rect::to_string).collect();
            debug!("band {}: {}", band[0].top, items.join(" "));
        }
    }

    pub(crate) fn install(&mut self, mut rects: RectVec, extents: Rect) {
        if rects.spilled() && rects.len() <= INLINE_RECTS {
            rects.shrink_to_fit();
        }
        self.extents = if rects.is_empty() {
            Rect::EMPTY
        } else {
            extents
        };
        self.rects = rects;
    }
}
