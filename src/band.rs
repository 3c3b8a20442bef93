use crate::rect::Rect;
use crate::region::RectVec;

/// Returns the index one past the band that starts at `start`.
///
/// A band is a run of rectangles sharing the same `top` and `bottom`.
pub(crate) fn band_end(rects: &[Rect], start: usize) -> usize {
    let first = rects[start];
    rects[start..]
        .iter()
        .position(|r| r.top != first.top || r.bottom != first.bottom)
        .map_or(rects.len(), |offset| start + offset)
}

/// Iterator over the bands of a region, top to bottom.
///
/// Each item is the slice of rectangles forming one band, ordered left to
/// right.
#[derive(Clone, Debug)]
pub struct Bands<'a> {
    rects: &'a [Rect],
}

impl<'a> Bands<'a> {
    pub(crate) fn new(rects: &'a [Rect]) -> Self {
        Bands { rects }
    }
}

impl<'a> Iterator for Bands<'a> {
    type Item = &'a [Rect];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rects.is_empty() {
            return None;
        }
        let (band, rest) = self.rects.split_at(band_end(self.rects, 0));
        self.rects = rest;
        Some(band)
    }
}

/// Returns `true` if both bands have rectangles at the same horizontal places.
fn same_columns(band1: &[Rect], band2: &[Rect]) -> bool {
    band1.len() == band2.len()
        && band1
            .iter()
            .zip(band2)
            .all(|(a, b)| a.left == b.left && a.right == b.right)
}

/// Returns `true` if `rect` is entirely covered by a single rectangle of `band`.
pub(crate) fn band_covers(band: &[Rect], rect: &Rect) -> bool {
    let first = band[0];
    if first.top > rect.top || rect.bottom > first.bottom {
        return false;
    }

    // items are sorted left to right, nothing past rect.left can cover it
    band.iter()
        .take_while(|item| item.left <= rect.left)
        .any(|item| rect.right <= item.right)
}

/// Merges consecutive bands that touch vertically and have the same columns.
///
/// ```text
///  ====================          ====================
///     | 1 |  | 2   |               |   |  |     |
///  ====================            |   |  |     |
///     | 1 |  | 2   |       ==>     | 1 |  |  2  |
///  ====================            |   |  |     |
///     | 1 |  | 2   |               |   |  |     |
///  ====================          ====================
/// ```
///
/// Works in place in a single forward pass: surviving bands are compacted
/// toward the front while the last kept band absorbs every matching
/// successor.
pub(crate) fn simplify_bands(rects: &mut RectVec) {
    if rects.len() < 2 {
        return;
    }

    let mut write = 0;
    let mut read = 0;
    let mut last: Option<(usize, usize)> = None;

    while read < rects.len() {
        let end = band_end(rects.as_slice(), read);

        match last {
            Some((start, stop))
                if rects[start].bottom == rects[read].top
                    && same_columns(&rects[start..stop], &rects[read..end]) =>
            {
                let bottom = rects[read].bottom;
                trace!(
                    "merging band {}..{} into band starting at {}",
                    rects[read].top,
                    bottom,
                    rects[start].top
                );
                for item in &mut rects[start..stop] {
                    item.bottom = bottom;
                }
            }
            _ => {
                let len = end - read;
                if write != read {
                    rects.copy_within(read..end, write);
                }
                last = Some((write, write + len));
                write += len;
            }
        }

        read = end;
    }

    rects.truncate(write);
}
