use std::cmp::{max, min};

use crate::band::{band_covers, band_end, simplify_bands};
use crate::error::{RegionError, Result};
use crate::rect::Rect;
use crate::region::{reserve, RectVec, Region};

/// Stores `src` united with `rect` into `dst`.
///
/// `dst` keeps its previous content if the operation fails. To unite a
/// region with a rectangle in place, use [`Region::union_rect`].
pub fn union_rect(dst: &mut Region, src: &Region, rect: &Rect) -> Result<()> {
    if rect.is_empty() {
        return dst.copy_from(src);
    }
    let (rects, extents) = build_union(src, rect)?;
    dst.install(rects, extents);
    Ok(())
}

/// Copies a band at a new vertical span.
fn push_band(dst: &mut RectVec, band: &[Rect], top: u16, bottom: u16) {
    dst.extend(band.iter().map(|item| Rect {
        top,
        bottom,
        ..*item
    }));
}

/// Copies a band at a new vertical span, merged with the columns of `rect`.
///
/// ```text
///                   rect
///               |          |
/// ==============+==========+=======================
///   |Item1|  |Item2| |Item3|  |Item4|    |Item5|   band
/// ==============+==========+=======================
///    before     | overlap  |          after
///
///   +-----+  +-----------------------+    +-----+
///   |Item1|  |         Item2         |    |Item3|
///   +-----+  +-----------------------+    +-----+
/// ```
///
/// Items touching `rect` on either side are absorbed into the merged item so
/// that no two items of the band end up touching.
fn push_band_with_union(dst: &mut RectVec, band: &[Rect], top: u16, bottom: u16, rect: &Rect) {
    let mut items = band.iter().peekable();

    while let Some(item) = items.next_if(|item| item.right < rect.left) {
        dst.push(Rect { top, bottom, ..*item });
    }

    let mut merged = Rect {
        top,
        bottom,
        ..*rect
    };
    while let Some(item) = items.next_if(|item| item.left <= rect.right) {
        merged.left = min(merged.left, item.left);
        merged.right = max(merged.right, item.right);
    }
    dst.push(merged);

    for item in items {
        dst.push(Rect { top, bottom, ..*item });
    }
}

/// Builds the rectangles of `src` united with a non-empty `rect`.
///
/// Returns the new rectangles, already simplified, and their extents.
pub(crate) fn build_union(src: &Region, rect: &Rect) -> Result<(RectVec, Rect)> {
    let mut dst = RectVec::new();

    if src.is_empty() {
        reserve(&mut dst, 1)?;
        dst.push(*rect);
        return Ok((dst, *rect));
    }

    let src_rects = src.rects();
    let src_extents = src.extents();

    // every band can be split in three and followed by a sliver, plus the
    // slivers above and below the source
    let capacity = src_rects
        .len()
        .checked_add(1)
        .and_then(|n| n.checked_mul(4))
        .ok_or(RegionError::CapacityOverflow)?;
    reserve(&mut dst, capacity)?;

    if rect.top < src_extents.top {
        dst.push(Rect {
            bottom: min(src_extents.top, rect.bottom),
            ..*rect
        });
    }

    let mut start = 0;
    while start < src_rects.len() {
        let end = band_end(src_rects, start);
        let band = &src_rects[start..end];
        let band_top = band[0].top;
        let band_bottom = band[0].bottom;

        if band_bottom <= rect.top || rect.bottom <= band_top || band_covers(band, rect) {
            push_band(&mut dst, band, band_top, band_bottom);
        } else {
            let merge_top = max(band_top, rect.top);
            let merge_bottom = min(band_bottom, rect.bottom);

            if band_top < merge_top {
                push_band(&mut dst, band, band_top, merge_top);
            }
            push_band_with_union(&mut dst, band, merge_top, merge_bottom, rect);
            if merge_bottom < band_bottom {
                push_band(&mut dst, band, merge_bottom, band_bottom);
            }
        }

        // part of rect falling between this band and the next one
        if let Some(next) = src_rects.get(end) {
            if next.top != band_bottom && rect.bottom > band_bottom && rect.top < next.top {
                dst.push(Rect {
                    top: max(rect.top, band_bottom),
                    bottom: min(next.top, rect.bottom),
                    ..*rect
                });
            }
        }

        start = end;
    }

    if src_extents.bottom < rect.bottom {
        dst.push(Rect {
            top: max(src_extents.bottom, rect.top),
            ..*rect
        });
    }

    simplify_bands(&mut dst);
    Ok((dst, src_extents.bounding(rect)))
}
