use crate::band::simplify_bands;
use crate::error::Result;
use crate::rect::Rect;
use crate::region::{reserve, RectVec, Region};

/// Stores the part of `src` lying inside `rect` into `dst`.
///
/// `dst` keeps its previous content if the operation fails. To clip a
/// region in place, use [`Region::intersect_rect`].
pub fn intersect_rect(dst: &mut Region, src: &Region, rect: &Rect) -> Result<()> {
    let (rects, extents) = build_intersection(src, rect)?;
    dst.install(rects, extents);
    Ok(())
}

/// Builds the rectangles of `src` clipped to `rect`, with their extents.
pub(crate) fn build_intersection(src: &Region, rect: &Rect) -> Result<(RectVec, Rect)> {
    let mut dst = RectVec::new();
    let src_rects = src.rects();

    match src_rects.len() {
        0 => Ok((dst, Rect::EMPTY)),
        1 => match src.extents().intersection(rect) {
            Some(common) => {
                reserve(&mut dst, 1)?;
                dst.push(common);
                Ok((dst, common))
            }
            None => Ok((dst, Rect::EMPTY)),
        },
        n => {
            reserve(&mut dst, n)?;
            let mut extents: Option<Rect> = None;

            // clipped bands keep their order; merging the ones that became
            // identical is left to simplify_bands
            for item in src_rects.iter().take_while(|item| item.top < rect.bottom) {
                if let Some(common) = item.intersection(rect) {
                    dst.push(common);
                    extents = Some(match extents {
                        Some(current) => current.bounding(&common),
                        None => common,
                    });
                }
            }

            simplify_bands(&mut dst);
            Ok((dst, extents.unwrap_or(Rect::EMPTY)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region_of(rects: &[Rect]) -> Region {
        let mut region = Region::new();
        region.union_rects(rects).unwrap();
        region
    }

    #[test]
    fn empty_source_gives_empty_result() {
        let mut region = Region::new();
        region.intersect_rect(&Rect::new(0, 0, 10, 10)).unwrap();
        assert!(region.is_empty());
        assert_eq!(region.extents(), Rect::EMPTY);
    }

    #[test]
    fn single_rect_fast_path() {
        let mut region = region_of(&[Rect::new(0, 0, 100, 100)]);
        region.intersect_rect(&Rect::new(50, 60, 200, 70)).unwrap();
        assert_eq!(region.rects(), &[Rect::new(50, 60, 100, 70)]);
        assert_eq!(region.extents(), Rect::new(50, 60, 100, 70));

        region.intersect_rect(&Rect::new(0, 0, 50, 50)).unwrap();
        assert!(region.is_empty());
        assert_eq!(region.extents(), Rect::EMPTY);
    }

    #[test]
    fn clipping_everything_away() {
        let mut region = region_of(&[Rect::new(0, 0, 10, 10), Rect::new(20, 20, 30, 30)]);
        region.intersect_rect(&Rect::new(12, 0, 18, 40)).unwrap();
        assert!(region.is_empty());
        assert_eq!(region.extents(), Rect::EMPTY);
    }

    #[test]
    fn extents_are_tight_after_clipping() {
        let src = region_of(&[
            Rect::new(0, 0, 10, 10),
            Rect::new(20, 0, 30, 10),
            Rect::new(5, 20, 8, 30),
        ]);
        let mut dst = Region::new();
        intersect_rect(&mut dst, &src, &Rect::new(6, 5, 25, 25)).unwrap();
        assert_eq!(
            dst.rects(),
            &[
                Rect::new(6, 5, 10, 10),
                Rect::new(20, 5, 25, 10),
                Rect::new(6, 20, 8, 25),
            ]
        );
        assert_eq!(dst.extents(), Rect::new(6, 5, 25, 25));
        assert_eq!(src.len(), 3);
    }

    #[test]
    fn clipping_merges_bands_that_became_identical() {
        let mut region = region_of(&[Rect::new(0, 0, 10, 10), Rect::new(0, 10, 20, 20)]);
        assert_eq!(region.len(), 2);
        region.intersect_rect(&Rect::new(0, 0, 10, 20)).unwrap();
        assert_eq!(region.rects(), &[Rect::new(0, 0, 10, 20)]);
    }

    #[test]
    fn empty_clip_rect() {
        let mut region = region_of(&[Rect::new(0, 0, 10, 10), Rect::new(0, 20, 10, 30)]);
        region.intersect_rect(&Rect::new(5, 5, 5, 25)).unwrap();
        assert!(region.is_empty());
    }
}
