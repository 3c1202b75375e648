//! Dirty-region tracking.
//!
//! Areas of a surface that need a redraw are kept as a list of rectangles.
//! [`merge_rect`] folds a new rectangle into such a list and keeps it small:
//! rectangles already covered are dropped, and intersecting ones are fused
//! into their bounding box.
//!
//! This is a heuristic. The resulting list covers the union of everything
//! merged into it, but it is not a minimal rectangle decomposition, and the
//! bounding boxes may cover more area than the inputs did.

use crate::geometry::Rect;
use crate::log::trace;

/// Merge `rect` into `list` and return the updated list.
///
/// The first rule that applies wins:
///
/// 1. If a rectangle of the list contains `rect`, the list is returned as is.
/// 2. Otherwise, the first rectangle (in list order) that intersects `rect`
///    is replaced by the bounding box of both. Every other rectangle is then
///    merged back one by one into the new list, so that the grown rectangle
///    can absorb neighbours it now overlaps.
/// 3. Otherwise `rect` is appended.
///
/// The first intersecting rectangle is used even when another candidate would
/// give a smaller merged area; the resulting order is part of the contract.
///
/// The input list is consumed: use the returned value.
pub fn merge_rect(list: Vec<Rect>, rect: Rect) -> Vec<Rect> {
    if list.iter().any(|r| r.contains_rect(rect)) {
        trace!(%rect, "merge_rect: already covered");
        return list;
    }

    let hit = list.iter().position(|r| !r.intersect(rect).is_empty());

    match hit {
        Some(index) => {
            let merged = list[index].merge(rect);
            trace!(%rect, index, %merged, "merge_rect: merged with intersecting rect");

            let mut out = Vec::with_capacity(list.len());
            out.push(merged);

            // Each call re-inserts strictly fewer rectangles, so the recursion
            // depth is bounded by the list length.
            for (j, r) in list.into_iter().enumerate() {
                if j != index {
                    out = merge_rect(out, r);
                }
            }
            out
        }
        None => {
            trace!(%rect, len = list.len(), "merge_rect: appended");
            let mut list = list;
            list.push(rect);
            list
        }
    }
}

/// An accumulator of dirty rectangles built on [`merge_rect`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirtyRegion {
    rects: Vec<Rect>,
}

impl DirtyRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `rect` as dirty.
    pub fn add(&mut self, rect: Rect) {
        let rects = std::mem::take(&mut self.rects);
        self.rects = merge_rect(rects, rect);
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Bounding box of every dirty rectangle, or `None` if nothing is dirty.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first.abs(), Rect::merge))
    }

    /// Hand out the dirty rectangles and reset the region.
    pub fn take(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.rects)
    }
}

impl Extend<Rect> for DirtyRegion {
    fn extend<I: IntoIterator<Item = Rect>>(&mut self, iter: I) {
        for rect in iter {
            self.add(rect);
        }
    }
}

impl FromIterator<Rect> for DirtyRegion {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        let mut region = DirtyRegion::new();
        region.extend(iter);
        region
    }
}

impl From<DirtyRegion> for Vec<Rect> {
    fn from(region: DirtyRegion) -> Self {
        region.rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[rstest]
    #[case::into_empty(vec![], r(0.0, 0.0, 1.0, 1.0), vec![r(0.0, 0.0, 1.0, 1.0)])]
    #[case::contained(vec![r(0.0, 0.0, 2.0, 2.0)], r(0.0, 0.0, 1.0, 1.0), vec![r(0.0, 0.0, 2.0, 2.0)])]
    #[case::intersecting(vec![r(0.0, 0.0, 2.0, 2.0)], r(1.0, 1.0, 2.0, 2.0), vec![r(0.0, 0.0, 3.0, 3.0)])]
    #[case::cascade(
        vec![r(0.0, 0.0, 2.0, 2.0), r(2.5, 2.5, 1.0, 1.0)],
        r(1.0, 1.0, 2.0, 2.0),
        vec![r(0.0, 0.0, 3.5, 3.5)]
    )]
    #[case::disjoint(
        vec![r(0.0, 0.0, 1.0, 1.0)],
        r(5.0, 5.0, 1.0, 1.0),
        vec![r(0.0, 0.0, 1.0, 1.0), r(5.0, 5.0, 1.0, 1.0)]
    )]
    fn merge_scenarios(#[case] list: Vec<Rect>, #[case] rect: Rect, #[case] expected: Vec<Rect>) {
        assert_eq!(merge_rect(list, rect), expected);
    }

    #[test]
    fn merging_a_covered_rect_twice_is_a_noop() {
        let list = merge_rect(vec![r(0.0, 0.0, 4.0, 4.0)], r(1.0, 1.0, 1.0, 1.0));
        let again = merge_rect(list.clone(), r(1.0, 1.0, 1.0, 1.0));
        assert_eq!(list, again);
        assert_eq!(again, vec![r(0.0, 0.0, 4.0, 4.0)]);
    }

    // Every list entry below intersects the new rect without containing it.
    // The first one (index 0) takes the merge and keeps its slot; the others
    // come back through the cascade in list order.
    #[rstest]
    #[case::two_candidates(
        vec![r(0.0, 0.0, 2.0, 2.0), r(1.5, 0.0, 2.0, 2.0)],
        r(1.0, 1.0, 1.0, 1.5),
        vec![r(0.0, 0.0, 3.5, 2.5)]
    )]
    #[case::unrelated_rect_keeps_its_order(
        vec![r(0.0, 0.0, 2.0, 2.0), r(10.0, 10.0, 1.0, 1.0), r(1.5, 0.0, 2.0, 2.0)],
        r(1.0, 1.0, 1.0, 1.5),
        vec![r(0.0, 0.0, 3.5, 2.5), r(10.0, 10.0, 1.0, 1.0)]
    )]
    fn first_intersecting_rect_wins(
        #[case] list: Vec<Rect>,
        #[case] rect: Rect,
        #[case] expected: Vec<Rect>,
    ) {
        assert!(list.iter().all(|l| !l.contains_rect(rect)));
        assert!(list.iter().filter(|l| !l.intersect(rect).is_empty()).count() >= 2);
        assert_eq!(merge_rect(list, rect), expected);
    }

    #[test]
    fn cascade_leaves_unrelated_rects_alone() {
        let list = vec![
            r(0.0, 0.0, 2.0, 2.0),
            r(10.0, 10.0, 1.0, 1.0),
            r(2.5, 2.5, 1.0, 1.0),
        ];
        let out = merge_rect(list, r(1.0, 1.0, 2.0, 2.0));
        assert_eq!(out, vec![r(0.0, 0.0, 3.5, 3.5), r(10.0, 10.0, 1.0, 1.0)]);
    }

    #[test]
    fn touching_edges_do_not_merge() {
        // Edge contact yields an empty intersection
        let out = merge_rect(vec![r(0.0, 0.0, 1.0, 1.0)], r(1.0, 0.0, 1.0, 1.0));
        assert_eq!(out, vec![r(0.0, 0.0, 1.0, 1.0), r(1.0, 0.0, 1.0, 1.0)]);
    }

    #[test]
    fn region_accumulates() {
        let mut region = DirtyRegion::new();
        assert!(region.is_empty());
        assert_eq!(region.bounds(), None);

        region.add(r(0.0, 0.0, 2.0, 2.0));
        region.add(r(5.0, 5.0, 1.0, 1.0));
        assert_eq!(region.len(), 2);

        region.add(r(1.0, 1.0, 4.5, 4.5));
        assert_eq!(region.rects(), &[r(0.0, 0.0, 6.0, 6.0)]);
        assert_eq!(region.bounds(), Some(r(0.0, 0.0, 6.0, 6.0)));
    }

    #[test]
    fn region_bounds_span_disjoint_rects() {
        let region: DirtyRegion = [r(0.0, 0.0, 1.0, 1.0), r(4.0, 2.0, 1.0, 1.0)]
            .into_iter()
            .collect();
        assert_eq!(region.len(), 2);
        assert_eq!(region.bounds(), Some(r(0.0, 0.0, 5.0, 3.0)));
    }

    #[test]
    fn region_take_and_clear() {
        let mut region = DirtyRegion::new();
        region.extend([r(0.0, 0.0, 1.0, 1.0), r(3.0, 3.0, 1.0, 1.0)]);

        let taken = region.take();
        assert_eq!(taken.len(), 2);
        assert!(region.is_empty());

        region.add(r(0.0, 0.0, 1.0, 1.0));
        region.clear();
        assert!(region.is_empty());
    }
}
