//! End-to-end use of the public API: widgets report damage, the damage is
//! coalesced, and the coalesced rectangles are turned into a clip path.

use tkgeom::{
    AnyShape, DirtyRegion, Margin, Path, PathElement, Point, Rect, Shape, merge_rect,
    shapes_to_path,
};

fn widget_bounds() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 0.0, 100.0, 20.0),   // toolbar
        Rect::new(10.0, 5.0, 16.0, 10.0),   // toolbar button, inside the toolbar
        Rect::new(0.0, 200.0, 100.0, 20.0), // status bar
        Rect::new(90.0, 15.0, 30.0, 30.0),  // popup overlapping the toolbar
    ]
}

#[test]
fn fold_matches_region_accumulator() {
    let folded = widget_bounds()
        .into_iter()
        .fold(Vec::new(), merge_rect);

    let region: DirtyRegion = widget_bounds().into_iter().collect();

    assert_eq!(region.rects(), folded.as_slice());
    assert_eq!(
        folded,
        vec![
            Rect::new(0.0, 0.0, 120.0, 45.0),
            Rect::new(0.0, 200.0, 100.0, 20.0),
        ]
    );
}

#[test]
fn every_merged_rect_is_covered() {
    let region: DirtyRegion = widget_bounds().into_iter().collect();
    for rect in widget_bounds() {
        assert!(
            region.rects().iter().any(|r| r.contains_rect(rect)),
            "{rect} not covered by {:?}",
            region.rects()
        );
    }
}

#[test]
fn no_rect_contains_another_after_merging() {
    let region: DirtyRegion = widget_bounds().into_iter().collect();
    let rects = region.rects();
    for (i, a) in rects.iter().enumerate() {
        for (j, b) in rects.iter().enumerate() {
            if i != j {
                assert!(!a.contains_rect(*b), "{a} contains {b}");
            }
        }
    }
}

#[test]
fn padded_damage_becomes_a_clip_path() {
    let pad = Margin::uniform(1.0);
    let mut region = DirtyRegion::new();
    for mut rect in widget_bounds() {
        rect.grow(pad);
        region.add(rect);
    }

    let shapes: Vec<AnyShape> = region.take().into_iter().map(AnyShape::from).collect();
    let clip = shapes_to_path(&shapes);

    assert_eq!(clip.len(), 10);
    assert_eq!(clip.elements()[0], PathElement::MoveTo(Point::new(-1.0, -1.0)));
    assert_eq!(clip.elements()[5], PathElement::MoveTo(Point::new(-1.0, 199.0)));
    assert_eq!(clip.last_point(), Point::new(-1.0, 221.0));
    assert!(region.is_empty());
}

#[test]
fn building_paths_by_hand() {
    let mut path = Path::with_capacity(8);
    path.line_to(Point::new(1.0, 1.0));
    path.close();
    path.line_to(Point::new(1.0, 0.0));

    let kinds: Vec<_> = path.iter().map(PathElement::kind).collect();
    assert_eq!(kinds.len(), 5);
    assert_eq!(path.elements()[3], PathElement::MoveTo(Point::new(1.0, 1.0)));

    let copy = path.path();
    assert_eq!(copy, path);
}

#[test]
fn display_formats() {
    insta::assert_snapshot!(Point::new(1.5, -2.0), @"(1.5, -2)");
    insta::assert_snapshot!(Rect::new(0.0, 0.0, 120.0, 45.0), @"{ 0, 0, 120, 45 }");
    insta::assert_snapshot!(
        Margin::uniform(1.0),
        @"margin { top = 1, bottom = 1, left = 1, right = 1 }"
    );
}
