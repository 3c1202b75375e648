//! Print the path elements produced by a few shapes.

use tkgeom::{AnyShape, Path, Point, Rect, Shape};

fn main() {
    let mut wedge = Path::new();
    wedge.line_to(Point::new(4.0, 0.0));
    wedge.quad_curve_to(Point::new(4.0, 4.0), Point::new(0.0, 4.0));
    wedge.close();

    let shapes: Vec<AnyShape> = vec![Rect::new(1.0, 1.0, 3.0, 2.0).into(), wedge.into()];

    for shape in &shapes {
        let path = shape.path();
        for element in &path {
            let [a, b, c] = element.points();
            println!("{:<15} {} {} {}", element.kind().to_string(), a, b, c);
        }
        println!("pen at {}", path.last_point());
    }
}
