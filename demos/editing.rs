extern crate keyframe_spline;

use keyframe_spline::{Knot, Spline};

fn main() {
    let mut spline = Spline::new();
    for (x, y) in [(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 1.0)] {
        spline.add(Knot::new(x, y));
    }

    println!("initial curve: S(1.5) = {:.4}", spline.interpolate(1.5).unwrap());

    spline.remove_at_x(2.0);
    println!(
        "after removing (2, 4): S(1.5) = {:.4}",
        spline.interpolate(1.5).unwrap()
    );

    spline.add(Knot::new(2.0, -4.0));
    println!(
        "after adding (2, -4): S(1.5) = {:.4}",
        spline.interpolate(1.5).unwrap()
    );

    if !spline.add(Knot::new(2.0, 10.0)) {
        println!("a knot at x = 2 already exists, insertion rejected");
    }
}
