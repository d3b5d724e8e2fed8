extern crate keyframe_spline;

use keyframe_spline::{Knot, Spline};

fn main() {
    let mut spline = Spline::new();
    spline.add(Knot::new(0.0, 1.0));
    spline.add(Knot::new(1.0, -1.0));
    spline.add(Knot::new(2.0, 0.0));
    spline.add(Knot::new(4.0, 3.0));
    spline.add(Knot::new(5.0, 1.0));
    spline.add(Knot::new(6.0, 1.0));

    let x_min = spline.min_x().unwrap();
    let x_max = spline.max_x().unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2}", x, spline.interpolate(x).unwrap());
    }
}
