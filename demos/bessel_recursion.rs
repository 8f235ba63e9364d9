use roundoff::*;

fn main() {
    let lmax = 25;
    let x_values = [0.1_f64, 1.0, 10.0];

    for x in x_values {
        // -- Full comparison table --
        println!("\n=== x = {x}, lmax = {lmax} ===");
        println!("{}", BesselRow::<f64>::HEADER);
        for row in bessel_comparison(x, lmax, StartOrder::default()).unwrap() {
            println!("{row}");
        }

        // -- Selected orders --
        println!("\nx = {x}:");
        println!("l\tUp\t\tDown\t\tReference");
        println!("{}", "-".repeat(50));
        for l in [3, 5, 8] {
            let up = bessel_up(x, l).unwrap()[l];
            let down = bessel_down(x, l, StartOrder::default()).unwrap()[l];
            let reference = spherical_jn(l, x).unwrap();
            println!("{l}\t{up:.6e}\t{down:.6e}\t{reference:.6e}");
        }
    }

    // -- Starting margin at large x --
    println!("\n=== x = 30, downward margin ===");
    let reference = spherical_jn_table(30.0_f64, lmax).unwrap();
    for margin in [DEFAULT_START_MARGIN, 25, 40] {
        let down = bessel_down(30.0_f64, lmax, StartOrder::Margin(margin)).unwrap();
        let worst = down
            .iter()
            .zip(&reference)
            .filter_map(|(&d, &r)| utils::relative_error(d, r).ok())
            .fold(0.0, f64::max);
        println!("margin {margin}: max relative error {worst:.2e}");
    }
}
