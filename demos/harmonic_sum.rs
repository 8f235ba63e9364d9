use roundoff::*;

fn main() {
    // -- Typical N --
    println!("=== Harmonic sum, f64 ===");
    println!("{}", HarmonicRow::<f64>::HEADER);
    for row in harmonic_table::<f64>(&[10, 100, 1000, 10000]).unwrap() {
        println!("{row}");
    }

    println!("\n=== Harmonic sum, f32 ===");
    println!("{}", HarmonicRow::<f32>::HEADER);
    for row in harmonic_table::<f32>(&[10, 1000, 100000, 1000000]).unwrap() {
        println!("{row}");
    }

    // -- Log-spaced sweep (N, relative difference) --
    println!("\n=== Relative difference vs N ===");
    println!("N\tdifference");
    for n in logspace_orders(0.0, 4.0, 50) {
        match relative_difference::<f64>(n) {
            Ok(d) => println!("{n}\t{d:.3e}"),
            Err(e) => println!("{n}\t{e}"),
        }
    }
}
