use roundoff::*;

fn main() {
    println!("=== Series forms, limit 1 - ln 2 = {SERIES_LIMIT:.8} ===");
    println!("{}", SeriesRow::<f64>::HEADER);
    println!("{}", "-".repeat(80));
    for row in series_table::<f64>(&[10, 100, 1000, 10000]).unwrap() {
        println!("{row}");
    }

    // -- Log-spaced sweep (N, err1, err2) --
    println!("\n=== Relative errors vs N ===");
    println!("N\tErr1\t\tErr2");
    let ns = logspace_orders(0.0, 4.0, 50);
    for e in series_relative_errors::<f64>(&ns).unwrap() {
        println!("{}\t{:.2e}\t{:.2e}", e.n, e.err1, e.err2);
    }
}
