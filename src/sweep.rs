//! Log-spaced integer sweeps over the number of terms.

use alloc::vec::Vec;

use num_traits::Float;

/// `count` points 10^e with e evenly spaced over `[start_exp, stop_exp]`,
/// truncated to integers.
///
/// Truncation maps several points near the low end onto the same integer;
/// consecutive duplicates are dropped so each n is evaluated once. Points
/// below 1 are dropped. `count == 1` yields only 10^start_exp.
pub fn logspace_orders(start_exp: f64, stop_exp: f64, count: usize) -> Vec<usize> {
    let mut orders: Vec<usize> = Vec::with_capacity(count);
    for i in 0..count {
        let e = if count == 1 {
            start_exp
        } else {
            start_exp + (stop_exp - start_exp) * (i as f64) / ((count - 1) as f64)
        };
        let value = Float::powf(10.0_f64, e);
        if !value.is_finite() || value < 1.0 {
            continue;
        }
        let n = value as usize;
        if orders.last() != Some(&n) {
            orders.push(n);
        }
    }
    orders
}
