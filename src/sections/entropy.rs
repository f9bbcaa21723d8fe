//! Entropy section - Shannon information estimate of the password.

use std::collections::HashMap;

const DECIMALS: u32 = 2;

/// Round a floating point value to `decimals` decimal places.
fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Estimates total information content in bits.
///
/// Per-symbol Shannon entropy of the password's own character distribution,
/// multiplied by its length and rounded to two decimal places. The empty
/// string yields exactly `0.0`.
///
/// This rewards length and distinct characters only; a shuffled dictionary
/// word scores the same as random text with the same symbol frequencies.
pub fn entropy_section(password: &str) -> f64 {
    let mut frequency: HashMap<char, usize> = HashMap::new();
    let mut length = 0usize;
    for c in password.chars() {
        *frequency.entry(c).or_insert(0) += 1;
        length += 1;
    }

    if length == 0 {
        return 0.0;
    }

    let len = length as f64;
    let per_symbol: f64 = frequency
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum();

    round_f64(per_symbol * len, DECIMALS)
}
