//! yz-bench: shared inputs for the scoring benchmarks.

use yz_core::Roll;

/// Deterministic pseudo-random rolls (xorshift64), no rand dependency.
pub fn gen_rolls(n: usize) -> Vec<Roll> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let mut d = [0u8; 5];
        for die in &mut d {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            *die = (x % 6) as u8 + 1;
        }
        if let Ok(r) = Roll::new(d) {
            out.push(r);
        }
    }
    out
}
