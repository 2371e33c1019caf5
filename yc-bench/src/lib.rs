//! Shared sample generation for the benches.

use yc_core::Hand;

/// Deterministic hands from a xorshift64 stream, no rand dependency.
pub fn gen_hands(n: usize) -> Vec<Hand> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let mut d = [0u8; 5];
        for die in &mut d {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            *die = (x % 6) as u8 + 1;
        }
        if let Ok(h) = Hand::from_array(d) {
            out.push(h);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gen_hands_is_deterministic() {
        let a = gen_hands(64);
        assert_eq!(a.len(), 64);
        assert_eq!(a, gen_hands(64));
    }
}
