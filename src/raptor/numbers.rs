//! Integer helpers used by parameter derivation.

/// Returns true if `n` is prime.
#[must_use]
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3usize;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Returns the smallest prime greater than or equal to `n`.
#[must_use]
pub fn next_prime_ge(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }
    let mut candidate = if n % 2 == 0 { n + 1 } else { n };
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

/// `ceil(n / 2)`.
#[inline]
#[must_use]
pub const fn ceil_half(n: usize) -> usize {
    n.div_ceil(2)
}

/// Binomial coefficient `C(n, r)`, saturating at `u64::MAX`.
#[must_use]
pub fn choose(n: usize, r: usize) -> u64 {
    if r > n {
        return 0;
    }
    let r = r.min(n - r);
    let mut acc: u128 = 1;
    for i in 0..r {
        // Exact at every step: acc * (n - i) is divisible by (i + 1).
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > u128::from(u64::MAX) {
            return u64::MAX;
        }
    }
    acc as u64
}

/// Smallest `h` with `C(h, ceil(h / 2)) >= target`.
///
/// Returns `None` only if the search exceeds 64, which no target below
/// `u64::MAX` can reach.
#[must_use]
pub fn half_for(target: u64) -> Option<usize> {
    (1..=64).find(|&h| choose(h, ceil_half(h)) >= target)
}

/// Smallest `x` with `x * (x - 1) >= 2k`.
///
/// Starts from the quadratic-formula estimate `ceil((1 + sqrt(1 + 8k)) / 2)`
/// and corrects it with exact integer comparisons.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn x_for(k: usize) -> usize {
    let estimate = ((1.0 + (1.0 + 8.0 * k as f64).sqrt()) / 2.0).ceil() as usize;
    let mut x = estimate.max(1);
    while x * (x - 1) < 2 * k {
        x += 1;
    }
    while x > 1 && (x - 1) * (x - 2) >= 2 * k {
        x -= 1;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes() {
        let small: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(small, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(65_521));
        assert!(!is_prime(65_523));
    }

    #[test]
    fn next_prime_ge_basic() {
        assert_eq!(next_prime_ge(0), 2);
        assert_eq!(next_prime_ge(2), 2);
        assert_eq!(next_prime_ge(4), 5);
        assert_eq!(next_prime_ge(17), 17);
        assert_eq!(next_prime_ge(24), 29);
        assert_eq!(next_prime_ge(90), 97);
    }

    #[test]
    fn choose_values() {
        assert_eq!(choose(5, 0), 1);
        assert_eq!(choose(5, 2), 10);
        assert_eq!(choose(6, 3), 20);
        assert_eq!(choose(16, 8), 12_870);
        assert_eq!(choose(3, 4), 0);
        assert_eq!(choose(200, 100), u64::MAX);
    }

    #[test]
    fn half_search() {
        assert_eq!(half_for(1), Some(1));
        assert_eq!(half_for(20), Some(6));
        assert_eq!(half_for(21), Some(7));
        assert_eq!(half_for(12_870), Some(16));
        assert_eq!(half_for(12_871), Some(17));
    }

    #[test]
    fn x_is_minimal() {
        for k in 1..=9000 {
            let x = x_for(k);
            assert!(x * (x - 1) >= 2 * k, "k={k} x={x}");
            assert!(x < 2 || (x - 1) * (x - 2) < 2 * k, "k={k} x={x} not minimal");
        }
        assert_eq!(x_for(4), 4);
        assert_eq!(x_for(3), 3);
    }
}
