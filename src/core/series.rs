use crate::utils::error::{Result, SumError};

/// Sum of `0..n` via the arithmetic progression identity `n(n-1)/2`.
///
/// One of `n` and `n - 1` is even; it is halved before the multiplication so
/// the only overflow possible is that of the result itself.
pub fn arithmetic_sum(n: i128) -> Result<i128> {
    let prev = n.checked_sub(1).ok_or(SumError::Overflow { n })?;
    let product = if n % 2 == 0 {
        (n / 2).checked_mul(prev)
    } else {
        n.checked_mul(prev / 2)
    };
    product.ok_or(SumError::Overflow { n })
}
