use lazy_static::lazy_static;

use crate::big_integer::BigInteger;

/// Largest absolute value served from the constant caches.
pub(crate) const MAX_CACHED: usize = 16;

lazy_static! {
    pub(crate) static ref SMALL_POS: [BigInteger; MAX_CACHED + 1] = small_values(false);
    pub(crate) static ref SMALL_NEG: [BigInteger; MAX_CACHED + 1] = small_values(true);
}

fn small_values(negative: bool) -> [BigInteger; MAX_CACHED + 1] {
    std::array::from_fn(|value| BigInteger::from_single_word(value as u32, negative))
}
