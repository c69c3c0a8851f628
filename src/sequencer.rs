use crate::keys::{enabled_keys, Key};
use rand::Rng;

/// Draws the next target key uniformly from the set enabled at `level`.
/// Total: the enabled set is never empty, so this always yields a key.
pub fn next_key(level: u8) -> Key {
    next_key_with(level, &mut rand::thread_rng())
}

pub fn next_key_with<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Key {
    let keys = enabled_keys(level);
    keys[rng.gen_range(0..keys.len())]
}
