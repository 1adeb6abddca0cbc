use rand::TryRngCore;

/// Returns a uniformly distributed index in `0..bound`.
///
/// Draws 64-bit values and rejects those in the incomplete top bucket, so
/// every index is equally likely. `bound` must be non-zero.
pub fn uniform_index<R>(rng: &mut R, bound: usize) -> Result<usize, R::Error>
where
    R: TryRngCore + ?Sized,
{
    debug_assert!(bound > 0, "bound must be non-zero");
    let bound = bound as u64;
    // Largest multiple of `bound` that fits, minus one.
    let zone = u64::MAX - (u64::MAX - bound + 1) % bound;

    loop {
        let value = rng.try_next_u64()?;
        if value <= zone {
            return Ok((value % bound) as usize);
        }
    }
}
