use pm_core::Error;

/// Searches for a block edge that tiles a `width x height` container
/// evenly, starting from `round(sqrt(target_count))` and walking down to
/// the nearest common divisor of both dimensions.
///
/// The resulting block count can sit far from `target_count` when the
/// dimensions share few divisors. 1 divides everything, so the walk always
/// lands on a positive edge; a target of 0 or 1 yields unit blocks.
pub fn fit_block_size(width: usize, height: usize, target_count: usize) -> Result<usize, Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidConfig {
            what: "container dimensions must be positive",
        });
    }

    let mut k = (target_count as f64).sqrt().round() as usize;
    while k > 1 && !(width.is_multiple_of(k) && height.is_multiple_of(k)) {
        k -= 1;
    }

    Ok(k.max(1))
}
