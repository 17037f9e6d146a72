/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in `[0, 1)` drawn from the xorshift32 stream.
#[inline]
pub fn next_unit(state: &mut u32) -> f32 {
    // Top 24 bits fit exactly in an f32 mantissa.
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Xorshift has a fixed point at zero.
#[inline]
pub fn sanitize_seed(seed: u32) -> u32 {
    if seed == 0 { 0x9E37_79B9 } else { seed }
}
