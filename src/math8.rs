/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    if scale == 255 {
        return value;
    }
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Add `delta` to `value`, keeping the result inside `min..=max`
#[inline]
pub const fn add_clamped(value: u8, delta: u8, min: u8, max: u8) -> u8 {
    clamp8(value.saturating_add(delta), min, max)
}

/// Subtract `delta` from `value`, keeping the result inside `min..=max`
#[inline]
pub const fn sub_clamped(value: u8, delta: u8, min: u8, max: u8) -> u8 {
    clamp8(value.saturating_sub(delta), min, max)
}

#[inline]
pub const fn clamp8(value: u8, min: u8, max: u8) -> u8 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Express an 8-bit value as a whole percentage of 255
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn percent8(value: u8) -> u8 {
    ((value as u16 * 100) / 255) as u8
}
