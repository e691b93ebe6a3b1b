use std::f32::consts::FRAC_PI_3;

/// 8-bit RGB color as uploaded to the vertex buffer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from unit-range components, rounding to the nearest byte.
    ///
    /// Components are clamped to [0, 1]; NaN maps to 0.
    #[inline]
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        Self::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Color of the rim vertex at `index` for a fan with the given angle step.
///
/// The vertex angle `angle_step * index` (radians) is used directly as the HSV
/// hue, with saturation and value fixed at 1.
pub fn calc_color(angle_step: f32, index: u32) -> Rgb8 {
    let hue = angle_step * index as f32;
    hue_to_rgb(hue / FRAC_PI_3)
}

/// HSV to RGB with S = V = 1, for a hue expressed in sextants (`H' = H / 60°`).
///
/// `h_prime` is wrapped into [0, 6) first, so hues past a full turn repeat the
/// wheel instead of falling outside every sextant. Sextant boundaries are
/// `[0,1], (1,2], (2,3], (3,4], (4,5], (5,6)`.
pub fn hue_to_rgb(h_prime: f32) -> Rgb8 {
    let h = h_prime.rem_euclid(6.0);
    let x = 1.0 - ((h % 2.0) - 1.0).abs();

    let (r, g, b) = match sextant(h) {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };

    Rgb8::from_unit(r, g, b)
}

/// Index of the sextant containing `h` (expected in [0, 6]).
fn sextant(h: f32) -> u8 {
    if h <= 1.0 {
        0
    } else {
        (h.ceil() as u8).saturating_sub(1).min(5)
    }
}
