#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Multiplies every channel, saturating at the 8-bit range.
    pub fn scale(self, factor: f32) -> Color {
        Color {
            r: to_channel(self.r as f32 * factor),
            g: to_channel(self.g as f32 * factor),
            b: to_channel(self.b as f32 * factor),
        }
    }

    /// Perceived brightness (ITU-R BT.601 weights), 0..=255.
    pub fn luminance(self) -> f32 {
        self.r as f32 * 0.299 + self.g as f32 * 0.587 + self.b as f32 * 0.114
    }
}

/// Rounds and clamps a float channel into a byte. NaN maps to 0.
#[inline(always)]
pub fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
