/// A RGBA `Color`. Each color component is a floating point value
/// with a range from 0 to 1.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Clamps every component into `[0, 1]`.
    pub fn clip(&self) -> Self {
        let clamp = |v: f32| v.max(0.0).min(1.0);
        Color::new(clamp(self.r), clamp(self.g), clamp(self.b), clamp(self.a))
    }

    /// The dark teal the scene is cleared to.
    #[inline]
    pub fn teal() -> Self {
        Color::new(0.2, 0.3, 0.3, 1.0)
    }
}
