/// Straight-alpha sRGB color with 8-bit channels.
///
/// This is the canonical internal representation: every parser produces it
/// and every serializer consumes it. [`Hsla`] is derived from it on demand and
/// never stored as a source of truth, which keeps repeated conversions from
/// drifting.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque black, the fallback for any input that cannot be read.
    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Builds a color from unbounded float channels, rounding and clamping
    /// `r`, `g`, `b` into `0..=255` and `a` into `[0, 1]`.
    pub fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(channel(r), channel(g), channel(b), clamp_alpha(a))
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: clamp_alpha(a), ..self }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Per-channel linear interpolation; `t` is clamped to `[0, 1]`.
    ///
    /// `r`, `g`, `b` are rounded to the nearest integer, alpha stays real.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| channel(a as f32 + (b as f32 - a as f32) * t);
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Converts to HSLA: hue in whole degrees `[0, 360)`, saturation and
    /// lightness in whole percent.
    pub fn to_hsla(self) -> Hsla {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Hsla {
            h: ((h * 360.0).round() as i32).rem_euclid(360) as u16,
            s: percent(s * 100.0),
            l: percent(l * 100.0),
            a: self.a,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::black()
    }
}

/// Hue/saturation/lightness view of an [`Rgba`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsla {
    /// Hue in whole degrees, `0..=360`.
    pub h: u16,
    /// Saturation in whole percent, `0..=100`.
    pub s: u8,
    /// Lightness in whole percent, `0..=100`.
    pub l: u8,
    pub a: f32,
}

impl Hsla {
    #[inline]
    pub const fn new(h: u16, s: u8, l: u8, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Builds an HSLA value from unbounded floats: hue wraps modulo 360,
    /// saturation and lightness clamp to `0..=100`, alpha to `[0, 1]`.
    pub fn from_f32(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self {
            h: (h.round() as i32).rem_euclid(360) as u16,
            s: percent(s as f64),
            l: percent(l as f64),
            a: clamp_alpha(a),
        }
    }

    pub fn to_rgba(self) -> Rgba {
        let h = (self.h % 360) as f64 / 360.0;
        let s = self.s.min(100) as f64 / 100.0;
        let l = self.l.min(100) as f64 / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgba::new(
            unit_to_byte(r),
            unit_to_byte(g),
            unit_to_byte(b),
            clamp_alpha(self.a),
        )
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
pub(crate) fn channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[inline]
pub(crate) fn clamp_alpha(a: f32) -> f32 {
    if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) }
}

#[inline]
fn unit_to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn percent(v: f64) -> u8 {
    v.round().clamp(0.0, 100.0) as u8
}
