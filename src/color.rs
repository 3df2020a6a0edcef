use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Heat gradient: normalised intensity → Color32
// ---------------------------------------------------------------------------

/// A colour stop at position `0.0..=1.0` along the gradient.
#[derive(Debug, Clone, Copy)]
pub struct GradientStop {
    pub position: f32,
    pub color: Srgb<u8>,
}

/// Piecewise-linear colour ramp, interpolated in linear RGB.
#[derive(Debug, Clone)]
pub struct HeatGradient {
    stops: Vec<GradientStop>,
}

impl Default for HeatGradient {
    /// Dark indigo through magenta and orange to pale yellow.
    fn default() -> Self {
        Self::new(vec![
            GradientStop { position: 0.0, color: Srgb::new(0x0d, 0x08, 0x87) },
            GradientStop { position: 0.2, color: Srgb::new(0x53, 0x02, 0xa3) },
            GradientStop { position: 0.4, color: Srgb::new(0x8b, 0x0a, 0xa5) },
            GradientStop { position: 0.6, color: Srgb::new(0xdb, 0x5c, 0x68) },
            GradientStop { position: 0.8, color: Srgb::new(0xfe, 0xbd, 0x2a) },
            GradientStop { position: 1.0, color: Srgb::new(0xf0, 0xf9, 0x21) },
        ])
    }
}

impl HeatGradient {
    /// Build from stops in any order; they are sorted by position.
    pub fn new(mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self { stops }
    }

    /// Colour at `t`, clamped to the gradient's range.
    pub fn sample(&self, t: f32) -> Color32 {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color32::GRAY;
        };
        let t = if t.is_nan() { 0.0 } else { t };
        if t <= first.position {
            return to_color32(first.color);
        }
        if t >= last.position {
            return to_color32(last.color);
        }

        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.position {
                let span = hi.position - lo.position;
                let factor = if span > 0.0 { (t - lo.position) / span } else { 1.0 };
                let a: LinSrgb = lo.color.into_format::<f32>().into_linear();
                let b: LinSrgb = hi.color.into_format::<f32>().into_linear();
                let mixed: Srgb<f32> = Srgb::from_linear(a.mix(b, factor));
                return to_color32(mixed.into_format::<u8>());
            }
        }
        to_color32(last.color)
    }
}

fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}
