// File: crates/plot-core/src/theme.rs
// Summary: Plot styles (light/dark), the series palette and face shading helpers.

use skia_safe as skia;

/// Series colours, assigned by series index modulo the palette length.
pub const PALETTE: [skia::Color; 4] = [
    skia::Color::new(0xFF_D2_00_6B), // (210, 0, 107)
    skia::Color::new(0xFF_FF_6C_00), // (255, 108, 0)
    skia::Color::new(0xFF_00_9E_8E), // (0, 158, 142)
    skia::Color::new(0xFF_95_EC_00), // (149, 236, 0)
];

#[derive(Clone, Copy, Debug)]
pub struct PlotStyle {
    pub name: &'static str,
    pub background: skia::Color,
    pub frame: skia::Color,
    pub grid: skia::Color,
    pub grid_width: f32,
    pub zero_line: skia::Color,
    pub legend_background: skia::Color,
    pub outline: skia::Color,
    pub text: skia::Color,
    pub palette: [skia::Color; 4],
}

impl PlotStyle {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(255, 160, 160, 160),
            grid_width: 1.0,
            zero_line: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(255, 255, 255, 255),
            outline: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 20, 20, 30),
            palette: PALETTE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            grid: skia::Color::from_argb(255, 70, 70, 78),
            grid_width: 1.0,
            zero_line: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(255, 30, 30, 34),
            outline: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 235, 235, 245),
            palette: PALETTE,
        }
    }

    /// Colour of series `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for PlotStyle {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in style presets.
pub fn presets() -> Vec<PlotStyle> {
    vec![PlotStyle::light(), PlotStyle::dark()]
}

/// Find a style by its `name`, falling back to light.
pub fn find(name: &str) -> PlotStyle {
    for s in presets() { if s.name.eq_ignore_ascii_case(name) { return s; } }
    PlotStyle::light()
}

// ---- shading ------------------------------------------------------------------

/// HSV with hue in degrees and saturation/value on a 0..=255 scale.
fn to_hsv(c: skia::Color) -> (f64, f64, f64) {
    let (r, g, b) = (c.r() as f64, c.g() as f64, c.b() as f64);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max * 255.0 };
    (h, s, max)
}

fn from_hsv(alpha: u8, h: f64, s: f64, v: f64) -> skia::Color {
    let s = (s / 255.0).clamp(0.0, 1.0);
    let v = v.clamp(0.0, 255.0);
    let c = v * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    let ch = |u: f64| (u + m).round().clamp(0.0, 255.0) as u8;
    skia::Color::from_argb(alpha, ch(r), ch(g), ch(b))
}

/// Brighten by `factor` percent (130 = 30% brighter). Once value saturates, saturation drops instead.
pub fn lighter(c: skia::Color, factor: u32) -> skia::Color {
    if factor == 0 {
        return c;
    }
    if factor < 100 {
        return darker(c, 10_000 / factor);
    }
    let (h, mut s, mut v) = to_hsv(c);
    v = v * factor as f64 / 100.0;
    if v > 255.0 {
        s = (s - (v - 255.0)).max(0.0);
        v = 255.0;
    }
    from_hsv(c.a(), h, s, v)
}

/// Darken by `factor` percent (140 = value divided by 1.4).
pub fn darker(c: skia::Color, factor: u32) -> skia::Color {
    if factor == 0 {
        return c;
    }
    if factor < 100 {
        return lighter(c, 10_000 / factor);
    }
    let (h, s, v) = to_hsv(c);
    from_hsv(c.a(), h, s, v * 100.0 / factor as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighter_saturates_value_then_desaturates() {
        let top = lighter(PALETTE[0], 130);
        assert_eq!(top.r(), 255);
        assert!(top.g() > 0 && top.b() > PALETTE[0].b());
        assert_eq!(top.a(), 255);
    }

    #[test]
    fn darker_scales_value() {
        let side = darker(PALETTE[0], 140);
        assert_eq!((side.r(), side.g()), (150, 0));
        let grey = darker(skia::Color::from_rgb(140, 140, 140), 140);
        assert_eq!(grey, skia::Color::from_rgb(100, 100, 100));
    }

    #[test]
    fn find_falls_back_to_light() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("solarized").name, "light");
    }
}
