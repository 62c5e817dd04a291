//! CSS-like color parsing into normalized RGBA.
//!
//! Parsing never fails loudly: anything we can't read becomes fully
//! transparent black, so a bad color in a style hides pixels instead of
//! interrupting a render.

use serde::Serialize;

/// Color with 8-bit channels and fractional alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Lowercase `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation in RGB space. `t` is clamped to [0, 1].
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let lerp_u8 =
            |a: u8, b: u8| -> u8 { ((a as f64) * (1.0 - t) + (b as f64) * t).round() as u8 };

        Rgba {
            r: lerp_u8(self.r, other.r),
            g: lerp_u8(self.g, other.g),
            b: lerp_u8(self.b, other.b),
            a: self.a * (1.0 - t) + other.a * t,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::TRANSPARENT
    }
}

/// Parse a color string and apply `opacity` as its alpha.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()`,
/// `hsl()`/`hsla()` and CSS named colors. Any alpha carried by the string
/// itself is replaced by `opacity`. Unparseable input yields
/// [`Rgba::TRANSPARENT`].
pub fn parse_color(color: &str, opacity: f64) -> Rgba {
    let opacity = if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    };

    match parse_rgb(color) {
        Some((r, g, b)) => Rgba::new(r, g, b, opacity),
        None => Rgba::TRANSPARENT,
    }
}

fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let s = color.trim().to_ascii_lowercase();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some(args) = function_args(&s, &["rgba", "rgb"]) {
        return parse_rgb_function(args);
    }

    if let Some(args) = function_args(&s, &["hsla", "hsl"]) {
        return parse_hsl_function(args);
    }

    named_color(&s)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // #rgb and #rgba: each nibble is doubled
        3 | 4 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some((nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 | 8 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Returns the text between the parentheses of `name(...)`.
fn function_args<'a>(s: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        s.strip_prefix(*name)?
            .trim_start()
            .strip_prefix('(')?
            .strip_suffix(')')
    })
}

fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

fn parse_rgb_function(args: &str) -> Option<(u8, u8, u8)> {
    let parts = split_args(args);
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |part: &str| -> Option<u8> {
        let value = match part.strip_suffix('%') {
            Some(pct) => pct.parse::<f64>().ok()? * 2.55,
            None => part.parse::<f64>().ok()?,
        };
        if !value.is_finite() {
            return None;
        }
        Some(value.round().clamp(0.0, 255.0) as u8)
    };

    // The alpha component, if any, must still be well-formed
    if let Some(&alpha) = parts.get(3) {
        let alpha = alpha.strip_suffix('%').unwrap_or(alpha);
        alpha.parse::<f64>().ok()?;
    }

    Some((channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
}

fn parse_hsl_function(args: &str) -> Option<(u8, u8, u8)> {
    let parts = split_args(args);
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let hue = parts[0].strip_suffix("deg").unwrap_or(parts[0]);
    let h = hue.parse::<f64>().ok()?.rem_euclid(360.0) / 360.0;
    let s = parts[1].strip_suffix('%')?.parse::<f64>().ok()?.clamp(0.0, 100.0) / 100.0;
    let l = parts[2].strip_suffix('%')?.parse::<f64>().ok()?.clamp(0.0, 100.0) / 100.0;

    if !h.is_finite() {
        return None;
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let hue_to_channel = |mut t: f64| -> u8 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Some((
        hue_to_channel(h + 1.0 / 3.0),
        hue_to_channel(h),
        hue_to_channel(h - 1.0 / 3.0),
    ))
}

fn named_color(name: &str) -> Option<(u8, u8, u8)> {
    let rgb = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "lime" => (0, 255, 0),
        "green" => (0, 128, 0),
        "darkgreen" => (0, 100, 0),
        "forestgreen" => (34, 139, 34),
        "olive" => (128, 128, 0),
        "olivedrab" => (107, 142, 35),
        "yellowgreen" => (154, 205, 50),
        "blue" => (0, 0, 255),
        "navy" => (0, 0, 128),
        "darkblue" => (0, 0, 139),
        "steelblue" => (70, 130, 180),
        "skyblue" => (135, 206, 235),
        "teal" => (0, 128, 128),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "purple" => (128, 0, 128),
        "indigo" => (75, 0, 130),
        "violet" => (238, 130, 238),
        "yellow" => (255, 255, 0),
        "gold" => (255, 215, 0),
        "orange" => (255, 165, 0),
        "darkorange" => (255, 140, 0),
        "orangered" => (255, 69, 0),
        "tomato" => (255, 99, 71),
        "coral" => (255, 127, 80),
        "salmon" => (250, 128, 114),
        "crimson" => (220, 20, 60),
        "maroon" => (128, 0, 0),
        "darkred" => (139, 0, 0),
        "firebrick" => (178, 34, 34),
        "brown" => (165, 42, 42),
        "sienna" => (160, 82, 45),
        "chocolate" => (210, 105, 30),
        "tan" => (210, 180, 140),
        "beige" => (245, 245, 220),
        "wheat" => (245, 222, 179),
        "khaki" => (240, 230, 140),
        "pink" => (255, 192, 203),
        "silver" => (192, 192, 192),
        "lightgray" | "lightgrey" => (211, 211, 211),
        "gray" | "grey" => (128, 128, 128),
        "darkgray" | "darkgrey" => (169, 169, 169),
        "dimgray" | "dimgrey" => (105, 105, 105),
        _ => return None,
    };
    Some(rgb)
}
