use std::str::FromStr;

use serde::Deserialize;

/// Straight-alpha colour with normalized `0..=1` channels.
///
/// Deserializes from a hex string (`#RGB`, `#RRGGBB`, `#RRGGBBAA`), a CSS basic colour
/// name (`"white"`, `"teal"`, ...), an `{r, g, b, a}` object or an `[r, g, b(, a)]` array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDef {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ColorDef {
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0)
    }

    /// Straight (non-premultiplied) RGBA8, the form paint colours are given in.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            unit_to_u8(self.r),
            unit_to_u8(self.g),
            unit_to_u8(self.b),
            unit_to_u8(self.a),
        ]
    }

    pub fn to_rgba8_premul(self) -> [u8; 4] {
        let a = self.a.clamp(0.0, 1.0);
        [
            unit_to_u8(self.r.clamp(0.0, 1.0) * a),
            unit_to_u8(self.g.clamp(0.0, 1.0) * a),
            unit_to_u8(self.b.clamp(0.0, 1.0) * a),
            unit_to_u8(a),
        ]
    }
}

fn unit_to_u8(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for ColorDef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return parse_hex(s);
        }
        if let Some(c) = named(s) {
            return Ok(c);
        }
        parse_hex(s).map_err(|_| format!("unknown colour \"{s}\" (expected #RRGGBB or a CSS name)"))
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                &[r, g, b] => Ok(Self::rgba(r, g, b, 1.0)),
                &[r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<ColorDef, String> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid hex colour \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    let (r, g, b, a) = match s.len() {
        3 => {
            let nib = |i: usize| hex_byte(&s[i..i + 1]).map(|v| v * 17);
            (nib(0)?, nib(1)?, nib(2)?, 255)
        }
        6 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err(
                "hex colour must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned(),
            );
        }
    };

    Ok(ColorDef::rgba(
        (r as f64) / 255.0,
        (g as f64) / 255.0,
        (b as f64) / 255.0,
        (a as f64) / 255.0,
    ))
}

// CSS level 1 keywords plus `transparent`.
fn named(name: &str) -> Option<ColorDef> {
    let c = match name.to_ascii_lowercase().as_str() {
        "black" => ColorDef::rgb8(0, 0, 0),
        "silver" => ColorDef::rgb8(192, 192, 192),
        "gray" | "grey" => ColorDef::rgb8(128, 128, 128),
        "white" => ColorDef::rgb8(255, 255, 255),
        "maroon" => ColorDef::rgb8(128, 0, 0),
        "red" => ColorDef::rgb8(255, 0, 0),
        "purple" => ColorDef::rgb8(128, 0, 128),
        "fuchsia" | "magenta" => ColorDef::rgb8(255, 0, 255),
        "green" => ColorDef::rgb8(0, 128, 0),
        "lime" => ColorDef::rgb8(0, 255, 0),
        "olive" => ColorDef::rgb8(128, 128, 0),
        "yellow" => ColorDef::rgb8(255, 255, 0),
        "navy" => ColorDef::rgb8(0, 0, 128),
        "blue" => ColorDef::rgb8(0, 0, 255),
        "teal" => ColorDef::rgb8(0, 128, 128),
        "aqua" | "cyan" => ColorDef::rgb8(0, 255, 255),
        "orange" => ColorDef::rgb8(255, 165, 0),
        "transparent" => ColorDef::rgba(0.0, 0.0, 0.0, 0.0),
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
