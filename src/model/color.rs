use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for MaskColor {
    fn default() -> Self {
        Self {
            red: 255,
            green: 255,
            blue: 255,
        }
    }
}

impl MaskColor {
    /// Checks every channel and reports all violations, not just the first.
    pub fn validate(red: i32, green: i32, blue: i32) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        let red = channel("red", red, &mut errors);
        let green = channel("green", green, &mut errors);
        let blue = channel("blue", blue, &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self { red, green, blue })
    }
}

pub fn validate_mask_alpha(alpha: i32) -> Result<u8, String> {
    u8::try_from(alpha).map_err(|_| format!("Invalid mask opacity [0,255]: {alpha}"))
}

fn channel(name: &str, value: i32, errors: &mut Vec<String>) -> u8 {
    match u8::try_from(value) {
        Ok(value) => value,
        Err(_) => {
            errors.push(format!("Invalid {name} mask color [0,255]: {value}"));
            0
        }
    }
}
