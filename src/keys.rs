use std::fmt;
use std::str::FromStr;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

/// Levels at or above this use the numeric-pad aliases alongside the digits.
pub const NUMPAD_LEVEL: u8 = 4;

/// Digits in the order they appear on the top row of a keyboard.
pub const DIGITS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

/// A pressable key identity. A numeric-pad digit is a distinct key from the
/// top-row digit with the same face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(u8),
    Pad(u8),
}

impl Key {
    pub fn digit(&self) -> u8 {
        match *self {
            Key::Digit(d) | Key::Pad(d) => d,
        }
    }

    pub fn is_pad(&self) -> bool {
        matches!(self, Key::Pad(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Key::Digit(d) => write!(f, "{d}"),
            Key::Pad(d) => write!(f, "Num{d}"),
        }
    }
}

impl FromStr for Key {
    type Err = ();

    /// Parses the button labels used by the UI ("7", "Num7", ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pad, digit) = match s.strip_prefix("Num") {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        match digit.parse::<u8>() {
            Ok(d) if d <= 9 => Ok(if pad { Key::Pad(d) } else { Key::Digit(d) }),
            _ => Err(()),
        }
    }
}

pub fn clamp_level(level: u8) -> u8 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

pub fn numpad_enabled(level: u8) -> bool {
    level >= NUMPAD_LEVEL
}

/// The set of keys a target may be drawn from at the given level. The base
/// digits are always present; the pad aliases join at the numpad levels.
pub fn enabled_keys(level: u8) -> Vec<Key> {
    let mut keys: Vec<Key> = DIGITS.iter().map(|&d| Key::Digit(d)).collect();
    if numpad_enabled(level) {
        keys.extend(DIGITS.iter().map(|&d| Key::Pad(d)));
    }
    keys
}
