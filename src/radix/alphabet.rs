//! Digit alphabet table
//!
//! An alphabet maps digit values 0..radix to characters and back. For
//! radix r <= 36 the table is the conventional 0-9A-Z prefix with
//! case-insensitive parsing; radix 32 uses the Crockford alphabet with
//! its confusable-character normalization; 36 < r <= 64 extends through
//! lowercase letters plus '+' and '/' and parses case-sensitively.

use anyhow::Result;

use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::{emit, EmitOptions, RenderConfig};
use crate::radix::RadixError;

/// Conventional digits for radices up to 36
pub const STANDARD_DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Extended digit table for radices up to 64
pub const EXTENDED_DIGITS: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

/// Crockford base32 digits (no I, L, O, U)
pub const CROCKFORD_DIGITS: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 64;

/// An ordered digit table for one radix
#[derive(Debug, Clone)]
pub struct Alphabet {
    radix: u32,
    digits: Vec<char>,
    case_insensitive: bool,
    crockford: bool,
}

impl Alphabet {
    /// The alphabet configured for a radix
    pub fn for_radix(radix: u32) -> Result<Self, RadixError> {
        match radix {
            32 => Ok(Self {
                radix,
                digits: CROCKFORD_DIGITS.chars().collect(),
                case_insensitive: true,
                crockford: true,
            }),
            MIN_RADIX..=36 => Ok(Self {
                radix,
                digits: STANDARD_DIGITS.chars().take(radix as usize).collect(),
                case_insensitive: true,
                crockford: false,
            }),
            37..=MAX_RADIX => Ok(Self {
                radix,
                digits: EXTENDED_DIGITS.chars().take(radix as usize).collect(),
                case_insensitive: false,
                crockford: false,
            }),
            _ => Err(RadixError::UnsupportedBase(radix)),
        }
    }

    /// A user-defined alphabet; radix is the digit count
    #[allow(dead_code)]
    pub fn custom(digits: &str) -> Result<Self, RadixError> {
        let chars: Vec<char> = digits.chars().collect();
        let radix = chars.len() as u32;
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(RadixError::InvalidAlphabet(format!(
                "expected {} to {} digits, got {}",
                MIN_RADIX,
                MAX_RADIX,
                chars.len()
            )));
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(RadixError::InvalidAlphabet(format!(
                    "duplicate digit '{}'",
                    c
                )));
            }
        }
        Ok(Self {
            radix,
            digits: chars,
            case_insensitive: false,
            crockford: false,
        })
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// The table as a string, ordered by ascending digit value
    pub fn digits(&self) -> String {
        self.digits.iter().collect()
    }

    /// Map a character to its digit value, applying normalization
    pub fn digit_value(&self, ch: char) -> Option<u32> {
        let normalized = self.normalize(ch);
        self.digits
            .iter()
            .position(|&d| d == normalized)
            .map(|i| i as u32)
    }

    /// Map a digit value to its character; panics on out-of-range values,
    /// which the formatter never produces
    pub fn digit_char(&self, value: u32) -> char {
        self.digits[value as usize]
    }

    fn normalize(&self, ch: char) -> char {
        let upper = if self.case_insensitive {
            ch.to_ascii_uppercase()
        } else {
            ch
        };
        if self.crockford {
            // Crockford decoding folds confusables onto their digit
            match upper {
                'I' | 'L' => '1',
                'O' => '0',
                other => other,
            }
        } else {
            upper
        }
    }
}

/// A well-known base in the configured display set
#[derive(Debug, Clone, Copy)]
pub struct BaseDescriptor {
    pub radix: u32,
    pub name: &'static str,
    pub prefix: Option<&'static str>,
}

/// Bases the orchestrator fans out to when no target is requested
pub const DISPLAY_BASES: &[BaseDescriptor] = &[
    BaseDescriptor {
        radix: 2,
        name: "binary",
        prefix: Some("0b"),
    },
    BaseDescriptor {
        radix: 8,
        name: "octal",
        prefix: Some("0o"),
    },
    BaseDescriptor {
        radix: 10,
        name: "decimal",
        prefix: None,
    },
    BaseDescriptor {
        radix: 16,
        name: "hexadecimal",
        prefix: Some("0x"),
    },
    BaseDescriptor {
        radix: 32,
        name: "base32-crockford",
        prefix: None,
    },
    BaseDescriptor {
        radix: 36,
        name: "base36",
        prefix: None,
    },
    BaseDescriptor {
        radix: 64,
        name: "base64",
        prefix: None,
    },
];

/// Look up the descriptor for a radix, if it is in the display set
pub fn descriptor(radix: u32) -> Option<&'static BaseDescriptor> {
    DISPLAY_BASES.iter().find(|d| d.radix == radix)
}

/// Run the bases command: list the configured base descriptors
pub fn run_bases(config: RenderConfig, emit_opts: &EmitOptions) -> Result<()> {
    let mut result_set = ResultSet::new();

    for desc in DISPLAY_BASES {
        let alphabet = Alphabet::for_radix(desc.radix).expect("display bases are supported");
        result_set.push(ResultItem::base(
            desc.name,
            serde_json::json!({
                "radix": desc.radix,
                "alphabet": alphabet.digits(),
                "prefix": desc.prefix,
            }),
        ));
    }

    emit(&result_set, config, emit_opts)
}
