//! CSS unit conversion
//!
//! Linear conversions pivoting through px: absolute units via the CSS
//! 96px/inch ratio, font-relative units via the configured root font
//! size, viewport units via the configured viewport.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::core::model::{ResultItem, ResultSet, Tool, ToolError};
use crate::core::render::{emit, EmitOptions, RenderConfig};

/// Measurement shape: number plus unit suffix
static MEASUREMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*([a-zA-Z%]+)\s*$").expect("Invalid MEASUREMENT_RE regex")
});

/// Errors produced by the unit converter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),
}

impl UnitError {
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::UnknownUnit(_) => "UNKNOWN_UNIT",
            UnitError::InvalidMeasurement(_) => "INVALID_MEASUREMENT",
        }
    }
}

/// Supported CSS units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssUnit {
    Px,
    Pt,
    Pc,
    In,
    Cm,
    Mm,
    Q,
    Em,
    Rem,
    Percent,
    Vw,
    Vh,
}

/// The full conversion set, in display order
pub const ALL_UNITS: &[CssUnit] = &[
    CssUnit::Px,
    CssUnit::Pt,
    CssUnit::Pc,
    CssUnit::In,
    CssUnit::Cm,
    CssUnit::Mm,
    CssUnit::Q,
    CssUnit::Em,
    CssUnit::Rem,
    CssUnit::Percent,
    CssUnit::Vw,
    CssUnit::Vh,
];

impl CssUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            CssUnit::Px => "px",
            CssUnit::Pt => "pt",
            CssUnit::Pc => "pc",
            CssUnit::In => "in",
            CssUnit::Cm => "cm",
            CssUnit::Mm => "mm",
            CssUnit::Q => "q",
            CssUnit::Em => "em",
            CssUnit::Rem => "rem",
            CssUnit::Percent => "%",
            CssUnit::Vw => "vw",
            CssUnit::Vh => "vh",
        }
    }
}

impl std::str::FromStr for CssUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "px" => Ok(CssUnit::Px),
            "pt" => Ok(CssUnit::Pt),
            "pc" => Ok(CssUnit::Pc),
            "in" => Ok(CssUnit::In),
            "cm" => Ok(CssUnit::Cm),
            "mm" => Ok(CssUnit::Mm),
            "q" => Ok(CssUnit::Q),
            "em" => Ok(CssUnit::Em),
            "rem" => Ok(CssUnit::Rem),
            "%" | "percent" => Ok(CssUnit::Percent),
            "vw" => Ok(CssUnit::Vw),
            "vh" => Ok(CssUnit::Vh),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

impl std::fmt::Display for CssUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference values relative conversions resolve against
#[derive(Debug, Clone, Copy)]
pub struct UnitContext {
    /// Root font size in px (em/rem/% pivot)
    pub root_font_size: f64,
    /// Viewport width in px (vw pivot)
    pub viewport_width: f64,
    /// Viewport height in px (vh pivot)
    pub viewport_height: f64,
}

impl Default for UnitContext {
    fn default() -> Self {
        Self {
            root_font_size: 16.0,
            viewport_width: 1920.0,
            viewport_height: 1080.0,
        }
    }
}

/// Parse a measurement like "1.5rem" or "24 px"
pub fn parse_measurement(input: &str) -> Result<(f64, CssUnit), UnitError> {
    let captures = MEASUREMENT_RE
        .captures(input)
        .ok_or_else(|| UnitError::InvalidMeasurement(input.trim().to_string()))?;

    let value: f64 = captures[1]
        .parse()
        .map_err(|_| UnitError::InvalidMeasurement(input.trim().to_string()))?;
    let unit: CssUnit = captures[2].parse()?;

    Ok((value, unit))
}

fn to_px(value: f64, unit: CssUnit, ctx: &UnitContext) -> f64 {
    match unit {
        CssUnit::Px => value,
        CssUnit::Pt => value * 96.0 / 72.0,
        CssUnit::Pc => value * 16.0,
        CssUnit::In => value * 96.0,
        CssUnit::Cm => value * 96.0 / 2.54,
        CssUnit::Mm => value * 96.0 / 25.4,
        CssUnit::Q => value * 96.0 / 25.4 / 4.0,
        CssUnit::Em | CssUnit::Rem => value * ctx.root_font_size,
        CssUnit::Percent => value / 100.0 * ctx.root_font_size,
        CssUnit::Vw => value / 100.0 * ctx.viewport_width,
        CssUnit::Vh => value / 100.0 * ctx.viewport_height,
    }
}

fn from_px(px: f64, unit: CssUnit, ctx: &UnitContext) -> f64 {
    match unit {
        CssUnit::Px => px,
        CssUnit::Pt => px * 72.0 / 96.0,
        CssUnit::Pc => px / 16.0,
        CssUnit::In => px / 96.0,
        CssUnit::Cm => px * 2.54 / 96.0,
        CssUnit::Mm => px * 25.4 / 96.0,
        CssUnit::Q => px * 25.4 / 96.0 * 4.0,
        CssUnit::Em | CssUnit::Rem => px / ctx.root_font_size,
        CssUnit::Percent => px / ctx.root_font_size * 100.0,
        CssUnit::Vw => px * 100.0 / ctx.viewport_width,
        CssUnit::Vh => px * 100.0 / ctx.viewport_height,
    }
}

/// Convert a value between two units
pub fn convert_unit(value: f64, from: CssUnit, to: CssUnit, ctx: &UnitContext) -> f64 {
    from_px(to_px(value, from, ctx), to, ctx)
}

/// Convert a value to every supported unit
pub fn convert_all(value: f64, from: CssUnit, ctx: &UnitContext) -> Vec<(CssUnit, f64)> {
    ALL_UNITS
        .iter()
        .map(|&to| (to, convert_unit(value, from, to, ctx)))
        .collect()
}

/// Format a converted number: four decimals, trailing zeros trimmed
pub fn format_number(value: f64) -> String {
    let rounded = format!("{:.4}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Run the unit command
pub fn run_unit(
    input: &str,
    to: Option<&str>,
    ctx: &UnitContext,
    config: RenderConfig,
    emit_opts: &EmitOptions,
) -> Result<()> {
    let mut result_set = ResultSet::new();

    // Blank input yields no result rather than an error
    if input.trim().is_empty() {
        return emit(&result_set, config, emit_opts);
    }

    let outcome = parse_measurement(input).and_then(|(value, from)| {
        let conversions = match to {
            Some(unit) => {
                let target: CssUnit = unit.parse()?;
                vec![(target, convert_unit(value, from, target, ctx))]
            }
            None => convert_all(value, from, ctx),
        };
        Ok((value, from, conversions))
    });

    match outcome {
        Ok((value, from, conversions)) => {
            for (target, converted) in conversions {
                result_set.push(
                    ResultItem::conversion(
                        Tool::Unit,
                        target.as_str(),
                        format!("{}{}", format_number(converted), target.as_str()),
                    )
                    .with_data(serde_json::json!({
                        "from": format!("{}{}", format_number(value), from.as_str()),
                        "value": converted,
                    })),
                );
            }
        }
        Err(err) => {
            result_set.push(ResultItem::error(
                Tool::Unit,
                ToolError::new(err.code(), err.to_string()),
            ));
        }
    }

    emit(&result_set, config, emit_opts)
}
