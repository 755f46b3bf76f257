//! Conversion orchestrator
//!
//! Parses the input once in the source base, then formats the value in
//! every configured display base (or just the requested target). Parser
//! failures propagate to the caller; the CLI boundary turns them into
//! error result items.

use anyhow::Result;
use std::collections::BTreeMap;

use crate::core::model::{ResultItem, ResultSet, Tool, ToolError};
use crate::core::render::{emit, EmitOptions, RenderConfig};
use crate::radix::alphabet::{descriptor, DISPLAY_BASES};
use crate::radix::{format, parse, RadixError};

/// One conversion computation, created per invocation
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input: String,
    pub from: u32,
    pub to: Option<u32>,
}

/// The parsed value and its per-base representations
#[derive(Debug, Clone)]
pub struct Conversion {
    pub value: u128,
    pub representations: BTreeMap<u32, String>,
}

/// Convert the input across the requested bases
pub fn convert(request: &ConversionRequest) -> Result<Conversion, RadixError> {
    let value = parse::parse_in_base(&request.input, request.from)?;

    let targets: Vec<u32> = match request.to {
        Some(target) => vec![target],
        None => DISPLAY_BASES.iter().map(|d| d.radix).collect(),
    };

    let mut representations = BTreeMap::new();
    for target in targets {
        representations.insert(target, format::format_in_base(value, target)?);
    }

    Ok(Conversion {
        value,
        representations,
    })
}

/// Run the radix command
pub fn run_radix(
    input: &str,
    from: u32,
    to: Option<u32>,
    config: RenderConfig,
    emit_opts: &EmitOptions,
) -> Result<()> {
    let mut result_set = ResultSet::new();

    // Blank input yields no result rather than an error
    if !input.trim().is_empty() {
        let request = ConversionRequest {
            input: input.to_string(),
            from,
            to,
        };

        match convert(&request) {
            Ok(conversion) => {
                for (radix, repr) in &conversion.representations {
                    let mut data = serde_json::json!({
                        "radix": radix,
                        "value": conversion.value.to_string(),
                    });
                    if let Some(desc) = descriptor(*radix) {
                        data["name"] = serde_json::json!(desc.name);
                    }
                    result_set.push(
                        ResultItem::conversion(Tool::Radix, format!("base-{}", radix), repr)
                            .with_data(data),
                    );
                }
            }
            Err(err) => {
                result_set.push(ResultItem::error(
                    Tool::Radix,
                    ToolError::new(err.code(), err.to_string()),
                ));
            }
        }
    }

    emit(&result_set, config, emit_opts)
}
