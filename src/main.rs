//! devbelt - a unified CLI toolbox of developer text utilities
//!
//! devbelt provides:
//! - Number base conversion across radices 2-64 with custom digit alphabets
//! - CSS formatting, minification and validation
//! - CSS unit conversion (px/em/rem/pt/vw/...)
//! - HTTP request snippet generation and mock responses
//! - Kubernetes manifest scaffolding
//! - Unified output format (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod css;
mod doctor;
mod http;
mod k8s;
mod presets;
mod radix;
#[cfg(feature = "watch")]
mod watch;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
