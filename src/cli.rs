//! CLI module - Command-line interface definitions and handlers

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::paths::store_dir;
use crate::core::render::{EmitOptions, OutputFormat, RenderConfig};
use crate::core::util::parse_key_value;
use crate::css::format::FormatOptions;
use crate::css::units::UnitContext;
use crate::http::request::Method;
use crate::http::snippet::SnippetTarget;

/// devbelt - a unified CLI toolbox of developer text utilities.
#[derive(Parser, Debug)]
#[command(name = "devbelt")]
#[command(
    author,
    version,
    about,
    long_about = r#"devbelt emits a unified, machine-readable result model for every command.

Each command prints a ResultSet in the selected format (default: jsonl).

Output formats:
- jsonl: one JSON object per line (best for piping into tools)
- json: a single JSON array
- md: human-friendly Markdown
- raw: produced content only (best for piping into files)

Examples:
    devbelt radix 255 --from 10 --to 16
    devbelt css fmt styles.css
    devbelt unit 24px --to rem
    devbelt http snippet --url https://api.example.com --method post
    devbelt k8s deployment web --image nginx:1.27 --replicas 3
"#
)]
pub struct Cli {
    /// Output format (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format for ResultSet.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- raw (produced content only)\n\n\
Tip: Prefer raw when piping a formatted stylesheet or manifest into a file."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
This is useful when manually inspecting results. Has no effect on md/raw formats."
    )]
    pub pretty: bool,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output on stderr summaries. This is useful when piping to\n\
files or when your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Reduce non-essential stderr output. Machine-readable results are still\n\
printed to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable more detailed diagnostics. This is intended for debugging and\n\
may increase stderr output."
    )]
    pub verbose: bool,

    /// Preset store directory.
    #[arg(
        long,
        global = true,
        env = "DEVBELT_STORE",
        value_name = "DIR",
        long_help = "Directory holding the preset store (presets.json and meta.json).\n\n\
Defaults to ~/.devbelt. Also settable via the DEVBELT_STORE environment variable."
    )]
    pub store: Option<PathBuf>,

    /// Copy the primary output to the system clipboard.
    #[arg(
        long,
        global = true,
        long_help = "Copy the primary output (the raw rendering) to the system clipboard via\n\
pbcopy, wl-copy, xclip or xsel, whichever is found first.\n\n\
A missing backend or failed write is logged and never fails the command."
    )]
    pub copy: bool,

    /// Write the primary output to a file.
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        long_help = "Write the primary output (the raw rendering) to FILE in addition to stdout."
    )]
    pub out: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a number between bases (radix 2-64).
    #[command(
        long_about = "Parse VALUE in the source base and emit its representation in the target\n\
base, or in every configured display base (2, 8, 10, 16, 32, 36, 64) when --to is omitted.\n\n\
Known prefixes (0b/0o/0x) are stripped when parsing in the matching base. Base 32 uses the\n\
Crockford alphabet; bases above 36 are case-sensitive. Values are limited to 128 bits;\n\
anything larger is reported as an OVERFLOW error.\n\n\
Examples:\n\
  devbelt radix 255 --to 16\n\
  devbelt radix FF --from 16\n\
  devbelt radix 0b1010 --from 2 --to 10\n"
    )]
    Radix {
        /// Value to convert (digits of the source base).
        #[arg(value_name = "VALUE")]
        value: Option<String>,

        /// Source base.
        #[arg(
            long,
            default_value = "10",
            value_name = "BASE",
            long_help = "Base the input value is written in (2-64). Defaults to 10."
        )]
        from: u32,

        /// Target base (omit to convert to all display bases).
        #[arg(
            long,
            value_name = "BASE",
            long_help = "Base to convert to (2-64).\n\n\
If omitted, the value is formatted in every configured display base."
        )]
        to: Option<u32>,
    },

    /// List the configured base descriptors.
    #[command(
        long_about = "Emit one result per configured display base: radix, digit alphabet and\n\
known prefix.\n\n\
Example:\n\
  devbelt bases\n"
    )]
    Bases,

    /// Format, minify or validate stylesheets.
    #[command(
        long_about = "CSS utilities operating on stdin, files, or directories (directories are\n\
walked for *.css files, respecting ignore rules)."
    )]
    Css {
        #[command(subcommand)]
        action: CssCommands,
    },

    /// Convert a CSS measurement between units.
    #[command(
        long_about = "Parse VALUE as a measurement like '24px' or '1.5rem' and convert it to\n\
the target unit, or to every supported unit when --to is omitted.\n\n\
Supported units: px, pt, pc, in, cm, mm, q, em, rem, %, vw, vh. Relative units resolve\n\
against --base-px and --viewport.\n\n\
Examples:\n\
  devbelt unit 24px --to rem\n\
  devbelt unit 1.5rem\n\
  devbelt unit 50vw --viewport 1280x720\n"
    )]
    Unit {
        /// Measurement to convert (number plus unit, e.g. 24px).
        #[arg(value_name = "VALUE")]
        value: Option<String>,

        /// Target unit (omit to convert to all units).
        #[arg(long, value_name = "UNIT")]
        to: Option<String>,

        /// Root font size in px (em/rem/% pivot).
        #[arg(long, default_value = "16", value_name = "PX")]
        base_px: f64,

        /// Viewport size as WIDTHxHEIGHT (vw/vh pivot).
        #[arg(long, default_value = "1920x1080", value_name = "WxH")]
        viewport: String,
    },

    /// Build HTTP request snippets and mock responses.
    #[command(
        long_about = "Assemble ready-to-run request snippets (cURL, fetch, Python requests) or\n\
a deterministic simulated response. Nothing is ever sent over the network."
    )]
    Http {
        #[command(subcommand)]
        action: HttpCommands,
    },

    /// Generate Kubernetes manifests.
    #[command(
        long_about = "Scaffold typed Kubernetes manifests as YAML. Labels default to\n\
'app: <name>' and drive selectors; optional fields are omitted rather than emitted empty.\n\n\
Examples:\n\
  devbelt k8s deployment web --image nginx:1.27 --replicas 3 --port 80\n\
  devbelt k8s service web --port 80 --target-port 8080\n\
  devbelt k8s secret app-secret --data API_KEY=hunter2\n"
    )]
    K8s {
        #[command(subcommand)]
        action: K8sCommands,
    },

    /// Manage saved tool inputs.
    #[command(
        long_about = "Presets are named, opaque JSON argument blobs kept under the store\n\
directory (see --store). A malformed store is logged and treated as empty.\n\n\
Examples:\n\
  devbelt preset save hex --tool radix --args '{\"from\":16}'\n\
  devbelt preset list\n\
  devbelt preset delete hex\n"
    )]
    Preset {
        #[command(subcommand)]
        action: PresetCommands,
    },

    /// Check optional external integrations.
    #[command(
        long_about = "Report which optional external tools (clipboard backends for --copy,\n\
watchexec for watch) are installed and discoverable.\n\n\
Example:\n\
  devbelt doctor\n"
    )]
    Doctor,

    /// Watch for file changes (requires 'watch' feature)
    #[cfg(feature = "watch")]
    Watch {
        /// Directory to watch
        #[arg(long, default_value = ".", value_name = "DIR")]
        root: PathBuf,

        /// Command to run on changes
        #[arg(long)]
        cmd: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CssCommands {
    /// Re-indent stylesheets.
    #[command(
        long_about = "Format stylesheets: one selector and one declaration per line, rules\n\
separated by a blank line. Reads stdin when no path is given.\n\n\
Examples:\n\
  devbelt css fmt styles.css\n\
  devbelt css fmt src/ --write\n\
  cat styles.css | devbelt css fmt --format raw\n"
    )]
    Fmt {
        /// Files or directories to format (stdin when omitted).
        #[arg(value_name = "PATH", num_args = 0..)]
        paths: Vec<PathBuf>,

        /// Rewrite files in place instead of only emitting results.
        #[arg(long)]
        write: bool,

        /// Spaces per indent level.
        #[arg(long, default_value = "2", value_name = "N")]
        indent: usize,

        /// Drop comments instead of preserving them.
        #[arg(long)]
        strip_comments: bool,
    },

    /// Minify stylesheets.
    #[command(
        long_about = "Minify stylesheets: strip comments, collapse whitespace, drop spaces\n\
around separators and trailing semicolons. Reads stdin when no path is given.\n\n\
Examples:\n\
  devbelt css min styles.css --format raw\n\
  devbelt css min src/ --write\n"
    )]
    Min {
        /// Files or directories to minify (stdin when omitted).
        #[arg(value_name = "PATH", num_args = 0..)]
        paths: Vec<PathBuf>,

        /// Rewrite files in place instead of only emitting results.
        #[arg(long)]
        write: bool,
    },

    /// Validate stylesheets and report diagnostics.
    #[command(
        long_about = "Check stylesheets for unbalanced braces, empty rules, malformed\n\
declarations and unknown property names (with suggestions for frequent misspellings).\n\n\
Diagnostics are emitted as result items; the process still exits 0 so the output can be\n\
consumed programmatically.\n\n\
Example:\n\
  devbelt css check styles.css\n"
    )]
    Check {
        /// Files or directories to check (stdin when omitted).
        #[arg(value_name = "PATH", num_args = 0..)]
        paths: Vec<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum HttpCommands {
    /// Emit request snippets (curl/fetch/python).
    #[command(
        long_about = "Assemble ready-to-run snippets for the described request. With no\n\
--target, all three flavors are emitted.\n\n\
Examples:\n\
  devbelt http snippet --url https://api.example.com/items\n\
  devbelt http snippet --url https://api.example.com/items --method post \\\n\
      -H 'Content-Type: application/json' --body '{\"name\":\"belt\"}' --target curl\n"
    )]
    Snippet {
        /// Request URL (http:// or https://).
        #[arg(long, value_name = "URL")]
        url: String,

        /// Request method.
        #[arg(long, default_value = "get", value_name = "METHOD")]
        method: String,

        /// Request header, as 'Name: value' (repeatable).
        #[arg(short = 'H', long = "header", value_name = "HEADER")]
        headers: Vec<String>,

        /// Request body.
        #[arg(short = 'd', long, value_name = "BODY")]
        body: Option<String>,

        /// Snippet flavor (curl/fetch/python); all three when omitted.
        #[arg(long, value_name = "TARGET")]
        target: Option<String>,
    },

    /// Emit a simulated response for a request.
    #[command(
        long_about = "Produce a deterministic mock response for the described request: status\n\
line, canned headers, and a JSON body echoing the request. --delay-ms imitates latency.\n\n\
Example:\n\
  devbelt http mock --url https://api.example.com/items --method post --status 201\n"
    )]
    Mock {
        /// Request URL (http:// or https://).
        #[arg(long, value_name = "URL")]
        url: String,

        /// Request method.
        #[arg(long, default_value = "get", value_name = "METHOD")]
        method: String,

        /// Request header, as 'Name: value' (repeatable).
        #[arg(short = 'H', long = "header", value_name = "HEADER")]
        headers: Vec<String>,

        /// Request body.
        #[arg(short = 'd', long, value_name = "BODY")]
        body: Option<String>,

        /// Simulated response status.
        #[arg(long, default_value = "200", value_name = "CODE")]
        status: u16,

        /// Simulated latency in milliseconds.
        #[arg(long, default_value = "0", value_name = "MS")]
        delay_ms: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum K8sCommands {
    /// Generate a Deployment manifest.
    Deployment {
        /// Resource name.
        #[arg(value_name = "NAME")]
        name: String,

        /// Container image.
        #[arg(long, value_name = "IMAGE")]
        image: String,

        /// Replica count.
        #[arg(long, default_value = "1", value_name = "N")]
        replicas: u32,

        /// Container port.
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        /// Namespace.
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,

        /// Label, as KEY=VALUE (repeatable).
        #[arg(long = "label", value_name = "KEY=VALUE")]
        labels: Vec<String>,

        /// Environment variable, as KEY=VALUE (repeatable).
        #[arg(long = "env", value_name = "KEY=VALUE")]
        env: Vec<String>,
    },

    /// Generate a Service manifest.
    Service {
        /// Resource name.
        #[arg(value_name = "NAME")]
        name: String,

        /// Service port.
        #[arg(long, value_name = "PORT")]
        port: u16,

        /// Target port (defaults to --port).
        #[arg(long, value_name = "PORT")]
        target_port: Option<u16>,

        /// Service type (ClusterIP/NodePort/LoadBalancer).
        #[arg(long = "type", default_value = "ClusterIP", value_name = "TYPE")]
        service_type: String,

        /// Namespace.
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,

        /// Label, as KEY=VALUE (repeatable).
        #[arg(long = "label", value_name = "KEY=VALUE")]
        labels: Vec<String>,
    },

    /// Generate a ConfigMap manifest.
    Configmap {
        /// Resource name.
        #[arg(value_name = "NAME")]
        name: String,

        /// Namespace.
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,

        /// Label, as KEY=VALUE (repeatable).
        #[arg(long = "label", value_name = "KEY=VALUE")]
        labels: Vec<String>,

        /// Data entry, as KEY=VALUE (repeatable).
        #[arg(long = "data", value_name = "KEY=VALUE")]
        data: Vec<String>,
    },

    /// Generate a Secret manifest (stringData, type Opaque).
    Secret {
        /// Resource name.
        #[arg(value_name = "NAME")]
        name: String,

        /// Namespace.
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,

        /// Label, as KEY=VALUE (repeatable).
        #[arg(long = "label", value_name = "KEY=VALUE")]
        labels: Vec<String>,

        /// Data entry, as KEY=VALUE (repeatable).
        #[arg(long = "data", value_name = "KEY=VALUE")]
        data: Vec<String>,
    },

    /// Generate a Namespace manifest.
    Namespace {
        /// Namespace name.
        #[arg(value_name = "NAME")]
        name: String,

        /// Label, as KEY=VALUE (repeatable).
        #[arg(long = "label", value_name = "KEY=VALUE")]
        labels: Vec<String>,
    },

    /// Generate an Ingress manifest.
    Ingress {
        /// Resource name.
        #[arg(value_name = "NAME")]
        name: String,

        /// Rule host.
        #[arg(long, value_name = "HOST")]
        host: String,

        /// Backend service name.
        #[arg(long, value_name = "NAME")]
        service: String,

        /// Backend service port.
        #[arg(long, default_value = "80", value_name = "PORT")]
        service_port: u16,

        /// Rule path.
        #[arg(long, default_value = "/", value_name = "PATH")]
        path: String,

        /// Namespace.
        #[arg(long, value_name = "NS")]
        namespace: Option<String>,

        /// Label, as KEY=VALUE (repeatable).
        #[arg(long = "label", value_name = "KEY=VALUE")]
        labels: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PresetCommands {
    /// Save (or overwrite) a preset.
    Save {
        /// Preset name.
        #[arg(value_name = "NAME")]
        name: String,

        /// Tool the preset belongs to (radix/css/unit/http/k8s).
        #[arg(long, value_name = "TOOL")]
        tool: String,

        /// Arguments as a JSON blob.
        #[arg(long, default_value = "{}", value_name = "JSON")]
        args: String,
    },

    /// List saved presets.
    List,

    /// Get a preset by name.
    Get {
        /// Preset name.
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Delete a preset by name.
    Delete {
        /// Preset name.
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Parse --viewport WIDTHxHEIGHT
fn parse_viewport(s: &str) -> Result<(f64, f64)> {
    let Some((width, height)) = s.split_once(['x', 'X']) else {
        bail!("Invalid viewport format. Expected 'WIDTHxHEIGHT', got '{}'", s);
    };

    let width: f64 = width
        .trim()
        .parse()
        .with_context(|| format!("Invalid viewport width: {}", width))?;
    let height: f64 = height
        .trim()
        .parse()
        .with_context(|| format!("Invalid viewport height: {}", height))?;

    if width <= 0.0 || height <= 0.0 {
        bail!("Viewport dimensions must be positive");
    }

    Ok((width, height))
}

/// Parse repeated KEY=VALUE flags into a map
fn parse_pairs_map(pairs: &[String]) -> Result<BTreeMap<String, String>> {
    pairs.iter().map(|p| parse_key_value(p)).collect()
}

/// Parse repeated KEY=VALUE flags, preserving order
fn parse_pairs_vec(pairs: &[String]) -> Result<Vec<(String, String)>> {
    pairs.iter().map(|p| parse_key_value(p)).collect()
}

fn parse_method(raw: &str) -> Result<Method, crate::http::HttpError> {
    raw.parse::<Method>()
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);
    let emit_opts = EmitOptions {
        out: cli.out.clone(),
        copy: cli.copy,
        quiet: cli.quiet,
    };

    let store = store_dir(cli.store.as_deref());

    match cli.command {
        Commands::Radix { value, from, to } => crate::radix::convert::run_radix(
            value.as_deref().unwrap_or(""),
            from,
            to,
            render_config,
            &emit_opts,
        ),

        Commands::Bases => crate::radix::alphabet::run_bases(render_config, &emit_opts),

        Commands::Css { action } => match action {
            CssCommands::Fmt {
                paths,
                write,
                indent,
                strip_comments,
            } => {
                let opts = FormatOptions {
                    indent,
                    strip_comments,
                };
                crate::css::format::run_fmt(&paths, write, &opts, render_config, &emit_opts)
            }
            CssCommands::Min { paths, write } => {
                crate::css::format::run_min(&paths, write, render_config, &emit_opts)
            }
            CssCommands::Check { paths } => {
                crate::css::check::run_check(&paths, render_config, &emit_opts)
            }
        },

        Commands::Unit {
            value,
            to,
            base_px,
            viewport,
        } => {
            let (viewport_width, viewport_height) = parse_viewport(&viewport)?;
            let ctx = UnitContext {
                root_font_size: base_px,
                viewport_width,
                viewport_height,
            };
            crate::css::units::run_unit(
                value.as_deref().unwrap_or(""),
                to.as_deref(),
                &ctx,
                render_config,
                &emit_opts,
            )
        }

        Commands::Http { action } => match action {
            HttpCommands::Snippet {
                url,
                method,
                headers,
                body,
                target,
            } => {
                let method = match parse_method(&method) {
                    Ok(m) => m,
                    Err(err) => return emit_http_error(err, render_config, &emit_opts),
                };
                let target = match target.as_deref() {
                    Some(raw) => Some(
                        raw.parse::<SnippetTarget>()
                            .map_err(|e| anyhow::anyhow!(e))?,
                    ),
                    None => None,
                };
                crate::http::snippet::run_snippet(
                    method,
                    &url,
                    &headers,
                    body,
                    target,
                    render_config,
                    &emit_opts,
                )
            }
            HttpCommands::Mock {
                url,
                method,
                headers,
                body,
                status,
                delay_ms,
            } => {
                let method = match parse_method(&method) {
                    Ok(m) => m,
                    Err(err) => return emit_http_error(err, render_config, &emit_opts),
                };
                crate::http::mock::run_mock(
                    method,
                    &url,
                    &headers,
                    body,
                    status,
                    delay_ms,
                    render_config,
                    &emit_opts,
                )
            }
        },

        Commands::K8s { action } => run_k8s(action, render_config, &emit_opts),

        Commands::Preset { action } => match action {
            PresetCommands::Save { name, tool, args } => crate::presets::store::run_save(
                &store,
                &name,
                &tool,
                &args,
                render_config,
                &emit_opts,
            ),
            PresetCommands::List => {
                crate::presets::store::run_list(&store, render_config, &emit_opts)
            }
            PresetCommands::Get { name } => {
                crate::presets::store::run_get(&store, &name, render_config, &emit_opts)
            }
            PresetCommands::Delete { name } => {
                crate::presets::store::run_delete(&store, &name, render_config, &emit_opts)
            }
        },

        Commands::Doctor => crate::doctor::run_doctor(render_config, &emit_opts),

        #[cfg(feature = "watch")]
        Commands::Watch { root, cmd } => crate::watch::run_watch(&root, cmd.as_deref()),
    }
}

fn emit_http_error(
    err: crate::http::HttpError,
    config: RenderConfig,
    emit_opts: &EmitOptions,
) -> Result<()> {
    let mut result_set = crate::core::model::ResultSet::new();
    result_set.push(crate::http::snippet::error_item(err));
    crate::core::render::emit(&result_set, config, emit_opts)
}

fn run_k8s(action: K8sCommands, config: RenderConfig, emit_opts: &EmitOptions) -> Result<()> {
    use crate::k8s::manifest;

    match action {
        K8sCommands::Deployment {
            name,
            image,
            replicas,
            port,
            namespace,
            labels,
            env,
        } => {
            let manifest_value = manifest::deployment(
                &name,
                &image,
                replicas,
                port,
                namespace,
                parse_pairs_map(&labels)?,
                parse_pairs_vec(&env)?,
            );
            manifest::run_manifest(
                "deployment.yaml",
                manifest::to_yaml(&manifest_value)?,
                config,
                emit_opts,
            )
        }
        K8sCommands::Service {
            name,
            port,
            target_port,
            service_type,
            namespace,
            labels,
        } => {
            let manifest_value = manifest::service(
                &name,
                port,
                target_port,
                &service_type,
                namespace,
                parse_pairs_map(&labels)?,
            );
            manifest::run_manifest(
                "service.yaml",
                manifest::to_yaml(&manifest_value)?,
                config,
                emit_opts,
            )
        }
        K8sCommands::Configmap {
            name,
            namespace,
            labels,
            data,
        } => {
            let manifest_value = manifest::config_map(
                &name,
                namespace,
                parse_pairs_map(&labels)?,
                parse_pairs_map(&data)?,
            );
            manifest::run_manifest(
                "configmap.yaml",
                manifest::to_yaml(&manifest_value)?,
                config,
                emit_opts,
            )
        }
        K8sCommands::Secret {
            name,
            namespace,
            labels,
            data,
        } => {
            let manifest_value = manifest::secret(
                &name,
                namespace,
                parse_pairs_map(&labels)?,
                parse_pairs_map(&data)?,
            );
            manifest::run_manifest(
                "secret.yaml",
                manifest::to_yaml(&manifest_value)?,
                config,
                emit_opts,
            )
        }
        K8sCommands::Namespace { name, labels } => {
            let manifest_value = manifest::namespace(&name, parse_pairs_map(&labels)?);
            manifest::run_manifest(
                "namespace.yaml",
                manifest::to_yaml(&manifest_value)?,
                config,
                emit_opts,
            )
        }
        K8sCommands::Ingress {
            name,
            host,
            service,
            service_port,
            path,
            namespace,
            labels,
        } => {
            let manifest_value = manifest::ingress(
                &name,
                &host,
                &service,
                service_port,
                &path,
                namespace,
                parse_pairs_map(&labels)?,
            );
            manifest::run_manifest(
                "ingress.yaml",
                manifest::to_yaml(&manifest_value)?,
                config,
                emit_opts,
            )
        }
    }
}
