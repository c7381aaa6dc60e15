//! Command-line client for the pastebin API.

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use pastebin_client::{load_new_page, load_paste_page, PageError, PasteClient};
use pastebin_core::config::{API_URL_ENV, CDN_URL_ENV, TIMEOUT_ENV};
use pastebin_core::doctype::{self, Classifiable, DEFAULT_DISPLAY_ID, DEFAULT_MIME};
use pastebin_core::models::{Defaults, UploadSettings};
use pastebin_core::text::normalize_optional_nonempty;
use pastebin_core::{ClientSettings, Config, NewDocument, Paste};
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "pastebin=info";
const DEFAULT_STDIN_NAME: &str = "paste.txt";

#[derive(Parser)]
#[command(name = "pbin", about = "Pastebin CLI", version)]
struct Cli {
    /// API base URL
    #[arg(long, env = API_URL_ENV)]
    api: Option<String>,

    /// CDN base URL
    #[arg(long, env = CDN_URL_ENV)]
    cdn: Option<String>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    /// Request timeout in seconds
    #[arg(short = 't', long, env = TIMEOUT_ENV)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Create a paste from files, or from stdin when no file is given
    New {
        files: Vec<PathBuf>,
        /// Display id or MIME applied to every document
        #[arg(long = "type")]
        type_name: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
        /// Hours until the paste expires
        #[arg(short, long)]
        expiry: Option<u64>,
        #[arg(long)]
        max_views: Option<u64>,
        /// Document name used for stdin content
        #[arg(long, default_value = DEFAULT_STDIN_NAME)]
        filename: String,
    },
    /// Show a paste with every document's content
    Get { id: String },
    /// Show the backend's defaults and size limits
    Config,
    /// List known document types
    Types {
        /// Keep registry order instead of sorting by name
        #[arg(long)]
        unsorted: bool,
    },
    /// Classify a file name, optionally with a declared MIME
    Detect {
        name: String,
        #[arg(long)]
        mime: Option<String>,
    },
}

/// A file name and declared MIME to classify.
struct Probe<'a> {
    name: &'a str,
    mime: &'a str,
}

impl Classifiable for Probe<'_> {
    fn declared_type(&self) -> &str {
        self.mime
    }

    fn file_name(&self) -> &str {
        self.name
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn client_settings(
    api: Option<String>,
    cdn: Option<String>,
    timeout: Option<u64>,
) -> ClientSettings {
    let defaults = ClientSettings::default();
    let api = normalize_optional_nonempty(api).unwrap_or(defaults.api_url);
    let cdn = normalize_optional_nonempty(cdn).unwrap_or(defaults.cdn_url);
    let settings = ClientSettings::new(&api, &cdn);
    match timeout {
        Some(secs) => settings.with_timeout(Duration::from_secs(secs)),
        None => settings,
    }
}

fn exit_with(action: &str, message: impl std::fmt::Display) -> ! {
    eprintln!("{} failed: {}", action, message);
    std::process::exit(1);
}

fn print_or_exit(action: &str, output: Result<String, String>) {
    match output {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{}", output),
        Err(message) => exit_with(action, message),
    }
}

fn page_error_message(err: &PageError) -> String {
    let mut message = format!("({}) {}", err.status, err.message);
    if let Some(trace) = err.trace.as_deref() {
        if !err.message.contains(trace) {
            message.push(' ');
            message.push_str(trace);
        }
    }
    message
}

fn encode_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|err| format!("response encoding error: {}", err))
}

/// Accept a display id or a MIME the registry knows.
fn resolve_type_override(value: &str) -> Result<String, String> {
    if doctype::lookup_by_display_id(value).is_some() || doctype::lookup_by_mime(value).is_some() {
        return Ok(value.to_string());
    }
    Err(format!("unknown type '{}' (see `pbin types`)", value))
}

fn upload_settings(
    name: Option<String>,
    expiry_hours: Option<u64>,
    max_views: Option<u64>,
    defaults: &Defaults,
) -> UploadSettings {
    UploadSettings {
        name: normalize_optional_nonempty(name).or_else(|| defaults.paste_name.clone()),
        expiry_hours: expiry_hours.or(defaults.expiry_hours),
        max_views: max_views.or(defaults.max_views),
        content: None,
    }
}

fn read_documents(files: &[PathBuf], stdin_name: &str) -> anyhow::Result<Vec<NewDocument>> {
    if files.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(vec![NewDocument::new(stdin_name, buffer)]);
    }

    files
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|name| name.to_str())
                .with_context(|| format!("invalid file name: {}", path.display()))?;
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(NewDocument::new(name, content))
        })
        .collect()
}

fn format_created_output(paste: &Paste, json: bool) -> Result<String, String> {
    if json {
        return encode_json(paste);
    }

    let mut lines = vec![format!(
        "Created: {} ({} documents)",
        paste.id,
        paste.documents.len()
    )];
    if let Some(token) = paste.token.as_deref() {
        lines.push(format!("Token: {}", token));
    }
    if let Some(expires_at) = paste.expires_at {
        lines.push(format!("Expires: {}", expires_at.to_rfc3339()));
    }
    Ok(lines.join("\n"))
}

fn format_paste_output(paste: &Paste, json: bool) -> Result<String, String> {
    if json {
        return encode_json(paste);
    }

    let sections: Vec<String> = paste
        .documents
        .iter()
        .map(|document| {
            let display_id =
                doctype::display_id_for_document(document).unwrap_or(DEFAULT_DISPLAY_ID);
            format!(
                "==> {} [{}] <==\n{}",
                document.name, display_id, document.content
            )
        })
        .collect();
    Ok(sections.join("\n\n"))
}

fn format_config_output(config: &Config, json: bool) -> Result<String, String> {
    if json {
        return encode_json(config);
    }

    let optional = |value: Option<u64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
    let defaults = &config.defaults;
    let mut rows = vec![
        format!("{:<22} {}", "default expiry hours", optional(defaults.expiry_hours)),
        format!("{:<22} {}", "default max views", optional(defaults.max_views)),
        format!(
            "{:<22} {}",
            "default paste name",
            defaults.paste_name.as_deref().unwrap_or("-")
        ),
    ];
    let limits = &config.size_limits;
    for (label, limit) in [
        ("paste name", limits.paste_name),
        ("expiry hours", limits.expiry_hours),
        ("document count", limits.document_count),
        ("document size", limits.document_size),
        ("total size", limits.total_size),
        ("document name", limits.document_name),
    ] {
        rows.push(format!("{:<22} {}..={}", label, limit.min, limit.max));
    }
    Ok(rows.join("\n"))
}

fn format_types_output(sorted: bool, json: bool) -> Result<String, String> {
    let entries: Vec<_> = doctype::list_display_ids(sorted)
        .into_iter()
        .filter_map(doctype::lookup_by_display_id)
        .collect();
    if json {
        let values: Vec<serde_json::Value> = entries
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "display_id": entry.display_id,
                    "highlighter": entry.highlighter_id,
                    "mime": entry.mime,
                })
            })
            .collect();
        return encode_json(&values);
    }

    let rows: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "{:<24} {:<14} {}",
                entry.display_id, entry.highlighter_id, entry.mime
            )
        })
        .collect();
    Ok(rows.join("\n"))
}

fn format_detect_output(name: &str, mime: Option<&str>, json: bool) -> Result<String, String> {
    let probe = Probe {
        name,
        mime: mime.unwrap_or_default(),
    };
    let display_id = doctype::display_id_for_document(&probe).unwrap_or(DEFAULT_DISPLAY_ID);
    let highlighter = doctype::highlighter_for(&probe);
    let resolved_mime = doctype::lookup_by_document(&probe)
        .map(|entry| entry.mime)
        .unwrap_or(DEFAULT_MIME);

    if json {
        return encode_json(&serde_json::json!({
            "name": name,
            "display_id": display_id,
            "highlighter": highlighter,
            "mime": resolved_mime,
        }));
    }
    Ok(format!(
        "{}: {} (highlighter: {}, mime: {})",
        name, display_id, highlighter, resolved_mime
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let Cli {
        api,
        cdn,
        json,
        timeout,
        command,
    } = Cli::parse();
    let settings = client_settings(api, cdn, timeout);

    match command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
        Commands::Types { unsorted } => {
            print_or_exit("Types", format_types_output(!unsorted, json));
        }
        Commands::Detect { name, mime } => {
            print_or_exit("Detect", format_detect_output(&name, mime.as_deref(), json));
        }
        Commands::New {
            files,
            type_name,
            name,
            expiry,
            max_views,
            filename,
        } => {
            let mut documents = read_documents(&files, &filename)?;
            if let Some(type_name) = type_name {
                let type_name =
                    resolve_type_override(&type_name).unwrap_or_else(|msg| exit_with("New", msg));
                for document in &mut documents {
                    document.set_type(type_name.clone());
                }
            }
            tracing::debug!(documents = documents.len(), "read documents");

            let client = PasteClient::new(settings)?;
            let config = match load_new_page(&client).await {
                Ok(data) => data.config,
                Err(err) => exit_with("New", page_error_message(&err)),
            };
            let upload = upload_settings(name, expiry, max_views, &config.defaults);
            if let Err(violation) = config.size_limits.check(&documents, &upload) {
                exit_with("New", violation);
            }

            let paste = match client.upload_paste(&documents, &upload).await {
                Ok(paste) => paste,
                Err(err) => exit_with(
                    "New",
                    page_error_message(&PageError::from_client_error(&err, None)),
                ),
            };
            print_or_exit("New", format_created_output(&paste, json));
        }
        Commands::Get { id } => {
            let client = PasteClient::new(settings)?;
            let data = match load_paste_page(&client, &id).await {
                Ok(data) => data,
                Err(err) => exit_with("Get", page_error_message(&err)),
            };
            print_or_exit("Get", format_paste_output(&data.paste, json));
        }
        Commands::Config => {
            let client = PasteClient::new(settings)?;
            let data = match load_new_page(&client).await {
                Ok(data) => data,
                Err(err) => exit_with("Config", page_error_message(&err)),
            };
            print_or_exit("Config", format_config_output(&data.config, json));
        }
    }

    Ok(())
}
