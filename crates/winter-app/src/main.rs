mod cli;
mod render;
mod uplink;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use winter_ai::{GeminiClient, SessionController, SubmitOutcome};
use winter_common::WinterError;
use winter_config::WinterConfig;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already present in the environment are left untouched.
fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/winter-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for (key, value) in contents.lines().filter_map(parse_env_line) {
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
            return;
        }
    }
}

fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim().trim_matches('"').trim_matches('\'')))
}

fn load_config(path: Option<&str>) -> winter_common::Result<WinterConfig> {
    let config = match path {
        Some(p) => winter_config::load_config_from(Path::new(p))?,
        None => winter_config::load_config()?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() {
    load_dotenv();

    let args = cli::parse();

    // Config is read before logging so its level can seed the filter;
    // the failure is reported once the subscriber exists.
    let config_result = load_config(args.config.as_deref());
    let default_directive = config_result
        .as_ref()
        .map(|c| c.logging.level.directive())
        .unwrap_or("winter=info");
    let log_directive = args.log_level.as_deref().unwrap_or(default_directive);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "winter=info".parse().expect("static directive")),
            ),
        )
        .init();

    tracing::info!("Winter v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = config_result.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        WinterConfig::default()
    });

    if let Err(e) = run(args, config).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

async fn run(args: cli::Args, config: WinterConfig) -> winter_common::Result<()> {
    let gemini = uplink::gemini_config(&config.assistant, args.model.as_deref());
    tracing::info!(model = %gemini.model, key_env = %gemini.api_key_env, "Uplink configured");

    let client = GeminiClient::new(gemini)?;
    let controller = Arc::new(SessionController::new(
        Arc::new(client),
        uplink::session_settings(&config.assistant),
    ));

    if let Some(text) = args.once {
        let outcome = controller.submit(text).await;
        render::print_transcript(&controller.messages());
        return match outcome {
            SubmitOutcome::Empty => Err(WinterError::Other("nothing to send".into())),
            SubmitOutcome::Failed(e) => Err(e.into()),
            SubmitOutcome::Busy | SubmitOutcome::Replied => Ok(()),
        };
    }

    interactive(controller).await
}

/// Read stdin lines until EOF or `/quit`, submitting each one.
///
/// Each submission runs in its own task so lines typed while a reply is
/// outstanding reach the controller and are dropped there.
async fn interactive(controller: Arc<SessionController>) -> winter_common::Result<()> {
    let rx = controller.subscribe();
    render::print_transcript(&controller.messages());
    let renderer = tokio::spawn(render::run(Arc::downgrade(&controller), rx));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight: Option<tokio::task::JoinHandle<SubmitOutcome>> = None;

    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/quit" {
            break;
        }
        let c = controller.clone();
        let handle = tokio::spawn(async move {
            let outcome = c.submit(line).await;
            if matches!(outcome, SubmitOutcome::Busy) {
                tracing::debug!("input ignored while awaiting reply");
            }
            outcome
        });
        // Keep the task that owns the pending request, not the dropped ones.
        if !matches!(&in_flight, Some(h) if !h.is_finished()) {
            in_flight = Some(handle);
        }
    }

    if let Some(handle) = in_flight {
        if controller.is_pending() {
            tracing::info!("Waiting for outstanding reply...");
        }
        let _ = handle.await;
    }
    drop(controller);
    let _ = renderer.await;
    Ok(())
}
