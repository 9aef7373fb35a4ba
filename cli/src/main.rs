//! CLI entrypoint for Dr. Legal
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use drlegal_application::{ResolveBodyUseCase, RouteMessageUseCase};
use drlegal_domain::AreaClassifier;
use drlegal_infrastructure::{ChatCompletionsGenerator, ConfigLoader, FileConfig};
use drlegal_presentation::{AppState, ChatRepl, Cli, ConsoleFormatter, OutputFormat};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let mut fatal = false;
    for issue in config.validate() {
        if issue.is_error() {
            tracing::error!("Config error: {}", issue);
            fatal = true;
        } else {
            warn!("Config warning: {}", issue);
        }
    }
    if fatal {
        bail!("Invalid configuration; see errors above");
    }

    info!("Starting Dr. Legal");

    let use_case = build_router(&config)?;

    let output = cli
        .output
        .or_else(|| config.output.format.as_deref().and_then(OutputFormat::from_config))
        .unwrap_or(OutputFormat::Text);

    if cli.serve {
        let port = cli.port.unwrap_or_else(|| config.server.resolve_port());
        let addr: SocketAddr = format!("{}:{}", config.server.host, port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", config.server.host, port))?;
        drlegal_presentation::server::serve(AppState::new(use_case), addr).await?;
        return Ok(());
    }

    if cli.chat {
        ChatRepl::new(use_case).with_output(output).run().await?;
        return Ok(());
    }

    // Single message mode - message is required
    let message = match cli.message {
        Some(m) => m,
        None => bail!("Message is required. Use --chat for interactive mode or --serve for HTTP."),
    };

    if cli.classify {
        let result = AreaClassifier::new(use_case.lexicon()).classify_detailed(&message);
        println!("{}", ConsoleFormatter::format_classification(&result));
        return Ok(());
    }

    let routed = use_case.execute(&message).await;

    let rendered = match output {
        OutputFormat::Text => ConsoleFormatter::format_text(&routed),
        OutputFormat::Html => ConsoleFormatter::format_html(&routed),
        OutputFormat::Json => ConsoleFormatter::format_json(&routed),
    };
    println!("{}", rendered);

    Ok(())
}

/// Assemble the router from configuration.
fn build_router(config: &FileConfig) -> Result<RouteMessageUseCase> {
    let lexicon = Arc::new(config.lexicon.to_lexicon()?);
    if config.lexicon.is_override() {
        info!("Using configured lexicon with {} areas", lexicon.len());
    }

    let settings = config.generator_settings();
    if settings.api_key.is_none() {
        warn!(
            "{} is not set; on-topic messages will get the fallback reply",
            config.generator.api_key_env
        );
    }
    let generator = Arc::new(ChatCompletionsGenerator::new(settings)?);

    let resolve_body = ResolveBodyUseCase::new(generator, lexicon.clone())
        .with_params(config.routing_params());

    let channel = Arc::new(config.whatsapp_channel());
    info!("Contact channel: WhatsApp {}", channel.number());

    Ok(RouteMessageUseCase::new(lexicon, channel, resolve_body))
}
