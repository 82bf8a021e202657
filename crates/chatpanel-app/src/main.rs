mod cli;
mod host;
mod protocol;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use chatpanel_common::PanelError;
use chatpanel_config::PanelConfig;
use chatpanel_core::{PanelController, PanelOptions, WidgetEvent, WidgetOptions};
use chatpanel_session::{HttpCredentialProvider, ProviderConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use host::{HostEvent, LineHost};
use protocol::{emit, parse_line, Command, Output};

const DEFAULT_LOG_DIRECTIVE: &str = "chatpanel=info";

fn init_logging(directive: &str) {
    let directive: Result<Directive, _> = directive
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse());
    let filter = match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn provider_config(config: &PanelConfig) -> ProviderConfig {
    let session = &config.session;
    ProviderConfig::new(&session.endpoint, &session.workflow_id)
        .with_connect_timeout(Duration::from_secs(u64::from(session.connect_timeout_secs)))
        .with_request_timeout(Duration::from_secs(u64::from(session.request_timeout_secs)))
        .with_verbose(config.logging.verbose)
}

fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let args = cli::parse();

    let loaded = chatpanel_config::load_config(args.config.as_deref().map(Path::new));
    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => {
            let mut config = PanelConfig::default();
            chatpanel_config::apply_env_overrides(&mut config);
            config
        }
    };
    args.apply_to(&mut config);
    chatpanel_config::normalize(&mut config);

    init_logging(&config.logging.level);
    tracing::info!("chatpanel v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Err(e) = loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Err(e) = chatpanel_config::validation::validate(&config) {
        tracing::error!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    if args.print_options {
        let options = WidgetOptions::build(&config, config.theme.scheme);
        emit(&Output::Options { options: &options });
        return ExitCode::SUCCESS;
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(config)) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("chatpanel failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: PanelConfig) -> chatpanel_common::Result<()> {
    let provider = HttpCredentialProvider::new(provider_config(&config))
        .map_err(|e| PanelError::SessionCreation(e.to_string()))?;
    tracing::info!(
        endpoint = %provider.config().endpoint,
        workflow_id = %provider.config().workflow_id,
        "Session provider ready"
    );

    let (host, mut host_events) = LineHost::new(config.theme.scheme);
    let host = Arc::new(host);
    let options = PanelOptions {
        verbose: config.logging.verbose,
    };
    let mut panel = PanelController::new(config, Arc::new(provider), host.clone(), options);

    emit(&Output::Options {
        options: &panel.widget_options(host.scheme()),
    });
    panel.request_session();
    emit(&Output::Status {
        status: &panel.status(),
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    tracing::info!("Reading widget events from stdin");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("stdin closed");
                    break;
                };
                handle_line(&mut panel, &line);
            }
            Some(completion) = panel.next_completion() => {
                if panel.apply_completion(completion) {
                    emit(&Output::Status { status: &panel.status() });
                }
            }
            Some(event) = host_events.recv() => {
                handle_host_event(&panel, event);
            }
        }
    }

    Ok(())
}

fn handle_line(panel: &mut PanelController, line: &str) {
    let command = match parse_line(line) {
        Ok(Some(command)) => command,
        Ok(None) => return,
        Err(message) => {
            tracing::warn!("Ignoring input line: {message}");
            emit(&Output::InputError { message: &message });
            return;
        }
    };

    match command {
        Command::Reset => panel.reset(),
        Command::Status => {}
        Command::Widget(WidgetEvent::ClientTool(invocation)) => {
            let result = panel.on_client_tool(&invocation);
            emit(&Output::ToolResult {
                tool: &invocation.name,
                result,
            });
            return;
        }
        Command::Widget(event) => {
            panel.handle_event(event);
        }
    }
    emit(&Output::Status {
        status: &panel.status(),
    });
}

fn handle_host_event(panel: &PanelController, event: HostEvent) {
    match event {
        HostEvent::FactSaved(action) => emit(&Output::Fact { action: &action }),
        HostEvent::ResponseEnded => emit(&Output::ResponseEnd),
        HostEvent::ThemeChanged(scheme) => {
            emit(&Output::Theme { scheme });
            emit(&Output::Options {
                options: &panel.widget_options(scheme),
            });
        }
    }
}
