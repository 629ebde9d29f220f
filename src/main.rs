use shorty::adapters::{Osc52Clipboard, ReqwestHttpClient, SystemClipboard, TuiSurface};
use shorty::api::ShortenerApi;
use shorty::app::{App, AppMessage};
use shorty::cli::{parse_args, run_cli_exit_status, CliCommand, EXIT_FAILURE, EXIT_USAGE, USAGE};
use shorty::client::ShortenerClient;
use shorty::config::ClientConfig;
use shorty::logging::{default_log_path, init_logging, LogTarget};
use shorty::terminal::{setup_panic_hook, TerminalManager};
use shorty::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner and feedback-expiry cadence.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<ExitCode> {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };
    let (env_config, env_warnings) = ClientConfig::from_env_with_warnings();
    let config = args.options.apply(env_config);

    if args.command != CliCommand::RunTui {
        let _log_guard = init_logging(&LogTarget::Stderr, &config.log_filter);
        log_warnings(&env_warnings);
        let status = run_cli_exit_status(&args.command, &config).unwrap_or(0);
        return Ok(ExitCode::from(status));
    }

    let _log_guard = default_log_path()
        .and_then(|path| init_logging(&LogTarget::File(path), &config.log_filter));
    log_warnings(&env_warnings);

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e.user_message());
        return Ok(ExitCode::from(EXIT_FAILURE));
    }

    color_eyre::install()?;

    // Restore the terminal before the panic message prints
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_tui(config))?;
    Ok(ExitCode::SUCCESS)
}

fn log_warnings(warnings: &[String]) {
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
}

async fn run_tui(config: ClientConfig) -> Result<()> {
    tracing::info!(
        "Starting shorty {} against {}{}",
        shorty::cli::VERSION,
        config.base_url,
        config.api_prefix
    );

    let http = ReqwestHttpClient::with_timeout(config.timeout).map_err(|e| eyre!(e.to_string()))?;
    let surface = TuiSurface::new();
    let client = ShortenerClient::new(
        ShortenerApi::new(Arc::new(http), config),
        Arc::new(surface.clone()),
        Arc::new(SystemClipboard::new()),
        Arc::new(Osc52Clipboard::stdout()),
    );
    let mut app = App::new(client, surface);

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    tracing::info!("Exiting");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: mpsc::UnboundedReceiver<AppMessage> = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("event loop already running"))?;

    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        if app.take_redraw() {
            let snapshot = app.surface().snapshot();
            let view = app.view_state(&snapshot);
            terminal.draw(|frame| ui::render(frame, &view))?;
        }

        tokio::select! {
            _ = ticker.tick() => app.tick(),

            Some(message) = message_rx.recv() => app.handle_message(message),

            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                    app.mark_dirty();
                }
                Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::error!("Terminal event error: {}", e);
                    return Err(e.into());
                }
                None => break,
            },
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
