use crate::logging::LogBuffer;
use anyhow::Context;
use cleaner_api::ApiClient;
use cleaner_core::browser::{Command, PAGE_SIZE_OPTIONS, RepositoryBrowser};
use cleaner_core::config::AppConfig;
use cleaner_core::gate::{GateStatus, Severity, TokenGate};
use cleaner_core::model::{
    ArchiveOutcome, Repository, RepositoryPage, RequestFailure, TokenValidation,
};
use cleaner_core::selection::SelectAllState;
use cleaner_core::session::Session;
use cleaner_core::shell::AppShell;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

const LOG_PANEL_HEIGHT: u16 = 7;
const LOG_PANEL_BORDER_HEIGHT: u16 = 2;
const LOG_HEADER_LINES: usize = 1;

pub fn run_tui(config: AppConfig, client: ApiClient, log_buffer: LogBuffer) -> anyhow::Result<()> {
    let mut app = TuiApp::new(config, client, log_buffer)?;

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    info!(api_url = %app.client.base_url(), "Starting TUI");
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if let Err(err) = result {
        error!(error = %err, "TUI exited with error");
        return Err(err);
    }
    app.shell.on_logout();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut TuiApp,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(200);
    debug!(
        tick_rate_ms = tick_rate.as_millis(),
        "TUI event loop started"
    );

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key)?
        {
            return Ok(());
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        app.poll_job_events();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum View {
    Gate,
    Browser,
    ArchiveConfirm,
}

/// Results of background API calls. `epoch` is the session epoch at spawn
/// time; events from an ended session are dropped.
#[derive(Debug)]
enum JobEvent {
    Validated {
        epoch: u64,
        result: Result<TokenValidation, String>,
    },
    Listed {
        epoch: u64,
        seq: u64,
        result: Result<RepositoryPage, RequestFailure>,
    },
    Archived {
        epoch: u64,
        result: Result<ArchiveOutcome, RequestFailure>,
    },
}

impl JobEvent {
    fn epoch(&self) -> u64 {
        match self {
            JobEvent::Validated { epoch, .. }
            | JobEvent::Listed { epoch, .. }
            | JobEvent::Archived { epoch, .. } => *epoch,
        }
    }
}

mod app_core;
mod draw;
mod handle;
mod helpers;
mod jobs;
#[cfg(test)]
mod tests;

use helpers::*;

struct TuiApp {
    config: AppConfig,
    shell: AppShell,
    client: ApiClient,
    runtime: tokio::runtime::Runtime,
    view: View,
    gate: TokenGate,
    browser: RepositoryBrowser,
    cursor: usize,
    scroll: usize,
    search_active: bool,
    log_buffer: LogBuffer,
    job_tx: mpsc::Sender<JobEvent>,
    job_rx: mpsc::Receiver<JobEvent>,
}
