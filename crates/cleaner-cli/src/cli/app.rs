use super::*;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    let log_buffer = LogBuffer::new(logging::LOG_BUFFER_CAPACITY);
    init_tracing(&log_buffer, interactive);

    let config = load_config(cli.config.as_deref(), cli.api_url.as_deref())?;
    info!(
        command = command_label(cli.command.as_ref()),
        api_url = %config.api_url,
        "Running command"
    );

    let client = ApiClient::new(&config.api_url, Session::new())?;
    match cli.command {
        None | Some(Commands::Tui) => tui::run_tui(config, client, log_buffer),
        Some(Commands::Validate(args)) => handle_validate(&client, &args),
        Some(Commands::List(args)) => handle_list(&client, &config, &args),
        Some(Commands::Archive(args)) => handle_archive(&client, &args),
    }
}

/// The TUI owns the terminal, so only headless commands log to stderr.
fn init_tracing(log_buffer: &LogBuffer, interactive: bool) {
    let default_level = if interactive { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let stderr_layer =
        (!interactive).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(LogLayer::new(log_buffer.clone()))
        .init();
}

pub(super) fn load_config(path: Option<&Path>, api_url: Option<&str>) -> anyhow::Result<AppConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };
    let config = AppConfig::load(&path)
        .with_context(|| format!("load config from {}", path.display()))?;
    Ok(config.with_env_overrides().with_api_url(api_url).normalized())
}

pub(super) fn command_label(command: Option<&Commands>) -> &'static str {
    match command {
        None | Some(Commands::Tui) => "tui",
        Some(Commands::Validate(_)) => "validate",
        Some(Commands::List(_)) => "list",
        Some(Commands::Archive(_)) => "archive",
    }
}
