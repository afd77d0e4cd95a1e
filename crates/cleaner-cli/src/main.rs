mod cli;
mod logging;
mod tui;

fn main() -> anyhow::Result<()> {
    cli::run()
}
