use super::*;

pub(super) const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Parser)]
#[command(
    name = "repo-cleaner",
    author,
    version,
    about = "Browse your repositories and archive them in bulk"
)]
pub(super) struct Cli {
    #[arg(
        long,
        global = true,
        help = "Backend API base URL (overrides config and REPO_CLEANER_API_URL)"
    )]
    pub(super) api_url: Option<String>,
    #[arg(long, global = true, help = "Path to the config file")]
    pub(super) config: Option<PathBuf>,
    #[command(subcommand)]
    pub(super) command: Option<Commands>,
}

#[derive(clap::Subcommand)]
pub(super) enum Commands {
    #[command(about = "Launch terminal UI (default)")]
    Tui,
    #[command(about = "Check that the token is accepted by the backend")]
    Validate(TokenSourceArgs),
    #[command(about = "List one page of repositories")]
    List(ListArgs),
    #[command(about = "Archive repositories by id")]
    Archive(ArchiveArgs),
}

#[derive(clap::Args)]
pub(super) struct TokenSourceArgs {
    #[arg(
        long,
        default_value = DEFAULT_TOKEN_ENV,
        help = "Environment variable holding the access token"
    )]
    pub(super) token_env: String,
}

#[derive(Parser)]
pub(super) struct ListArgs {
    #[command(flatten)]
    pub(super) token: TokenSourceArgs,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub(super) page: u32,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub(super) per_page: Option<u32>,
    #[arg(long)]
    pub(super) search: Option<String>,
    #[arg(long, value_enum)]
    pub(super) sort: Option<SortFieldValue>,
    #[arg(long, value_enum)]
    pub(super) order: Option<SortOrderValue>,
    #[arg(long, help = "Print the raw page as JSON")]
    pub(super) json: bool,
}

#[derive(Parser)]
pub(super) struct ArchiveArgs {
    #[command(flatten)]
    pub(super) token: TokenSourceArgs,
    #[arg(required = true, help = "Repository ids to archive")]
    pub(super) ids: Vec<u64>,
    #[arg(long, help = "Print the archive outcome as JSON")]
    pub(super) json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub(super) enum SortFieldValue {
    Updated,
    Name,
    Stars,
}

impl From<SortFieldValue> for SortField {
    fn from(value: SortFieldValue) -> Self {
        match value {
            SortFieldValue::Updated => SortField::Updated,
            SortFieldValue::Name => SortField::Name,
            SortFieldValue::Stars => SortField::Stars,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub(super) enum SortOrderValue {
    Asc,
    Desc,
}

impl From<SortOrderValue> for SortOrder {
    fn from(value: SortOrderValue) -> Self {
        match value {
            SortOrderValue::Asc => SortOrder::Asc,
            SortOrderValue::Desc => SortOrder::Desc,
        }
    }
}
