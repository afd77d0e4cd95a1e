use super::*;
use cleaner_core::gate::INVALID_TOKEN_MESSAGE;
use cleaner_core::model::{ListQuery, Repository, TokenValidation};
use std::future::Future;

fn block_on<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("create command runtime")?;
    Ok(runtime.block_on(future))
}

pub(super) fn read_token(env_name: &str) -> anyhow::Result<String> {
    std::env::var(env_name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .with_context(|| format!("set {env_name} to a personal access token"))
}

fn authenticate(client: &ApiClient, args: &TokenSourceArgs) -> anyhow::Result<TokenValidation> {
    let token = read_token(&args.token_env)?;
    let validation = block_on(client.validate_token(&token))??;
    if !validation.valid {
        anyhow::bail!(INVALID_TOKEN_MESSAGE);
    }
    client.session().login(&token);
    Ok(validation)
}

pub(super) fn handle_validate(client: &ApiClient, args: &TokenSourceArgs) -> anyhow::Result<()> {
    let validation = authenticate(client, args)?;
    match validation.username {
        Some(username) => println!("Token valid for {username}"),
        None => println!("Token valid"),
    }
    Ok(())
}

pub(super) fn handle_list(
    client: &ApiClient,
    config: &AppConfig,
    args: &ListArgs,
) -> anyhow::Result<()> {
    authenticate(client, &args.token)?;
    let sort = args.sort.map(SortField::from).or(config.sort);
    let order = args.order.map(SortOrder::from).or(config.order);
    let query = ListQuery::new(args.page, args.per_page.unwrap_or(config.per_page))
        .with_search(args.search.as_deref())
        .with_sort(sort, order);
    let page = block_on(client.get_repositories(&query))??;
    info!(
        page = page.current_page,
        count = page.repositories.len(),
        "Repositories loaded"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }
    if page.repositories.is_empty() {
        println!("{}", cleaner_core::browser::EMPTY_NOTICE);
    }
    for repo in &page.repositories {
        println!("{}", repo_line(repo));
    }
    println!(
        "Page {}/{} ({} total)",
        page.current_page,
        page.total_pages.max(1),
        page.total_count
    );
    Ok(())
}

pub(super) fn handle_archive(client: &ApiClient, args: &ArchiveArgs) -> anyhow::Result<()> {
    authenticate(client, &args.token)?;
    let outcome = block_on(client.archive_repositories(&args.ids))??;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("Archived {} repositories", outcome.archived_count);
        for failed in &outcome.failed_repositories {
            println!("  failed: {} ({}): {}", failed.name, failed.id, failed.error);
        }
    }
    if !outcome.success {
        anyhow::bail!(
            "failed to archive {} repositories",
            outcome.failed_repositories.len()
        );
    }
    Ok(())
}

pub(super) fn repo_line(repo: &Repository) -> String {
    let status = if repo.archived { "archived" } else { "active" };
    format!(
        "{:>10}  {:<8}  {:>6}  {:<12}  {}",
        repo.id,
        status,
        repo.stars,
        repo.language.as_deref().unwrap_or("-"),
        repo.full_name
    )
}
