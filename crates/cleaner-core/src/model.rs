use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type RepoId = u64;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: RepoId,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub archived: bool,
    pub updated_at: String,
    pub stars: u64,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RepositoryPage {
    pub repositories: Vec<Repository>,
    pub total_count: u64,
    pub current_page: u32,
    pub total_pages: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TokenValidation {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl TokenValidation {
    pub fn invalid() -> Self {
        Self {
            valid: false,
            username: None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ArchiveRequest {
    pub repository_ids: Vec<RepoId>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FailedRepository {
    pub id: RepoId,
    pub name: String,
    pub error: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ArchiveOutcome {
    pub success: bool,
    pub archived_count: u64,
    #[serde(default)]
    pub failed_repositories: Vec<FailedRepository>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Updated,
    Name,
    Stars,
}

impl SortField {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortField::Updated => "updated",
            SortField::Name => "name",
            SortField::Stars => "stars",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for SortField {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "updated" => Ok(SortField::Updated),
            "name" => Ok(SortField::Name),
            "stars" => Ok(SortField::Stars),
            other => anyhow::bail!("unknown sort field: {other}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => anyhow::bail!("unknown sort order: {other}"),
        }
    }
}

/// Parameters of one repository listing request. `page` is 1-indexed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
}

impl ListQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page,
            search: None,
            sort: None,
            order: None,
        }
    }

    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string);
        self
    }

    pub fn with_sort(mut self, sort: Option<SortField>, order: Option<SortOrder>) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }

    /// Query parameters in request order. Absent filters are omitted entirely.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_param().to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_param().to_string()));
        }
        pairs
    }
}

/// Why a list or archive call failed, as far as the browser cares.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RequestFailure {
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repository_deserializes_optional_fields() {
        let value = json!({
            "id": 7,
            "name": "repo",
            "full_name": "me/repo",
            "description": null,
            "archived": false,
            "updated_at": "2024-01-01T00:00:00Z",
            "stars": 3
        });
        let repo: Repository = serde_json::from_value(value).unwrap();
        assert_eq!(repo.id, 7);
        assert_eq!(repo.description, None);
        assert_eq!(repo.language, None);
    }

    #[test]
    fn archive_outcome_defaults_failed_list() {
        let value = json!({"success": true, "archived_count": 2});
        let outcome: ArchiveOutcome = serde_json::from_value(value).unwrap();
        assert!(outcome.failed_repositories.is_empty());
    }

    #[test]
    fn query_pairs_omit_missing_filters() {
        let query = ListQuery::new(1, 100).with_search(Some("   "));
        assert_eq!(
            query.query_pairs(),
            vec![("page", "1".to_string()), ("per_page", "100".to_string())]
        );
    }

    #[test]
    fn query_pairs_include_filters_in_order() {
        let query = ListQuery::new(2, 30)
            .with_search(Some(" api "))
            .with_sort(Some(SortField::Stars), Some(SortOrder::Desc));
        let keys: Vec<&str> = query.query_pairs().iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec!["page", "per_page", "search", "sort", "order"]);
        assert_eq!(query.search.as_deref(), Some("api"));
    }

    #[test]
    fn sort_values_parse_case_insensitively() {
        assert_eq!("Stars".parse::<SortField>().unwrap(), SortField::Stars);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("size".parse::<SortField>().is_err());
    }
}
