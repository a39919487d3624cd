// src/search/service.rs
use crate::db::SearchRepository;
use crate::models::{SearchCriteria, SearchPage, SearchParams};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;
pub const MAX_TERM_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search term must not be empty")]
    EmptyQuery,
    #[error("search term must be at most {} characters", MAX_TERM_CHARS)]
    QueryTooLong,
    #[error("search parameters must not contain control characters")]
    ControlCharacters,
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    term: String,
    category: Option<String>,
    limit: i64,
    offset: i64,
}

impl From<&SearchCriteria> for CacheKey {
    fn from(criteria: &SearchCriteria) -> Self {
        Self {
            term: criteria.term.to_lowercase(),
            category: criteria.category.clone(),
            limit: criteria.limit,
            offset: criteria.offset,
        }
    }
}

pub struct SearchService {
    repository: Arc<dyn SearchRepository>,
    cache: Cache<CacheKey, SearchPage>,
}

impl SearchService {
    pub fn new(
        repository: Arc<dyn SearchRepository>,
        cache_capacity: u64,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache: Cache::builder()
                .max_capacity(cache_capacity)
                .time_to_live(cache_ttl)
                .build(),
        }
    }

    pub fn criteria(params: &SearchParams) -> Result<SearchCriteria, SearchError> {
        let term = params.q.trim();
        if term.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        if term.chars().count() > MAX_TERM_CHARS {
            return Err(SearchError::QueryTooLong);
        }

        let category = params
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        // Postgres rejects NUL in text parameters
        let has_control = |s: &str| s.chars().any(char::is_control);
        if has_control(term) || category.as_deref().is_some_and(has_control) {
            return Err(SearchError::ControlCharacters);
        }

        Ok(SearchCriteria {
            term: term.to_string(),
            category,
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            offset: params.offset.unwrap_or(0).max(0),
        })
    }

    pub async fn search(&self, params: &SearchParams) -> Result<SearchPage, SearchError> {
        let criteria = Self::criteria(params)?;

        let cache_key = CacheKey::from(&criteria);
        if let Some(mut cached) = self.cache.get(&cache_key).await {
            tracing::debug!("Cache hit for key: {:?}", cache_key);
            cached.query = criteria.term;
            return Ok(cached);
        }

        let (hits, total) = tokio::try_join!(
            self.repository.find(&criteria),
            self.repository.count(&criteria)
        )?;

        let page = SearchPage {
            query: criteria.term,
            category: criteria.category,
            total,
            limit: criteria.limit,
            offset: criteria.offset,
            hits,
        };

        self.cache.insert(cache_key, page.clone()).await;
        tracing::info!(
            query = %page.query,
            total = page.total,
            returned = page.hits.len(),
            "Search completed"
        );
        Ok(page)
    }
}
