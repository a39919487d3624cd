// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, FromRow)]
pub struct SearchHit {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Raw query string of `GET /search`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Search request after validation; always within bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchCriteria {
    pub term: String,
    pub category: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchPage {
    pub query: String,
    pub category: Option<String>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub hits: Vec<SearchHit>,
}
