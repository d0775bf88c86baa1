use serde::{Deserialize, Serialize};

/// Request body for POST /api/search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchPayload {
    pub query: String,
    pub limit: usize,
    #[serde(rename = "scoreThreshold")]
    pub score_threshold: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<SearchFilters>,
}

/// Filter dimensions attached to a search request. Each dimension is
/// only present when the caller narrowed it to specific ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_types: Option<Vec<String>>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.data_sources.is_none()
            && self.document_types.is_none()
            && self.owners.is_none()
            && self.connector_types.is_none()
    }
}

/// One matched text span returned by the search backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkResult {
    pub filename: String,
    pub mimetype: String,
    #[serde(default)]
    pub page: u32,
    pub text: String,
    pub score: f32,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub connector_type: Option<String>,
    #[serde(default)]
    pub embedding_model: Option<String>,
    #[serde(default)]
    pub embedding_dimensions: Option<u32>,
    #[serde(default)]
    pub index: Option<usize>,
    #[serde(default)]
    pub allowed_users: Option<Vec<String>>,
    #[serde(default)]
    pub allowed_groups: Option<Vec<String>>,
}

/// Lifecycle status of a file record. Never set by aggregation; other
/// flows (indexing, sync) fill it in on the records they produce.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Processing,
    Active,
    Unavailable,
    Failed,
    Hidden,
    Sync,
}

/// Per-filename aggregate of the chunks that matched a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    pub filename: String,
    pub mimetype: String,
    #[serde(rename = "chunkCount")]
    pub chunk_count: usize,
    #[serde(rename = "avgScore")]
    pub avg_score: f32,
    pub source_url: String,
    pub owner: String,
    pub owner_name: String,
    pub owner_email: String,
    pub size: u64,
    pub connector_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_dimensions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FileStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub chunks: Vec<ChunkResult>,
    pub allowed_users: Vec<String>,
    pub allowed_groups: Vec<String>,
}

/// Parsed query data from the caller's filter UI. The literal "*" in a
/// filter dimension means "match everything" for that dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParsedQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub score_threshold: Option<f32>,
    #[serde(default)]
    pub filters: Option<QueryFilters>,
}

/// Filter state as selected in the caller's UI, before wildcard pruning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryFilters {
    pub data_sources: Vec<String>,
    pub document_types: Vec<String>,
    pub owners: Vec<String>,
    #[serde(default)]
    pub connector_types: Option<Vec<String>>,
}

/// Successful response body from the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<ChunkResult>,
}

/// Error body carried by non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
