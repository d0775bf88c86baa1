//! # file-search
//!
//! Client library for a document search backend. It shapes a user query
//! and filter set into a request payload, POSTs it to the backend's
//! `/api/search` endpoint, and reshapes the flat list of chunk matches
//! into a file-centric view grouped by filename, with aggregate scoring
//! and access-control metadata.
//!
//! ## Pipeline
//!
//! ```text
//! caller query + parsed filters
//!         │
//!         ▼
//! ┌─────────────────────┐
//! │ payload::build_payload │  wildcard/limit normalization,
//! └─────────┬───────────┘  wildcard filter pruning
//!           ▼
//! ┌─────────────────────┐
//! │ client::SearchClient │  POST /api/search, server error
//! └─────────┬───────────┘  messages surfaced verbatim
//!           ▼
//! ┌─────────────────────┐
//! │ aggregate::group_by_file │  one FileSummary per filename,
//! └─────────┬───────────┘  avg score, metadata backfill
//!           ▼
//! ┌─────────────────────┐
//! │ cache::SearchCache  │  dedup, stale-while-refetch,
//! └─────────────────────┘  no retries
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for endpoint, limits, and timeouts
//! - [`models`] - Wire types: `SearchPayload`, `ChunkResult`, `FileSummary`, parsed query data
//! - [`payload`] - Query normalization and wildcard filter pruning
//! - [`aggregate`] - The grouping pass from chunk matches to per-file summaries
//! - [`client`] - HTTP transport with server-message error surfacing
//! - [`cache`] - Query cache: request deduplication, placeholder data, retry disabled

pub mod aggregate;
pub mod cache;
pub mod client;
pub mod config;
pub mod models;
pub mod payload;

pub use cache::{QuerySnapshot, SearchCache};
pub use client::SearchClient;
pub use config::SearchConfig;
pub use models::{ChunkResult, FileSummary, ParsedQuery, QueryFilters};
