use std::collections::HashMap;

use crate::models::{ChunkResult, FileSummary};

/// Per-filename accumulator built during the single grouping pass.
struct FileAccumulator {
    filename: String,
    mimetype: String,
    chunks: Vec<ChunkResult>,
    total_score: f32,
    source_url: Option<String>,
    owner: Option<String>,
    owner_name: Option<String>,
    owner_email: Option<String>,
    file_size: Option<u64>,
    connector_type: Option<String>,
    embedding_model: Option<String>,
    embedding_dimensions: Option<u32>,
    allowed_users: Vec<String>,
    allowed_groups: Vec<String>,
}

impl FileAccumulator {
    fn seed(chunk: &ChunkResult) -> Self {
        Self {
            filename: chunk.filename.clone(),
            mimetype: chunk.mimetype.clone(),
            chunks: vec![chunk.clone()],
            total_score: chunk.score,
            source_url: chunk.source_url.clone(),
            owner: chunk.owner.clone(),
            owner_name: chunk.owner_name.clone(),
            owner_email: chunk.owner_email.clone(),
            file_size: chunk.file_size,
            connector_type: chunk.connector_type.clone(),
            embedding_model: chunk.embedding_model.clone(),
            embedding_dimensions: chunk.embedding_dimensions,
            allowed_users: chunk.allowed_users.clone().unwrap_or_default(),
            allowed_groups: chunk.allowed_groups.clone().unwrap_or_default(),
        }
    }

    fn absorb(&mut self, chunk: &ChunkResult) {
        self.chunks.push(chunk.clone());
        self.total_score += chunk.score;
        // First-seen metadata wins; embedding info backfills if absent
        if self.embedding_model.is_none() && chunk.embedding_model.is_some() {
            self.embedding_model = chunk.embedding_model.clone();
        }
        if self.embedding_dimensions.is_none() && chunk.embedding_dimensions.is_some() {
            self.embedding_dimensions = chunk.embedding_dimensions;
        }
    }

    fn finalize(self) -> FileSummary {
        let chunk_count = self.chunks.len();
        FileSummary {
            filename: self.filename,
            mimetype: self.mimetype,
            chunk_count,
            avg_score: self.total_score / chunk_count as f32,
            source_url: self.source_url.unwrap_or_default(),
            owner: self.owner.unwrap_or_default(),
            owner_name: self.owner_name.unwrap_or_default(),
            owner_email: self.owner_email.unwrap_or_default(),
            size: self.file_size.unwrap_or(0),
            connector_type: self
                .connector_type
                .unwrap_or_else(|| "local".to_string()),
            embedding_model: self.embedding_model,
            embedding_dimensions: self.embedding_dimensions,
            status: None,
            error: None,
            chunks: self.chunks,
            allowed_users: self.allowed_users,
            allowed_groups: self.allowed_groups,
        }
    }
}

/// Group a flat chunk list into one [`FileSummary`] per distinct filename.
///
/// One pass: a new filename seeds an accumulator from its chunk; a repeat
/// filename appends the chunk and adds its score. Summaries come back in
/// first-seen order, with `avg_score = total / chunk_count` and safe
/// defaults for metadata no chunk carried.
pub fn group_by_file(chunks: &[ChunkResult]) -> Vec<FileSummary> {
    let mut file_map: HashMap<String, FileAccumulator> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for chunk in chunks {
        match file_map.get_mut(&chunk.filename) {
            Some(acc) => acc.absorb(chunk),
            None => {
                order.push(chunk.filename.clone());
                file_map.insert(chunk.filename.clone(), FileAccumulator::seed(chunk));
            }
        }
    }

    order
        .into_iter()
        .filter_map(|filename| file_map.remove(&filename))
        .map(FileAccumulator::finalize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_chunk(filename: &str, page: u32, score: f32) -> ChunkResult {
        ChunkResult {
            filename: filename.to_string(),
            mimetype: "application/pdf".to_string(),
            page,
            text: format!("chunk from {filename} page {page}"),
            score,
            source_url: None,
            owner: None,
            owner_name: None,
            owner_email: None,
            file_size: None,
            connector_type: None,
            embedding_model: None,
            embedding_dimensions: None,
            index: None,
            allowed_users: None,
            allowed_groups: None,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_file(&[]).is_empty());
    }

    #[test]
    fn test_one_summary_per_distinct_filename() {
        let chunks = vec![
            make_chunk("a.pdf", 1, 0.9),
            make_chunk("b.pdf", 1, 0.8),
            make_chunk("a.pdf", 2, 0.7),
            make_chunk("c.pdf", 1, 0.6),
            make_chunk("b.pdf", 3, 0.5),
        ];
        let files = group_by_file(&chunks);
        assert_eq!(files.len(), 3);
        let total_chunks: usize = files.iter().map(|f| f.chunk_count).sum();
        assert_eq!(total_chunks, chunks.len());
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let chunks = vec![
            make_chunk("b.pdf", 1, 0.2),
            make_chunk("a.pdf", 1, 0.9),
            make_chunk("b.pdf", 2, 0.4),
        ];
        let files = group_by_file(&chunks);
        assert_eq!(files[0].filename, "b.pdf");
        assert_eq!(files[1].filename, "a.pdf");
    }

    #[test]
    fn test_avg_score_is_sum_over_count() {
        let chunks = vec![
            make_chunk("a.pdf", 1, 0.9),
            make_chunk("a.pdf", 2, 0.6),
            make_chunk("a.pdf", 3, 0.3),
        ];
        let files = group_by_file(&chunks);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].chunk_count, 3);
        assert!((files[0].avg_score - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_embedding_model_backfills_from_later_chunk() {
        let mut first = make_chunk("a.pdf", 1, 0.9);
        first.embedding_model = None;
        let mut second = make_chunk("a.pdf", 2, 0.8);
        second.embedding_model = Some("nomic-embed-text".to_string());
        second.embedding_dimensions = Some(768);

        let files = group_by_file(&[first, second]);
        assert_eq!(
            files[0].embedding_model.as_deref(),
            Some("nomic-embed-text")
        );
        assert_eq!(files[0].embedding_dimensions, Some(768));
    }

    #[test]
    fn test_embedding_model_not_overwritten_once_set() {
        let mut first = make_chunk("a.pdf", 1, 0.9);
        first.embedding_model = Some("first-model".to_string());
        let mut second = make_chunk("a.pdf", 2, 0.8);
        second.embedding_model = Some("second-model".to_string());

        let files = group_by_file(&[first, second]);
        assert_eq!(files[0].embedding_model.as_deref(), Some("first-model"));
    }

    #[test]
    fn test_metadata_defaults_when_absent() {
        let files = group_by_file(&[make_chunk("a.pdf", 1, 0.9)]);
        let file = &files[0];
        assert_eq!(file.source_url, "");
        assert_eq!(file.owner, "");
        assert_eq!(file.size, 0);
        assert_eq!(file.connector_type, "local");
        assert!(file.status.is_none());
        assert!(file.allowed_users.is_empty());
        assert!(file.allowed_groups.is_empty());
    }

    #[test]
    fn test_first_seen_metadata_wins() {
        let mut first = make_chunk("a.pdf", 1, 0.9);
        first.owner = Some("alice".to_string());
        first.file_size = Some(1024);
        first.connector_type = Some("gdrive".to_string());
        first.allowed_users = Some(vec!["alice".to_string()]);
        let mut second = make_chunk("a.pdf", 2, 0.8);
        second.owner = Some("bob".to_string());
        second.file_size = Some(2048);

        let files = group_by_file(&[first, second]);
        let file = &files[0];
        assert_eq!(file.owner, "alice");
        assert_eq!(file.size, 1024);
        assert_eq!(file.connector_type, "gdrive");
        assert_eq!(file.allowed_users, vec!["alice".to_string()]);
    }

    #[test]
    fn test_chunks_carried_in_full() {
        let chunks = vec![
            make_chunk("a.pdf", 1, 0.9),
            make_chunk("a.pdf", 2, 0.8),
        ];
        let files = group_by_file(&chunks);
        assert_eq!(files[0].chunks.len(), 2);
        assert_eq!(files[0].chunks[0].page, 1);
        assert_eq!(files[0].chunks[1].page, 2);
    }
}
