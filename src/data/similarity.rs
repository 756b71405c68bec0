use crate::error::{AppError, AppResult};

/// Dense, square matrix of pairwise similarity scores, stored row-major
///
/// Scores are treated as an opaque ordering key: no bounds or normalization
/// are assumed.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Builds a matrix from rows, rejecting anything that is not square
    pub fn from_rows(rows: Vec<Vec<f64>>) -> AppResult<Self> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(AppError::Schema(format!(
                    "Similarity matrix must be square: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            scores.extend(row);
        }

        Ok(Self { size, scores })
    }

    /// Parses a JSON array of numeric rows
    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        let rows: Vec<Vec<f64>> = serde_json::from_str(raw).map_err(|e| {
            AppError::Schema(format!(
                "Similarity matrix must be a JSON array of numeric rows: {}",
                e
            ))
        })?;
        Self::from_rows(rows)
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        Some(&self.scores[start..start + self.size])
    }
}
