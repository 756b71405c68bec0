use std::fs;
use std::path::Path;

use crate::{
    data::{Catalog, MovieTable, SimilarityMatrix},
    error::{AppError, AppResult},
};

/// Loads the movie table and the similarity matrix from disk.
///
/// Any failure here is fatal: the service must not serve recommendations
/// without both artifacts. The matrix is not checked against the table
/// size; a mismatch is only logged.
pub fn load(movies_path: &Path, similarity_path: &Path) -> AppResult<Catalog> {
    let table = MovieTable::from_json_str(&read_artifact(movies_path)?)?;
    tracing::info!(
        path = %movies_path.display(),
        movies = table.len(),
        "Loaded movie table"
    );

    let similarity = SimilarityMatrix::from_json_str(&read_artifact(similarity_path)?)?;
    tracing::info!(
        path = %similarity_path.display(),
        size = similarity.size(),
        "Loaded similarity matrix"
    );

    if similarity.size() != table.len() {
        tracing::warn!(
            movies = table.len(),
            matrix_size = similarity.size(),
            "Similarity matrix size does not match movie table"
        );
    }

    Ok(Catalog::new(table, similarity))
}

fn read_artifact(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })
}
