use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::MovieRecord,
};

pub const MOVIE_ID_COLUMN: &str = "movie_id";
pub const TITLE_COLUMN: &str = "title";

/// Ordered movie metadata
///
/// Row order defines the index space shared with the similarity matrix.
#[derive(Debug, Clone, Default)]
pub struct MovieTable {
    movies: Vec<MovieRecord>,
}

impl MovieTable {
    pub fn from_records(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    /// Parses a column-oriented table.
    ///
    /// Each column is either a JSON array or an object keyed by row index
    /// (`{"0": ..., "1": ...}`), which is what a pandas `to_dict()` export
    /// looks like. Only `movie_id` and `title` are read.
    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| AppError::Schema(format!("Movie table is not valid JSON: {}", e)))?;

        let columns = value.as_object().ok_or_else(|| {
            AppError::Schema("Movie table must be a JSON object of columns".to_string())
        })?;

        let ids = column_values(columns, MOVIE_ID_COLUMN)?;
        let titles = column_values(columns, TITLE_COLUMN)?;

        if ids.len() != titles.len() {
            return Err(AppError::Schema(format!(
                "Column length mismatch: {} has {} rows, {} has {}",
                MOVIE_ID_COLUMN,
                ids.len(),
                TITLE_COLUMN,
                titles.len()
            )));
        }

        if let Some(((id_row, _), (title_row, _))) = ids
            .iter()
            .zip(&titles)
            .find(|((id_row, _), (title_row, _))| id_row != title_row)
        {
            return Err(AppError::Schema(format!(
                "Row index mismatch: {} has row {} where {} has row {}",
                MOVIE_ID_COLUMN, id_row, TITLE_COLUMN, title_row
            )));
        }

        let movies = ids
            .into_iter()
            .zip(titles)
            .map(|((row, id), (_, title))| {
                Ok(MovieRecord {
                    movie_id: parse_movie_id(row, &id)?,
                    title: parse_title(row, &title)?,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { movies })
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Row of the first movie whose title matches exactly (case-sensitive)
    pub fn position(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|movie| movie.title == title)
    }

    /// Movies whose title contains `query`, ignoring case, in table order
    pub fn search(&self, query: &str) -> Vec<&MovieRecord> {
        let needle = query.trim().to_lowercase();
        self.movies
            .iter()
            .filter(|movie| needle.is_empty() || movie.title.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Extracts a column as `(row index, value)` pairs in row order.
/// Array columns are indexed by position.
fn column_values(columns: &Map<String, Value>, name: &str) -> AppResult<Vec<(usize, Value)>> {
    let column = columns.get(name).ok_or_else(|| {
        AppError::Schema(format!("The movie table must include a '{}' column", name))
    })?;

    match column {
        Value::Array(values) => Ok(values.iter().cloned().enumerate().collect()),
        Value::Object(indexed) => {
            let mut rows = indexed
                .iter()
                .map(|(key, value)| {
                    key.parse::<usize>()
                        .map(|row| (row, value.clone()))
                        .map_err(|_| {
                            AppError::Schema(format!(
                                "Column '{}' has non-numeric row index '{}'",
                                name, key
                            ))
                        })
                })
                .collect::<AppResult<Vec<_>>>()?;
            rows.sort_by_key(|(row, _)| *row);
            Ok(rows)
        }
        _ => Err(AppError::Schema(format!(
            "Column '{}' must be an array or an index-keyed object",
            name
        ))),
    }
}

fn parse_movie_id(row: usize, value: &Value) -> AppResult<i64> {
    value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|id| id.fract() == 0.0)
                .map(|id| id as i64)
        })
        .ok_or_else(|| {
            AppError::Schema(format!(
                "Row {}: '{}' must be an integer, got {}",
                row, MOVIE_ID_COLUMN, value
            ))
        })
}

fn parse_title(row: usize, value: &Value) -> AppResult<String> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        AppError::Schema(format!(
            "Row {}: '{}' must be a string, got {}",
            row, TITLE_COLUMN, value
        ))
    })
}
