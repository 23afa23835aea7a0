//! SQLite-backed movie catalog storage.

use std::path::Path;

use async_trait::async_trait;
use filmoteca_domain::{
    fold_case, DirectorName, Movie, MovieId, MovieTitle, NewMovie, Predicate, Rating,
    ReleaseYear, SearchFilter,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{MovieRepo, RepoError};

const MOVIE_COLUMNS: &str = "id, title, director, year, rating";

/// SQLite implementation of the movie catalog.
///
/// Besides the record columns the table keeps `title_folded` and
/// `director_folded`, the Unicode lower-cased copies used for every
/// case-insensitive comparison. SQLite's own `LIKE` and `lower()` only fold
/// ASCII.
pub struct SqliteMovieRepo {
    pool: SqlitePool,
}

impl SqliteMovieRepo {
    /// Open (or create) the database file at `db_path`, creating its parent
    /// directory if needed.
    pub async fn open(db_path: &Path) -> Result<Self, RepoError> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RepoError::database("create_db_dir", e))?;
        }
        Self::connect(&format!("sqlite:{}?mode=rwc", db_path.display())).await
    }

    /// Connect to a SQLite URL and make sure the schema exists.
    pub async fn connect(url: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(url)
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        let repo = Self { pool };
        repo.ensure_schema().await?;
        Ok(repo)
    }

    async fn ensure_schema(&self) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS movies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL UNIQUE,
                title_folded TEXT NOT NULL,
                director TEXT NOT NULL,
                director_folded TEXT NOT NULL,
                year INTEGER NOT NULL,
                rating INTEGER
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("create_schema", e))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_movies_title_folded ON movies (title_folded)")
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("create_schema", e))?;

        Ok(())
    }
}

fn row_to_movie(row: &SqliteRow) -> Result<Movie, RepoError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| RepoError::database("read_movie", e))?;
    let title: String = row
        .try_get("title")
        .map_err(|e| RepoError::database("read_movie", e))?;
    let director: String = row
        .try_get("director")
        .map_err(|e| RepoError::database("read_movie", e))?;
    let year: i64 = row
        .try_get("year")
        .map_err(|e| RepoError::database("read_movie", e))?;
    let rating: Option<i64> = row
        .try_get("rating")
        .map_err(|e| RepoError::database("read_movie", e))?;

    let year = i32::try_from(year)
        .map_err(|_| RepoError::serialization(format!("movie {id}: year {year} out of range")))?;

    Ok(Movie::from_parts(
        MovieId::from_i64(id),
        MovieTitle::new(&title)
            .map_err(|e| RepoError::serialization(format!("movie {id}: {e}")))?,
        DirectorName::new(&director)
            .map_err(|e| RepoError::serialization(format!("movie {id}: {e}")))?,
        ReleaseYear::from_storage(year),
        rating
            .map(Rating::new)
            .transpose()
            .map_err(|e| RepoError::serialization(format!("movie {id}: {e}")))?,
    ))
}

fn predicate_clause(predicate: &Predicate) -> &'static str {
    match predicate {
        Predicate::TitleContains(_) => "instr(title_folded, ?) > 0",
        Predicate::DirectorContains(_) => "instr(director_folded, ?) > 0",
        Predicate::YearEquals(_) => "year = ?",
        Predicate::RatingEquals(_) => "rating = ?",
    }
}

#[async_trait]
impl MovieRepo for SqliteMovieRepo {
    async fn list_all(&self) -> Result<Vec<Movie>, RepoError> {
        let rows = sqlx::query(&format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_movies", e))?;

        rows.iter().map(row_to_movie).collect()
    }

    async fn insert(&self, movie: &NewMovie) -> Result<Movie, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO movies (title, title_folded, director, director_folded, year, rating)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(movie.title().as_str())
        .bind(movie.title().folded())
        .bind(movie.director().as_str())
        .bind(movie.director().folded())
        .bind(movie.year().value())
        .bind(movie.rating().map(i64::from))
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::constraint(format!("title already exists: {}", movie.title()))
            }
            _ => RepoError::database("insert_movie", e),
        })?;

        let id = MovieId::from_i64(result.last_insert_rowid());
        tracing::debug!(id = %id, title = %movie.title(), "Inserted movie");
        Ok(movie.clone().into_stored(id))
    }

    async fn delete_first_matching(&self, fragment: &str) -> Result<Option<Movie>, RepoError> {
        let row = sqlx::query(&format!(
            r#"
            DELETE FROM movies
            WHERE id = (
                SELECT id FROM movies
                WHERE instr(title_folded, ?) > 0
                ORDER BY id
                LIMIT 1
            )
            RETURNING {MOVIE_COLUMNS}
            "#
        ))
        .bind(fold_case(fragment))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("delete_movie", e))?;

        row.as_ref().map(row_to_movie).transpose()
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Movie>, RepoError> {
        let clauses: Vec<&str> = filter.predicates().iter().map(predicate_clause).collect();
        let sql = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE {} ORDER BY id",
            clauses.join(" AND ")
        );

        let mut query = sqlx::query(&sql);
        for predicate in filter.predicates() {
            query = match predicate {
                Predicate::TitleContains(needle) | Predicate::DirectorContains(needle) => {
                    query.bind(needle.as_str())
                }
                Predicate::YearEquals(value) | Predicate::RatingEquals(value) => query.bind(*value),
            };
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("search_movies", e))?;

        rows.iter().map(row_to_movie).collect()
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, RepoError> {
        let row = sqlx::query(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE title_folded = ? ORDER BY id LIMIT 1"
        ))
        .bind(fold_case(title))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("find_movie", e))?;

        row.as_ref().map(row_to_movie).transpose()
    }

    async fn update_rating(
        &self,
        title: &str,
        rating: Rating,
    ) -> Result<Option<Movie>, RepoError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE movies SET rating = ?
            WHERE id = (
                SELECT id FROM movies
                WHERE title_folded = ?
                ORDER BY id
                LIMIT 1
            )
            RETURNING {MOVIE_COLUMNS}
            "#
        ))
        .bind(i64::from(rating))
        .bind(fold_case(title))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("update_rating", e))?;

        row.as_ref().map(row_to_movie).transpose()
    }
}
