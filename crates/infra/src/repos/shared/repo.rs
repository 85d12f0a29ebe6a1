use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsertError {
    /// The entity violates a uniqueness constraint of the store
    #[error("Entity already exists")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl From<sqlx::Error> for InsertError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => Self::Conflict,
            _ => Self::Storage(e.into()),
        }
    }
}
