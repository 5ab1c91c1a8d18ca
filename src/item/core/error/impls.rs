use super::ItemError;
impl From<rusqlite::Error> for ItemError {
    fn from(err: rusqlite::Error) -> Self {
        if matches!(err, rusqlite::Error::QueryReturnedNoRows) {
            return ItemError::NotFound(err.to_string());
        }
        ItemError::Persistence(err.to_string())
    }
}
impl<T> From<std::sync::PoisonError<T>> for ItemError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        ItemError::Persistence(format!("store lock poisoned: {err}"))
    }
}
impl ItemError {
    /// Create a not found error
    pub fn not_found(id: impl Into<String>) -> Self { ItemError::NotFound(id.into()) }
    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self { ItemError::Persistence(msg.into()) }
    /// Whether this error means the id matched no record
    #[must_use]
    pub fn is_not_found(&self) -> bool { matches!(self, ItemError::NotFound(_)) }
}
