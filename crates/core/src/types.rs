/// All primary keys are SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

/// Ordering key of a row inside its collection.
pub type Position = i64;
