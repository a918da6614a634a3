/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Release years are stored as PostgreSQL INTEGER.
pub type Year = i32;
