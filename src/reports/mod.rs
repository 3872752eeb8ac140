pub mod roster_reporter;
pub mod schedule_reporter;
pub mod table;
