pub mod expenses;
pub mod misc;
pub mod report;
