pub mod db;
pub mod fetch;
pub mod matchups;
pub mod report;
pub mod roster;
pub mod schedule;
pub mod teams;
