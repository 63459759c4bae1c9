pub mod command;
pub mod series;
