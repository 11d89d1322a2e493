pub mod generator;
pub mod languages;
