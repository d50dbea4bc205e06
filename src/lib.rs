// Library exports for the generator binary and tests
pub mod config;
pub mod constants;
pub mod draw;
pub mod generate;
pub mod render;
