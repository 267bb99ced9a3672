pub mod audit;
pub mod derived;
pub mod model;
pub mod render;
pub mod seed;
pub mod store;

pub mod error;
