pub mod entities;
pub mod queries;
pub mod repositories;

pub use entities::*;
