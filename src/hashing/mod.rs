pub mod canonical;

pub use canonical::{hash, HashError};
