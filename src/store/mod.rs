pub mod builder;
pub mod store;

pub use builder::StoreBuildError;
pub use store::DataStore;
