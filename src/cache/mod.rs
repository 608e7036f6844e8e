pub mod memo;

pub use memo::MemoCache;
