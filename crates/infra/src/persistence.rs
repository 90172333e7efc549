// crates/infra/src/persistence.rs
mod file_reader;

pub use file_reader::FileReader;
