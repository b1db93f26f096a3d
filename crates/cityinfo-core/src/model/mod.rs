// crates/cityinfo-core/src/model/mod.rs
pub mod city;
pub mod record;

pub use city::{City, RecordSet};
pub use record::RecordMapper;
