//! Leaf generators shared by both pipelines.

pub mod primitives;
pub mod transforms;

pub use primitives::{concat, pairwise_concat, special_suffixes, suffix_numbers};
pub use transforms::{leet, reverse, title_case};
