pub mod wordlist;

pub use wordlist::{WordlistSummary, read_tokens, write_report, write_wordlist};
