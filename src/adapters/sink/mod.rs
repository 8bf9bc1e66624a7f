pub mod jsonl;
pub mod log;
pub mod sheets;
