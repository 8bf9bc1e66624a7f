pub mod http;
pub mod sink;
