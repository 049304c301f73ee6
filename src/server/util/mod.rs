pub mod parse;
pub mod storage;
