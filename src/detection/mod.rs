//! 본문에서 검색어 출현을 찾아 조사/접미어를 분리하는 모듈

pub mod patterns;
pub mod segment;
pub mod tokenizer;

pub use segment::{segment, Segment};
pub use tokenizer::{tokenize, Token};
