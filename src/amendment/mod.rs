//! 개정문 생성 모듈
//!
//! - `rules`: 원문 단어/바꿀 단어/조사로 개정문 한 문장을 만드는 규칙표
//! - `batch`: 본문 전체에서 출현을 찾아 문서 순서대로 개정문을 모으는 처리

pub mod batch;
pub mod rules;

pub use batch::{amend_text, AmendError, Amender, Occurrence};
pub use rules::{generate, generate_with_raw};
