//! 검색어 출현 분리기
//!
//! 공백으로 구분된 토큰 하나를 검색어 + (조사 | 접미어 | 없음)으로 나눈다.

use crate::core::josa::{Particle, Suffix};

use super::patterns::{match_particle, match_suffix};

/// 토큰 분리 결과
///
/// `particle`과 `suffix`는 동시에 존재하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// 검색어 (매칭 성공 시) 또는 토큰 전체 (매칭 실패 시)
    pub chunk: &'a str,
    pub particle: Option<Particle>,
    pub suffix: Option<Suffix>,
}

impl<'a> Segment<'a> {
    fn whole(chunk: &'a str) -> Self {
        Self {
            chunk,
            particle: None,
            suffix: None,
        }
    }

    /// 토큰이 실제 검색어 출현인지 (개정문 생성 대상인지)
    ///
    /// 검색어로 시작하지만 알 수 없는 글자가 이어지는 토큰
    /// (예: "법원" 검색 시 "법원장")은 chunk가 토큰 전체이므로 false.
    pub fn is_rewritable(&self, search_word: &str) -> bool {
        !search_word.is_empty() && self.chunk == search_word
    }
}

/// 토큰을 검색어와 뒤따르는 조사/접미어로 분리
///
/// 검색어로 시작하는 토큰만 분리한다 (단어 중간 매칭은 하지 않음).
/// 나머지 문자열 전체가 접미어 표 또는 조사 표의 항목과 정확히 같아야 하며,
/// 접미어 표를 먼저 검사한다.
pub fn segment<'a>(token: &'a str, search_word: &'a str) -> Segment<'a> {
    if token == search_word {
        return Segment::whole(search_word);
    }

    let Some(rest) = token.strip_prefix(search_word) else {
        return Segment::whole(token);
    };

    if let Some(suffix) = match_suffix(rest) {
        return Segment {
            chunk: search_word,
            particle: None,
            suffix: Some(suffix),
        };
    }

    if let Some(particle) = match_particle(rest) {
        return Segment {
            chunk: search_word,
            particle: Some(particle),
            suffix: None,
        };
    }

    // 검색어가 더 긴 다른 단어의 앞부분인 경우
    Segment::whole(token)
}
