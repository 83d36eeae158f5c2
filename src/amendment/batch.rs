//! 본문 전체에 대한 개정문 일괄 생성
//!
//! 토큰 분리 -> 검색어 출현 분리 -> 개정문 생성 순서로 처리하며
//! 결과는 항상 본문에 나타난 순서를 따른다.

use std::collections::HashSet;

use crate::core::josa::{Particle, Suffix};
use crate::detection::{segment, tokenize};

use super::rules::generate;

/// 개정문 생성 입력 오류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmendError {
    /// 검색어 또는 바꿀 단어가 비어 있음
    EmptyWord(&'static str),
    /// 공백이 포함된 단어 (토큰 단위로 검색하므로 허용하지 않음)
    Whitespace(String),
}

impl std::fmt::Display for AmendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmendError::EmptyWord(what) => write!(f, "{}가 비어 있습니다", what),
            AmendError::Whitespace(word) => write!(f, "공백이 포함된 단어는 사용할 수 없습니다: '{}'", word),
        }
    }
}

impl std::error::Error for AmendError {}

/// 본문에서 찾은 검색어 출현 한 건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// 1부터 시작하는 줄 번호
    pub line: usize,
    /// 기호를 떼어낸 원문 토큰
    pub token: String,
    pub particle: Option<Particle>,
    pub suffix: Option<Suffix>,
}

/// 검색어를 바꿀 단어로 고치는 개정문 생성기
#[derive(Debug, Clone)]
pub struct Amender {
    search: String,
    replacement: String,
    /// 같은 개정문이 여러 번 나오면 처음 한 번만 출력
    dedup: bool,
}

fn validate(word: &str, what: &'static str) -> Result<(), AmendError> {
    if word.is_empty() {
        return Err(AmendError::EmptyWord(what));
    }
    if word.chars().any(char::is_whitespace) {
        return Err(AmendError::Whitespace(word.to_string()));
    }
    Ok(())
}

impl Amender {
    pub fn new(search: impl Into<String>, replacement: impl Into<String>) -> Result<Self, AmendError> {
        let search = search.into();
        let replacement = replacement.into();
        validate(&search, "검색어")?;
        validate(&replacement, "바꿀 단어")?;
        Ok(Self {
            search,
            replacement,
            dedup: true,
        })
    }

    /// 중복 개정문 제거 여부 설정
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// 본문에서 개정 대상 출현을 문서 순서대로 수집
    ///
    /// 검색어로 시작하지만 다른 단어인 토큰(예: "법원장")은 건너뛴다.
    pub fn occurrences(&self, text: &str) -> Vec<Occurrence> {
        let mut found = Vec::new();
        for token in tokenize(text) {
            if !token.text.starts_with(self.search.as_str()) {
                continue;
            }
            let seg = segment(&token.text, &self.search);
            if !seg.is_rewritable(&self.search) {
                log::debug!("{}행 '{}': 검색어로 시작하는 다른 단어, 건너뜀", token.line, token.text);
                continue;
            }
            found.push(Occurrence {
                line: token.line,
                particle: seg.particle,
                suffix: seg.suffix,
                token: token.text,
            });
        }
        found
    }

    /// 출현 한 건에 대한 개정문
    ///
    /// 접미어가 붙은 출현은 조사 없는 출현과 같이 단어만 바꾼다.
    pub fn sentence_for(&self, occurrence: &Occurrence) -> String {
        generate(&self.search, &self.replacement, occurrence.particle)
    }

    /// 본문 전체의 개정문 목록 (문서 순서)
    pub fn amend(&self, text: &str) -> Vec<String> {
        let occurrences = self.occurrences(text);
        log::info!(
            "'{}' -> '{}': 출현 {}건",
            self.search,
            self.replacement,
            occurrences.len()
        );

        let mut seen = HashSet::new();
        let mut sentences = Vec::with_capacity(occurrences.len());
        for occurrence in &occurrences {
            let sentence = self.sentence_for(occurrence);
            if self.dedup && !seen.insert(sentence.clone()) {
                continue;
            }
            sentences.push(sentence);
        }
        sentences
    }
}

/// 기본 설정(중복 제거)으로 본문의 개정문 생성
pub fn amend_text(text: &str, search: &str, replacement: &str) -> Result<Vec<String>, AmendError> {
    Ok(Amender::new(search, replacement)?.amend(text))
}
