//! 법령 본문을 검색용 토큰으로 분리

use super::patterns::{match_particle, match_suffix};

/// 토큰 앞에서 떼어낼 여는 기호
const LEADING_MARKS: &[char] = &['"', '\'', '‘', '「', '『', '(', '[', '<', '〈', '《'];

/// 토큰 뒤에서 떼어낼 닫는 기호/문장부호
const TRAILING_MARKS: &[char] = &[
    ',', '.', ';', ':', '·', ')', ']', '>', '〉', '》', '」', '』', '"', '\'', '’',
];

/// 단어 나열 구분 기호 (자동차·원동기장치자전거)
const LIST_SEPARATORS: &[char] = &['·', 'ㆍ'];

/// 공백 단위 토큰
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 1부터 시작하는 줄 번호
    pub line: usize,
    pub text: String,
}

/// 둥근 따옴표를 곧은 따옴표로 통일
fn normalize_quotes(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '“' | '”' => '"',
            c => c,
        })
        .collect()
}

/// 토큰 하나의 앞뒤 기호 제거
///
/// 정의 조항의 `“자동차”란`은 `자동차"란`이 되어 따옴표 조사로 인식된다.
/// 일반 조사/접미어 앞의 닫는 따옴표는 `자동차"와` -> `자동차와`로 붙인다.
pub fn clean_token(raw: &str) -> String {
    let normalized = normalize_quotes(raw);
    let trimmed = normalized
        .trim_start_matches(LEADING_MARKS)
        .trim_end_matches(TRAILING_MARKS);
    join_closing_quote(trimmed)
}

/// 따옴표 조사("란 등)가 아닌 조사/접미어 앞의 따옴표 제거
fn join_closing_quote(token: &str) -> String {
    let Some((head, tail)) = token.split_once('"') else {
        return token.to_string();
    };
    if head.is_empty() || tail.contains('"') || match_particle(&format!("\"{tail}")).is_some() {
        return token.to_string();
    }
    if match_particle(tail).is_some() || match_suffix(tail).is_some() {
        format!("{head}{tail}")
    } else {
        token.to_string()
    }
}

/// 본문을 줄 번호가 붙은 토큰 목록으로 분리 (문서 순서 유지)
pub fn tokenize(text: &str) -> Vec<Token> {
    text.lines()
        .enumerate()
        .flat_map(|(idx, line)| {
            line.split_whitespace()
                .flat_map(|word| word.split(LIST_SEPARATORS))
                .filter_map(move |raw| {
                    let cleaned = clean_token(raw);
                    (!cleaned.is_empty()).then(|| Token {
                        line: idx + 1,
                        text: cleaned,
                    })
                })
        })
        .collect()
}
