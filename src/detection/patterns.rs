//! 검색어 뒤에 붙는 접미어/조사 패턴 데이터
//!
//! 두 표 모두 패턴 길이 내림차순으로 한 번만 정렬해 둔다.
//! "로"와 "로서"처럼 짧은 패턴이 긴 패턴의 앞부분인 경우가 있으므로
//! 긴 패턴을 먼저 검사해야 한다.

use std::sync::LazyLock;

use crate::core::josa::{Josa, Particle, Suffix};

/// 조사 치환에서 제외되는 접미어 (길이 내림차순)
pub static SUFFIX_PATTERNS: LazyLock<Vec<(&'static str, Suffix)>> = LazyLock::new(|| {
    let mut table: Vec<(&'static str, Suffix)> =
        Suffix::ALL.iter().map(|s| (s.as_str(), *s)).collect();
    sort_longest_first(&mut table);
    table
});

/// 조사 패턴 (길이 내림차순)
///
/// 정의 조항용 따옴표 조사("란, "이란, "라, "이라)도 함께 포함한다.
pub static PARTICLE_PATTERNS: LazyLock<Vec<(String, Particle)>> = LazyLock::new(|| {
    let mut table: Vec<(String, Particle)> = Josa::ALL
        .iter()
        .map(|j| (j.as_str().to_string(), Particle::new(*j)))
        .collect();
    for josa in Josa::ALL {
        if let Some(particle) = Particle::quoted(josa) {
            table.push((particle.to_string(), particle));
        }
    }
    sort_longest_first(&mut table);
    table
});

fn char_len(pattern: &str) -> usize {
    pattern.chars().count()
}

fn sort_longest_first<S: AsRef<str>, T>(table: &mut [(S, T)]) {
    // 안정 정렬: 길이가 같으면 선언 순서 유지
    table.sort_by_key(|(pattern, _)| std::cmp::Reverse(char_len(pattern.as_ref())));
}

/// 나머지 문자열과 정확히 일치하는 접미어
pub fn match_suffix(rest: &str) -> Option<Suffix> {
    SUFFIX_PATTERNS
        .iter()
        .find(|(pattern, _)| *pattern == rest)
        .map(|(_, suffix)| *suffix)
}

/// 나머지 문자열과 정확히 일치하는 조사
pub fn match_particle(rest: &str) -> Option<Particle> {
    PARTICLE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern == rest)
        .map(|(_, particle)| *particle)
}
