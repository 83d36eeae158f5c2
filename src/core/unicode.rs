//! 유니코드 한글 음절 분해 및 받침 판별

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 종성 ㄹ의 인덱스
///
/// 종성 인덱스: 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ...
const JONGSEONG_RIEUL: u32 = 8;

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글의 종성 인덱스 (0 = 받침 없음)
/// 완성형 한글이 아니면 None
pub fn jongseong_index(c: char) -> Option<u32> {
    decompose_syllable(c).map(|(_, _, jong)| jong)
}

/// 단어 마지막 글자의 종성 인덱스
fn last_jongseong(word: &str) -> Option<u32> {
    word.chars().last().and_then(jongseong_index)
}

/// 단어의 마지막 음절에 받침이 있는지 확인
///
/// 빈 문자열이거나 마지막 글자가 완성형 한글(가-힣)이 아니면 false
pub fn has_final_consonant(word: &str) -> bool {
    matches!(last_jongseong(word), Some(jong) if jong != 0)
}

/// 단어의 마지막 음절 받침이 ㄹ인지 확인
///
/// ㄹ 받침 뒤에서는 "으로" 대신 "로"가 붙는다 (예: 서울로, 물로).
pub fn has_rieul_final(word: &str) -> bool {
    last_jongseong(word) == Some(JONGSEONG_RIEUL)
}

/// 한 단어의 음운 정보 (받침 유무, ㄹ 받침 여부)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batchim {
    pub present: bool,
    pub rieul: bool,
}

impl Batchim {
    pub fn of(word: &str) -> Self {
        Self {
            present: has_final_consonant(word),
            rieul: has_rieul_final(word),
        }
    }

    /// 뒤에 "으로"가 붙어야 하는지 (ㄹ 이외의 받침)
    pub fn takes_euro(&self) -> bool {
        self.present && !self.rieul
    }
}
