//! 개정문 생성 규칙
//!
//! `"<A>"을/를 "<B>"으로/로 한다.` 형태의 개정문을 만든다.
//! 원문 조사가 바꿀 단어의 받침과 맞지 않게 되면 조사까지 묶어서 바꾼다
//! (예: "사람을"을 "아이를"로 한다).

use crate::core::josa::{Josa, Particle};
use crate::core::unicode::Batchim;

/// 개정문 한 문장 조립
fn phrase(before: &str, object: &str, after: &str, direction: &str) -> String {
    format!("\"{before}\"{object} \"{after}\"{direction} 한다.")
}

/// 단어만 바꾸는 개정문. 목적격 조사는 호출자가 정하고
/// 방향 조사는 바꿀 단어의 받침으로 정한다.
fn substitute(original: &str, object: &str, replacement: &str, repl: Batchim) -> String {
    let direction = if repl.takes_euro() { "으로" } else { "로" };
    phrase(original, object, replacement, direction)
}

/// 받침 유무에 맞는 목적격 조사
fn object_particle(batchim: Batchim) -> &'static str {
    if batchim.present {
        "을"
    } else {
        "를"
    }
}

/// 원문 단어, 바꿀 단어, 원문 조사로 개정문을 생성
///
/// 두 단어가 같으면 조사와 무관하게 `"X"를 "X"로 한다.`를 돌려준다.
///
/// # Examples
/// ```
/// use gaejeong::{generate, Josa, Particle};
///
/// assert_eq!(generate("책상", "의자", None), "\"책상\"을 \"의자\"로 한다.");
/// assert_eq!(
///     generate("사람", "아이", Some(Particle::new(Josa::Eul))),
///     "\"사람을\"을 \"아이를\"로 한다."
/// );
/// ```
pub fn generate(original: &str, replacement: &str, particle: Option<Particle>) -> String {
    if original == replacement {
        return phrase(original, "를", replacement, "로");
    }

    let orig = Batchim::of(original);
    let repl = Batchim::of(replacement);

    let Some(particle) = particle else {
        return substitute(original, object_particle(orig), replacement, repl);
    };

    let o = original;
    let r = replacement;
    let q = particle.quote_prefix();

    match particle.josa() {
        // 받침 뒤 조사: 바꿀 단어에 받침이 있으면 조사는 그대로 둔다
        Josa::Eul => {
            if repl.present {
                substitute(o, "을", r, repl)
            } else {
                phrase(&format!("{o}을"), "을", &format!("{r}를"), "로")
            }
        }
        Josa::Gwa => {
            if repl.present {
                substitute(o, "을", r, repl)
            } else {
                phrase(&format!("{o}과"), "를", &format!("{r}와"), "로")
            }
        }
        Josa::I => {
            if repl.present {
                substitute(o, "을", r, repl)
            } else {
                phrase(&format!("{o}이"), "를", &format!("{r}가"), "로")
            }
        }
        Josa::Ina => {
            if repl.present {
                substitute(o, "을", r, repl)
            } else {
                phrase(&format!("{o}이나"), "를", &format!("{r}나"), "로")
            }
        }
        Josa::Eun => {
            if repl.present {
                substitute(o, "을", r, repl)
            } else {
                phrase(&format!("{o}은"), "을", &format!("{r}는"), "으로")
            }
        }

        // 모음 뒤 조사: 바꿀 단어에 받침이 생기면 조사까지 바꾼다
        Josa::Reul => {
            if repl.present {
                phrase(&format!("{o}를"), "을", &format!("{r}을"), "로")
            } else {
                phrase(o, "를", r, "로")
            }
        }
        Josa::Wa => {
            if repl.present {
                phrase(&format!("{o}와"), "를", &format!("{r}과"), "로")
            } else {
                phrase(o, "를", r, "로")
            }
        }
        Josa::Ga => {
            if repl.present {
                phrase(&format!("{o}가"), "를", &format!("{r}이"), "로")
            } else {
                phrase(o, "를", r, "로")
            }
        }
        Josa::Na => {
            if repl.present {
                phrase(&format!("{o}나"), "를", &format!("{r}이나"), "로")
            } else {
                phrase(o, "를", r, "로")
            }
        }
        Josa::Neun => {
            if repl.present {
                phrase(&format!("{o}는"), "을", &format!("{r}은"), "으로")
            } else {
                phrase(o, "를", r, "로")
            }
        }

        // 으로/로 계열: ㄹ 받침은 모음과 같이 "로"를 취한다
        Josa::Euro => {
            if repl.takes_euro() {
                phrase(o, "을", r, "으로")
            } else {
                phrase(&format!("{o}으로"), "를", &format!("{r}로"), "로")
            }
        }
        Josa::Ro => {
            if repl.takes_euro() {
                phrase(&format!("{o}로"), "를", &format!("{r}으로"), "로")
            } else {
                phrase(o, object_particle(orig), r, "로")
            }
        }
        Josa::Roseo | Josa::Rosseo => {
            if repl.takes_euro() {
                phrase(
                    &format!("{o}{particle}"),
                    "를",
                    &format!("{r}으{}", particle.josa()),
                    "로",
                )
            } else {
                phrase(o, object_particle(orig), r, "로")
            }
        }
        Josa::Euroseo | Josa::Eurosseo => {
            if repl.takes_euro() {
                phrase(o, "을", r, "으로")
            } else {
                // 으로서 -> 로서, 으로써 -> 로써
                let ending = particle.josa().as_str().trim_start_matches('으');
                phrase(&format!("{o}{particle}"), "를", &format!("{r}{ending}"), "로")
            }
        }

        // 정의 조항 조사: 따옴표 위치를 보존한다
        Josa::Ran => {
            if repl.present {
                phrase(&format!("{o}{particle}"), "을", &format!("{r}이{q}란"), "으로")
            } else {
                phrase(o, "를", r, "로")
            }
        }
        Josa::Iran => {
            if repl.present {
                substitute(o, "을", r, repl)
            } else {
                phrase(&format!("{o}{particle}"), "을", &format!("{r}{q}란"), "으로")
            }
        }
        Josa::Ra => {
            if repl.present {
                phrase(&format!("{o}{particle}"), "를", &format!("{r}이{q}라"), "로")
            } else {
                phrase(o, "를", r, "로")
            }
        }
        Josa::Ira => {
            if repl.present {
                substitute(o, "을", r, repl)
            } else {
                phrase(&format!("{o}{particle}"), "를", &format!("{r}{q}라"), "로")
            }
        }
    }
}

/// 따옴표를 받을 수 없는 조사 앞의 따옴표는 무시 ("을 -> 을)
fn parse_unquoted(raw: &str) -> Option<Particle> {
    raw.strip_prefix('"')
        .and_then(Josa::from_str_exact)
        .map(Particle::new)
}

/// 조사를 문자열로 받아 개정문 생성
///
/// 알 수 없는 조사는 원문 단어의 받침만 보고 기본 문장을 만든다.
pub fn generate_with_raw(original: &str, replacement: &str, josa: Option<&str>) -> String {
    match josa {
        None => generate(original, replacement, None),
        Some(raw) => match Particle::parse(raw).or_else(|| parse_unquoted(raw)) {
            Some(particle) => generate(original, replacement, Some(particle)),
            None if original == replacement => generate(original, replacement, None),
            None => {
                let orig = Batchim::of(original);
                phrase(original, object_particle(orig), replacement, "로")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(josa: Josa) -> Option<Particle> {
        Some(Particle::new(josa))
    }

    fn quoted(josa: Josa) -> Option<Particle> {
        Particle::quoted(josa)
    }

    #[test]
    fn test_same_word() {
        assert_eq!(generate("법원", "법원", None), "\"법원\"를 \"법원\"로 한다.");
        for josa in Josa::ALL {
            assert_eq!(generate("법원", "법원", p(josa)), "\"법원\"를 \"법원\"로 한다.");
        }
    }

    #[test]
    fn test_no_particle() {
        assert_eq!(generate("책상", "의자", None), "\"책상\"을 \"의자\"로 한다.");
        assert_eq!(generate("의자", "책상", None), "\"의자\"를 \"책상\"으로 한다.");
        assert_eq!(generate("의자", "서울", None), "\"의자\"를 \"서울\"로 한다.");
        assert_eq!(generate("지방법원", "지역법원", None), "\"지방법원\"을 \"지역법원\"으로 한다.");
    }

    #[test]
    fn test_eul() {
        assert_eq!(generate("사람", "아이", p(Josa::Eul)), "\"사람을\"을 \"아이를\"로 한다.");
        assert_eq!(generate("사람", "법인", p(Josa::Eul)), "\"사람\"을 \"법인\"으로 한다.");
        assert_eq!(generate("사람", "법률", p(Josa::Eul)), "\"사람\"을 \"법률\"로 한다.");
    }

    #[test]
    fn test_reul() {
        assert_eq!(generate("아이", "사람", p(Josa::Reul)), "\"아이를\"을 \"사람을\"로 한다.");
        assert_eq!(generate("아이", "학도", p(Josa::Reul)), "\"아이\"를 \"학도\"로 한다.");
    }

    #[test]
    fn test_gwa_wa() {
        assert_eq!(generate("법원", "검찰", p(Josa::Gwa)), "\"법원\"을 \"검찰\"로 한다.");
        assert_eq!(generate("법원", "법인", p(Josa::Gwa)), "\"법원\"을 \"법인\"으로 한다.");
        assert_eq!(generate("법원", "회사", p(Josa::Gwa)), "\"법원과\"를 \"회사와\"로 한다.");
        assert_eq!(generate("회사", "법원", p(Josa::Wa)), "\"회사와\"를 \"법원과\"로 한다.");
        assert_eq!(generate("회사", "단체", p(Josa::Wa)), "\"회사\"를 \"단체\"로 한다.");
    }

    #[test]
    fn test_i_ga() {
        assert_eq!(generate("법원", "법인", p(Josa::I)), "\"법원\"을 \"법인\"으로 한다.");
        assert_eq!(generate("법원", "회사", p(Josa::I)), "\"법원이\"를 \"회사가\"로 한다.");
        assert_eq!(generate("회사", "법원", p(Josa::Ga)), "\"회사가\"를 \"법원이\"로 한다.");
        assert_eq!(generate("회사", "단체", p(Josa::Ga)), "\"회사\"를 \"단체\"로 한다.");
    }

    #[test]
    fn test_ina_na() {
        assert_eq!(generate("법원", "서울", p(Josa::Ina)), "\"법원\"을 \"서울\"로 한다.");
        assert_eq!(generate("법원", "회사", p(Josa::Ina)), "\"법원이나\"를 \"회사나\"로 한다.");
        assert_eq!(generate("회사", "법원", p(Josa::Na)), "\"회사나\"를 \"법원이나\"로 한다.");
        assert_eq!(generate("회사", "단체", p(Josa::Na)), "\"회사\"를 \"단체\"로 한다.");
    }

    #[test]
    fn test_euro() {
        assert_eq!(generate("법원", "서울", p(Josa::Euro)), "\"법원으로\"를 \"서울로\"로 한다.");
        assert_eq!(generate("법원", "법인", p(Josa::Euro)), "\"법원\"을 \"법인\"으로 한다.");
        assert_eq!(generate("법원", "회사", p(Josa::Euro)), "\"법원으로\"를 \"회사로\"로 한다.");
    }

    #[test]
    fn test_ro() {
        assert_eq!(generate("나라", "세계", p(Josa::Ro)), "\"나라\"를 \"세계\"로 한다.");
        assert_eq!(generate("나라", "법원", p(Josa::Ro)), "\"나라로\"를 \"법원으로\"로 한다.");
        assert_eq!(generate("나라", "서울", p(Josa::Ro)), "\"나라\"를 \"서울\"로 한다.");
        // ㄹ 받침 원문
        assert_eq!(generate("서울", "법원", p(Josa::Ro)), "\"서울로\"를 \"법원으로\"로 한다.");
        assert_eq!(generate("서울", "부산", p(Josa::Ro)), "\"서울로\"를 \"부산으로\"로 한다.");
        assert_eq!(generate("서울", "대구", p(Josa::Ro)), "\"서울\"을 \"대구\"로 한다.");
        assert_eq!(generate("서울", "제주시청앞길", p(Josa::Ro)), "\"서울\"을 \"제주시청앞길\"로 한다.");
    }

    #[test]
    fn test_eun_neun() {
        assert_eq!(generate("법원", "법인", p(Josa::Eun)), "\"법원\"을 \"법인\"으로 한다.");
        assert_eq!(generate("법원", "회사", p(Josa::Eun)), "\"법원은\"을 \"회사는\"으로 한다.");
        assert_eq!(generate("회사", "법원", p(Josa::Neun)), "\"회사는\"을 \"법원은\"으로 한다.");
        assert_eq!(generate("회사", "단체", p(Josa::Neun)), "\"회사\"를 \"단체\"로 한다.");
    }

    #[test]
    fn test_ran_iran() {
        assert_eq!(generate("회사", "법인", p(Josa::Ran)), "\"회사란\"을 \"법인이란\"으로 한다.");
        assert_eq!(generate("회사", "단체", p(Josa::Ran)), "\"회사\"를 \"단체\"로 한다.");
        assert_eq!(generate("법인", "회사", p(Josa::Iran)), "\"법인이란\"을 \"회사란\"으로 한다.");
        assert_eq!(generate("법인", "단말", p(Josa::Iran)), "\"법인\"을 \"단말\"로 한다.");
    }

    #[test]
    fn test_quoted_definition_particles() {
        assert_eq!(
            generate("회사", "법인", quoted(Josa::Ran)),
            "\"회사\"란\"을 \"법인이\"란\"으로 한다."
        );
        assert_eq!(
            generate("법인", "회사", quoted(Josa::Iran)),
            "\"법인\"이란\"을 \"회사\"란\"으로 한다."
        );
        assert_eq!(
            generate("회사", "법인", quoted(Josa::Ra)),
            "\"회사\"라\"를 \"법인이\"라\"로 한다."
        );
        assert_eq!(
            generate("법인", "회사", quoted(Josa::Ira)),
            "\"법인\"이라\"를 \"회사\"라\"로 한다."
        );
        // 조사를 바꾸지 않는 경우 따옴표는 나타나지 않음
        assert_eq!(generate("회사", "단체", quoted(Josa::Ran)), "\"회사\"를 \"단체\"로 한다.");
    }

    #[test]
    fn test_ra_ira() {
        assert_eq!(generate("회사", "법인", p(Josa::Ra)), "\"회사라\"를 \"법인이라\"로 한다.");
        assert_eq!(generate("회사", "단체", p(Josa::Ra)), "\"회사\"를 \"단체\"로 한다.");
        assert_eq!(generate("법인", "서울", p(Josa::Ira)), "\"법인\"을 \"서울\"로 한다.");
        assert_eq!(generate("법인", "회사", p(Josa::Ira)), "\"법인이라\"를 \"회사라\"로 한다.");
    }

    #[test]
    fn test_roseo_rosseo() {
        assert_eq!(generate("회사", "법인", p(Josa::Roseo)), "\"회사로서\"를 \"법인으로서\"로 한다.");
        assert_eq!(generate("회사", "단체", p(Josa::Roseo)), "\"회사\"를 \"단체\"로 한다.");
        assert_eq!(generate("회사", "서울", p(Josa::Rosseo)), "\"회사\"를 \"서울\"로 한다.");
        assert_eq!(generate("도구", "수단", p(Josa::Rosseo)), "\"도구로써\"를 \"수단으로써\"로 한다.");
        // ㄹ 받침 원문
        assert_eq!(generate("기술", "장비", p(Josa::Rosseo)), "\"기술\"을 \"장비\"로 한다.");
        assert_eq!(generate("기술", "방법", p(Josa::Rosseo)), "\"기술로써\"를 \"방법으로써\"로 한다.");
    }

    #[test]
    fn test_euroseo_eurosseo() {
        assert_eq!(generate("위원", "법인", p(Josa::Euroseo)), "\"위원\"을 \"법인\"으로 한다.");
        assert_eq!(generate("위원", "회사", p(Josa::Euroseo)), "\"위원으로서\"를 \"회사로서\"로 한다.");
        assert_eq!(generate("위원", "서울", p(Josa::Euroseo)), "\"위원으로서\"를 \"서울로서\"로 한다.");
        assert_eq!(generate("방법", "도구", p(Josa::Eurosseo)), "\"방법으로써\"를 \"도구로써\"로 한다.");
        assert_eq!(generate("방법", "수단", p(Josa::Eurosseo)), "\"방법\"을 \"수단\"으로 한다.");
    }

    #[test]
    fn test_non_hangul_words_fail_closed() {
        // 한글이 아니면 받침 없음으로 취급
        assert_eq!(generate("ABC", "XYZ", None), "\"ABC\"를 \"XYZ\"로 한다.");
        assert_eq!(generate("법원", "ABC", p(Josa::I)), "\"법원이\"를 \"ABC가\"로 한다.");
    }

    #[test]
    fn test_generate_with_raw() {
        assert_eq!(
            generate_with_raw("사람", "아이", Some("을")),
            "\"사람을\"을 \"아이를\"로 한다."
        );
        assert_eq!(
            generate_with_raw("회사", "법인", Some("\"란")),
            "\"회사\"란\"을 \"법인이\"란\"으로 한다."
        );
        assert_eq!(generate_with_raw("책상", "의자", None), "\"책상\"을 \"의자\"로 한다.");
        assert_eq!(
            generate_with_raw("사람", "아이", Some("\"을")),
            "\"사람을\"을 \"아이를\"로 한다."
        );
    }

    #[test]
    fn test_quote_before_roseo_is_dropped() {
        // 로서/로써에는 따옴표가 붙을 수 없으므로 따옴표 없이 다시 쓴다
        assert_eq!(
            generate_with_raw("회사", "법인", Some("\"로서")),
            "\"회사로서\"를 \"법인으로서\"로 한다."
        );
        assert_eq!(
            generate_with_raw("도구", "수단", Some("\"로써")),
            "\"도구로써\"를 \"수단으로써\"로 한다."
        );
    }

    #[test]
    fn test_generate_with_raw_unknown_particle() {
        // 알 수 없는 조사는 원문 받침만으로 판단하고 방향 조사는 "로"
        assert_eq!(generate_with_raw("법원", "법인", Some("까지")), "\"법원\"을 \"법인\"로 한다.");
        assert_eq!(generate_with_raw("회사", "법인", Some("까지")), "\"회사\"를 \"법인\"로 한다.");
        assert_eq!(generate_with_raw("회사", "회사", Some("까지")), "\"회사\"를 \"회사\"로 한다.");
    }
}
