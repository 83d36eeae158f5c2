//! 조사와 비조사 접미어 정의
//!
//! 개정문 생성에서 다루는 조사는 닫힌 집합이므로 문자열 대신 열거형으로 표현한다.

use std::fmt;

/// 검색어 뒤에 붙는 조사
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Josa {
    /// 을
    Eul,
    /// 를
    Reul,
    /// 과
    Gwa,
    /// 와
    Wa,
    /// 이
    I,
    /// 가
    Ga,
    /// 이나
    Ina,
    /// 나
    Na,
    /// 으로
    Euro,
    /// 로
    Ro,
    /// 은
    Eun,
    /// 는
    Neun,
    /// 란
    Ran,
    /// 이란
    Iran,
    /// 라
    Ra,
    /// 이라
    Ira,
    /// 로서
    Roseo,
    /// 으로서
    Euroseo,
    /// 로써
    Rosseo,
    /// 으로써
    Eurosseo,
}

impl Josa {
    pub const ALL: [Josa; 20] = [
        Josa::Eul,
        Josa::Reul,
        Josa::Gwa,
        Josa::Wa,
        Josa::I,
        Josa::Ga,
        Josa::Ina,
        Josa::Na,
        Josa::Euro,
        Josa::Ro,
        Josa::Eun,
        Josa::Neun,
        Josa::Ran,
        Josa::Iran,
        Josa::Ra,
        Josa::Ira,
        Josa::Roseo,
        Josa::Euroseo,
        Josa::Rosseo,
        Josa::Eurosseo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Josa::Eul => "을",
            Josa::Reul => "를",
            Josa::Gwa => "과",
            Josa::Wa => "와",
            Josa::I => "이",
            Josa::Ga => "가",
            Josa::Ina => "이나",
            Josa::Na => "나",
            Josa::Euro => "으로",
            Josa::Ro => "로",
            Josa::Eun => "은",
            Josa::Neun => "는",
            Josa::Ran => "란",
            Josa::Iran => "이란",
            Josa::Ra => "라",
            Josa::Ira => "이라",
            Josa::Roseo => "로서",
            Josa::Euroseo => "으로서",
            Josa::Rosseo => "로써",
            Josa::Eurosseo => "으로써",
        }
    }

    /// 따옴표 뒤에 올 수 있는 조사 ("란, "이란, "라, "이라)
    ///
    /// 정의 조항의 `"자동차"란` 같은 형태에서만 쓰인다.
    pub fn is_quotable(&self) -> bool {
        matches!(self, Josa::Ran | Josa::Iran | Josa::Ra | Josa::Ira)
    }

    pub fn from_str_exact(s: &str) -> Option<Josa> {
        Josa::ALL.iter().copied().find(|j| j.as_str() == s)
    }
}

impl fmt::Display for Josa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 원문에서 검색어에 붙어 있던 조사
///
/// `quoted`는 조사 앞에 따옴표가 있었는지 표시한다 (`"자동차"란`).
/// 따옴표는 정의 조사(란, 이란, 라, 이라)에만 붙을 수 있으므로
/// `new`/`quoted`/`parse`로만 만든다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Particle {
    josa: Josa,
    quoted: bool,
}

impl Particle {
    pub fn new(josa: Josa) -> Self {
        Self {
            josa,
            quoted: false,
        }
    }

    /// 따옴표가 붙은 조사. 따옴표를 받을 수 없는 조사면 None
    pub fn quoted(josa: Josa) -> Option<Self> {
        josa.is_quotable().then_some(Self { josa, quoted: true })
    }

    pub fn josa(&self) -> Josa {
        self.josa
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// 원문 표기 그대로의 조사를 해석 (`"란` 포함)
    /// 알 수 없는 조사면 None
    pub fn parse(s: &str) -> Option<Self> {
        match s.strip_prefix('"') {
            Some(rest) => Josa::from_str_exact(rest).and_then(Particle::quoted),
            None => Josa::from_str_exact(s).map(Particle::new),
        }
    }

    /// 개정문에 다시 쓸 때 조사 앞에 붙일 따옴표
    pub fn quote_prefix(&self) -> &'static str {
        if self.quoted {
            "\""
        } else {
            ""
        }
    }
}

impl From<Josa> for Particle {
    fn from(josa: Josa) -> Self {
        Particle::new(josa)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quote_prefix(), self.josa)
    }
}

/// 검색어에 붙어 있어도 조사 치환 대상이 아닌 접미어
///
/// 관형격, 부사격 조사와 "등", "만" 계열은 바꿀 단어의 받침과 무관하게
/// 형태가 같으므로 개정문에서 조사를 다시 쓸 필요가 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suffix {
    /// 의
    Ui,
    /// 에
    E,
    /// 에서
    Eseo,
    /// 에게
    Ege,
    /// 등
    Deung,
    /// 등의
    DeungUi,
    /// 등인
    DeungIn,
    /// 등만
    DeungMan,
    /// 등에
    DeungE,
    /// 만
    Man,
    /// 만을
    ManEul,
    /// 만이
    ManI,
    /// 만은
    ManEun,
    /// 만에
    ManE,
    /// 만으로
    ManEuro,
}

impl Suffix {
    pub const ALL: [Suffix; 15] = [
        Suffix::Ui,
        Suffix::E,
        Suffix::Eseo,
        Suffix::Ege,
        Suffix::Deung,
        Suffix::DeungUi,
        Suffix::DeungIn,
        Suffix::DeungMan,
        Suffix::DeungE,
        Suffix::Man,
        Suffix::ManEul,
        Suffix::ManI,
        Suffix::ManEun,
        Suffix::ManE,
        Suffix::ManEuro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Ui => "의",
            Suffix::E => "에",
            Suffix::Eseo => "에서",
            Suffix::Ege => "에게",
            Suffix::Deung => "등",
            Suffix::DeungUi => "등의",
            Suffix::DeungIn => "등인",
            Suffix::DeungMan => "등만",
            Suffix::DeungE => "등에",
            Suffix::Man => "만",
            Suffix::ManEul => "만을",
            Suffix::ManI => "만이",
            Suffix::ManEun => "만은",
            Suffix::ManE => "만에",
            Suffix::ManEuro => "만으로",
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
