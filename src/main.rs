//! gaejeong - 법령 개정문 생성기

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use gaejeong::config::{config_path, try_load_config};
use gaejeong::{segment, Amender};

#[derive(Parser)]
#[command(name = "gaejeong", about = "법령 본문에서 단어를 찾아 개정문을 만든다")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 본문의 검색어를 바꿀 단어로 고치는 개정문 출력
    Amend {
        /// 검색어
        search: String,
        /// 바꿀 단어
        replacement: String,
        /// 법령 본문 파일. 생략하면 표준 입력에서 읽는다.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// 같은 개정문도 출현마다 모두 출력
        #[arg(long)]
        no_dedup: bool,
        /// JSON 배열로 출력
        #[arg(long)]
        json: bool,
    },
    /// 토큰별 조사/접미어 분리 결과 출력
    Segment {
        /// 검색어
        search: String,
        /// 분리할 토큰들
        tokens: Vec<String>,
    },
}

fn read_input(input: Option<&PathBuf>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // 설정의 로그 필터로 로깅 초기화 (RUST_LOG가 있으면 우선)
    // 설정 로드 실패 경고는 로거가 준비된 뒤에 출력
    let loaded = try_load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();
    if let Err(e) = &loaded {
        log::warn!("설정 파일 로드 실패, 기본값 사용 ({}): {}", config_path().display(), e);
    }

    match cli.command {
        Command::Amend {
            search,
            replacement,
            input,
            no_dedup,
            json,
        } => {
            let amender = match Amender::new(search, replacement) {
                Ok(amender) => amender.with_dedup(config.dedup_sentences && !no_dedup),
                Err(e) => {
                    eprintln!("오류: {}", e);
                    process::exit(1);
                }
            };

            let text = match read_input(input.as_ref()) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("본문 읽기 실패: {}", e);
                    process::exit(1);
                }
            };

            let sentences = amender.amend(&text);
            if sentences.is_empty() {
                log::warn!(
                    "'{}' -> '{}': 해당하는 출현이 없습니다",
                    amender.search(),
                    amender.replacement()
                );
            }

            if json {
                match serde_json::to_string_pretty(&sentences) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("JSON 직렬화 실패: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                for sentence in &sentences {
                    println!("{}", sentence);
                }
            }
        }
        Command::Segment { search, tokens } => {
            for token in &tokens {
                let seg = segment(token, &search);
                let tail = match (seg.particle, seg.suffix) {
                    (Some(particle), _) => format!("조사 {}", particle),
                    (None, Some(suffix)) => format!("접미어 {}", suffix),
                    (None, None) if seg.is_rewritable(&search) => "없음".to_string(),
                    (None, None) => "해당 없음".to_string(),
                };
                println!("{}\t{}\t{}", token, seg.chunk, tail);
            }
        }
    }
}
