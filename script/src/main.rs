use serde::Serialize;
use std::fmt::Debug;
use std::path::PathBuf;
use std::process::Command;
use std::str::FromStr;
use std::time::Instant;
use sum_native::{EXPECTED_SUM, SEQUENCE};

#[derive(Serialize)]
struct Stats {
    program: &'static str,
    n: usize,
    runs: u32,
    sum: i64,
    setup_secs: f32,
    run_secs: f32,
    check_secs: f32,
}

fn env_or<T: FromStr>(var: &str, def: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    std::env::var(var)
        .map(|s| {
            s.parse::<T>()
                .unwrap_or_else(|_| panic!("Could not parse {}", var))
        })
        .unwrap_or(def)
}

/// The `sum-native` binary sitting next to this script in the target dir.
fn default_subject() -> PathBuf {
    let mut path = std::env::current_exe().expect("no current exe path");
    path.pop();
    path.push(format!("sum-native{}", std::env::consts::EXE_SUFFIX));
    path
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    // setup
    let it = Instant::now();
    let subject = env_or("SUM_BIN", default_subject());
    let runs = env_or("SUM_RUNS", 1u32);
    assert!(runs >= 1, "SUM_RUNS must be at least 1");
    tracing::debug!(subject = %subject.display(), runs, "resolved subject");
    let setup_secs = it.elapsed().as_secs_f32();

    // run
    let it = Instant::now();
    let mut codes = Vec::with_capacity(runs as usize);
    for _ in 0..runs {
        let status = Command::new(&subject)
            .status()
            .unwrap_or_else(|e| panic!("Could not run {}: {e}", subject.display()));
        let code = status.code().expect("subject was terminated by a signal");
        tracing::debug!(code, "subject exited");
        codes.push(i64::from(code));
    }
    let run_secs = it.elapsed().as_secs_f32();

    let n = SEQUENCE.len();
    let res = codes[0];
    eprintln!("sum(1..={n}) = {res}");

    // check
    let it = Instant::now();
    for code in &codes {
        assert_eq!(*code, EXPECTED_SUM, "unexpected exit status");
    }
    let check_secs = it.elapsed().as_secs_f32();

    let stats = Stats {
        program: "sum-native",
        n,
        runs,
        sum: res,
        setup_secs,
        run_secs,
        check_secs,
    };

    println!("{}", serde_json::to_string(&stats).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_parses_set_values() {
        std::env::set_var("SUM_SCRIPT_TEST_RUNS", "7");
        assert_eq!(env_or("SUM_SCRIPT_TEST_RUNS", 1u32), 7);
    }

    #[test]
    fn env_or_falls_back_when_unset() {
        assert_eq!(env_or("SUM_SCRIPT_TEST_UNSET", 3u32), 3);
    }

    #[test]
    fn default_subject_is_the_native_binary() {
        let path = default_subject();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(name, format!("sum-native{}", std::env::consts::EXE_SUFFIX));
    }
}
