use std::env;
use std::error::Error;
use std::ffi::OsString;
use std::io;
use std::io::Write;
use std::time::Instant;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use memo_factorial::args::evaluate_all;
use memo_factorial::factorial::Memo;
use memo_factorial::print::write_plain;

const ESCAPE: &str = "--";

#[derive(Debug, clap::Parser, Clone)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// integers whose factorials are to be computed; every argument is a value, never an option
    #[clap(allow_hyphen_values = true)]
    values: Vec<OsString>,
}
impl Args {
    /// Parses the raw command line. An escape is placed ahead of the user's arguments, so that
    /// each of them (including a literal `--`) arrives as a positional value.
    fn try_from_raw(raw: impl IntoIterator<Item = OsString>) -> Result<Self, clap::Error> {
        let mut raw = raw.into_iter();
        let program = raw.next().unwrap_or_else(|| OsString::from("factorial"));
        Self::try_parse_from([program, OsString::from(ESCAPE)].into_iter().chain(raw))
    }

    fn values_lossy(&self) -> impl Iterator<Item = String> + '_ {
        self.values
            .iter()
            .map(|value| value.to_string_lossy().into_owned())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn")
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::try_from_raw(env::args_os()).unwrap_or_else(|err| err.exit());
    debug!("args: {args:?}");

    let start_time = Instant::now();
    run(&args)?;
    let elapsed = start_time.elapsed();
    debug!(
        "evaluated {} arguments in {:.6}s",
        args.values.len(),
        elapsed.as_secs_f64()
    );
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut memo = Memo::<u64>::default();
    let evaluations = evaluate_all(args.values_lossy(), &mut memo);
    debug!("{} factorials cached", memo.len());

    let mut out = io::stdout().lock();
    write_plain(&evaluations, &mut out, &mut io::stderr().lock())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use memo_factorial::args::ArgError;

    use super::*;

    fn parse(raw: &[&str]) -> Args {
        Args::try_from_raw(raw.iter().map(OsString::from)).unwrap()
    }

    #[test]
    fn hyphenated_arguments_are_values() {
        let args = parse(&["factorial", "5", "-x", "--", "6"]);
        let evaluations = evaluate_all(args.values_lossy(), &mut Memo::<u64>::default());
        assert_eq!(4, evaluations.len());
        assert_eq!(120, evaluations[0].outcome.as_ref().unwrap().value);
        assert_eq!(
            Err(ArgError::NotInteger {
                position: 2,
                arg: "-x".into()
            }),
            evaluations[1].outcome
        );
        assert_eq!(
            Err(ArgError::NotInteger {
                position: 3,
                arg: "--".into()
            }),
            evaluations[2].outcome
        );
        assert_eq!(4, evaluations[3].position);
        assert_eq!(720, evaluations[3].outcome.as_ref().unwrap().value);
    }

    #[test]
    fn leading_escape_is_a_value() {
        let args = parse(&["factorial", "--", "3"]);
        assert_eq!(vec!["--", "3"], args.values_lossy().collect::<Vec<_>>());
    }

    #[test]
    fn no_help_or_version_flags() {
        let args = parse(&["factorial", "-h", "--help", "-V", "--version", "-t", "u128"]);
        assert_eq!(
            vec!["-h", "--help", "-V", "--version", "-t", "u128"],
            args.values_lossy().collect::<Vec<_>>()
        );
    }

    #[test]
    fn negative_numbers_are_values() {
        let args = parse(&["factorial", "-20", "-1", "0"]);
        let evaluations = evaluate_all(args.values_lossy(), &mut Memo::<u64>::default());
        assert!(matches!(evaluations[0].outcome, Err(ArgError::Negative { position: 1, .. })));
        assert!(matches!(evaluations[1].outcome, Err(ArgError::Negative { position: 2, .. })));
        assert_eq!(1, evaluations[2].outcome.as_ref().unwrap().value);
    }

    #[test]
    fn no_arguments() {
        let args = parse(&["factorial"]);
        assert!(args.values.is_empty());
    }
}
