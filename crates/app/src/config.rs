use std::fmt;

use drill_core::input;
use drill_core::model::{OperatorSet, PracticeDefaults, ProblemSettings, ProblemSettingsDraft};

#[derive(Debug)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    Invalid(drill_core::Error),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::Invalid(err) => write!(f, "invalid settings: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<drill_core::Error> for ArgsError {
    fn from(err: drill_core::Error) -> Self {
        ArgsError::Invalid(err)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub defaults: PracticeDefaults,
    pub start: bool,
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --count <n>        Number of problems (default: 10)");
    eprintln!("  --min <n>          Lowest operand, inclusive (default: 1)");
    eprintln!("  --max <n>          Highest operand, exclusive (default: 10)");
    eprintln!("  --ops <symbols>    Allowed operators from + - * / (default: +)");
    eprintln!("  --grid-min <n>     Multiplication table corner (default: 0)");
    eprintln!("  --grid-max <n>     Multiplication table last row/column (default: 10)");
    eprintln!("  --seed <n>         Fixed RNG seed for reproducible batches");
    eprintln!("  --start            Generate a batch on launch");
    eprintln!("  -h, --help         Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  DRILL_COUNT, DRILL_MIN, DRILL_MAX, DRILL_OPS, DRILL_GRID_MIN, DRILL_GRID_MAX, DRILL_SEED");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn whole<T: TryFrom<u64>>(flag: &'static str, raw: &str) -> Result<T, ArgsError> {
    input::parse_whole(raw)
        .ok()
        .and_then(|value| T::try_from(value).ok())
        .ok_or_else(|| ArgsError::InvalidNumber {
            flag,
            raw: raw.to_string(),
        })
}

fn bound(flag: &'static str, raw: &str) -> Result<i64, ArgsError> {
    input::parse_bound(raw).map_err(|_| ArgsError::InvalidNumber {
        flag,
        raw: raw.to_string(),
    })
}

/// Raw values gathered from the environment, then overridden by flags.
struct Collected {
    count: u32,
    min: i64,
    max: i64,
    ops: OperatorSet,
    grid_min: u32,
    grid_max: u32,
    seed: Option<u64>,
    start: bool,
}

impl Collected {
    fn from_env(env: &impl Fn(&str) -> Option<String>) -> Result<Self, ArgsError> {
        let base = PracticeDefaults::default();
        let mut collected = Self {
            count: base.problems.count(),
            min: base.problems.min(),
            max: base.problems.max(),
            ops: base.problems.operators(),
            grid_min: base.grid.min(),
            grid_max: base.grid.max(),
            seed: base.seed,
            start: false,
        };

        if let Some(raw) = env("DRILL_COUNT") {
            collected.count = whole("DRILL_COUNT", &raw)?;
        }
        if let Some(raw) = env("DRILL_MIN") {
            collected.min = bound("DRILL_MIN", &raw)?;
        }
        if let Some(raw) = env("DRILL_MAX") {
            collected.max = bound("DRILL_MAX", &raw)?;
        }
        if let Some(raw) = env("DRILL_OPS") {
            collected.ops = OperatorSet::parse(&raw).map_err(drill_core::Error::from)?;
        }
        if let Some(raw) = env("DRILL_GRID_MIN") {
            collected.grid_min = whole("DRILL_GRID_MIN", &raw)?;
        }
        if let Some(raw) = env("DRILL_GRID_MAX") {
            collected.grid_max = whole("DRILL_GRID_MAX", &raw)?;
        }
        if let Some(raw) = env("DRILL_SEED") {
            collected.seed = Some(whole("DRILL_SEED", &raw)?);
        }
        Ok(collected)
    }

    fn into_args(self) -> Result<Args, ArgsError> {
        let draft = ProblemSettingsDraft {
            count: Some(self.count),
            min: Some(self.min),
            max: Some(self.max),
            operators: self.ops,
        };
        let defaults =
            PracticeDefaults::from_parts(draft, self.grid_min, self.grid_max, self.seed)?;
        Ok(Args {
            defaults,
            start: self.start,
        })
    }
}

/// Parse command-line flags on top of environment defaults.
///
/// # Errors
///
/// Returns `ArgsError` for unknown flags, malformed numbers, or settings that
/// fail validation (e.g. `--min 9 --max 3`).
pub fn parse(
    args: impl IntoIterator<Item = String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Command, ArgsError> {
    let mut collected = Collected::from_env(&env)?;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" => collected.count = whole("--count", &require_value(&mut args, "--count")?)?,
            "--min" => collected.min = bound("--min", &require_value(&mut args, "--min")?)?,
            "--max" => collected.max = bound("--max", &require_value(&mut args, "--max")?)?,
            "--ops" => {
                let value = require_value(&mut args, "--ops")?;
                collected.ops = OperatorSet::parse(&value).map_err(drill_core::Error::from)?;
            }
            "--grid-min" => {
                collected.grid_min = whole("--grid-min", &require_value(&mut args, "--grid-min")?)?;
            }
            "--grid-max" => {
                collected.grid_max = whole("--grid-max", &require_value(&mut args, "--grid-max")?)?;
            }
            "--seed" => {
                collected.seed = Some(whole("--seed", &require_value(&mut args, "--seed")?)?);
            }
            "--start" => collected.start = true,
            "--help" | "-h" => return Ok(Command::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    collected.into_args().map(Command::Run)
}

/// Defaults shown when nothing is configured.
#[must_use]
pub fn describe(defaults: &PracticeDefaults) -> String {
    let problems: &ProblemSettings = &defaults.problems;
    format!(
        "{} problems in [{}, {}) using {}; grid {}..={}",
        problems.count(),
        problems.min(),
        problems.max(),
        problems.operators().symbols(),
        defaults.grid.min(),
        defaults.grid.max()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::model::Operator;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn run(cmd: Command) -> Args {
        match cmd {
            Command::Run(args) => args,
            Command::Help => panic!("expected run"),
        }
    }

    #[test]
    fn no_flags_yield_defaults() {
        let args = run(parse(argv(&[]), no_env).unwrap());
        assert_eq!(args.defaults, PracticeDefaults::default());
        assert!(!args.start);
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            "DRILL_COUNT" => Some("3".to_string()),
            "DRILL_OPS" => Some("*".to_string()),
            _ => None,
        };
        let args = run(parse(argv(&["--count", "5", "--min", "-4", "--start"]), env).unwrap());
        assert_eq!(args.defaults.problems.count(), 5);
        assert_eq!(args.defaults.problems.min(), -4);
        assert_eq!(args.defaults.problems.operators().to_vec(), vec![Operator::Multiply]);
        assert!(args.start);
    }

    #[test]
    fn invalid_settings_are_reported() {
        let err = parse(argv(&["--min", "9", "--max", "3"]), no_env).unwrap_err();
        assert!(matches!(err, ArgsError::Invalid(_)), "{err}");

        let err = parse(argv(&["--grid-min", "5", "--grid-max", "3"]), no_env).unwrap_err();
        assert!(matches!(err, ArgsError::Invalid(_)), "{err}");

        let err = parse(argv(&["--ops", "%"]), no_env).unwrap_err();
        assert!(matches!(err, ArgsError::Invalid(_)), "{err}");

        let err = parse(argv(&["--count", "4000000000"]), no_env).unwrap_err();
        assert!(matches!(err, ArgsError::Invalid(_)), "{err}");
    }

    #[test]
    fn malformed_flags_are_reported() {
        assert!(matches!(
            parse(argv(&["--count"]), no_env),
            Err(ArgsError::MissingValue { flag: "--count" })
        ));
        assert!(matches!(
            parse(argv(&["--seed", "abc"]), no_env),
            Err(ArgsError::InvalidNumber { flag: "--seed", .. })
        ));
        assert!(matches!(
            parse(argv(&["--bogus"]), no_env),
            Err(ArgsError::UnknownArg(_))
        ));
        assert_eq!(parse(argv(&["-h"]), no_env).unwrap(), Command::Help);
    }

    #[test]
    fn describe_summarises_defaults() {
        assert_eq!(
            describe(&PracticeDefaults::default()),
            "10 problems in [1, 10) using +; grid 0..=10"
        );
    }
}
