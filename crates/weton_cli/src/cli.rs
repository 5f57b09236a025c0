use clap::Parser;

/// Javanese weton (dina + pasaran) of a Gregorian date.
#[derive(Parser)]
#[command(
    name = "weton",
    version,
    about = "Javanese weton (dina + pasaran) of a Gregorian date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Reject non-numeric date components instead of reading them as 0.
    #[arg(long)]
    pub strict: bool,

    /// Also print the neptu of the weton.
    #[arg(long)]
    pub neptu: bool,

    /// DAY MONTH YEAR; anything after the third value is ignored.
    ///
    /// Everything from the first value on is taken verbatim, so `-19x5` or
    /// `--foo` reach the lenient parser instead of being read as options.
    #[arg(
        value_name = "DAY MONTH YEAR",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub date: Vec<String>,
}
