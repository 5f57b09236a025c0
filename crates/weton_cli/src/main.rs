mod cli;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{debug, info};
use weton_calc::{CalendarDate, ParseMode, Weton, weton_from_date};

use crate::cli::Cli;

const USAGE: &str = "Usage: weton DAY MONTH YEAR.";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            process::exit(1);
        }
    };
    logging::init(cli.verbose);

    let [day, month, year, ..] = cli.date.as_slice() else {
        debug!(supplied = cli.date.len(), "too few date components");
        println!("{USAGE}");
        process::exit(1);
    };

    let mode = if cli.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };

    match render(day, month, year, mode, cli.neptu) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Output text for one invocation, newline-terminated.
fn render(day: &str, month: &str, year: &str, mode: ParseMode, neptu: bool) -> Result<String> {
    let date = CalendarDate::from_args(day, month, year, mode)?;
    debug!(%date, ?mode, "parsed date");

    let weton = weton_from_date(date);
    info!(%date, %weton, "weton resolved");

    let mut out = format!("~ {weton} ~\n");
    if neptu {
        out.push_str(&neptu_line(weton));
        out.push('\n');
    }
    Ok(out)
}

fn neptu_line(weton: Weton) -> String {
    format!(
        "Neptu: {} + {} = {}",
        weton.dina.neptu(),
        weton.pasaran.neptu(),
        weton.neptu()
    )
}
