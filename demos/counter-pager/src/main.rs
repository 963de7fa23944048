//! counter-pager - swipe through integers in the terminal
//!
//! Reads one command per line from stdin:
//! `+` / `-` change the counter directly, `>` / `<` swipe forward / backward,
//! `x>` / `x<` start a swipe and let go early, `q` quits.

mod container;

use std::io::BufRead;
use std::str::FromStr;
use std::sync::Arc;

use ankurah_pager::ankurah_signals::{Mut, Peek};
use ankurah_pager::{DirectionClassifier, Pager, Side};
use clap::Parser;
use container::TerminalContainer;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Swipe through integers with ankurah-pager")]
struct Args {
    /// Page to start on
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    start: i64,
    /// First page; unbounded if omitted
    #[arg(long, allow_negative_numbers = true)]
    min: Option<i64>,
    /// Last page; unbounded if omitted
    #[arg(long, allow_negative_numbers = true)]
    max: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Increment,
    Decrement,
    Swipe { side: Side, completed: bool },
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Command::Increment),
            "-" => Ok(Command::Decrement),
            ">" => Ok(Command::Swipe { side: Side::Next, completed: true }),
            "<" => Ok(Command::Swipe { side: Side::Previous, completed: true }),
            "x>" => Ok(Command::Swipe { side: Side::Next, completed: false }),
            "x<" => Ok(Command::Swipe { side: Side::Previous, completed: false }),
            "q" => Ok(Command::Quit),
            other => Err(format!("unknown command {other:?}")),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let min = args.min.unwrap_or(i64::MIN);
    let max = args.max.unwrap_or(i64::MAX);
    if min > max || !(min..=max).contains(&args.start) {
        anyhow::bail!("start {} is outside {}..={}", args.start, min, max);
    }

    let counter = Mut::new(args.start);
    let container = Arc::new(TerminalContainer::default());
    let pager = Pager::builder()
        .cursor(counter.clone())
        .content(|n: &i64| n.to_string())
        .previous(move |n: &i64| (*n > min).then(|| (n - 1).to_string()))
        .next(move |n: &i64| (*n < max).then(|| (n + 1).to_string()))
        .previous_cursor(move |n: &i64| (*n > min).then(|| n - 1))
        .next_cursor(move |n: &i64| (*n < max).then(|| n + 1))
        .classifier(DirectionClassifier::by_order())
        .container(container.clone())
        .build()?;
    pager.mount();

    for line in std::io::stdin().lock().lines() {
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("{}", e);
                continue;
            }
        };
        match command {
            Command::Increment => {
                let n = counter.peek();
                if n < max {
                    counter.set(n + 1);
                }
            }
            Command::Decrement => {
                let n = counter.peek();
                if n > min {
                    counter.set(n - 1);
                }
            }
            Command::Swipe { side, completed } => {
                if !container.swipe(&pager, side, completed) {
                    tracing::info!("no page {:?} of {}", side, counter.peek());
                }
            }
            Command::Quit => break,
        }
    }

    tracing::info!("stopped at {}", counter.peek());
    Ok(())
}
