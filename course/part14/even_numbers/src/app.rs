use std::io::Write;

use crate::{
    config::AppConfig,
    evens::{checked_sum_evens, filter_evens},
    input::parse_numbers,
    report::{EvenNumbers, Total},
};

/// Prints the report for `config`, or for `args` when any are given.
///
/// Arguments replace the configured numbers rather than adding to them.
pub fn run<S, W>(mut config: AppConfig, args: &[S], out: &mut W) -> anyhow::Result<()>
where
    S: AsRef<str>,
    W: Write,
{
    if !args.is_empty() {
        config.numbers = parse_numbers(args)?;
        tracing::debug!(count = config.numbers.len(), "using numbers from arguments");
    }

    let total = checked_sum_evens(&config.numbers)?;
    let evens = filter_evens(&config.numbers);
    tracing::info!(
        inputs = config.numbers.len(),
        evens = evens.len(),
        total,
        "summed even numbers"
    );

    if config.show_total {
        writeln!(out, "{}", Total(total))?;
    }
    if config.show_evens {
        writeln!(out, "{}", EvenNumbers(&evens))?;
    }

    Ok(())
}
