//! Handler for the `strategy` command.

use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::cli::input::Tokens;
use crate::cli::{output, StrategyArgs};
use crate::config::Config;
use crate::error::Result;
use crate::strategy::{RoutingKey, StrategyRouter};

/// Execute the strategy command.
pub fn execute(config: &Config, args: &StrategyArgs) -> Result<()> {
    let values = match &args.values {
        Some(values) => values.clone(),
        None => {
            let stdin = io::stdin();
            read_values(&mut Tokens::new(stdin.lock()), config.strategy.input_len)?
        }
    };
    let keys = if args.keys.is_empty() {
        &config.strategy.keys
    } else {
        &args.keys
    };

    let router = StrategyRouter::standard();
    debug!(?router, ?values, "Evaluating strategies");
    for line in evaluate_all(&router, &values, keys) {
        match line {
            Ok(line) => output::note(&line),
            Err(message) => output::error(&message),
        }
    }
    Ok(())
}

/// Evaluate each key in order. An error for one key does not stop the rest.
pub fn evaluate_all(
    router: &StrategyRouter,
    values: &[i64],
    keys: &[String],
) -> Vec<std::result::Result<String, String>> {
    keys.iter()
        .map(|text| {
            let key: RoutingKey = text.parse().map_err(|e| format!("{text}: {e}"))?;
            router
                .evaluate_key(values, key)
                .map(|max| format!("{key} -> {max}"))
                .map_err(|e| format!("{key}: {e}"))
        })
        .collect()
}

/// Read up to `count` integers. Non-integer tokens are reported and skipped.
pub fn read_values<R: BufRead>(tokens: &mut Tokens<R>, count: usize) -> Result<Vec<i64>> {
    let mut values = Vec::with_capacity(count);
    while values.len() < count {
        match tokens.next_int()? {
            Some(Ok(value)) => values.push(value),
            Some(Err(token)) => output::warn(&format!("Expected an integer, got '{token}'")),
            None => {
                warn!(expected = count, got = values.len(), "Input ended early");
                break;
            }
        }
    }
    Ok(values)
}
