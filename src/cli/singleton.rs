//! Handler for the `singleton` command.

use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::sync::Arc;

use tracing::{info, warn};

use crate::cli::input::Tokens;
use crate::cli::{output, SingletonArgs};
use crate::config::Config;
use crate::error::Result;
use crate::singleton::{Instance, Singleton};

/// Integer-coded console commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Terminate,
    Create,
    List,
    Compare,
    Log,
}

impl Command {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Terminate),
            1 => Some(Self::Create),
            2 => Some(Self::List),
            3 => Some(Self::Compare),
            4 => Some(Self::Log),
            _ => None,
        }
    }
}

/// Execute the singleton command against stdin.
pub fn execute(config: &Config, args: &SingletonArgs) -> Result<()> {
    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| config.singleton.log_file.clone());
    let singleton = Singleton::new(log_file);
    info!(path = %singleton.log_path().display(), "Singleton console ready");

    print_menu();
    let stdin = io::stdin();
    let mut console = SingletonConsole::new(&singleton);
    let result = console.run(&mut Tokens::new(stdin.lock()));
    console.release_all();
    result
}

fn print_menu() {
    output::banner(
        "SINGLETON CONTROL CALLS",
        &[
            "0 - Terminate the call",
            "1 <value> - Create a new instance",
            "2 - List all instances",
            "3 <i> <j> - Compare two instances",
            "4 <text> - Write a line to the log file of instance #1",
        ],
    );
}

/// Handles created through the console, numbered from 1.
pub struct SingletonConsole<'a> {
    singleton: &'a Singleton,
    created: BTreeMap<usize, Arc<Instance>>,
    next_index: usize,
}

impl<'a> SingletonConsole<'a> {
    pub fn new(singleton: &'a Singleton) -> Self {
        Self {
            singleton,
            created: BTreeMap::new(),
            next_index: 1,
        }
    }

    /// Run commands until `0` or end of input.
    ///
    /// # Errors
    /// Fails on stdin errors and when the instance's log file cannot be opened;
    /// every other problem is reported and the loop continues.
    pub fn run<R: BufRead>(&mut self, tokens: &mut Tokens<R>) -> Result<()> {
        loop {
            let code = match tokens.next_int()? {
                None => {
                    info!("End of input");
                    return Ok(());
                }
                Some(Err(token)) => {
                    output::warn(&format!("Not a command: '{token}'"));
                    continue;
                }
                Some(Ok(code)) => code,
            };

            match Command::from_code(code) {
                Some(Command::Terminate) => {
                    output::note("Call will end now");
                    return Ok(());
                }
                Some(Command::Create) => {
                    if let Some(value) = read_arg(tokens)? {
                        self.create(value)?;
                    }
                }
                Some(Command::List) => self.list(),
                Some(Command::Compare) => {
                    // Stop at the first bad argument so the next command is not swallowed.
                    let Some(first) = read_arg(tokens)? else {
                        continue;
                    };
                    if let Some(second) = read_arg(tokens)? {
                        self.compare(first, second);
                    }
                }
                Some(Command::Log) => {
                    let message = tokens.rest_of_line()?.unwrap_or_default();
                    self.log(&message);
                }
                None => output::warn(&format!("Unknown command {code}")),
            }
        }
    }

    fn create(&mut self, value: i64) -> Result<()> {
        let instance = self.singleton.get_instance(value)?;
        let index = self.next_index;
        self.next_index += 1;
        output::ok(&format!(
            "Instance #{index} -> id {}, value {}",
            instance.identity(),
            instance.value()
        ));
        self.created.insert(index, instance);
        Ok(())
    }

    fn list(&self) {
        if self.created.is_empty() {
            output::note("No instances created yet");
            return;
        }
        for (index, instance) in &self.created {
            output::key_value(
                &format!("Instance #{index}"),
                format!("id {}, value {}", instance.identity(), instance.value()),
            );
        }
    }

    fn compare(&self, first: i64, second: i64) {
        match (self.lookup(first), self.lookup(second)) {
            (Some(a), Some(b)) => {
                let same = Arc::ptr_eq(a, b);
                output::note(&format!("Instances #{first} and #{second} are the same: {same}"));
            }
            _ => output::warn(&format!("No instance at #{first} or #{second}")),
        }
    }

    fn log(&self, message: &str) {
        let Some(instance) = self.lookup(1) else {
            output::warn("Create an instance before logging");
            return;
        };
        match instance.log(message) {
            Ok(()) => output::note(&format!("Log : {message}")),
            Err(e) => {
                warn!(error = %e, "Log write failed");
                output::error(&e.to_string());
            }
        }
    }

    fn lookup(&self, index: i64) -> Option<&Arc<Instance>> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.created.get(&index))
    }

    /// Release the log file of every handle created through the console.
    pub fn release_all(&self) {
        for instance in self.created.values() {
            instance.release();
        }
    }

    #[must_use]
    pub fn created(&self) -> &BTreeMap<usize, Arc<Instance>> {
        &self.created
    }
}

/// Integer argument of a command. A non-integer is reported and yields `None`.
fn read_arg<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Option<i64>> {
    match tokens.next_int()? {
        Some(Ok(value)) => Ok(Some(value)),
        Some(Err(token)) => {
            output::warn(&format!("Expected an integer, got '{token}'"));
            Ok(None)
        }
        None => Ok(None),
    }
}
