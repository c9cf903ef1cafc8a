//! Demo application for the call interceptor.
//!
//! Wraps a handful of sample operations explicitly (the selection policy,
//! applied by hand) and runs them so the entry/exit lines are visible on
//! the console or through a tracing subscriber.

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autolog::{ConsoleSink, Interceptor, LogSink, Operation, ReturnKind, TracingSink, Value};

#[derive(Parser)]
#[command(name = "autolog-demo")]
#[command(about = "Runs sample operations through the call interceptor", long_about = None)]
struct Cli {
    /// Where emitted log lines go.
    #[arg(short, long, value_enum, default_value = "console")]
    sink: SinkChoice,

    /// Request more than the account balance to show the failure path.
    #[arg(long)]
    fail: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SinkChoice {
    /// stdout/stderr with synchronous flushing.
    Console,
    /// Route lines through a tracing subscriber.
    Tracing,
}

/// Errors produced by the sample account operation.
#[derive(Debug, Error)]
enum AccountError {
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i64, requested: i64 },
}

const ADD: Operation = Operation {
    scope: "Calculator",
    name: "add",
    params: &["a", "b"],
    return_kind: ReturnKind::Value,
};

const GREET: Operation = Operation {
    scope: "Greeter",
    name: "greet",
    params: &["name"],
    return_kind: ReturnKind::Void,
};

const WITHDRAW: Operation = Operation {
    scope: "Account",
    name: "withdraw",
    params: &["amount"],
    return_kind: ReturnKind::Value,
};

fn main() {
    let cli = Cli::parse();

    match cli.sink {
        SinkChoice::Console => run(ConsoleSink::new(), cli.fail),
        SinkChoice::Tracing => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "autolog=info".into()),
                )
                .with(tracing_subscriber::fmt::layer())
                .init();
            run(TracingSink::new(), cli.fail)
        }
    }
}

fn run<S: LogSink>(sink: S, fail: bool) {
    let interceptor = Interceptor::new(sink);

    let sum = interceptor.call_infallible(&ADD, &[Value::Int(2), Value::Int(3)], || 2 + 3);

    interceptor.call_infallible(&GREET, &[Value::display("world")], || ());

    let amount = if fail { 500 } else { i64::from(sum) };
    let outcome = interceptor.call(&WITHDRAW, &[Value::Long(amount)], || withdraw(100, amount));

    if outcome.is_err() {
        // Already logged by the interceptor; the demo only surfaces the exit code.
        std::process::exit(1);
    }
}

fn withdraw(balance: i64, requested: i64) -> Result<i64, AccountError> {
    if requested > balance {
        return Err(AccountError::InsufficientFunds { balance, requested });
    }
    Ok(balance - requested)
}
