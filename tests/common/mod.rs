//! Shared fixtures for interception tests.

use thiserror::Error;

use autolog::{Operation, ReturnKind};

/// Errors produced by the sample ledger operations.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i64, requested: i64 },

    #[error("unknown account: {0}")]
    UnknownAccount(String),
}

pub const ADD: Operation = Operation {
    scope: "Calculator",
    name: "add",
    params: &["a", "b"],
    return_kind: ReturnKind::Value,
};

pub const LOG_MSG: Operation = Operation {
    scope: "Console",
    name: "log",
    params: &["msg"],
    return_kind: ReturnKind::Void,
};

pub const PING: Operation = Operation {
    scope: "Health",
    name: "ping",
    params: &[],
    return_kind: ReturnKind::Value,
};

pub const FIND_NICKNAME: Operation = Operation {
    scope: "Directory",
    name: "find_nickname",
    params: &["user"],
    return_kind: ReturnKind::Value,
};

pub const APPEND_GREETING: Operation = Operation {
    scope: "Composer",
    name: "append_greeting",
    params: &["text"],
    return_kind: ReturnKind::Void,
};

pub const WITHDRAW: Operation = Operation {
    scope: "Ledger",
    name: "withdraw",
    params: &["account", "amount"],
    return_kind: ReturnKind::Value,
};

pub fn withdraw(account: &str, balance: i64, requested: i64) -> Result<i64, LedgerError> {
    if account.is_empty() {
        return Err(LedgerError::UnknownAccount(account.to_string()));
    }
    if requested > balance {
        return Err(LedgerError::InsufficientFunds { balance, requested });
    }
    Ok(balance - requested)
}
