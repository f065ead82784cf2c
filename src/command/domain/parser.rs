//! Command-line parser for chat messages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One chat message split into a command name and its arguments.
///
/// Tokens are separated by single spaces. Every token after the name is
/// positional; a token of the form `key=value` with a non-empty key is also
/// recorded as a keyed argument, split on its first `=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInvocation {
    name: String,
    positional: Vec<String>,
    keyed: BTreeMap<String, String>,
}

impl CommandInvocation {
    /// Parses `text`, returning `None` when it is not a command.
    ///
    /// `text` must begin with `/`; leading whitespace is not skipped, but
    /// trailing whitespace is. Runs of spaces never produce empty tokens, so
    /// positional indices count non-empty tokens only. The name may be empty
    /// (`"/"` or `"/ list"`); such invocations parse but never dispatch.
    ///
    /// ```
    /// use maitre::command::domain::CommandInvocation;
    ///
    /// let invocation = CommandInvocation::parse("/Update pie price=10=20").expect("command");
    /// assert_eq!(invocation.name(), "update");
    /// assert_eq!(invocation.keyed_arg("price"), Some("10=20"));
    /// assert!(CommandInvocation::parse("hello").is_none());
    /// assert!(CommandInvocation::parse(" /help").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix('/')?.trim_end();
        let mut tokens = rest.split(' ');
        let name = tokens.next().unwrap_or_default().to_lowercase();

        let positional: Vec<String> = tokens
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect();
        let keyed = positional
            .iter()
            .filter_map(|token| keyed_pair(token))
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect();

        Some(Self {
            name,
            positional,
            keyed,
        })
    }

    /// Returns the lower-cased command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns every token after the name, keyed tokens included.
    #[must_use]
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Returns the keyed arguments. A repeated key keeps its last value.
    #[must_use]
    pub const fn keyed(&self) -> &BTreeMap<String, String> {
        &self.keyed
    }

    /// Returns the value of keyed argument `key`.
    #[must_use]
    pub fn keyed_arg(&self, key: &str) -> Option<&str> {
        self.keyed.get(key).map(String::as_str)
    }

    /// Returns the `index`-th positional token when it is not a keyed
    /// argument.
    #[must_use]
    pub fn bare_arg(&self, index: usize) -> Option<&str> {
        self.positional
            .get(index)
            .map(String::as_str)
            .filter(|token| keyed_pair(token).is_none())
    }

    /// Returns the arguments as recorded in the audit trail.
    ///
    /// Keyed arguments keep their keys; bare tokens are stored under their
    /// positional index (`"0"`, `"1"`, ...).
    #[must_use]
    pub fn audit_args(&self) -> BTreeMap<String, String> {
        let mut args = self.keyed.clone();
        for (index, token) in self.positional.iter().enumerate() {
            if keyed_pair(token).is_none() {
                args.insert(index.to_string(), token.clone());
            }
        }
        args
    }
}

fn keyed_pair(token: &str) -> Option<(&str, &str)> {
    token.split_once('=').filter(|(key, _)| !key.is_empty())
}
