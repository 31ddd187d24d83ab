//! Assignment scanning for previously applied write scripts.
//!
//! Each line is tokenized PowerShell-style (whitespace separated, double
//! quotes group) and matched by parameter name rather than position, so a
//! hand-edited line with reordered parameters or different flag casing is
//! still recognized. Lines that are not complete assignments are ignored.

use super::templates::{SET_ITEM_PROPERTY, SET_WEB_CONFIGURATION_PROPERTY};

/// One recognized write statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Registry {
        path: String,
        name: String,
        value: String,
    },
    WebConfig {
        filter: String,
        path: String,
        name: String,
        value: String,
    },
}

/// All assignments in `script`, in line order.
pub fn assignments(script: &str) -> impl Iterator<Item = Assignment> + '_ {
    script.lines().filter_map(parse_line)
}

/// Raw values assigned to registry value `name` under `path`.
pub fn registry_values(script: &str, path: &str, name: &str) -> Vec<String> {
    assignments(script)
        .filter_map(|a| match a {
            Assignment::Registry {
                path: p,
                name: n,
                value,
            } if p == path && n == name => Some(value),
            _ => None,
        })
        .collect()
}

/// Raw values assigned to property `name` of section `filter` at `path`.
pub fn web_config_values(script: &str, filter: &str, path: &str, name: &str) -> Vec<String> {
    assignments(script)
        .filter_map(|a| match a {
            Assignment::WebConfig {
                filter: f,
                path: p,
                name: n,
                value,
            } if f == filter && p == path && n == name => Some(value),
            _ => None,
        })
        .collect()
}

/// Parse a single line; `None` unless it is a complete assignment.
pub fn parse_line(line: &str) -> Option<Assignment> {
    let tokens = tokenize(line.trim());
    let (command, rest) = tokens.split_first()?;
    let args = named_args(rest);

    if command.eq_ignore_ascii_case(SET_ITEM_PROPERTY) {
        Some(Assignment::Registry {
            path: arg(&args, "path")?,
            name: arg(&args, "name")?,
            value: arg(&args, "value")?,
        })
    } else if command.eq_ignore_ascii_case(SET_WEB_CONFIGURATION_PROPERTY) {
        Some(Assignment::WebConfig {
            filter: arg(&args, "filter")?,
            path: arg(&args, "pspath")?,
            name: arg(&args, "name")?,
            value: arg(&args, "value")?,
        })
    } else {
        None
    }
}

fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        tokens.push(current);
    }
    tokens
}

/// Pair `-Flag value` tokens; flags are lowercased without the dash.
fn named_args(tokens: &[String]) -> Vec<(String, String)> {
    let mut args = Vec::new();
    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        if let Some(flag) = token.strip_prefix('-') {
            if let Some(value) = iter.next() {
                args.push((flag.to_ascii_lowercase(), value.clone()));
            }
        }
    }
    args
}

fn arg(args: &[(String, String)], flag: &str) -> Option<String> {
    args.iter()
        .find(|(f, _)| f == flag)
        .map(|(_, v)| v.clone())
}
