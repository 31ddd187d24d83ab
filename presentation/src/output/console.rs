//! Console output formatter

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use serde_json::Value;
use std::collections::BTreeMap;
use winconf_application::{DescribedSetting, EncodeOutput};
use winconf_domain::{RangeDescriptor, SettingDefinition, SettingDescriptor};

/// Formats results for terminal display.
///
/// Scripts are printed verbatim so they can be redirected into a `.ps1` file.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn range_line(range: &RangeDescriptor) -> String {
        let unit = if range.unit.is_empty() {
            String::new()
        } else {
            format!(" {}", range.unit)
        };
        format!(
            "{}..{} step {}{}, default {} (system {})",
            range.min, range.max, range.step, unit, range.default, range.system_default
        )
    }

    fn descriptor_lines(out: &mut String, descriptor: &SettingDescriptor, indent: usize) {
        let pad = " ".repeat(indent);
        match descriptor {
            SettingDescriptor::Range(range) | SettingDescriptor::Bool(range) => {
                out.push_str(&format!("{}{}\n", pad, Self::range_line(range)));
            }
            SettingDescriptor::ConfigList(list) => {
                out.push_str(&format!(
                    "{}{} {}\n",
                    pad,
                    "settings:".dimmed(),
                    list.settings.keys().cloned().collect::<Vec<_>>().join(", ")
                ));
                if let Some(paths) = &list.paths {
                    for path in paths.keys() {
                        out.push_str(&format!("{}{} {}\n", pad, "path:".dimmed(), path));
                    }
                }
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn described(&self, settings: &BTreeMap<String, DescribedSetting>) -> String {
        let mut out = Self::header("Settings");
        for (name, setting) in settings {
            out.push_str(&format!(
                "\n{} {}\n",
                name.yellow().bold(),
                format!("[{}]", setting.descriptor.kind()).dimmed()
            ));
            Self::descriptor_lines(&mut out, &setting.descriptor, 2);
            if let Some(value) = &setting.value {
                out.push_str(&format!("  {} {}\n", "current:".green().bold(), value));
            }
        }
        out
    }

    fn decoded(&self, values: &BTreeMap<String, Value>) -> String {
        let mut out = Self::header("Current Values");
        let width = values.keys().map(String::len).max().unwrap_or(0);
        for (name, value) in values {
            out.push_str(&format!("{:width$}  {}\n", name, value, width = width));
        }
        out
    }

    fn encoded(&self, output: &EncodeOutput) -> String {
        output.script.to_text()
    }

    fn read_script(&self, script: &str) -> String {
        script.to_string()
    }

    fn catalog(&self, settings: &[SettingDefinition]) -> String {
        let mut out = Self::header("Supported Settings");
        for setting in settings {
            let target = match setting {
                SettingDefinition::Registry { path, .. } => format!("registry {}", path),
                SettingDefinition::WebConfig {
                    filter,
                    name_override,
                    base,
                } => format!(
                    "web config {}/@{}",
                    filter,
                    name_override.unwrap_or(base.name)
                ),
                SettingDefinition::ConfigList { .. } => "path-scoped web config values".to_string(),
            };
            out.push_str(&format!(
                "{:32} {:12} {}\n",
                setting.name().yellow(),
                setting.kind().to_string(),
                target.dimmed()
            ));
        }
        out
    }
}
