//! Read-script assembly.
//!
//! The describe script builds one PowerShell hashtable and prints it as JSON:
//!
//! ```text
//! Import-Module WebAdministration
//! @{
//!     "WebConfig" = @{
//!         "MACHINE/WEBROOT/APPHOST" = @{
//!             "system.webServer/caching" = Get-WebConfiguration -pspath "..." -filter "..."
//!         }
//!     }
//!     "HKLM:\..." = Get-ItemProperty -Path "HKLM:\..."
//! } | ConvertTo-Json -Depth 4
//! ```
//!
//! Its output is the structured snapshot that `decode_multi` consumes.

use super::templates::{IMPORT_WEB_ADMINISTRATION, get_item_property, get_web_configuration};

/// Top-level snapshot key grouping web-config sections by path.
pub const WEB_CONFIG_SECTION: &str = "WebConfig";

/// Accumulates reads, each unique `(path, filter)` pair and registry path once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeScript {
    web_config: Vec<(String, Vec<String>)>,
    registry_paths: Vec<String>,
}

impl DescribeScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a read of section `filter` at `path`. Returns `false` if already queued.
    pub fn read_web_config(&mut self, path: &str, filter: &str) -> bool {
        let index = match self.web_config.iter().position(|(p, _)| p == path) {
            Some(index) => index,
            None => {
                self.web_config.push((path.to_string(), Vec::new()));
                self.web_config.len() - 1
            }
        };
        let filters = &mut self.web_config[index].1;
        if filters.iter().any(|f| f == filter) {
            return false;
        }
        filters.push(filter.to_string());
        true
    }

    /// Queue a registry key read. Returns `false` if already queued.
    pub fn read_registry(&mut self, path: &str) -> bool {
        if self.registry_paths.iter().any(|p| p == path) {
            return false;
        }
        self.registry_paths.push(path.to_string());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.web_config.is_empty() && self.registry_paths.is_empty()
    }

    /// Number of queued read statements.
    pub fn read_count(&self) -> usize {
        self.web_config.iter().map(|(_, f)| f.len()).sum::<usize>() + self.registry_paths.len()
    }

    /// Per-path web-config blocks at the given indentation depth.
    pub fn render_web_config_paths(&self, depth: usize) -> String {
        let mut out = String::new();
        for (path, filters) in &self.web_config {
            push_line(&mut out, depth, &format!("\"{}\" = @{{", path));
            for filter in filters {
                push_line(
                    &mut out,
                    depth + 1,
                    &format!("\"{}\" = {}", filter, get_web_configuration(path, filter)),
                );
            }
            push_line(&mut out, depth, "}");
        }
        out
    }

    /// The complete, self-contained script.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.web_config.is_empty() {
            out.push_str(IMPORT_WEB_ADMINISTRATION);
        }
        out.push_str("@{\n");
        if !self.web_config.is_empty() {
            push_line(&mut out, 1, &format!("\"{}\" = @{{", WEB_CONFIG_SECTION));
            out.push_str(&self.render_web_config_paths(2));
            push_line(&mut out, 1, "}");
        }
        for path in &self.registry_paths {
            push_line(
                &mut out,
                1,
                &format!("\"{}\" = {}", path, get_item_property(path)),
            );
        }
        out.push_str("} | ConvertTo-Json -Depth 4\n");
        out
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push('\t');
    }
    out.push_str(line);
    out.push('\n');
}
