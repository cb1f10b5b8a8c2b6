use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamingMode {
    Timestamp,
    Increment,
    Overwrite,
}
impl NamingMode {
    /// Parses a mode name. Unrecognized values fall back to `Timestamp`,
    /// matching the documented config behavior.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "increment" => NamingMode::Increment,
            "overwrite" => NamingMode::Overwrite,
            _ => NamingMode::Timestamp,
        }
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingMode::Timestamp => "timestamp",
            NamingMode::Increment => "increment",
            NamingMode::Overwrite => "overwrite",
        }
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapfoldOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub format: String,
    pub ignore: Vec<String>,
    pub max_file_size: u64,
    pub only_formats: Vec<String>,
    pub enable_only_formats: bool,
    pub include_tree: bool,
    pub naming_mode: NamingMode,
}
impl Default for SnapfoldOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("SnapFold.md"),
            format: "md".to_string(),
            ignore: vec!["node_modules".to_string(), ".git".to_string()],
            max_file_size: 2 * 1024 * 1024,
            only_formats: vec!["html".to_string(), "css".to_string(), "js".to_string()],
            enable_only_formats: false,
            include_tree: true,
            naming_mode: NamingMode::Increment,
        }
    }
}
#[derive(Debug, Default)]
pub struct SnapfoldBuilder {
    options: SnapfoldOptions,
}
impl SnapfoldBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SnapfoldOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn format(mut self, tag: impl Into<String>) -> Self {
        self.options.format = tag.into();
        self
    }
    pub fn ignore(mut self, names: Vec<String>) -> Self {
        self.options.ignore = names;
        self
    }
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.options.max_file_size = bytes;
        self
    }
    pub fn only_formats(mut self, extensions: Vec<String>) -> Self {
        self.options.only_formats = extensions;
        self
    }
    pub fn enable_only_formats(mut self, yes: bool) -> Self {
        self.options.enable_only_formats = yes;
        self
    }
    pub fn include_tree(mut self, yes: bool) -> Self {
        self.options.include_tree = yes;
        self
    }
    pub fn naming_mode(mut self, mode: NamingMode) -> Self {
        self.options.naming_mode = mode;
        self
    }
    pub fn build(self) -> SnapfoldOptions {
        self.options
    }
}
