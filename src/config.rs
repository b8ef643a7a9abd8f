//! Scan rule configuration: literals, exclusion phrases, and the exclusion
//! policy entries. Loaded from a YAML file or supplied by the built-in
//! defaults; the core modules only ever see the resulting values.

use crate::error::{Result, ScanError};
use crate::exclude::ExclusionRules;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Marker substrings to detect, tested in order.
    pub literals: Vec<String>,
    /// Phrases whose presence on a line suppresses all of its matches.
    pub exclude_phrases: Vec<String>,
    pub exclude: ExclusionRules,
}

impl ScanConfig {
    /// Load a config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ScanError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| ScanError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Built-in rule set: SAS step-boundary keyword fragments with the
    /// documentation phrases known to false-positive on them, and the
    /// non-source extensions worth skipping outright.
    pub fn default_rules() -> Self {
        Self {
            literals: vec![
                "proc ".to_string(),
                "data ".to_string(),
                "filename ".to_string(),
                "libname ".to_string(),
            ],
            exclude_phrases: [
                "loads data from",
                "updates data from",
                "in a data set",
                "for sca proc code execution",
                " data into",
                "in proc python the",
                " using proc ",
                "a data flow",
                "data set options are",
                "data set contains",
                "rows in the data set",
                "data sets only",
                "one or more SAS data",
                "array of SAS data",
                "requires a proc contents",
                "as data step",
                "generates data flow",
                " data action",
                "data flow step",
                "data step in CAS utility",
                "operations in a data flow",
                " proc casutil utility ",
                "set as data set options",
                "different data providers",
                "data flow service uses",
                "(data view)",
                "is data step",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            exclude: ExclusionRules {
                file_patterns: vec![],
                extensions: [".txt", ".md", ".json", ".yaml", ".exe"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                directories: vec![],
            },
        }
    }
}
