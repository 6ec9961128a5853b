//! Config objects, to be read from Amalgam.toml

use crate::util::Fallible;
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use toml::from_str;

/// Top-level config
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Config {
    /// Config for the project layout and its include conventions
    #[serde(default)]
    pub project: Project,
    /// Config for paths
    #[serde(default)]
    pub paths: Paths,
}

impl Config {
    /// Reads and checks a config file
    pub fn read<P: AsRef<Path>>(path: P) -> Fallible<Self> {
        let buf = read_to_string(path)?;
        let val = from_str::<Self>(&buf)?;

        val.check()?;

        Ok(val)
    }

    /// Check the validity of the configuration
    pub fn check(&self) -> Fallible {
        self.project.check()?;
        self.paths.check()
    }
}

/// Config for the project layout and include conventions
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Project {
    /// Include prefix of project-local headers.
    pub namespace: String,
    /// Directory project-local headers are resolved in.
    pub project_dir: String,
    /// Prefix for the virtual names of external dependencies.
    pub dependency_namespace: String,
    /// Start of include guards to strip.
    pub guard_prefix: String,
    /// End of include guards to strip.
    pub guard_suffix: String,
    /// Include guard of the generated file.
    pub guard: String,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            namespace: "rest".to_string(),
            project_dir: "rest".to_string(),
            dependency_namespace: "dependency".to_string(),
            guard_prefix: "REST_".to_string(),
            guard_suffix: "HPP".to_string(),
            guard: "REST_SINGLE_INCLUDE_HPP".to_string(),
        }
    }
}

impl Project {
    fn check(&self) -> Fallible {
        for (name, value) in &[
            ("namespace", &self.namespace),
            ("project_dir", &self.project_dir),
            ("dependency_namespace", &self.dependency_namespace),
        ] {
            if value.trim().is_empty() {
                return Err(format!("Project parameter '{}' must not be empty", name).into());
            }
        }
        if !is_identifier(&self.guard) {
            return Err(format!(
                "Project parameter 'guard' must be a valid identifier, got \"{}\"",
                self.guard
            )
            .into());
        }
        Ok(())
    }
}

/// Config for paths
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Paths {
    /// Root directory. Default: current directory.
    pub root: Option<PathBuf>,
    /// The entry header, relative to the root.
    pub entry: String,
    /// License file.
    pub license: PathBuf,
    /// Output file.
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            root: None,
            entry: "rest.hpp".to_string(),
            license: PathBuf::from("LICENSE.txt"),
            output: PathBuf::from("single/rest.hpp"),
        }
    }
}

impl Paths {
    fn check(&self) -> Fallible {
        if self.entry.trim().is_empty() {
            return Err("Path parameter 'entry' must not be empty".into());
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
