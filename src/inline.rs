//! Recursive inlining of project headers into a single output.

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::config::Project;
use crate::directive::{Classifier, Directive};
use crate::files;
use crate::print;
use crate::util::Fallible;

/// Inlines project headers, depth-first, into a single output.
///
/// Every project file is inlined at its first include and every external include is kept
/// only at its first occurrence. Comments and project include guards are stripped.
/// The set of processed files lives in the instance and is reset for each run.
pub struct Inliner {
    root: PathBuf,
    guard: String,
    dependency_namespace: String,
    classifier: Classifier,
    processed: HashSet<String>,
}

impl Inliner {
    /// Creates an inliner resolving all files relative to `root`.
    pub fn new<P: Into<PathBuf>>(root: P, project: &Project) -> Fallible<Self> {
        Ok(Self {
            root: root.into(),
            guard: project.guard.clone(),
            dependency_namespace: project.dependency_namespace.trim_end_matches('/').to_string(),
            classifier: Classifier::new(project)?,
            processed: HashSet::new(),
        })
    }

    /// Writes the single header for `entry`, generated now.
    pub fn run<W: Write>(&mut self, entry: &str, license: &str, out: &mut W) -> Fallible {
        self.run_at(entry, license, &Utc::now(), out)
    }

    /// Writes the single header for `entry`, with the given generation time.
    pub fn run_at<W: Write>(
        &mut self,
        entry: &str,
        license: &str,
        timestamp: &DateTime<Utc>,
        out: &mut W,
    ) -> Fallible {
        self.processed.clear();

        print::print_header(out, license, timestamp, &self.guard)?;
        self.process(&path_clean::clean(entry), out)?;
        print::print_footer(out, &self.guard)?;
        out.flush()?;

        let dependencies = self
            .processed
            .iter()
            .filter(|id| self.is_dependency(id))
            .count();
        info!(
            "Inlined {} files, {} unique dependencies",
            self.processed.len() - dependencies,
            dependencies
        );

        Ok(())
    }

    /// Project files and virtual dependency names processed by the last run
    pub fn processed(&self) -> &HashSet<String> {
        &self.processed
    }

    fn process<W: Write>(&mut self, file_name: &str, out: &mut W) -> Fallible {
        if !self.processed.insert(file_name.to_owned()) {
            debug!("  Skipping {} (already inlined)", file_name);
            return Ok(());
        }

        info!("Processing {}", file_name);
        print::print_begin(out, file_name)?;

        let lines = files::read_lines(self.root.join(file_name))?;
        let mut last_blank = true;
        for line in &lines {
            match self.classifier.classify(line) {
                Directive::Comment | Directive::IncludeGuard => continue,
                Directive::ProjectInclude(path) => {
                    self.process(&path, out)?;
                    continue;
                }
                Directive::DependencyInclude(name) => {
                    let id = self.dependency_id(name);
                    if !self.processed.insert(id) {
                        continue;
                    }
                }
                Directive::Content => {}
            }

            let blank = line.trim().is_empty();
            if blank && last_blank {
                continue;
            }
            last_blank = blank;

            writeln!(out, "{}", line)?;
        }

        print::print_end(out, file_name)?;
        Ok(())
    }

    fn dependency_id(&self, name: &str) -> String {
        format!("{}/{}", self.dependency_namespace, name)
    }

    fn is_dependency(&self, id: &str) -> bool {
        id.strip_prefix(&self.dependency_namespace)
            .map_or(false, |rest| rest.starts_with('/'))
    }
}
