//! Line classification for the preprocessor directives the amalgamator cares about.

use crate::config::Project;
use crate::util::Fallible;
use regex::Regex;

/// Start of a line comment
pub const COMMENT_START: &str = "//";

/// A classified source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Include of a project header, resolved to its normalized path
    ProjectInclude(String),
    /// Include of an external header, with the raw target name
    DependencyInclude(&'a str),
    /// `#ifndef`, `#define` or `#endif` of a project include guard
    IncludeGuard,
    /// Line comment
    Comment,
    /// Anything else
    Content,
}

/// Directive kinds that are checked, in the order they are checked.
/// Lines matching none of them are content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    ProjectInclude,
    DependencyInclude,
    IncludeGuard,
    Comment,
}

const PRECEDENCE: [Kind; 4] = [
    Kind::ProjectInclude,
    Kind::DependencyInclude,
    Kind::IncludeGuard,
    Kind::Comment,
];

/// Classifies source lines. Holds the patterns compiled from the project settings.
#[derive(Debug, Clone)]
pub struct Classifier {
    project_dir: String,
    project_include: Regex,
    dependency_include: Regex,
    include_guards: [Regex; 3],
}

impl Classifier {
    /// Compiles the patterns for the given project settings
    pub fn new(project: &Project) -> Fallible<Self> {
        let prefix = regex::escape(&project.guard_prefix);
        let suffix = regex::escape(&project.guard_suffix);
        let guard = |directive: &str| {
            Regex::new(&format!(r"^{} {}.*?{}", directive, prefix, suffix))
        };

        Ok(Self {
            project_dir: project.project_dir.trim_end_matches('/').to_string(),
            project_include: Regex::new(&format!(
                r"^#include <{}/(.*?)>",
                regex::escape(project.namespace.trim_end_matches('/'))
            ))?,
            dependency_include: Regex::new(r"^#include <(.*?)>")?,
            include_guards: [
                guard("#ifndef")?,
                guard("#define")?,
                guard("#endif //")?,
            ],
        })
    }

    /// Classifies a line. The first matching kind wins.
    pub fn classify<'a>(&self, line: &'a str) -> Directive<'a> {
        for kind in PRECEDENCE.iter() {
            let directive = match kind {
                Kind::ProjectInclude => self.project_include(line).map(Directive::ProjectInclude),
                Kind::DependencyInclude => self
                    .dependency_include(line)
                    .map(Directive::DependencyInclude),
                Kind::IncludeGuard if self.is_include_guard(line) => Some(Directive::IncludeGuard),
                Kind::Comment if is_comment(line) => Some(Directive::Comment),
                _ => None,
            };
            if let Some(directive) = directive {
                return directive;
            }
        }
        Directive::Content
    }

    /// Is the line an `#ifndef`, `#define` or `#endif` of a project include guard?
    pub fn is_include_guard(&self, line: &str) -> bool {
        self.include_guards.iter().any(|regex| regex.is_match(line))
    }

    /// Returns the path of an included project header, relative to the root
    pub fn project_include(&self, line: &str) -> Option<String> {
        self.project_include.captures(line).map(|caps| {
            path_clean::clean(&format!("{}/{}", self.project_dir, &caps[1]))
        })
    }

    /// Returns the target of any other `#include <...>`
    pub fn dependency_include<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.dependency_include
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|target| target.as_str())
    }
}

/// Does the line start with a line comment?
pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_START)
}
