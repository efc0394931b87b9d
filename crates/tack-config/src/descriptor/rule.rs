//! File-pattern rules and the mutually exclusive rule group.

use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::transform::Transform;

/// Regular expression matched against forward-slash module paths.
///
/// Equality and serialization use the pattern source.
#[derive(Clone)]
pub struct PathPattern {
    source: String,
    regex: Regex,
}

impl PathPattern {
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&source)?;
        Ok(Self { source, regex })
    }

    /// Pattern that matches `literal` anywhere in a path.
    pub fn literal(literal: &str) -> Self {
        let source = regex::escape(literal);
        let regex = Regex::new(&source).expect("escaped literal is a valid pattern");
        Self { source, regex }
    }

    /// Built-in patterns known to be valid.
    pub(crate) fn builtin(source: &str) -> Self {
        Self::new(source).expect("built-in rule pattern is valid")
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathPattern").field(&self.source).finish()
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PathPattern {}

impl Serialize for PathPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for PathPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Self::new(source).map_err(serde::de::Error::custom)
    }
}

/// Path filter used by `include` / `exclude`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathPredicate {
    /// Path matches a regular expression
    Pattern { pattern: PathPattern },

    /// Path lies inside `node_modules`, unless the package name starts with
    /// one of `except` (packages that publish untranspiled sources)
    Dependency { except: Vec<String> },
}

impl PathPredicate {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Pattern { pattern } => pattern.is_match(path),
            Self::Dependency { except } => {
                const MARKER: &str = "node_modules/";
                path.match_indices(MARKER).any(|(idx, _)| {
                    let package = &path[idx + MARKER.len()..];
                    !except.iter().any(|name| package.starts_with(name.as_str()))
                })
            }
        }
    }
}

/// Which rule of the group this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Application scripts and source-shipping dependencies
    AppScript,
    /// All other scripts (pre-built dependencies)
    VendorScript,
    /// Styles under the design-system directory
    DesignSystemStyle,
    /// All other styles
    Style,
    /// Raster and vector images
    Image,
    /// Web fonts
    Font,
}

impl RuleKind {
    pub const ALL: [RuleKind; 6] = [
        RuleKind::AppScript,
        RuleKind::VendorScript,
        RuleKind::DesignSystemStyle,
        RuleKind::Style,
        RuleKind::Image,
        RuleKind::Font,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AppScript => "app_script",
            Self::VendorScript => "vendor_script",
            Self::DesignSystemStyle => "design_system_style",
            Self::Style => "style",
            Self::Image => "image",
            Self::Font => "font",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file pattern paired with the ordered transform chain applied to matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub kind: RuleKind,

    pub test: PathPattern,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<PathPredicate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<PathPredicate>,

    /// Transforms in application order
    #[serde(rename = "use")]
    pub chain: Vec<Transform>,
}

impl Rule {
    pub fn new(kind: RuleKind, test: PathPattern, chain: Vec<Transform>) -> Self {
        Self {
            kind,
            test,
            include: None,
            exclude: None,
            chain,
        }
    }

    pub fn include(mut self, predicate: PathPredicate) -> Self {
        self.include = Some(predicate);
        self
    }

    pub fn exclude(mut self, predicate: PathPredicate) -> Self {
        self.exclude = Some(predicate);
        self
    }

    /// Test, include and exclude checks against a normalized path.
    pub fn matches(&self, path: &str) -> bool {
        self.test.is_match(path)
            && self.include.as_ref().is_none_or(|p| p.matches(path))
            && !self.exclude.as_ref().is_some_and(|p| p.matches(path))
    }
}

/// Mutually exclusive rules; the first match wins
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(rename = "oneOf")]
    pub one_of: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { one_of: rules }
    }

    /// First rule that applies to `path`, if any.
    pub fn find(&self, path: impl AsRef<Path>) -> Option<&Rule> {
        let normalized = normalize(path.as_ref());
        let found = self.one_of.iter().find(|rule| rule.matches(&normalized));
        tracing::debug!(
            path = %normalized,
            rule = found.map(|r| r.kind.as_str()).unwrap_or("none"),
            "matched rule"
        );
        found
    }

    pub fn get(&self, kind: RuleKind) -> Option<&Rule> {
        self.one_of.iter().find(|rule| rule.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.one_of.iter()
    }

    pub fn len(&self) -> usize {
        self.one_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.one_of.is_empty()
    }
}

/// Forward-slash form of a path, as rule patterns expect.
pub(crate) fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dependency() -> PathPredicate {
        PathPredicate::Dependency {
            except: vec!["domestique".into(), "ctrly".into()],
        }
    }

    #[test]
    fn dependency_predicate_skips_source_packages() {
        let dep = dependency();
        assert!(dep.matches("node_modules/lodash/index.js"));
        assert!(!dep.matches("node_modules/ctrly/src/index.js"));
        assert!(!dep.matches("node_modules/domestique/index.js"));
        assert!(!dep.matches("assets/main/index.js"));
    }

    #[test]
    fn dependency_predicate_checks_nested_node_modules() {
        let dep = dependency();
        assert!(dep.matches("node_modules/ctrly/node_modules/lodash/a.js"));
    }

    #[test]
    fn first_match_wins() {
        let set = RuleSet::new(vec![
            Rule::new(RuleKind::AppScript, PathPattern::builtin(r"\.js$"), vec![])
                .exclude(dependency()),
            Rule::new(RuleKind::VendorScript, PathPattern::builtin(r"\.js$"), vec![]),
        ]);
        assert_eq!(set.find("assets/a.js").unwrap().kind, RuleKind::AppScript);
        assert_eq!(
            set.find("node_modules/x/a.js").unwrap().kind,
            RuleKind::VendorScript
        );
        assert!(set.find("a.css").is_none());
    }

    #[test]
    fn windows_separators_are_normalized() {
        let set = RuleSet::new(vec![
            Rule::new(RuleKind::Style, PathPattern::builtin(r"\.css$"), vec![])
                .include(PathPredicate::Pattern {
                    pattern: PathPattern::literal("assets/tailwind"),
                }),
        ]);
        assert!(set.find(Path::new(r"assets\tailwind\index.css")).is_some());
    }

    #[test]
    fn pattern_round_trips_through_json() {
        let pattern = PathPattern::new(r"\.(js|mjs)$").unwrap();
        let json = serde_json::to_string(&pattern).unwrap();
        let back: PathPattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
        assert!(back.is_match("a.mjs"));
    }

    #[test]
    fn invalid_pattern_fails_to_deserialize() {
        let result: Result<PathPattern, _> = serde_json::from_str("\"(unclosed\"");
        assert!(result.is_err());
    }
}
