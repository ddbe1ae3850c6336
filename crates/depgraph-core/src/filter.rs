//! Inclusion/exclusion predicates over dependency nodes.
//!
//! Patterns have the form `group[:artifact[:type[:classifier]]]`. Every
//! segment is a glob; segments left off at the end match anything. A node
//! without classifier is matched as if its classifier were empty.

use globset::{GlobBuilder, GlobMatcher};

use depgraph_util::errors::DepgraphError;

use crate::node::DependencyNode;
use crate::scope::Scope;

const MAX_SEGMENTS: usize = 4;

/// A single compiled `group:artifact:type:classifier` pattern.
#[derive(Debug, Clone)]
pub struct ArtifactPattern {
    segments: Vec<GlobMatcher>,
}

impl ArtifactPattern {
    /// Compile a pattern, rejecting anything that is not a well-formed
    /// pattern instead of silently matching everything or nothing.
    pub fn parse(pattern: &str) -> Result<Self, DepgraphError> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(DepgraphError::config("Empty artifact pattern"));
        }

        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() > MAX_SEGMENTS {
            return Err(DepgraphError::config(format!(
                "Invalid artifact pattern '{trimmed}': expected at most {MAX_SEGMENTS} segments (group:artifact:type:classifier)"
            )));
        }

        let mut segments = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                return Err(DepgraphError::config(format!(
                    "Invalid artifact pattern '{trimmed}': segment {} is empty, use '*' to match anything",
                    i + 1
                )));
            }
            let glob = GlobBuilder::new(part)
                .literal_separator(false)
                .build()
                .map_err(|e| {
                    DepgraphError::config(format!("Invalid artifact pattern '{trimmed}': {e}"))
                })?;
            segments.push(glob.compile_matcher());
        }

        Ok(Self { segments })
    }

    pub fn matches(&self, node: &DependencyNode) -> bool {
        let coord = node.coordinate();
        let fields = [
            coord.group_id.as_str(),
            coord.artifact_id.as_str(),
            coord.artifact_type.as_str(),
            coord.classifier().unwrap_or(""),
        ];
        self.segments
            .iter()
            .zip(fields)
            .all(|(segment, field)| segment.is_match(field))
    }
}

/// A list of patterns; matches when any of them does.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<ArtifactPattern>,
}

impl PatternSet {
    pub fn parse<S: AsRef<str>>(patterns: &[S]) -> Result<Self, DepgraphError> {
        let patterns = patterns
            .iter()
            .map(|p| ArtifactPattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, node: &DependencyNode) -> bool {
        self.patterns.iter().any(|p| p.matches(node))
    }
}

/// One predicate of a [`FilterChain`].
#[derive(Debug, Clone)]
pub enum ArtifactFilter {
    /// Keep nodes whose scope is pulled in by a resolution in this scope.
    Scope(Scope),
    /// Keep nodes matching at least one pattern.
    Includes(PatternSet),
    /// Drop nodes matching any pattern.
    Excludes(PatternSet),
}

impl ArtifactFilter {
    pub fn include(&self, node: &DependencyNode) -> bool {
        match self {
            ArtifactFilter::Scope(scope) => scope.includes(node.effective_scope()),
            ArtifactFilter::Includes(patterns) => patterns.matches(node),
            ArtifactFilter::Excludes(patterns) => !patterns.matches(node),
        }
    }
}

/// Filters combined with logical AND. An empty chain includes everything.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    filters: Vec<ArtifactFilter>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: ArtifactFilter) {
        self.filters.push(filter);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn include(&self, node: &DependencyNode) -> bool {
        self.filters.iter().all(|f| f.include(node))
    }

    /// Scope, include and exclude filters applied to every node of the tree.
    ///
    /// An absent or empty scope means all scopes.
    pub fn global<S: AsRef<str>>(
        scope: Option<&str>,
        includes: &[S],
        excludes: &[S],
    ) -> Result<Self, DepgraphError> {
        let mut chain = Self::new();
        if let Some(scope) = scope.filter(|s| !s.trim().is_empty()) {
            chain.push(ArtifactFilter::Scope(scope.parse()?));
        }
        chain.push_patterns(includes, excludes)?;
        Ok(chain)
    }

    /// Include and exclude filters for transitive dependencies only.
    pub fn transitive<S: AsRef<str>>(includes: &[S], excludes: &[S]) -> Result<Self, DepgraphError> {
        let mut chain = Self::new();
        chain.push_patterns(includes, excludes)?;
        Ok(chain)
    }

    /// Patterns selecting the target nodes of reachability pruning.
    pub fn target<S: AsRef<str>>(includes: &[S]) -> Result<Self, DepgraphError> {
        let mut chain = Self::new();
        let patterns = PatternSet::parse(includes)?;
        if !patterns.is_empty() {
            chain.push(ArtifactFilter::Includes(patterns));
        }
        Ok(chain)
    }

    fn push_patterns<S: AsRef<str>>(&mut self, includes: &[S], excludes: &[S]) -> Result<(), DepgraphError> {
        let includes = PatternSet::parse(includes)?;
        if !includes.is_empty() {
            self.push(ArtifactFilter::Includes(includes));
        }
        let excludes = PatternSet::parse(excludes)?;
        if !excludes.is_empty() {
            self.push(ArtifactFilter::Excludes(excludes));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::node::ResolutionContext;

    fn node(group: &str, artifact: &str, scope: Scope) -> DependencyNode {
        DependencyNode::resolved(
            Coordinate::new(group, artifact, "1.0"),
            Some(scope),
            false,
            &ResolutionContext::default(),
        )
    }

    fn classified(classifier: &str) -> DependencyNode {
        DependencyNode::resolved(
            Coordinate::new("org.example", "lib", "1.0").with_classifier(classifier),
            None,
            false,
            &ResolutionContext::default(),
        )
    }

    #[test]
    fn empty_chain_includes_everything() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert!(chain.include(&node("a", "b", Scope::Test)));
    }

    #[test]
    fn runtime_scope_filter() {
        let chain = FilterChain::global::<&str>(Some("runtime"), &[], &[]).unwrap();
        assert!(chain.include(&node("g", "a", Scope::Compile)));
        assert!(chain.include(&node("g", "a", Scope::Runtime)));
        assert!(!chain.include(&node("g", "a", Scope::Provided)));
        assert!(!chain.include(&node("g", "a", Scope::Test)));
    }

    #[test]
    fn blank_scope_means_all_scopes() {
        let chain = FilterChain::global::<&str>(Some(""), &[], &[]).unwrap();
        assert!(chain.is_empty());
    }

    #[test]
    fn unknown_scope_fails() {
        assert!(FilterChain::global::<&str>(Some("everything"), &[], &[]).is_err());
    }

    #[test]
    fn include_patterns_with_wildcards() {
        let chain = FilterChain::global(None, &["org.apache.*", "com.example:core"], &[]).unwrap();
        assert!(chain.include(&node("org.apache.commons", "commons-lang3", Scope::Compile)));
        assert!(chain.include(&node("com.example", "core", Scope::Compile)));
        assert!(!chain.include(&node("com.example", "api", Scope::Compile)));
        assert!(!chain.include(&node("io.netty", "netty", Scope::Compile)));
    }

    #[test]
    fn exclude_patterns() {
        let chain = FilterChain::global(None, &[], &["*:*-test*"]).unwrap();
        assert!(!chain.include(&node("g", "lib-testkit", Scope::Compile)));
        assert!(chain.include(&node("g", "lib", Scope::Compile)));
    }

    #[test]
    fn includes_and_excludes_combine_with_and() {
        let chain = FilterChain::global(Some("compile"), &["org.*"], &["org.legacy"]).unwrap();
        assert!(chain.include(&node("org.modern", "a", Scope::Compile)));
        assert!(!chain.include(&node("org.legacy", "a", Scope::Compile)));
        assert!(!chain.include(&node("org.modern", "a", Scope::Test)));
    }

    #[test]
    fn classifier_segment() {
        let pattern = ArtifactPattern::parse("org.example:lib:jar:sources").unwrap();
        assert!(pattern.matches(&classified("sources")));
        assert!(!pattern.matches(&classified("javadoc")));
        assert!(!pattern.matches(&classified("")));

        let any = ArtifactPattern::parse("org.example:lib:jar:*").unwrap();
        assert!(any.matches(&classified("")));
    }

    #[test]
    fn malformed_patterns_fail_fast() {
        for bad in ["", "  ", "a:b:c:d:e", "g::jar", "g:[abc"] {
            let err = ArtifactPattern::parse(bad).unwrap_err();
            assert!(
                err.to_string().starts_with("Configuration error"),
                "pattern {bad:?} gave {err}"
            );
        }
        assert!(FilterChain::transitive(&["ok:*"], &["bad::x"]).is_err());
    }

    #[test]
    fn target_chain_empty_without_patterns() {
        assert!(FilterChain::target::<&str>(&[]).unwrap().is_empty());
        assert!(!FilterChain::target(&["g:a"]).unwrap().is_empty());
    }
}
