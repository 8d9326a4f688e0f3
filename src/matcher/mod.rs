//! Pattern matching module
//!
//! Thin seam over the `globset` crate: compiles a fixed set of glob patterns
//! once and answers which pattern wins for a candidate file name.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Transient per-call match context wrapping the candidate path.
///
/// A probe is reinitialized in place between the two match attempts for a
/// single asset and must not be shared across concurrent resolutions.
#[derive(Debug, Default)]
pub struct MatchProbe {
    path: String,
}

impl MatchProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reinitialize the probe with a new candidate path, reusing the buffer
    pub fn set_path(&mut self, path: &str) {
        self.path.clear();
        self.path.push_str(path);
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Compiled matcher over a fixed set of glob patterns
#[derive(Debug)]
pub struct PatternMatcher {
    set: GlobSet,
    patterns: Vec<String>,
}

impl PatternMatcher {
    /// Compile a matcher from pattern strings.
    ///
    /// Matching is case-insensitive: the built-in table carries mixed-case
    /// patterns (`*.IVF`) and asset names are matched as written on disk.
    pub fn build<I, S>(patterns: I) -> Result<Self, globset::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder.add(GlobBuilder::new(pattern).case_insensitive(true).build()?);
            compiled.push(pattern.to_string());
        }
        Ok(Self {
            set: builder.build()?,
            patterns: compiled,
        })
    }

    /// Match the probe's path against the compiled set, returning the winning
    /// pattern if any.
    ///
    /// When several patterns match, the longest pattern string wins (most
    /// specific for the `*.<ext>` shape this crate works with).
    pub fn find_match(&self, probe: &MatchProbe) -> Option<&str> {
        self.set
            .matches(probe.path())
            .into_iter()
            .map(|index| self.patterns[index].as_str())
            .max_by_key(|pattern| pattern.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_extension_match() {
        let matcher = PatternMatcher::build(["*.js", "*.css"]).unwrap();
        let mut probe = MatchProbe::new();
        probe.set_path("app.js");
        assert_eq!(matcher.find_match(&probe), Some("*.js"));
        probe.set_path("site.css");
        assert_eq!(matcher.find_match(&probe), Some("*.css"));
        probe.set_path("README");
        assert_eq!(matcher.find_match(&probe), None);
    }

    #[test]
    fn test_probe_reuse_between_attempts() {
        let matcher = PatternMatcher::build(["*.gz"]).unwrap();
        let mut probe = MatchProbe::new();
        probe.set_path("app.js");
        assert_eq!(matcher.find_match(&probe), None);
        // Same probe, reinitialized in place for the second attempt
        probe.set_path("app.js.gz");
        assert_eq!(matcher.find_match(&probe), Some("*.gz"));
    }

    #[test]
    fn test_longest_pattern_wins() {
        let matcher = PatternMatcher::build(["*.gz", "*.tar.gz"]).unwrap();
        let mut probe = MatchProbe::new();
        probe.set_path("release.tar.gz");
        assert_eq!(matcher.find_match(&probe), Some("*.tar.gz"));
        probe.set_path("blob.gz");
        assert_eq!(matcher.find_match(&probe), Some("*.gz"));
    }

    #[test]
    fn test_case_insensitive_match() {
        let matcher = PatternMatcher::build(["*.IVF", "*.png"]).unwrap();
        let mut probe = MatchProbe::new();
        probe.set_path("clip.ivf");
        assert_eq!(matcher.find_match(&probe), Some("*.IVF"));
        probe.set_path("LOGO.PNG");
        assert_eq!(matcher.find_match(&probe), Some("*.png"));
    }

    #[test]
    fn test_invalid_pattern_rejected_at_build() {
        assert!(PatternMatcher::build(["*.[js"]).is_err());
    }
}
