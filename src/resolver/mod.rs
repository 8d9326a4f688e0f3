//! Content-type resolver module
//!
//! Orchestrates compression-extension stripping, two-phase matching and
//! table lookup to produce a content-type mapping for one asset path.

use crate::logger;
use crate::matcher::{MatchProbe, PatternMatcher};
use crate::mime::{built_in_mappings, ContentTypeMapping};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

/// Extensions denoting a pre-compressed variant of an underlying asset.
/// Fixed policy, not configuration.
const COMPRESSED_EXTENSIONS: [&str; 2] = ["gz", "br"];

/// Resolution failure kinds.
///
/// An asset no pattern matches is not an error; `resolve` reports that as
/// `Ok(None)` and the caller picks the fallback.
#[derive(Debug)]
pub enum ResolveError {
    /// A custom pattern was rejected by the glob compiler
    InvalidPattern(globset::Error),
    /// A matched pattern is absent from both the built-in table and the
    /// custom index. The compiled matcher and the tables it was built from
    /// have fallen out of sync; the enclosing build step must abort.
    TableOutOfSync { pattern: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern(err) => write!(f, "invalid content-type pattern: {err}"),
            Self::TableOutOfSync { pattern } => write!(
                f,
                "matched pattern '{pattern}' has no mapping in the built-in or custom tables"
            ),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(err) => Some(err),
            Self::TableOutOfSync { .. } => None,
        }
    }
}

impl From<globset::Error> for ResolveError {
    fn from(err: globset::Error) -> Self {
        Self::InvalidPattern(err)
    }
}

/// Resolves content types for relative asset paths.
///
/// Construction compiles one matcher over the union of built-in and custom
/// pattern keys. All state is read-only afterwards, so a resolver can be
/// shared across threads as long as every concurrent call brings its own
/// [`MatchProbe`].
#[derive(Debug)]
pub struct ContentTypeResolver {
    custom_mappings: HashMap<String, ContentTypeMapping>,
    matcher: PatternMatcher,
}

impl ContentTypeResolver {
    /// Build a resolver from caller-declared overrides.
    ///
    /// Overrides are folded into an index keyed by pattern; a later entry
    /// with a duplicate pattern replaces the earlier one. Pattern syntax is
    /// validated by the matcher build, not here.
    pub fn new(overrides: &[ContentTypeMapping]) -> Result<Self, ResolveError> {
        let custom_mappings: HashMap<String, ContentTypeMapping> = overrides
            .iter()
            .fold(HashMap::with_capacity(overrides.len()), |mut index, mapping| {
                index.insert(mapping.pattern.clone(), mapping.clone());
                index
            });

        let built_in = built_in_mappings();
        let mut patterns: Vec<&str> = built_in.keys().copied().collect();
        let known: HashSet<&str> = patterns.iter().copied().collect();
        for pattern in custom_mappings.keys() {
            if !known.contains(pattern.as_str()) {
                patterns.push(pattern.as_str());
            }
        }

        let matcher = PatternMatcher::build(patterns)?;
        Ok(Self {
            custom_mappings,
            matcher,
        })
    }

    /// Resolve the content-type mapping for one relative asset path.
    ///
    /// Returns `Ok(None)` when nothing matches; the caller decides the
    /// fallback. The probe is reinitialized in place between the two match
    /// attempts, so concurrent callers need one probe each.
    ///
    /// # Examples
    /// ```
    /// use asset_mime::{ContentTypeResolver, MatchProbe};
    ///
    /// let resolver = ContentTypeResolver::new(&[]).unwrap();
    /// let mut probe = MatchProbe::new();
    /// let mapping = resolver.resolve(&mut probe, "wwwroot/js/app.js.gz").unwrap().unwrap();
    /// assert_eq!(mapping.mime_type, "text/javascript");
    /// assert_eq!(mapping.pattern, "*.js");
    /// ```
    pub fn resolve(
        &self,
        probe: &mut MatchProbe,
        relative_path: &str,
    ) -> Result<Option<ContentTypeMapping>, ResolveError> {
        let file_name = Path::new(relative_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("");

        let (candidate, has_compressed_extension) = strip_compressed_extension(file_name);

        probe.set_path(candidate);
        if let Some(mapping) = self.lookup_match(probe, relative_path)? {
            return Ok(Some(mapping));
        }

        if has_compressed_extension {
            // Nothing matched the stripped name; an explicit *.gz / *.br
            // pattern can still match the full one.
            probe.set_path(file_name);
            if let Some(mapping) = self.lookup_match(probe, relative_path)? {
                return Ok(Some(mapping));
            }
        }

        Ok(None)
    }

    /// Match one candidate and look the winning pattern up in the tables.
    ///
    /// The built-in table wins over a custom mapping declared with the same
    /// literal pattern string.
    fn lookup_match(
        &self,
        probe: &MatchProbe,
        relative_path: &str,
    ) -> Result<Option<ContentTypeMapping>, ResolveError> {
        let Some(pattern) = self.matcher.find_match(probe) else {
            return Ok(None);
        };

        let mapping = built_in_mappings()
            .get(pattern)
            .or_else(|| self.custom_mappings.get(pattern))
            .ok_or_else(|| ResolveError::TableOutOfSync {
                pattern: pattern.to_string(),
            })?;

        logger::log_resolution(relative_path, &mapping.mime_type, pattern);
        Ok(Some(mapping.clone()))
    }
}

/// Strip a single compressed extension from `file_name` when the remainder
/// still carries an inner extension.
///
/// `app.js.gz` yields `("app.js", true)`; `archive.gz` keeps the full name,
/// `("archive.gz", true)`, since the remainder has nothing left to match
/// against; anything else passes through unchanged with `false`.
fn strip_compressed_extension(file_name: &str) -> (&str, bool) {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str());
    let has_compressed_extension = extension.is_some_and(|ext| {
        COMPRESSED_EXTENSIONS
            .iter()
            .any(|compressed| ext.eq_ignore_ascii_case(compressed))
    });

    if has_compressed_extension {
        if let Some(stem) = Path::new(file_name).file_stem().and_then(|stem| stem.to_str()) {
            if Path::new(stem).extension().is_some() {
                return (stem, true);
            }
        }
    }

    (file_name, has_compressed_extension)
}
