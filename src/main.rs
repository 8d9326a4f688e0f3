//! Driver binary: walks the configured asset root, resolves a content type
//! for every asset, and writes the manifest.

use asset_mime::config::Config;
use asset_mime::manifest::{AssetManifest, ManifestEntry};
use asset_mime::{logger, ContentTypeResolver, MatchProbe, ResolveError};
use std::env;
use std::error::Error;
use std::path::Path;
use walkdir::WalkDir;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.get(1).is_some_and(|arg| arg == "--init") {
        let path = args.get(2).map_or("config.toml", String::as_str);
        Config::write_default(path)?;
        println!("Wrote starter configuration to {path}");
        return Ok(());
    }

    let config_path = args.get(1).map_or("config", String::as_str);
    let cfg = Config::load_from(config_path)?;
    logger::init(&cfg)?;

    let resolver = ContentTypeResolver::new(&cfg.custom_mappings())?;

    let root = Path::new(&cfg.assets.root);
    let asset_paths = if root.is_dir() {
        collect_assets(root)?
    } else {
        logger::log_warning(&format!(
            "Asset root '{}' not found or not a directory",
            cfg.assets.root
        ));
        Vec::new()
    };

    let manifest = build_manifest(&resolver, &cfg.output.fallback_content_type, &asset_paths)?;
    let unmatched = manifest
        .assets
        .iter()
        .filter(|entry| entry.pattern.is_none())
        .count();

    manifest.write_to(&cfg.output.manifest)?;
    logger::log_info(&format!(
        "Resolved {} assets under '{}' ({unmatched} fell back to {}); manifest written to {}",
        asset_paths.len(),
        cfg.assets.root,
        cfg.output.fallback_content_type,
        cfg.output.manifest
    ));

    Ok(())
}

/// File paths under `root`, relative, `/`-separated, sorted for a
/// deterministic manifest. Symlinks are not followed, so a link pointing back
/// into the tree cannot duplicate entries or recurse forever.
fn collect_assets(root: &Path) -> Result<Vec<String>, walkdir::Error> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            let segments: Vec<_> = relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect();
            paths.push(segments.join("/"));
        }
    }
    paths.sort();
    Ok(paths)
}

/// Resolve each asset path in order; unmatched assets get the fallback
/// content type and no pattern.
fn build_manifest(
    resolver: &ContentTypeResolver,
    fallback_content_type: &str,
    asset_paths: &[String],
) -> Result<AssetManifest, ResolveError> {
    let mut manifest = AssetManifest::new();
    let mut probe = MatchProbe::new();
    for path in asset_paths {
        let entry = match resolver.resolve(&mut probe, path)? {
            Some(mapping) => ManifestEntry {
                path: path.clone(),
                content_type: mapping.mime_type,
                pattern: Some(mapping.pattern),
            },
            None => ManifestEntry {
                path: path.clone(),
                content_type: fallback_content_type.to_string(),
                pattern: None,
            },
        };
        manifest.push(entry);
    }
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_asset(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"asset").unwrap();
    }

    #[test]
    fn test_collect_assets_relative_sorted_paths() {
        let temp = TempDir::new().unwrap();
        write_asset(temp.path(), "js/app.js");
        write_asset(temp.path(), "css/site.css");
        write_asset(temp.path(), "index.html");

        let paths = collect_assets(temp.path()).unwrap();
        assert_eq!(paths, vec!["css/site.css", "index.html", "js/app.js"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_assets_ignores_symlink_cycle() {
        let temp = TempDir::new().unwrap();
        write_asset(temp.path(), "css/site.css");
        // Link back to the root: each asset must still appear exactly once
        std::os::unix::fs::symlink(temp.path(), temp.path().join("loop")).unwrap();

        let paths = collect_assets(temp.path()).unwrap();
        assert_eq!(paths, vec!["css/site.css"]);
    }

    #[test]
    fn test_build_manifest_resolves_and_falls_back() {
        let resolver = ContentTypeResolver::new(&[]).unwrap();
        let asset_paths = vec![
            "Makefile".to_string(),
            "css/site.css".to_string(),
            "js/app.js.gz".to_string(),
        ];

        let manifest =
            build_manifest(&resolver, "application/octet-stream", &asset_paths).unwrap();

        assert_eq!(manifest.assets.len(), 3);
        // Input order is preserved
        assert_eq!(manifest.assets[0].path, "Makefile");
        assert_eq!(manifest.assets[0].content_type, "application/octet-stream");
        assert_eq!(manifest.assets[0].pattern, None);
        assert_eq!(manifest.assets[1].content_type, "text/css");
        assert_eq!(manifest.assets[1].pattern.as_deref(), Some("*.css"));
        assert_eq!(manifest.assets[2].content_type, "text/javascript");
        assert_eq!(manifest.assets[2].pattern.as_deref(), Some("*.js"));
    }

    #[test]
    fn test_walk_then_build_manifest_end_to_end() {
        let temp = TempDir::new().unwrap();
        write_asset(temp.path(), "js/app.js.gz");
        write_asset(temp.path(), "Makefile");
        write_asset(temp.path(), "css/site.css");

        let paths = collect_assets(temp.path()).unwrap();
        assert_eq!(paths, vec!["Makefile", "css/site.css", "js/app.js.gz"]);

        let resolver = ContentTypeResolver::new(&[]).unwrap();
        let manifest = build_manifest(&resolver, "application/octet-stream", &paths).unwrap();
        let summary: Vec<_> = manifest
            .assets
            .iter()
            .map(|entry| (entry.path.as_str(), entry.content_type.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Makefile", "application/octet-stream"),
                ("css/site.css", "text/css"),
                ("js/app.js.gz", "text/javascript"),
            ]
        );
    }
}
