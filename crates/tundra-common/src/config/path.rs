//! Path helpers for configuration files.

use std::path::Path;

/// Check if a path has a YAML extension.
pub fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yaml_file() {
        assert!(is_yaml_file(Path::new("build.yaml")));
        assert!(is_yaml_file(Path::new("build.yml")));
        assert!(!is_yaml_file(Path::new("build.json")));
        assert!(!is_yaml_file(Path::new("Dockerfile")));
    }
}
