use std::env;
use std::path::PathBuf;

/// Location of the built single-page frontend served for non-API routes.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub dist_dir: PathBuf,
}

impl FrontendConfig {
    /// Environment variables:
    /// - FRONTEND_DIST: Directory containing `index.html` (default: "frontend/dist")
    pub fn from_env() -> Self {
        let dist_dir = env::var("FRONTEND_DIST").unwrap_or_else(|_| "frontend/dist".to_string());
        Self {
            dist_dir: PathBuf::from(dist_dir),
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_index_inside_dist_dir() {
        let config = FrontendConfig {
            dist_dir: PathBuf::from("/srv/app/dist"),
        };

        assert_eq!(config.index_file(), PathBuf::from("/srv/app/dist/index.html"));
    }
}
