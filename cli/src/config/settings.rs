//! Workflow configuration settings.

use serde::Deserialize;

/// Main configuration for review.
///
/// Every field has a default, so an empty or missing file reproduces the
/// stock Gerrit workflow against `origin/master`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Shared trunk that feature branches start from and upload to.
    pub mainline: String,
    /// Remote holding the mainline and the review server's upload refs.
    pub remote: String,
    /// Program invoked for every git call.
    pub git: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            mainline: "master".to_string(),
            remote: "origin".to_string(),
            git: "git".to_string(),
        }
    }
}

impl ReviewConfig {
    /// Refspec pushed by `upload`, e.g. `HEAD:refs/for/master`.
    #[must_use]
    pub fn upload_refspec(&self) -> String {
        format!("HEAD:refs/for/{}", self.mainline)
    }

    /// Branch that `sync` rebases feature commits onto, e.g. `origin/master`.
    #[must_use]
    pub fn upstream(&self) -> String {
        format!("{}/{}", self.remote, self.mainline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_origin_master() {
        let config = ReviewConfig::default();
        assert_eq!(config.mainline, "master");
        assert_eq!(config.remote, "origin");
        assert_eq!(config.git, "git");
    }

    #[test]
    fn derived_refs() {
        let config = ReviewConfig::default();
        assert_eq!(config.upload_refspec(), "HEAD:refs/for/master");
        assert_eq!(config.upstream(), "origin/master");

        let custom = ReviewConfig {
            mainline: "main".to_string(),
            remote: "upstream".to_string(),
            ..ReviewConfig::default()
        };
        assert_eq!(custom.upload_refspec(), "HEAD:refs/for/main");
        assert_eq!(custom.upstream(), "upstream/main");
    }
}
