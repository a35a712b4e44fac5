//! Configuration structures for git-publisher
//!
//! The publishing target is fixed: there is no config file and no override
//! from the command line or environment. The values still live in a named
//! structure so control flow never embeds literals.

use crate::core::error::PublishError;
use serde::Serialize;
use std::path::PathBuf;

/// Repository the changes are published from
const WORKING_DIR: &str = "/srv/demo-portal";

/// Remote to push to
const REMOTE: &str = "origin";

/// Branch to push to
const BRANCH: &str = "main";

/// Message recorded for every published commit
const COMMIT_MESSAGE: &str = "CRITICAL: Fix authentication redirect loop on login

- Restore session cookie handling after sign-in
- Redirect authenticated users straight to the dashboard
- Keep the demo account usable for manual verification";

/// Page to check once the hosting provider has rebuilt
const TARGET_URL: &str = "https://demo-portal.vercel.app/login";

/// How long the hosting provider usually takes to rebuild after a push
const REBUILD_ESTIMATE: &str = "2-3 minutes";

const DEMO_USERNAME: &str = "demo@example.com";
const DEMO_PASSWORD: &str = "demo1234";

/// Root configuration object
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublisherConfig {
    /// Working tree the git commands run in
    pub working_dir: PathBuf,

    /// Multi-line commit message
    pub commit_message: String,

    /// Remote name (e.g. "origin")
    pub remote: String,

    /// Branch name (e.g. "main")
    pub branch: String,

    /// URL for the manual follow-up check
    pub target_url: String,

    /// Account printed in the follow-up instructions
    pub demo_credentials: DemoCredentials,

    /// Human-readable rebuild delay
    pub rebuild_estimate: String,
}

/// Demonstration account shown to the user after a successful publish.
///
/// These are published demo values, not secrets.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DemoCredentials {
    pub username: String,
    pub password: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from(WORKING_DIR),
            commit_message: COMMIT_MESSAGE.to_string(),
            remote: REMOTE.to_string(),
            branch: BRANCH.to_string(),
            target_url: TARGET_URL.to_string(),
            demo_credentials: DemoCredentials {
                username: DEMO_USERNAME.to_string(),
                password: DEMO_PASSWORD.to_string(),
            },
            rebuild_estimate: REBUILD_ESTIMATE.to_string(),
        }
    }
}

impl PublisherConfig {
    /// First line of the commit message
    pub fn commit_subject(&self) -> &str {
        self.commit_message.lines().next().unwrap_or_default()
    }

    /// `remote/branch`, as shown in progress lines
    pub fn target_ref(&self) -> String {
        format!("{}/{}", self.remote, self.branch)
    }

    /// Check the configuration before any command runs
    pub fn validate(&self) -> Result<(), PublishError> {
        if !self.working_dir.is_absolute() {
            return Err(PublishError::InvalidConfig {
                field: "workingDir".to_string(),
                message: format!("must be an absolute path, got {}", self.working_dir.display()),
            });
        }

        let required = [
            ("commitMessage", &self.commit_message),
            ("remote", &self.remote),
            ("branch", &self.branch),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PublishError::InvalidConfig {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String, PublishError> {
        serde_yaml::to_string(self).map_err(|e| PublishError::InvalidConfig {
            field: "<root>".to_string(),
            message: e.to_string(),
        })
    }
}
