//! Configuration loading and validation for the entrypoint.
//!
//! Runtime settings come from `ENTRYPOINT_*` environment variables. The three
//! rendered values (`FUM_BASEURL` and friends) are not settings; they are read
//! separately by [`common::load_environment`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::launch::ServerCommand;

/// Prefix shared by every settings variable.
const ENV_PREFIX: &str = "ENTRYPOINT";

/// Where nginx expects its configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Template at `/root/default.conf.tmpl`, rendered to `conf.d/default.conf`.
    #[default]
    ConfD,
    /// Template at `/etc/nginx/nginx.conf.tmpl`, rendered to the main `nginx.conf`.
    Main,
}

impl Layout {
    fn template_path(self) -> &'static str {
        match self {
            Layout::ConfD => "/root/default.conf.tmpl",
            Layout::Main => "/etc/nginx/nginx.conf.tmpl",
        }
    }

    fn server_config_path(self) -> &'static str {
        match self {
            Layout::ConfD => "/etc/nginx/conf.d/default.conf",
            Layout::Main => "/etc/nginx/nginx.conf",
        }
    }
}

/// Validated entrypoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path layout preset.
    #[serde(default)]
    pub layout: Layout,

    /// Overrides the layout's template path.
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    /// Overrides the layout's rendered server config path.
    #[serde(default)]
    pub server_config_path: Option<PathBuf>,

    /// Where `config.json` is written for the frontend to fetch.
    #[serde(default = "default_frontend_config_path")]
    pub frontend_config_path: PathBuf,

    /// Server program, resolved through `PATH`.
    #[serde(default = "default_server_executable")]
    pub server_executable: String,

    /// Global directives passed to the server with `-g`.
    #[serde(default = "default_server_directives")]
    pub server_directives: String,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_frontend_config_path() -> PathBuf {
    "/usr/share/nginx/html/config.json".into()
}
fn default_server_executable() -> String {
    "nginx".into()
}
fn default_server_directives() -> String {
    "daemon off;".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_source(source: config::Environment) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(source)
            .build()
            .context("failed to build entrypoint configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise entrypoint configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        ensure_non_empty_path(self.template_path(), "ENTRYPOINT_TEMPLATE_PATH")?;
        ensure_non_empty_path(self.server_config_path(), "ENTRYPOINT_SERVER_CONFIG_PATH")?;
        ensure_non_empty_path(&self.frontend_config_path, "ENTRYPOINT_FRONTEND_CONFIG_PATH")?;

        if self.server_executable.trim().is_empty() {
            anyhow::bail!("ENTRYPOINT_SERVER_EXECUTABLE must not be empty");
        }
        // nginx must stay in the foreground for the supervisor to track it.
        if !self.server_directives.contains("daemon off;") {
            anyhow::bail!("ENTRYPOINT_SERVER_DIRECTIVES must contain `daemon off;`");
        }
        if self.template_path() == self.server_config_path() {
            anyhow::bail!("template and rendered server config must be different files");
        }
        Ok(())
    }

    /// Effective template path.
    pub fn template_path(&self) -> &Path {
        self.template_path
            .as_deref()
            .unwrap_or_else(|| Path::new(self.layout.template_path()))
    }

    /// Effective rendered server config path.
    pub fn server_config_path(&self) -> &Path {
        self.server_config_path
            .as_deref()
            .unwrap_or_else(|| Path::new(self.layout.server_config_path()))
    }

    /// Command that starts the server in the foreground.
    pub fn server_command(&self) -> ServerCommand {
        ServerCommand::new(
            self.server_executable.clone(),
            vec!["-g".into(), self.server_directives.clone()],
        )
    }
}

fn ensure_non_empty_path(value: &Path, name: &str) -> Result<()> {
    if value.as_os_str().is_empty() {
        anyhow::bail!("{name} must not be empty");
    }
    Ok(())
}
