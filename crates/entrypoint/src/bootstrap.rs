//! The startup sequence.
//!
//! All inputs are read and both documents rendered before anything touches
//! the filesystem, so a configuration or template error leaves no output
//! behind. Launch is always the final step.

use std::convert::Infallible;

use common::{render_frontend_config, render_server_config, EntrypointError, EnvironmentSnapshot};

use crate::{
    config::Config,
    files::{read_template, write_atomically},
    launch::{launch_server, ProcessImage},
};

/// Render both outputs, write them, and hand the process over to the server.
///
/// `load_env` supplies the [`EnvironmentSnapshot`]; in production this is
/// [`common::load_environment`].
///
/// # Errors
///
/// Never returns `Ok`. Returns the first fatal error encountered, or
/// [`EntrypointError::LaunchFailure`] if the server could not be started.
pub fn run<L, P>(cfg: &Config, load_env: L, image: &P) -> Result<Infallible, EntrypointError>
where
    L: FnOnce() -> Result<EnvironmentSnapshot, EntrypointError>,
    P: ProcessImage,
{
    let env = load_env()?;

    let template = read_template(cfg.template_path())?;
    let frontend_config = render_frontend_config(&env)?;
    let server_config = render_server_config(&template, &env.contacts_baseurl);

    write_atomically(&cfg.frontend_config_path, &frontend_config)?;
    write_atomically(cfg.server_config_path(), server_config.as_bytes())?;

    Err(launch_server(image, &cfg.server_command()))
}
