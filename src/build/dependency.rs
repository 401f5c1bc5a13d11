//! Packaging tool installation.
//!
//! pip treats an already-installed package as success, so this stage can
//! run on every build.

use super::config::{BuildConfig, PACKAGER_NAME, PACKAGER_PACKAGE};
use super::runner::ProcessRunner;
use crate::error::{PyfreezeError, Result};
use crate::shell::ProcessSpec;
use crate::ui::UserInterface;

/// Command that installs the packaging tool through pip.
pub fn install_command(config: &BuildConfig) -> ProcessSpec {
    ProcessSpec::new(&config.interpreter).args(["-m", "pip", "install", PACKAGER_PACKAGE])
}

/// Install the packaging tool, streaming pip's output to the console.
pub fn install_packager(
    config: &BuildConfig,
    runner: &dyn ProcessRunner,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let spec = install_command(config);
    ui.message(&format!("Installing {}...", PACKAGER_NAME));

    let message = match runner.run_inherited(&spec) {
        Ok(result) if result.success => {
            ui.success(&format!("{} installed successfully.", PACKAGER_NAME));
            return Ok(());
        }
        Ok(result) => match result.exit_code {
            Some(code) => format!("Command failed: {} (exit code {})", spec, code),
            None => format!("Command failed: {} (terminated by signal)", spec),
        },
        Err(PyfreezeError::CommandSpawn { message, .. }) => message,
        Err(e) => return Err(e),
    };

    tracing::debug!("Dependency install failed: {}", message);
    Err(PyfreezeError::DependencyInstallFailure {
        package: PACKAGER_NAME.to_string(),
        message,
    })
}
