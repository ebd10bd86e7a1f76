//! Service managers: command generation bound to injected side effects.
//!
//! Three flavors, all thin. [`ServiceManager`] drives any service on any
//! init system. [`SpecificServiceManager`] is bound to one fixed service
//! name at construction. [`SystemdServiceManager`] adds the default-target
//! swap, which needs a [`Filesystem`] capability on top of the runner.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::action::Action;
use crate::command::ServiceCommandGenerator;
use crate::error::{ServiceError, ServiceResult};
use crate::exec::{CommandRunner, RunOptions, RunResult};
use crate::init::InitKind;
use crate::paths;
use crate::runlevel::runlevel_to_target;

/// Filesystem primitives for the default-target swap.
///
/// `temp_path` must name a path in `dir` that does not yet exist, so a
/// symlink can be created there and renamed onto the live default.target in
/// one atomic step. All three operations are injected so the sequencing can
/// be tested without touching the host.
pub trait Filesystem: Send + Sync {
    /// A fresh, not-yet-existing path under `dir`.
    fn temp_path(&self, dir: &Path) -> Result<PathBuf>;

    /// Create a symbolic link at `link` pointing to `target`.
    fn symlink(&self, target: &Path, link: &Path) -> Result<()>;

    /// Atomically rename `from` onto `to`.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}

/// Real filesystem capability.
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn temp_path(&self, dir: &Path) -> Result<PathBuf> {
        let file = tempfile::Builder::new()
            .prefix(".default.target.")
            .make_in(dir, |path| Ok::<_, std::io::Error>(path.to_path_buf()))
            .with_context(|| format!("Failed to pick a temp path in {}", dir.display()))?;
        let (path, guard) = file.into_parts();
        // Nothing was created at the path; keep() stops the guard from
        // removing whatever lands there later.
        let _ = guard.keep();
        Ok(path)
    }

    fn symlink(&self, target: &Path, link: &Path) -> Result<()> {
        std::os::unix::fs::symlink(target, link).with_context(|| {
            format!(
                "Failed to symlink {} -> {}",
                link.display(),
                target.display()
            )
        })
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        std::fs::rename(from, to)
            .with_context(|| format!("Failed to rename {} -> {}", from.display(), to.display()))
    }
}

/// Generic manager: any allowed action against any service name.
pub struct ServiceManager {
    commands: ServiceCommandGenerator,
    runner: Arc<dyn CommandRunner>,
}

impl ServiceManager {
    pub fn new(kind: InitKind, runner: Arc<dyn CommandRunner>) -> Self {
        Self::with_commands(ServiceCommandGenerator::new(kind.create()), runner)
    }

    pub fn with_commands(commands: ServiceCommandGenerator, runner: Arc<dyn CommandRunner>) -> Self {
        Self { commands, runner }
    }

    /// Phrase the action through the command layer and hand the joined
    /// command line to the run capability, forwarding options verbatim.
    pub fn apply(&self, action: Action, service: &str, opts: &RunOptions) -> Result<RunResult> {
        let argv = self.commands.command(action, service)?;
        self.runner.run(&argv.join(" "), opts)
    }

    pub fn start(&self, service: &str) -> Result<RunResult> {
        self.apply(Action::Start, service, &RunOptions::default())
    }

    pub fn stop(&self, service: &str) -> Result<RunResult> {
        self.apply(Action::Stop, service, &RunOptions::default())
    }

    pub fn restart(&self, service: &str) -> Result<RunResult> {
        self.apply(Action::Restart, service, &RunOptions::default())
    }

    pub fn condrestart(&self, service: &str) -> Result<RunResult> {
        self.apply(Action::Condrestart, service, &RunOptions::default())
    }

    pub fn status(&self, service: &str) -> Result<RunResult> {
        self.apply(Action::Status, service, &RunOptions::default())
    }

    pub fn enable(&self, service: &str) -> Result<RunResult> {
        self.apply(Action::Enable, service, &RunOptions::default())
    }

    pub fn disable(&self, service: &str) -> Result<RunResult> {
        self.apply(Action::Disable, service, &RunOptions::default())
    }

    pub fn is_enabled(&self, service: &str) -> Result<RunResult> {
        self.apply(Action::IsEnabled, service, &RunOptions::default())
    }

    /// List unit files. Takes no service name; the SysV family rejects it.
    pub fn list(&self) -> Result<RunResult> {
        self.apply(Action::List, "", &RunOptions::default())
    }
}

/// Manager bound to one fixed service name.
///
/// The bound name is passed to the generator verbatim, namespace prefix and
/// all ("boot.lldpad" stays "boot.lldpad"). Listing is meaningless for a
/// single bound service, so `List` is stripped from the allowed set and the
/// type exposes no list operation.
pub struct SpecificServiceManager {
    service: String,
    commands: ServiceCommandGenerator,
    runner: Arc<dyn CommandRunner>,
}

impl SpecificServiceManager {
    pub fn new(
        service: &str,
        commands: ServiceCommandGenerator,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            service: service.to_string(),
            commands: commands.without(Action::List),
            runner,
        }
    }

    /// The bound service name.
    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn apply(&self, action: Action, opts: &RunOptions) -> Result<RunResult> {
        let argv = self.commands.command(action, &self.service)?;
        self.runner.run(&argv.join(" "), opts)
    }

    pub fn start(&self) -> Result<RunResult> {
        self.apply(Action::Start, &RunOptions::default())
    }

    pub fn stop(&self) -> Result<RunResult> {
        self.apply(Action::Stop, &RunOptions::default())
    }

    pub fn restart(&self) -> Result<RunResult> {
        self.apply(Action::Restart, &RunOptions::default())
    }

    pub fn condrestart(&self) -> Result<RunResult> {
        self.apply(Action::Condrestart, &RunOptions::default())
    }

    pub fn status(&self) -> Result<RunResult> {
        self.apply(Action::Status, &RunOptions::default())
    }

    pub fn enable(&self) -> Result<RunResult> {
        self.apply(Action::Enable, &RunOptions::default())
    }

    pub fn disable(&self) -> Result<RunResult> {
        self.apply(Action::Disable, &RunOptions::default())
    }

    pub fn is_enabled(&self) -> Result<RunResult> {
        self.apply(Action::IsEnabled, &RunOptions::default())
    }
}

/// Systemd manager: the generic manager plus the default-target swap.
pub struct SystemdServiceManager {
    manager: ServiceManager,
    fs: Arc<dyn Filesystem>,
}

impl SystemdServiceManager {
    pub fn new(runner: Arc<dyn CommandRunner>, fs: Arc<dyn Filesystem>) -> Self {
        Self {
            manager: ServiceManager::new(InitKind::Systemd, runner),
            fs,
        }
    }

    /// The underlying generic manager.
    pub fn manager(&self) -> &ServiceManager {
        &self.manager
    }

    pub fn apply(&self, action: Action, service: &str, opts: &RunOptions) -> Result<RunResult> {
        self.manager.apply(action, service, opts)
    }

    pub fn start(&self, service: &str) -> Result<RunResult> {
        self.manager.start(service)
    }

    pub fn stop(&self, service: &str) -> Result<RunResult> {
        self.manager.stop(service)
    }

    pub fn restart(&self, service: &str) -> Result<RunResult> {
        self.manager.restart(service)
    }

    pub fn condrestart(&self, service: &str) -> Result<RunResult> {
        self.manager.condrestart(service)
    }

    pub fn status(&self, service: &str) -> Result<RunResult> {
        self.manager.status(service)
    }

    pub fn enable(&self, service: &str) -> Result<RunResult> {
        self.manager.enable(service)
    }

    pub fn disable(&self, service: &str) -> Result<RunResult> {
        self.manager.disable(service)
    }

    pub fn is_enabled(&self, service: &str) -> Result<RunResult> {
        self.manager.is_enabled(service)
    }

    pub fn list(&self) -> Result<RunResult> {
        self.manager.list()
    }

    /// Point default.target at a new boot target.
    ///
    /// Accepts either a SysV runlevel ('0'-'6', 's') or a target name ending
    /// in ".target". Sequence: pick a temp path in the systemd config
    /// directory, symlink it to the unit under /usr/lib/systemd/system, then
    /// atomically rename it onto /etc/systemd/system/default.target.
    ///
    /// There is no rollback: if the rename fails after the symlink was
    /// created, a stray temp symlink is left behind and callers retry the
    /// whole sequence.
    pub fn change_default_runlevel(&self, runlevel_or_target: &str) -> Result<()> {
        let target = normalize_target(runlevel_or_target)?;
        debug!(target = %target, "changing default boot target");

        let tmp = self
            .fs
            .temp_path(Path::new(paths::SYSTEMD_SYSTEM_CONF_DIR))?;
        let unit = Path::new(paths::SYSTEMD_UNIT_DIR).join(&target);
        self.fs.symlink(&unit, &tmp)?;
        self.fs.rename(&tmp, Path::new(paths::DEFAULT_TARGET_PATH))?;
        Ok(())
    }
}

/// Resolve a runlevel-or-target argument to a target name.
///
/// Single characters go through the runlevel table; names ending in
/// ".target" pass through verbatim (non-canonical units like
/// emergency.target are legitimate boot targets).
fn normalize_target(input: &str) -> ServiceResult<String> {
    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(runlevel_to_target(c)?.to_string());
    }
    if input.ends_with(".target") {
        return Ok(input.to_string());
    }
    Err(ServiceError::InvalidTarget {
        target: input.to_string(),
    })
}
