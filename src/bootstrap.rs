//! Bootstrap resolver.
//!
//! Computes the configuration file location from the entry point's own
//! directory and publishes the environment contract the served application
//! reads at load time. Resolution is pure path arithmetic: the caller's
//! working directory is never consulted, so the result is identical
//! whether the process was started directly, through a wrapper script, or
//! by a service manager.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::BootstrapError;

/// Fixed configuration file name, always resolved next to the entry point.
pub const CONFIG_FILE_NAME: &str = "app.yml";

/// Environment key the served application reads its configuration
/// location from.
pub const CONFIG_ENV: &str = "CONFIG";

/// Lets bundled native math libraries initialize twice instead of
/// aborting the process.
pub const DUPLICATE_LIB_ENV: &str = "KMP_DUPLICATE_LIB_OK";

/// Resolved bootstrap state. Derived once at process start, immutable
/// afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    script_dir: PathBuf,
    config_path: PathBuf,
}

impl Bootstrap {
    /// Derive the configuration location from the entry point's path.
    ///
    /// Takes the entry point's parent directory and joins the fixed
    /// configuration file name. Touches no filesystem state and cannot
    /// fail.
    pub fn from_entry_point(entry_point: &Path) -> Self {
        let script_dir = entry_point
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let config_path = script_dir.join(CONFIG_FILE_NAME);
        Self {
            script_dir,
            config_path,
        }
    }

    /// Directory containing the entry point.
    pub fn script_dir(&self) -> &Path {
        &self.script_dir
    }

    /// Expected location of the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Whether the configuration artifact is present on disk.
    pub fn config_exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Publish the environment contract for the served application.
    ///
    /// Written once, before the async runtime (and therefore any worker
    /// thread) exists. The compatibility flag is set unconditionally and
    /// before the existence check runs.
    pub fn publish_environment(&self) {
        env::set_var(DUPLICATE_LIB_ENV, "TRUE");
        env::set_var(CONFIG_ENV, &self.config_path);
    }

    /// Log the resolved configuration location and whether it exists,
    /// before anything downstream runs, so a failed start is diagnosable
    /// from the log alone.
    pub fn report(&self) {
        tracing::info!(
            config = %self.config_path.display(),
            exists = self.config_exists(),
            "resolved configuration file"
        );
    }

    /// Launch guard: the single precondition gating process continuation.
    pub fn validate(&self) -> Result<(), BootstrapError> {
        if self.config_exists() {
            Ok(())
        } else {
            Err(BootstrapError::ConfigurationMissing {
                path: self.config_path.clone(),
            })
        }
    }
}

/// Run the full bootstrap sequence for the given entry point: resolve,
/// publish the environment, report, validate.
///
/// Publication strictly precedes validation, so `KMP_DUPLICATE_LIB_OK`
/// and `CONFIG` are set even when the guard rejects the start.
pub fn prepare(entry_point: &Path) -> Result<Bootstrap, BootstrapError> {
    let bootstrap = Bootstrap::from_entry_point(entry_point);
    bootstrap.publish_environment();
    bootstrap.report();
    bootstrap.validate()?;
    Ok(bootstrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;

    // Process environment and working directory are global; tests that
    // touch either serialize on this.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn config_path_sits_next_to_the_entry_point() {
        let bootstrap = Bootstrap::from_entry_point(Path::new("/srv/app/searchd"));
        assert_eq!(bootstrap.script_dir(), Path::new("/srv/app"));
        assert_eq!(bootstrap.config_path(), Path::new("/srv/app/app.yml"));
    }

    #[test]
    fn resolution_ignores_the_working_directory() {
        let _guard = ENV_LOCK.lock().unwrap();

        let entry_point = Path::new("/srv/app/searchd");
        let first = Bootstrap::from_entry_point(entry_point);

        let elsewhere = tempfile::tempdir().unwrap();
        let original = env::current_dir().unwrap();
        env::set_current_dir(elsewhere.path()).unwrap();
        let second = Bootstrap::from_entry_point(entry_point);
        env::set_current_dir(original).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn publish_sets_both_environment_keys() {
        let _guard = ENV_LOCK.lock().unwrap();

        let bootstrap = Bootstrap::from_entry_point(Path::new("/srv/app/searchd"));
        bootstrap.publish_environment();

        assert_eq!(env::var(DUPLICATE_LIB_ENV).unwrap(), "TRUE");
        assert_eq!(env::var(CONFIG_ENV).unwrap(), "/srv/app/app.yml");
    }

    #[test]
    fn validate_accepts_a_present_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "writable: true\n").unwrap();

        let bootstrap = Bootstrap::from_entry_point(&dir.path().join("searchd"));
        assert!(bootstrap.config_exists());
        assert!(bootstrap.validate().is_ok());
    }

    #[test]
    fn validate_rejects_a_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();

        let bootstrap = Bootstrap::from_entry_point(&dir.path().join("searchd"));
        assert!(!bootstrap.config_exists());

        match bootstrap.validate() {
            Err(BootstrapError::ConfigurationMissing { path }) => {
                assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
            }
            other => panic!("expected ConfigurationMissing, got {other:?}"),
        }
    }

    #[test]
    fn environment_is_published_before_the_existence_check() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var(DUPLICATE_LIB_ENV);

        let dir = tempfile::tempdir().unwrap();
        let outcome = prepare(&dir.path().join("searchd"));

        assert!(outcome.is_err());
        assert_eq!(env::var(DUPLICATE_LIB_ENV).unwrap(), "TRUE");
    }

    #[test]
    fn prepare_is_idempotent() {
        let _guard = ENV_LOCK.lock().unwrap();

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "writable: true\n").unwrap();
        let entry_point = dir.path().join("searchd");

        let first = prepare(&entry_point).unwrap();
        let first_config = env::var(CONFIG_ENV).unwrap();
        let second = prepare(&entry_point).unwrap();
        let second_config = env::var(CONFIG_ENV).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_config, second_config);
    }
}
