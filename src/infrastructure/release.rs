//! Release payload extraction via `oc`
//!
//! Two steps, each retried on failure:
//! 1. `oc adm release info --image-for=machine-os-images` resolves the pullspec
//!    of the OS images carried by the release
//! 2. `oc image extract` copies the architecture's ISO out of that image into
//!    the cache directory
//!
//! A missing `oc` binary is reported once and never retried.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::domain::ports::{CommandExecutor, ExtractError, ExtractRequest, ImageExtractor};

/// Default number of attempts per `oc` command
pub const DEFAULT_MAX_TRIES: u32 = 5;

/// Default delay between attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

const MACHINE_OS_IMAGES: &str = "machine-os-images";

/// Retry and placement settings for the extractor
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    pub tool: String,
    pub max_tries: u32,
    pub retry_delay: Duration,
    pub cache_dir: PathBuf,
}

impl ReleaseConfig {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            tool: "oc".to_string(),
            max_tries: DEFAULT_MAX_TRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            cache_dir: cache_dir.into(),
        }
    }
}

/// `oc`-backed `ImageExtractor`
pub struct OcRelease {
    executor: Box<dyn CommandExecutor>,
    config: ReleaseConfig,
}

impl OcRelease {
    pub fn new(executor: Box<dyn CommandExecutor>, config: ReleaseConfig) -> Self {
        Self { executor, config }
    }

    /// File name the ISO has inside the OS images container and in the cache
    pub fn iso_filename(architecture: &str) -> String {
        format!("coreos-{}.iso", architecture)
    }

    fn run_with_retry(&self, args: &[String]) -> Result<String, ExtractError> {
        let command = format!("{} {}", self.config.tool, args.join(" "));
        let tries = self.config.max_tries.max(1);
        let mut last_error = String::new();

        for attempt in 1..=tries {
            match self.executor.execute(&self.config.tool, args, None) {
                Ok(output) if output.success() => return Ok(output.stdout),
                Ok(output) => {
                    last_error = if output.stderr.trim().is_empty() {
                        format!("exit status {:?}", output.status)
                    } else {
                        output.stderr.trim().to_string()
                    };
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    warn!(
                        "Unable to extract base ISO from release payload: {} is not installed",
                        self.config.tool
                    );
                    return Err(ExtractError::ToolUnavailable {
                        tool: self.config.tool.clone(),
                        message: e.to_string(),
                    });
                }
                Err(e) => last_error = e.to_string(),
            }

            debug!(attempt, tries, "`{}` failed: {}", command, last_error);
            if attempt < tries {
                thread::sleep(self.config.retry_delay);
            }
        }

        Err(ExtractError::Failed {
            command,
            message: last_error,
        })
    }

    fn scratch_file(&self, content: &[u8]) -> Result<NamedTempFile, ExtractError> {
        let mut file = NamedTempFile::new().map_err(|e| self.io_failure(e))?;
        file.write_all(content).map_err(|e| self.io_failure(e))?;
        Ok(file)
    }

    fn io_failure(&self, err: std::io::Error) -> ExtractError {
        ExtractError::Failed {
            command: self.config.tool.clone(),
            message: err.to_string(),
        }
    }
}

fn path_arg(flag: &str, path: &Path) -> String {
    format!("--{}={}", flag, path.display())
}

impl ImageExtractor for OcRelease {
    fn extract_base_iso(&self, request: &ExtractRequest<'_>) -> Result<PathBuf, ExtractError> {
        let pull_secret = self.scratch_file(request.pull_secret.as_bytes())?;
        let icsp = match request.mirror_config.filter(|m| !m.is_empty()) {
            Some(mirrors) => {
                let yaml = mirrors.to_icsp_yaml().map_err(|e| ExtractError::Failed {
                    command: "render image content source policy".to_string(),
                    message: e.to_string(),
                })?;
                Some(self.scratch_file(yaml.as_bytes())?)
            }
            None => None,
        };

        let mut common = vec![path_arg("registry-config", pull_secret.path())];
        if let Some(icsp) = &icsp {
            common.push(path_arg("icsp-file", icsp.path()));
        }

        let mut info_args = vec![
            "adm".to_string(),
            "release".to_string(),
            "info".to_string(),
            format!("--image-for={}", MACHINE_OS_IMAGES),
        ];
        info_args.extend(common.iter().cloned());
        info_args.push(request.release_image.to_string());

        let pullspec = self.run_with_retry(&info_args)?.trim().to_string();
        if pullspec.is_empty() {
            return Err(ExtractError::Failed {
                command: format!("{} {}", self.config.tool, info_args.join(" ")),
                message: format!("release has no {} image", MACHINE_OS_IMAGES),
            });
        }
        debug!("Found {} image {}", MACHINE_OS_IMAGES, pullspec);

        std::fs::create_dir_all(&self.config.cache_dir).map_err(|e| self.io_failure(e))?;
        let filename = Self::iso_filename(request.architecture);

        let mut extract_args = vec![
            "image".to_string(),
            "extract".to_string(),
            "--path".to_string(),
            format!("/coreos/{}:{}", filename, self.config.cache_dir.display()),
            "--confirm".to_string(),
        ];
        extract_args.extend(common);
        extract_args.push(pullspec);

        self.run_with_retry(&extract_args)?;

        Ok(self.config.cache_dir.join(filename))
    }
}
