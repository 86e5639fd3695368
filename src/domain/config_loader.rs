//! Loads the requested sections of `config.ini`.
//!
//! Failure policy: a file that cannot be read is logged and treated as empty,
//! a file that parses only partly is logged and its valid sections are used,
//! a missing section is logged and returned as an empty mapping. Only a file
//! with no sections at all is an error.

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_path::resolve_config_path;
use crate::domain::error::ConfPacketError;
use crate::domain::load_report::{ConfigResult, LoadReport};
use crate::domain::section_selector::SectionSelector;
use crate::ports::config_port::ConfigPort;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Loader for the `config.ini` found above the `marker` directory of `anchor`.
    pub fn from_anchor(anchor: &Path, marker: &str) -> Self {
        Self::new(resolve_config_path(anchor, marker))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file afresh and extract the sections named in `section_names`.
    ///
    /// The report holds exactly one entry per distinct requested name.
    pub fn load(&self, section_names: &str) -> Result<LoadReport, ConfPacketError> {
        debug!(path = %self.path.display(), sections = section_names, "loading config");

        let (adapter, read_failure) = match FileConfigAdapter::from_file(&self.path) {
            Ok(adapter) => {
                let failure = adapter.failure_summary();
                if let Some(reason) = &failure {
                    warn!(
                        path = %self.path.display(),
                        error = %reason,
                        "failed to parse part of config file"
                    );
                }
                (adapter, failure)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read config file");
                (FileConfigAdapter::empty(), Some(e.to_string()))
            }
        };

        extract(&adapter, &self.path, section_names, read_failure)
    }

    /// Like [`ConfigLoader::load`] but returns only the mapping.
    pub fn load_sections(&self, section_names: &str) -> Result<ConfigResult, ConfPacketError> {
        self.load(section_names).map(LoadReport::into_sections)
    }
}

/// Build a report for `section_names` out of an already parsed document.
pub fn extract(
    config: &dyn ConfigPort,
    path: &Path,
    section_names: &str,
    read_failure: Option<String>,
) -> Result<LoadReport, ConfPacketError> {
    if !config.has_sections() {
        return Err(ConfPacketError::ConfigurationCorruptOrMissing {
            path: path.to_path_buf(),
        });
    }

    let selector = SectionSelector::parse(section_names);
    let mut report = LoadReport::new(read_failure);
    for name in selector.names() {
        let pairs = config.section(name);
        if pairs.is_none() {
            warn!(section = %name, path = %path.display(), "section not found in config file");
        }
        report.record(name, pairs);
    }

    debug!(
        requested = selector.len(),
        missing = report.missing_sections().len(),
        "config loaded"
    );
    Ok(report)
}
