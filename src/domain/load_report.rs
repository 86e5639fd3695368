//! Outcome of a single load: the section mapping plus how each section fared.

use crate::ports::config_port::SectionMap;
use std::collections::BTreeMap;

/// Requested section name to its key/value pairs.
pub type ConfigResult = BTreeMap<String, SectionMap>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    Found,
    /// Not present in the file; its mapping in the result is empty.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    sections: ConfigResult,
    statuses: Vec<(String, SectionStatus)>,
    read_failure: Option<String>,
}

impl LoadReport {
    pub(crate) fn new(read_failure: Option<String>) -> Self {
        Self {
            sections: ConfigResult::new(),
            statuses: Vec::new(),
            read_failure,
        }
    }

    pub(crate) fn record(&mut self, name: &str, pairs: Option<SectionMap>) {
        let status = if pairs.is_some() {
            SectionStatus::Found
        } else {
            SectionStatus::Missing
        };
        self.sections
            .insert(name.to_string(), pairs.unwrap_or_default());
        self.statuses.push((name.to_string(), status));
    }

    pub fn sections(&self) -> &ConfigResult {
        &self.sections
    }

    pub fn into_sections(self) -> ConfigResult {
        self.sections
    }

    pub fn section(&self, name: &str) -> Option<&SectionMap> {
        self.sections.get(name)
    }

    pub fn status(&self, name: &str) -> Option<SectionStatus> {
        self.statuses
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, status)| *status)
    }

    /// Requested names in request order.
    pub fn requested(&self) -> impl Iterator<Item = &str> {
        self.statuses.iter().map(|(name, _)| name.as_str())
    }

    pub fn missing_sections(&self) -> Vec<&str> {
        self.statuses
            .iter()
            .filter(|(_, status)| *status == SectionStatus::Missing)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.read_failure.is_none() && self.missing_sections().is_empty()
    }

    /// Reason the file could not be read or parsed, if it could not.
    pub fn read_failure(&self) -> Option<&str> {
        self.read_failure.as_deref()
    }
}
