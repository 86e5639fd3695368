//! Read-only access to a parsed INI document.

use std::collections::BTreeMap;

/// Key/value pairs of a single section, keys already normalised.
pub type SectionMap = BTreeMap<String, String>;

pub trait ConfigPort {
    /// Names of every named section. The `DEFAULT` section is not included.
    fn sections(&self) -> Vec<String>;

    /// Pairs of `name`, with `DEFAULT` keys merged in, or `None` if the
    /// section does not exist.
    fn section(&self, name: &str) -> Option<SectionMap>;

    fn has_sections(&self) -> bool {
        !self.sections().is_empty()
    }
}
