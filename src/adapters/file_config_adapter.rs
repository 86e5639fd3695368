//! INI file configuration adapter backed by `configparser`.
//!
//! The file is split into blocks, one per section header, and each block is
//! parsed on its own. A block that fails to parse is dropped and its error
//! kept in [`FileConfigAdapter::failures`]; every other section survives.
//! An entry before the first header aborts the whole read, leaving no sections.

use crate::ports::config_port::{ConfigPort, SectionMap};
use configparser::ini::{Ini, IniDefault};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Section whose keys are inherited by every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

pub struct FileConfigAdapter {
    sections: BTreeMap<String, SectionMap>,
    failures: Vec<String>,
}

/// Lines starting at one section header, up to the next header.
struct Block {
    first_line: usize,
    text: String,
}

impl FileConfigAdapter {
    /// An adapter holding no sections at all.
    pub fn empty() -> Self {
        Self {
            sections: BTreeMap::new(),
            failures: Vec::new(),
        }
    }

    /// Read and parse `path`. Only I/O errors are returned; parse errors end
    /// up in [`FileConfigAdapter::failures`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_string(&content))
    }

    pub fn from_string(content: &str) -> Self {
        let mut adapter = Self::empty();
        let (preamble, blocks) = split_blocks(content);

        if let Some((line, entry)) = first_entry(&preamble) {
            adapter
                .failures
                .push(format!("line {line}: entry before any section header: {entry}"));
            return adapter;
        }

        for block in blocks {
            match parse_block(&block) {
                Ok(parsed) => {
                    for (name, pairs) in parsed {
                        adapter.sections.entry(name).or_default().extend(pairs);
                    }
                }
                Err(reason) => adapter
                    .failures
                    .push(format!("section at line {}: {reason}", block.first_line)),
            }
        }
        adapter
    }

    /// Parse errors in file order. Empty when the whole file parsed.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn failure_summary(&self) -> Option<String> {
        if self.failures.is_empty() {
            None
        } else {
            Some(self.failures.join("; "))
        }
    }
}

// Values are kept verbatim: no inline comments, indented lines continue the
// previous value. Section names stay case-sensitive.
fn new_ini() -> Ini {
    let mut defaults: IniDefault = Ini::new_cs().defaults();
    defaults.default_section = DEFAULT_SECTION.to_string();
    defaults.case_sensitive = true;
    defaults.multiline = true;
    defaults.enable_inline_comments = false;
    Ini::new_from_defaults(defaults)
}

fn split_blocks(content: &str) -> (String, Vec<Block>) {
    let mut preamble = String::new();
    let mut blocks: Vec<Block> = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim_start().starts_with('[') {
            blocks.push(Block {
                first_line: index + 1,
                text: String::new(),
            });
        }
        let target = match blocks.last_mut() {
            Some(block) => &mut block.text,
            None => &mut preamble,
        };
        target.push_str(line);
        target.push('\n');
    }
    (preamble, blocks)
}

fn first_entry(preamble: &str) -> Option<(usize, &str)> {
    preamble
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .find(|(_, line)| !line.is_empty() && !line.starts_with(['#', ';']))
}

/// Parse one block and fold keys to lower case. Two keys differing only in
/// case are a duplicate and reject the block.
fn parse_block(block: &Block) -> Result<BTreeMap<String, SectionMap>, String> {
    let mut ini = new_ini();
    ini.read(block.text.clone())?;

    let mut parsed = BTreeMap::new();
    for (name, pairs) in ini.get_map_ref() {
        let mut section = SectionMap::new();
        let mut seen: HashMap<String, &str> = HashMap::new();
        for (key, value) in pairs {
            let folded = key.to_lowercase();
            if let Some(other) = seen.insert(folded.clone(), key.as_str()) {
                return Err(format!(
                    "duplicate key '{folded}' in [{name}] ('{other}' and '{key}')"
                ));
            }
            section.insert(folded, value.clone().unwrap_or_default());
        }
        parsed.insert(name.clone(), section);
    }
    Ok(parsed)
}

impl ConfigPort for FileConfigAdapter {
    fn sections(&self) -> Vec<String> {
        self.sections
            .keys()
            .filter(|name| *name != DEFAULT_SECTION)
            .cloned()
            .collect()
    }

    fn section(&self, name: &str) -> Option<SectionMap> {
        if name == DEFAULT_SECTION {
            return None;
        }
        let own = self.sections.get(name)?;
        let mut merged = self.sections.get(DEFAULT_SECTION).cloned().unwrap_or_default();
        merged.extend(own.clone());
        Some(merged)
    }
}
