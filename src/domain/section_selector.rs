//! Parsing of the caller's section list.
//!
//! The list is a single string split on [`SECTION_DELIMITER`] verbatim:
//! `"MQTT, MQTT_TOPICS"` names two sections, while `"MQTT,MQTT_TOPICS"`
//! names one section literally called `MQTT,MQTT_TOPICS`. No trimming is
//! applied to the pieces.

/// Separator between section names: a comma followed by one space.
pub const SECTION_DELIMITER: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSelector {
    names: Vec<String>,
}

impl SectionSelector {
    /// Split `input` into section names. Later duplicates are dropped so each
    /// name appears once, in first-seen order.
    pub fn parse(input: &str) -> Self {
        let mut names: Vec<String> = Vec::new();
        for name in input.split(SECTION_DELIMITER) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
