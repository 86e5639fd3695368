//! confpacket — loads selected sections of a project's `config.ini`.
//!
//! Hexagonal layout: loading logic in [`domain`], the parsed-document trait in
//! [`ports`], the `configparser`-backed implementation in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
pub mod logging;
