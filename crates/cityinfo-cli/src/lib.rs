//! cityinfo-cli
//! ============
//!
//! Command-line interface for the `cityinfo-core` city database.
//!
//! This crate primarily provides a binary (`cityinfo-cli`). The small
//! library target only exists so that documentation renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! cityinfo-cli --help
//! cityinfo-cli count
//! cityinfo-cli --db ./wdb get 0
//! cityinfo-cli --settings settings.json --catalog fi.json closest 0.57 0.16
//! ```
//!
//! For programmatic access, use the [`cityinfo-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
