//! dealermap-cli
//! =============
//!
//! Command-line interface for the `dealermap-core` dealer catalog.
//!
//! This crate primarily provides a binary (`dealermap`). The library target
//! exists so that a documentation page renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! dealermap --help
//! dealermap stats
//! dealermap search istanbul
//! dealermap search aksaray --json
//! dealermap --input my-dealers.json check
//! ```
//!
//! For programmatic access to search and viewport computation, use the
//! [`dealermap-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
