//! # tatcg-core
//!
//! Everything behind the TAT Consulting Group site that is not markup.
//!
//! The landing app renders five client-selected pages and a lead-capture
//! form. This crate owns the state and rules those views read:
//!
//! - [`navigation`] - which page is active, mobile menu, scrolled chrome
//! - [`content`] - static service, office and testimonial descriptors
//! - [`form`] - the contact draft, its validator and the form state container
//! - [`submission`] - validate, deliver, classify, reset
//! - [`locale`] - supported locales, resolution and path routing
//! - [`catalog`] - flat key to string message catalogs per locale
//! - [`config`] - `Site.toml` settings for the flow, locales and chrome
//!
//! ## Quick Start
//!
//! ```rust
//! use tatcg_core::form::{ContactDraft, ContactField, validate};
//!
//! let draft = ContactDraft {
//!     name: "Ama".into(),
//!     email: "ama@example.com".into(),
//!     message: "We need transfer pricing support.".into(),
//!     ..Default::default()
//! };
//! assert!(validate(&draft).is_valid());
//!
//! let broken = ContactDraft { email: "ama@example".into(), ..draft };
//! assert_eq!(validate(&broken).message(ContactField::Email), Some("Invalid email".into()));
//! ```
//!
//! No rendering happens here, so every type can be built in isolation and
//! exercised from native tests.

pub mod catalog;
pub mod config;
pub mod content;
pub mod form;
pub mod locale;
pub mod navigation;
pub mod submission;

pub use catalog::{Catalog, CatalogError, CatalogSource};
pub use config::{ConfigError, SiteConfig};
pub use form::{ContactDraft, ContactField, ContactForm, ValidationErrors, ValidationIssue, validate};
pub use locale::{LocaleConfig, LocaleError, LocaleRoute, LocaleScheme};
pub use navigation::{NavigationEffect, NavigationState, PageId};
pub use submission::{
    ContactTransport, Delay, DeliveryResponse, DispatchError, FormStore, SubmissionFlow,
    SubmissionPolicy, SubmissionStatus, SubmitFailure, SubmitReport, UnreachableFallback,
};
