//! Case Service Module
//!
//! Owns the case aggregate: cases with their hearings, documents and
//! client links. Deleting a case removes everything that hangs off it.

// Public exports
pub mod contract;
pub use contract::{
    Case, CaseError, CasePatch, CaseStatus, Document, DocumentPatch, DocumentType, Hearing,
    HearingPatch, HearingStatus, NewCase, NewDocument, NewHearing,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::CaseServiceModule;

pub mod api;
pub mod domain;
pub mod infra;
