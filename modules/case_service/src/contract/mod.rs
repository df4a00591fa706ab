//! Contract layer - transport-agnostic models and errors

pub mod error;
pub mod model;

pub use error::CaseError;
pub use model::{
    Case, CasePatch, CaseStatus, Document, DocumentPatch, DocumentType, Hearing, HearingPatch,
    HearingStatus, NewCase, NewDocument, NewHearing, UnknownVariant,
};
