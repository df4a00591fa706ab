//! Infrastructure layer

pub mod case_client;
pub mod storage;
