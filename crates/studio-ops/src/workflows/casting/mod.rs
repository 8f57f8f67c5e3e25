pub mod domain;
mod report;

pub use domain::{CastMemberSnapshot, CastSheet, CastingRequest};
pub use report::{CastMemberVerdict, CastingReport, CastingTally};
