pub mod link;
pub mod subject;
pub mod verdict;

pub use link::CandidateLink;
pub use subject::Subject;
pub use verdict::{RejectReason, Verdict};
