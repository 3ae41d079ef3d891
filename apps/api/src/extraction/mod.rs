// Candidate field extraction
// Implements: name cleaning, the per-field rule cascade, the upload and text routes.
// Extraction is a pure function of the document text; handlers run it inside
// tokio::task::spawn_blocking together with document acquisition.

pub mod cascade;
pub mod handlers;
pub mod normalizer;
pub mod patterns;
pub mod record;

pub use cascade::extract_candidate_info;
pub use record::CandidateRecord;
