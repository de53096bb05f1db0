pub mod importer;
pub mod probe;
pub mod server;

pub use importer::{Dataset, ImportService, ImportSummary};
pub use probe::{ProbeService, ProbeSummary};
pub use server::{build_app, ServerService};
