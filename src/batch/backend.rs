use super::Batch;

mod local;
mod service;

pub use local::LocalBackend;
pub use service::ServiceBackend;

/// Executes a task graph.
///
/// The backend owns all real concurrency, retries and resource
/// scheduling; the pipeline only declares the graph. A task may not
/// start before every resource its command references exists.
pub trait Backend {
    fn run(&self, batch: &Batch) -> anyhow::Result<()>;
}
