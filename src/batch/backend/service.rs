use super::Backend;
use crate::batch::{Batch, TaskId};

/// Client boundary for a remote batch-execution service.
///
/// The workshop template ships no service endpoint, image registry or
/// bucket. This backend validates the graph, reports what would be
/// submitted under the given billing project and bucket, and fails
/// with a message pointing at --local.
pub struct ServiceBackend {
    billing_project: Box<str>,
    bucket: Box<str>,
}

impl ServiceBackend {
    pub fn new(billing_project: &str, bucket: &str) -> Self {
        Self {
            billing_project: Box::from(billing_project),
            bucket: Box::from(bucket),
        }
    }
}

impl Backend for ServiceBackend {
    fn run(&self, batch: &Batch) -> anyhow::Result<()> {
        batch.validate()?;
        info!(
            "batch '{}': {} tasks ready for submission (billing project '{}', bucket gs://{})",
            batch.name(),
            batch.n_tasks(),
            self.billing_project,
            self.bucket
        );
        for (ix, task) in batch.tasks().iter().enumerate() {
            let deps: Vec<_> = batch
                .deps(TaskId(ix))
                .iter()
                .map(|t| batch.tasks()[t.0].name())
                .collect();
            debug!(
                "  task '{}': {} cpu, {} MiB, image {}, after {:?}",
                task.name(),
                task.cpu(),
                task.memory_mb().unwrap_or(0),
                task.image().unwrap_or("-"),
                deps
            );
        }
        bail!(
            "no batch service endpoint is configured in this workshop template; \
             rerun with --local to execute on this machine"
        )
    }
}
