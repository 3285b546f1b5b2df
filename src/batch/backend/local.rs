use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use tempfile::TempDir;

use super::Backend;
use crate::batch::{resource::Resource, Batch};

/// Runs a task graph on the local machine.
///
/// Tasks execute one at a time, in insertion order, each in its own
/// working directory under a scratch tree. Container images are
/// ignored; commands run directly on the host, so the tools a task
/// invokes must be on PATH. Intermediate files are discarded with the
/// scratch tree unless `keep_scratch` is set.
pub struct LocalBackend {
    keep_scratch: bool,
}

impl LocalBackend {
    pub fn new(keep_scratch: bool) -> Self {
        Self { keep_scratch }
    }
}

impl Backend for LocalBackend {
    fn run(&self, batch: &Batch) -> anyhow::Result<()> {
        batch.validate()?;

        let scratch = TempDir::new()
            .map_err(|e| anyhow!("could not create scratch directory: {}", e))?;
        debug!("scratch directory {}", scratch.path().display());

        for ix in 0..batch.n_tasks() {
            fs::create_dir_all(task_dir(scratch.path(), ix))?;
        }
        let paths = stage_resources(batch, scratch.path())?;

        for (ix, task) in batch.tasks().iter().enumerate() {
            let cmd = match task.command() {
                Some(c) => c,
                None => {
                    debug!("task '{}' has no command, skipping", task.name());
                    continue;
                }
            };
            if let Some(image) = task.image() {
                debug!(
                    "task '{}': image {} ignored by the local backend",
                    task.name(),
                    image
                );
            }
            let script = cmd.render(|r| paths[r.0].display().to_string());
            info!(
                "running task '{}' ({} of {})",
                task.name(),
                ix + 1,
                batch.n_tasks()
            );
            trace!("task '{}' script:\n{}", task.name(), script);

            let status = Command::new("sh")
                .arg("-c")
                .arg(&script)
                .current_dir(task_dir(scratch.path(), ix))
                .status()
                .map_err(|e| anyhow!("could not spawn task '{}': {}", task.name(), e))?;
            if !status.success() {
                bail!("task '{}' failed ({})", task.name(), status);
            }
        }

        for (rid, dest) in batch.outputs() {
            let src = &paths[rid.0];
            if let Some(parent) = dest.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::copy(src, dest).map_err(|e| {
                anyhow!(
                    "could not copy output {} to {}: {}",
                    src.display(),
                    dest.display(),
                    e
                )
            })?;
            info!("wrote output {}", dest.display());
        }

        if self.keep_scratch {
            let p = scratch.keep();
            info!("scratch directory retained at {}", p.display());
        }
        Ok(())
    }
}

fn task_dir(scratch: &Path, ix: usize) -> PathBuf {
    scratch.join(format!("t{}", ix))
}

/// Resolve every resource to a concrete path, copying input files into
/// the scratch tree. Task outputs live under their task's directory,
/// so output roots are unique within the batch by construction.
fn stage_resources(batch: &Batch, scratch: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let inputs_dir = scratch.join("inputs");
    fs::create_dir_all(&inputs_dir)?;

    let resources = batch.resources();
    let mut paths: Vec<PathBuf> = Vec::with_capacity(resources.len());
    for (ix, res) in resources.iter().enumerate() {
        let p = match res {
            Resource::Input { path } => {
                let name = path
                    .file_name()
                    .and_then(|s| s.to_str())
                    .unwrap_or("input");
                let dst = inputs_dir.join(format!("in{}_{}", ix, name));
                fs::copy(path, &dst).map_err(|e| {
                    anyhow!("could not stage input file {}: {}", path.display(), e)
                })?;
                dst
            }
            Resource::File { task, name } | Resource::GroupRoot { task, name } => {
                task_dir(scratch, task.0).join(&**name)
            }
            Resource::Member { root, ext } => {
                let mut s = paths[root.0].clone().into_os_string();
                s.push(&**ext);
                PathBuf::from(s)
            }
        };
        paths.push(p);
    }
    Ok(paths)
}
