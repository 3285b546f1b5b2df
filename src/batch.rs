use std::path::{Path, PathBuf};

pub mod backend;
mod command;
mod resource;
mod task;

pub use command::Command;
pub use resource::{ResourceGroup, ResourceId};
pub use task::{Task, TaskId};

use resource::Resource;

/// A declarative task graph.
///
/// Tasks communicate exclusively through declared file resources; a
/// task referencing a resource produced by another task depends on it.
/// The graph is built in topological order (a command can only mention
/// resources that already exist) and handed as a whole to a
/// [`backend::Backend`] for execution.
pub struct Batch {
    name: Box<str>,
    tasks: Vec<Task>,
    resources: Vec<Resource>,
    outputs: Vec<(ResourceId, PathBuf)>,
}

impl Batch {
    pub fn new(name: &str) -> Self {
        Self {
            name: Box::from(name),
            tasks: Vec::new(),
            resources: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn n_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn outputs(&self) -> &[(ResourceId, PathBuf)] {
        &self.outputs
    }

    pub(crate) fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub(crate) fn resource(&self, id: ResourceId) -> &Resource {
        &self.resources[id.0]
    }

    /// Register an existing file as an input to the graph
    pub fn read_input<P: AsRef<Path>>(&mut self, path: P) -> ResourceId {
        let path = path.as_ref().to_owned();
        debug!("input file {}", path.display());
        self.add_resource(Resource::Input { path })
    }

    /// Start a new task at the end of the graph
    pub fn new_task(&mut self, name: &str) -> TaskBuilder<'_> {
        let ix = self.tasks.len();
        debug!("new task '{}' ({})", name, ix);
        self.tasks.push(Task::new(name));
        TaskBuilder { batch: self, ix }
    }

    /// Request that a resource be copied to a durable location once the
    /// graph has executed successfully. Everything else is transient.
    pub fn write_output<P: AsRef<Path>>(&mut self, res: ResourceId, path: P) {
        self.outputs.push((res, path.as_ref().to_owned()));
    }

    /// Task producing a resource, if any (inputs have no producer)
    pub(crate) fn producer(&self, id: ResourceId) -> Option<TaskId> {
        let mut id = id;
        loop {
            match &self.resources[id.0] {
                Resource::Input { .. } => return None,
                Resource::File { task, .. } | Resource::GroupRoot { task, .. } => {
                    return Some(*task)
                }
                Resource::Member { root, .. } => id = *root,
            }
        }
    }

    /// Tasks whose outputs a task's command mentions (excluding itself)
    pub fn deps(&self, task: TaskId) -> Vec<TaskId> {
        let mut v = Vec::new();
        if let Some(cmd) = self.tasks[task.0].command() {
            for rid in cmd.resources() {
                if let Some(t) = self.producer(rid) {
                    if t != task && !v.contains(&t) {
                        v.push(t)
                    }
                }
            }
        }
        v
    }

    /// Check graph invariants before execution.
    ///
    /// Insertion order must be a valid execution order, a task with
    /// declared outputs must have a command to produce them, and
    /// durable outputs must be single files (a group root names three
    /// or more files at once).
    pub fn validate(&self) -> anyhow::Result<()> {
        for (ix, task) in self.tasks.iter().enumerate() {
            match task.command() {
                Some(cmd) => {
                    for rid in cmd.resources() {
                        if let Some(t) = self.producer(rid) {
                            if t.0 > ix {
                                bail!(
                                    "task '{}' references an output of later task '{}'",
                                    task.name(),
                                    self.tasks[t.0].name()
                                );
                            }
                        }
                    }
                }
                None => {
                    if !task.outputs().is_empty() {
                        bail!(
                            "task '{}' declares outputs but has no command to produce them",
                            task.name()
                        );
                    }
                }
            }
        }
        for (rid, path) in &self.outputs {
            if matches!(self.resource(*rid), Resource::GroupRoot { .. }) {
                bail!(
                    "cannot copy a resource group root to {}; address a group member instead",
                    path.display()
                );
            }
        }
        Ok(())
    }

    fn add_resource(&mut self, r: Resource) -> ResourceId {
        let id = ResourceId(self.resources.len());
        self.resources.push(r);
        id
    }
}

/// Configures a task in place; [`TaskBuilder::command`] finishes it
pub struct TaskBuilder<'a> {
    batch: &'a mut Batch,
    ix: usize,
}

impl TaskBuilder<'_> {
    pub fn image(self, image: &str) -> Self {
        self.batch.tasks[self.ix].set_image(image);
        self
    }

    pub fn cpu(self, n: u32) -> Self {
        self.batch.tasks[self.ix].set_cpu(n);
        self
    }

    pub fn memory_mb(self, mb: usize) -> Self {
        self.batch.tasks[self.ix].set_memory_mb(mb);
        self
    }

    /// Declare a single output file of this task
    pub fn output_file(&mut self, name: &str) -> ResourceId {
        let rid = self.batch.add_resource(Resource::File {
            task: TaskId(self.ix),
            name: Box::from(name),
        });
        self.batch.tasks[self.ix].add_output(rid);
        rid
    }

    /// Declare a group of output files sharing a common path root.
    ///
    /// Members are given as (logical name, file-name extension) pairs;
    /// each member resolves to the root path with its extension
    /// appended. The root itself can be passed to tools that expect a
    /// file-set prefix.
    pub fn output_group(&mut self, name: &str, members: &[(&str, &str)]) -> ResourceGroup {
        let root = self.batch.add_resource(Resource::GroupRoot {
            task: TaskId(self.ix),
            name: Box::from(name),
        });
        self.batch.tasks[self.ix].add_output(root);
        let members = members
            .iter()
            .map(|(m, ext)| {
                let rid = self.batch.add_resource(Resource::Member {
                    root,
                    ext: Box::from(*ext),
                });
                (Box::from(*m), rid)
            })
            .collect();
        ResourceGroup::new(root, members)
    }

    pub fn command(self, cmd: Command) -> TaskId {
        self.batch.tasks[self.ix].set_command(cmd);
        TaskId(self.ix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deps_follow_resource_references() {
        let mut batch = Batch::new("test");
        let input = batch.read_input("in.txt");

        let mut t1 = batch.new_task("first");
        let out1 = t1.output_file("out");
        let first = t1.command(Command::new().lit("cat ").res(input).lit(" > ").res(out1));

        let mut t2 = batch.new_task("second");
        let out2 = t2.output_file("out");
        let second = t2.command(Command::new().lit("cp ").res(out1).lit(" ").res(out2));

        assert!(batch.deps(first).is_empty());
        assert_eq!(batch.deps(second), vec![first]);
        assert!(batch.validate().is_ok());
    }

    #[test]
    fn group_members_resolve_to_their_producer() {
        let mut batch = Batch::new("test");
        let mut t = batch.new_task("producer");
        let grp = t.output_group("ofile", &[("bed", ".bed"), ("bim", ".bim")]);
        let root = grp.root();
        let bed = grp.member("bed");
        let id = t.command(Command::new().lit("touch ").res(bed));

        assert_eq!(batch.producer(root), Some(id));
        assert_eq!(batch.producer(bed), Some(id));
    }

    #[test]
    fn validate_rejects_output_without_command() {
        let mut batch = Batch::new("test");
        let mut t = batch.new_task("silent");
        let _out = t.output_file("out");
        drop(t);
        assert!(batch.validate().is_err());
    }

    #[test]
    fn validate_rejects_group_root_write_output() {
        let mut batch = Batch::new("test");
        let mut t = batch.new_task("producer");
        let grp = t.output_group("ofile", &[("bed", ".bed")]);
        let root = grp.root();
        t.command(Command::new().lit("touch ").res(grp.member("bed")));
        batch.write_output(root, "out.bed");
        assert!(batch.validate().is_err());
    }
}
