use super::{Command, ResourceId};

/// Position of a task within its batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskId(pub(crate) usize);

/// A deferred unit of work: a shell command plus the resources it
/// declares and the execution environment it requests. Nothing runs
/// until the batch is handed to a backend.
pub struct Task {
    name: Box<str>,
    image: Option<Box<str>>,
    cpu: u32,
    memory_mb: Option<usize>,
    command: Option<Command>,
    outputs: Vec<ResourceId>,
}

impl Task {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: Box::from(name),
            image: None,
            cpu: 1,
            memory_mb: None,
            command: None,
            outputs: Vec::new(),
        }
    }

    pub(super) fn set_image(&mut self, image: &str) {
        self.image = Some(Box::from(image));
    }

    pub(super) fn set_cpu(&mut self, n: u32) {
        self.cpu = n;
    }

    pub(super) fn set_memory_mb(&mut self, mb: usize) {
        self.memory_mb = Some(mb);
    }

    pub(super) fn set_command(&mut self, cmd: Command) {
        self.command = Some(cmd);
    }

    pub(super) fn add_output(&mut self, r: ResourceId) {
        self.outputs.push(r);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn cpu(&self) -> u32 {
        self.cpu
    }

    pub fn memory_mb(&self) -> Option<usize> {
        self.memory_mb
    }

    pub fn command(&self) -> Option<&Command> {
        self.command.as_ref()
    }

    pub fn outputs(&self) -> &[ResourceId] {
        &self.outputs
    }
}
