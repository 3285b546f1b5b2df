use std::path::PathBuf;

use super::TaskId;

/// Handle to a file resource within a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub(crate) usize);

/// A file-shaped artifact flowing between tasks.
///
/// Concrete paths exist only at execution time; until then resources
/// are addressed symbolically through their [`ResourceId`].
#[derive(Debug)]
pub(crate) enum Resource {
    /// Existing file staged into the batch at the start of the run
    Input { path: PathBuf },
    /// Single file produced by a task
    File { task: TaskId, name: Box<str> },
    /// Common path root of a group of files produced by one task
    GroupRoot { task: TaskId, name: Box<str> },
    /// Group member, resolved as the root path plus an extension
    Member { root: ResourceId, ext: Box<str> },
}

/// A named bundle of output files sharing a common path root
pub struct ResourceGroup {
    root: ResourceId,
    members: Vec<(Box<str>, ResourceId)>,
}

impl ResourceGroup {
    pub(super) fn new(root: ResourceId, members: Vec<(Box<str>, ResourceId)>) -> Self {
        Self { root, members }
    }

    pub fn root(&self) -> ResourceId {
        self.root
    }

    /// Look up a member by its logical name.
    ///
    /// Panics on an unknown name: groups are declared with a fixed
    /// member list, so a miss is a programming error, not a runtime
    /// condition.
    pub fn member(&self, name: &str) -> ResourceId {
        self.members
            .iter()
            .find(|(m, _)| &**m == name)
            .map(|(_, r)| *r)
            .unwrap_or_else(|| panic!("No member '{}' in resource group", name))
    }
}
