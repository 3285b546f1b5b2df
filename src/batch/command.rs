use super::ResourceId;

/// A shell command with symbolic resource references.
///
/// Literal fragments are copied through unchanged; resource fragments
/// are substituted with concrete paths by the backend when the task
/// runs.
#[derive(Debug, Default)]
pub struct Command {
    frags: Vec<Frag>,
}

#[derive(Debug)]
enum Frag {
    Lit(Box<str>),
    Res(ResourceId),
}

impl Command {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lit<S: AsRef<str>>(mut self, s: S) -> Self {
        self.frags.push(Frag::Lit(Box::from(s.as_ref())));
        self
    }

    pub fn res(mut self, r: ResourceId) -> Self {
        self.frags.push(Frag::Res(r));
        self
    }

    /// Resources the command mentions, in order of appearance
    pub fn resources(&self) -> impl Iterator<Item = ResourceId> + '_ {
        self.frags.iter().filter_map(|f| match f {
            Frag::Res(r) => Some(*r),
            Frag::Lit(_) => None,
        })
    }

    /// Substitute resource references with concrete paths
    pub fn render<F>(&self, resolve: F) -> String
    where
        F: Fn(ResourceId) -> String,
    {
        let mut s = String::new();
        for f in &self.frags {
            match f {
                Frag::Lit(l) => s.push_str(l),
                Frag::Res(r) => s.push_str(&resolve(*r)),
            }
        }
        s
    }
}
