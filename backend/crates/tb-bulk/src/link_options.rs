/// Options for a link batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOptions {
    /// Read each source issue back and confirm the link exists
    pub verify: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self { verify: true }
    }
}
