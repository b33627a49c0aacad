use crate::settings::OutputRequest;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub clipboard: bool,
    /// `--hex` and `--password` requests, in command-line order.
    pub requests: Vec<OutputRequest>,
}

impl CliFlags {
    pub fn has_custom_requests(&self) -> bool {
        !self.requests.is_empty()
    }
}
