//! Run settings.
//!
//! Built from command-line flags only: no config file, no environment.

mod request;

pub use request::{HEX_REQUESTS, Kind, MAX_COUNT, OutputRequest, PASSWORD_REQUESTS};

#[derive(Debug, Clone)]
pub struct Settings {
    pub hex: Vec<OutputRequest>,
    pub passwords: Vec<OutputRequest>,
    pub quiet: bool,
    pub verbose: bool,
    pub to_clipboard: bool,
}

impl Settings {
    /// Replace the fixed tables with caller-chosen requests.
    ///
    /// Both lists are cleared on the first custom request, so `--hex 4` alone
    /// prints a single hex line and no passwords.
    pub fn push_custom(&mut self, request: OutputRequest) {
        if self.uses_fixed_tables() {
            self.hex.clear();
            self.passwords.clear();
        }
        match request.kind {
            Kind::Hex => self.hex.push(request),
            Kind::Password => self.passwords.push(request),
        }
    }

    /// True while the request lists are the fixed tables.
    pub fn uses_fixed_tables(&self) -> bool {
        self.hex == HEX_REQUESTS && self.passwords == PASSWORD_REQUESTS
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hex: HEX_REQUESTS.to_vec(),
            passwords: PASSWORD_REQUESTS.to_vec(),
            quiet: false,
            verbose: false,
            to_clipboard: false,
        }
    }
}
