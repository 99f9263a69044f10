#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub urandom: bool,
    pub clipboard: bool,
    pub plain: bool,
    pub info: bool,
    pub quiet: bool,
    pub length: Option<usize>,
    pub check: Option<String>,
}

impl CliFlags {
    /// Flags that change what gets generated or where it goes.
    pub fn has_output_args(&self) -> bool {
        self.length.is_some() || self.clipboard || self.plain || self.info
    }
}
