use crate::domain::ports::FileSink;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// CLI-mode sink that writes artifacts under a base directory.
#[derive(Debug, Clone)]
pub struct LocalSink {
    base_path: String,
}

impl LocalSink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl FileSink for LocalSink {
    async fn save_file(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
