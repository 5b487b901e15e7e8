use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::{Result, SolverError};

/// Output file opened up front, so an unwritable path fails before any solving
pub struct SolutionWriter {
    path: PathBuf,
    file: File,
}

impl SolutionWriter {
    /// Create (or truncate) the output file
    pub async fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .await
            .map_err(|source| SolverError::OutputUnavailable {
                path: path.clone(),
                source,
            })?;

        Ok(Self { path, file })
    }

    /// Write the words in dictionary format and flush
    pub async fn write(mut self, words: &[&str]) -> Result<()> {
        let rendered = render(words);
        let result = async {
            self.file.write_all(rendered.as_bytes()).await?;
            self.file.flush().await
        }
        .await;

        result.map_err(|source| SolverError::OutputUnavailable {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!("Wrote {} words to {:?}", words.len(), self.path);
        Ok(())
    }
}

/// One word per line, each newline-terminated
pub fn render(words: &[&str]) -> String {
    words.iter().fold(String::new(), |mut out, word| {
        out.push_str(word);
        out.push('\n');
        out
    })
}
