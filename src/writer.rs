use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::PipelineError;
use crate::model::Envelope;

/// Write `envelope` as pretty-printed UTF-8 JSON, replacing whatever was at `path`.
pub fn write_envelope(path: &Path, envelope: &Envelope) -> Result<(), PipelineError> {
    write_json(path, envelope).map_err(|error| PipelineError::Write {
        path: path.to_path_buf(),
        error,
    })?;
    info!(path = %path.display(), problems = envelope.metadata.total_problems, "Saved");
    Ok(())
}

fn write_json(path: &Path, envelope: &Envelope) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut out, envelope)?;
    out.write_all(b"\n")?;
    out.flush()
}
