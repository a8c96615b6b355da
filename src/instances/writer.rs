//! Instance file naming and writing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::compiler::{self, TgType};
use crate::errors::CompileError;

/// Extension of every compiled instance file.
pub const INSTANCE_EXT: &str = "lp";

/// One story record from the (external) corpus loader: an identifier,
/// its temporal graph, and the declared grammar.
#[derive(Debug, Clone)]
pub struct StoryRecord {
    pub id: String,
    pub tg: Vec<String>,
    pub tg_type: TgType,
}

/// Derive the stable instance file name for a story identifier.
/// Path separators are replaced so the id cannot escape the target
/// directory.
pub fn instance_file_name(story_id: &str) -> String {
    format!("{}.{INSTANCE_EXT}", story_id.replace(['/', '\\'], "_"))
}

/// Map a QA-instance id like `story500_Q0_0` to its instance file name
/// `story500.lp`. Ids without an underscore map to themselves plus the
/// extension.
pub fn story_key(instance_id: &str) -> String {
    let story_id = instance_id.split('_').next().unwrap_or(instance_id);
    instance_file_name(story_id)
}

/// Write one compiled fact string to a fresh instance file, overwriting
/// any pre-existing file of the same name. Returns the path written.
pub fn write_instance(dir: &Path, story_id: &str, facts: &str) -> Result<PathBuf, CompileError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(instance_file_name(story_id));
    fs::write(&path, facts)?;
    Ok(path)
}

/// Compile every story in a corpus and write one instance file each.
///
/// Grammar errors are local to one story: a failed compilation is
/// logged and skipped, never aborting the batch. Returns the paths
/// written, in input order.
pub fn compile_corpus(records: &[StoryRecord], out_dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
    let mut written = Vec::with_capacity(records.len());

    for record in records {
        match compiler::compile(&record.tg, record.tg_type) {
            Ok(facts) => {
                let path = write_instance(out_dir, &record.id, &facts)?;
                tracing::debug!(id = %record.id, path = %path.display(), "instance written");
                written.push(path);
            }
            Err(err) => {
                tracing::warn!(id = %record.id, error = %err, "compilation failed, skipping story");
            }
        }
    }

    tracing::info!(
        written = written.len(),
        skipped = records.len() - written.len(),
        "corpus compiled"
    );
    Ok(written)
}
