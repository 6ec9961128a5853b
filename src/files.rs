use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::util::Fallible;

/// Reads a source file into its lines, without line terminators.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Fallible<Vec<String>> {
    let source = read_file_string(path)?;
    Ok(source.lines().map(|line| line.to_owned()).collect())
}

pub fn read_file_string<P: AsRef<Path>>(path: P) -> Fallible<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map_err(|err| format!("Unable to read file \"{}\": {}", path.display(), err).into())
}

/// Creates (or truncates) the output file, creating missing parent directories.
pub fn create_output<P: AsRef<Path>>(path: P) -> Fallible<BufWriter<File>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!(
                    "Unable to create output directory \"{}\": {}",
                    parent.display(),
                    err
                )
            })?;
        }
    }
    let file = File::create(path).map_err(|err| {
        format!("Unable to create output file \"{}\": {}", path.display(), err)
    })?;
    Ok(BufWriter::new(file))
}
