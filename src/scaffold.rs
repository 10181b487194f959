use std::{
    ffi::{OsStr, OsString},
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf, MAIN_SEPARATOR_STR},
};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::{config::ScaffoldConfig, project::ProjectName};

/// Token replaced by the project name in template file names and contents.
pub const PLACEHOLDER: &str = "prototype";

#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub files: Vec<PathBuf>, // generated files, in processing order
}

impl ScaffoldReport {
    pub fn format_summary(&self) -> String {
        format!(
            "{}: {} file{}",
            self.project_dir.display(),
            self.files.len(),
            if self.files.len() == 1 { "" } else { "s" }
        )
    }
}

#[derive(Debug, Clone)]
pub struct Scaffolder {
    config: ScaffoldConfig,
}

impl Scaffolder {
    pub fn new(config: ScaffoldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Creates `target_dir/<name>` and writes a copy of every prototype file
    /// into it with the placeholder replaced by `name`.
    ///
    /// Fails if the project directory already exists. Nothing is cleaned up
    /// when a later step fails, files written so far stay on disk.
    pub fn make_example(&self, name: &ProjectName) -> Result<ScaffoldReport> {
        let project_dir = nested_path(&self.config.target_dir, name.as_str());

        fs::create_dir(&project_dir).with_context(|| {
            format!("failed to create project directory {}", project_dir.display())
        })?;
        tracing::info!(
            project = %name,
            path = %project_dir.display(),
            "created project directory"
        );

        let mut files = Vec::new();

        // flat listing only, sorted so runs are reproducible
        for entry in WalkDir::new(&self.config.prototype_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| {
                format!(
                    "failed to list prototype directory {}",
                    self.config.prototype_dir.display()
                )
            })?;

            if !entry.file_type().is_file() {
                tracing::warn!(
                    path = %entry.path().display(),
                    "skipping non-file prototype entry"
                );
                continue;
            }

            let dest_name = substitute_file_name(entry.file_name(), name)?;
            let dest = nested_path(&project_dir, dest_name);
            render_file(entry.path(), &dest, name)?;
            tracing::debug!(
                from = %entry.path().display(),
                to = %dest.display(),
                "generated file"
            );

            files.push(dest);
        }

        let report = ScaffoldReport { project_dir, files };
        tracing::info!(
            project = %name,
            summary = %report.format_summary(),
            "scaffold complete"
        );

        Ok(report)
    }
}

/// Plain substring replacement: case-sensitive, no word boundaries.
pub fn substitute(text: &str, name: &ProjectName) -> String {
    text.replace(PLACEHOLDER, name.as_str())
}

/// Byte-level `substitute` for text that is not guaranteed to be UTF-8.
pub fn substitute_bytes(text: &[u8], name: &ProjectName) -> Vec<u8> {
    if let Ok(text) = std::str::from_utf8(text) {
        return substitute(text, name).into_bytes();
    }

    let from = PLACEHOLDER.as_bytes();
    let mut out = Vec::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.windows(from.len()).position(|w| w == from) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(name.as_str().as_bytes());
        rest = &rest[pos + from.len()..];
    }
    out.extend_from_slice(rest);

    out
}

#[cfg(unix)]
fn substitute_file_name(file_name: &OsStr, name: &ProjectName) -> Result<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    Ok(OsString::from_vec(substitute_bytes(file_name.as_bytes(), name)))
}

#[cfg(not(unix))]
fn substitute_file_name(file_name: &OsStr, name: &ProjectName) -> Result<OsString> {
    let file_name = file_name
        .to_str()
        .with_context(|| format!("prototype file name is not unicode: {file_name:?}"))?;

    Ok(substitute(file_name, name).into())
}

/// Appends `/name` to `parent` textually. Unlike `Path::join`, an absolute
/// `name` still lands under `parent`.
fn nested_path(parent: &Path, name: impl AsRef<OsStr>) -> PathBuf {
    let mut path = parent.as_os_str().to_os_string();
    path.push(MAIN_SEPARATOR_STR);
    path.push(name);

    PathBuf::from(path)
}

/// Copies `source` to `dest` one line at a time, substituting each line.
/// Lines are raw bytes with their terminators, so non-UTF-8 text and `\r\n`
/// endings pass through untouched.
fn render_file(source: &Path, dest: &Path, name: &ProjectName) -> Result<()> {
    let mut reader = BufReader::new(
        File::open(source)
            .with_context(|| format!("failed to open template {}", source.display()))?,
    );
    let mut writer = BufWriter::new(
        File::create(dest).with_context(|| format!("failed to create {}", dest.display()))?,
    );

    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .with_context(|| format!("failed to read template {}", source.display()))?;
        if read == 0 {
            break;
        }

        writer
            .write_all(&substitute_bytes(&line, name))
            .with_context(|| format!("failed to write {}", dest.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", dest.display()))
}
