//! Destinations for generated source files

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use withtostring_core::model::source_path_for;
use withtostring_core::{GeneratedArtifact, GenerationError, GenerationResult};

/// An open source file.
///
/// The underlying handle is released when the value is dropped, whether or
/// not writing succeeded.
pub struct SourceFile<'a> {
    name: String,
    writer: Box<dyn Write + 'a>,
}

impl<'a> SourceFile<'a> {
    pub fn new(name: impl Into<String>, writer: Box<dyn Write + 'a>) -> Self {
        Self {
            name: name.into(),
            writer,
        }
    }

    /// Display name used in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Write for SourceFile<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Creates source files for generated types
pub trait Filer {
    /// Open a new source file for the type `qualified_name`, replacing any
    /// previous content.
    fn create_source_file(&mut self, qualified_name: &str) -> GenerationResult<SourceFile<'_>>;

    /// Drop whatever a failed write left behind for `qualified_name`
    fn discard(&mut self, _qualified_name: &str) {}
}

/// Write an artifact through a filer.
///
/// Creation failures map to [`GenerationError::Create`] naming the type;
/// write or flush failures map to [`GenerationError::Write`] naming the file,
/// and the partial file is discarded.
pub fn write_artifact<F: Filer + ?Sized>(
    filer: &mut F,
    artifact: &GeneratedArtifact,
) -> GenerationResult<()> {
    let mut file = filer.create_source_file(&artifact.qualified_name)?;
    let result = file
        .write_all(artifact.body.as_bytes())
        .and_then(|()| file.flush());
    if let Err(source) = result {
        let name = file.name().to_string();
        drop(file);
        filer.discard(&artifact.qualified_name);
        return Err(GenerationError::Write { file: name, source });
    }
    Ok(())
}

/// Writes `<root>/<package path>/<Simple>.java` on disk
#[derive(Debug, Clone)]
pub struct DirectoryFiler {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectoryFiler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths of files written so far; files discarded after a failed write
    /// are not listed
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Where the source for `qualified_name` will be written
    pub fn path_for(&self, qualified_name: &str) -> PathBuf {
        self.root.join(source_path_for(qualified_name))
    }
}

impl Filer for DirectoryFiler {
    fn create_source_file(&mut self, qualified_name: &str) -> GenerationResult<SourceFile<'_>> {
        let path = self.path_for(qualified_name);

        let open = || -> io::Result<fs::File> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(&path)
        };
        let file = open().map_err(|source| GenerationError::Create {
            file: qualified_name.to_string(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "created source file");
        let name = path.display().to_string();
        if !self.written.contains(&path) {
            self.written.push(path);
        }
        Ok(SourceFile::new(name, Box::new(BufWriter::new(file))))
    }

    fn discard(&mut self, qualified_name: &str) {
        let path = self.path_for(qualified_name);
        self.written.retain(|p| p != &path);
        match fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "removed partial source file"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(
                path = %path.display(),
                error = %err,
                "could not remove partial source file"
            ),
        }
    }
}

/// Keeps generated sources in memory, keyed by qualified type name
#[derive(Debug, Default, Clone)]
pub struct MemoryFiler {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryFiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of a generated file, if it exists and is valid UTF-8
    pub fn get(&self, qualified_name: &str) -> Option<&str> {
        self.files
            .get(qualified_name)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Qualified names of all files, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Filer for MemoryFiler {
    fn create_source_file(&mut self, qualified_name: &str) -> GenerationResult<SourceFile<'_>> {
        let buffer = self.files.entry(qualified_name.to_string()).or_default();
        buffer.clear();
        Ok(SourceFile::new(qualified_name, Box::new(buffer)))
    }

    fn discard(&mut self, qualified_name: &str) {
        self.files.remove(qualified_name);
    }
}
