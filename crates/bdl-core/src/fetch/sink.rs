//! Output file that is only created once the first body byte arrives.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub(super) struct BodySink {
    path: PathBuf,
    file: Option<BufWriter<File>>,
    written: u64,
}

impl BodySink {
    pub(super) fn new(path: PathBuf) -> Self {
        Self {
            path,
            file: None,
            written: 0,
        }
    }

    pub(super) fn path(&self) -> &Path {
        &self.path
    }

    /// True once the target file has been created (or truncated).
    pub(super) fn created(&self) -> bool {
        self.file.is_some()
    }

    pub(super) fn written(&self) -> u64 {
        self.written
    }

    fn open(&mut self) -> io::Result<&mut BufWriter<File>> {
        let file = match self.file.take() {
            Some(f) => f,
            None => BufWriter::new(File::create(&self.path)?),
        };
        Ok(self.file.insert(file))
    }

    pub(super) fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.open()?.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Creates the file if the body was empty, then flushes it to the OS.
    pub(super) fn finish(&mut self) -> io::Result<()> {
        self.open()?.flush()
    }

    /// Closes and deletes a partially written file.
    pub(super) fn discard(mut self) -> io::Result<()> {
        if self.file.take().is_some() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
