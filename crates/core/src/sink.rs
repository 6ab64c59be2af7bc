//! Write a stream of variants to a destination.
use crate::{
    progress::{ProgressBar, PROGRESS_INTERVAL},
    Error, Result,
};
use file_guard::{FileGuard, Lock};
use std::{
    collections::BTreeSet,
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

/// Canonical paths of output files held by live writers.
///
/// Advisory locks are owned by the process so a second writer in
/// the same process would not be refused by the lock alone.
static OPEN_OUTPUTS: Mutex<BTreeSet<PathBuf>> = Mutex::new(BTreeSet::new());

/// Outcome of writing a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    /// Number of items written.
    pub emitted: u64,
    /// Whether writing stopped because of the emission limit.
    pub limit_reached: bool,
}

/// Exclusive hold on an output file.
struct OutputLock {
    canonical: PathBuf,
    #[allow(dead_code)]
    guard: FileGuard<Box<File>>,
}

impl Drop for OutputLock {
    fn drop(&mut self) {
        OPEN_OUTPUTS
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.canonical);
    }
}

/// Buffered line writer with an optional emission limit.
///
/// Items are written one per line terminated by `\n`. The writer
/// stops pulling from the stream as soon as the limit is reached.
pub struct SinkWriter<W: Write> {
    out: BufWriter<W>,
    path: Option<PathBuf>,
    limit: Option<u64>,
    #[allow(dead_code)]
    lock: Option<OutputLock>,
}

impl SinkWriter<File> {
    /// Open a file for exclusive writing and truncate it.
    ///
    /// Fails when another writer holds the file. The lock is
    /// released and the file closed when the writer is dropped,
    /// whether or not writing succeeded.
    pub fn create(path: impl AsRef<Path>, limit: Option<u64>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let output_error = |source: io::Error| Error::Output {
            path: path.clone(),
            source,
        };

        let mut open = OPEN_OUTPUTS
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Ok(canonical) = fs::canonicalize(&path) {
            if open.contains(&canonical) {
                return Err(output_error(in_use()));
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(output_error)?;
        let guard = file_guard::try_lock(
            Box::new(file.try_clone().map_err(output_error)?),
            Lock::Exclusive,
            0,
            1,
        )
        .map_err(|e| match e.kind() {
            io::ErrorKind::WouldBlock => output_error(in_use()),
            _ => output_error(e),
        })?;
        file.set_len(0).map_err(output_error)?;

        let canonical = fs::canonicalize(&path).map_err(output_error)?;
        open.insert(canonical.clone());
        drop(open);

        tracing::debug!(path = %path.display(), "sink::create");
        Ok(Self {
            out: BufWriter::new(file),
            path: Some(path),
            limit,
            lock: Some(OutputLock { canonical, guard }),
        })
    }
}

fn in_use() -> io::Error {
    io::Error::new(
        io::ErrorKind::WouldBlock,
        "file is locked by another writer",
    )
}

impl<W: Write> SinkWriter<W> {
    /// Write to an arbitrary writer such as stdout.
    pub fn new(out: W, limit: Option<u64>) -> Self {
        Self {
            out: BufWriter::new(out),
            path: None,
            limit,
            lock: None,
        }
    }

    /// Path of the destination file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write every item until the stream ends or the limit is hit.
    ///
    /// Progress is updated every [PROGRESS_INTERVAL] items and once
    /// more when writing stops.
    pub fn write_all<I>(
        &mut self,
        items: I,
        progress: &mut ProgressBar,
    ) -> Result<WriteSummary>
    where
        I: IntoIterator<Item = String>,
    {
        let mut emitted = 0u64;
        let mut last_update = 0u64;
        let mut limit_reached = false;

        for item in items {
            self.write_line(&item).map_err(|e| self.error(e))?;
            emitted += 1;

            if emitted - last_update >= PROGRESS_INTERVAL {
                progress.update(emitted)?;
                last_update = emitted;
            }

            if self.limit.is_some_and(|limit| emitted >= limit) {
                limit_reached = true;
                break;
            }
        }

        progress.finish(emitted)?;
        self.out.flush().map_err(|e| self.error(e))?;

        tracing::debug!(
            emitted = %emitted,
            limit_reached = %limit_reached,
            "sink::write_all",
        );

        Ok(WriteSummary {
            emitted,
            limit_reached,
        })
    }

    /// Flush buffered output and return the inner writer.
    pub fn into_inner(self) -> Result<W> {
        let Self { out, path, .. } = self;
        out.into_inner().map_err(|e| {
            let source = e.into_error();
            match path {
                Some(path) => Error::Output { path, source },
                None => Error::Io(source),
            }
        })
    }

    fn write_line(&mut self, item: &str) -> io::Result<()> {
        self.out.write_all(item.as_bytes())?;
        self.out.write_all(b"\n")
    }

    fn error(&self, source: io::Error) -> Error {
        match &self.path {
            Some(path) => Error::Output {
                path: path.clone(),
                source,
            },
            None => Error::Io(source),
        }
    }
}
