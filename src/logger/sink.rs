use crate::error::{Error, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Where a logger's lines go.
///
/// Both variants share [`write_and_flush`]; they differ only in how long the
/// file handle lives.
#[derive(Debug)]
pub(crate) enum Sink {
    /// Open, share-lock, write, flush, and close the file on every call.
    PerWrite,
    /// Keep one exclusively locked handle, opened on first use.
    Held(Option<File>),
}

impl Sink {
    pub(crate) fn new(use_stream: bool) -> Self {
        if use_stream {
            Sink::Held(None)
        } else {
            Sink::PerWrite
        }
    }

    /// Opens the held handle now instead of on the first write.
    pub(crate) fn open_eagerly(&mut self, path: &Path) -> Result<()> {
        if let Sink::Held(writer @ None) = self {
            *writer = Some(open_locked(path, Lock::Exclusive)?);
            debug!(path = %path.display(), "opened held log stream");
        }
        Ok(())
    }

    pub(crate) fn write(&mut self, path: &Path, line: &str) -> Result<()> {
        match self {
            Sink::PerWrite => {
                let mut file = open_locked(path, Lock::Shared)?;
                write_and_flush(&mut file, path, line)?;
                close(file, path)
            }
            Sink::Held(writer) => {
                let file = match *writer {
                    Some(ref mut file) => file,
                    None => {
                        let file = open_locked(path, Lock::Exclusive)?;
                        debug!(path = %path.display(), "opened held log stream");
                        writer.insert(file)
                    }
                };
                write_and_flush(file, path, line)
            }
        }
    }

    /// Flushes and closes the held handle, if there is one.
    ///
    /// The handle is taken out before closing, so a second call is a no-op.
    pub(crate) fn close(&mut self, path: &Path) -> Result<()> {
        match self {
            Sink::Held(writer) => match writer.take() {
                Some(file) => {
                    let result = close(file, path);
                    debug!(path = %path.display(), "closed held log stream");
                    result
                }
                None => Ok(()),
            },
            Sink::PerWrite => Ok(()),
        }
    }
}

/// How a freshly opened handle locks the file.
///
/// Per-write handles share the file with each other and only conflict with
/// a held stream, which takes it exclusively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lock {
    Shared,
    Exclusive,
}

fn open_locked(path: &Path, lock: Lock) -> Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| Error::log_write(path, e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::log_write(path, e))?;

    let locked = match lock {
        Lock::Shared => FileExt::try_lock_shared(&file),
        Lock::Exclusive => FileExt::try_lock_exclusive(&file),
    };

    match locked {
        Ok(()) => {
            // Windows denies writes under a shared lock, even to its holder,
            // so there the shared lock only checks for a held stream.
            #[cfg(windows)]
            if lock == Lock::Shared {
                FileExt::unlock(&file).map_err(|e| Error::log_write(path, e))?;
            }
            Ok(file)
        }
        Err(e) if is_contended(&e) => Err(Error::FileLocked {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(Error::log_write(path, e)),
    }
}

fn write_and_flush(file: &mut File, path: &Path, line: &str) -> Result<()> {
    file.write_all(line.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| Error::log_write(path, e))
}

fn close(mut file: File, path: &Path) -> Result<()> {
    file.flush().map_err(|e| Error::log_write(path, e))?;
    FileExt::unlock(&file).map_err(|e| Error::log_write(path, e))
}

fn is_contended(error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::WouldBlock
        || error.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}
