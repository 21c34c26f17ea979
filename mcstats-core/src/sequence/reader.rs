use crate::sequence::{LogFileRef, SequenceError};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Line iterator over one log file, plain or gzipped.
///
/// Owns the only open handle to the file; dropping it closes the file.
/// Lines are yielded without their terminator, invalid UTF-8 is replaced
/// lossily, and the first read error ends the iteration.
pub struct LogLines {
    path: PathBuf,
    reader: Box<dyn BufRead>,
    buf: Vec<u8>,
    done: bool,
}

/// Opens `file` for line-by-line reading, decompressing when needed.
pub fn open_lines(file: &LogFileRef) -> Result<LogLines, SequenceError> {
    open_path(&file.path, file.compressed)
}

pub(crate) fn open_path(path: &Path, compressed: bool) -> Result<LogLines, SequenceError> {
    let handle = File::open(path).map_err(|e| SequenceError::open(path, e))?;

    let reader: Box<dyn BufRead> = if compressed {
        Box::new(BufReader::new(MultiGzDecoder::new(handle)))
    } else {
        Box::new(BufReader::new(handle))
    };

    Ok(LogLines {
        path: path.to_path_buf(),
        reader,
        buf: Vec::new(),
        done: false,
    })
}

impl Iterator for LogLines {
    type Item = Result<String, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => {
                self.done = true;
                Some(Err(SequenceError::read(&self.path, e)))
            }
        }
    }
}
