//! Chunk-by-chunk delivery of streamed response bodies.
//!
//! A [`ChunkHook`] is notified once per fragment, in arrival order, on the
//! thread running the read loop. Nothing is buffered or reassembled between
//! the reader and the hook.

use std::io::{self, ErrorKind, Read};

use crate::error::Result;

/// Receives the fragments of a chunked response.
pub trait ChunkHook {
    fn process(&mut self, chunk: &[u8]);
}

impl<F> ChunkHook for F
where
    F: FnMut(&[u8]),
{
    fn process(&mut self, chunk: &[u8]) {
        self(chunk)
    }
}

/// Hook that keeps a copy of every chunk it is handed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChunkCollector {
    pub chunks: Vec<Vec<u8>>,
}

impl ChunkCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// All chunks concatenated.
    pub fn concat(&self) -> Vec<u8> {
        self.chunks.concat()
    }
}

impl ChunkHook for ChunkCollector {
    fn process(&mut self, chunk: &[u8]) {
        self.chunks.push(chunk.to_vec());
    }
}

/// Totals reported by [`pump_chunks`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChunkStats {
    pub chunks: usize,
    pub bytes: usize,
}

/// Read `reader` to EOF, handing each non-empty read to `hook`.
///
/// At most `buf_size` bytes are delivered per call. Read failures surface
/// as `ApiError::Io`; chunks already delivered stay delivered.
pub fn pump_chunks<R, H>(mut reader: R, hook: &mut H, buf_size: usize) -> Result<ChunkStats>
where
    R: Read,
    H: ChunkHook + ?Sized,
{
    if buf_size == 0 {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "chunk buffer size must be non-zero",
        )
        .into());
    }

    let mut buf = vec![0u8; buf_size];
    let mut stats = ChunkStats::default();
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        hook.process(&buf[..n]);
        stats.chunks += 1;
        stats.bytes += n;
    }

    tracing::debug!(chunks = stats.chunks, bytes = stats.bytes, "chunked body drained");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn io_kind(err: ApiError) -> ErrorKind {
        match err {
            ApiError::Io(e) => e.kind(),
            other => panic!("expected ApiError::Io, got {other:?}"),
        }
    }

    /// Yields each scripted piece from a separate `read` call.
    struct Scripted {
        pieces: Vec<io::Result<Vec<u8>>>,
    }

    impl Read for Scripted {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pieces.is_empty() {
                return Ok(0);
            }
            let piece = self.pieces.remove(0)?;
            buf[..piece.len()].copy_from_slice(&piece);
            Ok(piece.len())
        }
    }

    #[test]
    fn hook_sees_each_chunk_in_order() {
        let mut reader = Scripted {
            pieces: vec![Ok(b"a".to_vec()), Ok(b"b".to_vec()), Ok(b"c".to_vec())],
        };
        let mut hook = ChunkCollector::new();
        let stats = pump_chunks(&mut reader, &mut hook, 16).unwrap();

        assert_eq!(hook.chunks, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
        assert_eq!(stats, ChunkStats { chunks: 3, bytes: 3 });
    }

    #[test]
    fn direct_process_calls_are_recorded_verbatim() {
        let mut hook = ChunkCollector::new();
        for piece in ["a", "b", "c"] {
            hook.process(piece.as_bytes());
        }
        assert_eq!(hook.chunks.len(), 3);
        assert_eq!(hook.concat(), b"abc");
    }

    #[test]
    fn closures_are_hooks() {
        let mut seen = String::new();
        let mut hook = |chunk: &[u8]| seen.push_str(std::str::from_utf8(chunk).unwrap());
        pump_chunks(&b"hello world"[..], &mut hook, 4).unwrap();
        assert_eq!(seen, "hello world");
    }

    #[test]
    fn buffer_size_bounds_chunk_length() {
        let mut hook = ChunkCollector::new();
        let stats = pump_chunks(&b"abcdefg"[..], &mut hook, 3).unwrap();
        assert_eq!(hook.chunks, vec![b"abc".to_vec(), b"def".to_vec(), b"g".to_vec()]);
        assert_eq!(stats.bytes, 7);
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let mut reader = Scripted {
            pieces: vec![
                Ok(b"x".to_vec()),
                Err(io::Error::from(ErrorKind::Interrupted)),
                Ok(b"y".to_vec()),
            ],
        };
        let mut hook = ChunkCollector::new();
        pump_chunks(&mut reader, &mut hook, 8).unwrap();
        assert_eq!(hook.concat(), b"xy");
    }

    #[test]
    fn read_errors_stop_the_pump() {
        let mut reader = Scripted {
            pieces: vec![Ok(b"x".to_vec()), Err(io::Error::from(ErrorKind::ConnectionReset))],
        };
        let mut hook = ChunkCollector::new();
        let err = pump_chunks(&mut reader, &mut hook, 8).unwrap_err();
        assert_eq!(io_kind(err), ErrorKind::ConnectionReset);
        assert_eq!(hook.chunks.len(), 1);
    }

    #[test]
    fn empty_body_never_calls_hook() {
        let mut hook = ChunkCollector::new();
        let stats = pump_chunks(io::empty(), &mut hook, 8).unwrap();
        assert_eq!(stats, ChunkStats::default());
        assert!(hook.chunks.is_empty());
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let mut hook = ChunkCollector::new();
        let err = pump_chunks(&b"a"[..], &mut hook, 0).unwrap_err();
        assert_eq!(io_kind(err), ErrorKind::InvalidInput);
        assert!(hook.chunks.is_empty());
    }
}
