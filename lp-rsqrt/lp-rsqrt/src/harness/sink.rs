//! Byte sinks for harness output.
//!
//! The formatting helpers never talk to a device directly; they write into
//! whatever [`ByteSink`] the caller hands them:
//! - [`SliceSink`]: fixed caller-owned buffer, works without an allocator
//! - [`SyscallSink`]: Linux-style `write(1, ...)` ecall on riscv32 targets
//! - [`IoSink`] and `Vec<u8>` (`std` only)

use crate::error::SinkError;

/// Destination for raw output bytes.
pub trait ByteSink {
    /// Write all of `bytes`, or nothing on error.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SinkError>;
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        (**self).write_bytes(bytes)
    }
}

/// Sink writing into a caller-provided buffer.
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl ByteSink for SliceSink<'_> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        let available = self.remaining();
        if bytes.len() > available {
            return Err(SinkError::Full {
                needed: bytes.len(),
                available,
            });
        }
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}

/// Sink that issues the `write` system call (number 64) on file descriptor 1.
///
/// This is the same ecall convention the emulator and proxy kernels use for
/// stdout.
#[cfg(target_arch = "riscv32")]
pub struct SyscallSink;

#[cfg(target_arch = "riscv32")]
impl ByteSink for SyscallSink {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        const SYS_WRITE: usize = 64;
        const STDOUT: usize = 1;

        let ret: isize;
        unsafe {
            core::arch::asm!(
                "ecall",
                inlateout("a0") STDOUT as isize => ret,
                in("a1") bytes.as_ptr(),
                in("a2") bytes.len(),
                in("a7") SYS_WRITE,
                options(nostack),
            );
        }
        if ret < 0 {
            Err(SinkError::Syscall(ret as i32))
        } else {
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
impl ByteSink for std::vec::Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Sink over any [`std::io::Write`].
#[cfg(feature = "std")]
pub struct IoSink<W: std::io::Write> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for IoSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.inner.write_all(bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_sink_appends() {
        let mut buf = [0u8; 8];
        let mut sink = SliceSink::new(&mut buf);
        assert!(sink.is_empty());
        sink.write_bytes(b"abc").unwrap();
        sink.write_bytes(b"de").unwrap();
        assert_eq!(sink.as_bytes(), b"abcde");
        assert_eq!(sink.remaining(), 3);
    }

    #[test]
    fn test_slice_sink_rejects_overflow_whole() {
        let mut buf = [0u8; 4];
        let mut sink = SliceSink::new(&mut buf);
        sink.write_bytes(b"ab").unwrap();
        let err = sink.write_bytes(b"cde").unwrap_err();
        assert_eq!(
            err,
            SinkError::Full {
                needed: 3,
                available: 2
            }
        );
        assert_eq!(sink.as_bytes(), b"ab");
        sink.clear();
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn emit<S: ByteSink>(mut sink: S) {
            sink.write_bytes(b"xy").unwrap();
        }

        let mut buf = [0u8; 4];
        let mut sink = SliceSink::new(&mut buf);
        emit(&mut sink);
        emit(&mut sink);
        assert_eq!(sink.as_bytes(), b"xyxy");
    }
}
