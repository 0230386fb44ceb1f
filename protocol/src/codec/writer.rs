//! Bounded, append-only writer over caller-owned storage.
//!
//! The serializer never allocates. It writes into whatever buffer the
//! caller hands it, and every append checks the remaining capacity first,
//! so a write either lands completely or not at all.

use super::error::CodecError;

/// Append-only cursor over a fixed-capacity byte slice.
///
/// The position never passes the end of the slice. After an error the
/// bytes already written are still there, but the caller must treat the
/// buffer as garbage.
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> BoundedWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Write a single byte.
    pub fn append_byte(&mut self, value: u8) -> Result<(), CodecError> {
        self.append_slice(&[value])
    }

    /// Write a run of bytes, all or nothing.
    pub fn append_slice(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let remaining = self.remaining();
        if bytes.len() > remaining {
            return Err(CodecError::BufferOverflow {
                needed: bytes.len(),
                remaining,
            });
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}
