// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Typed little-endian byte stream.
//!
//! [`BinaryReader`] wraps any [`Read`] source and decodes fixed-width values,
//! raw byte runs, and the two variable-length integer encodings found in
//! simulation files. [`BinaryWriter`] is the symmetric write side.
//!
//! # Variable-length encodings
//!
//! Two encodings coexist and must not be confused:
//!
//! - **Length prefix** ([`BinaryReader::read_var_length_count`]): 7-bit groups
//!   with the high bit set on every byte except the last. The *first* byte
//!   carries the *most* significant group. Frames every string.
//! - **7-bit varint** ([`BinaryReader::read_7bit_varint`]): the usual LEB128
//!   layout, *least* significant group first. Not used by the footer.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use esme::io::binary::BinaryReader;
//!
//! let data = [0x05, b'h', b'e', b'l', b'l', b'o', 0x2A, 0x00, 0x00, 0x00];
//! let mut reader = BinaryReader::new(Cursor::new(&data[..]));
//! assert_eq!(reader.read_string()?, "hello");
//! assert_eq!(reader.read_i32()?, 42);
//! # Ok::<(), esme::SimError>(())
//! ```

use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use uuid::Uuid;

use crate::{Result, SimError};

/// Default cap on a decoded string length (1 MiB).
pub const DEFAULT_MAX_STRING_LEN: usize = 1 << 20;

/// Size of a serialized GUID.
pub const GUID_SIZE: usize = 16;

/// Most 7-bit groups a 64-bit length prefix needs.
const MAX_VAR_LENGTH_BYTES: usize = 10;

/// Little-endian typed reader over a byte source.
///
/// The reader tracks its own position so that errors can report where a
/// value started without querying the source. It does no buffering of its
/// own; wrap files in a [`std::io::BufReader`].
pub struct BinaryReader<R> {
    inner: R,
    position: u64,
    max_string_len: usize,
}

impl<R: Read> BinaryReader<R> {
    /// Create a reader positioned at the current offset of `inner`.
    ///
    /// Positions reported in errors are relative to where the reader was
    /// created until the first seek.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            position: 0,
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }

    /// Set the largest string length accepted by [`read_string`](Self::read_string).
    pub fn with_max_string_len(mut self, max: usize) -> Self {
        self.max_string_len = max;
        self
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Largest accepted string length.
    #[inline]
    pub fn max_string_len(&self) -> usize {
        self.max_string_len
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Fill `buf` completely or fail with `TruncatedStream`.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let start = self.position;
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(SimError::io("BinaryReader::fill", e.to_string())),
            }
        }
        self.position += filled as u64;
        if filled < buf.len() {
            return Err(SimError::truncated(buf.len(), filled, start));
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Read a signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a bool stored as one byte; any nonzero value is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a u16 value.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(&self.read_array::<2>()?))
    }

    /// Read an i16 value.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(&self.read_array::<2>()?))
    }

    /// Read a u32 value.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(&self.read_array::<4>()?))
    }

    /// Read an i32 value.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(&self.read_array::<4>()?))
    }

    /// Read a u64 value.
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(&self.read_array::<8>()?))
    }

    /// Read an i64 value.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(LittleEndian::read_i64(&self.read_array::<8>()?))
    }

    /// Read an f32 value.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(&self.read_array::<4>()?))
    }

    /// Read an f64 value.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(&self.read_array::<8>()?))
    }

    /// Read exactly `count` bytes.
    ///
    /// The buffer grows as data arrives, so a bogus `count` fails with
    /// `TruncatedStream` instead of allocating `count` bytes up front.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let start = self.position;
        let mut buf = Vec::new();
        let got = (&mut self.inner)
            .take(count as u64)
            .read_to_end(&mut buf)
            .map_err(|e| SimError::io("BinaryReader::read_bytes", e.to_string()))?;
        self.position += got as u64;
        if got < count {
            return Err(SimError::truncated(count, got, start));
        }
        Ok(buf)
    }

    /// Read a 16-byte GUID, bytes taken in stored order.
    pub fn read_uuid(&mut self) -> Result<Uuid> {
        Ok(Uuid::from_bytes(self.read_array::<GUID_SIZE>()?))
    }

    /// Read a string length prefix.
    ///
    /// Bytes are consumed while the high bit is set; the terminating byte
    /// (high bit clear) is consumed too. Groups accumulate most significant
    /// first, so `[0x81, 0x00]` decodes to 128. Leading zero groups are
    /// accepted in any number; a value above `u64::MAX` is `MalformedVarLength`.
    pub fn read_var_length_count(&mut self) -> Result<u64> {
        let start = self.position;
        let mut result: u128 = 0;
        loop {
            let byte = self.read_u8()?;
            result = (result << 7) | u128::from(byte & 0x7F);
            // At most 64 + 7 bits, so the value fits an i128.
            if result > u128::from(u64::MAX) {
                return Err(SimError::malformed_length(
                    result as i128,
                    usize::MAX,
                    start,
                ));
            }
            if byte & 0x80 == 0 {
                return Ok(result as u64);
            }
        }
    }

    /// Read a length-prefixed string as raw bytes.
    ///
    /// Lengths above [`max_string_len`](Self::max_string_len) fail with
    /// `MalformedVarLength` before any payload is read.
    pub fn read_string_bytes(&mut self) -> Result<Vec<u8>> {
        let start = self.position;
        let len = self.read_var_length_count()?;
        if len > self.max_string_len as u64 {
            return Err(SimError::malformed_length(len, self.max_string_len, start));
        }
        self.read_bytes(len as usize)
    }

    /// Read a length-prefixed string.
    ///
    /// The payload carries no charset guarantee; invalid UTF-8 sequences are
    /// replaced rather than rejected.
    pub fn read_string(&mut self) -> Result<String> {
        let bytes = self.read_string_bytes()?;
        Ok(match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }

    /// Read a 7-bit varint, least significant group first.
    pub fn read_7bit_varint(&mut self) -> Result<u64> {
        let start = self.position;
        let mut value: u64 = 0;
        let mut shift = 0u32;
        loop {
            let byte = self.read_u8()?;
            let group = u64::from(byte & 0x7F);
            if (shift == 63 && group > 1) || shift > 63 {
                return Err(SimError::malformed_length(value, usize::MAX, start));
            }
            value |= group << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }
    }
}

impl<R: Read + Seek> BinaryReader<R> {
    /// Total length of the source in bytes. Leaves the position unchanged.
    pub fn stream_len(&mut self) -> Result<u64> {
        let current = self
            .inner
            .stream_position()
            .map_err(|e| SimError::io("BinaryReader::stream_len", e.to_string()))?;
        let len = self
            .inner
            .seek(SeekFrom::End(0))
            .map_err(|e| SimError::io("BinaryReader::stream_len", e.to_string()))?;
        self.inner
            .seek(SeekFrom::Start(current))
            .map_err(|e| SimError::io("BinaryReader::stream_len", e.to_string()))?;
        Ok(len)
    }

    /// Seek to an absolute offset from the start of the source.
    ///
    /// An offset past the end fails with `TruncatedStream` and leaves the
    /// position unchanged. Seeking exactly to the end is allowed.
    pub fn seek_to(&mut self, offset: u64) -> Result<()> {
        let len = self.stream_len()?;
        if offset > len {
            let missing = usize::try_from(offset - len).unwrap_or(usize::MAX);
            return Err(SimError::truncated(missing, 0, offset));
        }
        self.position = self
            .inner
            .seek(SeekFrom::Start(offset))
            .map_err(|e| SimError::io("BinaryReader::seek_to", e.to_string()))?;
        Ok(())
    }

    /// Seek to `back` bytes before the end of the source.
    pub fn seek_from_end(&mut self, back: u64) -> Result<()> {
        let len = self.stream_len()?;
        if back > len {
            return Err(SimError::truncated(back as usize, len as usize, 0));
        }
        self.seek_to(len - back)
    }
}

/// Little-endian typed writer, the inverse of [`BinaryReader`].
pub struct BinaryWriter<W> {
    inner: W,
    position: u64,
}

impl<W: Write> BinaryWriter<W> {
    /// Create a writer at position 0.
    pub fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn wrote(&mut self, n: usize) -> Result<()> {
        self.position += n as u64;
        Ok(())
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.wrote(bytes.len())
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.inner.write_u8(value)?;
        self.wrote(1)
    }

    /// Write a signed byte.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.inner.write_i8(value)?;
        self.wrote(1)
    }

    /// Write a bool as one byte.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(u8::from(value))
    }

    /// Write a u16 value.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.inner.write_u16::<LittleEndian>(value)?;
        self.wrote(2)
    }

    /// Write an i16 value.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.inner.write_i16::<LittleEndian>(value)?;
        self.wrote(2)
    }

    /// Write a u32 value.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.inner.write_u32::<LittleEndian>(value)?;
        self.wrote(4)
    }

    /// Write an i32 value.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.inner.write_i32::<LittleEndian>(value)?;
        self.wrote(4)
    }

    /// Write a u64 value.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.inner.write_u64::<LittleEndian>(value)?;
        self.wrote(8)
    }

    /// Write an i64 value.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.inner.write_i64::<LittleEndian>(value)?;
        self.wrote(8)
    }

    /// Write an f32 value.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.inner.write_f32::<LittleEndian>(value)?;
        self.wrote(4)
    }

    /// Write an f64 value.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.inner.write_f64::<LittleEndian>(value)?;
        self.wrote(8)
    }

    /// Write a 16-byte GUID in stored order.
    pub fn write_uuid(&mut self, value: &Uuid) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }

    /// Write a string length prefix, most significant group first.
    pub fn write_var_length_count(&mut self, value: u64) -> Result<()> {
        let mut groups = [0u8; MAX_VAR_LENGTH_BYTES];
        let mut n = 0;
        let mut rest = value;
        loop {
            groups[n] = (rest & 0x7F) as u8;
            n += 1;
            rest >>= 7;
            if rest == 0 {
                break;
            }
        }
        for i in (0..n).rev() {
            let more = if i > 0 { 0x80 } else { 0x00 };
            self.write_u8(groups[i] | more)?;
        }
        Ok(())
    }

    /// Write a length-prefixed string.
    pub fn write_string(&mut self, value: impl AsRef<[u8]>) -> Result<()> {
        let bytes = value.as_ref();
        self.write_var_length_count(bytes.len() as u64)?;
        self.write_bytes(bytes)
    }

    /// Write a 7-bit varint, least significant group first.
    pub fn write_7bit_varint(&mut self, value: u64) -> Result<()> {
        let mut rest = value;
        while rest >= 0x80 {
            self.write_u8((rest as u8 & 0x7F) | 0x80)?;
            rest >>= 7;
        }
        self.write_u8(rest as u8)
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(data: &[u8]) -> BinaryReader<Cursor<&[u8]>> {
        BinaryReader::new(Cursor::new(data))
    }

    #[test]
    fn test_read_fixed_width() {
        let mut data = Vec::new();
        data.extend_from_slice(&0x0102u16.to_le_bytes());
        data.extend_from_slice(&(-2i16).to_le_bytes());
        data.extend_from_slice(&0x01020304u32.to_le_bytes());
        data.extend_from_slice(&i32::MIN.to_le_bytes());
        data.extend_from_slice(&0x0102030405060708u64.to_le_bytes());
        data.extend_from_slice(&i64::MIN.to_le_bytes());
        data.extend_from_slice(&1.5f32.to_le_bytes());
        data.extend_from_slice(&(-2.25f64).to_le_bytes());

        let mut r = reader(&data);
        assert_eq!(r.read_u16().unwrap(), 0x0102);
        assert_eq!(r.read_i16().unwrap(), -2);
        assert_eq!(r.read_u32().unwrap(), 0x01020304);
        assert_eq!(r.read_i32().unwrap(), i32::MIN);
        assert_eq!(r.read_u64().unwrap(), 0x0102030405060708);
        assert_eq!(r.read_i64().unwrap(), i64::MIN);
        assert_eq!(r.read_f32().unwrap(), 1.5);
        assert_eq!(r.read_f64().unwrap(), -2.25);
        assert_eq!(r.position(), data.len() as u64);
    }

    #[test]
    fn test_read_byte_and_bool() {
        let mut r = reader(&[0xFF, 0x00, 0x02]);
        assert_eq!(r.read_i8().unwrap(), -1);
        assert!(!r.read_bool().unwrap());
        assert!(r.read_bool().unwrap());
    }

    #[test]
    fn test_short_read_is_truncated() {
        let mut r = reader(&[0x01, 0x02, 0x03]);
        let err = r.read_u32().unwrap_err();
        match err {
            SimError::TruncatedStream {
                requested,
                available,
                position,
            } => {
                assert_eq!(requested, 4);
                assert_eq!(available, 3);
                assert_eq!(position, 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_bytes() {
        let mut r = reader(&[1, 2, 3, 4]);
        assert_eq!(r.read_bytes(0).unwrap(), Vec::<u8>::new());
        assert_eq!(r.read_bytes(3).unwrap(), vec![1, 2, 3]);
        assert!(matches!(
            r.read_bytes(2),
            Err(SimError::TruncatedStream {
                requested: 2,
                available: 1,
                position: 3
            })
        ));
    }

    #[test]
    fn test_read_bytes_huge_count_does_not_allocate() {
        let mut r = reader(&[1, 2]);
        assert!(matches!(
            r.read_bytes(usize::MAX / 2),
            Err(SimError::TruncatedStream { available: 2, .. })
        ));
    }

    #[test]
    fn test_read_string_hello() {
        let mut r = reader(&[0x05, b'h', b'e', b'l', b'l', b'o']);
        assert_eq!(r.read_string().unwrap(), "hello");
        assert_eq!(r.position(), 6);
    }

    #[test]
    fn test_read_string_empty() {
        let mut r = reader(&[0x00]);
        assert_eq!(r.read_string().unwrap(), "");
    }

    #[test]
    fn test_var_length_count_most_significant_first() {
        assert_eq!(reader(&[0x7F]).read_var_length_count().unwrap(), 127);
        assert_eq!(reader(&[0x81, 0x00]).read_var_length_count().unwrap(), 128);
        assert_eq!(reader(&[0x82, 0x2C]).read_var_length_count().unwrap(), 300);
        assert_eq!(
            reader(&[0x81, 0x80, 0x00]).read_var_length_count().unwrap(),
            1 << 14
        );
    }

    #[test]
    fn test_read_string_long_prefix() {
        let payload = vec![b'x'; 200];
        // 200 = 1 * 128 + 72
        let mut data = vec![0x81, 72];
        data.extend_from_slice(&payload);
        let mut r = reader(&data);
        assert_eq!(r.read_string().unwrap().len(), 200);
        assert_eq!(r.position(), 202);
    }

    #[test]
    fn test_var_length_count_too_long() {
        let data = [0xFF; 11];
        assert!(matches!(
            reader(&data).read_var_length_count(),
            Err(SimError::MalformedVarLength { .. })
        ));
    }

    #[test]
    fn test_var_length_count_leading_zero_groups() {
        let mut data = vec![0x80; 10];
        data.push(0x05);
        let mut r = reader(&data);
        assert_eq!(r.read_var_length_count().unwrap(), 5);
        assert_eq!(r.position(), 11);
    }

    #[test]
    fn test_var_length_count_max_and_overflow() {
        // u64::MAX is 1 followed by nine full groups.
        let mut max = vec![0x81];
        max.extend_from_slice(&[0xFF; 8]);
        max.push(0x7F);
        assert_eq!(reader(&max).read_var_length_count().unwrap(), u64::MAX);

        let mut over = vec![0x82];
        over.extend_from_slice(&[0x80; 8]);
        over.push(0x00);
        assert!(matches!(
            reader(&over).read_var_length_count(),
            Err(SimError::MalformedVarLength {
                length,
                position: 0,
                ..
            }) if length == 1i128 << 64
        ));
    }

    #[test]
    fn test_var_length_count_truncated() {
        assert!(matches!(
            reader(&[0x81]).read_var_length_count(),
            Err(SimError::TruncatedStream { .. })
        ));
    }

    #[test]
    fn test_string_over_limit() {
        let data = [0x0A, b'a', b'b'];
        let mut r = reader(&data).with_max_string_len(4);
        assert!(matches!(
            r.read_string(),
            Err(SimError::MalformedVarLength {
                length: 10,
                limit: 4,
                position: 0
            })
        ));
    }

    #[test]
    fn test_string_payload_truncated() {
        let mut r = reader(&[0x05, b'h', b'i']);
        assert!(matches!(
            r.read_string(),
            Err(SimError::TruncatedStream {
                requested: 5,
                available: 2,
                position: 1
            })
        ));
    }

    #[test]
    fn test_string_invalid_utf8_is_lossy() {
        let mut r = reader(&[0x02, 0xFF, b'a']);
        assert_eq!(r.read_string().unwrap(), "\u{FFFD}a");
        let mut r = reader(&[0x02, 0xFF, b'a']);
        assert_eq!(r.read_string_bytes().unwrap(), vec![0xFF, b'a']);
    }

    #[test]
    fn test_7bit_varint_least_significant_first() {
        assert_eq!(reader(&[0x00]).read_7bit_varint().unwrap(), 0);
        assert_eq!(reader(&[0x7F]).read_7bit_varint().unwrap(), 127);
        assert_eq!(reader(&[0x80, 0x01]).read_7bit_varint().unwrap(), 128);
        assert_eq!(reader(&[0xAC, 0x02]).read_7bit_varint().unwrap(), 300);
    }

    #[test]
    fn test_encodings_differ() {
        // Same bytes, different values.
        let data = [0x82, 0x01];
        assert_eq!(reader(&data).read_var_length_count().unwrap(), 257);
        assert_eq!(reader(&data).read_7bit_varint().unwrap(), 130);
    }

    #[test]
    fn test_7bit_varint_overflow() {
        let data = [0xFF; 11];
        assert!(matches!(
            reader(&data).read_7bit_varint(),
            Err(SimError::MalformedVarLength { .. })
        ));
    }

    #[test]
    fn test_read_uuid_stored_order() {
        let bytes: [u8; 16] = std::array::from_fn(|i| i as u8);
        let mut r = reader(&bytes);
        let id = r.read_uuid().unwrap();
        assert_eq!(id.to_string(), "00010203-0405-0607-0809-0a0b0c0d0e0f");
    }

    #[test]
    fn test_seek_from_end() {
        let data: Vec<u8> = (0..20).collect();
        let mut r = reader(&data);
        assert_eq!(r.stream_len().unwrap(), 20);
        r.seek_from_end(4).unwrap();
        assert_eq!(r.position(), 16);
        assert_eq!(r.read_u8().unwrap(), 16);
        assert!(matches!(
            r.seek_from_end(21),
            Err(SimError::TruncatedStream { .. })
        ));
    }

    #[test]
    fn test_seek_past_end() {
        let data = [0u8; 8];
        let mut r = reader(&data);
        assert!(matches!(
            r.seek_to(100),
            Err(SimError::TruncatedStream {
                requested: 92,
                available: 0,
                position: 100,
            })
        ));
        assert!(matches!(
            r.seek_to(u64::MAX),
            Err(SimError::TruncatedStream { .. })
        ));
        assert_eq!(r.position(), 0);

        r.seek_to(8).unwrap();
        assert!(matches!(
            r.read_u8(),
            Err(SimError::TruncatedStream {
                available: 0,
                position: 8,
                ..
            })
        ));
    }

    #[test]
    fn test_writer_var_length_count() {
        let mut w = BinaryWriter::new(Vec::new());
        w.write_var_length_count(5).unwrap();
        w.write_var_length_count(128).unwrap();
        w.write_var_length_count(300).unwrap();
        assert_eq!(w.into_inner(), vec![0x05, 0x81, 0x00, 0x82, 0x2C]);
    }

    #[test]
    fn test_writer_7bit_varint() {
        let mut w = BinaryWriter::new(Vec::new());
        w.write_7bit_varint(300).unwrap();
        w.write_7bit_varint(u64::MAX).unwrap();
        let bytes = w.into_inner();
        assert_eq!(&bytes[..2], &[0xAC, 0x02]);

        let mut r = reader(&bytes);
        assert_eq!(r.read_7bit_varint().unwrap(), 300);
        assert_eq!(r.read_7bit_varint().unwrap(), u64::MAX);
    }

    #[test]
    fn test_writer_mirrors_reader() {
        let id = Uuid::from_u128(0x1234_5678_9abc_def0_1122_3344_5566_7788);
        let mut w = BinaryWriter::new(Vec::new());
        w.write_u8(7).unwrap();
        w.write_bool(true).unwrap();
        w.write_i16(-3).unwrap();
        w.write_u32(99).unwrap();
        w.write_f64(0.5).unwrap();
        w.write_string("scenario").unwrap();
        w.write_uuid(&id).unwrap();
        w.write_var_length_count(u64::MAX).unwrap();
        assert_eq!(w.position(), 1 + 1 + 2 + 4 + 8 + 9 + 16 + 10);
        let bytes = w.into_inner();

        let mut r = reader(&bytes);
        assert_eq!(r.read_u8().unwrap(), 7);
        assert!(r.read_bool().unwrap());
        assert_eq!(r.read_i16().unwrap(), -3);
        assert_eq!(r.read_u32().unwrap(), 99);
        assert_eq!(r.read_f64().unwrap(), 0.5);
        assert_eq!(r.read_string().unwrap(), "scenario");
        assert_eq!(r.read_uuid().unwrap(), id);
        assert_eq!(r.read_var_length_count().unwrap(), u64::MAX);
    }
}
