use bytes::{BufMut, Bytes, BytesMut};
use std::io::Write;

use crate::attr::{Endian, Len};
use crate::options::Options;
use crate::scalar::Scalar;
use crate::stream_rw::{padding, write_field, BinWrite};
use crate::{EncodeError, Result};

/// A value that can be laid out into a binary stream.
///
/// `len` is never [`Len::Skip`].
pub trait BinEncode {
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()>;
}

/// Writes values to a sink in a fixed byte order.
#[derive(Debug)]
pub struct Encoder<W> {
    sink: W,
    options: Options,
}

impl<W: Write> Encoder<W> {
    pub fn new(sink: W, endian: Endian) -> Self {
        Self::with_options(sink, Options::new(endian))
    }

    pub fn with_options(sink: W, options: Options) -> Self {
        Encoder { sink, options }
    }

    /// Encodes `value` with `default_len` applied to every field that does
    /// not declare its own length.
    ///
    /// `0` keeps each scalar at its natural width and `-1` skips the call
    /// without writing anything. Bytes already written are not rolled back
    /// when an error is returned.
    pub fn encode<T>(&mut self, value: &T, default_len: i64) -> Result<()>
    where
        T: BinEncode + ?Sized,
    {
        let len = Len::from_default(default_len)?;
        self.encode_len(value, len)
    }

    pub fn encode_len<T>(&mut self, value: &T, len: Len) -> Result<()>
    where
        T: BinEncode + ?Sized,
    {
        if len.is_skip() {
            return Ok(());
        }
        value.encode_to(self, len)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> BinWrite for Encoder<W> {
    fn write_scalar(&mut self, scalar: Scalar<'_>, len: Len) -> Result<()> {
        if len.is_skip() {
            return Ok(());
        }
        let mut natural = match scalar.encode() {
            Ok(natural) => natural,
            Err(err @ EncodeError::UnsupportedType(_)) if !self.options.strict => {
                log::warn!(target: "binpad", "omitting field: {}", err);
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        if scalar.is_multibyte_int() && self.options.reorders_ints() {
            natural.reverse();
        }
        let pad = padding(natural.len(), len)?;
        log::trace!(target: "binpad", "{} -> {} bytes", scalar.kind(), natural.len() + pad);
        write_field(&mut self.sink, &natural, pad, self.options.endian)?;
        Ok(())
    }
}

pub fn encode_to_bytes<T>(value: &T, endian: Endian, default_len: i64) -> Result<Bytes>
where
    T: BinEncode + ?Sized,
{
    let mut enc = Encoder::new(BytesMut::new().writer(), endian);
    enc.encode(value, default_len)?;
    Ok(enc.into_inner().into_inner().freeze())
}

pub fn encode_to_stream<T, W>(value: &T, s: &mut W, endian: Endian, default_len: i64) -> Result<()>
where
    T: BinEncode + ?Sized,
    W: Write + ?Sized,
{
    Encoder::new(s, endian).encode(value, default_len)
}
