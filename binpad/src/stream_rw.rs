use std::io::{self, Read, Write};

use crate::attr::{Endian, Len};
use crate::scalar::Scalar;
use crate::{EncodeError, Result};

/// A destination for encoded scalars.
pub trait BinWrite {
    /// Encodes `scalar`, fits it to `len` and writes it.
    fn write_scalar(&mut self, scalar: Scalar<'_>, len: Len) -> Result<()>;
}

/// Number of zero bytes needed to fit `natural` bytes to the directive's width.
pub fn padding(natural: usize, len: Len) -> Result<usize> {
    match len.width() {
        Some(width) => width
            .checked_sub(natural)
            .ok_or(EncodeError::LengthOverflow { len: width, natural }),
        None => Ok(0),
    }
}

/// Writes `natural` with `pad` zero bytes after it (little-endian) or before
/// it (big-endian). The padding is streamed, never buffered whole.
pub fn write_field<W>(sink: &mut W, natural: &[u8], pad: usize, endian: Endian) -> io::Result<()>
where
    W: Write + ?Sized,
{
    match endian {
        Endian::Little => {
            sink.write_all(natural)?;
            write_zeros(sink, pad)
        }
        Endian::Big => {
            write_zeros(sink, pad)?;
            sink.write_all(natural)
        }
    }
}

fn write_zeros<W>(sink: &mut W, n: usize) -> io::Result<()>
where
    W: Write + ?Sized,
{
    io::copy(&mut io::repeat(0).take(n as u64), sink)?;
    Ok(())
}
