use crate::{EncodeError, Result};

/// Byte order applied to every field an [`Encoder`](crate::Encoder) writes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Default for Endian {
    fn default() -> Self {
        Endian::Little
    }
}

/// The width a field occupies in the output.
///
/// `Natural` writes a scalar at its own width, `Fixed(n)` zero-pads it to
/// exactly `n` bytes, and `Skip` leaves the field out entirely.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Len {
    Natural,
    Fixed(usize),
    Skip,
}

impl Default for Len {
    fn default() -> Self {
        Len::Natural
    }
}

impl Len {
    /// `0` means natural width.
    pub fn fixed(n: usize) -> Self {
        if n == 0 {
            Len::Natural
        } else {
            Len::Fixed(n)
        }
    }

    /// Interprets the integer default handed to [`Encoder::encode`](crate::Encoder::encode).
    ///
    /// `-1` is kept as the "skip this call" sentinel; other negative values are rejected.
    pub fn from_default(n: i64) -> Result<Self> {
        match n {
            -1 => Ok(Len::Skip),
            0 => Ok(Len::Natural),
            n if n > 0 => usize::try_from(n)
                .map(Len::Fixed)
                .map_err(|_| EncodeError::InvalidLength(n)),
            n => Err(EncodeError::InvalidLength(n)),
        }
    }

    /// Parses a member's length tag.
    ///
    /// Returns `None` when the tag carries no usable width, in which case the
    /// member inherits its parent's directive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag == "-" {
            return Some(Len::Skip);
        }
        match tag.parse::<i64>() {
            Ok(n) if n >= 0 => usize::try_from(n).ok().map(Len::fixed),
            _ => None,
        }
    }

    /// Effective directive of a member from its own declared directive (see
    /// [`Len::from_tag`]) and the one inherited from the enclosing value.
    pub fn resolve(own: Option<Len>, inherited: Len) -> Self {
        own.unwrap_or(inherited)
    }

    pub fn is_skip(&self) -> bool {
        *self == Len::Skip
    }

    /// Width to pad to, if any.
    pub fn width(&self) -> Option<usize> {
        match *self {
            Len::Fixed(n) if n > 0 => Some(n),
            _ => None,
        }
    }
}
