use crate::attr::Endian;

/// How multi-byte integers are laid out when the output is big-endian.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BigEndianInts {
    /// Little-endian integer bytes, zero padding on the left.
    Legacy,
    /// Integers are byte-reversed before padding.
    Reordered,
}

impl Default for BigEndianInts {
    fn default() -> Self {
        BigEndianInts::Legacy
    }
}

/// Configuration fixed for the lifetime of an [`Encoder`](crate::Encoder).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub endian: Endian,
    /// Return [`UnsupportedType`](crate::EncodeError::UnsupportedType) instead
    /// of logging and omitting the field.
    pub strict: bool,
    pub big_endian_ints: BigEndianInts,
}

impl Options {
    pub fn new(endian: Endian) -> Self {
        Options {
            endian,
            ..Options::default()
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn big_endian_ints(mut self, mode: BigEndianInts) -> Self {
        self.big_endian_ints = mode;
        self
    }

    pub(crate) fn reorders_ints(&self) -> bool {
        self.endian == Endian::Big && self.big_endian_ints == BigEndianInts::Reordered
    }
}
