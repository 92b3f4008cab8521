use bytes::{BufMut, BytesMut};
use std::borrow::Cow;

use crate::{EncodeError, Result};

/// An indivisible value, the leaf of every encoded tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar<'a> {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    Text(Cow<'a, str>),
    // A kind with no binary form, named for diagnostics.
    Unsupported(&'static str),
}

impl<'a> Scalar<'a> {
    /// Canonical encoding: little-endian for integers, raw bytes for text.
    ///
    /// The configured output byte order is not applied here.
    pub fn encode(&self) -> Result<BytesMut> {
        let mut buf = BytesMut::with_capacity(self.natural_width().unwrap_or(0));
        match self {
            Scalar::Bool(v) => buf.put_u8(if *v { 0x01 } else { 0x00 }),
            Scalar::U8(v) => buf.put_u8(*v),
            Scalar::U16(v) => buf.put_u16_le(*v),
            Scalar::U32(v) => buf.put_u32_le(*v),
            Scalar::I32(v) => buf.put_i32_le(*v),
            Scalar::U64(v) => buf.put_u64_le(*v),
            Scalar::I64(v) => buf.put_i64_le(*v),
            Scalar::Text(s) => buf.put_slice(s.as_bytes()),
            Scalar::Unsupported(kind) => return Err(EncodeError::UnsupportedType(*kind)),
        }
        Ok(buf)
    }

    pub fn natural_width(&self) -> Option<usize> {
        match self {
            Scalar::Bool(_) | Scalar::U8(_) => Some(1),
            Scalar::U16(_) => Some(2),
            Scalar::U32(_) | Scalar::I32(_) => Some(4),
            Scalar::U64(_) | Scalar::I64(_) => Some(8),
            Scalar::Text(s) => Some(s.len()),
            Scalar::Unsupported(_) => None,
        }
    }

    /// Multi-byte integers are the only scalars whose bytes depend on byte order.
    pub fn is_multibyte_int(&self) -> bool {
        matches!(
            self,
            Scalar::U16(_) | Scalar::U32(_) | Scalar::I32(_) | Scalar::U64(_) | Scalar::I64(_)
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::U8(_) => "u8",
            Scalar::U16(_) => "u16",
            Scalar::U32(_) => "u32",
            Scalar::I32(_) => "i32",
            Scalar::U64(_) => "u64",
            Scalar::I64(_) => "i64",
            Scalar::Text(_) => "text",
            Scalar::Unsupported(kind) => *kind,
        }
    }

    /// Borrows the text payload instead of cloning it.
    pub fn reborrow(&self) -> Scalar<'_> {
        match self {
            Scalar::Text(s) => Scalar::Text(Cow::Borrowed(s.as_ref())),
            Scalar::Bool(v) => Scalar::Bool(*v),
            Scalar::U8(v) => Scalar::U8(*v),
            Scalar::U16(v) => Scalar::U16(*v),
            Scalar::U32(v) => Scalar::U32(*v),
            Scalar::I32(v) => Scalar::I32(*v),
            Scalar::U64(v) => Scalar::U64(*v),
            Scalar::I64(v) => Scalar::I64(*v),
            Scalar::Unsupported(kind) => Scalar::Unsupported(*kind),
        }
    }

    pub fn into_owned(self) -> Scalar<'static> {
        match self {
            Scalar::Text(s) => Scalar::Text(Cow::Owned(s.into_owned())),
            Scalar::Bool(v) => Scalar::Bool(v),
            Scalar::U8(v) => Scalar::U8(v),
            Scalar::U16(v) => Scalar::U16(v),
            Scalar::U32(v) => Scalar::U32(v),
            Scalar::I32(v) => Scalar::I32(v),
            Scalar::U64(v) => Scalar::U64(v),
            Scalar::I64(v) => Scalar::I64(v),
            Scalar::Unsupported(kind) => Scalar::Unsupported(kind),
        }
    }
}

macro_rules! scalar_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Scalar<'static> {
            fn from(v: $ty) -> Self {
                Scalar::$variant(v)
            }
        }
    };
}

scalar_from!(bool, Bool);
scalar_from!(u8, U8);
scalar_from!(u16, U16);
scalar_from!(u32, U32);
scalar_from!(i32, I32);
scalar_from!(u64, U64);
scalar_from!(i64, I64);

impl From<String> for Scalar<'static> {
    fn from(v: String) -> Self {
        Scalar::Text(Cow::Owned(v))
    }
}

impl<'a> From<&'a str> for Scalar<'a> {
    fn from(v: &'a str) -> Self {
        Scalar::Text(Cow::Borrowed(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(s: Scalar<'_>) -> Vec<u8> {
        s.encode().unwrap().to_vec()
    }

    #[test]
    fn integers_are_little_endian() {
        assert_eq!(enc(Scalar::U8(0xab)), vec![0xab]);
        assert_eq!(enc(Scalar::U16(0x1234)), vec![0x34, 0x12]);
        assert_eq!(enc(Scalar::U32(0x0102_0304)), vec![4, 3, 2, 1]);
        assert_eq!(enc(Scalar::I32(-2)), vec![0xfe, 0xff, 0xff, 0xff]);
        assert_eq!(enc(Scalar::U64(1)), vec![1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(enc(Scalar::I64(-1)), vec![0xff; 8]);
    }

    #[test]
    fn bool_and_text() {
        assert_eq!(enc(Scalar::Bool(true)), vec![1]);
        assert_eq!(enc(Scalar::Bool(false)), vec![0]);
        assert_eq!(enc(Scalar::from("ab")), b"ab".to_vec());
        assert_eq!(enc(Scalar::from(String::new())), Vec::<u8>::new());
    }

    #[test]
    fn widths_match_encodings() {
        let all = [
            Scalar::Bool(true),
            Scalar::U8(1),
            Scalar::U16(1),
            Scalar::U32(1),
            Scalar::I32(1),
            Scalar::U64(1),
            Scalar::I64(1),
            Scalar::from("hello"),
        ];
        for s in &all {
            assert_eq!(s.natural_width(), Some(s.encode().unwrap().len()), "{}", s.kind());
        }
    }

    #[test]
    fn unsupported() {
        assert_eq!(
            Scalar::Unsupported("f32").encode(),
            Err(EncodeError::UnsupportedType("f32"))
        );
        assert_eq!(Scalar::Unsupported("f32").natural_width(), None);
    }
}
