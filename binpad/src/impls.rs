use std::borrow::Cow;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use crate::attr::Len;
use crate::scalar::Scalar;
use crate::{BinEncode, BinWrite, EncodeError, Result};

macro_rules! encode_scalar {
    ($ty:ty, $variant:ident) => {
        impl BinEncode for $ty {
            fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
                out.write_scalar(Scalar::$variant(*self), len)
            }
        }
    };
}

encode_scalar!(bool, Bool);
encode_scalar!(u8, U8);
encode_scalar!(u16, U16);
encode_scalar!(u32, U32);
encode_scalar!(i32, I32);
encode_scalar!(u64, U64);
encode_scalar!(i64, I64);

// Kinds without a wire form. They go through the writer so the
// lenient/strict policy decides whether the field is dropped or fatal.
macro_rules! encode_unsupported {
    ($($ty:ty),*) => {
        $(
            impl BinEncode for $ty {
                fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
                    out.write_scalar(Scalar::Unsupported(stringify!($ty)), len)
                }
            }
        )*
    };
}

encode_unsupported!(i8, i16, isize, usize, f32, f64, char);

impl BinEncode for str {
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        out.write_scalar(Scalar::Text(Cow::Borrowed(self)), len)
    }
}
impl BinEncode for String {
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        self.as_str().encode_to(out, len)
    }
}
impl BinEncode for Cow<'_, str> {
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        self.as_ref().encode_to(out, len)
    }
}

impl BinEncode for Scalar<'_> {
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        out.write_scalar(self.reborrow(), len)
    }
}

impl<T> BinEncode for [T]
where
    T: BinEncode,
{
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        for elem in self {
            elem.encode_to(out, len)?;
        }
        Ok(())
    }
}

impl<T, const N: usize> BinEncode for [T; N]
where
    T: BinEncode,
{
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        self.as_slice().encode_to(out, len)
    }
}

impl<T> BinEncode for Vec<T>
where
    T: BinEncode,
{
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        self.as_slice().encode_to(out, len)
    }
}

impl<T> BinEncode for VecDeque<T>
where
    T: BinEncode,
{
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        for elem in self {
            elem.encode_to(out, len)?;
        }
        Ok(())
    }
}

impl<T> BinEncode for &T
where
    T: BinEncode + ?Sized,
{
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        (**self).encode_to(out, len)
    }
}

impl<T> BinEncode for &mut T
where
    T: BinEncode + ?Sized,
{
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        (**self).encode_to(out, len)
    }
}

impl<T> BinEncode for Box<T>
where
    T: BinEncode + ?Sized,
{
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        (**self).encode_to(out, len)
    }
}

impl<T> BinEncode for Rc<T>
where
    T: BinEncode + ?Sized,
{
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        (**self).encode_to(out, len)
    }
}

impl<T> BinEncode for Arc<T>
where
    T: BinEncode + ?Sized,
{
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        (**self).encode_to(out, len)
    }
}

/// `None` is a reference with no target.
impl<T> BinEncode for Option<T>
where
    T: BinEncode,
{
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        match self {
            Some(v) => v.encode_to(out, len),
            None => Err(EncodeError::NullReference),
        }
    }
}
