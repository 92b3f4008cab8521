//! Layouts assembled at runtime.
//!
//! Types known at compile time should `#[derive(BinEncode)]` instead. A
//! [`Value`] tree is for layouts that are only known once the program runs,
//! such as frames described by a configuration file.
//!
//! ```
//! use binpad::value::{Member, Value};
//! use binpad::attr::Endian;
//!
//! let frame = Value::aggregate(vec![
//!     Member::new("kind", 7u8),
//!     Member::new("name", "ab").len(4),
//!     Member::new("debug", 1u32).skip(),
//! ]);
//! let bytes = binpad::encode_to_bytes(&frame, Endian::Little, 0).unwrap();
//! assert_eq!(&bytes[..], &[7, b'a', b'b', 0, 0]);
//! ```

use std::rc::Rc;

use crate::attr::Len;
use crate::scalar::Scalar;
use crate::{BinEncode, BinWrite, EncodeError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Aggregate(Vec<Member>),
    Sequence(Vec<Value>),
    Reference(Option<Rc<Value>>),
    Scalar(Scalar<'static>),
}

impl Value {
    pub fn aggregate(members: Vec<Member>) -> Self {
        Value::Aggregate(members)
    }

    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn reference(target: Rc<Value>) -> Self {
        Value::Reference(Some(target))
    }

    pub fn null() -> Self {
        Value::Reference(None)
    }
}

/// A named member of an aggregate together with its length metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    // None inherits the enclosing directive.
    pub len: Option<Len>,
    pub value: Value,
}

impl Member {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Member {
            name: name.into(),
            len: None,
            value: value.into(),
        }
    }

    /// Fixes the member's width. `0` forces natural width even when the
    /// parent carries a width.
    pub fn len(mut self, n: usize) -> Self {
        self.len = Some(Len::fixed(n));
        self
    }

    pub fn skip(mut self) -> Self {
        self.len = Some(Len::Skip);
        self
    }

    /// Applies a textual length tag: `"-"` skips, a non-negative integer
    /// fixes the width, anything else leaves the member inheriting.
    pub fn tag(mut self, tag: &str) -> Self {
        self.len = Len::from_tag(tag);
        self
    }

    pub fn effective_len(&self, inherited: Len) -> Len {
        Len::resolve(self.len, inherited)
    }
}

impl BinEncode for Value {
    fn encode_to(&self, out: &mut dyn BinWrite, len: Len) -> Result<()> {
        match self {
            Value::Aggregate(members) => {
                for member in members {
                    let len = member.effective_len(len);
                    if len.is_skip() {
                        log::trace!(target: "binpad", "member `{}` skipped", member.name);
                        continue;
                    }
                    member.value.encode_to(out, len)?;
                }
                Ok(())
            }
            Value::Sequence(items) => items.as_slice().encode_to(out, len),
            Value::Reference(Some(target)) => target.encode_to(out, len),
            Value::Reference(None) => Err(EncodeError::NullReference),
            Value::Scalar(scalar) => out.write_scalar(scalar.reborrow(), len),
        }
    }
}

impl From<Scalar<'_>> for Value {
    fn from(v: Scalar<'_>) -> Self {
        Value::Scalar(v.into_owned())
    }
}

impl From<Rc<Value>> for Value {
    fn from(v: Rc<Value>) -> Self {
        Value::Reference(Some(v))
    }
}

impl From<Vec<Member>> for Value {
    fn from(v: Vec<Member>) -> Self {
        Value::Aggregate(v)
    }
}

macro_rules! value_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Scalar(Scalar::from(v).into_owned())
                }
            }
        )*
    };
}

value_from_scalar!(bool, u8, u16, u32, i32, u64, i64, String, &str);
