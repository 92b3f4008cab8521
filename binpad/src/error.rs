use std::io;

pub type Result<T> = std::result::Result<T, EncodeError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    // A fixed field width was smaller than the value's natural encoding.
    #[error("declared length {len} shorter than encoded value ({natural} bytes)")]
    LengthOverflow { len: usize, natural: usize },
    // The scalar kind has no binary encoding. The parameter names the kind.
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),
    #[error("null reference")]
    NullReference,
    // A negative default length other than the -1 skip sentinel.
    #[error("invalid default length {0}")]
    InvalidLength(i64),
    #[error("{message}")]
    Io { kind: io::ErrorKind, message: String },
}

impl EncodeError {
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<io::Error> for EncodeError {
    fn from(other: io::Error) -> Self {
        Self::Io {
            kind: other.kind(),
            message: other.to_string(),
        }
    }
}
