//! Declarative fixed-width binary encoding.
//!
//! Field widths are declared on the data type and every scalar is padded to
//! its width, or kept at its natural width when none applies:
//!
//! ```
//! use binpad::attr::Endian;
//! use binpad::BinEncode;
//!
//! #[derive(BinEncode)]
//! struct Login {
//!     #[binpad(len = 2)]
//!     code: u8,
//!     #[binpad(len = "6")]
//!     user: String,
//!     #[binpad(skip)]
//!     session: u64,
//! }
//!
//! let login = Login { code: 1, user: "bob".into(), session: 99 };
//! let bytes = binpad::encode_to_bytes(&login, Endian::Little, 0).unwrap();
//! assert_eq!(&bytes[..], b"\x01\x00bob\x00\x00\x00");
//! ```

mod ser;
pub use ser::{encode_to_bytes, encode_to_stream, BinEncode, Encoder};

pub mod attr;

pub mod error;
pub use error::{EncodeError, Result};

mod options;
pub use options::{BigEndianInts, Options};

pub mod scalar;

mod stream_rw;
pub use stream_rw::{padding, write_field, BinWrite};

pub mod value;

mod impls;

pub use binpad_derive::BinEncode;
