//! Dictionary-substitution compression for tabular text
//!
//! Each column gets its own frequency-ranked list of distinct values (the
//! conversion map). Cells longer than two characters are replaced by a coded
//! reference `&<index>` into their column's list.
//!
//! ## Pipeline:
//!
//! - [`MapBuilder`]: one pass over all rows, produces the [`ConversionMap`]
//! - [`Encoder`]: second pass, substitutes references
//! - [`Decoder`]: resolves references back to literals
//!
//! ## Usage Example:
//!
//! ```
//! use csvdict::compression::{Decoder, Encoder, MapBuilder};
//!
//! let rows = vec![
//!     vec!["apple", "banana"],
//!     vec!["apple", "cherry"],
//! ];
//! let map = MapBuilder::build(&rows);
//! let encoded = Encoder::new(&map).encode_table(&rows);
//! assert_eq!(encoded[1], vec!["&0", "&1"]);
//!
//! let decoded = Decoder::new(&map).decode_table(&encoded).unwrap();
//! assert_eq!(decoded, rows);
//! ```

pub mod builder;
pub mod decoder;
pub mod encoder;
pub mod map;
pub mod traits;
pub mod types;

pub use builder::MapBuilder;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use map::ConversionMap;
pub use traits::CompressionStats;
pub use types::{is_eligible, CodedReference, EncodedCell, Row, Table};
