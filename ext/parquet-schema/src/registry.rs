//! Lookup tables for scalar types, encodings and compression methods
//!
//! The builder never consults global state: every schema is built against a
//! [`Registry`] that is handed to it. [`Registry::default`] carries the
//! standard tables; custom entries can be layered on top with the `with_*`
//! methods.

use indexmap::IndexMap;
use parquet::basic::{
    BrotliLevel, Compression, ConvertedType, Encoding, GzipLevel, Type as PhysicalType, ZstdLevel,
};

/// Encoding used when a leaf does not declare one
pub const DEFAULT_ENCODING: &str = "PLAIN";

/// Compression used when a leaf does not declare one
pub const DEFAULT_COMPRESSION: &str = "UNCOMPRESSED";

/// Physical and logical metadata for a declared type name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub primitive_type: PhysicalType,
    pub original_type: Option<ConvertedType>,
    pub type_length: Option<i32>,
}

impl TypeDescriptor {
    pub fn primitive(primitive_type: PhysicalType) -> Self {
        Self {
            primitive_type,
            original_type: None,
            type_length: None,
        }
    }

    pub fn annotated(primitive_type: PhysicalType, original_type: ConvertedType) -> Self {
        Self {
            primitive_type,
            original_type: Some(original_type),
            type_length: None,
        }
    }

    pub fn with_length(mut self, type_length: i32) -> Self {
        self.type_length = Some(type_length);
        self
    }
}

/// Maps declared type names to their descriptors
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    /// A registry with no entries
    pub fn empty() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, descriptor: TypeDescriptor) {
        self.types.insert(name.into(), descriptor);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        use ConvertedType as C;
        use PhysicalType as P;

        let entries = [
            ("BOOLEAN", TypeDescriptor::primitive(P::BOOLEAN)),
            ("INT32", TypeDescriptor::primitive(P::INT32)),
            ("INT64", TypeDescriptor::primitive(P::INT64)),
            ("INT96", TypeDescriptor::primitive(P::INT96)),
            ("FLOAT", TypeDescriptor::primitive(P::FLOAT)),
            ("DOUBLE", TypeDescriptor::primitive(P::DOUBLE)),
            ("BYTE_ARRAY", TypeDescriptor::primitive(P::BYTE_ARRAY)),
            (
                "FIXED_LEN_BYTE_ARRAY",
                TypeDescriptor::primitive(P::FIXED_LEN_BYTE_ARRAY),
            ),
            ("UTF8", TypeDescriptor::annotated(P::BYTE_ARRAY, C::UTF8)),
            ("TIME_MILLIS", TypeDescriptor::annotated(P::INT32, C::TIME_MILLIS)),
            ("TIME_MICROS", TypeDescriptor::annotated(P::INT64, C::TIME_MICROS)),
            ("DATE", TypeDescriptor::annotated(P::INT32, C::DATE)),
            (
                "TIMESTAMP_MILLIS",
                TypeDescriptor::annotated(P::INT64, C::TIMESTAMP_MILLIS),
            ),
            (
                "TIMESTAMP_MICROS",
                TypeDescriptor::annotated(P::INT64, C::TIMESTAMP_MICROS),
            ),
            ("UINT_8", TypeDescriptor::annotated(P::INT32, C::UINT_8)),
            ("UINT_16", TypeDescriptor::annotated(P::INT32, C::UINT_16)),
            ("UINT_32", TypeDescriptor::annotated(P::INT32, C::UINT_32)),
            ("UINT_64", TypeDescriptor::annotated(P::INT64, C::UINT_64)),
            ("INT_8", TypeDescriptor::annotated(P::INT32, C::INT_8)),
            ("INT_16", TypeDescriptor::annotated(P::INT32, C::INT_16)),
            ("INT_32", TypeDescriptor::annotated(P::INT32, C::INT_32)),
            ("INT_64", TypeDescriptor::annotated(P::INT64, C::INT_64)),
            ("JSON", TypeDescriptor::annotated(P::BYTE_ARRAY, C::JSON)),
            ("BSON", TypeDescriptor::annotated(P::BYTE_ARRAY, C::BSON)),
            (
                "INTERVAL",
                TypeDescriptor::annotated(P::FIXED_LEN_BYTE_ARRAY, C::INTERVAL).with_length(12),
            ),
        ];

        Self {
            types: entries
                .into_iter()
                .map(|(name, descriptor)| (name.to_string(), descriptor))
                .collect(),
        }
    }
}

/// Set of encodings leaves may declare
#[derive(Debug, Clone, PartialEq)]
pub struct CodecRegistry {
    encodings: IndexMap<String, Encoding>,
}

impl CodecRegistry {
    pub fn empty() -> Self {
        Self {
            encodings: IndexMap::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.encodings.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Encoding> {
        self.encodings.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, encoding: Encoding) {
        self.encodings.insert(name.into(), encoding);
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.insert("PLAIN", Encoding::PLAIN);
        registry.insert("RLE", Encoding::RLE);
        registry
    }
}

/// Set of compression methods leaves may declare
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionRegistry {
    methods: IndexMap<String, Compression>,
}

impl CompressionRegistry {
    pub fn empty() -> Self {
        Self {
            methods: IndexMap::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Compression> {
        self.methods.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, compression: Compression) {
        self.methods.insert(name.into(), compression);
    }
}

impl Default for CompressionRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.insert("UNCOMPRESSED", Compression::UNCOMPRESSED);
        registry.insert("GZIP", Compression::GZIP(GzipLevel::default()));
        registry.insert("SNAPPY", Compression::SNAPPY);
        registry.insert("LZO", Compression::LZO);
        registry.insert("BROTLI", Compression::BROTLI(BrotliLevel::default()));
        registry.insert("LZ4", Compression::LZ4);
        registry.insert("ZSTD", Compression::ZSTD(ZstdLevel::default()));
        registry
    }
}

/// The three lookup tables a schema is resolved against
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    pub types: TypeRegistry,
    pub codecs: CodecRegistry,
    pub compressions: CompressionRegistry,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an additional scalar type
    pub fn with_type(mut self, name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        self.types.insert(name, descriptor);
        self
    }

    /// Register an additional encoding
    pub fn with_encoding(mut self, name: impl Into<String>, encoding: Encoding) -> Self {
        self.codecs.insert(name, encoding);
        self
    }

    /// Register an additional compression method
    pub fn with_compression(mut self, name: impl Into<String>, compression: Compression) -> Self {
        self.compressions.insert(name, compression);
        self
    }
}
