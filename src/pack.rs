//! Opaque pack/unpack serialization
//!
//! Serializes arbitrary serde values into compact opaque bytes, optionally
//! compressed. The encoding is postcard with an lz4 layer on top; callers
//! must pass the same `compressed` flag to both directions.

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};

/// Serialize `value` into opaque bytes.
pub fn pack<T: Serialize>(value: &T, compressed: bool) -> anyhow::Result<Vec<u8>> {
    let bytes = postcard::to_stdvec(value).context("pack: serialization failed")?;

    if compressed {
        Ok(lz4_flex::compress_prepend_size(&bytes))
    } else {
        Ok(bytes)
    }
}

/// Reverse of [`pack`].
pub fn unpack<T: DeserializeOwned>(bytes: &[u8], compressed: bool) -> anyhow::Result<T> {
    let decompressed;
    let data: &[u8] = if compressed {
        decompressed = lz4_flex::decompress_size_prepended(bytes)
            .context("unpack: decompression failed")?;
        &decompressed
    } else {
        bytes
    };

    postcard::from_bytes(data).context("unpack: deserialization failed")
}
