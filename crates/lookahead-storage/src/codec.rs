//! Binary encoding of a [`PredictionList`].
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! version: u8
//! count:   u32
//! count × { len: u32, word: [u8; len] (UTF-8), weight: f64 }
//! ```

use lookahead_core::errors::CodecError;
use lookahead_core::{PredictionList, PredictionRecord};

/// Current encoding version.
pub const VERSION: u8 = 1;

/// Encode a list in rank order.
pub fn encode(list: &PredictionList) -> Vec<u8> {
    let records = list.records();
    let size = 1 + 4 + records.iter().map(|r| 4 + r.word.len() + 8).sum::<usize>();
    let mut buf = Vec::with_capacity(size);
    buf.push(VERSION);
    buf.extend_from_slice(&(records.len() as u32).to_le_bytes());
    for record in records {
        buf.extend_from_slice(&(record.word.len() as u32).to_le_bytes());
        buf.extend_from_slice(record.word.as_bytes());
        buf.extend_from_slice(&record.weight.to_le_bytes());
    }
    buf
}

/// Decode a stored value. Weights come back bit-exact.
pub fn decode(bytes: &[u8]) -> Result<PredictionList, CodecError> {
    let mut reader = Reader { bytes, offset: 0 };

    let version = reader.u8()?;
    if version != VERSION {
        return Err(CodecError::UnsupportedVersion { version });
    }

    let count = reader.u32()? as usize;
    // Cap the preallocation; a corrupt count must not trigger a huge alloc.
    let mut records = Vec::with_capacity(count.min(256));
    for _ in 0..count {
        let len = reader.u32()? as usize;
        let offset = reader.offset;
        let raw = reader.take(len)?;
        let word = std::str::from_utf8(raw)
            .map_err(|_| CodecError::InvalidUtf8 { offset })?
            .to_string();
        let weight = f64::from_le_bytes(reader.array()?);
        records.push(PredictionRecord { word, weight });
    }

    let remaining = reader.remaining();
    if remaining > 0 {
        return Err(CodecError::TrailingBytes { remaining });
    }
    Ok(PredictionList::from_records(records))
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let end = self.offset.saturating_add(n);
        if end > self.bytes.len() {
            return Err(CodecError::Truncated {
                offset: self.offset,
                needed: end - self.bytes.len(),
            });
        }
        let slice = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.array::<1>()?[0])
    }

    fn u32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_le_bytes(self.array()?))
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PredictionList {
        PredictionList::from_records(vec![
            PredictionRecord::new("世界", 1.9),
            PredictionRecord::new("朋友", 0.5),
        ])
    }

    #[test]
    fn roundtrip_preserves_order_and_weights() {
        let list = sample();
        let decoded = decode(&encode(&list)).unwrap();
        assert_eq!(decoded, list);
    }

    #[test]
    fn empty_list_is_encodable() {
        let bytes = encode(&PredictionList::new());
        assert_eq!(bytes, vec![VERSION, 0, 0, 0, 0]);
        assert!(decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn empty_input_is_truncated() {
        assert_eq!(
            decode(&[]),
            Err(CodecError::Truncated { offset: 0, needed: 1 })
        );
    }

    #[test]
    fn rejects_unknown_version() {
        let mut bytes = encode(&sample());
        bytes[0] = 9;
        assert_eq!(decode(&bytes), Err(CodecError::UnsupportedVersion { version: 9 }));
    }

    #[test]
    fn rejects_truncated_weight() {
        let mut bytes = encode(&sample());
        bytes.truncate(bytes.len() - 3);
        assert!(matches!(decode(&bytes), Err(CodecError::Truncated { needed: 3, .. })));
    }

    #[test]
    fn rejects_trailing_bytes() {
        let mut bytes = encode(&sample());
        bytes.extend_from_slice(&[0xAA, 0xBB]);
        assert_eq!(decode(&bytes), Err(CodecError::TrailingBytes { remaining: 2 }));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let mut bytes = vec![VERSION];
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0xFF, 0xFE]);
        bytes.extend_from_slice(&1.0f64.to_le_bytes());
        assert_eq!(decode(&bytes), Err(CodecError::InvalidUtf8 { offset: 9 }));
    }

    #[test]
    fn huge_count_does_not_preallocate() {
        let mut bytes = vec![VERSION];
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(decode(&bytes), Err(CodecError::Truncated { .. })));
    }
}
