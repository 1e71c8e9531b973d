use std::{borrow::Cow, io::Read as _};

use crate::{
    fbx::{Document, Node, Property},
    foundation::error::{UvError, UvResult},
};

pub(crate) const MAGIC: &[u8; 21] = b"Kaydara FBX Binary  \0";
const HEADER_LEN: usize = 27;
/// Files from this version on use 64-bit record offsets.
const WIDE_RECORD_VERSION: u32 = 7500;

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> UvResult<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| {
                UvError::container(format!(
                    "unexpected end of data: need {n} bytes at offset {}",
                    self.pos
                ))
            })?;
        let out = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    fn array<const N: usize>(&mut self) -> UvResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn u8(&mut self) -> UvResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn u32(&mut self) -> UvResult<u32> {
        self.array().map(u32::from_le_bytes)
    }

    fn u64(&mut self) -> UvResult<u64> {
        self.array().map(u64::from_le_bytes)
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

/// Decode a binary FBX file.
pub(crate) fn parse(bytes: &[u8]) -> UvResult<Document> {
    if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
        return Err(UvError::container("missing binary FBX magic"));
    }
    let mut r = Reader {
        bytes,
        pos: MAGIC.len() + 2,
    };
    let version = r.u32()?;
    let wide = version >= WIDE_RECORD_VERSION;
    tracing::debug!(version, "binary FBX header");

    let mut nodes = Vec::new();
    while r.remaining() >= record_header_len(wide) {
        match read_node(&mut r, wide)? {
            Some(node) => nodes.push(node),
            None => break,
        }
    }
    Ok(Document { nodes })
}

fn record_header_len(wide: bool) -> usize {
    if wide { 25 } else { 13 }
}

fn read_node(r: &mut Reader<'_>, wide: bool) -> UvResult<Option<Node>> {
    let start = r.pos;
    let (end_offset, num_properties, property_list_len) = if wide {
        (r.u64()?, r.u64()?, r.u64()?)
    } else {
        (
            u64::from(r.u32()?),
            u64::from(r.u32()?),
            u64::from(r.u32()?),
        )
    };
    let name_len = r.u8()?;

    if end_offset == 0 {
        if num_properties != 0 || property_list_len != 0 || name_len != 0 {
            return Err(UvError::container(format!(
                "malformed null record at offset {start}"
            )));
        }
        return Ok(None);
    }

    let end = usize::try_from(end_offset)
        .ok()
        .filter(|&end| end > start && end <= r.bytes.len())
        .ok_or_else(|| {
            UvError::container(format!(
                "record at offset {start} has out-of-range end offset {end_offset}"
            ))
        })?;

    let name = String::from_utf8_lossy(r.take(usize::from(name_len))?).into_owned();

    let props_start = r.pos;
    let mut properties = Vec::new();
    for _ in 0..num_properties {
        properties.push(read_property(r)?);
    }
    if (r.pos - props_start) as u64 != property_list_len {
        return Err(UvError::container(format!(
            "node '{name}' declares a {property_list_len}-byte property list but used {}",
            r.pos - props_start
        )));
    }

    let mut children = Vec::new();
    while r.pos < end {
        match read_node(r, wide)? {
            Some(child) => children.push(child),
            None => break,
        }
    }
    if r.pos != end {
        return Err(UvError::container(format!(
            "node '{name}' ends at offset {} but declares end offset {end}",
            r.pos
        )));
    }

    Ok(Some(Node {
        name,
        properties,
        children,
    }))
}

fn read_property(r: &mut Reader<'_>) -> UvResult<Property> {
    let at = r.pos;
    let code = r.u8()?;
    let prop = match code {
        b'Y' => Property::I16(r.array().map(i16::from_le_bytes)?),
        b'C' => Property::Bool(r.u8()? != 0),
        b'I' => Property::I32(r.array().map(i32::from_le_bytes)?),
        b'F' => Property::F32(r.array().map(f32::from_le_bytes)?),
        b'D' => Property::F64(r.array().map(f64::from_le_bytes)?),
        b'L' => Property::I64(r.array().map(i64::from_le_bytes)?),
        b'S' => {
            let len = r.u32()? as usize;
            Property::String(String::from_utf8_lossy(r.take(len)?).into_owned())
        }
        b'R' => {
            let len = r.u32()? as usize;
            Property::Raw(r.take(len)?.to_vec())
        }
        b'b' => Property::BoolArray(read_array(r, |c: [u8; 1]| c[0] != 0)?),
        b'i' => Property::I32Array(read_array(r, i32::from_le_bytes)?),
        b'l' => Property::I64Array(read_array(r, i64::from_le_bytes)?),
        b'f' => Property::F32Array(read_array(r, f32::from_le_bytes)?),
        b'd' => Property::F64Array(read_array(r, f64::from_le_bytes)?),
        other => {
            return Err(UvError::container(format!(
                "unknown property type code 0x{other:02x} at offset {at}"
            )));
        }
    };
    Ok(prop)
}

fn read_array<T, const N: usize>(
    r: &mut Reader<'_>,
    decode: impl Fn([u8; N]) -> T,
) -> UvResult<Vec<T>> {
    let len = r.u32()? as usize;
    let encoding = r.u32()?;
    let stored_len = r.u32()? as usize;
    let at = r.pos;
    let stored = r.take(stored_len)?;

    let expected = len
        .checked_mul(N)
        .ok_or_else(|| UvError::container(format!("array length {len} overflows")))?;

    let data: Cow<'_, [u8]> = match encoding {
        0 => Cow::Borrowed(stored),
        1 => {
            let mut out = Vec::new();
            flate2::read::ZlibDecoder::new(stored)
                .take(expected as u64 + 1)
                .read_to_end(&mut out)
                .map_err(|e| {
                    UvError::container(format!("inflate array at offset {at}: {e}"))
                })?;
            Cow::Owned(out)
        }
        other => {
            return Err(UvError::container(format!(
                "unknown array encoding {other} at offset {at}"
            )));
        }
    };

    if data.len() != expected {
        return Err(UvError::container(format!(
            "array at offset {at} holds {} bytes, expected {expected} for {len} elements",
            data.len()
        )));
    }

    Ok(data
        .chunks_exact(N)
        .map(|c| {
            let mut buf = [0u8; N];
            buf.copy_from_slice(c);
            decode(buf)
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/fbx/binary.rs"]
mod tests;
