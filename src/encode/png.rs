//! Minimal lossless PNG container.
//!
//! Output is always `IHDR`, one `IDAT`, `IEND`: 8-bit RGBA, no interlace, and filter type 0 on
//! every scanline. The reader accepts exactly that layout and nothing more.

use std::io::{Read as _, Write as _};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::foundation::error::{FrescoError, FrescoResult};
use crate::raster::canvas::Canvas;

/// Fixed 8-byte file prefix.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const IHDR: [u8; 4] = *b"IHDR";
const IDAT: [u8; 4] = *b"IDAT";
const IEND: [u8; 4] = *b"IEND";

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// Decoded `IHDR` fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PngHeader {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bits per channel, always 8 here.
    pub bit_depth: u8,
    /// Color type, 6 for RGBA.
    pub color_type: u8,
    /// Compression method, 0 for deflate.
    pub compression: u8,
    /// Filter method, 0.
    pub filter: u8,
    /// Interlace method, 0 for none.
    pub interlace: u8,
}

impl PngHeader {
    fn rgba8(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: BIT_DEPTH,
            color_type: COLOR_TYPE_RGBA,
            compression: 0,
            filter: 0,
            interlace: 0,
        }
    }

    fn to_bytes(self) -> [u8; 13] {
        let mut out = [0u8; 13];
        out[0..4].copy_from_slice(&self.width.to_be_bytes());
        out[4..8].copy_from_slice(&self.height.to_be_bytes());
        out[8] = self.bit_depth;
        out[9] = self.color_type;
        out[10] = self.compression;
        out[11] = self.filter;
        out[12] = self.interlace;
        out
    }

    fn parse(payload: &[u8]) -> FrescoResult<Self> {
        let bytes: [u8; 13] = payload
            .try_into()
            .map_err(|_| FrescoError::decode(format!("IHDR must be 13 bytes, got {}", payload.len())))?;
        Ok(Self {
            width: u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            height: u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            bit_depth: bytes[8],
            color_type: bytes[9],
            compression: bytes[10],
            filter: bytes[11],
            interlace: bytes[12],
        })
    }
}

/// One framed chunk borrowed from an encoded buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Four-byte type tag.
    pub tag: [u8; 4],
    /// Chunk payload.
    pub data: &'a [u8],
}

/// Encode `canvas` as a PNG byte stream.
///
/// Identical canvases always produce identical bytes.
pub fn encode_png(canvas: &Canvas) -> FrescoResult<Vec<u8>> {
    let raw = scanlines(canvas);

    let mut z = ZlibEncoder::new(Vec::with_capacity(raw.len() / 4), Compression::best());
    z.write_all(&raw)
        .map_err(|e| FrescoError::encode(format!("deflate failed: {e}")))?;
    let idat = z
        .finish()
        .map_err(|e| FrescoError::encode(format!("deflate failed: {e}")))?;

    let ihdr = PngHeader::rgba8(canvas.width(), canvas.height()).to_bytes();

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + idat.len() + 3 * 12 + ihdr.len());
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, IHDR, &ihdr)?;
    write_chunk(&mut out, IDAT, &idat)?;
    write_chunk(&mut out, IEND, &[])?;

    tracing::debug!(
        width = canvas.width(),
        height = canvas.height(),
        raw_bytes = raw.len(),
        png_bytes = out.len(),
        "encoded png"
    );
    Ok(out)
}

/// Unfiltered scanline stream: each row prefixed by filter byte 0.
pub fn scanlines(canvas: &Canvas) -> Vec<u8> {
    let stride = canvas.width() as usize * 4;
    let mut raw = Vec::with_capacity(canvas.height() as usize * (stride + 1));
    for row in canvas.rows() {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }
    raw
}

/// CRC-32 over `tag` followed by `data`.
pub fn chunk_crc(tag: [u8; 4], data: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(&tag);
    h.update(data);
    h.finalize()
}

fn write_chunk(out: &mut Vec<u8>, tag: [u8; 4], data: &[u8]) -> FrescoResult<()> {
    let len = u32::try_from(data.len())
        .map_err(|_| FrescoError::encode("chunk payload exceeds 4 GiB"))?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&chunk_crc(tag, data).to_be_bytes());
    Ok(())
}

/// Split an encoded buffer into chunks, verifying the signature and every CRC.
pub fn read_chunks(bytes: &[u8]) -> FrescoResult<Vec<Chunk<'_>>> {
    let rest = bytes
        .strip_prefix(&PNG_SIGNATURE)
        .ok_or_else(|| FrescoError::decode("missing png signature"))?;

    let mut chunks = Vec::new();
    let mut pos = 0usize;
    while pos < rest.len() {
        let head = rest
            .get(pos..pos + 8)
            .ok_or_else(|| FrescoError::decode("truncated chunk header"))?;
        let len = u32::from_be_bytes([head[0], head[1], head[2], head[3]]) as usize;
        let tag = [head[4], head[5], head[6], head[7]];
        let body_start = pos + 8;
        let data = body_start
            .checked_add(len)
            .and_then(|end| rest.get(body_start..end))
            .ok_or_else(|| FrescoError::decode("truncated chunk payload"))?;
        let crc_start = body_start + len;
        let crc = rest
            .get(crc_start..crc_start + 4)
            .ok_or_else(|| FrescoError::decode("truncated chunk crc"))?;
        let stored = u32::from_be_bytes([crc[0], crc[1], crc[2], crc[3]]);
        if stored != chunk_crc(tag, data) {
            return Err(FrescoError::decode(format!(
                "crc mismatch in {} chunk",
                String::from_utf8_lossy(&tag)
            )));
        }
        chunks.push(Chunk { tag, data });
        pos = crc_start + 4;
    }
    Ok(chunks)
}

/// Parse a buffer produced by [`encode_png`] back into its header and canvas.
pub fn decode_png(bytes: &[u8]) -> FrescoResult<(PngHeader, Canvas)> {
    let chunks = read_chunks(bytes)?;
    let tags: Vec<[u8; 4]> = chunks.iter().map(|c| c.tag).collect();
    if tags != [IHDR, IDAT, IEND] {
        return Err(FrescoError::decode(
            "expected exactly IHDR, IDAT, IEND chunks in order",
        ));
    }
    if !chunks[2].data.is_empty() {
        return Err(FrescoError::decode("IEND payload must be empty"));
    }

    let header = PngHeader::parse(chunks[0].data)?;
    if header != PngHeader::rgba8(header.width, header.height) {
        return Err(FrescoError::decode(format!(
            "unsupported png format: {header:?}"
        )));
    }

    let mut raw = Vec::new();
    ZlibDecoder::new(chunks[1].data)
        .read_to_end(&mut raw)
        .map_err(|e| FrescoError::decode(format!("inflate failed: {e}")))?;

    let stride = header.width as usize * 4;
    let expected = header.height as usize * (stride + 1);
    if raw.len() != expected {
        return Err(FrescoError::decode(format!(
            "scanline stream has {} bytes, expected {expected}",
            raw.len()
        )));
    }

    let mut data = Vec::with_capacity(header.height as usize * stride);
    for line in raw.chunks_exact(stride + 1) {
        if line[0] != FILTER_NONE {
            return Err(FrescoError::decode(format!(
                "unsupported scanline filter {}",
                line[0]
            )));
        }
        data.extend_from_slice(&line[1..]);
    }

    let canvas = Canvas::from_rgba8(header.width, header.height, data)
        .map_err(|e| FrescoError::decode(e.to_string()))?;
    Ok((header, canvas))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
