use std::fs::File;
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use memmap2::Mmap;
use ndarray::Array2;

use crate::consts::SER_TICKS_PER_SECOND;
use crate::error::{FramesigError, Result};
use crate::frame::{ColorFrame, ColorMode, Frame, FrameMetadata, SourceInfo};

pub const SER_HEADER_SIZE: usize = 178;
pub const SER_MAGIC: &[u8; 14] = b"LUCAM-RECORDER";

/// SER file header (178 bytes).
#[derive(Clone, Debug)]
pub struct SerHeader {
    pub color_id: i32,
    pub little_endian: bool,
    pub width: u32,
    pub height: u32,
    pub pixel_depth: u32,
    pub frame_count: u32,
    pub observer: String,
    pub instrument: String,
    pub telescope: String,
    pub date_time: u64,
    pub date_time_utc: u64,
}

impl SerHeader {
    /// Bytes per pixel plane (1 for 8-bit, 2 for 9-16 bit).
    pub fn bytes_per_pixel_plane(&self) -> usize {
        if self.pixel_depth <= 8 { 1 } else { 2 }
    }

    /// Number of planes per pixel (1 for mono/bayer, 3 for RGB/BGR).
    pub fn planes_per_pixel(&self) -> usize {
        match self.color_id {
            100 | 101 => 3,
            _ => 1,
        }
    }

    /// Total bytes per frame.
    pub fn frame_byte_size(&self) -> usize {
        let pixels = (self.width as usize)
            .checked_mul(self.height as usize)
            .expect("Image dimensions too large");
        let bytes_per_pixel = self.bytes_per_pixel_plane() * self.planes_per_pixel();
        pixels
            .checked_mul(bytes_per_pixel)
            .expect("Frame size calculation overflow")
    }

    pub fn color_mode(&self) -> ColorMode {
        match self.color_id {
            0 => ColorMode::Mono,
            8 => ColorMode::BayerRGGB,
            9 => ColorMode::BayerGRBG,
            10 => ColorMode::BayerGBRG,
            11 => ColorMode::BayerBGGR,
            100 => ColorMode::RGB,
            101 => ColorMode::BGR,
            _ => ColorMode::Mono,
        }
    }
}

/// Memory-mapped SER video reader.
///
/// Holds the decode handle (the mmap) for its whole lifetime; dropping the
/// reader releases it whether iteration completed or not.
pub struct SerReader {
    mmap: Mmap,
    pub header: SerHeader,
}

impl std::fmt::Debug for SerReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerReader")
            .field("header", &self.header)
            .field("mapped_bytes", &self.mmap.len())
            .finish()
    }
}

impl SerReader {
    /// Open a SER file and parse its header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() < SER_HEADER_SIZE {
            return Err(FramesigError::InvalidSer(
                "File too small for SER header".into(),
            ));
        }

        if &mmap[0..14] != SER_MAGIC {
            return Err(FramesigError::InvalidSer(
                "Missing LUCAM-RECORDER magic".into(),
            ));
        }

        let header = parse_header(&mmap[..SER_HEADER_SIZE])?;

        let expected_data_size =
            SER_HEADER_SIZE + header.frame_byte_size() * header.frame_count as usize;
        if mmap.len() < expected_data_size {
            return Err(FramesigError::InvalidSer(format!(
                "File truncated: expected at least {} bytes, got {}",
                expected_data_size,
                mmap.len()
            )));
        }

        Ok(Self { mmap, header })
    }

    pub fn frame_count(&self) -> usize {
        self.header.frame_count as usize
    }

    /// Get the raw bytes for a single frame (zero-copy from mmap).
    pub fn frame_raw(&self, index: usize) -> Result<&[u8]> {
        let count = self.frame_count();
        if index >= count {
            return Err(FramesigError::FrameIndexOutOfRange {
                index,
                total: count,
            });
        }
        let offset = SER_HEADER_SIZE + index * self.header.frame_byte_size();
        let end = offset + self.header.frame_byte_size();
        Ok(&self.mmap[offset..end])
    }

    /// Read a single frame as grayscale, converting to f32 in [0.0, 1.0].
    ///
    /// RGB/BGR sources are reduced through [`crate::gray::luminance`]; mono
    /// and Bayer sources use the raw plane directly.
    pub fn read_frame(&self, index: usize) -> Result<Frame> {
        if self.header.planes_per_pixel() == 3 {
            return Ok(crate::gray::luminance(&self.read_frame_rgb(index)?));
        }

        let raw = self.frame_raw(index)?;
        let h = self.header.height as usize;
        let w = self.header.width as usize;
        let bpp = self.header.bytes_per_pixel_plane();

        let data = decode_mono_plane(
            raw,
            h,
            w,
            bpp,
            self.header.pixel_depth,
            self.header.little_endian,
        );

        let mut frame = Frame::new(data, bpp as u8 * 8);
        frame.metadata = FrameMetadata {
            frame_index: index,
            timestamp_ticks: self.read_timestamp(index),
        };
        Ok(frame)
    }

    /// Read a single RGB/BGR frame as three channel planes.
    pub fn read_frame_rgb(&self, index: usize) -> Result<ColorFrame> {
        let mode = self.header.color_mode();
        if !matches!(mode, ColorMode::RGB | ColorMode::BGR) {
            return Err(FramesigError::InvalidSer(format!(
                "Expected RGB/BGR data, got {:?}",
                mode
            )));
        }

        let raw = self.frame_raw(index)?;
        let h = self.header.height as usize;
        let w = self.header.width as usize;
        let bpp = self.header.bytes_per_pixel_plane();
        let (r_plane, b_plane) = match mode {
            ColorMode::BGR => (2, 0),
            _ => (0, 2),
        };

        let metadata = FrameMetadata {
            frame_index: index,
            timestamp_ticks: self.read_timestamp(index),
        };
        let bit_depth = bpp as u8 * 8;
        let plane = |plane_index: usize| -> Frame {
            let data = decode_plane_from_interleaved(
                raw,
                h,
                w,
                bpp,
                3,
                plane_index,
                self.header.pixel_depth,
                self.header.little_endian,
            );
            let mut f = Frame::new(data, bit_depth);
            f.metadata = metadata.clone();
            f
        };

        Ok(ColorFrame {
            red: plane(r_plane),
            green: plane(1),
            blue: plane(b_plane),
        })
    }

    /// Read per-frame timestamp from the optional trailer.
    fn read_timestamp(&self, index: usize) -> Option<u64> {
        let trailer_offset =
            SER_HEADER_SIZE + self.header.frame_byte_size() * self.header.frame_count as usize;
        let ts_offset = trailer_offset + index * 8;
        if ts_offset + 8 <= self.mmap.len() {
            let bytes = &self.mmap[ts_offset..ts_offset + 8];
            Some(u64::from_le_bytes(bytes.try_into().ok()?))
        } else {
            None
        }
    }

    /// All trailer timestamps, or `None` when the file has no trailer.
    pub fn timestamps(&self) -> Option<Vec<u64>> {
        let trailer_offset =
            SER_HEADER_SIZE + self.header.frame_byte_size() * self.header.frame_count as usize;
        let needed = self.frame_count() * 8;
        if needed == 0 || self.mmap.len() < trailer_offset + needed {
            return None;
        }
        Some(
            (0..self.frame_count())
                .map(|i| {
                    let off = trailer_offset + i * 8;
                    u64::from_le_bytes(self.mmap[off..off + 8].try_into().unwrap())
                })
                .collect(),
        )
    }

    /// Frame rate derived from the mean timestamp-trailer delta.
    ///
    /// SER timestamps are 100 ns ticks. Returns `None` when the trailer is
    /// absent, too short, or non-increasing.
    pub fn derived_frame_rate(&self) -> Option<f64> {
        let ts = self.timestamps()?;
        if ts.len() < 2 {
            return None;
        }
        let span = ts.last()?.checked_sub(ts[0])?;
        if span == 0 {
            return None;
        }
        let mean_delta = span as f64 / (ts.len() - 1) as f64;
        Some(SER_TICKS_PER_SECOND / mean_delta)
    }

    /// Build SourceInfo from the header.
    pub fn source_info(&self, path: &Path) -> SourceInfo {
        SourceInfo {
            filename: path.to_path_buf(),
            total_frames: self.frame_count(),
            width: self.header.width,
            height: self.header.height,
            bit_depth: self.header.pixel_depth as u8,
            color_mode: self.header.color_mode(),
            frame_rate: self.derived_frame_rate(),
        }
    }

    /// Iterator over all frames as grayscale, in decode order.
    pub fn frames(&self) -> impl Iterator<Item = Result<Frame>> + '_ {
        (0..self.frame_count()).map(move |i| self.read_frame(i))
    }
}

fn parse_header(buf: &[u8]) -> Result<SerHeader> {
    let mut cursor = std::io::Cursor::new(&buf[14..]); // skip magic

    let _lu_id = cursor.read_i32::<LittleEndian>()?;
    let color_id = cursor.read_i32::<LittleEndian>()?;
    let le_flag = cursor.read_i32::<LittleEndian>()?;
    let width = cursor.read_i32::<LittleEndian>()? as u32;
    let height = cursor.read_i32::<LittleEndian>()? as u32;
    let pixel_depth = cursor.read_i32::<LittleEndian>()? as u32;
    let frame_count = cursor.read_i32::<LittleEndian>()? as u32;

    let observer = read_fixed_string(&buf[42..82]);
    let instrument = read_fixed_string(&buf[82..122]);
    let telescope = read_fixed_string(&buf[122..162]);

    let mut cursor = std::io::Cursor::new(&buf[162..]);
    let date_time = cursor.read_u64::<LittleEndian>()?;
    let date_time_utc = cursor.read_u64::<LittleEndian>()?;

    if width == 0 || height == 0 {
        return Err(FramesigError::InvalidDimensions { width, height });
    }
    if pixel_depth == 0 || pixel_depth > 16 {
        return Err(FramesigError::InvalidSer(format!(
            "Unsupported pixel depth: {pixel_depth}"
        )));
    }

    // SER spec: LittleEndian field = 0 means big-endian pixel data,
    // but many writers (including FireCapture) use 0 for little-endian.
    // Follow Siril's convention: treat 0 as little-endian.
    let little_endian = le_flag != 1;

    let header = SerHeader {
        color_id,
        little_endian,
        width,
        height,
        pixel_depth,
        frame_count,
        observer,
        instrument,
        telescope,
        date_time,
        date_time_utc,
    };

    // Every frame and trailer offset computation relies on the total data
    // size fitting in usize; reject geometry that does not.
    let bytes_per_pixel = (header.bytes_per_pixel_plane() * header.planes_per_pixel()) as u64;
    let data_bytes = (header.width as u64)
        .checked_mul(header.height as u64)
        .and_then(|pixels| pixels.checked_mul(bytes_per_pixel))
        .and_then(|frame| frame.checked_mul(header.frame_count as u64));
    if !data_bytes.is_some_and(|size| size <= (usize::MAX - SER_HEADER_SIZE) as u64) {
        return Err(FramesigError::InvalidSer(format!(
            "Header geometry out of range: {}x{}, {} frame(s)",
            header.width, header.height, header.frame_count
        )));
    }

    Ok(header)
}

fn read_fixed_string(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf)
        .trim_end_matches('\0')
        .trim()
        .to_string()
}

fn decode_mono_plane(
    raw: &[u8],
    height: usize,
    width: usize,
    bytes_per_sample: usize,
    bit_depth: u32,
    little_endian: bool,
) -> Array2<f32> {
    let max_val = ((1u32 << bit_depth) - 1) as f32;
    let mut data = Array2::<f32>::zeros((height, width));

    for row in 0..height {
        for col in 0..width {
            let idx = (row * width + col) * bytes_per_sample;
            let val = if bytes_per_sample == 1 {
                raw[idx] as f32
            } else {
                let pair = [raw[idx], raw[idx + 1]];
                if little_endian {
                    u16::from_le_bytes(pair) as f32
                } else {
                    u16::from_be_bytes(pair) as f32
                }
            };
            data[[row, col]] = val / max_val;
        }
    }

    data
}

#[allow(clippy::too_many_arguments)]
fn decode_plane_from_interleaved(
    raw: &[u8],
    height: usize,
    width: usize,
    bytes_per_sample: usize,
    planes: usize,
    plane_index: usize,
    bit_depth: u32,
    little_endian: bool,
) -> Array2<f32> {
    let max_val = ((1u32 << bit_depth) - 1) as f32;
    let mut data = Array2::<f32>::zeros((height, width));

    for row in 0..height {
        for col in 0..width {
            let pixel_offset = (row * width + col) * planes * bytes_per_sample;
            let idx = pixel_offset + plane_index * bytes_per_sample;
            let val = if bytes_per_sample == 1 {
                raw[idx] as f32
            } else {
                let pair = [raw[idx], raw[idx + 1]];
                if little_endian {
                    u16::from_le_bytes(pair) as f32
                } else {
                    u16::from_be_bytes(pair) as f32
                }
            };
            data[[row, col]] = val / max_val;
        }
    }

    data
}
