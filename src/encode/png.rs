use std::io::Cursor;

use crate::{
    foundation::error::{BubbleError, BubbleResult},
    render::FrameRGBA,
};

/// Encode `frame` as an RGBA8 PNG in memory.
///
/// Premultiplied input is converted to straight alpha first, since PNG stores
/// unassociated alpha. Output is byte-identical for identical input.
pub fn encode_png(frame: &FrameRGBA) -> BubbleResult<Vec<u8>> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(BubbleError::encode(format!(
            "frame byte length {} does not match {}x{} rgba8",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let mut rgba = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut rgba);
    }

    let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
        .ok_or_else(|| BubbleError::encode("rgba8 buffer does not fit frame dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| BubbleError::encode(format!("png: {e}")))?;
    Ok(buf)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        match a {
            0 => {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
            }
            255 => {}
            _ => {
                for c in &mut px[..3] {
                    *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
