//! Image decoding and GL texture upload for the texture variant.

use std::path::Path;

use glow::{HasContext, PixelUnpackData};

/// GL internal format for RGBA8 textures, pre-cast to the `i32` that
/// `tex_image_2d` expects.
#[expect(clippy::cast_possible_wrap)]
const RGBA8_INTERNAL_FORMAT: i32 = glow::RGBA8 as i32;

/// Convert a `u32` to `i32` for GL API calls.
///
/// # Panics
///
/// Panics if `value > i32::MAX`. In practice, this is unreachable for
/// normal image sizes.
fn gl_size(value: u32) -> i32 {
    i32::try_from(value).expect("dimension exceeds i32::MAX")
}

/// A decoded RGBA8 image ready for GL texture upload.
#[derive(Debug)]
pub struct TextureImage {
    /// Tightly packed RGBA8 pixel data, bottom row first (GL convention).
    pub pixels: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl TextureImage {
    /// Decode an image file (PNG or JPEG) into RGBA8.
    ///
    /// The rows are flipped vertically so that texture coordinate `(0, 0)`
    /// addresses the bottom-left corner of the image, as GL expects.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the path if the file cannot be opened
    /// or decoded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| format!("could not load texture {}: {e}", path.display()))?
            .flipv()
            .to_rgba8();

        let (width, height) = img.dimensions();
        log::debug!("decoded {} ({width}x{height})", path.display());

        Ok(Self {
            pixels: img.into_raw(),
            width,
            height,
        })
    }

    /// Generate a two-tone checkerboard, used when no texture file is given
    /// on the command line.
    ///
    /// `cell` is the edge length of one square in pixels; a `cell` of zero
    /// is clamped to one.
    #[must_use]
    pub fn checkerboard(width: u32, height: u32, cell: u32) -> Self {
        let cell = cell.max(1);
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);

        for y in 0..height {
            for x in 0..width {
                let dark = ((x / cell) + (y / cell)) % 2 == 0;
                let tone = if dark { 0x40 } else { 0xe0 };
                pixels.extend_from_slice(&[tone, tone, tone, 0xff]);
            }
        }

        Self {
            pixels,
            width,
            height,
        }
    }

    /// Upload the pixels as a `GL_TEXTURE_2D` with REPEAT wrapping, linear
    /// filtering, and generated mipmaps, returning the texture handle.
    ///
    /// The texture is left unbound on return.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    ///
    /// # Errors
    ///
    /// Returns an error string if texture creation fails.
    pub unsafe fn upload(&self, gl: &glow::Context) -> Result<glow::Texture, String> {
        let texture = unsafe { gl.create_texture() }?;

        // GL constant values are small enough that the cast is always safe.
        #[expect(clippy::cast_possible_wrap)]
        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );

            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                RGBA8_INTERNAL_FORMAT,
                gl_size(self.width),
                gl_size(self.height),
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                PixelUnpackData::Slice(Some(&self.pixels)),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);

            gl.bind_texture(glow::TEXTURE_2D, None);
        }

        Ok(texture)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_has_tightly_packed_rgba_pixels() {
        let img = TextureImage::checkerboard(8, 4, 2);
        assert_eq!(img.width, 8);
        assert_eq!(img.height, 4);
        assert_eq!(img.pixels.len(), 8 * 4 * 4);
    }

    #[test]
    fn checkerboard_alternates_between_cells() {
        let img = TextureImage::checkerboard(4, 4, 2);
        let pixel = |x: usize, y: usize| img.pixels[(y * 4 + x) * 4];

        // Same cell: same tone. Adjacent cell: the other tone.
        assert_eq!(pixel(0, 0), pixel(1, 1));
        assert_ne!(pixel(0, 0), pixel(2, 0));
        assert_ne!(pixel(0, 0), pixel(0, 2));
        // Diagonal cells match again.
        assert_eq!(pixel(0, 0), pixel(2, 2));
    }

    #[test]
    fn checkerboard_is_opaque() {
        let img = TextureImage::checkerboard(3, 3, 1);
        assert!(img.pixels.chunks_exact(4).all(|px| px[3] == 0xff));
    }

    #[test]
    fn checkerboard_clamps_zero_cell_size() {
        let img = TextureImage::checkerboard(2, 2, 0);
        assert_eq!(img.pixels.len(), 2 * 2 * 4);
    }

    #[test]
    fn open_names_missing_file_in_error() {
        let err = TextureImage::open("no/such/container.png").unwrap_err();
        assert!(err.contains("no/such/container.png"), "{err}");
    }
}
