//! Vertex layouts and geometry upload for the tutorial triangle.
//!
//! Every layout is `#[repr(C)]` and [`bytemuck::Pod`] so the vertex slice can
//! be cast directly to the byte buffer GL expects. Attribute locations follow
//! the series' convention: 0 = position, 1 = color, 2 = texture coordinate.

use bytemuck::{Pod, Zeroable};
use glow::HasContext;

/// One vertex attribute within an interleaved layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// Shader attribute location (`layout (location = N)`).
    pub location: u32,
    /// Number of `f32` components.
    pub components: i32,
    /// Byte offset from the start of the vertex.
    pub offset: i32,
}

/// An interleaved vertex layout that can be described to a VAO.
///
/// # Safety
///
/// `ATTRIBUTES` must describe the actual field layout of the implementing
/// type: offsets and component counts are handed to
/// `glVertexAttribPointer` unchecked.
pub unsafe trait VertexLayout: Pod {
    /// The attributes of this layout, in location order.
    const ATTRIBUTES: &'static [Attribute];

    /// Byte stride between consecutive vertices.
    ///
    /// Vertex types here are at most 32 bytes, well within `i32` range.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn stride() -> i32 {
        std::mem::size_of::<Self>() as i32
    }
}

/// Position and color, the layout of the vertex-colors and shader-class
/// variants.
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct ColorVertex {
    /// Clip-space position.
    pub position: [f32; 3],
    /// RGB color, interpolated across the triangle.
    pub color: [f32; 3],
}

unsafe impl VertexLayout for ColorVertex {
    const ATTRIBUTES: &'static [Attribute] = &[
        Attribute {
            location: 0,
            components: 3,
            offset: 0,
        },
        Attribute {
            location: 1,
            components: 3,
            offset: 12,
        },
    ];
}

/// Position, color, and texture coordinate, the layout of the texture
/// variant.
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TexturedVertex {
    /// Clip-space position.
    pub position: [f32; 3],
    /// RGB color, mixed with the sampled texel.
    pub color: [f32; 3],
    /// Texture coordinate in `[0, 1]`.
    pub texcoord: [f32; 2],
}

unsafe impl VertexLayout for TexturedVertex {
    const ATTRIBUTES: &'static [Attribute] = &[
        Attribute {
            location: 0,
            components: 3,
            offset: 0,
        },
        Attribute {
            location: 1,
            components: 3,
            offset: 12,
        },
        Attribute {
            location: 2,
            components: 2,
            offset: 24,
        },
    ];
}

/// The series' triangle with one color per corner: bottom-right red,
/// bottom-left green, top blue.
pub const COLORED_TRIANGLE: [ColorVertex; 3] = [
    ColorVertex {
        position: [0.5, -0.5, 0.0],
        color: [1.0, 0.0, 0.0],
    },
    ColorVertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
    },
    ColorVertex {
        position: [0.0, 0.5, 0.0],
        color: [0.0, 0.0, 1.0],
    },
];

/// The colored triangle with texture coordinates: the bottom edge spans the
/// bottom of the image, the top corner samples the top center.
pub const TEXTURED_TRIANGLE: [TexturedVertex; 3] = [
    TexturedVertex {
        position: [0.5, -0.5, 0.0],
        color: [1.0, 0.0, 0.0],
        texcoord: [1.0, 0.0],
    },
    TexturedVertex {
        position: [-0.5, -0.5, 0.0],
        color: [0.0, 1.0, 0.0],
        texcoord: [0.0, 0.0],
    },
    TexturedVertex {
        position: [0.0, 0.5, 0.0],
        color: [0.0, 0.0, 1.0],
        texcoord: [0.5, 1.0],
    },
];

/// Upload a vertex slice into a fresh VAO + VBO pair (`GL_STATIC_DRAW`) and
/// describe the layout's attributes to the VAO.
///
/// The VAO is left unbound on return; bind it again before drawing.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
///
/// # Errors
///
/// Returns an error string if VAO or VBO creation fails.
pub unsafe fn upload<V: VertexLayout>(
    gl: &glow::Context,
    vertices: &[V],
) -> Result<(glow::VertexArray, glow::Buffer), String> {
    unsafe {
        let vao = gl.create_vertex_array()?;
        let vbo = gl.create_buffer()?;

        gl.bind_vertex_array(Some(vao));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(vertices),
            glow::STATIC_DRAW,
        );

        for attr in V::ATTRIBUTES {
            gl.vertex_attrib_pointer_f32(
                attr.location,
                attr.components,
                glow::FLOAT,
                false,
                V::stride(),
                attr.offset,
            );
            gl.enable_vertex_attrib_array(attr.location);
        }

        gl.bind_vertex_array(None);

        Ok((vao, vbo))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Attribute offsets and component counts must tile the stride exactly,
    /// with no gaps or overlaps.
    fn assert_layout_is_contiguous<V: VertexLayout>() {
        let float_size = i32::try_from(std::mem::size_of::<f32>()).unwrap();
        let mut expected_offset = 0;
        for attr in V::ATTRIBUTES {
            assert_eq!(attr.offset, expected_offset);
            expected_offset += attr.components * float_size;
        }
        assert_eq!(expected_offset, V::stride());
    }

    #[test]
    fn color_vertex_layout_matches_struct() {
        assert_eq!(ColorVertex::stride(), 24);
        assert_layout_is_contiguous::<ColorVertex>();
    }

    #[test]
    fn textured_vertex_layout_matches_struct() {
        assert_eq!(TexturedVertex::stride(), 32);
        assert_layout_is_contiguous::<TexturedVertex>();
    }

    #[test]
    fn attribute_locations_follow_series_convention() {
        let locations: Vec<u32> = TexturedVertex::ATTRIBUTES
            .iter()
            .map(|a| a.location)
            .collect();
        assert_eq!(locations, [0, 1, 2]);
    }

    #[test]
    fn colored_triangle_casts_to_expected_byte_length() {
        let bytes: &[u8] = bytemuck::cast_slice(&COLORED_TRIANGLE);
        assert_eq!(bytes.len(), 3 * 24);
    }

    #[test]
    fn textured_triangle_texcoords_stay_in_unit_range() {
        for v in &TEXTURED_TRIANGLE {
            for &t in &v.texcoord {
                assert!((0.0..=1.0).contains(&t));
            }
        }
    }
}
