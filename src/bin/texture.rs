//! Fifth program of the series: the triangle gains texture coordinates and
//! the fragment shader samples a texture, mixed with the interpolated vertex
//! color.
//!
//! The texture path is the sole (optional) command line argument; PNG and
//! JPEG are supported. Without an argument a generated checkerboard is used
//! so the program runs with no assets on disk.
//!
//! Press Escape to quit or close the window.

use glow::HasContext;
use learn_glow::vertex::{self, TEXTURED_TRIANGLE};
use learn_glow::window::{CLEAR_COLOR, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use learn_glow::{GlWindow, ProgramBuilder, TextureImage};

const VERTEX_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/texture.vert");
const FRAGMENT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/texture.frag");

/// Checkerboard fallback dimensions: 8x8 cells of 32 pixels.
const FALLBACK_SIZE: u32 = 256;
const FALLBACK_CELL: u32 = 32;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let image = match std::env::args().nth(1) {
        Some(path) => TextureImage::open(path)?,
        None => {
            log::info!("no texture argument given, using a generated checkerboard");
            TextureImage::checkerboard(FALLBACK_SIZE, FALLBACK_SIZE, FALLBACK_CELL)
        }
    };

    let mut window = GlWindow::new("LearnOpenGL", DEFAULT_WIDTH, DEFAULT_HEIGHT)?;

    let program = unsafe {
        ProgramBuilder::new()
            .vertex(VERTEX_PATH)
            .fragment(FRAGMENT_PATH)
            .build(window.gl())
    }?;

    let (vao, vbo) = unsafe { vertex::upload(window.gl(), &TEXTURED_TRIANGLE) }?;
    let texture = unsafe { image.upload(window.gl()) }?;

    // Static uniforms: sampler on unit 0, vertex color tinting on, and an
    // 80/20 texel/color mix.
    unsafe {
        let gl = window.gl();
        program.use_program(gl);
        program.set_int(gl, "uTexture", 0);
        program.set_bool(gl, "uUseVertexColor", true);
        program.set_float(gl, "uMixAmount", 0.8);
    }

    while !window.should_close() {
        window.process_events();

        let gl = window.gl();
        unsafe {
            gl.clear_color(
                CLEAR_COLOR[0],
                CLEAR_COLOR[1],
                CLEAR_COLOR[2],
                CLEAR_COLOR[3],
            );
            gl.clear(glow::COLOR_BUFFER_BIT);

            program.use_program(gl);
            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            gl.bind_vertex_array(Some(vao));
            gl.draw_arrays(glow::TRIANGLES, 0, 3);
        }

        window.swap_buffers();
    }

    let gl = window.gl();
    unsafe {
        program.destroy(gl);
        gl.delete_vertex_array(vao);
        gl.delete_buffer(vbo);
        gl.delete_texture(texture);
    }

    Ok(())
}
