//! Fourth program of the series: the shader pair now lives in files under
//! `shaders/` and is loaded through [`ProgramBuilder`], the helper the
//! earlier programs were building toward. A `float` uniform driven by the
//! elapsed time sweeps the triangle left and right.
//!
//! Press Escape to quit or close the window.

use glow::HasContext;
use learn_glow::vertex::{self, COLORED_TRIANGLE};
use learn_glow::window::{CLEAR_COLOR, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use learn_glow::{GlWindow, ProgramBuilder};

const VERTEX_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/vertex_color.vert");
const FRAGMENT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/vertex_color.frag");

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut window = GlWindow::new("LearnOpenGL", DEFAULT_WIDTH, DEFAULT_HEIGHT)?;

    let program = unsafe {
        ProgramBuilder::new()
            .vertex(VERTEX_PATH)
            .fragment(FRAGMENT_PATH)
            .build(window.gl())
    }?;

    let (vao, vbo) = unsafe { vertex::upload(window.gl(), &COLORED_TRIANGLE) }?;

    while !window.should_close() {
        window.process_events();

        // Sweep the triangle between -0.5 and 0.5 on the X axis.
        let offset_x = window.time().sin() * 0.5;

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
            program.set_float(gl, "uOffsetX", offset_x);

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
    }

    Ok(())
}
