//! First program of the series: open a window, upload one triangle, compile
//! an inline vertex/fragment shader pair, and draw it every frame.
//!
//! Everything is done inline on purpose; the later programs extract the
//! repeated pieces into the library.
//!
//! Press Escape to quit or close the window.

use glfw::{Action, Context as _, Key, WindowEvent, WindowMode};
use glow::HasContext;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

const VERTEX_SRC: &str = r"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos, 1.0);
}
";

const FRAGMENT_SRC: &str = r"#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

// One triangle in clip space, position only.
const VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, // bottom left
    0.5, -0.5, 0.0, // bottom right
    0.0, 0.5, 0.0, // top
];

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS)
        .map_err(|e| format!("GLFW initialization failed: {e}"))?;

    glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
    glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
        glfw::OpenGlProfileHint::Core,
    ));
    glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

    let (mut window, events) = glfw
        .create_window(WIDTH, HEIGHT, "LearnOpenGL", WindowMode::Windowed)
        .ok_or_else(|| "Failed to create GLFW window".to_string())?;

    window.make_current();
    window.set_key_polling(true);

    let gl = unsafe { glow::Context::from_loader_function(|s| window.get_proc_address(s).cast()) };

    // Compile both stages and link them, checking each status flag.
    let program = unsafe {
        let program = gl.create_program()?;

        let vs = gl.create_shader(glow::VERTEX_SHADER)?;
        gl.shader_source(vs, VERTEX_SRC);
        gl.compile_shader(vs);
        if !gl.get_shader_compile_status(vs) {
            return Err(format!(
                "vertex shader compile error: {}",
                gl.get_shader_info_log(vs)
            ));
        }

        let fs = gl.create_shader(glow::FRAGMENT_SHADER)?;
        gl.shader_source(fs, FRAGMENT_SRC);
        gl.compile_shader(fs);
        if !gl.get_shader_compile_status(fs) {
            return Err(format!(
                "fragment shader compile error: {}",
                gl.get_shader_info_log(fs)
            ));
        }

        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            return Err(format!(
                "program link error: {}",
                gl.get_program_info_log(program)
            ));
        }

        gl.detach_shader(program, vs);
        gl.detach_shader(program, fs);
        gl.delete_shader(vs);
        gl.delete_shader(fs);

        program
    };

    // Upload the triangle and describe its layout: one vec3 at location 0.
    let (vao, vbo) = unsafe {
        let vao = gl.create_vertex_array()?;
        let vbo = gl.create_buffer()?;

        gl.bind_vertex_array(Some(vao));
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&VERTICES),
            glow::STATIC_DRAW,
        );
        // 3 floats per vertex, 12-byte stride.
        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 12, 0);
        gl.enable_vertex_attrib_array(0);
        gl.bind_vertex_array(None);

        (vao, vbo)
    };

    while !window.should_close() {
        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            if let WindowEvent::Key(Key::Escape, _, Action::Press, _) = event {
                window.set_should_close(true);
            }
        }

        unsafe {
            gl.clear_color(0.2, 0.3, 0.3, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);

            gl.use_program(Some(program));
            gl.bind_vertex_array(Some(vao));
            gl.draw_arrays(glow::TRIANGLES, 0, 3);
        }

        window.swap_buffers();
    }

    unsafe {
        gl.delete_program(program);
        gl.delete_vertex_array(vao);
        gl.delete_buffer(vbo);
    }

    Ok(())
}
