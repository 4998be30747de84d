//! GLFW window and OpenGL 3.3 core-profile context creation.
//!
//! [`GlWindow`] wraps the sequence every tutorial program starts with:
//! initialize GLFW, request a 3.3 core context, open a window, make the
//! context current, and load GL function pointers into a [`glow::Context`].
//! It also owns the per-frame event handling the series shares: Escape
//! requests close, and framebuffer resizes update the viewport.

use std::sync::mpsc::Receiver;

use glfw::{Action, Context as _, Glfw, Key, Window, WindowEvent, WindowMode};
use glow::HasContext;

/// Default window width used by the tutorial programs.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default window height used by the tutorial programs.
pub const DEFAULT_HEIGHT: u32 = 600;
/// The series' clear color (a muted teal).
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

/// A GLFW window with a current OpenGL 3.3 core-profile context and a loaded
/// [`glow::Context`].
///
/// The context is made current on the constructing thread and stays current
/// for the lifetime of the window, so the GL-touching methods here are safe
/// to call; raw GL work done by the caller still goes through
/// [`gl`](Self::gl) and the usual `unsafe` contract.
pub struct GlWindow {
    glfw: Glfw,
    window: Window,
    events: Receiver<(f64, WindowEvent)>,
    gl: glow::Context,
}

impl GlWindow {
    /// Open a window with an OpenGL 3.3 core-profile context and load GL
    /// function pointers.
    ///
    /// Key and framebuffer-size events are polled; the initial viewport is
    /// set to the framebuffer size.
    ///
    /// # Errors
    ///
    /// Returns an error string if GLFW initialization or window creation
    /// fails.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS)
            .map_err(|e| format!("GLFW initialization failed: {e}"))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(width, height, title, WindowMode::Windowed)
            .ok_or_else(|| "Failed to create GLFW window".to_string())?;

        window.make_current();
        window.set_key_polling(true);
        window.set_framebuffer_size_polling(true);

        let gl =
            unsafe { glow::Context::from_loader_function(|s| window.get_proc_address(s).cast()) };

        let (fb_width, fb_height) = window.get_framebuffer_size();
        // The context was just made current on this thread.
        unsafe { gl.viewport(0, 0, fb_width, fb_height) };

        log::debug!("opened {width}x{height} window with a 3.3 core context");

        Ok(Self {
            glfw,
            window,
            events,
            gl,
        })
    }

    /// The loaded GL function table.
    #[must_use]
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Whether a close was requested (window close button or Escape).
    #[must_use]
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Seconds elapsed since GLFW was initialized, for animated uniforms.
    ///
    /// Truncating to `f32` is fine at tutorial time scales.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn time(&self) -> f32 {
        self.glfw.get_time() as f32
    }

    /// Poll and handle pending window events.
    ///
    /// Escape requests close; framebuffer resizes are logged and update the
    /// GL viewport. Everything else is ignored.
    pub fn process_events(&mut self) {
        self.glfw.poll_events();

        for (_, event) in glfw::flush_messages(&self.events) {
            match event {
                WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                    self.window.set_should_close(true);
                }
                WindowEvent::FramebufferSize(width, height) => {
                    log::info!("resizing viewport to width {width} height {height}");
                    // The context is current for the lifetime of the window.
                    unsafe { self.gl.viewport(0, 0, width, height) };
                }
                _ => {}
            }
        }
    }

    /// Present the frame.
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}
