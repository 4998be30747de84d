//! Helpers shared by the `learn-glow` tutorial programs (OpenGL via [glow],
//! windowing via [glfw]).
//!
//! The binaries under `src/bin/` form a progressive series: each one opens a
//! window, uploads a hardcoded triangle, compiles a vertex/fragment shader
//! pair, and draws every frame. The early programs inline everything; the
//! later ones use the pieces extracted here:
//!
//! - [`GlWindow`]: GLFW window with a 3.3 core-profile context and a loaded
//!   [`glow::Context`], handling Escape-to-close and framebuffer resizes.
//! - [`ShaderProgram`] / [`ProgramBuilder`]: shader compilation and linking,
//!   either from in-memory sources or from files on disk, with uniform
//!   setters.
//! - [`vertex`]: `#[repr(C)]` vertex layouts and VAO/VBO upload.
//! - [`TextureImage`]: image decoding and GL texture upload.
//!
//! # Safety
//!
//! Functions that issue raw GL calls are `unsafe` and require a valid,
//! current OpenGL context.
//!
//! [glow]: https://docs.rs/glow
//! [glfw]: https://docs.rs/glfw

pub mod shader;
pub mod texture;
pub mod vertex;
pub mod window;

pub use shader::{ProgramBuilder, ShaderProgram};
pub use texture::TextureImage;
pub use window::GlWindow;
