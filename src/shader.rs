//! Shader compilation, linking, and the small program wrapper the later
//! tutorial variants use.
//!
//! Two entry points:
//!
//! - [`compile_program`] compiles a vertex/fragment pair from in-memory
//!   source strings (the early variants keep their GLSL inline).
//! - [`ProgramBuilder`] reads each stage from a file on disk and links the
//!   result into a [`ShaderProgram`], which carries uniform setters.

use std::fs;
use std::path::{Path, PathBuf};

use glow::HasContext;

/// A shader stage accepted by [`ProgramBuilder::add_stage`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader (`GL_VERTEX_SHADER`).
    Vertex,
    /// Fragment shader (`GL_FRAGMENT_SHADER`).
    Fragment,
}

impl ShaderStage {
    /// The GL enum value for this stage.
    #[must_use]
    pub fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    /// Human-readable stage name for error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// Compile a shader program from vertex and fragment source strings.
///
/// The compiled shader objects are detached and deleted after successful
/// linking, so only the program handle needs to be cleaned up by the caller.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
///
/// # Errors
///
/// Returns a descriptive error string (including the GL info log) if shader
/// compilation or program linking fails.
pub unsafe fn compile_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<glow::Program, String> {
    let program = unsafe { gl.create_program() }?;

    let vs = unsafe { compile_shader(gl, ShaderStage::Vertex, vertex_src) }?;
    let fs = unsafe { compile_shader(gl, ShaderStage::Fragment, fragment_src) }?;

    unsafe {
        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            gl.delete_shader(vs);
            gl.delete_shader(fs);
            return Err(format!("program link error: {log}"));
        }

        // Shaders can be detached and deleted after successful linking.
        gl.detach_shader(program, vs);
        gl.detach_shader(program, fs);
        gl.delete_shader(vs);
        gl.delete_shader(fs);
    }

    Ok(program)
}

/// Compile a single shader stage from source.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
unsafe fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, String> {
    unsafe {
        let shader = gl.create_shader(stage.gl_type())?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(format!("{} shader compile error: {log}", stage.name()));
        }

        Ok(shader)
    }
}

/// Read a GLSL source file, naming the path in the error message.
fn read_source(path: &Path) -> Result<String, String> {
    fs::read_to_string(path)
        .map_err(|e| format!("could not read shader file {}: {e}", path.display()))
}

/// A linked shader program with uniform setters.
///
/// The setters look the uniform up by name on every call, exactly like the
/// tutorial series does; programs this small have no reason to cache
/// locations. A lookup miss is logged rather than treated as fatal, since GL
/// drivers legally optimize unused uniforms away.
pub struct ShaderProgram {
    program: glow::Program,
}

impl ShaderProgram {
    /// Compile and link a program from in-memory sources.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    ///
    /// # Errors
    ///
    /// Returns the compile or link error, including the GL info log.
    pub unsafe fn from_sources(
        gl: &glow::Context,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, String> {
        let program = unsafe { compile_program(gl, vertex_src, fragment_src) }?;
        Ok(Self { program })
    }

    /// The raw program handle.
    #[must_use]
    pub fn id(&self) -> glow::Program {
        self.program
    }

    /// Install this program as the active one (`glUseProgram`).
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    pub unsafe fn use_program(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) };
    }

    /// Set a `bool` uniform. The program must currently be in use.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    pub unsafe fn set_bool(&self, gl: &glow::Context, name: &str, value: bool) {
        unsafe { self.set_int(gl, name, i32::from(value)) };
    }

    /// Set an `int` uniform (also used for sampler units). The program must
    /// currently be in use.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    pub unsafe fn set_int(&self, gl: &glow::Context, name: &str, value: i32) {
        unsafe {
            match gl.get_uniform_location(self.program, name) {
                Some(location) => gl.uniform_1_i32(Some(&location), value),
                None => log::warn!("uniform {name} not found in program"),
            }
        }
    }

    /// Set a `float` uniform. The program must currently be in use.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    pub unsafe fn set_float(&self, gl: &glow::Context, name: &str, value: f32) {
        unsafe {
            match gl.get_uniform_location(self.program, name) {
                Some(location) => gl.uniform_1_f32(Some(&location), value),
                None => log::warn!("uniform {name} not found in program"),
            }
        }
    }

    /// Delete the underlying GL program.
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context. Must be called at most once.
    pub unsafe fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) };
    }
}

/// Builds a [`ShaderProgram`] from shader source files.
///
/// Stage paths are collected first; file reading, compilation, and linking
/// all happen in [`build`](Self::build), which reports the first failure.
///
/// ```no_run
/// # unsafe fn example(gl: &glow::Context) -> Result<(), String> {
/// use learn_glow::ProgramBuilder;
///
/// let program = ProgramBuilder::new()
///     .vertex("shaders/vertex_color.vert")
///     .fragment("shaders/vertex_color.frag")
///     .build(gl)?;
/// # Ok(()) }
/// ```
#[derive(Default)]
pub struct ProgramBuilder {
    stages: Vec<(ShaderStage, PathBuf)>,
}

impl ProgramBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shader stage read from `path`.
    #[must_use]
    pub fn add_stage(mut self, stage: ShaderStage, path: impl AsRef<Path>) -> Self {
        self.stages.push((stage, path.as_ref().to_path_buf()));
        self
    }

    /// Add a vertex shader read from `path`.
    #[must_use]
    pub fn vertex(self, path: impl AsRef<Path>) -> Self {
        self.add_stage(ShaderStage::Vertex, path)
    }

    /// Add a fragment shader read from `path`.
    #[must_use]
    pub fn fragment(self, path: impl AsRef<Path>) -> Self {
        self.add_stage(ShaderStage::Fragment, path)
    }

    /// Read all stage sources from disk.
    fn load_sources(&self) -> Result<Vec<(ShaderStage, String)>, String> {
        self.stages
            .iter()
            .map(|(stage, path)| Ok((*stage, read_source(path)?)))
            .collect()
    }

    /// Read, compile, and link all added stages into a [`ShaderProgram`].
    ///
    /// # Safety
    ///
    /// Requires a valid, current OpenGL context.
    ///
    /// # Errors
    ///
    /// Returns an error if no stages were added, a source file cannot be
    /// read, a stage fails to compile, or the program fails to link.
    pub unsafe fn build(self, gl: &glow::Context) -> Result<ShaderProgram, String> {
        if self.stages.is_empty() {
            return Err("no shader stages added to program builder".to_string());
        }

        let sources = self.load_sources()?;
        let program = unsafe { gl.create_program() }?;
        let mut shaders = Vec::with_capacity(sources.len());

        for (stage, source) in &sources {
            let shader = match unsafe { compile_shader(gl, *stage, source) } {
                Ok(shader) => shader,
                Err(e) => {
                    unsafe { delete_all(gl, program, &shaders) };
                    return Err(e);
                }
            };
            unsafe { gl.attach_shader(program, shader) };
            shaders.push(shader);
        }

        unsafe {
            gl.link_program(program);
            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                delete_all(gl, program, &shaders);
                return Err(format!("program link error: {log}"));
            }

            for shader in shaders {
                gl.detach_shader(program, shader);
                gl.delete_shader(shader);
            }
        }

        Ok(ShaderProgram { program })
    }
}

/// Delete a program and any stage objects created so far.
///
/// # Safety
///
/// Requires a valid, current OpenGL context.
unsafe fn delete_all(gl: &glow::Context, program: glow::Program, shaders: &[glow::Shader]) {
    unsafe {
        gl.delete_program(program);
        for &shader in shaders {
            gl.delete_shader(shader);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn stage_gl_types_match_gl_constants() {
        assert_eq!(ShaderStage::Vertex.gl_type(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_type(), glow::FRAGMENT_SHADER);
    }

    #[test]
    fn read_source_names_missing_file() {
        let path = Path::new("definitely/not/a/shader.vert");
        let err = read_source(path).unwrap_err();
        assert!(err.contains("definitely/not/a/shader.vert"), "{err}");
    }

    #[test]
    fn load_sources_reads_stage_files_in_order() {
        let dir = std::env::temp_dir().join("learn-glow-shader-test");
        fs::create_dir_all(&dir).unwrap();
        let vs_path = dir.join("a.vert");
        let fs_path = dir.join("a.frag");
        fs::write(&vs_path, "void main() {}").unwrap();
        fs::write(&fs_path, "void main() { discard; }").unwrap();

        let builder = ProgramBuilder::new().vertex(&vs_path).fragment(&fs_path);
        let sources = builder.load_sources().unwrap();

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].0, ShaderStage::Vertex);
        assert_eq!(sources[0].1, "void main() {}");
        assert_eq!(sources[1].0, ShaderStage::Fragment);
        assert!(sources[1].1.contains("discard"));
    }

    #[test]
    fn load_sources_fails_on_first_missing_stage() {
        let builder = ProgramBuilder::new()
            .vertex("missing.vert")
            .fragment("missing.frag");
        let err = builder.load_sources().unwrap_err();
        assert!(err.contains("missing.vert"), "{err}");
    }
}
