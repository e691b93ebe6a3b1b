use thiserror::Error;

use crate::geometry::{GeometryError, PolygonMesh};
use crate::gl::{
    build_program, check, GlApi, GlError, MeshBuffers, PipelineError, ShaderSources, Transient,
};

use super::{SceneConfig, Viewport};

#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Gl(#[from] GlError),
}

/// GPU state of the rendered polygon.
///
/// Owns the shader program and the mesh buffers. `teardown` consumes the
/// scene, so each handle is deleted exactly once.
pub struct PolygonScene<G: GlApi> {
    program: G::Program,
    mesh: MeshBuffers<G>,
    corners: u32,
    viewport: Viewport,
}

impl<G: GlApi> PolygonScene<G> {
    /// Loads the shader sources from `config.shader_dir`, then builds the
    /// scene with [`PolygonScene::from_sources`].
    pub fn init(gl: &G, config: &SceneConfig, viewport: Viewport) -> Result<Self, SceneError> {
        let sources = ShaderSources::load(&config.shader_dir)?;
        Self::from_sources(gl, &sources, config, viewport)
    }

    /// Builds the program, uploads the polygon mesh, aligns the viewport to the
    /// framebuffer and sets the clear color.
    ///
    /// On error every GPU object created so far is deleted again.
    pub fn from_sources(
        gl: &G,
        sources: &ShaderSources,
        config: &SceneConfig,
        viewport: Viewport,
    ) -> Result<Self, SceneError> {
        // Validate corners before any driver call.
        let mesh = PolygonMesh::new(config.corners)?;

        let program = Transient::new(gl, build_program(gl, sources)?, G::delete_program);
        let buffers = MeshBuffers::upload(gl, &mesh)?;
        drop(mesh);

        if let Err(e) = configure_frame(gl, viewport, config.clear_color) {
            if let Err(cleanup) = buffers.delete(gl) {
                log::warn!("failed to release mesh buffers: {cleanup}");
            }
            return Err(e.into());
        }

        log::info!(
            "scene ready: {}-gon, viewport {}x{}",
            config.corners,
            viewport.width,
            viewport.height
        );

        Ok(Self {
            program: program.release(),
            mesh: buffers,
            corners: config.corners,
            viewport,
        })
    }

    pub fn corners(&self) -> u32 {
        self.corners
    }

    pub fn program(&self) -> G::Program {
        self.program
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Clears the color buffer and draws the polygon as one triangle fan.
    pub fn draw(&self, gl: &G) -> Result<(), SceneError> {
        gl.clear_color_buffer();
        check(gl, "glClear")?;
        self.mesh.draw(gl)?;
        Ok(())
    }

    /// Realigns the viewport after a framebuffer resize.
    ///
    /// Zero-sized framebuffers (minimized windows) are ignored.
    pub fn resize(&mut self, gl: &G, viewport: Viewport) -> Result<(), SceneError> {
        if !viewport.is_valid() || viewport == self.viewport {
            return Ok(());
        }
        let (width, height) = viewport.as_gl();
        gl.viewport(width, height);
        check(gl, "glViewport")?;
        self.viewport = viewport;
        Ok(())
    }

    /// Deletes the program, the vertex array and the vertex buffer.
    ///
    /// All three deletions are attempted; the first error is returned.
    pub fn teardown(self, gl: &G) -> Result<(), SceneError> {
        log::info!("tearing down");

        gl.delete_program(self.program);
        let program = check(gl, "glDeleteProgram");
        let mesh = self.mesh.delete(gl);

        program.and(mesh).map_err(SceneError::from)
    }
}

fn configure_frame<G: GlApi>(gl: &G, viewport: Viewport, clear: [f32; 4]) -> Result<(), GlError> {
    let (width, height) = viewport.as_gl();
    gl.viewport(width, height);
    check(gl, "glViewport")?;

    gl.clear_color(clear);
    check(gl, "glClearColor")
}
