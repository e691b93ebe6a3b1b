use anyhow::{Context, Result};

use ngon_engine::core::{App, AppControl, FrameCtx};
use ngon_engine::glow;
use ngon_engine::scene::{PolygonScene, SceneConfig};

/// Draws one hue-wheel polygon until the window closes.
pub struct PolygonApp {
    config: SceneConfig,
    scene: Option<PolygonScene<glow::Context>>,
}

impl PolygonApp {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            scene: None,
        }
    }
}

impl App for PolygonApp {
    fn on_init(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()> {
        let scene = PolygonScene::init(ctx.gl, &self.config, ctx.viewport).with_context(|| {
            format!(
                "failed to set up a {}-gon with shaders from {}",
                self.config.corners,
                self.config.shader_dir.display()
            )
        })?;
        self.scene = Some(scene);
        Ok(())
    }

    fn on_resize(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()> {
        if let Some(scene) = self.scene.as_mut() {
            scene.resize(ctx.gl, ctx.viewport)?;
        }
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl> {
        let Some(scene) = self.scene.as_ref() else {
            return Ok(AppControl::Exit);
        };
        scene.draw(ctx.gl).context("draw failed")?;
        Ok(AppControl::Continue)
    }

    fn on_exit(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()> {
        match self.scene.take() {
            Some(scene) => scene.teardown(ctx.gl).context("teardown failed"),
            None => Ok(()),
        }
    }
}
