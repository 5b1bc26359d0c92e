use helio_engine::{
    build_render_buffer, AssetError, AssetManifest, CameraUniform, EngineContext, FrameClock,
    Game, GameConfig, InputEvent, InputQueue, ProtocolLayout, RenderBuffer, TextureRegistry,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    /// Camera uniform republished each frame for SAB reads.
    camera_uniform: CameraUniform,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_spheres);
        let camera_uniform = ctx.camera.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            render_buffer,
            camera_uniform,
            clock: FrameClock::new(),
            config,
            layout,
            initialized: false,
        }
    }

    /// Load the asset manifest and initialize the game against it.
    /// Scene setup needs texture slots, so init waits for the manifest.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), AssetError> {
        let manifest = AssetManifest::from_json(json)?;
        self.ctx.textures = TextureRegistry::from_manifest(&manifest);
        self.init()
    }

    /// Initialize the game. Idempotent — later calls are no-ops.
    pub fn init(&mut self) -> Result<(), AssetError> {
        if self.initialized {
            return Ok(());
        }
        self.game.init(&mut self.ctx)?;
        self.camera_uniform = self.ctx.camera.uniform();
        self.initialized = true;
        log::info!(
            "scene ready: {} entities, {} rings, {} lights",
            self.ctx.scene.len(),
            self.ctx.rings.count(),
            self.ctx.lights.count(),
        );
        Ok(())
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the game with monotone elapsed time, then
    /// rebuild the published buffers.
    pub fn frame(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let elapsed_ms = self.clock.frame(now_ms);
        self.game.update(&mut self.ctx, &self.input, elapsed_ms);

        // Drain input after update
        self.input.drain();

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.camera_uniform = self.ctx.camera.uniform();
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn sphere_instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn sphere_instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn lit_split(&self) -> u32 {
        self.render_buffer.lit_split
    }

    pub fn ring_instances_ptr(&self) -> *const f32 {
        self.ctx.rings.rings_ptr()
    }

    pub fn ring_instance_count(&self) -> u32 {
        self.ctx.rings.count()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient_r(&self) -> f32 {
        self.ctx.lights.ambient()[0]
    }

    pub fn ambient_g(&self) -> f32 {
        self.ctx.lights.ambient()[1]
    }

    pub fn ambient_b(&self) -> f32 {
        self.ctx.lights.ambient()[2]
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_spheres(&self) -> u32 {
        self.layout.max_spheres as u32
    }

    pub fn max_rings(&self) -> u32 {
        self.layout.max_rings as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn sphere_segments(&self) -> u32 {
        self.config.sphere_segments
    }
}
