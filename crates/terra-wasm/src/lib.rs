use terra_core::algebra::Matrix;
use terra_core::config::SceneConfig;
use terra_core::mesh::{self, GpuVertex, Mesh};
use terra_core::scene::{FrameTransforms, Scene};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Per-frame uniform block: 11 column-major matrices followed by the
/// vec4-padded camera and light vectors. 832 bytes.
#[repr(C)]
#[derive(Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuFrameUniforms {
    projection: [f32; 16],
    camera: [f32; 16],
    light_model: [f32; 16],
    spotlight_model: [f32; 16],
    ground: [f32; 16],
    sky: [f32; 16],
    water_drops: [[f32; 16]; 4],
    identity: [f32; 16],
    camera_position: [f32; 4],
    light_position: [f32; 4],
    light_color: [f32; 4],
    spotlight_position: [f32; 4],
    spotlight_direction: [f32; 4],
    spotlight_color: [f32; 4],
    water_level: [f32; 4],
    _pad: [f32; 4],
}

fn vec3_padded(v: glam::DVec3) -> [f32; 4] {
    v.as_vec3().extend(0.0).to_array()
}

impl GpuFrameUniforms {
    fn write(&mut self, frame: &FrameTransforms, water_level: i32) {
        self.projection = frame.projection.to_cols_array_f32();
        self.camera = frame.camera.to_cols_array_f32();
        self.light_model = frame.light_model.to_cols_array_f32();
        self.spotlight_model = frame.spotlight_model.to_cols_array_f32();
        self.ground = frame.ground.to_cols_array_f32();
        self.sky = frame.sky.to_cols_array_f32();
        for (dst, src) in self.water_drops.iter_mut().zip(&frame.water_drops) {
            *dst = src.to_cols_array_f32();
        }
        self.identity = Matrix::IDENTITY.to_cols_array_f32();
        self.camera_position = vec3_padded(frame.camera_position);
        self.light_position = vec3_padded(frame.light_position);
        self.light_color = frame.light_color.to_array();
        self.spotlight_position = vec3_padded(frame.spotlight_position);
        self.spotlight_direction = vec3_padded(frame.spotlight_direction);
        self.spotlight_color = frame.spotlight_color.to_array();
        self.water_level = [water_level as f32, 0.0, 0.0, 0.0];
    }
}

fn to_js_error(err: terra_core::AlgebraError) -> JsError {
    JsError::new(&err.to_string())
}

#[wasm_bindgen]
pub struct SceneWorld {
    scene: Scene,
    cube: &'static Mesh,
    sphere: &'static Mesh,
    cube_vertices: Vec<GpuVertex>,
    sphere_vertices: Vec<GpuVertex>,
    uniforms: GpuFrameUniforms,
}

#[wasm_bindgen]
impl SceneWorld {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SceneWorld, JsError> {
        let cube = mesh::cube().map_err(to_js_error)?;
        let sphere = mesh::sphere().map_err(to_js_error)?;
        tracing::info!(
            cube_vertices = cube.vertex_count(),
            sphere_vertices = sphere.vertex_count(),
            "SceneWorld created"
        );

        let mut world = SceneWorld {
            scene: Scene::new(SceneConfig::default()),
            cube,
            sphere,
            cube_vertices: cube.interleaved(),
            sphere_vertices: sphere.interleaved(),
            uniforms: GpuFrameUniforms::default(),
        };
        world.frame(0.0);
        Ok(world)
    }

    /// Recompute every per-frame transform for `time_ms` and return the
    /// time spent in milliseconds.
    #[wasm_bindgen]
    pub fn frame(&mut self, time_ms: f64) -> f32 {
        let start = js_sys::Date::now();
        let frame = self.scene.frame(time_ms);
        self.uniforms.write(&frame, self.scene.water.level());
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    #[wasm_bindgen]
    pub fn get_uniform_ptr(&self) -> *const f32 {
        bytemuck::bytes_of(&self.uniforms).as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_uniform_byte_length(&self) -> usize {
        std::mem::size_of::<GpuFrameUniforms>()
    }

    #[wasm_bindgen]
    pub fn get_cube_vertex_ptr(&self) -> *const f32 {
        self.cube_vertices.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_cube_vertex_byte_length(&self) -> usize {
        std::mem::size_of_val(self.cube_vertices.as_slice())
    }

    #[wasm_bindgen]
    pub fn get_sphere_vertex_ptr(&self) -> *const f32 {
        self.sphere_vertices.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_sphere_vertex_byte_length(&self) -> usize {
        std::mem::size_of_val(self.sphere_vertices.as_slice())
    }

    #[wasm_bindgen]
    pub fn cube_vertex_count(&self) -> usize {
        self.cube.vertex_count()
    }

    #[wasm_bindgen]
    pub fn sphere_vertex_count(&self) -> usize {
        self.sphere.vertex_count()
    }

    #[wasm_bindgen]
    pub fn cube_positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.cube.position_buffer().as_slice())
    }

    #[wasm_bindgen]
    pub fn cube_tex_coords(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.cube.tex_coord_buffer().as_slice())
    }

    #[wasm_bindgen]
    pub fn cube_normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.cube.normal_buffer().as_slice())
    }

    /// Sphere positions. These double as its normals.
    #[wasm_bindgen]
    pub fn sphere_positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.sphere.position_buffer().as_slice())
    }

    /// Column-major model matrix of block `(x, y, z)`.
    #[wasm_bindgen]
    pub fn block_matrix(&self, x: u32, y: u32, z: u32) -> js_sys::Float32Array {
        let m = self.scene.block_matrix(x, y, z).to_cols_array_f32();
        js_sys::Float32Array::from(&m[..])
    }

    /// Column-major model matrix of the water block over column `(x, z)`,
    /// or `undefined` when the water is hidden.
    #[wasm_bindgen]
    pub fn water_block_matrix(&self, x: u32, z: u32) -> Option<js_sys::Float32Array> {
        self.scene
            .water_block_matrix(x, z)
            .map(|m| js_sys::Float32Array::from(&m.to_cols_array_f32()[..]))
    }

    /// Pointer drag in normalized canvas units, positive y up.
    #[wasm_bindgen]
    pub fn drag_camera(&mut self, dx: f64, dy: f64) -> Result<(), JsError> {
        self.scene.camera.drag(dx, dy).map_err(to_js_error)
    }

    /// Turn by `direction` yaw steps (negative turns the other way).
    #[wasm_bindgen]
    pub fn yaw_camera(&mut self, direction: f64) -> Result<(), JsError> {
        let step = self.scene.config.camera_yaw_step;
        self.scene.camera.yaw(direction * step).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn move_camera(&mut self, forward_steps: f64, right_steps: f64) -> Result<(), JsError> {
        self.scene
            .camera
            .move_by(forward_steps, right_steps)
            .map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn set_light_position(&mut self, x: f64, y: f64, z: f64) {
        self.scene.light.set_position(glam::DVec3::new(x, y, z));
    }

    #[wasm_bindgen]
    pub fn set_light_height(&mut self, y: f64) {
        self.scene.light.set_height(y);
    }

    #[wasm_bindgen]
    pub fn set_light_color(&mut self, r: f32, g: f32, b: f32) {
        let a = self.scene.light.color.w;
        self.scene.light.color = glam::Vec4::new(r, g, b, a);
    }

    #[wasm_bindgen]
    pub fn set_auto_move_light(&mut self, enabled: bool) {
        self.scene.light.auto_move = enabled;
    }

    #[wasm_bindgen]
    pub fn light_position(&self) -> js_sys::Float32Array {
        let p = self.scene.light.position.as_vec3().to_array();
        js_sys::Float32Array::from(&p[..])
    }

    #[wasm_bindgen]
    pub fn raise_water(&mut self) {
        self.scene.water.raise();
    }

    #[wasm_bindgen]
    pub fn lower_water(&mut self) {
        self.scene.water.lower();
    }

    #[wasm_bindgen]
    pub fn water_level(&self) -> i32 {
        self.scene.water.level()
    }
}
