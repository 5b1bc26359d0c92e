use crate::components::entity::Entity;
use crate::components::mesh::Shading;
use crate::renderer::instance::{RenderBuffer, SphereInstance};

/// Build the sphere render buffer from a set of entities.
/// Groups instances by shading mode: lit first, unlit after, with
/// `lit_split` at the boundary.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    let mut lit: Vec<SphereInstance> = Vec::new();
    let mut unlit: Vec<SphereInstance> = Vec::new();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let sphere = match &entity.sphere {
            Some(s) => s,
            None => continue,
        };

        let instance = SphereInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            spin: entity.spin,
            radius: sphere.radius,
            texture_slot: sphere.texture as f32,
            lit: if sphere.shading == Shading::Lit { 1.0 } else { 0.0 },
            emissive: sphere.emissive,
        };

        match sphere.shading {
            Shading::Lit => lit.push(instance),
            Shading::Unlit => unlit.push(instance),
        }
    }

    let split = lit.len() as u32;

    for inst in lit {
        buffer.push(inst);
    }
    buffer.set_lit_split(split);
    for inst in unlit {
        buffer.push(inst);
    }
}
