// Binary glTF decoding into flattened, world-space mesh parts.

use super::framing::Aabb;
use glam::{Mat3, Mat4, Vec3};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: u16 },
    #[error("invalid glTF: {0}")]
    Decode(#[from] gltf::Error),
    #[error("model has no drawable geometry")]
    Empty,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// One drawable primitive with its accumulated node transform.
#[derive(Clone, Debug)]
pub struct MeshPart {
    pub name: Option<String>,
    pub world: Mat4,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub base_color: [f32; 4],
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

/// A decoded model and the bounds computed once at load.
#[derive(Clone, Debug)]
pub struct ModelAsset {
    pub parts: Vec<MeshPart>,
    pub bounds: Aabb,
}

impl ModelAsset {
    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.indices.len() / 3).sum()
    }
}

pub fn decode_model(bytes: &[u8]) -> Result<ModelAsset, LoadError> {
    // Buffers only; textures are never sampled.
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
    let buffers = gltf::import_buffers(&document, None, blob)?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(LoadError::Empty)?;

    let mut parts = Vec::new();
    for node in scene.nodes() {
        collect_node(&node, Mat4::IDENTITY, &buffers, &mut parts);
    }
    if parts.is_empty() {
        return Err(LoadError::Empty);
    }

    let bounds = parts.iter().fold(Aabb::EMPTY, |acc, part| {
        let b = Aabb::from_points(
            part.vertices
                .iter()
                .map(|v| part.world.transform_point3(Vec3::from(v.position))),
        );
        acc.union(&b)
    });

    Ok(ModelAsset { parts, bounds })
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<MeshPart>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for prim in mesh.primitives() {
            if prim.mode() != gltf::mesh::Mode::Triangles {
                log::debug!("[asset] skipping non-triangle primitive in {:?}", mesh.name());
                continue;
            }
            if let Some(part) = read_primitive(&prim, buffers, world, mesh.name()) {
                out.push(part);
            }
        }
    }
    for child in node.children() {
        collect_node(&child, world, buffers, out);
    }
}

fn read_primitive(
    prim: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
    world: Mat4,
    name: Option<&str>,
) -> Option<MeshPart> {
    let reader = prim.reader(|buffer| buffers.get(buffer.index()).map(|d| d.0.as_slice()));
    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    if positions.is_empty() {
        return None;
    }
    let indices: Vec<u32> = match reader.read_indices() {
        Some(idx) => idx.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    let normals: Vec<[f32; 3]> = match reader.read_normals() {
        Some(n) => n.collect(),
        None => face_normals(&positions, &indices),
    };
    let vertices = positions
        .iter()
        .zip(normals.iter().chain(std::iter::repeat(&[0.0, 1.0, 0.0])))
        .map(|(p, n)| Vertex {
            position: *p,
            normal: *n,
        })
        .collect();

    Some(MeshPart {
        name: name.map(str::to_owned),
        world,
        vertices,
        indices,
        base_color: prim.material().pbr_metallic_roughness().base_color_factor(),
        // every drawable surface takes part in shadowing
        cast_shadow: true,
        receive_shadow: true,
    })
}

/// Area-weighted vertex normals accumulated from triangle faces.
pub fn face_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from(positions[a]);
        let n = (Vec3::from(positions[b]) - pa).cross(Vec3::from(positions[c]) - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO {
                [0.0, 1.0, 0.0]
            } else {
                n.to_array()
            }
        })
        .collect()
}

/// Inverse-transpose of the upper 3x3, for transforming normals.
pub fn normal_matrix(world: Mat4) -> Mat4 {
    let m = Mat3::from_mat4(world);
    if m.determinant().abs() < f32::EPSILON {
        return Mat4::IDENTITY;
    }
    Mat4::from_mat3(m.inverse().transpose())
}
