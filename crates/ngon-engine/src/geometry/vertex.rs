use bytemuck::{Pod, Zeroable};
use std::mem::{offset_of, size_of};

use super::Rgb8;

/// Shader attribute location of `Vertex::position`.
pub const ATTRIB_POSITION: u32 = 0;
/// Shader attribute location of `Vertex::color`.
pub const ATTRIB_COLOR: u32 = 1;

/// Vertex layout (16 bytes):
///
///  offset  0  position  [f32; 3]  loc 0
///  offset 12  color     [u8; 3]   loc 1  (normalized to 0..1 on the GPU)
///  offset 15  _pad      u8
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [u8; 3],
    _pad: u8,
}

/// Component type of a vertex attribute as stored in the buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttribFormat {
    F32,
    U8,
}

/// One interleaved attribute of `Vertex`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
    pub format: AttribFormat,
    pub normalized: bool,
    pub offset: i32,
}

impl Vertex {
    pub const STRIDE: i32 = size_of::<Vertex>() as i32;

    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            location: ATTRIB_POSITION,
            components: 3,
            format: AttribFormat::F32,
            normalized: false,
            offset: offset_of!(Vertex, position) as i32,
        },
        VertexAttribute {
            location: ATTRIB_COLOR,
            components: 3,
            format: AttribFormat::U8,
            normalized: true,
            offset: offset_of!(Vertex, color) as i32,
        },
    ];

    #[inline]
    pub const fn new(position: [f32; 3], color: Rgb8) -> Self {
        Self {
            position,
            color: [color.r, color.g, color.b],
            _pad: 0,
        }
    }

    #[inline]
    pub const fn rgb(&self) -> Rgb8 {
        Rgb8::new(self.color[0], self.color[1], self.color[2])
    }
}
