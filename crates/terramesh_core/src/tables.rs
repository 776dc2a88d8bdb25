//! Lookup tables for cube and tetrahedron polygonization
//!
//! Cube corners follow the Paul Bourke ordering:
//!
//! ```text
//! 0:(0,0,0) 1:(1,0,0) 2:(1,1,0) 3:(0,1,0)
//! 4:(0,0,1) 5:(1,0,1) 6:(1,1,1) 7:(0,1,1)
//! ```
//!
//! Marching cubes uses the 12 true cube edges. Marching tetrahedra extends
//! the edge list to 19 (12 cube edges + 6 face diagonals + 1 body diagonal)
//! to cover the edges introduced by the fixed 6-tetrahedron decomposition.

use terramesh_math::IVec3;

/// Corner offsets from a cell's minimum-index corner, Bourke order
pub const CUBE_VERTEX_OFFSETS: [IVec3; 8] = [
    IVec3::new(0, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(1, 1, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(1, 0, 1),
    IVec3::new(1, 1, 1),
    IVec3::new(0, 1, 1),
];

/// For each of the 12 cube edges, the pair of corners it connects
pub const VERTICES_ON_EDGE: [[usize; 2]; 12] = [
    [0, 1], [1, 2], [2, 3], [3, 0],
    [4, 5], [5, 6], [6, 7], [7, 4],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

/// For each of the 19 extended edges, the pair of corners it connects.
/// Edges 0-11 are the cube edges, 12-17 the face diagonals cut by the
/// tetrahedral decomposition, 18 the body diagonal.
pub const CUBE_VERTICES_ON_EDGE: [[usize; 2]; 19] = [
    [0, 1], [1, 2], [2, 3], [0, 3],
    [4, 5], [5, 6], [6, 7], [4, 7],
    [0, 4], [1, 5], [2, 6], [3, 7],
    [1, 4], [2, 5], [2, 7], [3, 4],
    [0, 2], [4, 6], [2, 4],
];

/// Corner pair -> extended edge id, -1 where the pair is not connected
pub const CUBE_VERTEX_PAIR_TO_EDGE: [[i8; 8]; 8] = [
    [-1,  0, 16,  3,  8, -1, -1, -1],
    [ 0, -1,  1, -1, 12,  9, -1, -1],
    [16,  1, -1,  2, 18, 13, 10, 14],
    [ 3, -1,  2, -1, 15, -1, -1, 11],
    [ 8, 12, 18, 15, -1,  4, 17,  7],
    [-1,  9, 13, -1,  4, -1,  5, -1],
    [-1, -1, 10, -1, 17,  5, -1,  6],
    [-1, -1, 14, 11,  7, -1,  6, -1],
];

/// The 6 tetrahedra that partition a cube, as quadruples of corner indices.
/// The face diagonals agree with the neighbouring cell's decomposition, so
/// adjoining cells triangulate shared faces consistently.
pub const TETRAHEDRON_LIST: [[usize; 4]; 6] = [
    [0, 1, 2, 4],
    [1, 2, 4, 5],
    [2, 4, 5, 6],
    [0, 2, 3, 4],
    [2, 3, 4, 7],
    [2, 7, 4, 6],
];

/// For each of a tetrahedron's 6 local edges, the pair of local corners
pub const TETRA_VERTICES_ON_EDGE: [[usize; 2]; 6] = [
    [0, 1], [1, 2], [0, 2],
    [0, 3], [1, 3], [2, 3],
];

/// Crossed-edge bitmask per 4-bit tetrahedron configuration
pub const TETRA_EDGE_TABLE: [u16; 16] = [
    0, 13, 19, 30, 38, 43, 53, 56,
    56, 53, 43, 38, 30, 19, 13, 0,
];

/// Triangle strip per tetrahedron configuration, local edge ids, -1 ends
/// the strip. A fourth entry marks the quad case (two triangles).
pub const TETRA_TRI_TABLE: [[i8; 5]; 16] = [
    [-1, -1, -1, -1, -1],
    [ 0,  3,  2, -1, -1],
    [ 0,  1,  4, -1, -1],
    [ 1,  4,  2,  3, -1],
    [ 1,  2,  5, -1, -1],
    [ 0,  3,  1,  5, -1],
    [ 0,  2,  4,  5, -1],
    [ 3,  5,  4, -1, -1],
    [ 4,  5,  3, -1, -1],
    [ 4,  5,  0,  2, -1],
    [ 1,  5,  0,  3, -1],
    [ 5,  2,  1, -1, -1],
    [ 2,  3,  1,  4, -1],
    [ 4,  1,  0, -1, -1],
    [ 2,  3,  0, -1, -1],
    [-1, -1, -1, -1, -1],
];

/// Crossed-edge bitmask over the 12 cube edges per 8-bit configuration,
/// computed from [`TRI_TABLE`] so the two can never disagree
pub const EDGE_TABLE: [u16; 256] = compute_edge_table();

/// Compute the marching cubes edge table at compile time: the union of all
/// edges referenced by a configuration's triangle strip
const fn compute_edge_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut config = 0;
    while config < 256 {
        let mut mask = 0u16;
        let mut i = 0;
        while i < 16 {
            let edge = TRI_TABLE[config][i];
            if edge < 0 {
                break;
            }
            mask |= 1 << (edge as u16);
            i += 1;
        }
        table[config] = mask;
        config += 1;
    }
    table
}

/// Crossed-edge bitmask over all 19 extended edges per 8-bit cube
/// configuration (marching tetrahedra). The low 12 bits match
/// [`EDGE_TABLE`].
#[rustfmt::skip]
pub const CUBE_EDGE_TABLE: [u32; 256] = [
    0x000000, 0x010109, 0x001203, 0x01130A, 0x056406, 0x04650F, 0x057605, 0x04770C,
    0x00880C, 0x018905, 0x009A0F, 0x019B06, 0x05EC0A, 0x04ED03, 0x05FE09, 0x04FF00,
    0x069190, 0x079099, 0x068393, 0x07829A, 0x03F596, 0x02F49F, 0x03E795, 0x02E69C,
    0x06199C, 0x071895, 0x060B9F, 0x070A96, 0x037D9A, 0x027C93, 0x036F99, 0x026E90,
    0x002230, 0x012339, 0x003033, 0x01313A, 0x054636, 0x04473F, 0x055435, 0x04553C,
    0x00AA3C, 0x01AB35, 0x00B83F, 0x01B936, 0x05CE3A, 0x04CF33, 0x05DC39, 0x04DD30,
    0x06B3A0, 0x07B2A9, 0x06A1A3, 0x07A0AA, 0x03D7A6, 0x02D6AF, 0x03C5A5, 0x02C4AC,
    0x063BAC, 0x073AA5, 0x0629AF, 0x0728A6, 0x035FAA, 0x025EA3, 0x034DA9, 0x024CA0,
    0x020460, 0x030569, 0x021663, 0x03176A, 0x076066, 0x06616F, 0x077265, 0x06736C,
    0x028C6C, 0x038D65, 0x029E6F, 0x039F66, 0x07E86A, 0x06E963, 0x07FA69, 0x06FB60,
    0x0495F0, 0x0594F9, 0x0487F3, 0x0586FA, 0x01F1F6, 0x00F0FF, 0x01E3F5, 0x00E2FC,
    0x041DFC, 0x051CF5, 0x040FFF, 0x050EF6, 0x0179FA, 0x0078F3, 0x016BF9, 0x006AF0,
    0x022650, 0x032759, 0x023453, 0x03355A, 0x074256, 0x06435F, 0x075055, 0x06515C,
    0x02AE5C, 0x03AF55, 0x02BC5F, 0x03BD56, 0x07CA5A, 0x06CB53, 0x07D859, 0x06D950,
    0x04B7C0, 0x05B6C9, 0x04A5C3, 0x05A4CA, 0x01D3C6, 0x00D2CF, 0x01C1C5, 0x00C0CC,
    0x043FCC, 0x053EC5, 0x042DCF, 0x052CC6, 0x015BCA, 0x005AC3, 0x0149C9, 0x0048C0,
    0x0048C0, 0x0149C9, 0x005AC3, 0x015BCA, 0x052CC6, 0x042DCF, 0x053EC5, 0x043FCC,
    0x00C0CC, 0x01C1C5, 0x00D2CF, 0x01D3C6, 0x05A4CA, 0x04A5C3, 0x05B6C9, 0x04B7C0,
    0x06D950, 0x07D859, 0x06CB53, 0x07CA5A, 0x03BD56, 0x02BC5F, 0x03AF55, 0x02AE5C,
    0x06515C, 0x075055, 0x06435F, 0x074256, 0x03355A, 0x023453, 0x032759, 0x022650,
    0x006AF0, 0x016BF9, 0x0078F3, 0x0179FA, 0x050EF6, 0x040FFF, 0x051CF5, 0x041DFC,
    0x00E2FC, 0x01E3F5, 0x00F0FF, 0x01F1F6, 0x0586FA, 0x0487F3, 0x0594F9, 0x0495F0,
    0x06FB60, 0x07FA69, 0x06E963, 0x07E86A, 0x039F66, 0x029E6F, 0x038D65, 0x028C6C,
    0x06736C, 0x077265, 0x06616F, 0x076066, 0x03176A, 0x021663, 0x030569, 0x020460,
    0x024CA0, 0x034DA9, 0x025EA3, 0x035FAA, 0x0728A6, 0x0629AF, 0x073AA5, 0x063BAC,
    0x02C4AC, 0x03C5A5, 0x02D6AF, 0x03D7A6, 0x07A0AA, 0x06A1A3, 0x07B2A9, 0x06B3A0,
    0x04DD30, 0x05DC39, 0x04CF33, 0x05CE3A, 0x01B936, 0x00B83F, 0x01AB35, 0x00AA3C,
    0x04553C, 0x055435, 0x04473F, 0x054636, 0x01313A, 0x003033, 0x012339, 0x002230,
    0x026E90, 0x036F99, 0x027C93, 0x037D9A, 0x070A96, 0x060B9F, 0x071895, 0x06199C,
    0x02E69C, 0x03E795, 0x02F49F, 0x03F596, 0x07829A, 0x068393, 0x079099, 0x069190,
    0x04FF00, 0x05FE09, 0x04ED03, 0x05EC0A, 0x019B06, 0x009A0F, 0x018905, 0x00880C,
    0x04770C, 0x057605, 0x04650F, 0x056406, 0x01130A, 0x001203, 0x010109, 0x000000,
];

/// Triangle strips per 8-bit cube configuration (Paul Bourke's table).
/// Groups of three edge ids form one triangle; -1 terminates the list.
#[rustfmt::skip]
pub const TRI_TABLE: [[i8; 16]; 256] = [
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 8, 3, 9, 8, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 1, 2, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [9, 2, 10, 0, 2, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 8, 3, 2, 10, 8, 10, 9, 8, -1, -1, -1, -1, -1, -1, -1],
    [3, 11, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 11, 2, 8, 11, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 0, 2, 3, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 11, 2, 1, 9, 11, 9, 8, 11, -1, -1, -1, -1, -1, -1, -1],
    [3, 10, 1, 11, 10, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 10, 1, 0, 8, 10, 8, 11, 10, -1, -1, -1, -1, -1, -1, -1],
    [3, 9, 0, 3, 11, 9, 11, 10, 9, -1, -1, -1, -1, -1, -1, -1],
    [9, 8, 10, 10, 8, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 7, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 3, 0, 7, 3, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 8, 4, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 1, 9, 4, 7, 1, 7, 3, 1, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, 8, 4, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 4, 7, 3, 0, 4, 1, 2, 10, -1, -1, -1, -1, -1, -1, -1],
    [9, 2, 10, 9, 0, 2, 8, 4, 7, -1, -1, -1, -1, -1, -1, -1],
    [2, 10, 9, 2, 9, 7, 2, 7, 3, 7, 9, 4, -1, -1, -1, -1],
    [8, 4, 7, 3, 11, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [11, 4, 7, 11, 2, 4, 2, 0, 4, -1, -1, -1, -1, -1, -1, -1],
    [9, 0, 1, 8, 4, 7, 2, 3, 11, -1, -1, -1, -1, -1, -1, -1],
    [4, 7, 11, 9, 4, 11, 9, 11, 2, 9, 2, 1, -1, -1, -1, -1],
    [3, 10, 1, 3, 11, 10, 7, 8, 4, -1, -1, -1, -1, -1, -1, -1],
    [1, 11, 10, 1, 4, 11, 1, 0, 4, 7, 11, 4, -1, -1, -1, -1],
    [4, 7, 8, 9, 0, 11, 9, 11, 10, 11, 0, 3, -1, -1, -1, -1],
    [4, 7, 11, 4, 11, 9, 9, 11, 10, -1, -1, -1, -1, -1, -1, -1],
    [9, 5, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [9, 5, 4, 0, 8, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 5, 4, 1, 5, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 5, 4, 8, 3, 5, 3, 1, 5, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, 9, 5, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 0, 8, 1, 2, 10, 4, 9, 5, -1, -1, -1, -1, -1, -1, -1],
    [5, 2, 10, 5, 4, 2, 4, 0, 2, -1, -1, -1, -1, -1, -1, -1],
    [2, 10, 5, 3, 2, 5, 3, 5, 4, 3, 4, 8, -1, -1, -1, -1],
    [9, 5, 4, 2, 3, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 11, 2, 0, 8, 11, 4, 9, 5, -1, -1, -1, -1, -1, -1, -1],
    [0, 5, 4, 0, 1, 5, 2, 3, 11, -1, -1, -1, -1, -1, -1, -1],
    [2, 1, 5, 2, 5, 8, 2, 8, 11, 4, 8, 5, -1, -1, -1, -1],
    [10, 3, 11, 10, 1, 3, 9, 5, 4, -1, -1, -1, -1, -1, -1, -1],
    [4, 9, 5, 0, 8, 1, 8, 10, 1, 8, 11, 10, -1, -1, -1, -1],
    [5, 4, 0, 5, 0, 11, 5, 11, 10, 11, 0, 3, -1, -1, -1, -1],
    [5, 4, 8, 5, 8, 10, 10, 8, 11, -1, -1, -1, -1, -1, -1, -1],
    [9, 7, 8, 5, 7, 9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [9, 3, 0, 9, 5, 3, 5, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 7, 8, 0, 1, 7, 1, 5, 7, -1, -1, -1, -1, -1, -1, -1],
    [1, 5, 3, 3, 5, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [9, 7, 8, 9, 5, 7, 10, 1, 2, -1, -1, -1, -1, -1, -1, -1],
    [10, 1, 2, 9, 5, 0, 5, 3, 0, 5, 7, 3, -1, -1, -1, -1],
    [8, 0, 2, 8, 2, 5, 8, 5, 7, 10, 5, 2, -1, -1, -1, -1],
    [2, 10, 5, 2, 5, 3, 3, 5, 7, -1, -1, -1, -1, -1, -1, -1],
    [7, 9, 5, 7, 8, 9, 3, 11, 2, -1, -1, -1, -1, -1, -1, -1],
    [9, 5, 7, 9, 7, 2, 9, 2, 0, 2, 7, 11, -1, -1, -1, -1],
    [2, 3, 11, 0, 1, 8, 1, 7, 8, 1, 5, 7, -1, -1, -1, -1],
    [11, 2, 1, 11, 1, 7, 7, 1, 5, -1, -1, -1, -1, -1, -1, -1],
    [9, 5, 8, 8, 5, 7, 10, 1, 3, 10, 3, 11, -1, -1, -1, -1],
    [5, 7, 0, 5, 0, 9, 7, 11, 0, 1, 0, 10, 11, 10, 0, -1],
    [11, 10, 0, 11, 0, 3, 10, 5, 0, 8, 0, 7, 5, 7, 0, -1],
    [11, 10, 5, 7, 11, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [10, 6, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [9, 0, 1, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 8, 3, 1, 9, 8, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1],
    [1, 6, 5, 2, 6, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 6, 5, 1, 2, 6, 3, 0, 8, -1, -1, -1, -1, -1, -1, -1],
    [9, 6, 5, 9, 0, 6, 0, 2, 6, -1, -1, -1, -1, -1, -1, -1],
    [5, 9, 8, 5, 8, 2, 5, 2, 6, 3, 2, 8, -1, -1, -1, -1],
    [2, 3, 11, 10, 6, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [11, 0, 8, 11, 2, 0, 10, 6, 5, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 2, 3, 11, 5, 10, 6, -1, -1, -1, -1, -1, -1, -1],
    [5, 10, 6, 1, 9, 2, 9, 11, 2, 9, 8, 11, -1, -1, -1, -1],
    [6, 3, 11, 6, 5, 3, 5, 1, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 11, 0, 11, 5, 0, 5, 1, 5, 11, 6, -1, -1, -1, -1],
    [3, 11, 6, 0, 3, 6, 0, 6, 5, 0, 5, 9, -1, -1, -1, -1],
    [6, 5, 9, 6, 9, 11, 11, 9, 8, -1, -1, -1, -1, -1, -1, -1],
    [5, 10, 6, 4, 7, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 3, 0, 4, 7, 3, 6, 5, 10, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 0, 5, 10, 6, 8, 4, 7, -1, -1, -1, -1, -1, -1, -1],
    [10, 6, 5, 1, 9, 7, 1, 7, 3, 7, 9, 4, -1, -1, -1, -1],
    [6, 1, 2, 6, 5, 1, 4, 7, 8, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 5, 5, 2, 6, 3, 0, 4, 3, 4, 7, -1, -1, -1, -1],
    [8, 4, 7, 9, 0, 5, 0, 6, 5, 0, 2, 6, -1, -1, -1, -1],
    [7, 3, 9, 7, 9, 4, 3, 2, 9, 5, 9, 6, 2, 6, 9, -1],
    [3, 11, 2, 7, 8, 4, 10, 6, 5, -1, -1, -1, -1, -1, -1, -1],
    [5, 10, 6, 4, 7, 2, 4, 2, 0, 2, 7, 11, -1, -1, -1, -1],
    [0, 1, 9, 4, 7, 8, 2, 3, 11, 5, 10, 6, -1, -1, -1, -1],
    [9, 2, 1, 9, 11, 2, 9, 4, 11, 7, 11, 4, 5, 10, 6, -1],
    [8, 4, 7, 3, 11, 5, 3, 5, 1, 5, 11, 6, -1, -1, -1, -1],
    [5, 1, 11, 5, 11, 6, 1, 0, 11, 7, 11, 4, 0, 4, 11, -1],
    [0, 5, 9, 0, 6, 5, 0, 3, 6, 11, 6, 3, 8, 4, 7, -1],
    [6, 5, 9, 6, 9, 11, 4, 7, 9, 7, 11, 9, -1, -1, -1, -1],
    [10, 4, 9, 6, 4, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 10, 6, 4, 9, 10, 0, 8, 3, -1, -1, -1, -1, -1, -1, -1],
    [10, 0, 1, 10, 6, 0, 6, 4, 0, -1, -1, -1, -1, -1, -1, -1],
    [8, 3, 1, 8, 1, 6, 8, 6, 4, 6, 1, 10, -1, -1, -1, -1],
    [1, 4, 9, 1, 2, 4, 2, 6, 4, -1, -1, -1, -1, -1, -1, -1],
    [3, 0, 8, 1, 2, 9, 2, 4, 9, 2, 6, 4, -1, -1, -1, -1],
    [0, 2, 4, 4, 2, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 3, 2, 8, 2, 4, 4, 2, 6, -1, -1, -1, -1, -1, -1, -1],
    [10, 4, 9, 10, 6, 4, 11, 2, 3, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 2, 2, 8, 11, 4, 9, 10, 4, 10, 6, -1, -1, -1, -1],
    [3, 11, 2, 0, 1, 6, 0, 6, 4, 6, 1, 10, -1, -1, -1, -1],
    [6, 4, 1, 6, 1, 10, 4, 8, 1, 2, 1, 11, 8, 11, 1, -1],
    [9, 6, 4, 9, 3, 6, 9, 1, 3, 11, 6, 3, -1, -1, -1, -1],
    [8, 11, 1, 8, 1, 0, 11, 6, 1, 9, 1, 4, 6, 4, 1, -1],
    [3, 11, 6, 3, 6, 0, 0, 6, 4, -1, -1, -1, -1, -1, -1, -1],
    [6, 4, 8, 11, 6, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [7, 10, 6, 7, 8, 10, 8, 9, 10, -1, -1, -1, -1, -1, -1, -1],
    [0, 7, 3, 0, 10, 7, 0, 9, 10, 6, 7, 10, -1, -1, -1, -1],
    [10, 6, 7, 1, 10, 7, 1, 7, 8, 1, 8, 0, -1, -1, -1, -1],
    [10, 6, 7, 10, 7, 1, 1, 7, 3, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 6, 1, 6, 8, 1, 8, 9, 8, 6, 7, -1, -1, -1, -1],
    [2, 6, 9, 2, 9, 1, 6, 7, 9, 0, 9, 3, 7, 3, 9, -1],
    [7, 8, 0, 7, 0, 6, 6, 0, 2, -1, -1, -1, -1, -1, -1, -1],
    [7, 3, 2, 6, 7, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 11, 10, 6, 8, 10, 8, 9, 8, 6, 7, -1, -1, -1, -1],
    [2, 0, 7, 2, 7, 11, 0, 9, 7, 6, 7, 10, 9, 10, 7, -1],
    [1, 8, 0, 1, 7, 8, 1, 10, 7, 6, 7, 10, 2, 3, 11, -1],
    [11, 2, 1, 11, 1, 7, 10, 6, 1, 6, 7, 1, -1, -1, -1, -1],
    [8, 9, 6, 8, 6, 7, 9, 1, 6, 11, 6, 3, 1, 3, 6, -1],
    [0, 9, 1, 11, 6, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [7, 8, 0, 7, 0, 6, 3, 11, 0, 11, 6, 0, -1, -1, -1, -1],
    [7, 11, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [7, 6, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 0, 8, 11, 7, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 9, 11, 7, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 1, 9, 8, 3, 1, 11, 7, 6, -1, -1, -1, -1, -1, -1, -1],
    [10, 1, 2, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, 3, 0, 8, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [2, 9, 0, 2, 10, 9, 6, 11, 7, -1, -1, -1, -1, -1, -1, -1],
    [6, 11, 7, 2, 10, 3, 10, 8, 3, 10, 9, 8, -1, -1, -1, -1],
    [7, 2, 3, 6, 2, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [7, 0, 8, 7, 6, 0, 6, 2, 0, -1, -1, -1, -1, -1, -1, -1],
    [2, 7, 6, 2, 3, 7, 0, 1, 9, -1, -1, -1, -1, -1, -1, -1],
    [1, 6, 2, 1, 8, 6, 1, 9, 8, 8, 7, 6, -1, -1, -1, -1],
    [10, 7, 6, 10, 1, 7, 1, 3, 7, -1, -1, -1, -1, -1, -1, -1],
    [10, 7, 6, 1, 7, 10, 1, 8, 7, 1, 0, 8, -1, -1, -1, -1],
    [0, 3, 7, 0, 7, 10, 0, 10, 9, 6, 10, 7, -1, -1, -1, -1],
    [7, 6, 10, 7, 10, 8, 8, 10, 9, -1, -1, -1, -1, -1, -1, -1],
    [6, 8, 4, 11, 8, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 6, 11, 3, 0, 6, 0, 4, 6, -1, -1, -1, -1, -1, -1, -1],
    [8, 6, 11, 8, 4, 6, 9, 0, 1, -1, -1, -1, -1, -1, -1, -1],
    [9, 4, 6, 9, 6, 3, 9, 3, 1, 11, 3, 6, -1, -1, -1, -1],
    [6, 8, 4, 6, 11, 8, 2, 10, 1, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, 3, 0, 11, 0, 6, 11, 0, 4, 6, -1, -1, -1, -1],
    [4, 11, 8, 4, 6, 11, 0, 2, 9, 2, 10, 9, -1, -1, -1, -1],
    [10, 9, 3, 10, 3, 2, 9, 4, 3, 11, 3, 6, 4, 6, 3, -1],
    [8, 2, 3, 8, 4, 2, 4, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 2, 4, 6, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 9, 0, 2, 3, 4, 2, 4, 6, 4, 3, 8, -1, -1, -1, -1],
    [1, 9, 4, 1, 4, 2, 2, 4, 6, -1, -1, -1, -1, -1, -1, -1],
    [8, 1, 3, 8, 6, 1, 8, 4, 6, 6, 10, 1, -1, -1, -1, -1],
    [10, 1, 0, 10, 0, 6, 6, 0, 4, -1, -1, -1, -1, -1, -1, -1],
    [4, 6, 3, 4, 3, 8, 6, 10, 3, 0, 3, 9, 10, 9, 3, -1],
    [10, 9, 4, 6, 10, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 9, 5, 7, 6, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 4, 9, 5, 11, 7, 6, -1, -1, -1, -1, -1, -1, -1],
    [5, 0, 1, 5, 4, 0, 7, 6, 11, -1, -1, -1, -1, -1, -1, -1],
    [11, 7, 6, 8, 3, 4, 3, 5, 4, 3, 1, 5, -1, -1, -1, -1],
    [9, 5, 4, 10, 1, 2, 7, 6, 11, -1, -1, -1, -1, -1, -1, -1],
    [6, 11, 7, 1, 2, 10, 0, 8, 3, 4, 9, 5, -1, -1, -1, -1],
    [7, 6, 11, 5, 4, 10, 4, 2, 10, 4, 0, 2, -1, -1, -1, -1],
    [3, 4, 8, 3, 5, 4, 3, 2, 5, 10, 5, 2, 11, 7, 6, -1],
    [7, 2, 3, 7, 6, 2, 5, 4, 9, -1, -1, -1, -1, -1, -1, -1],
    [9, 5, 4, 0, 8, 6, 0, 6, 2, 6, 8, 7, -1, -1, -1, -1],
    [3, 6, 2, 3, 7, 6, 1, 5, 0, 5, 4, 0, -1, -1, -1, -1],
    [6, 2, 8, 6, 8, 7, 2, 1, 8, 4, 8, 5, 1, 5, 8, -1],
    [9, 5, 4, 10, 1, 6, 1, 7, 6, 1, 3, 7, -1, -1, -1, -1],
    [1, 6, 10, 1, 7, 6, 1, 0, 7, 8, 7, 0, 9, 5, 4, -1],
    [4, 0, 10, 4, 10, 5, 0, 3, 10, 6, 10, 7, 3, 7, 10, -1],
    [7, 6, 10, 7, 10, 8, 5, 4, 10, 4, 8, 10, -1, -1, -1, -1],
    [6, 9, 5, 6, 11, 9, 11, 8, 9, -1, -1, -1, -1, -1, -1, -1],
    [3, 6, 11, 0, 6, 3, 0, 5, 6, 0, 9, 5, -1, -1, -1, -1],
    [0, 11, 8, 0, 5, 11, 0, 1, 5, 5, 6, 11, -1, -1, -1, -1],
    [6, 11, 3, 6, 3, 5, 5, 3, 1, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 10, 9, 5, 11, 9, 11, 8, 11, 5, 6, -1, -1, -1, -1],
    [0, 11, 3, 0, 6, 11, 0, 9, 6, 5, 6, 9, 1, 2, 10, -1],
    [11, 8, 5, 11, 5, 6, 8, 0, 5, 10, 5, 2, 0, 2, 5, -1],
    [6, 11, 3, 6, 3, 5, 2, 10, 3, 10, 5, 3, -1, -1, -1, -1],
    [5, 8, 9, 5, 2, 8, 5, 6, 2, 3, 8, 2, -1, -1, -1, -1],
    [9, 5, 6, 9, 6, 0, 0, 6, 2, -1, -1, -1, -1, -1, -1, -1],
    [1, 5, 8, 1, 8, 0, 5, 6, 8, 3, 8, 2, 6, 2, 8, -1],
    [1, 5, 6, 2, 1, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 6, 1, 6, 10, 3, 8, 6, 5, 6, 9, 8, 9, 6, -1],
    [10, 1, 0, 10, 0, 6, 9, 5, 0, 5, 6, 0, -1, -1, -1, -1],
    [0, 3, 8, 5, 6, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [10, 5, 6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [11, 5, 10, 7, 5, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [11, 5, 10, 11, 7, 5, 8, 3, 0, -1, -1, -1, -1, -1, -1, -1],
    [5, 11, 7, 5, 10, 11, 1, 9, 0, -1, -1, -1, -1, -1, -1, -1],
    [10, 7, 5, 10, 11, 7, 9, 8, 1, 8, 3, 1, -1, -1, -1, -1],
    [11, 1, 2, 11, 7, 1, 7, 5, 1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 1, 2, 7, 1, 7, 5, 7, 2, 11, -1, -1, -1, -1],
    [9, 7, 5, 9, 2, 7, 9, 0, 2, 2, 11, 7, -1, -1, -1, -1],
    [7, 5, 2, 7, 2, 11, 5, 9, 2, 3, 2, 8, 9, 8, 2, -1],
    [2, 5, 10, 2, 3, 5, 3, 7, 5, -1, -1, -1, -1, -1, -1, -1],
    [8, 2, 0, 8, 5, 2, 8, 7, 5, 10, 2, 5, -1, -1, -1, -1],
    [9, 0, 1, 5, 10, 3, 5, 3, 7, 3, 10, 2, -1, -1, -1, -1],
    [9, 8, 2, 9, 2, 1, 8, 7, 2, 10, 2, 5, 7, 5, 2, -1],
    [1, 3, 5, 3, 7, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 7, 0, 7, 1, 1, 7, 5, -1, -1, -1, -1, -1, -1, -1],
    [9, 0, 3, 9, 3, 5, 5, 3, 7, -1, -1, -1, -1, -1, -1, -1],
    [9, 8, 7, 5, 9, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [5, 8, 4, 5, 10, 8, 10, 11, 8, -1, -1, -1, -1, -1, -1, -1],
    [5, 0, 4, 5, 11, 0, 5, 10, 11, 11, 3, 0, -1, -1, -1, -1],
    [0, 1, 9, 8, 4, 10, 8, 10, 11, 10, 4, 5, -1, -1, -1, -1],
    [10, 11, 4, 10, 4, 5, 11, 3, 4, 9, 4, 1, 3, 1, 4, -1],
    [2, 5, 1, 2, 8, 5, 2, 11, 8, 4, 5, 8, -1, -1, -1, -1],
    [0, 4, 11, 0, 11, 3, 4, 5, 11, 2, 11, 1, 5, 1, 11, -1],
    [0, 2, 5, 0, 5, 9, 2, 11, 5, 4, 5, 8, 11, 8, 5, -1],
    [9, 4, 5, 2, 11, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 5, 10, 3, 5, 2, 3, 4, 5, 3, 8, 4, -1, -1, -1, -1],
    [5, 10, 2, 5, 2, 4, 4, 2, 0, -1, -1, -1, -1, -1, -1, -1],
    [3, 10, 2, 3, 5, 10, 3, 8, 5, 4, 5, 8, 0, 1, 9, -1],
    [5, 10, 2, 5, 2, 4, 1, 9, 2, 9, 4, 2, -1, -1, -1, -1],
    [8, 4, 5, 8, 5, 3, 3, 5, 1, -1, -1, -1, -1, -1, -1, -1],
    [0, 4, 5, 1, 0, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [8, 4, 5, 8, 5, 3, 9, 0, 5, 0, 3, 5, -1, -1, -1, -1],
    [9, 4, 5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 11, 7, 4, 9, 11, 9, 10, 11, -1, -1, -1, -1, -1, -1, -1],
    [0, 8, 3, 4, 9, 7, 9, 11, 7, 9, 10, 11, -1, -1, -1, -1],
    [1, 10, 11, 1, 11, 4, 1, 4, 0, 7, 4, 11, -1, -1, -1, -1],
    [3, 1, 4, 3, 4, 8, 1, 10, 4, 7, 4, 11, 10, 11, 4, -1],
    [4, 11, 7, 9, 11, 4, 9, 2, 11, 9, 1, 2, -1, -1, -1, -1],
    [9, 7, 4, 9, 11, 7, 9, 1, 11, 2, 11, 1, 0, 8, 3, -1],
    [11, 7, 4, 11, 4, 2, 2, 4, 0, -1, -1, -1, -1, -1, -1, -1],
    [11, 7, 4, 11, 4, 2, 8, 3, 4, 3, 2, 4, -1, -1, -1, -1],
    [2, 9, 10, 2, 7, 9, 2, 3, 7, 7, 4, 9, -1, -1, -1, -1],
    [9, 10, 7, 9, 7, 4, 10, 2, 7, 8, 7, 0, 2, 0, 7, -1],
    [3, 7, 10, 3, 10, 2, 7, 4, 10, 1, 10, 0, 4, 0, 10, -1],
    [1, 10, 2, 8, 7, 4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 9, 1, 4, 1, 7, 7, 1, 3, -1, -1, -1, -1, -1, -1, -1],
    [4, 9, 1, 4, 1, 7, 0, 8, 1, 8, 7, 1, -1, -1, -1, -1],
    [4, 0, 3, 7, 4, 3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [4, 8, 7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [9, 10, 8, 10, 11, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 0, 9, 3, 9, 11, 11, 9, 10, -1, -1, -1, -1, -1, -1, -1],
    [0, 1, 10, 0, 10, 8, 8, 10, 11, -1, -1, -1, -1, -1, -1, -1],
    [3, 1, 10, 11, 3, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 2, 11, 1, 11, 9, 9, 11, 8, -1, -1, -1, -1, -1, -1, -1],
    [3, 0, 9, 3, 9, 11, 1, 2, 9, 2, 11, 9, -1, -1, -1, -1],
    [0, 2, 11, 8, 0, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [3, 2, 11, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 8, 2, 8, 10, 10, 8, 9, -1, -1, -1, -1, -1, -1, -1],
    [9, 10, 2, 0, 9, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [2, 3, 8, 2, 8, 10, 0, 1, 8, 1, 10, 8, -1, -1, -1, -1],
    [1, 10, 2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 3, 8, 9, 1, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 9, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 3, 8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_table_matches_extended_table() {
        // The low 12 bits of the 19-edge table are the plain cube edges,
        // so the two independently sourced tables must agree
        for config in 0..256 {
            assert_eq!(
                EDGE_TABLE[config] as u32,
                CUBE_EDGE_TABLE[config] & 0xFFF,
                "Edge masks disagree for configuration {config}"
            );
        }
    }

    #[test]
    fn test_edge_tables_zero_only_for_trivial_configs() {
        for config in 0..256 {
            let trivial = config == 0 || config == 255;
            assert_eq!(EDGE_TABLE[config] == 0, trivial);
            assert_eq!(CUBE_EDGE_TABLE[config] == 0, trivial);
        }
    }

    #[test]
    fn test_edge_tables_complement_symmetry() {
        // Inverting inside/outside crosses the same set of edges
        for config in 0..256 {
            assert_eq!(EDGE_TABLE[config], EDGE_TABLE[255 - config]);
            assert_eq!(CUBE_EDGE_TABLE[config], CUBE_EDGE_TABLE[255 - config]);
        }
        for config in 0..16 {
            assert_eq!(TETRA_EDGE_TABLE[config], TETRA_EDGE_TABLE[15 - config]);
        }
    }

    #[test]
    fn test_tri_table_rows_well_formed() {
        for (config, row) in TRI_TABLE.iter().enumerate() {
            let len = row.iter().position(|&e| e == -1).unwrap_or(16);
            assert_eq!(len % 3, 0, "Strip length not a triangle multiple for {config}");
            for &edge in &row[..len] {
                assert!((0..12).contains(&(edge as i32)));
            }
            // Nothing after the sentinel
            for &edge in &row[len..] {
                assert_eq!(edge, -1);
            }
        }
    }

    #[test]
    fn test_tetra_edge_table_matches_tri_table() {
        for config in 0..16 {
            let mut mask = 0u16;
            for &edge in &TETRA_TRI_TABLE[config] {
                if edge >= 0 {
                    mask |= 1 << edge;
                }
            }
            assert_eq!(mask, TETRA_EDGE_TABLE[config], "Configuration {config}");
        }
    }

    #[test]
    fn test_edge_maps_are_inverse() {
        for (edge, pair) in CUBE_VERTICES_ON_EDGE.iter().enumerate() {
            assert_eq!(CUBE_VERTEX_PAIR_TO_EDGE[pair[0]][pair[1]] as usize, edge);
            assert_eq!(CUBE_VERTEX_PAIR_TO_EDGE[pair[1]][pair[0]] as usize, edge);
        }
        // Diagonal and unconnected pairs have no edge
        for a in 0..8 {
            assert_eq!(CUBE_VERTEX_PAIR_TO_EDGE[a][a], -1);
        }
    }

    #[test]
    fn test_cube_edges_match_marching_cubes_edges() {
        // First 12 extended edges are the cube edges used by marching cubes
        for edge in 0..12 {
            let mut a = VERTICES_ON_EDGE[edge];
            let mut b = CUBE_VERTICES_ON_EDGE[edge];
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "Edge {edge}");
        }
    }

    #[test]
    fn test_tetrahedron_edges_all_mapped() {
        // Every local tetra edge must translate to an extended cube edge
        for tetra in &TETRAHEDRON_LIST {
            for pair in &TETRA_VERTICES_ON_EDGE {
                let a = tetra[pair[0]];
                let b = tetra[pair[1]];
                assert_ne!(
                    CUBE_VERTEX_PAIR_TO_EDGE[a][b], -1,
                    "Corner pair ({a}, {b}) has no edge"
                );
            }
        }
    }

    #[test]
    fn test_decomposition_tiles_unit_cube() {
        // Each tetrahedron's volume is |det| / 6; six of them must sum to
        // the unit cube's volume exactly
        let mut total = 0.0_f64;
        for tetra in &TETRAHEDRON_LIST {
            let p: Vec<[f64; 3]> = tetra
                .iter()
                .map(|&c| {
                    let o = CUBE_VERTEX_OFFSETS[c];
                    [o.x as f64, o.y as f64, o.z as f64]
                })
                .collect();
            let u = [p[1][0] - p[0][0], p[1][1] - p[0][1], p[1][2] - p[0][2]];
            let v = [p[2][0] - p[0][0], p[2][1] - p[0][1], p[2][2] - p[0][2]];
            let w = [p[3][0] - p[0][0], p[3][1] - p[0][1], p[3][2] - p[0][2]];
            let det = u[0] * (v[1] * w[2] - v[2] * w[1])
                - u[1] * (v[0] * w[2] - v[2] * w[0])
                + u[2] * (v[0] * w[1] - v[1] * w[0]);
            assert!(det.abs() > 0.0, "Degenerate tetrahedron {tetra:?}");
            total += det.abs() / 6.0;
        }
        assert!((total - 1.0).abs() < 1e-12, "Decomposition volume {total}");
    }
}
