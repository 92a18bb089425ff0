//! Static geometry of the 3x3x3 cube: which cubelet slots a face covers and
//! which stickers on different faces belong to the same cubelet.
//!
//! Slots are numbered `x + 3y + 9z` where x points RIGHT, y points UP and z
//! points toward the FRONT. A face's local indices 0..9 read row by row as
//! seen looking straight at that face; UP is seen with BACK at the top and
//! DOWN with FRONT at the top.
//!
//! Every table here is derived at compile time from the placement of each
//! face's grid, so the slot table and the neighbor table cannot disagree.

use std::ops::Index;

use crate::face::Face;

/// Position of a cubelet in the 3x3x3 grid, `0..27`.
pub type SlotId = u8;

/// For every local index of a face, the local index of the sticker on a
/// neighboring face that shares its cubelet, if any.
pub type LocalMap = [Option<u8>; 9];

pub const CUBELET_COUNT: usize = 27;
pub const STICKERS_PER_FACE: usize = 9;
pub const CENTER: usize = 4;
pub const EDGE_POSITIONS: [usize; 4] = [1, 3, 5, 7];
pub const CORNER_POSITIONS: [usize; 4] = [0, 2, 6, 8];

/// The border rows of a face, clockwise as seen facing it and starting with
/// the top row. Row `i` touches `neighbor_ring(face)[i]`.
pub const RING_TRAVERSAL: [[usize; 3]; 4] = [[0, 1, 2], [2, 5, 8], [8, 7, 6], [6, 3, 0]];

/// One sticker position: a face and a local index on it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sticker {
    pub face: Face,
    pub local: usize,
}

impl Sticker {
    #[must_use]
    pub const fn new(face: Face, local: usize) -> Self {
        Self { face, local }
    }
}

/// Where a face's grid sits in the cube: the coordinate of local index 0
/// and the steps taken by moving one column right or one row down.
struct FaceFrame {
    origin: [i8; 3],
    column: [i8; 3],
    row: [i8; 3],
}

/// Indexed by `Face::index()`.
const FRAMES: [FaceFrame; 6] = [
    // FRONT
    FaceFrame {
        origin: [0, 2, 2],
        column: [1, 0, 0],
        row: [0, -1, 0],
    },
    // BACK
    FaceFrame {
        origin: [2, 2, 0],
        column: [-1, 0, 0],
        row: [0, -1, 0],
    },
    // LEFT
    FaceFrame {
        origin: [0, 2, 0],
        column: [0, 0, 1],
        row: [0, -1, 0],
    },
    // RIGHT
    FaceFrame {
        origin: [2, 2, 2],
        column: [0, 0, -1],
        row: [0, -1, 0],
    },
    // UP
    FaceFrame {
        origin: [0, 2, 0],
        column: [1, 0, 0],
        row: [0, 0, 1],
    },
    // DOWN
    FaceFrame {
        origin: [0, 0, 2],
        column: [1, 0, 0],
        row: [0, 0, -1],
    },
];

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn local_coordinate(face: usize, local: usize) -> [i8; 3] {
    let frame = &FRAMES[face];
    let (row, column) = ((local / 3) as i8, (local % 3) as i8);
    let mut coordinate = [0; 3];
    let mut axis = 0;
    while axis < 3 {
        coordinate[axis] = frame.origin[axis] + column * frame.column[axis] + row * frame.row[axis];
        assert!(coordinate[axis] >= 0 && coordinate[axis] < 3);
        axis += 1;
    }
    coordinate
}

#[allow(clippy::cast_sign_loss)]
const FACE_SLOTS: [[SlotId; 9]; 6] = {
    let mut slots = [[0; 9]; 6];
    let mut face = 0;
    while face < 6 {
        let mut local = 0;
        while local < STICKERS_PER_FACE {
            let [x, y, z] = local_coordinate(face, local);
            slots[face][local] = (x + 3 * y + 9 * z) as SlotId;
            local += 1;
        }
        face += 1;
    }
    slots
};

/// The nine slots a face covers, in local order.
#[must_use]
pub const fn face_slots(face: Face) -> [SlotId; 9] {
    FACE_SLOTS[face.index()]
}

/// The slot a sticker position sits on.
#[must_use]
pub const fn slot_of_sticker(sticker: Sticker) -> SlotId {
    FACE_SLOTS[sticker.face.index()][sticker.local]
}

/// 6x6 table relating stickers on two faces that share a cubelet. Entries
/// for a face and itself or its opposite are `None`, so only four of the six
/// neighbors of each face are populated.
pub struct NeighborTable([[Option<LocalMap>; 6]; 6]);

pub const NEIGHBORS: NeighborTable = {
    let table = NeighborTable::derive();
    table.validate();
    table
};

impl NeighborTable {
    #[allow(clippy::cast_possible_truncation)]
    const fn derive() -> Self {
        let mut table = [[None; 6]; 6];
        let mut face = 0;
        while face < 6 {
            let mut neighbor = 0;
            while neighbor < 6 {
                if neighbor != face && neighbor != Face::ALL[face].opposite().index() {
                    let mut map = [None; 9];
                    let mut local = 0;
                    while local < STICKERS_PER_FACE {
                        let mut other = 0;
                        while other < STICKERS_PER_FACE {
                            if FACE_SLOTS[face][local] == FACE_SLOTS[neighbor][other] {
                                map[local] = Some(other as u8);
                            }
                            other += 1;
                        }
                        local += 1;
                    }
                    table[face][neighbor] = Some(map);
                }
                neighbor += 1;
            }
            face += 1;
        }
        Self(table)
    }

    /// Every populated map has exactly three border entries and the
    /// relation is symmetric.
    const fn validate(&self) {
        let mut face = 0;
        while face < 6 {
            let mut neighbors = 0;
            let mut neighbor = 0;
            while neighbor < 6 {
                if let Some(map) = self.0[face][neighbor] {
                    neighbors += 1;
                    let mut shared = 0;
                    let mut local = 0;
                    while local < STICKERS_PER_FACE {
                        if let Some(other) = map[local] {
                            shared += 1;
                            match self.0[neighbor][face] {
                                Some(back) => match back[other as usize] {
                                    Some(round_trip) => assert!(round_trip as usize == local),
                                    None => panic!("Neighbor table is not symmetric"),
                                },
                                None => panic!("Neighbor table is not symmetric"),
                            }
                        }
                        local += 1;
                    }
                    assert!(shared == 3);
                }
                neighbor += 1;
            }
            assert!(neighbors == 4);
            face += 1;
        }
    }

    /// The map from `face`'s local indices to `neighbor`'s, `None` when the
    /// two faces do not touch.
    #[must_use]
    pub const fn get(&self, face: Face, neighbor: Face) -> Option<&LocalMap> {
        self.0[face.index()][neighbor.index()].as_ref()
    }

    #[must_use]
    pub fn local_index(&self, face: Face, neighbor: Face, local: usize) -> Option<usize> {
        self.get(face, neighbor)?
            .get(local)
            .copied()
            .flatten()
            .map(usize::from)
    }
}

impl Index<(Face, Face)> for NeighborTable {
    type Output = Option<LocalMap>;

    fn index(&self, (face, neighbor): (Face, Face)) -> &Self::Output {
        &self.0[face.index()][neighbor.index()]
    }
}

/// The local index on `neighbor` of the sticker that shares a cubelet with
/// `(face, local)`. `None` when the faces do not touch, when the sticker
/// is not on the border toward `neighbor`, or when `local` is out of range.
#[must_use]
pub fn neighbor_local_index(face: Face, neighbor: Face, local: usize) -> Option<usize> {
    NEIGHBORS.local_index(face, neighbor, local)
}

const NEIGHBOR_RINGS: [[Face; 4]; 6] = {
    use Face::{Back, Down, Front, Left, Right, Up};
    let rings = [
        [Up, Right, Down, Left],
        [Up, Left, Down, Right],
        [Up, Front, Down, Back],
        [Up, Back, Down, Front],
        [Back, Right, Front, Left],
        [Front, Right, Back, Left],
    ];

    let mut face = 0;
    while face < 6 {
        let mut i = 0;
        while i < 4 {
            let Some(map) = NEIGHBORS.0[face][rings[face][i].index()] else {
                panic!("Ring names a face that does not touch");
            };
            let mut j = 0;
            while j < 3 {
                assert!(map[RING_TRAVERSAL[i][j]].is_some());
                j += 1;
            }
            i += 1;
        }
        face += 1;
    }

    rings
};

/// The four faces around `face`, clockwise as seen facing it, starting with
/// the one above (BACK for UP, FRONT for DOWN).
#[must_use]
pub const fn neighbor_ring(face: Face) -> [Face; 4] {
    NEIGHBOR_RINGS[face.index()]
}

#[allow(clippy::cast_lossless)]
const BORDER_ROWS: [[[Sticker; 3]; 4]; 6] = {
    let mut rows = [[[Sticker::new(Face::Front, 0); 3]; 4]; 6];
    let mut face = 0;
    while face < 6 {
        let mut i = 0;
        while i < 4 {
            let neighbor = NEIGHBOR_RINGS[face][i];
            let Some(map) = NEIGHBORS.0[face][neighbor.index()] else {
                panic!("Ring names a face that does not touch");
            };
            let mut j = 0;
            while j < 3 {
                let Some(other) = map[RING_TRAVERSAL[i][j]] else {
                    panic!("Border row leaves the neighbor");
                };
                rows[face][i][j] = Sticker::new(neighbor, other as usize);
                j += 1;
            }
            i += 1;
        }
        face += 1;
    }
    rows
};

/// The neighbor stickers bordering `face`, one row of three per entry of
/// [`neighbor_ring`], each row following [`RING_TRAVERSAL`].
#[must_use]
pub const fn border_rows(face: Face) -> [[Sticker; 3]; 4] {
    BORDER_ROWS[face.index()]
}

#[allow(clippy::cast_lossless)]
const EDGE_PARTNERS: [[Option<Sticker>; 9]; 6] = {
    let mut partners = [[None; 9]; 6];
    let mut face = 0;
    while face < 6 {
        let mut k = 0;
        while k < 4 {
            let local = EDGE_POSITIONS[k];
            let mut neighbor = 0;
            while neighbor < 6 {
                if let Some(map) = NEIGHBORS.0[face][neighbor] {
                    if let Some(other) = map[local] {
                        assert!(partners[face][local].is_none());
                        partners[face][local] =
                            Some(Sticker::new(Face::ALL[neighbor], other as usize));
                    }
                }
                neighbor += 1;
            }
            assert!(partners[face][local].is_some());
            k += 1;
        }
        face += 1;
    }
    partners
};

/// `(a x b) . c`
const fn triple_product(a: [i8; 3], b: [i8; 3], c: [i8; 3]) -> i8 {
    (a[1] * b[2] - a[2] * b[1]) * c[0]
        + (a[2] * b[0] - a[0] * b[2]) * c[1]
        + (a[0] * b[1] - a[1] * b[0]) * c[2]
}

#[allow(clippy::cast_lossless)]
const CORNER_STICKERS: [[Option<[Sticker; 3]>; 9]; 6] = {
    let mut corners = [[None; 9]; 6];
    let mut face = 0;
    while face < 6 {
        let mut k = 0;
        while k < 4 {
            let local = CORNER_POSITIONS[k];
            let mut partners = [Sticker::new(Face::Front, 0); 2];
            let mut found = 0;
            let mut neighbor = 0;
            while neighbor < 6 {
                if let Some(map) = NEIGHBORS.0[face][neighbor] {
                    if let Some(other) = map[local] {
                        partners[found] = Sticker::new(Face::ALL[neighbor], other as usize);
                        found += 1;
                    }
                }
                neighbor += 1;
            }
            assert!(found == 2);

            let this = Sticker::new(Face::ALL[face], local);
            let [p, q] = partners;
            let (n, np, nq) = (Face::ALL[face].normal(), p.face.normal(), q.face.normal());
            let diagonal = [
                n[0] + np[0] + nq[0],
                n[1] + np[1] + nq[1],
                n[2] + np[2] + nq[2],
            ];
            // Clockwise around the corner as seen from outside the cube
            corners[face][local] = if triple_product(n, np, diagonal) < 0 {
                Some([this, p, q])
            } else {
                Some([this, q, p])
            };
            k += 1;
        }
        face += 1;
    }
    corners
};

/// The other sticker on the edge cubelet under `(face, local)`. `None` for
/// centers and corners.
#[must_use]
pub fn edge_partner(face: Face, local: usize) -> Option<Sticker> {
    EDGE_PARTNERS[face.index()].get(local).copied().flatten()
}

/// All three stickers of the corner cubelet under `(face, local)`, starting
/// with the queried one and going clockwise around the corner as seen from
/// outside. `None` for centers and edges.
#[must_use]
pub fn corner_stickers(face: Face, local: usize) -> Option<[Sticker; 3]> {
    CORNER_STICKERS[face.index()].get(local).copied().flatten()
}

/// The two other stickers of the corner cubelet under `(face, local)`.
#[must_use]
pub fn corner_partners(face: Face, local: usize) -> Option<[Sticker; 2]> {
    corner_stickers(face, local).map(|[_, first, second]| [first, second])
}
