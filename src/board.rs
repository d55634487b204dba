//! Fixed-size grid storage and the flood fills that run over it.
//!
//! Every flood fill builds its own [`Island`] mask on the stack, so no
//! scratch state survives from one call to the next.

use std::ops::{Index, IndexMut};

/// The two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Contents of a single intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Vertex {
    #[default]
    Empty,
    Black,
    White,
}

impl Vertex {
    /// The color of the stone here, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Vertex::Empty => None,
            Vertex::Black => Some(Color::Black),
            Vertex::White => Some(Color::White),
        }
    }
}

impl From<Color> for Vertex {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Vertex::Black,
            Color::White => Vertex::White,
        }
    }
}

/// A point on the board as `(row, col)`, row 0 at the top.
pub type Point = (usize, usize);

/// Membership mask for one flood fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Island<const N: usize> {
    marked: [[bool; N]; N],
    len: usize,
}

impl<const N: usize> Default for Island<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Island<N> {
    pub fn new() -> Self {
        Self {
            marked: [[false; N]; N],
            len: 0,
        }
    }

    /// Mark a point. Returns `false` if it was already marked.
    pub fn insert(&mut self, (row, col): Point) -> bool {
        let cell = &mut self.marked[row][col];
        if *cell {
            return false;
        }
        *cell = true;
        self.len += 1;
        true
    }

    #[inline]
    pub fn contains(&self, (row, col): Point) -> bool {
        self.marked[row][col]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mark every point of `other` as well.
    pub fn merge(&mut self, other: &Island<N>) {
        for pt in other.points() {
            self.insert(pt);
        }
    }

    /// Marked points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        Board::<N>::points().filter(move |&pt| self.contains(pt))
    }
}

/// A maximal connected region of empty points and the stone colors along
/// its edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region<const N: usize> {
    pub island: Island<N>,
    pub touches_black: bool,
    pub touches_white: bool,
}

impl<const N: usize> Region<N> {
    /// The color that alone borders this region, if exactly one does.
    pub fn owner(&self) -> Option<Color> {
        match (self.touches_black, self.touches_white) {
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            _ => None,
        }
    }
}

/// An NxN grid of vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    cells: [[Vertex; N]; N],
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<Point> for Board<N> {
    type Output = Vertex;

    #[inline]
    fn index(&self, (row, col): Point) -> &Vertex {
        &self.cells[row][col]
    }
}

impl<const N: usize> IndexMut<Point> for Board<N> {
    #[inline]
    fn index_mut(&mut self, (row, col): Point) -> &mut Vertex {
        &mut self.cells[row][col]
    }
}

impl<const N: usize> Board<N> {
    pub fn new() -> Self {
        Self {
            cells: [[Vertex::Empty; N]; N],
        }
    }

    /// Side length.
    pub const fn size(&self) -> usize {
        N
    }

    #[inline]
    pub fn contains((row, col): Point) -> bool {
        row < N && col < N
    }

    /// The vertex at `pt`, or `None` if `pt` lies off the board.
    pub fn get(&self, pt: Point) -> Option<Vertex> {
        Self::contains(pt).then(|| self[pt])
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> &[[Vertex; N]; N] {
        &self.cells
    }

    /// Every point in row-major order.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..N).flat_map(|row| (0..N).map(move |col| (row, col)))
    }

    /// The orthogonal neighbours of `pt` that lie on the board (N, E, S, W).
    #[inline]
    pub fn neighbors((row, col): Point) -> impl Iterator<Item = Point> {
        let north = row.checked_sub(1).map(|r| (r, col));
        let east = (col + 1 < N).then_some((row, col + 1));
        let south = (row + 1 < N).then_some((row + 1, col));
        let west = col.checked_sub(1).map(|c| (row, c));
        [north, east, south, west].into_iter().flatten()
    }

    /// Number of points holding `vertex`.
    pub fn count(&self, vertex: Vertex) -> u32 {
        self.cells.iter().flatten().filter(|&&v| v == vertex).count() as u32
    }

    /// Number of stones of `color` on the board.
    pub fn stones(&self, color: Color) -> u32 {
        self.count(color.into())
    }

    pub fn empty_count(&self) -> u32 {
        self.count(Vertex::Empty)
    }

    /// Flood-fill the group of stones containing `start`.
    ///
    /// Stops at the first liberty found and returns `None`. Only a group with
    /// no liberty at all is walked completely, and its members are returned.
    /// An empty `start` point is never a dead group.
    pub fn dead_group(&self, start: Point) -> Option<Island<N>> {
        let color = self[start];
        if color == Vertex::Empty {
            return None;
        }

        let mut island = Island::new();
        island.insert(start);
        let mut stack = vec![start];

        while let Some(pt) = stack.pop() {
            for n in Self::neighbors(pt) {
                match self[n] {
                    Vertex::Empty => return None,
                    c if c == color && island.insert(n) => stack.push(n),
                    _ => {}
                }
            }
        }
        Some(island)
    }

    /// Whether the group containing `start` touches at least one empty point.
    pub fn has_liberty(&self, start: Point) -> bool {
        self.dead_group(start).is_none()
    }

    /// Empty every point of `island`. Returns how many stones were removed.
    pub fn clear(&mut self, island: &Island<N>) -> u32 {
        let mut removed = 0;
        for pt in island.points() {
            if self[pt] != Vertex::Empty {
                self[pt] = Vertex::Empty;
                removed += 1;
            }
        }
        removed
    }

    /// Flood-fill the empty region containing `start`, noting which colors
    /// border it.
    ///
    /// `start` must be empty.
    pub fn empty_region(&self, start: Point) -> Region<N> {
        debug_assert_eq!(self[start], Vertex::Empty);

        let mut region = Region {
            island: Island::new(),
            touches_black: false,
            touches_white: false,
        };
        region.island.insert(start);
        let mut stack = vec![start];

        while let Some(pt) = stack.pop() {
            for n in Self::neighbors(pt) {
                match self[n] {
                    Vertex::Empty => {
                        if region.island.insert(n) {
                            stack.push(n);
                        }
                    }
                    Vertex::Black => region.touches_black = true,
                    Vertex::White => region.touches_white = true,
                }
            }
        }
        region
    }
}
