use arrayvec::ArrayVec;
use bevy_ecs::prelude::Component;

/// Seconds each walk frame stays on screen.
pub const SECONDS_PER_FRAME: f32 = 0.25;

/// Maximum frames per direction in a walk cycle.
pub const MAX_WALK_FRAMES: usize = 8;

/// Facing direction, used to index per-direction frame tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn index(self) -> usize {
        self as usize
    }
}

pub type FrameTable = ArrayVec<usize, MAX_WALK_FRAMES>;

/// Sprite-sheet walk cycle with one frame table per [`Direction`].
///
/// While the entity moves the cursor steps through the active table every
/// [`SECONDS_PER_FRAME`]; when it stops the cursor returns to the first
/// (idle) frame.
#[derive(Debug, Clone, Component)]
pub struct WalkAnimation {
    pub frames: [FrameTable; 4],
    pub direction: Direction,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl WalkAnimation {
    /// Build from `(direction, frames)` pairs. Frames beyond
    /// [`MAX_WALK_FRAMES`] are dropped.
    pub fn new(tables: &[(Direction, &[usize])]) -> Self {
        let mut frames: [FrameTable; 4] = Default::default();
        for (direction, indices) in tables {
            let table = &mut frames[direction.index()];
            table.clear();
            table.extend(indices.iter().copied().take(MAX_WALK_FRAMES));
        }
        Self {
            frames,
            direction: Direction::default(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Walk cycle of a `columns`-wide sheet laid out one direction per row:
    /// up, down, right, left.
    pub fn from_sheet_rows(columns: usize) -> Self {
        let columns = columns.min(MAX_WALK_FRAMES);
        let row = |r: usize| (r * columns..(r + 1) * columns).collect::<Vec<_>>();
        let (up, down, right, left) = (row(0), row(1), row(2), row(3));
        Self::new(&[
            (Direction::Up, up.as_slice()),
            (Direction::Down, down.as_slice()),
            (Direction::Right, right.as_slice()),
            (Direction::Left, left.as_slice()),
        ])
    }

    /// Switch the active frame table. The cursor is kept so a walk cycle
    /// continues smoothly when turning.
    pub fn face(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advance the cycle by `dt` seconds.
    pub fn advance(&mut self, dt: f32, moving: bool) {
        let len = self.frames[self.direction.index()].len();
        if !moving || len == 0 {
            self.frame_index = 0;
            self.elapsed_time = 0.0;
            return;
        }
        self.elapsed_time += dt;
        if self.elapsed_time >= SECONDS_PER_FRAME {
            self.elapsed_time = 0.0;
            self.frame_index = (self.frame_index + 1) % len;
        }
        self.frame_index %= len;
    }

    /// Sheet index of the frame to draw.
    pub fn frame(&self) -> usize {
        let table = &self.frames[self.direction.index()];
        table
            .get(self.frame_index)
            .or_else(|| table.first())
            .copied()
            .unwrap_or(0)
    }
}
