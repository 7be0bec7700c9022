mod animator;

pub use animator::{LayerAnimator, NullAnimator, SELECTION_MOVE_DURATION};
