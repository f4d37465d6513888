//! Horizontal drag ("swipe") state machine for list cards.
//!
//! The tracker works in abstract points; the mouse handler scales terminal
//! cell deltas before feeding it, so the thresholds below hold regardless of
//! cell geometry. A card snaps open when the release delta exceeds
//! `SWIPE_THRESHOLD` and then rests at exactly the action-panel width of the
//! revealed side. Early movement that is predominantly vertical aborts the
//! gesture so list scrolling wins.

/// Release delta (points) past which a card snaps open.
pub const SWIPE_THRESHOLD: i32 = 80;
/// Revealed panel width for order cards.
pub const ORDER_ACTION_WIDTH: i32 = 120;
/// Revealed panel width for product and billing-charge cards.
pub const CARD_ACTION_WIDTH: i32 = 100;
/// Movement (points) before the gesture direction is decided.
const INTENT_DEADBAND: i32 = 10;
/// Points represented by one terminal cell of mouse travel.
pub const POINTS_PER_CELL: i32 = 10;

/// Which action panel a card is resting open on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeSide {
    /// Left panel revealed (content shifted right): primary action.
    Left,
    /// Right panel revealed (content shifted left): secondary action.
    Right,
}

/// Per-row gate for which sides may open (e.g. only pending orders swipe).
#[derive(Debug, Clone, Copy)]
pub struct SwipeCaps {
    pub left: bool,
    pub right: bool,
}

impl SwipeCaps {
    pub const BOTH: SwipeCaps = SwipeCaps {
        left: true,
        right: true,
    };
    pub const NONE: SwipeCaps = SwipeCaps {
        left: false,
        right: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Undecided,
    Horizontal,
    Vertical,
}

/// One in-flight drag gesture over a single card.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    origin_x: i32,
    origin_y: i32,
    /// Offset the card already rested at when the gesture began.
    base_offset: i32,
    offset: i32,
    intent: Intent,
    caps: SwipeCaps,
}

/// Where the card rests after release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeOutcome {
    pub side: Option<SwipeSide>,
    pub offset: i32,
}

impl SwipeTracker {
    pub fn begin(
        x: i32,
        y: i32,
        open_side: Option<SwipeSide>,
        caps: SwipeCaps,
        action_width: i32,
    ) -> Self {
        let base_offset = match open_side {
            Some(SwipeSide::Left) => action_width,
            Some(SwipeSide::Right) => -action_width,
            None => 0,
        };
        Self {
            origin_x: x,
            origin_y: y,
            base_offset,
            offset: base_offset,
            intent: Intent::Undecided,
            caps,
        }
    }

    /// Current horizontal offset of the card content.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Whether the gesture was handed over to vertical scrolling.
    pub fn aborted(&self) -> bool {
        self.intent == Intent::Vertical
    }

    /// Feed a pointer position. Returns the new offset.
    pub fn update(&mut self, x: i32, y: i32) -> i32 {
        if self.intent == Intent::Vertical {
            return self.offset;
        }

        let dx = x - self.origin_x;
        let dy = y - self.origin_y;

        if self.intent == Intent::Undecided {
            if dx.abs() > dy.abs() && dx.abs() > INTENT_DEADBAND {
                self.intent = Intent::Horizontal;
            } else if dy.abs() > dx.abs() && dy.abs() > INTENT_DEADBAND {
                self.intent = Intent::Vertical;
                self.offset = self.base_offset;
                return self.offset;
            } else {
                return self.offset;
            }
        }

        let mut next = self.base_offset + dx;
        if next > 0 && !self.caps.left {
            next = 0;
        }
        if next < 0 && !self.caps.right {
            next = 0;
        }
        self.offset = next;
        self.offset
    }

    /// End the gesture: snap open past the threshold, back to rest otherwise.
    pub fn release(self, action_width: i32) -> SwipeOutcome {
        if self.intent != Intent::Horizontal {
            return SwipeOutcome {
                side: None,
                offset: 0,
            };
        }
        if self.offset > SWIPE_THRESHOLD && self.caps.left {
            SwipeOutcome {
                side: Some(SwipeSide::Left),
                offset: action_width,
            }
        } else if self.offset < -SWIPE_THRESHOLD && self.caps.right {
            SwipeOutcome {
                side: Some(SwipeSide::Right),
                offset: -action_width,
            }
        } else {
            SwipeOutcome {
                side: None,
                offset: 0,
            }
        }
    }
}

/// One open card per list: opening a new card closes the previous one.
#[derive(Debug, Clone, Default)]
pub struct ActiveSwipe {
    open: Option<(String, SwipeSide)>,
}

impl ActiveSwipe {
    /// Record `id` as the open card. Returns the id that must snap closed.
    pub fn open(&mut self, id: &str, side: SwipeSide) -> Option<String> {
        let previous = match &self.open {
            Some((open_id, _)) if open_id != id => Some(open_id.clone()),
            _ => None,
        };
        self.open = Some((id.to_string(), side));
        previous
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn side_of(&self, id: &str) -> Option<SwipeSide> {
        match &self.open {
            Some((open_id, side)) if open_id == id => Some(*side),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}
