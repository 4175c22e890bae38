//! Motion math shared by the scroll and pointer trackers
//!
//! Everything here is pure: the browser layer samples geometry from the DOM,
//! calls into these functions and writes the resulting transform strings.

/// A point in viewport (client) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in viewport coordinates, as returned by `getBoundingClientRect`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// `current + (target - current) * factor`
pub fn lerp(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// Trailing follower that eases toward the latest pointer position each frame
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    position: Point,
    target: Point,
    smoothing: f64,
}

impl Follower {
    /// Create a follower resting at the origin
    pub fn new(smoothing: f64) -> Self {
        Self {
            position: Point::default(),
            target: Point::default(),
            smoothing,
        }
    }

    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// Advance one frame and return the new position
    pub fn step(&mut self) -> Point {
        self.position = Point::new(
            lerp(self.position.x, self.target.x, self.smoothing),
            lerp(self.position.y, self.target.y, self.smoothing),
        );
        self.position
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// Ease-out quartic curve, `t` clamped to `[0, 1]`
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Rotation pair for a tilted card
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn to_css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Tilt derived from the pointer's offset from the card center.
///
/// Offsets are normalized by the half extent and clamped to `[-1, 1]`, so the
/// rotation never exceeds `max_deg` even when the pointer leaves the card
/// between events.
pub fn tilt_for(pointer: Point, card: Rect, max_deg: f64) -> Tilt {
    if card.width <= 0.0 || card.height <= 0.0 {
        return Tilt::NEUTRAL;
    }
    let center = card.center();
    let nx = ((pointer.x - center.x) / (card.width / 2.0)).clamp(-1.0, 1.0);
    let ny = ((pointer.y - center.y) / (card.height / 2.0)).clamp(-1.0, 1.0);
    Tilt {
        rotate_x: -ny * max_deg,
        rotate_y: nx * max_deg,
    }
}

/// Offset applied to a magnetic button: a fraction of the pointer's offset from its center
pub fn magnetic_offset(pointer: Point, button: Rect, strength: f64) -> Point {
    let center = button.center();
    Point::new(
        (pointer.x - center.x) * strength,
        (pointer.y - center.y) * strength,
    )
}

pub fn translate_css(offset: Point) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

pub fn translate_y_css(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// Nav is "scrolled" strictly past the threshold
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Layered parallax: `(scrollY - documentTop) * speed`
pub fn speed_parallax(scroll_y: f64, document_top: f64, speed: f64) -> f64 {
    (scroll_y - document_top) * speed
}

/// Offset proportional to the element center's distance from the viewport center
pub fn centered_parallax(element: Rect, viewport_height: f64, factor: f64) -> f64 {
    (element.center().y - viewport_height / 2.0) * factor
}

/// Footer wordmark offset, `None` while the footer is outside the viewport
pub fn footer_parallax(footer: Rect, viewport_height: f64, scale: f64, max_offset: f64) -> Option<f64> {
    if viewport_height <= 0.0 || footer.top >= viewport_height || footer.bottom() <= 0.0 {
        return None;
    }
    let progress = 1.0 - footer.top / viewport_height;
    Some((progress * scale).min(max_offset))
}

pub fn footer_wordmark_css(offset: f64) -> String {
    format!("translate(-50%, calc(-50% + {offset}px))")
}
