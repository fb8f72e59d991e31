//! Image slideshow and zoom modal of a product detail view.
//!
//! Zoom is tracked in quarter steps: 4 is 100%, the range is 2..=12
//! (50%..300%).

const ZOOM_STEP_PER_UNIT: u8 = 4;
const DEFAULT_ZOOM_STEPS: u8 = ZOOM_STEP_PER_UNIT;
const MIN_ZOOM_STEPS: u8 = 2;
const MAX_ZOOM_STEPS: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    image_count: usize,
    current_index: usize,
    modal_open: bool,
    zoom_steps: u8,
}

impl Gallery {
    pub const fn new(image_count: usize) -> Self {
        Self {
            image_count,
            current_index: 0,
            modal_open: false,
            zoom_steps: DEFAULT_ZOOM_STEPS,
        }
    }

    pub const fn image_count(&self) -> usize {
        self.image_count
    }

    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based number of the image on display.
    pub const fn current_image_number(&self) -> Option<usize> {
        if self.image_count == 0 {
            None
        } else {
            Some(self.current_index + 1)
        }
    }

    pub const fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Arrows and thumbnails are only offered with more than one image.
    pub const fn shows_navigation(&self) -> bool {
        self.image_count > 1
    }

    pub fn next(&mut self) {
        if self.image_count == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % self.image_count;
    }

    pub fn previous(&mut self) {
        if self.image_count == 0 {
            return;
        }
        self.current_index = (self.current_index + self.image_count - 1) % self.image_count;
    }

    /// Jump to a thumbnail. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.image_count {
            self.current_index = index;
        }
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
        self.zoom_steps = DEFAULT_ZOOM_STEPS;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.zoom_steps = DEFAULT_ZOOM_STEPS;
    }

    pub fn zoom_in(&mut self) {
        self.zoom_steps = (self.zoom_steps + 1).min(MAX_ZOOM_STEPS);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_steps = self.zoom_steps.saturating_sub(1).max(MIN_ZOOM_STEPS);
    }

    pub fn zoom_level(&self) -> f32 {
        f32::from(self.zoom_steps) / f32::from(ZOOM_STEP_PER_UNIT)
    }

    pub fn zoom_percent(&self) -> u16 {
        u16::from(self.zoom_steps) * 100 / u16::from(ZOOM_STEP_PER_UNIT)
    }

    pub const fn can_zoom_in(&self) -> bool {
        self.zoom_steps < MAX_ZOOM_STEPS
    }

    pub const fn can_zoom_out(&self) -> bool {
        self.zoom_steps > MIN_ZOOM_STEPS
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(0)
    }
}
