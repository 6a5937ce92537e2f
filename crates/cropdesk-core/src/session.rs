//! The edit session: cropped working image, adjustment state and history.
//!
//! # State
//!
//! - `working` - the image on screen, absent before the first crop and after
//!   undoing the sole history entry
//! - `baseline` - the input of brightness adjustment; replaced by a new crop
//!   and by switching grayscale on
//! - `is_grayscale` - set by switching grayscale on, cleared by switching it
//!   off or by a new crop
//!
//! # Commits and previews
//!
//! Grayscale toggles, rotations and crops are committed to the history.
//! Brightness and resize are previews: they never touch the history, so an
//! undo silently drops an uncommitted brightness preview.
//!
//! All operations on a session without a working image are no-ops that
//! return `None`.

use log::{debug, info};

use crate::adjustments::{adjust_brightness, to_grayscale};
use crate::history::{History, Undone};
use crate::raster::RasterImage;
use crate::transform::{crop_region, rotate_clockwise, scale_by_percent, FilterType, PixelRect};

/// Brightness factor that leaves the baseline unchanged.
pub const NEUTRAL_BRIGHTNESS: f32 = 1.0;

/// Resize percentage that leaves the working image unchanged.
pub const NEUTRAL_SCALE_PERCENT: u32 = 100;

/// Coarse lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No working image.
    Empty,
    /// A crop is on screen with no further committed edits.
    Cropped,
    /// At least one grayscale toggle or rotation is committed on top of the crop.
    Edited,
}

/// Editing state for one cropped region.
#[derive(Debug, Clone)]
pub struct EditSession {
    working: Option<RasterImage>,
    baseline: Option<RasterImage>,
    is_grayscale: bool,
    history: History<RasterImage>,
    /// Committed edits between the crop and the current undo entry.
    edit_depth: usize,
    brightness: f32,
    scale_percent: u32,
    preview_filter: FilterType,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Create an empty session with unbounded history.
    pub fn new() -> Self {
        Self::with_options(None, FilterType::default())
    }

    /// Create an empty session with a history limit and resize preview filter.
    pub fn with_options(history_limit: Option<usize>, preview_filter: FilterType) -> Self {
        Self {
            working: None,
            baseline: None,
            is_grayscale: false,
            history: History::with_limit(history_limit),
            edit_depth: 0,
            brightness: NEUTRAL_BRIGHTNESS,
            scale_percent: NEUTRAL_SCALE_PERCENT,
            preview_filter,
        }
    }

    /// Drop every image and flag, keeping the options.
    pub fn clear(&mut self) {
        self.working = None;
        self.baseline = None;
        self.is_grayscale = false;
        self.history.clear();
        self.edit_depth = 0;
        self.reset_controls();
    }

    /// Crop `rect` (source pixel coordinates) out of `source` and start a new
    /// edit from it.
    ///
    /// Degenerate or out-of-bounds rectangles are ignored and leave the
    /// session unchanged.
    pub fn crop(&mut self, source: &RasterImage, rect: &PixelRect) -> Option<&RasterImage> {
        let cropped = match crop_region(source, rect) {
            Ok(img) => img,
            Err(e) => {
                debug!("Ignoring crop {:?}: {}", rect, e);
                return None;
            }
        };

        info!("New crop {}x{}", cropped.width, cropped.height);
        self.history.reset_to(&cropped);
        self.edit_depth = 0;
        self.baseline = Some(cropped.clone());
        self.is_grayscale = false;
        self.reset_controls();
        self.working = Some(cropped);
        self.working.as_ref()
    }

    /// Switch grayscale on or off and commit the result.
    ///
    /// Switching on snapshots the working image as the new baseline.
    /// Switching off restores the working image from that baseline.
    pub fn toggle_grayscale(&mut self) -> Option<&RasterImage> {
        let Some(working) = self.working.as_ref() else {
            debug!("Ignoring grayscale toggle: no working image");
            return None;
        };

        let next = if self.is_grayscale {
            let Some(baseline) = self.baseline.as_ref() else {
                debug!("Ignoring grayscale toggle: no baseline to restore");
                return None;
            };
            baseline.clone()
        } else {
            self.baseline = Some(working.clone());
            to_grayscale(working)
        };

        self.is_grayscale = !self.is_grayscale;
        debug!("Grayscale {}", if self.is_grayscale { "on" } else { "off" });
        self.commit(next)
    }

    /// Preview the baseline scaled by `factor`.
    ///
    /// Always computed from the baseline, so successive calls do not
    /// accumulate. Not committed to the history.
    pub fn adjust_brightness(&mut self, factor: f32) -> Option<&RasterImage> {
        if self.working.is_none() {
            debug!("Ignoring brightness {}: no working image", factor);
            return None;
        }
        let baseline = self.baseline.as_ref()?;

        self.working = Some(adjust_brightness(baseline, factor));
        self.brightness = factor;
        self.working.as_ref()
    }

    /// Rotate the working image 90° clockwise and commit the result.
    pub fn rotate(&mut self) -> Option<&RasterImage> {
        let Some(working) = self.working.as_ref() else {
            debug!("Ignoring rotate: no working image");
            return None;
        };

        let rotated = rotate_clockwise(working);
        debug!("Rotated to {}x{}", rotated.width, rotated.height);
        self.commit(rotated)
    }

    /// Render the working image scaled by `scale_percent / 100`.
    ///
    /// The working image and the history are left untouched; only the
    /// requested percentage is remembered.
    pub fn preview_resize(&mut self, scale_percent: u32) -> Option<RasterImage> {
        let working = self.working.as_ref()?;

        match scale_by_percent(working, scale_percent, self.preview_filter) {
            Ok(preview) => {
                self.scale_percent = scale_percent;
                Some(preview)
            }
            Err(e) => {
                debug!("Ignoring resize preview at {}%: {}", scale_percent, e);
                None
            }
        }
    }

    /// Step back one committed state.
    ///
    /// Undoing the last remaining entry leaves the session without a working
    /// image. Any uncommitted brightness preview is discarded.
    pub fn undo(&mut self) -> Option<&RasterImage> {
        match self.history.undo()? {
            Undone::Previous(previous) => {
                debug!("Undo ({} left)", self.history.undo_len());
                self.edit_depth = self.edit_depth.saturating_sub(1);
                self.working = Some(previous);
            }
            Undone::Exhausted => {
                debug!("Undo emptied the working image");
                self.working = None;
            }
        }
        self.brightness = NEUTRAL_BRIGHTNESS;
        self.working.as_ref()
    }

    /// Reinstate the most recently undone state.
    pub fn redo(&mut self) -> Option<&RasterImage> {
        let next = self.history.redo()?;
        debug!("Redo ({} left)", self.history.redo_len());
        // Redoing out of an emptied session restores the entry that was
        // undone last, which keeps its depth.
        if self.working.is_some() {
            self.edit_depth += 1;
        }
        self.working = Some(next);
        self.brightness = NEUTRAL_BRIGHTNESS;
        self.working.as_ref()
    }

    pub fn working(&self) -> Option<&RasterImage> {
        self.working.as_ref()
    }

    pub fn baseline(&self) -> Option<&RasterImage> {
        self.baseline.as_ref()
    }

    pub fn is_grayscale(&self) -> bool {
        self.is_grayscale
    }

    /// Last brightness factor applied to the working image.
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Last resize percentage previewed.
    pub fn scale_percent(&self) -> u32 {
        self.scale_percent
    }

    pub fn preview_filter(&self) -> FilterType {
        self.preview_filter
    }

    pub fn history(&self) -> &History<RasterImage> {
        &self.history
    }

    pub fn undo_len(&self) -> usize {
        self.history.undo_len()
    }

    pub fn redo_len(&self) -> usize {
        self.history.redo_len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Derived from the working image and the committed edits on top of
    /// the crop, independent of any history limit.
    pub fn state(&self) -> SessionState {
        match (&self.working, self.edit_depth) {
            (None, _) => SessionState::Empty,
            (Some(_), 0) => SessionState::Cropped,
            (Some(_), _) => SessionState::Edited,
        }
    }

    fn commit(&mut self, next: RasterImage) -> Option<&RasterImage> {
        self.history.commit(&next);
        self.edit_depth += 1;
        self.working = Some(next);
        self.working.as_ref()
    }

    fn reset_controls(&mut self) {
        self.brightness = NEUTRAL_BRIGHTNESS;
        self.scale_percent = NEUTRAL_SCALE_PERCENT;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Action {
        Gray,
        Bright(f32),
        Rotate,
        Resize(u32),
        Undo,
        Redo,
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Gray),
            (0.0f32..3.0).prop_map(Action::Bright),
            Just(Action::Rotate),
            (1u32..200).prop_map(Action::Resize),
            Just(Action::Undo),
            Just(Action::Redo),
        ]
    }

    fn source(width: u32, height: u32) -> RasterImage {
        let pixels = (0..width * height)
            .flat_map(|i| [(i * 13 % 256) as u8, (i * 29 % 256) as u8, (i % 256) as u8])
            .collect();
        RasterImage::new(width, height, pixels)
    }

    proptest! {
        /// Property: Every valid crop leaves one undo entry, no redo entries
        /// and grayscale off.
        #[test]
        fn prop_valid_crop_resets_history(
            a in (0i32..40, 0i32..30),
            b in (0i32..40, 0i32..30),
            actions in prop::collection::vec(action_strategy(), 0..10),
        ) {
            let img = source(40, 30);
            let mut session = EditSession::new();
            session.crop(&img, &PixelRect::new(0, 0, 8, 8));
            for action in actions {
                match action {
                    Action::Gray => { session.toggle_grayscale(); }
                    Action::Rotate => { session.rotate(); }
                    _ => {}
                }
            }

            let rect = PixelRect::from_corners(a, b);
            if session.crop(&img, &rect).is_some() {
                prop_assert!(!rect.is_degenerate());
                prop_assert_eq!(session.undo_len(), 1);
                prop_assert_eq!(session.redo_len(), 0);
                prop_assert!(!session.is_grayscale());
            } else {
                prop_assert!(rect.is_degenerate());
            }
        }

        /// Property: After a committed edit the undo top equals the working
        /// image; after any undo the redo top is the image that was on screen.
        #[test]
        fn prop_history_tracks_working(actions in prop::collection::vec(action_strategy(), 0..40)) {
            let img = source(24, 16);
            let mut session = EditSession::new();
            session.crop(&img, &PixelRect::new(2, 3, 14, 11));

            for action in actions {
                match action {
                    Action::Gray => {
                        if session.toggle_grayscale().is_some() {
                            prop_assert_eq!(session.history().undo_top(), session.working());
                            prop_assert_eq!(session.redo_len(), 0);
                        }
                    }
                    Action::Rotate => {
                        if session.rotate().is_some() {
                            prop_assert_eq!(session.history().undo_top(), session.working());
                            prop_assert_eq!(session.redo_len(), 0);
                        }
                    }
                    Action::Bright(f) => {
                        let undo_len = session.undo_len();
                        if let Some(out) = session.adjust_brightness(f).cloned() {
                            prop_assert_eq!(Some(out), session.baseline().map(|b| adjust_brightness(b, f)));
                        }
                        prop_assert_eq!(session.undo_len(), undo_len);
                    }
                    Action::Resize(p) => {
                        let before = session.working().cloned();
                        session.preview_resize(p);
                        prop_assert_eq!(session.working().cloned(), before);
                    }
                    Action::Undo => {
                        let top = session.history().undo_top().cloned();
                        session.undo();
                        if let Some(top) = top {
                            prop_assert_eq!(session.history().redo_top(), Some(&top));
                        }
                    }
                    Action::Redo => {
                        let next = session.history().redo_top().cloned();
                        let redone = session.redo().cloned();
                        prop_assert_eq!(redone, next);
                    }
                }
            }
        }
    }
}
