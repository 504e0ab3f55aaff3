//! Glyphs used as button and label icons.
//!
//! All of these are covered by the fonts egui ships with.

pub(crate) const CHECK: &str = "\u{2714}";
pub(crate) const CANCEL: &str = "\u{1F5D9}";
pub(crate) const TROPHY: &str = "\u{1F3C6}";
pub(crate) const HOURGLASS: &str = "\u{231B}";
pub(crate) const GEAR: &str = "\u{2699}";
pub(crate) const NEW: &str = "\u{1F5CB}";
pub(crate) const MEGAPHONE: &str = "\u{1F4E3}";
pub(crate) const WARNING: &str = "\u{26A0}";
pub(crate) const INFO: &str = "\u{2139}";
