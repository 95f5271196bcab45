use nih_plug::prelude::*;

use crate::note::Note;

#[derive(Params)]
pub struct BirdcallParams {
    /// Which note the peaking band sits on, or bypass for a flat response.
    /// The host writes this from its own thread; nih_plug stores enum
    /// params atomically, so the audio thread's per-block snapshot is
    /// always a whole value.
    #[id = "note"]
    pub note: EnumParam<Note>,
}

impl Default for BirdcallParams {
    fn default() -> Self {
        Self {
            note: EnumParam::new("Note", Note::Bypass),
        }
    }
}
