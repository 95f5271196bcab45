use nih_plug::prelude::*;

/// Quality factor of the peaking band. Narrow on purpose: the band should
/// ring at the selected pitch without touching its neighbors.
pub const PEAK_Q: f32 = 10.0;
/// Boost applied when a pitched note is selected, in dB.
pub const PEAK_GAIN_DB: f32 = 24.0;

/// Center frequency reported while bypassed. Inert, since unity gain turns
/// the peaking section into a pass-through at any frequency.
const BYPASS_FREQUENCY_HZ: f32 = 20.0;

/// The note selection exposed to the host: bypass or one of the twelve
/// semitones of the fourth octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum Note {
    Bypass,
    C4,
    Db4,
    D4,
    Eb4,
    E4,
    F4,
    Gb4,
    G4,
    Ab4,
    A4,
    Bb4,
    B4,
}

impl Note {
    /// Equal-tempered frequency of a pitched note, `None` while bypassed.
    pub fn frequency(self) -> Option<f32> {
        match self {
            Note::Bypass => None,
            Note::C4 => Some(261.63),
            Note::Db4 => Some(277.18),
            Note::D4 => Some(293.66),
            Note::Eb4 => Some(311.13),
            Note::E4 => Some(329.63),
            Note::F4 => Some(349.23),
            Note::Gb4 => Some(369.99),
            Note::G4 => Some(392.0),
            Note::Ab4 => Some(415.3),
            Note::A4 => Some(440.0),
            Note::Bb4 => Some(466.16),
            Note::B4 => Some(493.88),
        }
    }
}

/// Design parameters for the peaking band, resolved from a note snapshot.
#[derive(Debug, Clone, Copy)]
pub struct PeakSettings {
    pub frequency: f32,
    pub q: f32,
    /// Linear amplitude ratio, not a power ratio.
    pub gain: f32,
}

impl PeakSettings {
    pub fn for_note(note: Note) -> Self {
        match note.frequency() {
            Some(frequency) => Self {
                frequency,
                q: PEAK_Q,
                gain: util::db_to_gain(PEAK_GAIN_DB),
            },
            None => Self {
                frequency: BYPASS_FREQUENCY_HZ,
                q: PEAK_Q,
                gain: util::db_to_gain(0.0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitched_frequencies_are_one_to_one() {
        let notes = [
            (Note::C4, 261.63),
            (Note::Db4, 277.18),
            (Note::D4, 293.66),
            (Note::Eb4, 311.13),
            (Note::E4, 329.63),
            (Note::F4, 349.23),
            (Note::Gb4, 369.99),
            (Note::G4, 392.0),
            (Note::Ab4, 415.3),
            (Note::A4, 440.0),
            (Note::Bb4, 466.16),
            (Note::B4, 493.88),
        ];

        for (note, expected) in notes {
            assert_eq!(note.frequency(), Some(expected));
        }

        // Every pitched note gets its own frequency.
        let mut frequencies: Vec<f32> = notes.iter().map(|(_, f)| *f).collect();
        frequencies.dedup();
        assert_eq!(frequencies.len(), 12);
    }

    #[test]
    fn bypass_resolves_to_unity_gain() {
        let settings = PeakSettings::for_note(Note::Bypass);
        assert_eq!(settings.gain, 1.0);
        assert_eq!(settings.q, PEAK_Q);
    }

    #[test]
    fn pitched_note_resolves_to_fixed_boost() {
        let settings = PeakSettings::for_note(Note::A4);
        assert_eq!(settings.frequency, 440.0);
        assert_eq!(settings.q, 10.0);
        // +24 dB as an amplitude ratio
        assert!((settings.gain - 15.849).abs() < 1e-2);
    }
}
