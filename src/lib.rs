use nih_plug::prelude::*;
use std::sync::Arc;

mod biquad;
mod note;
mod params;

use biquad::{Biquad, PeakingCoefficients};
use note::PeakSettings;
use params::BirdcallParams;

/// A single peaking band tuned to a selectable musical note. Both channels
/// run the same coefficients through their own filter state.
pub struct Birdcall {
    params: Arc<BirdcallParams>,

    sample_rate: f32,
    /// One filter per channel. Identical coefficients, independent history.
    filters: [Biquad; 2],
}

impl Birdcall {
    /// Snapshot the note selection and design coefficients for it.
    fn design_coefficients(&self) -> PeakingCoefficients {
        let settings = PeakSettings::for_note(self.params.note.value());
        PeakingCoefficients::peaking(
            settings.frequency,
            settings.q,
            settings.gain,
            self.sample_rate,
        )
    }
}

impl Default for Birdcall {
    fn default() -> Self {
        Self {
            params: Arc::new(BirdcallParams::default()),

            sample_rate: 44100.0,
            filters: [Biquad::new(); 2],
        }
    }
}

impl Plugin for Birdcall {
    const NAME: &'static str = "Birdcall";
    const VENDOR: &'static str = "Kakeru3";
    const URL: &'static str = "";
    const EMAIL: &'static str = "";

    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    const AUDIO_IO_LAYOUTS: &'static [AudioIOLayout] = &[
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(2),
            main_output_channels: NonZeroU32::new(2),
            ..AudioIOLayout::const_default()
        },
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(1),
            main_output_channels: NonZeroU32::new(1),
            ..AudioIOLayout::const_default()
        },
    ];

    const SAMPLE_ACCURATE_AUTOMATION: bool = true;

    type SysExMessage = ();
    type BackgroundTask = ();

    fn params(&self) -> Arc<dyn Params> {
        self.params.clone()
    }

    fn initialize(
        &mut self,
        _audio_io_layout: &AudioIOLayout,
        buffer_config: &BufferConfig,
        _context: &mut impl InitContext<Self>,
    ) -> bool {
        self.sample_rate = buffer_config.sample_rate;

        // Same design the first block will run with; stale coefficients from
        // a previous sample rate must not survive a reconfiguration.
        let coeffs = self.design_coefficients();
        for filter in self.filters.iter_mut() {
            filter.set_coefficients(coeffs);
            filter.reset();
        }

        true
    }

    fn reset(&mut self) {
        for filter in self.filters.iter_mut() {
            filter.reset();
        }
    }

    fn process(
        &mut self,
        buffer: &mut Buffer,
        _aux: &mut AuxiliaryBuffers,
        _context: &mut impl ProcessContext<Self>,
    ) -> ProcessStatus {
        // Re-read the selection and redo the design every block. The math is
        // a handful of trig calls; caching it would only add a staleness
        // hazard on note changes.
        let coeffs = self.design_coefficients();

        for (filter, channel_samples) in self.filters.iter_mut().zip(buffer.as_slice().iter_mut()) {
            filter.set_coefficients(coeffs);
            filter.process_block(channel_samples);
        }

        ProcessStatus::Normal
    }
}

impl ClapPlugin for Birdcall {
    const CLAP_ID: &'static str = "com.kakeru3.birdcall";
    const CLAP_DESCRIPTION: Option<&'static str> =
        Some("Single peaking band tuned to a selectable note");
    const CLAP_MANUAL_URL: Option<&'static str> = None;
    const CLAP_SUPPORT_URL: Option<&'static str> = None;
    const CLAP_FEATURES: &'static [ClapFeature] = &[
        ClapFeature::AudioEffect,
        ClapFeature::Stereo,
        ClapFeature::Mono,
        ClapFeature::Filter,
    ];
}

impl Vst3Plugin for Birdcall {
    const VST3_CLASS_ID: [u8; 16] = *b"BirdcallNotePeak";
    const VST3_SUBCATEGORIES: &'static [Vst3SubCategory] =
        &[Vst3SubCategory::Fx, Vst3SubCategory::Filter];
}

nih_export_clap!(Birdcall);
nih_export_vst3!(Birdcall);
