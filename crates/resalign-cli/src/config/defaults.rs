use resalign::core::io::terminator::TerminatorPolicy;
use resalign::engine::config::EmptyBinPolicy;

/// Values used when neither the config file nor the command line sets one.
pub struct DefaultsConfig {
    pub significance_cutoff: f64,
    pub preamble_lines: usize,
    pub terminator: TerminatorPolicy,
    pub empty_bins: EmptyBinPolicy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            significance_cutoff: 1.0,
            preamble_lines: 2,
            terminator: TerminatorPolicy::RepeatedFirstLabel,
            empty_bins: EmptyBinPolicy::Error,
        }
    }
}
