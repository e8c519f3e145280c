//! Per-style parameter domain table.
//!
//! Each style biases the major perceptual axes of a generated preset. The
//! table is static and process-wide; lookups never fail - unknown style names
//! fall back to the default style's ranges, a deliberate lenient policy
//! rather than an error path.

/// The fixed style enumeration, in the order presented to users.
pub const STYLES: [&str; 8] = [
    "Keys", "Bass", "Lead", "Pad", "Pluck", "FX", "Drums", "Sequence",
];

/// Fallback style for unrecognized names.
pub const DEFAULT_STYLE: &str = "Keys";

/// Closed numeric intervals for one style. Polyphony is an integer domain;
/// the rest are real-valued.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleRanges {
    pub polyphony: (i64, i64),
    pub osc_level: (f64, f64),
    pub filter_cutoff: (f64, f64),
    pub env_attack: (f64, f64),
    pub env_decay: (f64, f64),
    pub env_sustain: (f64, f64),
    pub env_release: (f64, f64),
}

/// Returns the numeric domains for a style name.
///
/// Unknown names resolve to [`DEFAULT_STYLE`]'s ranges.
pub fn ranges_for(style: &str) -> StyleRanges {
    match style {
        "Keys" => StyleRanges {
            polyphony: (4, 32),
            osc_level: (0.6, 0.9),
            filter_cutoff: (40.0, 100.0),
            env_attack: (0.1, 0.5),
            env_decay: (0.4, 0.8),
            env_sustain: (0.4, 0.8),
            env_release: (0.3, 0.7),
        },
        "Bass" => StyleRanges {
            polyphony: (1, 4),
            osc_level: (0.7, 1.0),
            filter_cutoff: (20.0, 80.0),
            env_attack: (0.0, 0.3),
            env_decay: (0.3, 0.6),
            env_sustain: (0.3, 0.7),
            env_release: (0.2, 0.5),
        },
        "Lead" => StyleRanges {
            polyphony: (1, 4),
            osc_level: (0.6, 0.9),
            filter_cutoff: (40.0, 120.0),
            env_attack: (0.0, 0.2),
            env_decay: (0.3, 0.7),
            env_sustain: (0.4, 0.8),
            env_release: (0.2, 0.5),
        },
        "Pad" => StyleRanges {
            polyphony: (4, 32),
            osc_level: (0.5, 0.8),
            filter_cutoff: (30.0, 90.0),
            env_attack: (0.5, 1.0),
            env_decay: (0.6, 1.0),
            env_sustain: (0.6, 1.0),
            env_release: (0.6, 1.0),
        },
        "Pluck" => StyleRanges {
            polyphony: (4, 16),
            osc_level: (0.6, 0.9),
            filter_cutoff: (60.0, 120.0),
            env_attack: (0.0, 0.1),
            env_decay: (0.2, 0.5),
            env_sustain: (0.0, 0.3),
            env_release: (0.2, 0.4),
        },
        "FX" => StyleRanges {
            polyphony: (1, 32),
            osc_level: (0.5, 1.0),
            filter_cutoff: (20.0, 120.0),
            env_attack: (0.0, 1.0),
            env_decay: (0.3, 1.0),
            env_sustain: (0.0, 1.0),
            env_release: (0.3, 1.0),
        },
        "Drums" => StyleRanges {
            polyphony: (1, 8),
            osc_level: (0.7, 1.0),
            filter_cutoff: (60.0, 120.0),
            env_attack: (0.0, 0.1),
            env_decay: (0.1, 0.4),
            env_sustain: (0.0, 0.2),
            env_release: (0.1, 0.3),
        },
        "Sequence" => StyleRanges {
            polyphony: (4, 16),
            osc_level: (0.6, 0.9),
            filter_cutoff: (40.0, 100.0),
            env_attack: (0.0, 0.2),
            env_decay: (0.2, 0.5),
            env_sustain: (0.2, 0.6),
            env_release: (0.2, 0.5),
        },
        _ => ranges_for(DEFAULT_STYLE),
    }
}
