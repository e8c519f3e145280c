//! LFO shape generator.
//!
//! Generated shapes come in two flavors: a perturbed copy of one of the five
//! named template waveforms (70%), or a fully custom curve with a random
//! point count (30%). Either way the x axis stays monotonic with endpoints
//! pinned at 0 and 1.

use rand::seq::SliceRandom;
use rand::Rng;

use presetforge_preset::LfoShape;

use crate::rng::random_float;

/// Probability of perturbing a template instead of generating a custom shape.
const TEMPLATE_CHANCE: f64 = 0.7;

/// Uniform y jitter applied to template shapes.
const TEMPLATE_JITTER: f64 = 0.1;

/// Curve power domain, per point.
const POWER_RANGE: (f64, f64) = (-4.0, 4.0);

/// Point count domain for custom shapes.
const CUSTOM_POINTS: (i64, i64) = (3, 8);

struct LfoTemplate {
    name: &'static str,
    points: &'static [f64],
}

const TEMPLATES: [LfoTemplate; 5] = [
    LfoTemplate {
        name: "Triangle",
        points: &[0.0, 1.0, 0.5, 0.0, 1.0, 1.0],
    },
    LfoTemplate {
        name: "Saw Up",
        points: &[0.0, 1.0, 1.0, 0.0, 1.0, 1.0],
    },
    LfoTemplate {
        name: "Saw Down",
        points: &[0.0, 0.0, 1.0, 1.0, 1.0, 0.0],
    },
    LfoTemplate {
        name: "Bi polar Tri",
        points: &[0.0, 0.5, 0.25, 0.0, 0.75, 1.0, 1.0, 0.5],
    },
    LfoTemplate {
        name: "Square",
        points: &[0.0, 1.0, 0.0, 1.0, 0.5, 0.0, 1.0, 1.0],
    },
];

/// Generates one random LFO shape.
pub fn random_lfo(rng: &mut impl Rng) -> LfoShape {
    if rng.gen::<f64>() < TEMPLATE_CHANCE {
        perturbed_template(rng)
    } else {
        custom_shape(rng)
    }
}

fn perturbed_template(rng: &mut impl Rng) -> LfoShape {
    let template = TEMPLATES
        .choose(rng)
        .unwrap_or(&TEMPLATES[0]);
    let num_points = (template.points.len() / 2) as u32;

    // Jitter only the y of each (x, y) pair; x and point count are fixed.
    let mut points = Vec::with_capacity(template.points.len());
    for pair in template.points.chunks_exact(2) {
        points.push(pair[0]);
        points.push(pair[1] + random_float(rng, -TEMPLATE_JITTER, TEMPLATE_JITTER));
    }

    LfoShape {
        name: template.name.to_string(),
        num_points,
        points,
        powers: random_powers(rng, num_points as usize),
        smooth: rng.gen_bool(0.5),
    }
}

fn custom_shape(rng: &mut impl Rng) -> LfoShape {
    let num_points = rng.gen_range(CUSTOM_POINTS.0..=CUSTOM_POINTS.1) as usize;

    let mut xs: Vec<f64> = (0..num_points).map(|_| rng.gen::<f64>()).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    xs[0] = 0.0;
    xs[num_points - 1] = 1.0;

    let mut points = Vec::with_capacity(num_points * 2);
    for x in xs {
        points.push(x);
        points.push(rng.gen::<f64>());
    }

    LfoShape {
        name: format!("Custom {}", rng.gen_range(0..100)),
        num_points: num_points as u32,
        points,
        powers: random_powers(rng, num_points),
        smooth: rng.gen_bool(0.5),
    }
}

fn random_powers(rng: &mut impl Rng, count: usize) -> Vec<f64> {
    (0..count)
        .map(|_| random_float(rng, POWER_RANGE.0, POWER_RANGE.1))
        .collect()
}
