use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

const CATEGORIES: [&str; 8] = [
    "Anti-social behaviour",
    "Burglary",
    "Criminal damage and arson",
    "Drugs",
    "Public order",
    "Shoplifting",
    "Vehicle crime",
    "Violence and sexual offences",
];

/// Hotspot centres around Leeds: (lat, lon, spread in degrees, weight).
const HOTSPOTS: [(f64, f64, f64, f64); 5] = [
    (53.7997, -1.5492, 0.012, 4.0), // city centre
    (53.8190, -1.5760, 0.015, 1.5), // Headingley
    (53.7950, -1.5070, 0.018, 2.0), // Harehills
    (53.7710, -1.5480, 0.020, 1.2), // Beeston
    (53.8400, -1.6400, 0.030, 0.6), // Horsforth
];

/// Street-level positions are snapped to this grid, so many records share
/// an exact coordinate.
const SNAP_DEG: f64 = 0.001;

#[derive(Parser)]
#[command(about = "Write a synthetic crime dataset in the viewer's JSON format")]
struct Args {
    #[arg(short, long, default_value = "data/crime_data.json")]
    output: PathBuf,
    #[arg(long, default_value_t = 2021)]
    first_year: i32,
    #[arg(long, default_value_t = 2024)]
    last_year: i32,
    /// Distinct street locations to generate
    #[arg(long, default_value_t = 1500)]
    locations: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// `{ t, y, p }` with `p` rows `[lat, lon, category, year, month, count]`.
#[derive(Serialize)]
struct Dataset {
    t: Vec<&'static str>,
    y: Vec<i32>,
    p: Vec<(f64, f64, usize, i32, u32, u64)>,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n.max(1)
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Knuth's method; fine for the small means used here.
    fn poisson(&mut self, lambda: f64) -> u64 {
        let limit = (-lambda).exp();
        let mut k = 0;
        let mut p = self.next_f64();
        while p > limit {
            k += 1;
            p *= self.next_f64();
        }
        k
    }
}

fn snap(v: f64) -> f64 {
    ((v / SNAP_DEG).round() * SNAP_DEG * 1e6).round() / 1e6
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.first_year > args.last_year {
        bail!("--first-year {} is after --last-year {}", args.first_year, args.last_year);
    }

    let mut rng = SimpleRng::new(args.seed);
    let total_weight: f64 = HOTSPOTS.iter().map(|h| h.3).sum();
    let years: Vec<i32> = (args.first_year..=args.last_year).collect();

    let mut rows = Vec::new();
    for _ in 0..args.locations {
        // Pick a hotspot proportionally to its weight.
        let mut pick = rng.next_f64() * total_weight;
        let &(lat0, lon0, spread, weight) = HOTSPOTS
            .iter()
            .find(|h| {
                pick -= h.3;
                pick <= 0.0
            })
            .unwrap_or(&HOTSPOTS[0]);

        let lat = snap(rng.gauss(lat0, spread));
        let lon = snap(rng.gauss(lon0, spread * 1.6));
        let category = rng.below(CATEGORIES.len());
        let rate = 0.4 + weight * 0.3;

        for &year in &years {
            for month in 1..=12u32 {
                let count = rng.poisson(rate);
                if count > 0 {
                    rows.push((lat, lon, category, year, month, count));
                }
            }
        }
    }

    let dataset = Dataset {
        t: CATEGORIES.to_vec(),
        y: years,
        p: rows,
    };
    let json = serde_json::to_string(&dataset).context("serialising dataset")?;

    if let Some(dir) = args.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(&args.output, json).with_context(|| format!("writing {}", args.output.display()))?;

    let total: u64 = dataset.p.iter().map(|r| r.5).sum();
    log::info!("Generated {} incidents", total);
    println!(
        "Wrote {} records ({} incidents, {} locations) to {}",
        dataset.p.len(),
        total,
        args.locations,
        args.output.display()
    );
    Ok(())
}
