//! Deterministic synthetic launch-table generator. Writes a CSV with the
//! canonical dashboard columns so a demo dataset can be rebuilt without
//! shipping real data.

/// Per-site generation profile: payload envelope and baseline success rate.
struct SiteProfile {
    name: &'static str,
    payload_lo: f64,
    payload_hi: f64,
    base_success: f64,
    launches: usize,
}

const SITES: [SiteProfile; 4] = [
    SiteProfile {
        name: "CCAFS LC-40",
        payload_lo: 0.0,
        payload_hi: 7000.0,
        base_success: 0.55,
        launches: 26,
    },
    SiteProfile {
        name: "CCAFS SLC-40",
        payload_lo: 1800.0,
        payload_hi: 9600.0,
        base_success: 0.70,
        launches: 7,
    },
    SiteProfile {
        name: "KSC LC-39A",
        payload_lo: 2200.0,
        payload_hi: 9600.0,
        base_success: 0.80,
        launches: 13,
    },
    SiteProfile {
        name: "VAFB SLC-4E",
        payload_lo: 500.0,
        payload_hi: 9600.0,
        base_success: 0.65,
        launches: 10,
    },
];

const BOOSTERS: [(&str, &str); 5] = [
    ("F9 v1.0", "v1.0"),
    ("F9 v1.1", "v1.1"),
    ("F9 FT", "FT"),
    ("F9 B4", "B4"),
    ("F9 B5", "B5"),
];

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
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "sample_launches.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "class",
            "Payload Mass (kg)",
            "Booster Version",
            "Booster Version Category",
        ])
        .expect("Failed to write header");

    let mut flight: u32 = 0;
    for site in &SITES {
        for _ in 0..site.launches {
            flight += 1;

            // Payloads rounded to 10 kg across the site's envelope.
            let span = site.payload_hi - site.payload_lo;
            let payload = site.payload_lo + (span * rng.next_f64() / 10.0).round() * 10.0;

            // Heavier payloads fail somewhat more often.
            let heaviness = (payload - site.payload_lo) / span;
            let p_success = site.base_success - 0.15 * heaviness;
            let class = if rng.next_f64() < p_success { 1 } else { 0 };

            let (version, category) = BOOSTERS[(rng.next_u64() % BOOSTERS.len() as u64) as usize];
            let booster = format!("{version}  B{:04}", 1000 + flight);

            writer
                .write_record([
                    flight.to_string(),
                    site.name.to_string(),
                    class.to_string(),
                    format!("{payload:.1}"),
                    booster,
                    category.to_string(),
                ])
                .expect("Failed to write record");
        }
    }

    writer.flush().expect("Failed to flush CSV");

    println!("Wrote {flight} launches to {output_path}");
}
