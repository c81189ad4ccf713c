//! Writes a deterministic `sample_books.csv` with the same header layout as
//! the remote dataset, so File→Open works without network access.

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

    /// Uniform in [0, n).
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

const ADJECTIVES: [&str; 10] = [
    "Silent", "Golden", "Broken", "Hidden", "Distant", "Quiet", "Burning", "Endless", "Little",
    "Wild",
];
const NOUNS: [&str; 10] = [
    "River", "Garden", "Library", "Desert", "Harbor", "Mountain", "Promise", "Letter", "Summer",
    "Shadow",
];

// A few prolific names so the Top Authors chart has something to rank.
const AUTHORS: [&str; 8] = [
    "Brinley Ostler",
    "Jordan Nash",
    "Casey Monroe",
    "Riley Quinn",
    "Morgan Vale",
    "Avery Stone",
    "Jamie Calder",
    "Sam Whitaker",
];

const BOOKS_PER_FORMAT: u32 = 40;

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "sample_books.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Rank",
            "Title",
            "Author",
            "Rating",
            "Format",
            "Copies",
            "Availability",
            "Wait Weeks",
        ])
        .expect("Failed to write header");

    let mut rows = 0u32;
    for format in ["EBOOK", "AUDIOBOOK"] {
        for rank in 1..=BOOKS_PER_FORMAT {
            let title = format!(
                "The {} {}",
                ADJECTIVES[rng.below(ADJECTIVES.len() as u64) as usize],
                NOUNS[rng.below(NOUNS.len() as u64) as usize]
            );
            let author = AUTHORS[rng.below(AUTHORS.len() as u64) as usize];

            // Ratings on the 0.1 slider grid, 2.4 to 4.7.
            let rating = 2.4 + rng.below(24) as f64 * 0.1;
            let copies = 1 + rng.below(40);
            // Popular (low-rank) books tend to have longer waits.
            let wait_cap = 1 + 27 * (BOOKS_PER_FORMAT - rank + 1) as u64 / BOOKS_PER_FORMAT as u64;
            let wait_weeks = rng.below(wait_cap);
            let availability = if wait_weeks == 0 {
                "Available"
            } else {
                "Wait list"
            };

            writer
                .write_record([
                    rank.to_string(),
                    title,
                    author.to_string(),
                    format!("{rating:.1}"),
                    format.to_string(),
                    copies.to_string(),
                    availability.to_string(),
                    wait_weeks.to_string(),
                ])
                .expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush CSV");
    println!("Wrote {rows} books to {output_path}");
}
