//! Sample data for local development.

use chrono::{DateTime, Duration, Utc};
use candidates_core::candidate::NewCandidate;
use rand_core::RngCore;

const FIRST_NAMES: &[&str] = &[
  "Alice", "Bob", "Charlie", "Diana", "Erik", "Fiona", "George", "Hannah", "Ivan", "Julia",
  "Kevin", "Laura", "Mike", "Nina", "Oscar", "Patricia", "Quincy", "Rachel", "Sam", "Tina",
];

const LAST_NAMES: &[&str] = &[
  "Anderson", "Brown", "Clark", "Davis", "Evans", "Foster", "Garcia", "Harris", "Ingram", "Jones",
  "King", "Lee", "Martinez", "Nelson", "Owens", "Patel", "Quinn", "Roberts", "Smith", "Taylor",
];

const STATES: &[&str] = &[
  "California", "New York", "Texas", "Florida", "Illinois", "Pennsylvania", "Ohio", "Georgia",
  "North Carolina", "Michigan",
];

const FAVOURITES: &[&str] = &[
  "Engineering", "Design", "Marketing", "Sales", "Support", "Product", "Finance", "Operations",
  "HR", "Legal",
];

/// Uniform integer in `lo..=hi`. The modulo bias is irrelevant at these sizes.
fn between(rng: &mut impl RngCore, lo: u32, hi: u32) -> u32 {
  lo + rng.next_u32() % (hi - lo + 1)
}

fn pick<'a>(rng: &mut impl RngCore, from: &[&'a str]) -> &'a str {
  from[rng.next_u32() as usize % from.len()]
}

/// Generate `count` plausible candidates created within the year before
/// `now`. Ids are left to the store.
pub fn random_candidates(
  rng: &mut impl RngCore,
  count: usize,
  now: DateTime<Utc>,
) -> Vec<NewCandidate> {
  (0..count)
    .map(|_| {
      let first = pick(rng, FIRST_NAMES);
      let last = pick(rng, LAST_NAMES);
      let days = i64::from(between(rng, 1, 365));
      NewCandidate {
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone_number: format!("555-{}", between(rng, 1000, 9999)),
        state: pick(rng, STATES).to_owned(),
        favourite: pick(rng, FAVOURITES).to_owned(),
        create_time: Some(now - Duration::days(days)),
        notes: format!("Sample notes for {first} {last}."),
        ..Default::default()
      }
    })
    .collect()
}
