// accessgen-core/src/infrastructure/adapters/faker.rs

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::ports::PersonSource;

const FIRST_NAMES: [&str; 40] = [
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
    "Sarah", "Christopher", "Karen", "Daniel", "Lisa", "Matthew", "Nancy", "Anthony", "Sandra",
    "Mark", "Ashley", "Steven", "Emily", "Andrew", "Michelle", "Joshua", "Amanda", "Kevin",
    "Melissa", "Brian", "Stephanie", "Ryan", "Rebecca",
];

const LAST_NAMES: [&str; 40] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

// Reserved or throwaway domains only; never real mailboxes.
const EMAIL_DOMAINS: [&str; 4] = ["example.com", "example.org", "example.net", "test.example"];

/// Built-in fake identity generator backed by fixed name lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct FakePersonSource;

impl FakePersonSource {
    fn pick<R: Rng + ?Sized>(list: &'static [&'static str], rng: &mut R) -> &'static str {
        list.choose(rng).copied().unwrap_or("Unknown")
    }
}

impl PersonSource for FakePersonSource {
    fn name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        format!(
            "{} {}",
            Self::pick(&FIRST_NAMES, rng),
            Self::pick(&LAST_NAMES, rng)
        )
    }

    fn email<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let first = Self::pick(&FIRST_NAMES, rng).to_lowercase();
        let last = Self::pick(&LAST_NAMES, rng).to_lowercase();
        let suffix: u8 = rng.gen_range(1..100);
        let domain = Self::pick(&EMAIL_DOMAINS, rng);
        format!("{}.{}{:02}@{}", first, last, suffix, domain)
    }
}
