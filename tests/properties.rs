/// Property-based tests over the library: for random (people, transactions,
/// seed) triples, the generated document must satisfy the output laws.
/// Uses proptest for deterministic seeds, reproducible failures, and
/// shrinking to minimal cases.
use proptest::prelude::*;
use std::collections::HashSet;

use paygen::{Config, Generator};

fn generate(people: u64, transactions: u64, seed: u64) -> String {
    let mut generator = Generator::new(Config {
        people,
        transactions,
        seed: Some(seed),
    });
    let mut buf = Vec::new();
    generator.write_to(&mut buf).expect("generation failed");
    String::from_utf8(buf).expect("output was not valid UTF-8")
}

proptest! {
    #[test]
    fn line_count_law(p in 0u64..32, t in 0u64..64, seed in any::<u64>()) {
        // t > 0 with p == 0 is the rejected combination; covered separately.
        prop_assume!(p > 0 || t == 0);
        let out = generate(p, t, seed);
        prop_assert_eq!(out.lines().count() as u64, 1 + p + t);
    }

    #[test]
    fn document_structure_law(p in 1u64..16, t in 0u64..48, seed in any::<u64>()) {
        let out = generate(p, t, seed);
        let lines: Vec<&str> = out.lines().collect();

        prop_assert_eq!(lines[0], "def currency czk");

        let mut declared = HashSet::new();
        for line in &lines[1..1 + p as usize] {
            let id = line.strip_prefix("def person ").expect("bad person line");
            prop_assert_eq!(id.len(), 12);
            prop_assert!(id.bytes().all(|b| b.is_ascii_lowercase()));
            declared.insert(id);
        }

        for line in &lines[1 + p as usize..] {
            let (payer, rest) = line.split_once(" paid ").expect("bad transaction line");
            let (amount, payee) = rest.split_once("czk for ").expect("bad transaction line");
            prop_assert!(declared.contains(payer), "undeclared payer: {}", line);
            prop_assert!(declared.contains(payee), "undeclared payee: {}", line);
            let amount: f64 = amount.parse().expect("amount not a float");
            prop_assert!((0.0..1000.0).contains(&amount), "amount out of range: {}", line);
        }
    }

    #[test]
    fn seeded_generation_is_a_function_of_its_inputs(
        p in 1u64..16,
        t in 0u64..48,
        seed in any::<u64>(),
    ) {
        prop_assert_eq!(generate(p, t, seed), generate(p, t, seed));
    }
}
