//! Randomized build generation.
//!
//! Builds are correct by construction: the substitution count is drawn from
//! {1, 2}, replaced slots and donor classes are sampled without replacement,
//! and each donor gives exactly one line. No build is ever generated and then
//! thrown away.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::build::{Build, SkillSlot};
use crate::catalog::{Catalog, ClassDefinition, SKILL_LINES_PER_CLASS};
use crate::config::{GeneratorConfig, SubstitutionCount};
use crate::error::{EsrError, EsrResult};

/// Generate one build from `catalog`.
///
/// With `base_class` set, the build is for that class (matched
/// case-insensitively); otherwise the base class is picked uniformly. With
/// `substitutions` set, exactly that many lines are replaced; otherwise one or
/// two, with equal odds.
pub fn generate_build(
    catalog: &Catalog,
    base_class: Option<&str>,
    substitutions: Option<SubstitutionCount>,
    rng: &mut StdRng,
) -> EsrResult<Build> {
    if catalog.len() < 2 {
        return Err(EsrError::EmptyCatalog(catalog.len()));
    }

    let base = match base_class {
        Some(name) => catalog.require_class(name)?,
        None => &catalog.classes()[rng.random_range(0..catalog.len())],
    };

    let count = substitutions.unwrap_or_else(|| {
        SubstitutionCount::ALL[rng.random_range(0..SubstitutionCount::ALL.len())]
    });
    let n = count.get();

    let mut donors: Vec<&ClassDefinition> = catalog
        .classes()
        .iter()
        .filter(|c| c.name() != base.name())
        .collect();
    // One line per donor: never reuse a class to make up the numbers.
    if donors.len() < n {
        return Err(EsrError::EmptyCatalog(catalog.len()));
    }
    donors.shuffle(rng);
    donors.truncate(n);

    let mut slots: Vec<usize> = (0..SKILL_LINES_PER_CLASS).collect();
    slots.shuffle(rng);
    slots.truncate(n);

    log::debug!(
        "base class {} (requested: {:?}), replacing {n} slot(s) {slots:?} with lines from {:?}",
        base.name(),
        base_class,
        donors.iter().map(|d| d.name()).collect::<Vec<_>>()
    );

    let mut skill_lines = base
        .skill_lines()
        .clone()
        .map(|line| SkillSlot::new(base.name(), line));

    for (&slot, donor) in slots.iter().zip(&donors) {
        let line = &donor.skill_lines()[rng.random_range(0..SKILL_LINES_PER_CLASS)];
        log::debug!(
            "slot {slot}: {} -> {line} ({})",
            skill_lines[slot].skill_line,
            donor.name()
        );
        skill_lines[slot] = SkillSlot::new(donor.name(), line.clone());
    }

    let subclassed_from = skill_lines
        .iter()
        .filter(|s| s.class != base.name())
        .map(|s| s.class.clone())
        .collect();

    Ok(Build {
        base_class: base.name().to_string(),
        skill_lines,
        subclassed_from,
    })
}

/// A catalog plus its own random source, for generating many builds.
#[derive(Debug)]
pub struct BuildGenerator {
    catalog: Catalog,
    config: GeneratorConfig,
    rng: StdRng,
}

impl BuildGenerator {
    /// Create a generator, failing early if the catalog is too small to subclass.
    pub fn new(catalog: Catalog, config: GeneratorConfig) -> EsrResult<Self> {
        if catalog.len() < 2 {
            return Err(EsrError::EmptyCatalog(catalog.len()));
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        log::debug!(
            "generator ready: {} classes, seed {:?}, substitutions {:?}",
            catalog.len(),
            config.seed,
            config.substitutions
        );
        Ok(Self {
            catalog,
            config,
            rng,
        })
    }

    /// The catalog builds are drawn from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The generator's configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one build using the configured substitution count.
    pub fn generate(&mut self, base_class: Option<&str>) -> EsrResult<Build> {
        self.generate_with(base_class, self.config.substitutions)
    }

    /// Generate one build, overriding the configured substitution count.
    pub fn generate_with(
        &mut self,
        base_class: Option<&str>,
        substitutions: Option<SubstitutionCount>,
    ) -> EsrResult<Build> {
        generate_build(&self.catalog, base_class, substitutions, &mut self.rng)
    }

    /// Generate `count` independent builds. Repeats are allowed.
    pub fn generate_batch(
        &mut self,
        count: usize,
        base_class: Option<&str>,
    ) -> EsrResult<Vec<Build>> {
        (0..count).map(|_| self.generate(base_class)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn eso() -> Catalog {
        Catalog::eso().unwrap()
    }

    #[test]
    fn requested_class_is_base() {
        let catalog = eso();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let build = generate_build(&catalog, Some("Warden"), None, &mut rng).unwrap();
            assert_eq!(build.base_class, "Warden");
            assert!(build.validate(&catalog).is_ok());
        }
    }

    #[test]
    fn requested_class_uses_canonical_name() {
        let catalog = eso();
        let mut rng = StdRng::seed_from_u64(1);
        let build = generate_build(&catalog, Some("necromancer"), None, &mut rng).unwrap();
        assert_eq!(build.base_class, "Necromancer");
    }

    #[test]
    fn unknown_class_fails() {
        let catalog = eso();
        let mut rng = StdRng::seed_from_u64(42);
        let err = generate_build(&catalog, Some("Atronach"), None, &mut rng).unwrap_err();
        match err {
            EsrError::UnknownClass { name, available } => {
                assert_eq!(name, "Atronach");
                assert_eq!(available, catalog.class_names());
            }
            other => panic!("expected UnknownClass, got {other:?}"),
        }
    }

    #[test]
    fn native_lines_keep_their_slots() {
        let catalog = eso();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let build = generate_build(&catalog, None, None, &mut rng).unwrap();
            let base = catalog.find_class(&build.base_class).unwrap();
            for (i, slot) in build.skill_lines.iter().enumerate() {
                if build.is_native(i) {
                    assert_eq!(slot.skill_line, base.skill_lines()[i]);
                } else {
                    assert!(!base.has_line(&slot.skill_line));
                }
            }
        }
    }

    #[test]
    fn fixed_substitution_count_is_honored() {
        let catalog = eso();
        let mut rng = StdRng::seed_from_u64(3);
        for count in SubstitutionCount::ALL {
            for _ in 0..100 {
                let build = generate_build(&catalog, None, Some(count), &mut rng).unwrap();
                assert_eq!(build.substitution_count(), count.get());
                assert_eq!(build.subclassed_from.len(), count.get());
            }
        }
    }

    #[test]
    fn unconstrained_distribution() {
        let catalog = eso();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut per_class: HashMap<String, usize> = HashMap::new();
        let mut per_count = [0usize; 3];

        for _ in 0..1000 {
            let build = generate_build(&catalog, None, None, &mut rng).unwrap();
            assert!(build.validate(&catalog).is_ok());
            *per_class.entry(build.base_class.clone()).or_default() += 1;
            per_count[build.substitution_count()] += 1;
        }

        // Expected ~143 per class.
        assert_eq!(per_class.len(), 7);
        for (class, n) in &per_class {
            assert!((80..=210).contains(n), "{class} picked {n} times");
        }
        assert_eq!(per_count[0], 0);
        assert!(per_count[1] > 350, "one-line builds: {}", per_count[1]);
        assert!(per_count[2] > 350, "two-line builds: {}", per_count[2]);
    }

    #[test]
    fn too_small_catalog_fails() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty = Catalog::new(Vec::new()).unwrap();
        assert_eq!(
            generate_build(&empty, None, None, &mut rng),
            Err(EsrError::EmptyCatalog(0))
        );

        let single = Catalog::from_table(&[("Solo", ["A", "B", "C"])]).unwrap();
        assert_eq!(
            generate_build(&single, Some("Solo"), None, &mut rng),
            Err(EsrError::EmptyCatalog(1))
        );
    }

    #[test]
    fn two_class_catalog_cannot_take_two_donors() {
        let mut rng = StdRng::seed_from_u64(42);
        let pair =
            Catalog::from_table(&[("Alpha", ["A", "B", "C"]), ("Beta", ["D", "E", "F"])]).unwrap();

        let build =
            generate_build(&pair, Some("Alpha"), Some(SubstitutionCount::One), &mut rng).unwrap();
        assert_eq!(build.subclassed_from, vec!["Beta"]);
        assert!(build.validate(&pair).is_ok());

        assert_eq!(
            generate_build(&pair, Some("Alpha"), Some(SubstitutionCount::Two), &mut rng),
            Err(EsrError::EmptyCatalog(2))
        );
    }

    #[test]
    fn same_seed_same_builds() {
        let config = GeneratorConfig::default().with_seed(99);
        let mut a = BuildGenerator::new(eso(), config.clone()).unwrap();
        let mut b = BuildGenerator::new(eso(), config).unwrap();
        assert_eq!(
            a.generate_batch(20, None).unwrap(),
            b.generate_batch(20, None).unwrap()
        );
    }

    #[test]
    fn generator_uses_config() {
        let config = GeneratorConfig::default()
            .with_seed(5)
            .with_substitutions(SubstitutionCount::One);
        let mut generator = BuildGenerator::new(eso(), config).unwrap();
        assert_eq!(generator.catalog().len(), 7);
        assert_eq!(generator.config().seed, Some(5));

        let builds = generator.generate_batch(25, Some("Templar")).unwrap();
        assert_eq!(builds.len(), 25);
        for build in &builds {
            assert_eq!(build.base_class, "Templar");
            assert_eq!(build.native_count(), 2);
        }

        let build = generator
            .generate_with(None, Some(SubstitutionCount::Two))
            .unwrap();
        assert_eq!(build.native_count(), 1);
    }

    #[test]
    fn generator_rejects_small_catalog() {
        let single = Catalog::from_table(&[("Solo", ["A", "B", "C"])]).unwrap();
        let err = BuildGenerator::new(single, GeneratorConfig::default()).unwrap_err();
        assert_eq!(err, EsrError::EmptyCatalog(1));
    }

    #[test]
    fn every_slot_gets_replaced() {
        let catalog = eso();
        let mut rng = StdRng::seed_from_u64(11);
        let mut replaced = [0usize; SKILL_LINES_PER_CLASS];

        for _ in 0..1000 {
            let build =
                generate_build(&catalog, Some("Sorcerer"), Some(SubstitutionCount::One), &mut rng)
                    .unwrap();
            for (i, count) in replaced.iter_mut().enumerate() {
                if !build.is_native(i) {
                    *count += 1;
                }
            }
        }

        // Expected ~333 per slot.
        for (slot, n) in replaced.iter().enumerate() {
            assert!((250..=420).contains(n), "slot {slot} replaced {n} times");
        }
    }

    #[test]
    fn every_other_class_donates() {
        let catalog = eso();
        let mut rng = StdRng::seed_from_u64(12);
        let mut per_donor: HashMap<String, usize> = HashMap::new();

        for _ in 0..1000 {
            let build = generate_build(&catalog, Some("Templar"), None, &mut rng).unwrap();
            for donor in &build.subclassed_from {
                *per_donor.entry(donor.clone()).or_default() += 1;
            }
        }

        assert!(!per_donor.contains_key("Templar"));
        assert_eq!(per_donor.len(), 6);
        // 1500 donor picks over 6 classes, ~250 each.
        for (class, n) in &per_donor {
            assert!((170..=330).contains(n), "{class} donated {n} times");
        }
    }

    #[test]
    fn every_donor_line_gets_picked() {
        let catalog = eso();
        let mut rng = StdRng::seed_from_u64(13);
        let mut per_line: HashMap<String, usize> = HashMap::new();

        for _ in 0..1000 {
            let build = generate_build(&catalog, Some("Warden"), None, &mut rng).unwrap();
            for slot in build.donor_slots() {
                *per_line.entry(slot.skill_line.clone()).or_default() += 1;
            }
        }

        let nightblade = catalog.find_class("Nightblade").unwrap();
        for line in nightblade.skill_lines() {
            let n = per_line.get(line).copied().unwrap_or(0);
            assert!(n > 40, "{line} picked {n} times");
        }
        // 6 donors x 3 lines, none of them Warden's.
        assert_eq!(per_line.len(), 18);
    }

    #[test]
    fn donor_order_is_not_tied_to_slot_order() {
        let catalog = eso();
        let position = |name: &str| {
            catalog
                .classes()
                .iter()
                .position(|c| c.name() == name)
                .unwrap()
        };
        let mut rng = StdRng::seed_from_u64(14);
        let mut earlier_first = 0;
        let mut later_first = 0;

        for _ in 0..1000 {
            let build =
                generate_build(&catalog, Some("Arcanist"), Some(SubstitutionCount::Two), &mut rng)
                    .unwrap();
            let donors: Vec<usize> = build.donor_slots().map(|s| position(&s.class)).collect();
            assert_eq!(donors.len(), 2);
            if donors[0] < donors[1] {
                earlier_first += 1;
            } else {
                later_first += 1;
            }
        }

        // Expected ~500 each.
        assert!(earlier_first > 400, "lower slot held earlier donor {earlier_first} times");
        assert!(later_first > 400, "lower slot held later donor {later_first} times");
    }

    #[test]
    fn empty_batch() {
        let mut generator =
            BuildGenerator::new(eso(), GeneratorConfig::default().with_seed(1)).unwrap();
        assert!(generator.generate_batch(0, None).unwrap().is_empty());
    }
}
