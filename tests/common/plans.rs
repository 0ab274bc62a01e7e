//! Plan fixtures

use planbridge::{Location, TestIdentifier, TestPlan};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Suite → Outer → { testOuter, Outer.Inner → testInner }
///
/// Mirrors a class with one test method and a nested class with another.
pub fn nested_suite() -> TestPlan {
    TestPlan::from_identifiers([
        TestIdentifier::container("[engine:jupiter]", "Suite"),
        TestIdentifier::container("[engine:jupiter]/[class:Outer]", "Outer")
            .with_parent("[engine:jupiter]")
            .with_location(Location::class("com.example.OuterTestCase")),
        TestIdentifier::test("[engine:jupiter]/[class:Outer]/[method:testOuter()]", "Outer#testOuter")
            .with_parent("[engine:jupiter]/[class:Outer]")
            .with_location(Location::method("com.example.OuterTestCase", "testOuter")),
        TestIdentifier::container("[engine:jupiter]/[class:Outer]/[nested-class:Inner]", "Outer.Inner")
            .with_parent("[engine:jupiter]/[class:Outer]")
            .with_location(Location::class("com.example.OuterTestCase$InnerTestCase")),
        TestIdentifier::test(
            "[engine:jupiter]/[class:Outer]/[nested-class:Inner]/[method:testInner()]",
            "Inner#testInner",
        )
        .with_parent("[engine:jupiter]/[class:Outer]/[nested-class:Inner]")
        .with_location(Location::method("com.example.OuterTestCase$InnerTestCase", "testInner")),
    ])
    .expect("nested suite fixture is a valid forest")
}

/// A single chain `c0 → c1 → … → c<depth-1>` ending in one test, `leaf`
pub fn chain_plan(depth: usize) -> TestPlan {
    let mut plan = TestPlan::new();
    for level in 0..depth {
        let mut identifier = TestIdentifier::container(format!("c{}", level), format!("Level{}", level));
        if level > 0 {
            identifier = identifier.with_parent(format!("c{}", level - 1));
        }
        plan.add(identifier).expect("each level follows its parent");
    }
    plan.add(TestIdentifier::test("leaf", "bottom").with_parent(format!("c{}", depth - 1)))
        .expect("the deepest level exists");
    plan
}

/// Shape parameters for [`random_plan`]
#[derive(Debug, Clone)]
pub struct RandomPlanConfig {
    pub size: usize,
    /// Probability that a node after the first starts a new root
    pub root_probability: f64,
    /// Probability that a node is a test rather than a container
    pub test_probability: f64,
}

impl Default for RandomPlanConfig {
    fn default() -> Self {
        Self {
            size: 60,
            root_probability: 0.05,
            test_probability: 0.5,
        }
    }
}

/// A random forest, deterministic for a given seed
///
/// Node `n<i>` picks its parent among `n0..n<i-1>`, so identifiers are
/// always added after their parent.
pub fn random_plan(seed: u64, config: &RandomPlanConfig) -> TestPlan {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut plan = TestPlan::new();

    for i in 0..config.size {
        let id = format!("n{}", i);
        let mut identifier = if rng.gen_bool(config.test_probability) {
            TestIdentifier::test(id, format!("test {}", i))
        } else {
            TestIdentifier::container(id, format!("Container{}", i))
        };

        if i > 0 && !rng.gen_bool(config.root_probability) {
            identifier = identifier.with_parent(format!("n{}", rng.gen_range(0..i)));
        }

        identifier = match rng.gen_range(0..4) {
            0 => identifier,
            1 => identifier.with_location(Location::class(format!("com.example.C{}", i % 7))),
            2 => identifier.with_location(Location::method(format!("com.example.C{}", i % 7), format!("m{}", i))),
            _ => identifier.with_location(Location::method_with_params(
                format!("com.example.C{}", i % 7),
                format!("m{}", i),
                ["int", "java.lang.String"],
            )),
        };

        plan.add(identifier).expect("parents precede children");
    }

    plan
}
