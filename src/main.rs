use expset_core::{Element, ExponentSet};
use stress_test::{stress_test_algebra, stress_test_compaction, stress_test_scaling};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    walkthrough();

    // Test 1: algebra with small scale
    let stats = stress_test_algebra(100, 200, 64);
    stats.print();

    // Test 2: algebra with a wide universe
    let stats = stress_test_algebra(1000, 500, 10_000);
    stats.print();

    // Test 3: compaction of shallow nesting
    let stats = stress_test_compaction(100, 200, 2);
    stats.print();

    // Test 4: scaling analysis
    stress_test_scaling(20, 5);

    println!("\n✓ All stress tests completed successfully!");
}

/// Tour of the operations on small, readable sets.
fn walkthrough() {
    let a: ExponentSet<&str> = ExponentSet::from_sequence(["a", "a", "a", "b", "d"]);
    let b: ExponentSet<&str> = ExponentSet::from_sequence(["a", "b", "b", "b"]);

    info!(?a, ?b, "operands");
    info!(result = ?a.union(&b), "union");
    info!(result = ?a.subtract(&b), "subtract");
    info!(result = ?a.intersect(&b), "intersect");
    info!(result = ?a.raise(2), "raise(2)");

    let inner: ExponentSet<&str> = ExponentSet::from_mapping([("b", 2), ("c", 1)]);
    let mut nested: ExponentSet<&str> = ExponentSet::from_mapping([("a", 3), ("b", 2)]);
    nested.add_n(Element::nested(inner), 2);
    info!(compactable = nested.compactable(), result = ?nested.compact(), "compact");

    let x: ExponentSet<&str> = ExponentSet::from_mapping([("a", 4), ("b", 4)]);
    let y: ExponentSet<&str> = ExponentSet::from_mapping([("a", 2), ("b", 3)]);
    let z: ExponentSet<&str> = ExponentSet::from_mapping([("a", 2), ("c", 3)]);
    info!(
        proper_superset = x.proper_superset(&y),
        mismatched = ?y.compare_with(&z, |p, q| p > q),
        "ordering"
    );
}
