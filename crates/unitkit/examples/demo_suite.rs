//! A small test program driven by unitkit
//!
//! Run with: cargo run -p unitkit --example demo_suite
//! Try `UNITKIT_FORMAT=json` or `UNITKIT_COLOR=never` to change the report.

use std::cell::Cell;
use std::rc::Rc;
use unitkit::config::ConfigLoader;
use unitkit::{init_tracing, three_way, Suite};

#[derive(Debug)]
struct Version {
    major: u32,
    minor: u32,
}

fn compare_versions(a: &Version, b: &Version) -> i32 {
    if a.major != b.major {
        a.major as i32 - b.major as i32
    } else {
        a.minor as i32 - b.minor as i32
    }
}

fn main() {
    init_tracing();

    let cwd = std::env::current_dir().unwrap_or_default();
    let config = match ConfigLoader::new().load_from_directory(&cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("unitkit: {}", e);
            std::process::exit(2);
        }
    };

    let mut suite = Suite::from_config(&config);
    let setups = Rc::new(Cell::new(0));
    let counter = setups.clone();
    suite.set_before_func(move || counter.set(counter.get() + 1));

    suite.start_suite("demo");

    suite.run_test(
        |s| {
            s.test_description("integer ordering");
            if s.assert_less(1, 2) & s.assert_greater_equal(2, 2) {
                s.test_passed("integer ordering");
            } else {
                s.test_failed("integer ordering");
            }
        },
        "integers",
    );

    suite.run_test(
        |s| {
            s.test_description("version ordering");
            let cmp = three_way(compare_versions);
            let old = Version { major: 1, minor: 4 };
            let new = Version { major: 1, minor: 10 };
            if s.assert_less_by(&old, &new, &cmp) && s.assert_not_equal_by(&old, &new, &cmp) {
                s.test_passed("version ordering");
            } else {
                s.test_failed("version ordering");
            }
        },
        "versions",
    );

    suite.run_test(
        |s| {
            s.test_description("deliberate failure");
            if s.assert_equal(2, 3) {
                s.test_passed("deliberate failure");
            } else {
                s.test_failed("deliberate failure");
            }
        },
        "failing",
    );

    let summary = suite.end_suite();
    tracing::info!(setups = setups.get(), %summary, "demo finished");
    std::process::exit(summary.exit_code());
}
