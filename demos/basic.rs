use std::process::ExitCode;

use slip::{ExpectationError, expect, suite};
use tracing_subscriber::EnvFilter;

fn fib(n: u32) -> u64 {
    (0..n).fold((0, 1), |(a, b), _| (b, a + b)).0
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tree = suite(|s| {
        s.describe("fib", |s| {
            s.it("starts at zero", || expect(fib(0)).to_equal(0u64));
            s.it_each([(1, 1u64), (2, 1), (10, 55), (20, 6765)], "matches", |(n, expected)| {
                expect(fib(n)).to_equal(expected)
            });
            s.it("is off by one", || expect(fib(5)).to_equal(8u64));
        });

        s.describe("floats", |s| {
            s.it("are close enough", || -> Result<(), ExpectationError> {
                expect(0.1 + 0.2).to_be_precisely(0.3)?;
                expect(std::f64::consts::PI).to_be_precisely_to(3.14159, 5)
            });
            s.it_skip("are exact", || expect(0.1 + 0.2).to_equal(0.3));
        });

        // Registration errors are logged, the group keeps what was registered so far.
        s.describe("fixtures", |s| -> Result<(), String> {
            s.it("loaded", || ());
            Err(String::from("fixture directory missing"))
        });

        s.todo("big numbers");
    });

    tree.run().exit_code()
}
