use std::sync::LazyLock;

use regex::Regex;

static PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Example matches:
    //   tests\engine\render.rs:4:9
    //   tests/engine/render.rs:4:9
    Regex::new(r"(?P<path>tests[^\n:]+\.rs):(?P<line>\d+):(?P<col>\d+)").unwrap()
});

/// Replace panic locations with `<path>:<line>:<col>` so output does not depend on line numbers.
pub fn sanitize_locations(input: &str) -> String {
    PATH_RE
        .replace_all(input, |caps: &regex::Captures| {
            format!("{}:<line>:<col>", caps["path"].replace('\\', "/"))
        })
        .to_string()
}
