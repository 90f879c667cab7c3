/// Actual-vs-target comparison shared by the day, week and month views.
///
/// `favorable` is a strict comparison (actual > expected); it only drives
/// the output color, never the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diff {
    pub actual: i64,
    pub expected: i64,
    pub delta: i64,
    pub favorable: bool,
}

pub fn diff(actual: i64, expected: i64) -> Diff {
    Diff {
        actual,
        expected,
        delta: actual - expected,
        favorable: actual > expected,
    }
}
