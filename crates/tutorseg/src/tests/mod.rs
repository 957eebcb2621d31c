
#[cfg(not(miri))]
pub(crate) fn quickcheck_tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

#[cfg(miri)]
pub(crate) fn quickcheck_tests() -> u64 {
    10
}
