/// Logger setup. Logs go to stderr so they never mix with the tree on stdout.
use log::LevelFilter;

/// Map the `-v` count to a level filter.
#[must_use]
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the global logger. The level comes from the command line only.
pub fn init(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, LevelFilter::Warn)]
    #[case(1, LevelFilter::Info)]
    #[case(2, LevelFilter::Debug)]
    #[case(9, LevelFilter::Debug)]
    fn test_level_for(#[case] verbose: u8, #[case] expected: LevelFilter) {
        assert_eq!(level_for(verbose), expected);
    }
}
