//! `env_logger` setup for embedders that do not bring their own logger.

use env_logger::{Builder, Env};

/// `RUST_LOG`-driven builder that defaults to `info`.
pub fn builder() -> Builder {
    builder_with(Env::default())
}

fn builder_with(env: Env<'_>) -> Builder {
    Builder::from_env(env.default_filter_or("info"))
}

/// Install `env_logger`, honoring `RUST_LOG` and defaulting to `info`.
///
/// Calling this more than once is harmless.
pub fn init() {
    if let Err(err) = builder().try_init() {
        log::debug!("logger already installed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn defaults_to_info_without_a_filter() {
        let env = Env::new().filter("CONVERSIFY_TEST_UNSET_LOG");
        assert_eq!(builder_with(env).build().filter(), LevelFilter::Info);
    }
}
