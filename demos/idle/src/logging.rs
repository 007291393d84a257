use env_logger::{Builder, Env};

/// Filter used when `RUST_LOG` is unset.
///
/// Quiet runs keep the demo and harness at info but hold the per-bot crate at
/// warn, since it logs one line per spawn.  `--verbose` opens every bot crate
/// up to debug, which includes wave starts and timer deliveries.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,idle=debug,bot_sim=debug,bot_behavior=debug,bot_output=debug"
    } else {
        "info,bot_behavior=warn"
    }
}

/// Install the global logger.  `RUST_LOG` overrides the default filter.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None).format_target(verbose);

    // Already installed.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_filter_holds_back_spawn_lines() {
        assert!(default_filter(false).contains("bot_behavior=warn"));
        assert!(default_filter(true).contains("bot_behavior=debug"));
    }

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
