use log::Dispatch;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::Subscriber,
};

fn create_filter(verbose: Option<u8>) -> anyhow::Result<EnvFilter> {
    #[allow(clippy::wildcard_in_or_patterns)]
    let level_filter = match verbose {
        None | Some(0) => LevelFilter::INFO,
        Some(1) => LevelFilter::DEBUG,
        Some(2) | _ => LevelFilter::TRACE,
    };

    let mut filter = EnvFilter::from_default_env().add_directive(level_filter.into());

    // per-line tracing of the reconciler only at -v 3 and above
    if level_filter == LevelFilter::TRACE && verbose < Some(3) {
        filter = filter.add_directive("emoji_data::order=debug".parse()?);
    }

    Ok(filter)
}

pub fn generate(verbose: Option<u8>) -> anyhow::Result<Dispatch> {
    let filter = create_filter(verbose)?;

    Ok(Dispatch::new(
        Subscriber::builder().with_env_filter(filter).with_writer(std::io::stderr).finish(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use log::Level;

    fn enabled_for(verbose: Option<u8>, target_order: bool, level: Level) -> bool {
        let dispatch = generate(verbose).unwrap();

        log::dispatcher::with_default(&dispatch, || {
            if target_order {
                if level == Level::TRACE {
                    log::enabled!(target: "emoji_data::order", Level::TRACE)
                } else if level == Level::DEBUG {
                    log::enabled!(target: "emoji_data::order", Level::DEBUG)
                } else {
                    log::enabled!(target: "emoji_data::order", Level::INFO)
                }
            } else if level == Level::TRACE {
                log::enabled!(target: "emoji_data::group", Level::TRACE)
            } else if level == Level::DEBUG {
                log::enabled!(target: "emoji_data::group", Level::DEBUG)
            } else {
                log::enabled!(target: "emoji_data::group", Level::INFO)
            }
        })
    }

    #[test]
    fn test_default_verbosity_is_info() {
        assert!(enabled_for(None, true, Level::INFO));
        assert!(!enabled_for(None, true, Level::DEBUG));
        assert!(!enabled_for(Some(0), false, Level::DEBUG));
    }

    #[test]
    fn test_debug_verbosity() {
        assert!(enabled_for(Some(1), true, Level::DEBUG));
        assert!(!enabled_for(Some(1), true, Level::TRACE));
    }

    #[test]
    fn test_reconciler_trace_capped_below_3() {
        assert!(enabled_for(Some(2), false, Level::TRACE));
        assert!(enabled_for(Some(2), true, Level::DEBUG));
        assert!(!enabled_for(Some(2), true, Level::TRACE));

        assert!(enabled_for(Some(3), true, Level::TRACE));
    }
}
