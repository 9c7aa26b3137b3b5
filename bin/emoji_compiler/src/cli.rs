use std::path::PathBuf;

/// Compiles the Unicode emoji annotation files into emoji picker data
#[derive(Debug, argh::FromArgs)]
pub struct CliOptions {
    /// print version information and exit
    #[argh(switch, short = 'V')]
    pub version: bool,

    /// logging level (0 = Info, 1 = Debug, 2 = Trace, 3 = Trace including per-line reconciliation) [env EMOJI_VERBOSE]
    #[argh(option, short = 'v')]
    pub verbose: Option<u8>,

    /// configuration file (TOML or JSON)
    #[argh(option, short = 'c')]
    pub config: Option<PathBuf>,

    /// grouped source file, overrides `sources.grouped`
    #[argh(option)]
    pub grouped: Option<PathBuf>,

    /// ordered source file, overrides `sources.ordered`
    #[argh(option)]
    pub ordered: Option<PathBuf>,

    /// output directory, overrides `output.dir`
    #[argh(option, short = 'o')]
    pub out_dir: Option<PathBuf>,

    /// compile and validate without writing anything
    #[argh(switch)]
    pub check: bool,
}

impl CliOptions {
    pub fn parse() -> Result<Self, anyhow::Error> {
        let mut args: CliOptions = argh::from_env();

        if args.version {
            println!("emoji_compiler {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }

        if args.verbose.is_none() {
            if let Ok(verbose) = std::env::var("EMOJI_VERBOSE") {
                args.verbose = verbose.parse().ok();
            }
        }

        Ok(args)
    }
}
