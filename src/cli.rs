use clap::Parser;
use pkg_depgraph::config::CliOverrides;
use pkg_depgraph::shared::error::ExitCode;
use std::path::PathBuf;
use std::process;

/// Graph the dependencies between installed pkg(8) packages
///
/// Prints Graphviz dot code to standard output, or with --roots the
/// roots of the forest of installed packages, one per line.
#[derive(Parser, Debug)]
#[command(name = "pkg-depgraph")]
#[command(version)]
#[command(about = "pkg(8) graphing tool", long_about = None)]
pub struct Args {
    /// Print only the root packages (nothing depends on them), one per line
    #[arg(short, long)]
    pub roots: bool,

    /// Render the transitive closure as reported by pkg, without pruning implied edges
    #[arg(long)]
    pub raw: bool,

    /// Path to the pkg binary (default: /usr/sbin/pkg)
    #[arg(long = "pkg", value_name = "PATH")]
    pub pkg_path: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (default: ./pkg-depgraph.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses the process arguments, exiting on `--help`, `--version` or invalid input
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_else(|e| {
            let _ = e.print();
            process::exit(exit_code_for(&e).as_i32())
        })
    }

    /// Flags that take precedence over the config file
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            pkg_path: self.pkg_path.clone(),
            roots: self.roots,
            raw: self.raw,
            verbose: self.verbose,
            output: self.output.clone(),
        }
    }
}

/// `--help` and `--version` are reported through clap errors too, on stdout
fn exit_code_for(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
