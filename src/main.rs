use std::io::{self, ErrorKind};
use std::process::ExitCode;

use clap::Parser;

use pwgen::cli::{CliFlags, Context, prompts};
use pwgen::{Error, logger};

fn main() -> ExitCode {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let flags = CliFlags::parse();
    logger::init_cli_logger(flags.verbose);

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        // Reader went away (`pwgen | head`); nothing left to do.
        Err(Error::Io(e)) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "generation failed");
            prompts::error(&format!("ERROR: {e}"));
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(flags: CliFlags) -> pwgen::Result<()> {
    let context = Context::new(flags)?;
    context.run(io::stdout().lock())?;
    Ok(())
}
