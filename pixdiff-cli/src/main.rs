use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let code = pixdiff_cli::run(std::env::args_os(), &mut io::stdout().lock());
    ExitCode::from(code)
}
