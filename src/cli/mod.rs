mod context;
mod flags;
mod help;
mod parse;
mod prompts;
mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Exit code for bad arguments and failed output.
const EXIT_FAILURE: i32 = 2;

/// Run the command line. Never returns on failure.
pub fn run(args: Vec<String>) {
    let result = Context::new(&args).and_then(|mut ctx| ctx.run());
    if let Err(e) = result {
        prompts::error(&e.to_string());
        std::process::exit(EXIT_FAILURE);
    }
}
