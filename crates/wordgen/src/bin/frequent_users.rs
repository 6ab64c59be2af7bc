use wordgen::cli;
use wordgen_cli_helpers::messages::fail;

fn main() {
    cli::init_tracing();

    if let Err(e) = cli::frequent_users::run() {
        tracing::debug!(error = ?e, "frequent_users::main");
        fail(e.to_string());
        std::process::exit(1);
    }
}
