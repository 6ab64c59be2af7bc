use std::io::ErrorKind;
use wordgen::{cli, Error};
use wordgen_cli_helpers::messages::fail;

fn main() {
    cli::init_tracing();

    match cli::word_gen::run() {
        Ok(_) => {}
        // Downstream consumer such as `head` closed the pipe
        Err(Error::Core(wordgen_core::Error::Io(e)) | Error::Io(e))
            if e.kind() == ErrorKind::BrokenPipe => {}
        Err(e) => {
            tracing::debug!(error = ?e, "word_gen::main");
            fail(e.to_string());
            let _ = kdam::term::show_cursor();
            std::process::exit(1);
        }
    }
}
