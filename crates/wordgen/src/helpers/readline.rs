use rustyline::{error::ReadlineError, history::MemHistory, Editor};

use crate::{Error, Result};

pub(crate) fn basic_editor() -> Result<Editor<(), MemHistory>> {
    Ok(Editor::<(), MemHistory>::with_history(
        Default::default(),
        MemHistory::new(),
    )?)
}

/// Read a line that may be empty.
///
/// End of input and interrupts are reported as
/// [Error::InputExhausted].
pub fn read_line(prompt: &str) -> Result<String> {
    let mut rl = basic_editor()?;
    prompt_result(rl.readline(prompt))
}

fn prompt_result(result: rustyline::Result<String>) -> Result<String> {
    match result {
        Ok(line) => Ok(line),
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
            Err(Error::InputExhausted)
        }
        Err(e) => Err(Error::Readline(e)),
    }
}
