use std::io::{self, Write as _};

use anyhow::Context as _;
use serde::Serialize;

/// Writes `value` to stdout as pretty-printed JSON followed by a newline.
pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
{
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("Failed to write JSON to stdout")?;
    writeln!(stdout).context("Failed to write newline after JSON to stdout")?;
    Ok(())
}
