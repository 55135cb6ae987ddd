use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Drain a line-delimited streaming response, echoing each text chunk to
/// stdout as it arrives and accumulating the full output.
///
/// `parse_line` maps one wire line to an optional text chunk; `Ok(None)`
/// means the line carried nothing printable (keep-alives, the final `done`
/// record). A trailing newline is written once the stream ends so partial
/// output doesn't run into whatever stdout prints next.
pub fn read_stream_to_string<R, F>(reader: R, mut parse_line: F) -> Result<String>
where
    R: BufRead,
    F: FnMut(&str) -> Result<Option<String>>,
{
    let mut out = String::new();
    let mut stdout = io::stdout();
    let mut printed = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(chunk) = parse_line(line)? {
            out.push_str(&chunk);
            print!("{chunk}");
            stdout.flush()?;
            printed = true;
        }
    }

    if printed {
        println!();
    }

    Ok(out)
}
