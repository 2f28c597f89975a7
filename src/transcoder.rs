use crate::error::TranscodeError;
use std::io::Write;
use std::path::Path;

/// Number of byte literals emitted per output line.
pub const BYTES_PER_LINE: usize = 12;

/// Written immediately before every `BYTES_PER_LINE`th literal, starting with the first.
pub const LINE_PREFIX: &str = "\n    ";

/// Writes `bytes` as `0xNN, ` literals, breaking the line before every twelfth one.
///
/// Nothing else is emitted: no declaration, no closing brace, no trailing newline. An empty
/// slice writes nothing at all.
pub fn write_literals<W: Write>(bytes: &[u8], out: &mut W) -> std::io::Result<()> {
    for (i, byte) in bytes.iter().enumerate() {
        if i % BYTES_PER_LINE == 0 {
            out.write_all(LINE_PREFIX.as_bytes())?;
        }
        write!(out, "0x{byte:02x}, ")?;
    }
    Ok(())
}

/// Reads all of `input` and writes its literal rendering to `output`, replacing any
/// existing file.
pub fn convert_file(input: &Path, output: &Path) -> Result<(), TranscodeError> {
    let data = std::fs::read(input).map_err(TranscodeError::read(input))?;

    let f = std::fs::File::create(output).map_err(TranscodeError::write(output))?;
    let mut writer = std::io::BufWriter::new(f);

    write_literals(&data, &mut writer).map_err(TranscodeError::write(output))?;
    writer.flush().map_err(TranscodeError::write(output))?;

    Ok(())
}
