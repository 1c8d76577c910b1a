use crate::utils::error::{EtlError, Result};
use std::io::{BufRead, Write};

const PROMPT: &str = "Arquivo CSV (ou Enter para finalizar): ";

/// Asks for one CSV path per line until a blank line or end of input.
///
/// Entries are trimmed. Returns [`EtlError::NoInputFiles`] when nothing was
/// entered.
pub fn collect_input_files<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
) -> Result<Vec<String>> {
    writeln!(output, "Digite o caminho (ou nome) de cada arquivo CSV que será lido.")?;
    writeln!(output, "Exemplos:")?;
    writeln!(output, "  janeiro a abril.csv")?;
    writeln!(output, "  /Users/fulano/Downloads/maio a agosto.csv")?;
    writeln!(output, "Quando terminar, apenas pressione Enter em branco.\n")?;

    let mut files = Vec::new();
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let path = line.trim();
        if path.is_empty() {
            break;
        }
        files.push(path.to_string());
    }

    if files.is_empty() {
        return Err(EtlError::NoInputFiles);
    }

    tracing::debug!("Collected {} input files", files.len());
    Ok(files)
}
