//! Plain text report, one record per line in the stable report wording.

use crate::clex::analysis::Analysis;
use crate::clex::formats::{FormatError, Formatter};
use std::fmt::Write;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, analysis: &Analysis) -> Result<String, FormatError> {
        let mut out = String::new();
        for record in analysis.records().iter().filter(|r| !r.is_marker()) {
            writeln!(out, "{record}").map_err(|e| FormatError::SerializationError(e.to_string()))?;
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "One line per token and diagnostic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clex::analysis::Analyzer;

    #[test]
    fn test_text_report() {
        let analysis = Analyzer::default().analyze("if (a) {\nb = a\n").unwrap();
        let text = TextFormatter.serialize(&analysis).unwrap();
        assert_eq!(
            text,
            "LINHA: 1, TOKEN: 'if', TIPO: PALAVRACHAVE, CODIGO: 1\n\
             LINHA: 1, TOKEN: '(', TIPO: DELIMITADOR, CODIGO: 4\n\
             LINHA: 1, TOKEN: 'a', TIPO: IDENTIFICADOR, CODIGO: 2\n\
             LINHA: 1, TOKEN: ')', TIPO: DELIMITADOR, CODIGO: 4\n\
             LINHA: 1, TOKEN: '{', TIPO: DELIMITADOR, CODIGO: 4\n\
             LINHA: 2, TOKEN: 'b', TIPO: IDENTIFICADOR, CODIGO: 2\n\
             LINHA: 2, TOKEN: '=', TIPO: OPERADOR, CODIGO: 3\n\
             LINHA: 2, TOKEN: 'a', TIPO: IDENTIFICADOR, CODIGO: 2\n\
             Aviso: A linha 2 pode estar faltando um ponto e virgula.\n\
             Erro: Delimitador de abertura '{' na linha 1 não foi fechado.\n\
             Identificador 'a' repetido. Ultima ocorrencia na linha 2.\n"
        );
    }
}
