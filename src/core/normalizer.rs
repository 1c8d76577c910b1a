use crate::domain::model::{CustomerRecord, REQUIRED_COLUMNS};
use crate::utils::error::{EtlError, Result};
use crate::utils::parse::{parse_date, parse_number};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

/// Raw projection of one export line. Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Cliente")]
    cliente: Option<String>,
    #[serde(rename = "Ativo")]
    ativo: Option<String>,
    #[serde(rename = "Data de Nascimento")]
    data_nascimento: Option<String>,
    #[serde(rename = "Telefone")]
    telefone: Option<String>,
    #[serde(rename = "E-mail")]
    email: Option<String>,
    #[serde(rename = "Data da Última Compra")]
    data_ultima_compra: Option<String>,
    #[serde(rename = "Código do Vendedor")]
    codigo_vendedor: Option<String>,
    #[serde(rename = "ID da(s) Etapa(s) em que o Cliente Comprou")]
    etapas: Option<String>,
    #[serde(rename = "Valor Total Comprado")]
    valor_total: Option<String>,
}

impl From<RawRow> for CustomerRecord {
    fn from(row: RawRow) -> Self {
        CustomerRecord {
            cliente: non_empty(row.cliente),
            ativo: non_empty(row.ativo),
            data_nascimento: row.data_nascimento.as_deref().and_then(parse_date),
            telefone: non_empty(row.telefone),
            email: non_empty(row.email),
            data_ultima_compra: row.data_ultima_compra.as_deref().and_then(parse_date),
            codigo_vendedor: non_empty(row.codigo_vendedor),
            etapas: non_empty(row.etapas),
            valor_total: row.valor_total.as_deref().map(parse_number).unwrap_or(0.0),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Names of required columns absent from `headers`, in report order.
pub fn missing_columns(headers: &StringRecord) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect()
}

/// Parses one comma-delimited export into customer records, keeping row order.
///
/// `source` only names the input in logs and errors. Lines with the wrong
/// number of fields are skipped, unparsable dates become `None` and an
/// unparsable purchase value becomes `0.0`. A missing required column fails
/// the whole file with [`EtlError::SchemaError`].
pub fn normalize(source: &str, data: &[u8]) -> Result<Vec<CustomerRecord>> {
    tracing::info!("📖 Reading Metabase export: {}", source);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(EtlError::SchemaError {
            file: source.to_string(),
            missing,
        });
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.deserialize::<RawRow>() {
        match row {
            Ok(row) => records.push(CustomerRecord::from(row)),
            Err(_) => skipped += 1,
        }
    }

    tracing::debug!(
        "{}: {} records normalized, {} malformed lines skipped",
        source,
        records.len(),
        skipped
    );

    Ok(records)
}
