use crate::domain::model::{AggregatedCustomer, REQUIRED_COLUMNS};
use crate::utils::error::{EtlError, Result};
use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};

pub const DEFAULT_OUTPUT_FILE: &str = "base_compradores_final.csv";

const FIELD_DELIMITER: u8 = b';';
const DECIMAL_SEPARATOR: &str = ",";

/// Fixed two decimal places with a comma as decimal point (`150,50`).
pub fn format_money(value: f64) -> String {
    // avoid printing "-0,00"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}", value).replace('.', DECIMAL_SEPARATOR)
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Serializes customers into the `;`-delimited report, header row first.
pub fn render_report(customers: &[AggregatedCustomer]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(REQUIRED_COLUMNS)?;

    for customer in customers {
        let key = &customer.key;
        writer.write_record([
            key.cliente.as_deref().unwrap_or_default(),
            key.ativo.as_deref().unwrap_or_default(),
            format_date(key.data_nascimento).as_str(),
            key.telefone.as_deref().unwrap_or_default(),
            key.email.as_deref().unwrap_or_default(),
            format_date(customer.data_ultima_compra).as_str(),
            key.codigo_vendedor.as_deref().unwrap_or_default(),
            customer.etapas.as_str(),
            format_money(customer.valor_total).as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GroupingKey;

    fn customer(cliente: Option<&str>, valor: f64) -> AggregatedCustomer {
        AggregatedCustomer {
            key: GroupingKey {
                cliente: cliente.map(String::from),
                ativo: Some("Sim".to_string()),
                data_nascimento: NaiveDate::from_ymd_opt(1990, 1, 1),
                telefone: None,
                email: Some("j@x.com".to_string()),
                codigo_vendedor: Some("V1".to_string()),
            },
            data_ultima_compra: NaiveDate::from_ymd_opt(2024, 6, 15),
            etapas: "1,2,3".to_string(),
            valor_total: valor,
        }
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(150.5), "150,50");
        assert_eq!(format_money(0.0), "0,00");
        assert_eq!(format_money(-0.0), "0,00");
        assert_eq!(format_money(1234567.891), "1234567,89");
        assert_eq!(format_money(-2.5), "-2,50");
    }

    #[test]
    fn test_render_report_layout() {
        let bytes = render_report(&[customer(Some("João"), 150.5)]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Cliente;Ativo;Data de Nascimento;Telefone;E-mail;Data da Última Compra;Código do Vendedor;ID da(s) Etapa(s) em que o Cliente Comprou;Valor Total Comprado"
        );
        assert_eq!(lines[1], "João;Sim;1990-01-01;;j@x.com;2024-06-15;V1;1,2,3;150,50");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_render_report_null_fields_are_empty() {
        let mut c = customer(None, 0.0);
        c.key.data_nascimento = None;
        c.data_ultima_compra = None;
        c.etapas = String::new();

        let text = String::from_utf8(render_report(&[c]).unwrap()).unwrap();
        assert_eq!(text.lines().nth(1), Some(";Sim;;;j@x.com;;V1;;0,00"));
    }

    #[test]
    fn test_render_report_quotes_delimiter_in_values() {
        let c = customer(Some("Silva; João"), 1.0);

        let text = String::from_utf8(render_report(&[c]).unwrap()).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("\"Silva; João\";Sim;"));
    }

    #[test]
    fn test_render_report_empty_has_header_only() {
        let text = String::from_utf8(render_report(&[]).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
