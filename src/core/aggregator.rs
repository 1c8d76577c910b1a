use crate::core::stages::merge_stages;
use crate::domain::model::{AggregatedCustomer, CustomerRecord, GroupingKey};
use crate::utils::parse::round_cents;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Collapses records sharing a [`GroupingKey`] into one customer each.
///
/// Within a group the most recent purchase date wins, purchase values are
/// summed and rounded to cents, and stage lists are merged in input order.
/// The result is sorted by customer name; equal names keep the order in which
/// their groups first appeared, and customers without a name come last.
pub fn aggregate(records: &[CustomerRecord]) -> Vec<AggregatedCustomer> {
    let mut index: HashMap<GroupingKey, usize> = HashMap::new();
    let mut groups: Vec<(GroupingKey, Vec<&CustomerRecord>)> = Vec::new();

    for record in records {
        let key = record.grouping_key();
        match index.get(&key) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    tracing::debug!(
        "Grouped {} records into {} customers",
        records.len(),
        groups.len()
    );

    let mut customers: Vec<AggregatedCustomer> = groups
        .into_iter()
        .map(|(key, members)| reduce_group(key, &members))
        .collect();

    customers.sort_by(|a, b| compare_cliente(&a.key.cliente, &b.key.cliente));
    customers
}

fn reduce_group(key: GroupingKey, members: &[&CustomerRecord]) -> AggregatedCustomer {
    let data_ultima_compra = members.iter().filter_map(|r| r.data_ultima_compra).max();
    let valor_total = round_cents(members.iter().map(|r| r.valor_total).sum());
    let etapas = merge_stages(members.iter().map(|r| r.etapas.as_deref()));

    AggregatedCustomer {
        key,
        data_ultima_compra,
        etapas,
        valor_total,
    }
}

fn compare_cliente(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(
        cliente: &str,
        ultima: Option<(i32, u32, u32)>,
        etapas: &str,
        valor: f64,
    ) -> CustomerRecord {
        CustomerRecord {
            cliente: Some(cliente.to_string()),
            ativo: Some("Sim".to_string()),
            data_nascimento: NaiveDate::from_ymd_opt(1990, 1, 1),
            telefone: Some("123".to_string()),
            email: Some(format!("{}@x.com", cliente.to_lowercase())),
            data_ultima_compra: ultima.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            codigo_vendedor: Some("V1".to_string()),
            etapas: if etapas.is_empty() { None } else { Some(etapas.to_string()) },
            valor_total: valor,
        }
    }

    #[test]
    fn test_aggregate_merges_same_key() {
        let records = vec![
            record("João", Some((2024, 5, 1)), "1,2", 100.0),
            record("João", Some((2024, 6, 15)), "2,3", 50.5),
        ];

        let customers = aggregate(&records);

        assert_eq!(customers.len(), 1);
        let c = &customers[0];
        assert_eq!(c.key.cliente.as_deref(), Some("João"));
        assert_eq!(c.data_ultima_compra, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(c.valor_total, 150.5);
        assert_eq!(c.etapas, "1,2,3");
    }

    #[test]
    fn test_aggregate_one_row_per_distinct_key() {
        let mut other_vendor = record("Ana", None, "1", 1.0);
        other_vendor.codigo_vendedor = Some("V2".to_string());
        let mut no_birth = record("Ana", None, "1", 1.0);
        no_birth.data_nascimento = None;
        let mut no_birth_again = no_birth.clone();
        no_birth_again.valor_total = 2.0;

        let records = vec![
            record("Ana", None, "1", 1.0),
            other_vendor,
            no_birth,
            record("Ana", None, "2", 1.0),
            no_birth_again,
        ];

        let customers = aggregate(&records);

        assert_eq!(customers.len(), 3);
        let totals: Vec<f64> = customers.iter().map(|c| c.valor_total).collect();
        assert_eq!(totals, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_aggregate_all_null_dates_stay_null() {
        let records = vec![record("Bia", None, "", 0.0), record("Bia", None, "", 0.0)];

        let customers = aggregate(&records);

        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].data_ultima_compra, None);
        assert_eq!(customers[0].etapas, "");
    }

    #[test]
    fn test_aggregate_ignores_null_dates_in_max() {
        let records = vec![
            record("Bia", Some((2023, 1, 2)), "", 0.0),
            record("Bia", None, "", 0.0),
        ];

        let customers = aggregate(&records);
        assert_eq!(customers[0].data_ultima_compra, NaiveDate::from_ymd_opt(2023, 1, 2));
    }

    #[test]
    fn test_aggregate_rounds_sum_to_cents() {
        let records = vec![
            record("Caio", None, "", 0.1),
            record("Caio", None, "", 0.2),
            record("Caio", None, "", 10.004),
        ];

        let customers = aggregate(&records);
        assert_eq!(customers[0].valor_total, 10.3);
    }

    #[test]
    fn test_aggregate_sorts_by_cliente_with_nulls_last() {
        let mut anonymous = record("x", None, "", 0.0);
        anonymous.cliente = None;

        let records = vec![
            record("Carla", None, "", 0.0),
            anonymous,
            record("Ana", None, "", 0.0),
            record("Bruno", None, "", 0.0),
        ];

        let customers = aggregate(&records);

        let names: Vec<_> = customers.iter().map(|c| c.key.cliente.as_deref()).collect();
        assert_eq!(names, vec![Some("Ana"), Some("Bruno"), Some("Carla"), None]);
    }

    #[test]
    fn test_aggregate_stable_for_equal_names() {
        let mut second = record("Ana", None, "", 0.0);
        second.telefone = Some("999".to_string());

        let records = vec![record("Ana", None, "", 0.0), second];

        let customers = aggregate(&records);
        let phones: Vec<_> = customers.iter().map(|c| c.key.telefone.as_deref()).collect();
        assert_eq!(phones, vec![Some("123"), Some("999")]);
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }
}
