use chrono::NaiveDate;

pub const COL_CLIENTE: &str = "Cliente";
pub const COL_ATIVO: &str = "Ativo";
pub const COL_DATA_NASCIMENTO: &str = "Data de Nascimento";
pub const COL_TELEFONE: &str = "Telefone";
pub const COL_EMAIL: &str = "E-mail";
pub const COL_DATA_ULTIMA_COMPRA: &str = "Data da Última Compra";
pub const COL_CODIGO_VENDEDOR: &str = "Código do Vendedor";
pub const COL_ETAPAS: &str = "ID da(s) Etapa(s) em que o Cliente Comprou";
pub const COL_VALOR_TOTAL: &str = "Valor Total Comprado";

/// Source columns every input file must carry, in report order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    COL_CLIENTE,
    COL_ATIVO,
    COL_DATA_NASCIMENTO,
    COL_TELEFONE,
    COL_EMAIL,
    COL_DATA_ULTIMA_COMPRA,
    COL_CODIGO_VENDEDOR,
    COL_ETAPAS,
    COL_VALOR_TOTAL,
];

/// One normalized input row. Empty text cells are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerRecord {
    pub cliente: Option<String>,
    pub ativo: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub data_ultima_compra: Option<NaiveDate>,
    pub codigo_vendedor: Option<String>,
    pub etapas: Option<String>,
    pub valor_total: f64,
}

/// Identity used to merge duplicate customer rows. `None` compares equal to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupingKey {
    pub cliente: Option<String>,
    pub ativo: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub codigo_vendedor: Option<String>,
}

impl CustomerRecord {
    pub fn grouping_key(&self) -> GroupingKey {
        GroupingKey {
            cliente: self.cliente.clone(),
            ativo: self.ativo.clone(),
            data_nascimento: self.data_nascimento,
            telefone: self.telefone.clone(),
            email: self.email.clone(),
            codigo_vendedor: self.codigo_vendedor.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedCustomer {
    pub key: GroupingKey,
    pub data_ultima_compra: Option<NaiveDate>,
    pub etapas: String,
    pub valor_total: f64,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub customers: Vec<AggregatedCustomer>,
    pub input_records: usize,
}
