use sqlx::SqlitePool;

/// SQL bindable value for dynamically built statements.
#[derive(Debug)]
pub enum SqlValue {
    Text(String),
    I64(i64),
    Null,
}

/// A fully built UPDATE statement plus its bind values, applied as a single
/// atomic statement.
#[derive(Debug)]
pub struct SqlUpdate {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// Collects the present fields of a partial update into one UPDATE
/// statement. Callers decide per field whether it may be set at all, so
/// authorization-filtered fields are simply never added.
#[derive(Debug)]
pub struct UpdateBuilder {
    table: &'static str,
    columns: Vec<&'static str>,
    values: Vec<SqlValue>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn set(&mut self, column: &'static str, value: SqlValue) {
        self.columns.push(column);
        self.values.push(value);
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns None when no field was set; absent fields are a no-op.
    pub fn build(mut self, id_column: &str, id_value: i64) -> Option<SqlUpdate> {
        if self.is_empty() {
            return None;
        }

        let set_clause = self
            .columns
            .iter()
            .map(|c| format!("{} = ?", c))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?",
            self.table, set_clause, id_column
        );

        self.values.push(SqlValue::I64(id_value));

        Some(SqlUpdate {
            sql,
            values: self.values,
        })
    }
}

pub async fn execute_update(pool: &SqlitePool, update: SqlUpdate) -> Result<u64, sqlx::Error> {
    let mut query = sqlx::query(&update.sql);

    for value in update.values {
        query = match value {
            SqlValue::Text(v) => query.bind(v),
            SqlValue::I64(v) => query.bind(v),
            SqlValue::Null => query.bind(None::<String>),
        };
    }

    let result = query.execute(pool).await?;
    Ok(result.rows_affected())
}
