// accessgen-core/src/domain/etl/transform.rs

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::etl::identifier::{quote_ident, validate_identifier};
use crate::ports::connector::ColumnSchema;

/// Single-column transform applied between extract and load.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// `upper(column)`
    UppercaseColumn { column: String },
    /// `column + amount`
    AddConstant { column: String, amount: f64 },
}

impl Default for Transform {
    fn default() -> Self {
        Self::UppercaseColumn {
            column: "name".to_string(),
        }
    }
}

impl Transform {
    pub fn column(&self) -> &str {
        match self {
            Self::UppercaseColumn { column } | Self::AddConstant { column, .. } => column,
        }
    }

    /// Builds the projection that replaces the target column in `source`.
    ///
    /// Column lookup is case-sensitive and type-checked against the extracted schema.
    pub fn projection(&self, source: &str, columns: &[ColumnSchema]) -> Result<String, DomainError> {
        let source = validate_identifier(source)?;
        let column = validate_identifier(self.column())?;

        let schema = columns
            .iter()
            .find(|c| c.name == column)
            .ok_or_else(|| DomainError::ColumnNotFound(column.to_string()))?;

        let expr = match self {
            Self::UppercaseColumn { .. } => {
                if is_numeric_type(&schema.data_type) {
                    return Err(self.incompatible(schema));
                }
                // Sniffed dates or booleans are still text in the file.
                if is_text_type(&schema.data_type) {
                    format!("upper({})", quote_ident(column))
                } else {
                    format!("upper(CAST({} AS VARCHAR))", quote_ident(column))
                }
            }
            Self::AddConstant { amount, .. } => {
                if !is_numeric_type(&schema.data_type) {
                    return Err(self.incompatible(schema));
                }
                format!("({} + {})", quote_ident(column), format_amount(*amount))
            }
        };

        Ok(format!(
            "SELECT * REPLACE ({} AS {}) FROM {}",
            expr,
            quote_ident(column),
            quote_ident(source)
        ))
    }

    fn incompatible(&self, schema: &ColumnSchema) -> DomainError {
        DomainError::IncompatibleColumn {
            column: schema.name.clone(),
            data_type: schema.data_type.clone(),
            transform: self.to_string(),
        }
    }
}

fn is_text_type(data_type: &str) -> bool {
    let t = data_type.to_uppercase();
    t == "VARCHAR" || t == "TEXT" || t == "STRING"
}

fn is_numeric_type(data_type: &str) -> bool {
    const NUMERIC: [&str; 13] = [
        "TINYINT", "SMALLINT", "INTEGER", "BIGINT", "HUGEINT", "UTINYINT", "USMALLINT",
        "UINTEGER", "UBIGINT", "UHUGEINT", "FLOAT", "DOUBLE", "REAL",
    ];
    let t = data_type.to_uppercase();
    NUMERIC.contains(&t.as_str()) || t.starts_with("DECIMAL")
}

// Whole amounts render without a fractional part so integer columns stay integers.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UppercaseColumn { column } => write!(f, "upper:{}", column),
            Self::AddConstant { column, amount } => {
                write!(f, "add:{}:{}", column, format_amount(*amount))
            }
        }
    }
}

impl FromStr for Transform {
    type Err = DomainError;

    /// `upper:<column>` or `add:<column>:<amount>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidTransform(s.to_string());
        let parts: Vec<&str> = s.trim().split(':').collect();

        match parts.as_slice() {
            [op, column] if op.eq_ignore_ascii_case("upper") => Ok(Self::UppercaseColumn {
                column: validate_identifier(column)?.to_string(),
            }),
            [op, column, amount] if op.eq_ignore_ascii_case("add") => {
                let amount: f64 = amount.trim().parse().map_err(|_| invalid())?;
                if !amount.is_finite() {
                    return Err(invalid());
                }
                Ok(Self::AddConstant {
                    column: validate_identifier(column)?.to_string(),
                    amount,
                })
            }
            _ => Err(invalid()),
        }
    }
}
