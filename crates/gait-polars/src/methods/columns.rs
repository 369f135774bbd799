//! Typed extraction of input columns

use polars::prelude::*;

use crate::{Error, Result};

fn lookup<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

fn reject_nulls(column: &Column, name: &str) -> Result<()> {
    match column.null_count() {
        0 => Ok(()),
        n => Err(Error::InvalidInput(format!(
            "column '{}' contains {} null values",
            name, n
        ))),
    }
}

fn type_mismatch(name: &str, expected: &str, got: &DataType) -> Error {
    Error::TypeMismatch {
        column: name.to_string(),
        expected: expected.to_string(),
        got: format!("{:?}", got),
    }
}

/// Integer codes from an integer column, or a float column of whole numbers
pub(crate) fn integer_codes(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let column = lookup(df, name)?;
    let dtype = column.dtype();
    if !(dtype.is_integer() || dtype.is_float()) {
        return Err(type_mismatch(name, "numeric", dtype));
    }
    reject_nulls(column, name)?;

    if dtype.is_float() {
        // The Int64 cast truncates, which would merge 0.5 into the rest code
        let values = column.cast(&DataType::Float64)?;
        let fractional = values
            .f64()?
            .into_no_null_iter()
            .enumerate()
            .find(|(_, v)| v.fract() != 0.0);
        if let Some((row, value)) = fractional {
            return Err(Error::InvalidInput(format!(
                "column '{}' holds non-integral code {} at row {}",
                name, value, row
            )));
        }
    }

    let cast = column.cast(&DataType::Int64)?;
    if cast.null_count() > 0 {
        return Err(Error::InvalidInput(format!(
            "column '{}' holds {} codes outside the Int64 range",
            name,
            cast.null_count()
        )));
    }
    Ok(cast.i64()?.into_no_null_iter().collect())
}

/// Borrowed labels from a string column
pub(crate) fn labels<'a>(df: &'a DataFrame, name: &str) -> Result<Vec<&'a str>> {
    let column = lookup(df, name)?;
    if column.dtype() != &DataType::String {
        return Err(type_mismatch(name, "String", column.dtype()));
    }
    reject_nulls(column, name)?;
    Ok(column.str()?.into_no_null_iter().collect())
}

/// Flags from a boolean column
pub(crate) fn flags(df: &DataFrame, name: &str) -> Result<Vec<bool>> {
    let column = lookup(df, name)?;
    if column.dtype() != &DataType::Boolean {
        return Err(type_mismatch(name, "Boolean", column.dtype()));
    }
    reject_nulls(column, name)?;
    Ok(column.bool()?.into_no_null_iter().collect())
}

/// Optional labels from a string column, nulls preserved
pub(crate) fn nullable_labels<'a>(df: &'a DataFrame, name: &str) -> Result<Vec<Option<&'a str>>> {
    let column = lookup(df, name)?;
    if column.dtype() != &DataType::String {
        return Err(type_mismatch(name, "String", column.dtype()));
    }
    Ok(column.str()?.into_iter().collect())
}
