use crate::domain::models::JsonOut;
use serde::Serialize;

fn emit_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// Print a list as one text row per item, or as a single JSON envelope.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        emit_json(data)
    } else {
        for d in data {
            println!("{}", row(d));
        }
        Ok(())
    }
}

/// Print a single report as one text row, or as a JSON envelope.
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        emit_json(data)
    } else {
        println!("{}", row(&data));
        Ok(())
    }
}
