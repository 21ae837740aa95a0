//! Demo: wires records and a configuration into gridlet and prints the
//! result to the terminal.

use console::Style;
use gridlet::style::styled;
use gridlet::{render, render_serialize, BorderStyle, TableConfig, TableError};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct Release {
    name: String,
    version: String,
    downloads: u64,
}

fn main() -> Result<(), TableError> {
    let releases = vec![
        Release {
            name: "gridlet".into(),
            version: "0.1.0".into(),
            downloads: 1204,
        },
        Release {
            name: "standout".into(),
            version: "7.6.2".into(),
            downloads: 88412,
        },
    ];

    // Typed rows with the default configuration.
    let table = render_serialize(&releases, &TableConfig::new())?;
    println!("{}", table);
    println!();

    // Hand-built heterogeneous records: the second one lacks "age".
    let records = vec![
        json!({"name": "Foo", "age": 12}),
        json!({"name": "Bar"}),
    ]
    .into_iter()
    .filter_map(|v| v.as_object().cloned())
    .collect::<Vec<_>>();

    let config = TableConfig::new()
        .padding(2)
        .border(BorderStyle::Rounded)
        .header(styled(Style::new().magenta().bold()));
    println!("{}", render(&records, &config));

    Ok(())
}
