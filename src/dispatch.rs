use crate::constants::{MODE_IMAGE, MODE_QUIZ};
use crate::palette::{api_url, extract_palette, generate_palette};
use reqwest::Client;
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Write};

/// Runs one invocation: prints exactly one JSON line to stdout and returns
/// the process exit code. Progress text goes to stderr only.
pub async fn run(client: &Client, args: &[String]) -> i32 {
    let url = api_url();
    let (line, code) = dispatch(client, args, &url).await;
    println!("{}", line);
    let _ = io::stdout().flush();
    code
}

pub async fn dispatch(client: &Client, args: &[String], api_url: &str) -> (String, i32) {
    if args.len() < 3 {
        let line = json!({ "error": "Missing arguments: type and data_path" }).to_string();
        return (line, 1);
    }
    let mode = args[1].as_str();
    let data_path = args[2].as_str();
    eprintln!("Starting palette helper - type: {}", mode);
    eprintln!("Data path: {}", data_path);

    let data: Value = match load_data(data_path) {
        Ok(data) => data,
        Err(e) => {
            let line = json!({ "error": format!("Failed to read or parse data file: {}", e) })
                .to_string();
            return (line, 1);
        }
    };
    eprintln!("Loaded data successfully");

    let result = match mode {
        MODE_IMAGE => match data
            .get("image_base64")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
        {
            Some(image_base64) => extract_palette(client, api_url, image_base64).await,
            None => json!({ "error": "Missing 'image_base64' in data." }).to_string(),
        },
        MODE_QUIZ => generate_palette(client, api_url, &data).await,
        other => json!({ "error": format!("Unknown type: {}", other) }).to_string(),
    };
    (result, 0)
}

fn load_data(data_path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(data_path)?;
    Ok(serde_json::from_str(&text)?)
}
